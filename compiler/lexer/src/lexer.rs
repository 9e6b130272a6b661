use std::{ops::Range, str::Chars};

use diagnostics::errors::lexer::{
    IntegerOverflow, InvalidFloat, LexerError, UnexpectedCharacter, UnexpectedEnd,
    UnterminatedString,
};
use interner::Interner;

use crate::{Kind, LexInt, Source, SourceId, Token};

pub struct Lexer<'src> {
    source: &'src str,
    source_id: SourceId,
    chars: Chars<'src>,
    line: usize,
    line_start: usize,
}

#[derive(Debug)]
enum KindResult {
    Kind(Kind),
    Ignore,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src Source, source_id: SourceId) -> Self {
        Self {
            source: &source.content,
            source_id,
            chars: source.content.chars(),
            line: 1,
            line_start: 0,
        }
    }

    /// Reads the next token, stamping it with its source id and 1-based
    /// line/column. Returns an `Eof` token at the end of input, forever.
    pub fn read_next(&mut self, interner: &mut Interner) -> Result<Token, LexerError> {
        loop {
            let start = self.offset();
            let start_line = self.line;
            let start_pos = start - self.line_start + 1;

            let kind = match self.read_next_kind()? {
                KindResult::Ignore => continue,
                KindResult::Kind(kind) => kind,
            };

            let end = self.offset();
            let raw = &self.source[start..end];

            let mut token = Token::new(kind);
            token.set_position(Some(self.source_id), start_line, start_pos);
            self.set_token_value(&mut token, start..end, raw, interner)?;

            log::trace!("lexed {:?} at {start_line}:{start_pos}", token.kind());
            return Ok(token);
        }
    }

    fn read_next_kind(&mut self) -> Result<KindResult, LexerError> {
        while let Some(c) = self.peek() {
            match c {
                '"' => return self.read_string(),
                '#' => {
                    self.bump();

                    while let Some(ch) = self.peek() {
                        if ch == '\n' {
                            break;
                        }

                        self.bump();
                    }

                    self.bump();

                    return Ok(KindResult::Ignore);
                }
                ' ' | '\t' | '\r' | '\n' => {
                    self.bump();

                    while let Some(' ' | '\t' | '\r' | '\n') = self.peek() {
                        self.bump();
                    }

                    return Ok(KindResult::Ignore);
                }
                ';' => return self.flush_single(Kind::Semicolon),
                '(' => return self.flush_single(Kind::LParen),
                ')' => return self.flush_single(Kind::RParen),
                '{' => return self.flush_single(Kind::LSquirly),
                '}' => return self.flush_single(Kind::RSquirly),
                '[' => return self.flush_single(Kind::LBracket),
                ']' => return self.flush_single(Kind::RBracket),
                ',' => return self.flush_single(Kind::Comma),
                '~' => return self.flush_single(Kind::Tilde),
                ':' => match self.peek_n(1) {
                    Some(':') => return self.flush(Kind::Accessor, 2),
                    Some(_) | None => return self.flush_single(Kind::Colon),
                },
                '^' => match self.peek_n(1) {
                    Some('=') => return self.flush(Kind::XorAssign, 2),
                    Some(_) | None => return self.flush_single(Kind::Xor),
                },
                '&' => match self.peek_n(1) {
                    Some('&') => return self.flush(Kind::LogicalAnd, 2),
                    Some('=') => return self.flush(Kind::AndAssign, 2),
                    Some(_) | None => return self.flush_single(Kind::Ampersand),
                },
                '|' => match self.peek_n(1) {
                    Some('|') => return self.flush(Kind::LogicalOr, 2),
                    Some('=') => return self.flush(Kind::OrAssign, 2),
                    Some('>') => return self.flush(Kind::Chevron, 2),
                    Some(_) | None => return self.flush_single(Kind::Pipe),
                },
                '!' => match self.peek_n(1) {
                    Some('=') => return self.flush(Kind::NotEqual, 2),
                    Some(_) | None => return self.flush_single(Kind::Bang),
                },
                '=' => match self.peek_n(1) {
                    Some('>') => return self.flush(Kind::FatArrow, 2),
                    Some('=') => return self.flush(Kind::Equal, 2),
                    Some(_) | None => return self.flush_single(Kind::Assign),
                },
                '>' => match self.peek_n(1) {
                    Some('>') => match self.peek_n(2) {
                        Some('=') => return self.flush(Kind::ShrAssign, 3),
                        Some(_) | None => return self.flush(Kind::Shr, 2),
                    },
                    Some('=') => return self.flush(Kind::Gte, 2),
                    Some(_) | None => return self.flush_single(Kind::Gt),
                },
                '<' => match self.peek_n(1) {
                    Some('=') => return self.flush(Kind::Lte, 2),
                    Some('<') => match self.peek_n(2) {
                        Some('=') => return self.flush(Kind::ShlAssign, 3),
                        Some(_) | None => return self.flush(Kind::Shl, 2),
                    },
                    Some(_) | None => return self.flush_single(Kind::Lt),
                },
                '+' => match self.peek_n(1) {
                    Some('+') => return self.flush(Kind::Increment, 2),
                    Some('=') => return self.flush(Kind::AddAssign, 2),
                    Some(_) | None => return self.flush_single(Kind::Plus),
                },
                '-' => match self.peek_n(1) {
                    Some('>') => return self.flush(Kind::Arrow, 2),
                    Some('-') => return self.flush(Kind::Decrement, 2),
                    Some('=') => return self.flush(Kind::SubAssign, 2),
                    Some(_) | None => return self.flush_single(Kind::Dash),
                },
                '*' => match self.peek_n(1) {
                    Some('=') => return self.flush(Kind::MulAssign, 2),
                    Some(_) | None => return self.flush_single(Kind::Asterisk),
                },
                '/' => match self.peek_n(1) {
                    Some('=') => return self.flush(Kind::DivAssign, 2),
                    Some(_) | None => return self.flush_single(Kind::Slash),
                },
                '%' => match self.peek_n(1) {
                    Some('=') => return self.flush(Kind::ModAssign, 2),
                    Some(_) | None => return self.flush_single(Kind::Percent),
                },
                '.' => match self.peek_n(1) {
                    Some('0'..='9') => return self.read_float_after_period(),
                    Some(_) | None => return self.flush_single(Kind::Period),
                },
                'a'..='z' | 'A'..='Z' | '_' => return Ok(self.read_identifier()),
                '0' => return self.read_number_starting_with_zero(),
                '1'..='9' => return self.read_number_after_first_digit(),
                _ => {
                    // Anything unclassifiable becomes a lex-error token so
                    // the consumer can report it with a position.
                    self.bump();
                    return Ok(KindResult::Kind(Kind::LexError));
                }
            }
        }

        Ok(KindResult::Kind(Kind::Eof))
    }

    fn read_string(&mut self) -> Result<KindResult, LexerError> {
        let offset = self.offset();
        self.bump();

        while let Some(char) = self.peek() {
            if char == '"' || char == '\n' {
                break;
            }

            self.bump();
        }

        match self.peek() {
            Some('"') => {
                self.bump();
                Ok(KindResult::Kind(Kind::StringLiteral))
            }
            _ => {
                self.bump();
                Err(LexerError::UnterminatedString(UnterminatedString {
                    src: self.source.into(),
                    at: (offset..self.offset()).into(),
                    started_at: (offset..offset + 1).into(),
                }))
            }
        }
    }

    fn read_number_after_first_digit(&mut self) -> Result<KindResult, LexerError> {
        self.read_decimal_digits_after_first_digit()?;

        if let Some('.') = self.peek() {
            self.bump();
            return self.read_float_after_period_after_digits();
        };

        let has_exponent = self.read_optional_exponent()?;
        if has_exponent {
            Ok(KindResult::Kind(Kind::FloatLiteral))
        } else {
            Ok(KindResult::Kind(Kind::IntLiteral))
        }
    }

    fn read_number_starting_with_zero(&mut self) -> Result<KindResult, LexerError> {
        self.bump();

        match self.peek() {
            Some('.') => {
                self.bump();
                self.read_float_after_period_after_digits()?;
                Ok(KindResult::Kind(Kind::FloatLiteral))
            }
            Some('e' | 'E') => {
                self.bump();
                self.read_decimal_exponent()?;
                Ok(KindResult::Kind(Kind::FloatLiteral))
            }
            _ => Ok(KindResult::Kind(Kind::IntLiteral)),
        }
    }

    fn read_float_after_period_after_digits(&mut self) -> Result<KindResult, LexerError> {
        self.read_optional_decimal_digits()?;
        self.read_optional_exponent()?;

        Ok(KindResult::Kind(Kind::FloatLiteral))
    }

    fn read_optional_decimal_digits(&mut self) -> Result<(), LexerError> {
        if let Some('0'..='9') = self.peek() {
            self.bump();
        } else {
            return Ok(());
        }

        self.read_decimal_digits_after_first_digit()?;
        Ok(())
    }

    fn read_float_after_period(&mut self) -> Result<KindResult, LexerError> {
        self.bump(); // Consume the initial period

        self.read_decimal_digits()?;
        self.read_optional_exponent()?;

        Ok(KindResult::Kind(Kind::FloatLiteral))
    }

    fn read_decimal_digits(&mut self) -> Result<(), LexerError> {
        match self.peek() {
            Some('0'..='9') => {
                self.bump();
            }
            Some(_) => {
                let start = self.offset();
                self.bump();

                return Err(LexerError::UnexpectedChar(UnexpectedCharacter {
                    src: self.source.into(),
                    at: (start..self.offset()).into(),
                }));
            }
            None => {
                let start = self.offset();

                return Err(LexerError::UnexpectedEnd(UnexpectedEnd {
                    src: self.source.into(),
                    at: (start..start).into(),
                }));
            }
        }

        self.read_decimal_digits_after_first_digit()?;

        Ok(())
    }

    fn read_decimal_digits_after_first_digit(&mut self) -> Result<(), LexerError> {
        while let Some(next) = self.peek() {
            match next {
                '_' => {
                    self.bump();

                    if let Some('0'..='9') = self.peek() {
                        self.bump();
                    } else if self.peek().is_some() {
                        let start = self.offset();
                        self.bump();

                        return Err(LexerError::UnexpectedChar(UnexpectedCharacter {
                            src: self.source.into(),
                            at: (start..self.offset()).into(),
                        }));
                    };
                }
                '0'..='9' => {
                    self.bump();
                }
                _ => break,
            }
        }

        Ok(())
    }

    fn read_optional_exponent(&mut self) -> Result<bool, LexerError> {
        if let Some('e' | 'E') = self.peek() {
            self.bump();
            self.read_decimal_exponent()?;

            return Ok(true);
        }

        Ok(false)
    }

    fn read_decimal_exponent(&mut self) -> Result<(), LexerError> {
        if let Some('+' | '-') = self.peek() {
            self.bump();
        }

        self.read_decimal_digits()?;

        Ok(())
    }

    fn read_identifier(&mut self) -> KindResult {
        let start = self.offset();
        self.bump(); // Consume starting character

        while let Some('a'..='z' | 'A'..='Z' | '_' | '0'..='9') = self.peek() {
            self.bump();
        }

        let end = self.offset();

        let ident = &self.source[start..end];
        KindResult::Kind(Kind::keyword(ident).unwrap_or(Kind::Identifier))
    }

    /// Attaches the payload a token of this kind carries, if any.
    fn set_token_value(
        &self,
        token: &mut Token,
        span: Range<usize>,
        raw: &str,
        interner: &mut Interner,
    ) -> Result<(), LexerError> {
        match token.kind() {
            Kind::Identifier => token.set_text(interner, raw),

            // The payload is the literal's content, without the quotes.
            Kind::StringLiteral => token.set_text(interner, &raw[1..raw.len() - 1]),

            Kind::IntLiteral => {
                let mut value = LexInt::ZERO;

                for b in raw.bytes() {
                    if b == b'_' {
                        continue;
                    }

                    if !value.checked_accum(10, u64::from(b - b'0')) {
                        return Err(LexerError::IntOverflow(IntegerOverflow {
                            src: self.source.into(),
                            at: span.into(),
                        }));
                    }
                }

                token.set_int(value);
            }

            Kind::FloatLiteral => {
                let cleaned: String = raw.chars().filter(|&c| c != '_').collect();
                let parsed = cleaned.parse::<f64>().map_err(|_| {
                    LexerError::InvalidFloat(InvalidFloat {
                        src: self.source.into(),
                        at: span.into(),
                    })
                })?;

                token.set_float(parsed);
            }

            _ => {}
        }

        Ok(())
    }

    fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    fn peek_n(&self, n: usize) -> Option<char> {
        let mut chars = self.chars.clone();
        chars.nth(n)
    }

    fn flush_single(&mut self, kind: Kind) -> Result<KindResult, LexerError> {
        self.bump();
        Ok(KindResult::Kind(kind))
    }

    /// Consumes `advances` characters and returns the kind, so multi-char
    /// tokens don't repeat the same dance at every match arm.
    fn flush(&mut self, kind: Kind, advances: usize) -> Result<KindResult, LexerError> {
        for _ in 0..advances {
            self.bump();
        }

        Ok(KindResult::Kind(kind))
    }

    /// Advances one character, keeping the line/column bookkeeping honest.
    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next();

        if c == Some('\n') {
            self.line += 1;
            self.line_start = self.offset();
        }

        c
    }

    /// Get the length offset from the source text, in UTF-8 bytes
    fn offset(&self) -> usize {
        self.source.len() - self.chars.as_str().len()
    }
}
