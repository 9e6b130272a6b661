use std::fmt::Write;

use interner::{Atom, Interner};

use crate::{Kind, LexInt, SourceId};

/// Initial capacity of the lazily-allocated print cache. Synthesized
/// renderings (decimal integers, floats, unknown-token markers) all fit.
const PRINT_CACHE_CAPACITY: usize = 64;

/// Discriminant-dependent value carried by a token. Exactly one shape is
/// valid per [`Kind`]; the typed accessors on [`Token`] enforce that.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Payload {
    None,
    /// Interned text of an identifier or string literal. `len` is the byte
    /// length, kept alongside so it is readable without the interner.
    Text { atom: Atom, len: usize },
    Float(f64),
    Int(LexInt),
}

/// A single lexical unit: discriminant, source position, payload, and a
/// token-owned cache for synthesized print text.
///
/// Tokens are single-owner values. The print cache is released by `Drop`
/// and is never shared between duplicates.
#[derive(Debug)]
pub struct Token {
    kind: Kind,
    source: Option<SourceId>,
    line: usize,
    pos: usize,
    payload: Payload,
    printed: Option<String>,
}

impl Token {
    /// A fresh token of the given kind: no source, zeroed position, no
    /// payload, no print cache.
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            source: None,
            line: 0,
            pos: 0,
            payload: Payload::None,
            printed: None,
        }
    }

    /// Duplicate with the discriminant overwritten; used when a token is
    /// reclassified without re-deriving its position or payload.
    pub fn clone_with_kind(&self, kind: Kind) -> Self {
        let mut token = self.clone();
        token.kind = kind;
        token
    }

    // Read accessors

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn source(&self) -> Option<SourceId> {
        self.source
    }

    /// 1-based line within the source unit; 0 until positioned.
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column within the line; 0 until positioned.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Interned text of an identifier or string-literal token.
    ///
    /// # Panics
    /// On any other kind; a wrong-variant read is a contract violation,
    /// never a recoverable error.
    pub fn text<'a>(&self, interner: &'a Interner) -> &'a str {
        assert!(
            matches!(self.kind, Kind::Identifier | Kind::StringLiteral),
            "text() on {:?} token",
            self.kind
        );

        match self.payload {
            Payload::Text { atom, .. } => interner.lookup(atom),
            _ => panic!("{:?} token has no text payload", self.kind),
        }
    }

    /// Byte length of the text payload, without touching the interner.
    ///
    /// # Panics
    /// Same contract as [`text`](Token::text).
    pub fn text_len(&self) -> usize {
        assert!(
            matches!(self.kind, Kind::Identifier | Kind::StringLiteral),
            "text_len() on {:?} token",
            self.kind
        );

        match self.payload {
            Payload::Text { len, .. } => len,
            _ => panic!("{:?} token has no text payload", self.kind),
        }
    }

    /// # Panics
    /// Unless the token is a float literal.
    pub fn float_value(&self) -> f64 {
        match self.payload {
            Payload::Float(value) if self.kind == Kind::FloatLiteral => value,
            _ => panic!("float_value() on {:?} token", self.kind),
        }
    }

    /// # Panics
    /// Unless the token is an integer literal.
    pub fn int_value(&self) -> LexInt {
        match self.payload {
            Payload::Int(value) if self.kind == Kind::IntLiteral => value,
            _ => panic!("int_value() on {:?} token", self.kind),
        }
    }

    pub fn payload(&self) -> Payload {
        self.payload
    }

    // Write accessors

    pub fn set_kind(&mut self, kind: Kind) {
        self.kind = kind;
    }

    /// Interns `value` and stores the resulting atom. Only valid on
    /// identifier and string-literal tokens.
    pub fn set_text(&mut self, interner: &mut Interner, value: &str) {
        assert!(
            matches!(self.kind, Kind::Identifier | Kind::StringLiteral),
            "set_text() on {:?} token",
            self.kind
        );

        self.payload = Payload::Text {
            atom: interner.intern(value),
            len: value.len(),
        };
    }

    pub fn set_float(&mut self, value: f64) {
        assert!(
            self.kind == Kind::FloatLiteral,
            "set_float() on {:?} token",
            self.kind
        );

        self.payload = Payload::Float(value);
    }

    pub fn set_int(&mut self, value: LexInt) {
        assert!(
            self.kind == Kind::IntLiteral,
            "set_int() on {:?} token",
            self.kind
        );

        self.payload = Payload::Int(value);
    }

    /// Stamps line/column. The source handle is only replaced when one is
    /// supplied, so a token can be repositioned within its current unit.
    pub fn set_position(&mut self, source: Option<SourceId>, line: usize, pos: usize) {
        if let Some(source) = source {
            self.source = Some(source);
        }

        self.line = line;
        self.pos = pos;
    }

    // Printing

    /// Printable form of the token, for diagnostics.
    ///
    /// Fixed discriminants come back as static text, identifier/string
    /// payloads as the interned text, and everything that has to be
    /// synthesized (numbers, unknown discriminants) is formatted into the
    /// token-owned cache. The borrow is valid until the next mutation.
    pub fn print<'t>(&'t mut self, interner: &'t Interner) -> &'t str {
        match self.kind {
            Kind::Eof => "EOF",
            Kind::LexError => "LEX_ERROR",

            Kind::Identifier | Kind::StringLiteral => match self.payload {
                Payload::Text { atom, .. } => interner.lookup(atom),
                _ => panic!("{:?} token has no text payload", self.kind),
            },

            Kind::IntLiteral => {
                let value = match self.payload {
                    Payload::Int(value) => value,
                    _ => panic!("IntLiteral token has no integer payload"),
                };

                let cache = Self::cache_mut(&mut self.printed);
                let _ = write!(cache, "{}", value.as_u128());
                cache.as_str()
            }

            Kind::FloatLiteral => {
                let value = match self.payload {
                    Payload::Float(value) => value,
                    _ => panic!("FloatLiteral token has no float payload"),
                };

                let cache = Self::cache_mut(&mut self.printed);
                let _ = write!(cache, "{value}");

                // Keep every float visually distinct from an integer.
                if !cache.contains('.') && !cache.contains('e') {
                    cache.push_str(".0");
                }

                cache.as_str()
            }

            kind => {
                if let Some(text) = kind.static_text() {
                    return text;
                }

                let cache = Self::cache_mut(&mut self.printed);
                let _ = write!(cache, "Unknown_token_{}", kind as usize);
                cache.as_str()
            }
        }
    }

    /// Printable form with `"`, `\` and NUL escaped, for embedding in
    /// quoted diagnostic output. Always a fresh caller-owned string.
    ///
    /// Escapes are counted up front so the result is built with exactly
    /// one allocation of the final size.
    pub fn print_escaped(&mut self, interner: &Interner) -> String {
        let text = if self.kind == Kind::StringLiteral {
            match self.payload {
                Payload::Text { atom, .. } => interner.lookup(atom),
                _ => panic!("StringLiteral token has no text payload"),
            }
        } else {
            self.print(interner)
        };

        let escapes = text
            .bytes()
            .filter(|&b| b == b'"' || b == b'\\' || b == 0)
            .count();

        if escapes == 0 {
            return text.to_owned();
        }

        let mut escaped = String::with_capacity(text.len() + escapes);

        for c in text.chars() {
            match c {
                '"' | '\\' => {
                    escaped.push('\\');
                    escaped.push(c);
                }
                '\0' => {
                    escaped.push('\\');
                    escaped.push('0');
                }
                _ => escaped.push(c),
            }
        }

        escaped
    }

    /// Lazily allocates the print cache and clears it for reuse; the
    /// cached text of a previous call is overwritten, never appended to.
    fn cache_mut(printed: &mut Option<String>) -> &mut String {
        let cache = printed.get_or_insert_with(|| String::with_capacity(PRINT_CACHE_CAPACITY));
        cache.clear();
        cache
    }
}

/// Duplicates carry the discriminant, position, source handle and payload,
/// but always start with an empty print cache of their own.
impl Clone for Token {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            source: self.source,
            line: self.line,
            pos: self.pos,
            payload: self.payload,
            printed: None,
        }
    }
}

/// The print cache is presentation state, not identity; it is excluded
/// from comparisons.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.source == other.source
            && self.line == other.line
            && self.pos == other.pos
            && self.payload == other.payload
    }
}
