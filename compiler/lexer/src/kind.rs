#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum Kind {
    // Miscellaneous
    Eof,
    /// Placeholder discriminant with no spelling; never produced by the
    /// lexer, used by consumers that need a "no token" marker.
    #[default]
    Illegal,
    /// Carries the raw text the lexer could not classify.
    LexError,
    Identifier,

    // Single character tokens
    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LSquirly,
    RSquirly,
    Semicolon,
    Comma,
    Colon,
    Period,

    // Operators
    Plus,
    Bang,
    Dash,
    Slash,
    Percent,
    Ampersand,
    Pipe,
    Xor,
    Tilde,
    Asterisk,
    Gt,
    Lt,
    Assign,

    // Double character tokens
    Accessor,
    FatArrow,
    Arrow,
    Chevron,

    // Operators
    Shl,
    Shr,
    Gte,
    Lte,
    Equal,
    NotEqual,
    LogicalAnd,
    LogicalOr,
    Increment,
    Decrement,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    AndAssign,
    OrAssign,
    XorAssign,

    // Triple character operators
    ShlAssign,
    ShrAssign,

    // Keywords
    LetKw,
    IfKw,
    ForKw,
    ElseKw,
    PubKw,
    NewKw,
    WhileKw,
    OutKw,
    FuncKw,
    ModuleKw,
    ImportKw,
    DefKw,
    ContinueKw,
    BreakKw,
    ReturnKw,
    SizeofKw,
    UnionKw,
    StructKw,
    EnumKw,

    // Literals
    IntLiteral,
    FloatLiteral,
    StringLiteral,
    TrueLiteral,
    FalseLiteral,
}

impl Kind {
    /// Canonical spelling of a fixed keyword/punctuation discriminant.
    ///
    /// `None` for everything whose text varies per token (identifiers,
    /// literals) and for the marker discriminants (`Eof`, `Illegal`,
    /// `LexError`).
    pub fn static_text(self) -> Option<&'static str> {
        let text = match self {
            Kind::LParen => "(",
            Kind::RParen => ")",
            Kind::LBracket => "[",
            Kind::RBracket => "]",
            Kind::LSquirly => "{",
            Kind::RSquirly => "}",
            Kind::Semicolon => ";",
            Kind::Comma => ",",
            Kind::Colon => ":",
            Kind::Period => ".",

            Kind::Plus => "+",
            Kind::Bang => "!",
            Kind::Dash => "-",
            Kind::Slash => "/",
            Kind::Percent => "%",
            Kind::Ampersand => "&",
            Kind::Pipe => "|",
            Kind::Xor => "^",
            Kind::Tilde => "~",
            Kind::Asterisk => "*",
            Kind::Gt => ">",
            Kind::Lt => "<",
            Kind::Assign => "=",

            Kind::Accessor => "::",
            Kind::FatArrow => "=>",
            Kind::Arrow => "->",
            Kind::Chevron => "|>",

            Kind::Shl => "<<",
            Kind::Shr => ">>",
            Kind::Gte => ">=",
            Kind::Lte => "<=",
            Kind::Equal => "==",
            Kind::NotEqual => "!=",
            Kind::LogicalAnd => "&&",
            Kind::LogicalOr => "||",
            Kind::Increment => "++",
            Kind::Decrement => "--",
            Kind::AddAssign => "+=",
            Kind::SubAssign => "-=",
            Kind::MulAssign => "*=",
            Kind::DivAssign => "/=",
            Kind::ModAssign => "%=",
            Kind::AndAssign => "&=",
            Kind::OrAssign => "|=",
            Kind::XorAssign => "^=",

            Kind::ShlAssign => "<<=",
            Kind::ShrAssign => ">>=",

            Kind::LetKw => "let",
            Kind::IfKw => "if",
            Kind::ForKw => "for",
            Kind::ElseKw => "else",
            Kind::PubKw => "pub",
            Kind::NewKw => "new",
            Kind::WhileKw => "while",
            Kind::OutKw => "out",
            Kind::FuncKw => "func",
            Kind::ModuleKw => "module",
            Kind::ImportKw => "import",
            Kind::DefKw => "def",
            Kind::ContinueKw => "continue",
            Kind::BreakKw => "break",
            Kind::ReturnKw => "return",
            Kind::SizeofKw => "sizeof",
            Kind::UnionKw => "union",
            Kind::StructKw => "struct",
            Kind::EnumKw => "enum",

            Kind::TrueLiteral => "true",
            Kind::FalseLiteral => "false",

            _ => return None,
        };

        Some(text)
    }

    /// Reverse of [`static_text`](Kind::static_text) for word-shaped
    /// spellings: keyword or boolean-literal discriminant for `ident`.
    pub fn keyword(ident: &str) -> Option<Kind> {
        // All keywords are between 2 and 8 characters long
        if ident.len() < 2 || ident.len() > 8 {
            return None;
        }

        let kind = match ident {
            "let" => Kind::LetKw,
            "if" => Kind::IfKw,
            "for" => Kind::ForKw,
            "else" => Kind::ElseKw,
            "pub" => Kind::PubKw,
            "new" => Kind::NewKw,
            "while" => Kind::WhileKw,
            "out" => Kind::OutKw,
            "func" => Kind::FuncKw,
            "module" => Kind::ModuleKw,
            "import" => Kind::ImportKw,
            "def" => Kind::DefKw,
            "continue" => Kind::ContinueKw,
            "break" => Kind::BreakKw,
            "return" => Kind::ReturnKw,
            "sizeof" => Kind::SizeofKw,
            "union" => Kind::UnionKw,
            "struct" => Kind::StructKw,
            "enum" => Kind::EnumKw,
            "true" => Kind::TrueLiteral,
            "false" => Kind::FalseLiteral,
            _ => return None,
        };

        Some(kind)
    }

    /// Short human label for diagnostics ("expected an id, found ...").
    /// Falls back to the canonical spelling for keywords/punctuation.
    pub fn description(self) -> &'static str {
        match self {
            Kind::Eof => "EOF",
            Kind::Identifier => "id",
            Kind::StringLiteral => "string literal",
            Kind::IntLiteral => "int literal",
            Kind::FloatLiteral => "float literal",
            Kind::TrueLiteral => "true literal",
            Kind::FalseLiteral => "false literal",
            kind => kind.static_text().unwrap_or("UNKNOWN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_descriptions_are_fixed() {
        assert_eq!(Kind::Eof.description(), "EOF");
        assert_eq!(Kind::Identifier.description(), "id");
        assert_eq!(Kind::StringLiteral.description(), "string literal");
        assert_eq!(Kind::IntLiteral.description(), "int literal");
        assert_eq!(Kind::FloatLiteral.description(), "float literal");
        assert_eq!(Kind::TrueLiteral.description(), "true literal");
        assert_eq!(Kind::FalseLiteral.description(), "false literal");
    }

    #[test]
    fn description_falls_back_to_spelling() {
        assert_eq!(Kind::LetKw.description(), "let");
        assert_eq!(Kind::FatArrow.description(), "=>");
        assert_eq!(Kind::ShlAssign.description(), "<<=");
    }

    #[test]
    fn description_of_unmapped_kind() {
        assert_eq!(Kind::Illegal.description(), "UNKNOWN");
        assert_eq!(Kind::LexError.description(), "UNKNOWN");
    }

    #[test]
    fn static_text_covers_fixed_tokens_only() {
        assert_eq!(Kind::LParen.static_text(), Some("("));
        assert_eq!(Kind::Accessor.static_text(), Some("::"));
        assert_eq!(Kind::StructKw.static_text(), Some("struct"));
        assert_eq!(Kind::TrueLiteral.static_text(), Some("true"));

        assert_eq!(Kind::Identifier.static_text(), None);
        assert_eq!(Kind::StringLiteral.static_text(), None);
        assert_eq!(Kind::Eof.static_text(), None);
        assert_eq!(Kind::LexError.static_text(), None);
    }

    #[test]
    fn keyword_lookup_round_trips() {
        for kind in [
            Kind::LetKw,
            Kind::ContinueKw,
            Kind::EnumKw,
            Kind::TrueLiteral,
            Kind::FalseLiteral,
        ] {
            let text = kind.static_text().unwrap();
            assert_eq!(Kind::keyword(text), Some(kind));
        }

        assert_eq!(Kind::keyword("letx"), None);
        assert_eq!(Kind::keyword("x"), None);
        assert_eq!(Kind::keyword("bananarama"), None);
    }
}
