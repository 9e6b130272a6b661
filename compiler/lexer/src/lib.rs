pub use kind::Kind;
pub use lexer::Lexer;
pub use lexint::LexInt;
pub use source::{Source, SourceId, SourceSet};
pub use token::{Payload, Token};

mod kind;
mod lexer;
mod lexint;
mod source;
mod token;

#[cfg(test)]
mod tests {
    use diagnostics::errors::lexer::LexerError;
    use interner::Interner;

    use super::*;

    fn assert_token(
        token: Result<Token, LexerError>,
        interner: &Interner,
        kind: Kind,
        printed: &str,
    ) {
        match token {
            Ok(mut token) => {
                assert_eq!(token.kind(), kind);
                assert_eq!(token.print(interner), printed);
            }
            Err(err) => panic!("token is an Err: {err:?}"),
        }
    }

    fn lex_setup(input: &str) -> (SourceSet, SourceId, Interner) {
        let mut sources = SourceSet::new();
        let id = sources.add("test.tr", input);
        (sources, id, Interner::with_capacity(64))
    }

    #[test]
    fn test_single_char_tokens() {
        let (sources, id, mut interner) = lex_setup("()[]{};,:.");
        let mut lexer = Lexer::new(sources.get(id), id);
        let expected = vec![
            (Kind::LParen, "("),
            (Kind::RParen, ")"),
            (Kind::LBracket, "["),
            (Kind::RBracket, "]"),
            (Kind::LSquirly, "{"),
            (Kind::RSquirly, "}"),
            (Kind::Semicolon, ";"),
            (Kind::Comma, ","),
            (Kind::Colon, ":"),
            (Kind::Period, "."),
        ];

        for (kind, printed) in expected {
            let token = lexer.read_next(&mut interner);
            assert_token(token, &interner, kind, printed);
        }
    }

    #[test]
    fn test_single_char_operators() {
        let (sources, id, mut interner) = lex_setup("~+-*/%^!&|< > =");
        let mut lexer = Lexer::new(sources.get(id), id);
        let expected = vec![
            (Kind::Tilde, "~"),
            (Kind::Plus, "+"),
            (Kind::Dash, "-"),
            (Kind::Asterisk, "*"),
            (Kind::Slash, "/"),
            (Kind::Percent, "%"),
            (Kind::Xor, "^"),
            (Kind::Bang, "!"),
            (Kind::Ampersand, "&"),
            (Kind::Pipe, "|"),
            (Kind::Lt, "<"),
            (Kind::Gt, ">"),
            (Kind::Assign, "="),
        ];

        for (kind, printed) in expected {
            let token = lexer.read_next(&mut interner);
            assert_token(token, &interner, kind, printed);
        }
    }

    #[test]
    fn test_double_char_operators() {
        let (sources, id, mut interner) =
            lex_setup("+= -= -- ++ *= /= %= ^= != == &= |= << >> >= <= && ||");
        let mut lexer = Lexer::new(sources.get(id), id);
        let expected = vec![
            (Kind::AddAssign, "+="),
            (Kind::SubAssign, "-="),
            (Kind::Decrement, "--"),
            (Kind::Increment, "++"),
            (Kind::MulAssign, "*="),
            (Kind::DivAssign, "/="),
            (Kind::ModAssign, "%="),
            (Kind::XorAssign, "^="),
            (Kind::NotEqual, "!="),
            (Kind::Equal, "=="),
            (Kind::AndAssign, "&="),
            (Kind::OrAssign, "|="),
            (Kind::Shl, "<<"),
            (Kind::Shr, ">>"),
            (Kind::Gte, ">="),
            (Kind::Lte, "<="),
            (Kind::LogicalAnd, "&&"),
            (Kind::LogicalOr, "||"),
        ];

        for (kind, printed) in expected {
            let token = lexer.read_next(&mut interner);
            assert_token(token, &interner, kind, printed);
        }
    }

    #[test]
    fn test_double_char_tokens() {
        let (sources, id, mut interner) = lex_setup(":: -> |> =>");
        let mut lexer = Lexer::new(sources.get(id), id);
        let expected = vec![
            (Kind::Accessor, "::"),
            (Kind::Arrow, "->"),
            (Kind::Chevron, "|>"),
            (Kind::FatArrow, "=>"),
        ];

        for (kind, printed) in expected {
            let token = lexer.read_next(&mut interner);
            assert_token(token, &interner, kind, printed);
        }
    }

    #[test]
    fn test_triple_char_operators() {
        let (sources, id, mut interner) = lex_setup("<<= >>=");
        let mut lexer = Lexer::new(sources.get(id), id);
        let expected = vec![(Kind::ShlAssign, "<<="), (Kind::ShrAssign, ">>=")];

        for (kind, printed) in expected {
            let token = lexer.read_next(&mut interner);
            assert_token(token, &interner, kind, printed);
        }
    }

    #[test]
    fn test_keywords_and_bool_literals() {
        let (sources, id, mut interner) = lex_setup(
            "let if for else pub new while out func module import def continue break return sizeof union struct enum true false",
        );
        let mut lexer = Lexer::new(sources.get(id), id);
        let expected = vec![
            (Kind::LetKw, "let"),
            (Kind::IfKw, "if"),
            (Kind::ForKw, "for"),
            (Kind::ElseKw, "else"),
            (Kind::PubKw, "pub"),
            (Kind::NewKw, "new"),
            (Kind::WhileKw, "while"),
            (Kind::OutKw, "out"),
            (Kind::FuncKw, "func"),
            (Kind::ModuleKw, "module"),
            (Kind::ImportKw, "import"),
            (Kind::DefKw, "def"),
            (Kind::ContinueKw, "continue"),
            (Kind::BreakKw, "break"),
            (Kind::ReturnKw, "return"),
            (Kind::SizeofKw, "sizeof"),
            (Kind::UnionKw, "union"),
            (Kind::StructKw, "struct"),
            (Kind::EnumKw, "enum"),
            (Kind::TrueLiteral, "true"),
            (Kind::FalseLiteral, "false"),
        ];

        for (kind, printed) in expected {
            let token = lexer.read_next(&mut interner);
            assert_token(token, &interner, kind, printed);
        }
    }

    #[test]
    fn test_floats() {
        let (sources, id, mut interner) = lex_setup("45.4349 679.39 0.5 0.569 3206.4 .542 7e2 7e-8 3.6e-2");
        let mut lexer = Lexer::new(sources.get(id), id);
        let expected = vec![
            (Kind::FloatLiteral, "45.4349"),
            (Kind::FloatLiteral, "679.39"),
            (Kind::FloatLiteral, "0.5"),
            (Kind::FloatLiteral, "0.569"),
            (Kind::FloatLiteral, "3206.4"),
            (Kind::FloatLiteral, "0.542"),
            (Kind::FloatLiteral, "700.0"),
            (Kind::FloatLiteral, "0.00000007"),
            (Kind::FloatLiteral, "0.036"),
        ];

        for (kind, printed) in expected {
            let token = lexer.read_next(&mut interner);
            assert_token(token, &interner, kind, printed);
        }
    }

    #[test]
    fn test_ints() {
        let (sources, id, mut interner) = lex_setup("45 679 3206 0 1_000 459");
        let mut lexer = Lexer::new(sources.get(id), id);
        let expected = vec![
            (Kind::IntLiteral, "45"),
            (Kind::IntLiteral, "679"),
            (Kind::IntLiteral, "3206"),
            (Kind::IntLiteral, "0"),
            (Kind::IntLiteral, "1000"),
            (Kind::IntLiteral, "459"),
        ];

        for (kind, printed) in expected {
            let token = lexer.read_next(&mut interner);
            assert_token(token, &interner, kind, printed);
        }
    }

    #[test]
    fn test_int_wider_than_64_bits() {
        // 2^64; the printed form must not truncate to the low limb.
        let (sources, id, mut interner) = lex_setup("18446744073709551616");
        let mut lexer = Lexer::new(sources.get(id), id);

        let token = lexer.read_next(&mut interner);
        assert_token(token, &interner, Kind::IntLiteral, "18446744073709551616");
    }

    #[test]
    fn test_int_overflow_is_an_error() {
        // 2^128 does not fit.
        let (sources, id, mut interner) = lex_setup("340282366920938463463374607431768211456");
        let mut lexer = Lexer::new(sources.get(id), id);

        let token = lexer.read_next(&mut interner);
        assert!(matches!(token, Err(LexerError::IntOverflow(_))));
    }

    #[test]
    fn test_identifiers_and_strings_are_interned() {
        let (sources, id, mut interner) = lex_setup("foo \"bar baz\" foo");
        let mut lexer = Lexer::new(sources.get(id), id);

        let first = lexer.read_next(&mut interner).unwrap();
        assert_eq!(first.kind(), Kind::Identifier);
        assert_eq!(first.text(&interner), "foo");
        assert_eq!(first.text_len(), 3);

        let string = lexer.read_next(&mut interner).unwrap();
        assert_eq!(string.kind(), Kind::StringLiteral);
        assert_eq!(string.text(&interner), "bar baz");

        let second = lexer.read_next(&mut interner).unwrap();
        assert_eq!(second.payload(), first.payload());
    }

    #[test]
    fn test_unterminated_string_is_an_error() {
        let (sources, id, mut interner) = lex_setup("\"no closing quote\nlet");
        let mut lexer = Lexer::new(sources.get(id), id);

        let token = lexer.read_next(&mut interner);
        assert!(matches!(token, Err(LexerError::UnterminatedString(_))));
    }

    #[test]
    fn test_unknown_character_becomes_lex_error_token() {
        let (sources, id, mut interner) = lex_setup("let @ x");
        let mut lexer = Lexer::new(sources.get(id), id);

        let token = lexer.read_next(&mut interner);
        assert_token(token, &interner, Kind::LetKw, "let");

        let token = lexer.read_next(&mut interner);
        assert_token(token, &interner, Kind::LexError, "LEX_ERROR");

        let token = lexer.read_next(&mut interner);
        assert_token(token, &interner, Kind::Identifier, "x");
    }

    #[test]
    fn test_positions_are_one_based_and_track_lines() {
        let (sources, id, mut interner) = lex_setup("let x\n  = 1;\n");
        let mut lexer = Lexer::new(sources.get(id), id);

        let expected = vec![
            (Kind::LetKw, 1, 1),
            (Kind::Identifier, 1, 5),
            (Kind::Assign, 2, 3),
            (Kind::IntLiteral, 2, 5),
            (Kind::Semicolon, 2, 6),
            (Kind::Eof, 3, 1),
        ];

        for (kind, line, pos) in expected {
            let token = lexer.read_next(&mut interner).unwrap();
            assert_eq!(token.kind(), kind);
            assert_eq!(token.source(), Some(id));
            assert_eq!((token.line(), token.pos()), (line, pos), "for {kind:?}");
        }
    }

    #[test]
    fn test_eof_repeats_forever() {
        let (sources, id, mut interner) = lex_setup("");
        let mut lexer = Lexer::new(sources.get(id), id);

        for _ in 0..3 {
            let token = lexer.read_next(&mut interner).unwrap();
            assert_eq!(token.kind(), Kind::Eof);
        }
    }

    #[test]
    fn test_comments_are_skipped() {
        let (sources, id, mut interner) = lex_setup("# heading\nlet # trailing\nx");
        let mut lexer = Lexer::new(sources.get(id), id);

        let token = lexer.read_next(&mut interner);
        assert_token(token, &interner, Kind::LetKw, "let");

        let token = lexer.read_next(&mut interner).unwrap();
        assert_eq!(token.kind(), Kind::Identifier);
        assert_eq!(token.line(), 3);
    }

    #[test]
    fn test_escaped_diagnostics_end_to_end() {
        let (sources, id, mut interner) = lex_setup("\"back\\slash\"");
        let mut lexer = Lexer::new(sources.get(id), id);

        // The lexer stores string content verbatim; escaping is a
        // presentation concern.
        let mut token = lexer.read_next(&mut interner).unwrap();
        assert_eq!(token.kind(), Kind::StringLiteral);
        assert_eq!(token.text(&interner), "back\\slash");

        let escaped = token.print_escaped(&interner);
        assert_eq!(escaped, "back\\\\slash");
        assert_eq!(escaped.len(), token.text_len() + 1);
    }
}
