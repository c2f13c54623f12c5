//! Unit tests for Token and TokenKind

use core_types::{operator_precedence, Associativity, SourcePosition, Token, TokenKind};

#[cfg(test)]
mod token_kind_tests {
    use super::*;

    #[test]
    fn test_every_keyword_maps_to_its_kind() {
        let cases = [
            ("var", TokenKind::Var),
            ("function", TokenKind::Function),
            ("return", TokenKind::Return),
            ("if", TokenKind::If),
            ("else", TokenKind::Else),
            ("for", TokenKind::For),
            ("while", TokenKind::While),
            ("true", TokenKind::Boolean),
            ("false", TokenKind::Boolean),
        ];

        for (word, kind) in cases {
            assert_eq!(TokenKind::keyword(word), Some(kind), "keyword {}", word);
        }
    }

    #[test]
    fn test_non_keywords() {
        assert_eq!(TokenKind::keyword("Var"), None);
        assert_eq!(TokenKind::keyword("lambda"), None);
        assert_eq!(TokenKind::keyword(""), None);
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&TokenKind::LCurly).unwrap();
        assert_eq!(json, r#""l_curly""#);
        let json = serde_json::to_string(&TokenKind::Id).unwrap();
        assert_eq!(json, r#""id""#);
        let json = serde_json::to_string(&TokenKind::EOF).unwrap();
        assert_eq!(json, r#""eof""#);
    }
}

#[cfg(test)]
mod token_tests {
    use super::*;

    #[test]
    fn test_precedence_table() {
        assert_eq!(operator_precedence("+"), Some(2));
        assert_eq!(operator_precedence("-"), Some(2));
        assert_eq!(operator_precedence("*"), Some(3));
        assert_eq!(operator_precedence("/"), Some(3));
        assert_eq!(operator_precedence("%"), Some(3));
        assert_eq!(operator_precedence("=="), Some(2));
        assert_eq!(operator_precedence("**"), Some(2));
        assert_eq!(operator_precedence("!"), None);
    }

    #[test]
    fn test_plain_token_has_no_binding() {
        let token = Token::new(TokenKind::Number, "42", SourcePosition::start());

        assert!(token.is(TokenKind::Number));
        assert!(token.precedence.is_none());
        assert!(token.associativity.is_none());
        assert!(!token.is_binary_operator());
    }

    #[test]
    fn test_operator_token_is_left_associative() {
        let token = Token::operator("*", SourcePosition::start());

        assert!(token.is_binary_operator());
        assert_eq!(token.associativity, Some(Associativity::Left));
    }

    #[test]
    fn test_operator_serialization_includes_binding() {
        let token = Token::operator("-", SourcePosition::start());
        let json = serde_json::to_value(&token).unwrap();

        assert_eq!(json["kind"], "operator");
        assert_eq!(json["text"], "-");
        assert_eq!(json["precedence"], 2);
        assert_eq!(json["associativity"], "left");
    }

    #[test]
    fn test_plain_serialization_skips_binding() {
        let token = Token::new(TokenKind::Id, "x", SourcePosition::start());
        let json = serde_json::to_value(&token).unwrap();

        assert!(json.get("precedence").is_none());
        assert!(json.get("associativity").is_none());
    }
}
