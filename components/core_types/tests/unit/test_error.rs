//! Unit tests for LexError, ParseError and SyntaxError

use core_types::{LexError, ParseError, SourcePosition, SyntaxError, Token, TokenKind};

fn at(line: u32, column: u32) -> SourcePosition {
    SourcePosition {
        line,
        column,
        offset: 0,
    }
}

#[cfg(test)]
mod lex_error_tests {
    use super::*;

    #[test]
    fn test_repeated_operator_message() {
        let err = LexError::RepeatedOperator {
            operator: "====".to_string(),
            position: at(1, 3),
        };

        assert_eq!(err.to_string(), "unexpected token '====' at 1:3");
    }

    #[test]
    fn test_unterminated_string_position() {
        let err = LexError::UnterminatedString {
            quote: '"',
            position: at(5, 1),
        };

        assert_eq!(err.position(), at(5, 1));
        assert!(err.to_string().contains("unterminated string"));
    }
}

#[cfg(test)]
mod parse_error_tests {
    use super::*;

    #[test]
    fn test_unexpected_value_message() {
        let err = ParseError::UnexpectedTokenValue {
            expected: "=".to_string(),
            found: Token::operator("+", at(1, 7)),
        };

        assert_eq!(err.to_string(), "expected '=' but got operator '+' at 1:7");
    }

    #[test]
    fn test_invalid_assignment_target_message() {
        let err = ParseError::InvalidAssignmentTarget {
            target: Token::new(TokenKind::String, "abc", at(1, 1)),
        };

        assert_eq!(
            err.to_string(),
            "invalid left-hand side in assignment: string 'abc' at 1:1"
        );
    }

    #[test]
    fn test_unexpected_eof_message() {
        let err = ParseError::UnexpectedToken {
            found: Token::eof(at(3, 4)),
        };

        assert_eq!(err.to_string(), "unexpected end of input at 3:4");
    }
}

#[cfg(test)]
mod syntax_error_tests {
    use super::*;

    #[test]
    fn test_syntax_error_wraps_stage_message() {
        let err: SyntaxError = LexError::UnexpectedCharacter {
            character: '@',
            position: at(1, 1),
        }
        .into();

        assert_eq!(
            err.to_string(),
            "lexical error: unexpected character '@' at 1:1"
        );
    }

    #[test]
    fn test_syntax_error_source_chain() {
        use std::error::Error;

        let err: SyntaxError = ParseError::UnexpectedToken {
            found: Token::new(TokenKind::RCurly, "}", at(2, 1)),
        }
        .into();

        assert!(err.source().is_some());
    }
}
