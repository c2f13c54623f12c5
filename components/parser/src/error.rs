//! Parser error helpers

use core_types::{ParseError, Token, TokenKind};

/// A consumed token had the wrong kind
pub fn unexpected_kind(expected: TokenKind, found: &Token) -> ParseError {
    ParseError::UnexpectedTokenKind {
        expected,
        found: found.clone(),
    }
}

/// A consumed token had the right kind but the wrong text
pub fn unexpected_value(expected: &str, found: &Token) -> ParseError {
    ParseError::UnexpectedTokenValue {
        expected: expected.to_string(),
        found: found.clone(),
    }
}

/// No grammar rule starts with this token
pub fn unexpected_token(found: &Token) -> ParseError {
    ParseError::UnexpectedToken {
        found: found.clone(),
    }
}

/// Assignment to something other than a bare name
pub fn invalid_assignment(target: &Token) -> ParseError {
    ParseError::InvalidAssignmentTarget {
        target: target.clone(),
    }
}
