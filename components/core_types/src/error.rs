//! Error families for scanning and parsing.
//!
//! Both families are terminal: the pipeline never recovers from them and
//! never returns a partial result alongside one.

use crate::{SourcePosition, Token, TokenKind};
use thiserror::Error;

/// Errors raised while scanning source text into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character outside every recognized character class
    #[error("unexpected character '{character}' at {position}")]
    UnexpectedCharacter {
        /// The offending character
        character: char,
        /// Where it was found
        position: SourcePosition,
    },

    /// A guarded operator repeated past its longest legal spelling (`+++`, `====`)
    #[error("unexpected token '{operator}' at {position}")]
    RepeatedOperator {
        /// The run of operator characters that tripped the guard
        operator: String,
        /// Start of the run
        position: SourcePosition,
    },

    /// A string literal with no closing quote before end of input
    #[error("unterminated string starting with {quote} at {position}")]
    UnterminatedString {
        /// The opening quote character
        quote: char,
        /// Position of the opening quote
        position: SourcePosition,
    },
}

impl LexError {
    /// Where the error was detected.
    pub fn position(&self) -> SourcePosition {
        match self {
            LexError::UnexpectedCharacter { position, .. }
            | LexError::RepeatedOperator { position, .. }
            | LexError::UnterminatedString { position, .. } => *position,
        }
    }
}

/// Errors raised while parsing a token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A consumed token had the wrong kind
    #[error("expected {expected} but got {found} at {}", .found.position)]
    UnexpectedTokenKind {
        /// Kind the grammar required
        expected: TokenKind,
        /// Token actually consumed
        found: Token,
    },

    /// A consumed token had the right kind but the wrong text
    #[error("expected '{expected}' but got {found} at {}", .found.position)]
    UnexpectedTokenValue {
        /// Text the grammar required
        expected: String,
        /// Token actually consumed
        found: Token,
    },

    /// Assignment to something that is not a plain name
    #[error("invalid left-hand side in assignment: {target} at {}", .target.position)]
    InvalidAssignmentTarget {
        /// The token in assignment-target position
        target: Token,
    },

    /// No grammar rule applies to this token
    #[error("unexpected {found} at {}", .found.position)]
    UnexpectedToken {
        /// The token no rule could start with
        found: Token,
    },
}

impl ParseError {
    /// The token the error points at.
    pub fn token(&self) -> &Token {
        match self {
            ParseError::UnexpectedTokenKind { found, .. }
            | ParseError::UnexpectedTokenValue { found, .. }
            | ParseError::UnexpectedToken { found } => found,
            ParseError::InvalidAssignmentTarget { target } => target,
        }
    }

    /// Where the error was detected.
    pub fn position(&self) -> SourcePosition {
        self.token().position
    }
}

/// Either stage of the pipeline failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// Scanner failure
    #[error("lexical error: {0}")]
    Lex(#[from] LexError),
    /// Parser failure
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

impl SyntaxError {
    /// Where the error was detected.
    pub fn position(&self) -> SourcePosition {
        match self {
            SyntaxError::Lex(e) => e.position(),
            SyntaxError::Parse(e) => e.position(),
        }
    }
}

/// Result alias for scanner operations.
pub type LexResult<T> = Result<T, LexError>;

/// Result alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;
