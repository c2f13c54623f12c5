//! Shared vocabulary for the scanner and parser.
//!
//! This crate provides the token model, source location tracking, and the
//! error families both pipeline stages report.
//!
//! # Overview
//!
//! - [`Token`] / [`TokenKind`] - Classified lexical units
//! - [`Associativity`] - Operator associativity
//! - [`SourcePosition`] - Source code location
//! - [`LexError`] / [`ParseError`] - Stage-specific failures
//! - [`SyntaxError`] - Either stage failing
//!
//! # Examples
//!
//! ```
//! use core_types::{SourcePosition, Token, TokenKind};
//!
//! let plus = Token::operator("+", SourcePosition::start());
//! assert_eq!(plus.kind, TokenKind::Operator);
//! assert_eq!(plus.precedence, Some(2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod source;
mod token;

pub use error::{LexError, LexResult, ParseError, ParseResult, SyntaxError};
pub use source::SourcePosition;
pub use token::{operator_precedence, Associativity, Token, TokenKind};
