//! Scanner and parser for a small JavaScript-like language
//!
//! Turns source text into a token sequence and the token sequence into an
//! abstract syntax tree.
//!
//! # Overview
//!
//! - [`Lexer`] / [`scan`] - Finite-state scanner producing [`Token`]s
//! - [`TokenCursor`] - Forward-only lookahead over a token sequence
//! - [`Parser`] / [`parse`] - Recursive descent parser producing a [`Program`]
//! - [`Statement`] / [`Expression`] - Abstract Syntax Tree node types
//!
//! # Example
//!
//! ```
//! use parser::{parse, scan, Statement};
//!
//! let tokens = scan("var x = 1 + 2 * 3;").unwrap();
//! let program = parse(tokens).unwrap();
//!
//! match &program[0] {
//!     Statement::Assignment { name, expression, .. } => {
//!         assert_eq!(name, "x");
//!         assert_eq!(expression.to_string(), "(+ 1 (* 2 3))");
//!     }
//!     other => panic!("unexpected statement {:?}", other),
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{DictEntries, Expression, FunctionDecl, IfElse, Program, Statement};
pub use core_types::{
    Associativity, LexError, ParseError, SourcePosition, SyntaxError, Token, TokenKind,
};
pub use cursor::TokenCursor;
pub use lexer::{scan, Lexer};
pub use parser::{parse, parse_source, Parser, ANONYMOUS_FUNCTION_NAME};
