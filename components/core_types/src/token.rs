//! Token model shared by the scanner and the parser.

use crate::SourcePosition;
use serde::Serialize;
use std::fmt;

/// Lexical category of a token.
///
/// The set is closed: every character sequence the scanner accepts maps to
/// exactly one of these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Identifier
    Id,
    /// Numeric literal (raw text kept)
    Number,
    /// String literal (text excludes the quotes)
    String,
    /// `true` or `false`
    Boolean,
    /// Arithmetic, comparison, logical or negation operator
    Operator,
    /// `.`
    Dot,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LCurly,
    /// `}`
    RCurly,
    /// `[`
    LSquare,
    /// `]`
    RSquare,
    /// `var` keyword
    Var,
    /// `function` keyword
    Function,
    /// `return` keyword
    Return,
    /// `if` keyword
    If,
    /// `else` keyword
    Else,
    /// `for` keyword
    For,
    /// `while` keyword
    While,
    /// End of input sentinel
    #[serde(rename = "eof")]
    EOF,
}

impl TokenKind {
    /// Keyword kind for an identifier-shaped word, if it is one.
    ///
    /// `true`/`false` are reported as [`TokenKind::Boolean`].
    pub fn keyword(word: &str) -> Option<TokenKind> {
        match word {
            "var" => Some(TokenKind::Var),
            "function" => Some(TokenKind::Function),
            "return" => Some(TokenKind::Return),
            "if" => Some(TokenKind::If),
            "else" => Some(TokenKind::Else),
            "for" => Some(TokenKind::For),
            "while" => Some(TokenKind::While),
            "true" | "false" => Some(TokenKind::Boolean),
            _ => None,
        }
    }

    /// Short human-readable name used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Id => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Boolean => "boolean",
            TokenKind::Operator => "operator",
            TokenKind::Dot => "'.'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::Semicolon => "';'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LCurly => "'{'",
            TokenKind::RCurly => "'}'",
            TokenKind::LSquare => "'['",
            TokenKind::RSquare => "']'",
            TokenKind::Var => "'var'",
            TokenKind::Function => "'function'",
            TokenKind::Return => "'return'",
            TokenKind::If => "'if'",
            TokenKind::Else => "'else'",
            TokenKind::For => "'for'",
            TokenKind::While => "'while'",
            TokenKind::EOF => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Operator associativity. The grammar only defines left-associative operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Associativity {
    /// Left-associative: `a - b - c` groups as `(a - b) - c`
    Left,
}

/// A classified lexical unit.
///
/// `precedence` and `associativity` are only set for binary-capable
/// operator tokens; the prefix `!` carries neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Lexical category
    pub kind: TokenKind,
    /// Raw source text (strings without their quotes)
    pub text: String,
    /// Binding strength for binary operators
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precedence: Option<u8>,
    /// Associativity for binary operators
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associativity: Option<Associativity>,
    /// Where the token starts
    pub position: SourcePosition,
}

impl Token {
    /// Create a non-operator token.
    pub fn new(kind: TokenKind, text: impl Into<String>, position: SourcePosition) -> Self {
        Self {
            kind,
            text: text.into(),
            precedence: None,
            associativity: None,
            position,
        }
    }

    /// Create an operator token, deriving its binding from the operator text.
    pub fn operator(text: impl Into<String>, position: SourcePosition) -> Self {
        let text = text.into();
        let (precedence, associativity) = match operator_precedence(&text) {
            Some(p) => (Some(p), Some(Associativity::Left)),
            None => (None, None),
        };
        Self {
            kind: TokenKind::Operator,
            text,
            precedence,
            associativity,
            position,
        }
    }

    /// End-of-input sentinel at the given position.
    pub fn eof(position: SourcePosition) -> Self {
        Self::new(TokenKind::EOF, "", position)
    }

    /// True if this token has the given kind.
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// True if this is an operator token spelled `text`.
    pub fn is_operator(&self, text: &str) -> bool {
        self.kind == TokenKind::Operator && self.text == text
    }

    /// True if this operator can appear between two operands or after one
    /// (everything except the prefix `!`).
    pub fn is_binary_operator(&self) -> bool {
        self.kind == TokenKind::Operator && self.precedence.is_some()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EOF => f.write_str("end of input"),
            TokenKind::String => write!(f, "string '{}'", self.text),
            TokenKind::Id | TokenKind::Number | TokenKind::Boolean | TokenKind::Operator => {
                write!(f, "{} '{}'", self.kind, self.text)
            }
            _ => f.write_str(self.kind.describe()),
        }
    }
}

/// Precedence table: `+ -` bind at 2, `* / %` at 3, every other binary
/// operator falls back to 2. `!` is prefix-only and has none.
pub fn operator_precedence(text: &str) -> Option<u8> {
    match text {
        "!" => None,
        "+" | "-" => Some(2),
        "*" | "/" | "%" => Some(3),
        _ => Some(2),
    }
}
