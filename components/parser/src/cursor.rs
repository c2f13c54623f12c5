//! Forward-only token cursor with bounded lookahead

use core_types::{SourcePosition, Token, TokenKind};

/// Read-only view over a token sequence.
///
/// The sequence is treated as if an `EOF` token followed its last element
/// forever, so neither [`advance`](Self::advance) nor [`peek`](Self::peek)
/// can run off the end.
#[derive(Debug, Clone)]
pub struct TokenCursor {
    tokens: Vec<Token>,
    /// Index of the next unconsumed token
    next: usize,
    eof: Token,
}

impl TokenCursor {
    /// Create a cursor positioned before the first token
    pub fn new(tokens: Vec<Token>) -> Self {
        let eof = match tokens.last() {
            Some(last) if last.kind == TokenKind::EOF => last.clone(),
            Some(last) => Token::eof(last.position),
            None => Token::eof(SourcePosition::start()),
        };
        Self {
            tokens,
            next: 0,
            eof,
        }
    }

    /// Consume and return the next token, or `EOF` once exhausted.
    pub fn advance(&mut self) -> &Token {
        if self.next < self.tokens.len() {
            self.next += 1;
            &self.tokens[self.next - 1]
        } else {
            // Park one past the end so `current` keeps reporting EOF.
            self.next = self.tokens.len() + 1;
            &self.eof
        }
    }

    /// The token most recently returned by [`advance`](Self::advance).
    pub fn current(&self) -> Option<&Token> {
        match self.next {
            0 => None,
            n => Some(self.tokens.get(n - 1).unwrap_or(&self.eof)),
        }
    }

    /// Look `offset` tokens past the next unconsumed one (0 = next).
    pub fn peek(&self, offset: usize) -> &Token {
        self.next
            .checked_add(offset)
            .and_then(|i| self.tokens.get(i))
            .unwrap_or(&self.eof)
    }

    /// True once only `EOF` remains
    pub fn is_at_end(&self) -> bool {
        self.peek(0).kind == TokenKind::EOF
    }

    /// Number of tokens consumed so far
    pub fn position(&self) -> usize {
        self.next.min(self.tokens.len())
    }
}
