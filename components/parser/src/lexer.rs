//! Scanner - tokenizes source text into a flat token sequence
//!
//! The scanner is a small finite-state automaton. Each input character is
//! dispatched on the current [`State`]; multi-character constructs
//! (identifiers, numbers, strings, comments, operators) keep the automaton in
//! a non-`Start` state until a character arrives that cannot extend them, at
//! which point the accumulated text is emitted and the character is
//! re-dispatched from `Start`.

use core_types::{LexError, LexResult, SourcePosition, Token, TokenKind};

/// Characters that begin an operator token.
const OPERATOR_CHARS: &[char] = &['+', '-', '=', '<', '>', '&', '|', '!', '*', '/', '%'];

/// Scanner automaton state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between tokens
    Start,
    /// Accumulating an identifier or keyword
    InIdentifier,
    /// Accumulating a number
    InNumber { seen_dot: bool },
    /// Inside a string delimited by the given quote
    InString(char),
    /// Inside a `//` comment
    InComment,
    /// Accumulating an operator that may grow (`=` → `==` → `===`)
    InOperator,
}

/// Scanner for the language subset
pub struct Lexer {
    chars: Vec<char>,
    position: usize,
    line: u32,
    column: u32,
    state: State,
    buffer: String,
    token_start: SourcePosition,
    tokens: Vec<Token>,
}

/// Scan `source` into tokens, terminated by an `EOF` token.
///
/// # Example
///
/// ```
/// use parser::lexer::scan;
/// use core_types::TokenKind;
///
/// let tokens = scan("var x = 1;").unwrap();
/// assert_eq!(tokens[0].kind, TokenKind::Var);
/// assert_eq!(tokens.last().unwrap().kind, TokenKind::EOF);
/// ```
pub fn scan(source: &str) -> LexResult<Vec<Token>> {
    Lexer::new(source).tokenize()
}

impl Lexer {
    /// Create a new lexer for the given source code
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            state: State::Start,
            buffer: String::new(),
            token_start: SourcePosition::start(),
            tokens: Vec::new(),
        }
    }

    /// Run the automaton over the whole source.
    pub fn tokenize(mut self) -> LexResult<Vec<Token>> {
        while let Some(ch) = self.peek() {
            match self.state {
                State::Start => self.scan_start(ch)?,
                State::InIdentifier => self.scan_identifier(ch),
                State::InNumber { seen_dot } => self.scan_number(ch, seen_dot),
                State::InString(quote) => self.scan_string(ch, quote),
                State::InComment => self.scan_comment(ch),
                State::InOperator => self.scan_operator(ch)?,
            }
        }

        self.finish()?;
        let end = self.current_position();
        self.tokens.push(Token::eof(end));
        Ok(self.tokens)
    }

    fn scan_start(&mut self, ch: char) -> LexResult<()> {
        self.token_start = self.current_position();

        if ch.is_whitespace() {
            self.advance();
        } else if ch.is_ascii_digit() {
            self.accumulate(ch);
            self.state = State::InNumber { seen_dot: false };
        } else if is_id_start(ch) {
            self.accumulate(ch);
            self.state = State::InIdentifier;
        } else if ch == '"' || ch == '\'' {
            self.advance();
            self.state = State::InString(ch);
        } else if OPERATOR_CHARS.contains(&ch) {
            self.accumulate(ch);
            self.state = State::InOperator;
        } else if let Some(kind) = punctuation_kind(ch) {
            self.advance();
            self.tokens
                .push(Token::new(kind, ch.to_string(), self.token_start));
        } else {
            return Err(LexError::UnexpectedCharacter {
                character: ch,
                position: self.token_start,
            });
        }

        Ok(())
    }

    fn scan_identifier(&mut self, ch: char) {
        if is_id_continue(ch) {
            self.accumulate(ch);
        } else {
            self.emit_word();
        }
    }

    fn scan_number(&mut self, ch: char, seen_dot: bool) {
        if ch.is_ascii_digit() {
            self.accumulate(ch);
        } else if ch == '.' && !seen_dot {
            self.accumulate(ch);
            self.state = State::InNumber { seen_dot: true };
        } else {
            self.emit(TokenKind::Number);
        }
    }

    fn scan_string(&mut self, ch: char, quote: char) {
        self.advance();
        if ch == quote {
            self.emit(TokenKind::String);
        } else {
            self.buffer.push(ch);
        }
    }

    fn scan_comment(&mut self, ch: char) {
        self.advance();
        if ch == '\n' {
            self.state = State::Start;
        }
    }

    fn scan_operator(&mut self, ch: char) -> LexResult<()> {
        if self.buffer == "/" && ch == '/' {
            self.advance();
            self.buffer.clear();
            self.state = State::InComment;
            return Ok(());
        }

        let mut candidate = self.buffer.clone();
        candidate.push(ch);

        if is_repeated_operator(&candidate) {
            return Err(LexError::RepeatedOperator {
                operator: candidate,
                position: self.token_start,
            });
        }

        if extends_operator(&self.buffer, ch) {
            self.accumulate(ch);
        } else {
            self.emit_operator();
        }
        Ok(())
    }

    /// Flush whatever construct is still open when the input runs out.
    fn finish(&mut self) -> LexResult<()> {
        match self.state {
            State::Start | State::InComment => {}
            State::InIdentifier => self.emit_word(),
            State::InNumber { .. } => self.emit(TokenKind::Number),
            State::InOperator => self.emit_operator(),
            State::InString(quote) => {
                return Err(LexError::UnterminatedString {
                    quote,
                    position: self.token_start,
                })
            }
        }
        self.state = State::Start;
        Ok(())
    }

    fn emit_word(&mut self) {
        let kind = TokenKind::keyword(&self.buffer).unwrap_or(TokenKind::Id);
        self.emit(kind);
    }

    fn emit_operator(&mut self) {
        let text = std::mem::take(&mut self.buffer);
        self.tokens.push(Token::operator(text, self.token_start));
        self.state = State::Start;
    }

    fn emit(&mut self, kind: TokenKind) {
        let text = std::mem::take(&mut self.buffer);
        self.tokens.push(Token::new(kind, text, self.token_start));
        self.state = State::Start;
    }

    fn accumulate(&mut self, ch: char) {
        self.buffer.push(ch);
        self.advance();
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.peek() {
            self.position += 1;
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn current_position(&self) -> SourcePosition {
        SourcePosition {
            line: self.line,
            column: self.column,
            offset: self.position,
        }
    }
}

fn is_id_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == '$'
}

fn is_id_continue(ch: char) -> bool {
    is_id_start(ch) || ch.is_ascii_digit()
}

fn punctuation_kind(ch: char) -> Option<TokenKind> {
    match ch {
        ',' => Some(TokenKind::Comma),
        ':' => Some(TokenKind::Colon),
        '.' => Some(TokenKind::Dot),
        ';' => Some(TokenKind::Semicolon),
        '(' => Some(TokenKind::LParen),
        ')' => Some(TokenKind::RParen),
        '{' => Some(TokenKind::LCurly),
        '}' => Some(TokenKind::RCurly),
        '[' => Some(TokenKind::LSquare),
        ']' => Some(TokenKind::RSquare),
        _ => None,
    }
}

/// Whether `ch` grows the operator accumulated so far into a longer one.
fn extends_operator(current: &str, ch: char) -> bool {
    matches!(
        (current, ch),
        ("=", '=')
            | ("==", '=')
            | ("!", '=')
            | ("!=", '=')
            | ("<", '=')
            | (">", '=')
            | ("&", '&')
            | ("|", '|')
            | ("+", '+')
            | ("-", '-')
            | ("*", '*')
    )
}

/// Guard against runs like `+++` or `====` that no operator spells.
fn is_repeated_operator(candidate: &str) -> bool {
    matches!(candidate, "+++" | "---" | "***" | "====")
}
