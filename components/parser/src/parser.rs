//! Recursive descent parser for the language subset
//!
//! Statements and control structures are parsed by recursive descent.
//! Arithmetic, comparison and logical expressions go through an explicit
//! precedence-climbing engine ([`Parser::parse_math_expression`]) that keeps
//! an operand stack, an operator stack and a stack of open parenthesis groups.

use crate::ast::*;
use crate::cursor::TokenCursor;
use crate::error::*;
use crate::lexer::scan;
use core_types::{Associativity, ParseResult, SyntaxError, Token, TokenKind};

/// Name given to functions declared without one
pub const ANONYMOUS_FUNCTION_NAME: &str = "lambda";

/// Parse a token sequence into a program.
pub fn parse(tokens: Vec<Token>) -> ParseResult<Program> {
    Parser::new(tokens).parse()
}

/// Scan and parse `source` in one step.
///
/// # Example
///
/// ```
/// use parser::{parse_source, Statement};
///
/// let program = parse_source("var x = 5;").unwrap();
/// assert!(matches!(program[0], Statement::Assignment { is_global: false, .. }));
/// ```
pub fn parse_source(source: &str) -> Result<Program, SyntaxError> {
    let tokens = scan(source)?;
    Ok(parse(tokens)?)
}

/// Parser over one token sequence.
///
/// Each parser owns its cursor, so independent parses never share state.
pub struct Parser {
    cursor: TokenCursor,
}

impl Parser {
    /// Create a new parser for the given tokens
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
        }
    }

    /// Parse the whole token sequence into a program
    pub fn parse(mut self) -> ParseResult<Program> {
        let statements = self.parse_statements()?;

        // Only a stray `}` can stop the statement loop before EOF.
        if !self.cursor.is_at_end() {
            return Err(unexpected_token(self.peek(0)));
        }

        Ok(statements)
    }

    fn parse_statements(&mut self) -> ParseResult<Vec<Statement>> {
        let mut statements = Vec::new();
        while !matches!(self.peek(0).kind, TokenKind::EOF | TokenKind::RCurly) {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    fn parse_statement(&mut self) -> ParseResult<Statement> {
        let kind = self.peek(0).kind;
        match kind {
            TokenKind::Function => Ok(Statement::FunctionDecl(self.parse_function()?)),
            TokenKind::Var => self.parse_assignment_statement(false),
            TokenKind::Id if is_assignment_start(self.peek(0), self.peek(1)) => {
                self.parse_assignment_statement(true)
            }
            TokenKind::If => Ok(Statement::IfElse(self.parse_if_else()?)),
            TokenKind::For => self.parse_for(),
            TokenKind::While => self.parse_while(),
            TokenKind::Return => self.parse_return(),
            _ => {
                let expression = self.parse_expression()?;
                self.skip_semicolon();
                Ok(Statement::Expression { expression })
            }
        }
    }

    fn parse_assignment_statement(&mut self, is_global: bool) -> ParseResult<Statement> {
        let assignment = self.parse_assignment(is_global)?;
        self.skip_semicolon();
        Ok(assignment)
    }

    /// `[var] name = expression`, without the trailing `;`
    fn parse_assignment(&mut self, is_global: bool) -> ParseResult<Statement> {
        if !is_global {
            self.consume(TokenKind::Var)?;
        }
        let name = self.consume(TokenKind::Id)?.text;
        self.consume_value(TokenKind::Operator, "=")?;
        let expression = self.parse_expression()?;

        Ok(Statement::Assignment {
            name,
            expression,
            is_global,
        })
    }

    fn parse_function(&mut self) -> ParseResult<FunctionDecl> {
        self.consume(TokenKind::Function)?;
        let name = if self.check(TokenKind::Id) {
            self.consume(TokenKind::Id)?.text
        } else {
            ANONYMOUS_FUNCTION_NAME.to_string()
        };
        let arg_names = self.parse_arg_names()?;
        let body = self.parse_block()?;

        Ok(FunctionDecl {
            name,
            arg_names,
            body,
        })
    }

    fn parse_arg_names(&mut self) -> ParseResult<Vec<String>> {
        let mut arg_names = Vec::new();
        self.consume(TokenKind::LParen)?;
        if self.check(TokenKind::Id) {
            arg_names.push(self.consume(TokenKind::Id)?.text);
            while self.check(TokenKind::Comma) {
                self.consume(TokenKind::Comma)?;
                arg_names.push(self.consume(TokenKind::Id)?.text);
            }
        }
        self.consume(TokenKind::RParen)?;
        Ok(arg_names)
    }

    /// `{ statements }`
    fn parse_block(&mut self) -> ParseResult<Vec<Statement>> {
        self.consume(TokenKind::LCurly)?;
        let body = self.parse_statements()?;
        self.consume(TokenKind::RCurly)?;
        Ok(body)
    }

    fn parse_return(&mut self) -> ParseResult<Statement> {
        self.consume(TokenKind::Return)?;

        if self.check(TokenKind::Semicolon) {
            self.consume(TokenKind::Semicolon)?;
            return Ok(Statement::Return { expression: None });
        }
        if matches!(self.peek(0).kind, TokenKind::RCurly | TokenKind::EOF) {
            return Ok(Statement::Return { expression: None });
        }

        let expression = self.parse_expression()?;
        self.skip_semicolon();
        Ok(Statement::Return {
            expression: Some(expression),
        })
    }

    /// `if (...) {...}` followed by any number of `else if` branches and an
    /// optional `else`. All branches hang off the first `if`.
    fn parse_if_else(&mut self) -> ParseResult<IfElse> {
        let mut node = self.parse_conditional_branch()?;

        while self.check(TokenKind::Else) && self.peek(1).is(TokenKind::If) {
            self.consume(TokenKind::Else)?;
            node.else_if.push(self.parse_conditional_branch()?);
        }

        if self.check(TokenKind::Else) {
            self.consume(TokenKind::Else)?;
            node.else_body = Some(self.parse_block()?);
        }

        Ok(node)
    }

    fn parse_conditional_branch(&mut self) -> ParseResult<IfElse> {
        self.consume(TokenKind::If)?;
        let condition = self.parse_condition()?;
        let body = self.parse_block()?;

        Ok(IfElse {
            condition,
            body,
            else_if: Vec::new(),
            else_body: None,
        })
    }

    /// `( expression )`
    fn parse_condition(&mut self) -> ParseResult<Expression> {
        self.consume(TokenKind::LParen)?;
        let condition = self.parse_expression()?;
        self.consume(TokenKind::RParen)?;
        Ok(condition)
    }

    fn parse_for(&mut self) -> ParseResult<Statement> {
        self.consume(TokenKind::For)?;
        self.consume(TokenKind::LParen)?;

        let init = if self.check(TokenKind::Var) {
            self.parse_assignment(false)?
        } else if is_assignment_start(self.peek(0), self.peek(1)) {
            self.parse_assignment(true)?
        } else {
            return Err(unexpected_token(self.peek(0)));
        };
        self.consume(TokenKind::Semicolon)?;

        let condition = self.parse_expression()?;
        self.consume(TokenKind::Semicolon)?;

        let update = if is_assignment_start(self.peek(0), self.peek(1)) {
            self.parse_assignment(true)?
        } else {
            Statement::Expression {
                expression: self.parse_expression()?,
            }
        };
        self.consume(TokenKind::RParen)?;

        let body = self.parse_block()?;

        Ok(Statement::For {
            init: Box::new(init),
            condition,
            update: Box::new(update),
            body,
        })
    }

    fn parse_while(&mut self) -> ParseResult<Statement> {
        self.consume(TokenKind::While)?;
        let condition = self.parse_condition()?;
        let body = self.parse_block()?;
        Ok(Statement::While { condition, body })
    }

    /// Dispatch on the next one or two tokens to the matching expression form.
    fn parse_expression(&mut self) -> ParseResult<Expression> {
        let token = self.peek(0).clone();
        let next = self.peek(1).clone();

        match token.kind {
            TokenKind::Boolean => {
                let boolean = self.parse_boolean()?;
                self.continue_math(boolean)
            }
            TokenKind::Function => Ok(Expression::Function(self.parse_function()?)),
            TokenKind::Id => match next.kind {
                TokenKind::Dot | TokenKind::LParen => {
                    let reference = self.parse_reference()?;
                    self.continue_math(reference)
                }
                _ if next.is_operator("=") => Err(invalid_assignment(&token)),
                _ if next.is_binary_operator() => self.parse_math_expression(None),
                _ => self.parse_variable(),
            },
            TokenKind::Number => {
                if next.is_binary_operator() {
                    self.parse_math_expression(None)
                } else if next.is(TokenKind::Id) {
                    Err(unexpected_token(&next))
                } else {
                    self.parse_number()
                }
            }
            TokenKind::String => {
                if next.is_operator("=") {
                    Err(invalid_assignment(&token))
                } else if next.is_binary_operator() {
                    self.parse_math_expression(None)
                } else {
                    self.parse_string()
                }
            }
            TokenKind::LParen => self.parse_math_expression(None),
            TokenKind::LSquare => {
                let array = self.parse_array()?;
                self.continue_math(array)
            }
            TokenKind::LCurly => {
                let object = self.parse_object_literal()?;
                self.continue_math(object)
            }
            TokenKind::Operator if token.is_operator("!") => {
                let not = self.parse_not()?;
                self.continue_math(not)
            }
            _ => Err(unexpected_token(&token)),
        }
    }

    /// Hand `seed` to the precedence engine if an operator follows it.
    fn continue_math(&mut self, seed: Expression) -> ParseResult<Expression> {
        if self.peek(0).is_binary_operator() {
            self.parse_math_expression(Some(seed))
        } else {
            Ok(seed)
        }
    }

    /// Precedence climbing over a flat run of operands and operators.
    ///
    /// `seed` is an already-parsed left operand (a member access or call that
    /// turned out to be followed by an operator).
    fn parse_math_expression(&mut self, seed: Option<Expression>) -> ParseResult<Expression> {
        let mut operands: Vec<Expression> = Vec::new();
        let mut operators: Vec<Token> = Vec::new();
        // Operator-stack height at each open `(`
        let mut groups: Vec<usize> = Vec::new();
        let mut expect_operand = seed.is_none();

        if let Some(seed) = seed {
            operands.push(seed);
        }

        loop {
            let token = self.peek(0).clone();

            if is_assignment_start(&token, self.peek(1)) && (expect_operand || !groups.is_empty()) {
                return Err(invalid_assignment(&token));
            }

            if groups.is_empty() {
                if ends_expression(&token, self.peek(1)) {
                    break;
                }
                // An operand where an operator belongs starts the next statement.
                if !expect_operand && !token.is_binary_operator() {
                    break;
                }
            }

            match token.kind {
                TokenKind::Id | TokenKind::LSquare | TokenKind::LCurly if expect_operand => {
                    operands.push(self.parse_operand()?);
                    expect_operand = false;
                }
                TokenKind::Operator if expect_operand && token.is_operator("!") => {
                    operands.push(self.parse_not()?);
                    expect_operand = false;
                }
                TokenKind::Number | TokenKind::String | TokenKind::Boolean if expect_operand => {
                    operands.push(self.parse_literal()?);
                    expect_operand = false;
                }
                TokenKind::LParen if expect_operand => {
                    self.consume_any();
                    groups.push(operators.len());
                }
                TokenKind::RParen if !expect_operand => {
                    self.consume_any();
                    let mark = groups.pop().ok_or_else(|| unexpected_token(&token))?;
                    while operators.len() > mark {
                        reduce(&mut operands, &mut operators)?;
                    }
                }
                TokenKind::Operator if !expect_operand && is_update_operator(&token) => {
                    let operator = self.consume_any();
                    let operand = operands.pop().ok_or_else(|| unexpected_token(&operator))?;
                    operands.push(Expression::Update {
                        operator: operator.text,
                        operand: Box::new(operand),
                    });
                }
                TokenKind::Operator if !expect_operand && token.is_binary_operator() => {
                    let operator = self.consume_any();
                    let floor = groups.last().copied().unwrap_or(0);
                    while operators.len() > floor
                        && operators
                            .last()
                            .is_some_and(|top| should_reduce(top, &operator))
                    {
                        reduce(&mut operands, &mut operators)?;
                    }
                    operators.push(operator);
                    expect_operand = true;
                }
                _ => return Err(unexpected_token(&token)),
            }
        }

        if expect_operand {
            return Err(unexpected_token(self.peek(0)));
        }

        while !operators.is_empty() {
            reduce(&mut operands, &mut operators)?;
        }

        match (operands.pop(), operands.is_empty()) {
            (Some(expression), true) => Ok(expression),
            _ => Err(unexpected_token(self.peek(0))),
        }
    }

    /// A single operand inside an arithmetic run, without operator continuation
    fn parse_operand(&mut self) -> ParseResult<Expression> {
        let kind = self.peek(0).kind;
        match kind {
            TokenKind::Id => self.parse_reference(),
            TokenKind::LSquare => self.parse_array(),
            TokenKind::LCurly => self.parse_object_literal(),
            _ => Err(unexpected_token(self.peek(0))),
        }
    }

    /// Variable, member access or call, depending on what follows the name
    fn parse_reference(&mut self) -> ParseResult<Expression> {
        let kind = self.peek(1).kind;
        match kind {
            TokenKind::Dot => self.parse_member_access(),
            TokenKind::LParen => self.parse_call(),
            _ => self.parse_variable(),
        }
    }

    /// `object.property`, where property is a name, a call or another access
    fn parse_member_access(&mut self) -> ParseResult<Expression> {
        let object = self.consume(TokenKind::Id)?.text;
        self.consume(TokenKind::Dot)?;

        if !self.check(TokenKind::Id) {
            let found = self.consume_any();
            return Err(unexpected_kind(TokenKind::Id, &found));
        }
        let property = self.parse_reference()?;

        Ok(Expression::MemberAccess {
            object,
            property: Box::new(property),
        })
    }

    fn parse_call(&mut self) -> ParseResult<Expression> {
        let name = self.consume(TokenKind::Id)?.text;
        let args = self.parse_args()?;
        Ok(Expression::Call { name, args })
    }

    fn parse_args(&mut self) -> ParseResult<Vec<Expression>> {
        let mut args = Vec::new();
        self.consume(TokenKind::LParen)?;
        if !self.check(TokenKind::RParen) {
            args.push(self.parse_expression()?);
            while self.check(TokenKind::Comma) {
                self.consume(TokenKind::Comma)?;
                args.push(self.parse_expression()?);
            }
        }
        self.consume(TokenKind::RParen)?;
        Ok(args)
    }

    fn parse_array(&mut self) -> ParseResult<Expression> {
        let mut elements = Vec::new();
        self.consume(TokenKind::LSquare)?;
        if !self.check(TokenKind::RSquare) {
            elements.push(self.parse_expression()?);
            while self.check(TokenKind::Comma) {
                self.consume(TokenKind::Comma)?;
                elements.push(self.parse_expression()?);
            }
        }
        self.consume(TokenKind::RSquare)?;
        Ok(Expression::ArrayLit { elements })
    }

    fn parse_object_literal(&mut self) -> ParseResult<Expression> {
        let mut entries = DictEntries::new();
        self.consume(TokenKind::LCurly)?;
        if !self.check(TokenKind::RCurly) {
            self.parse_key_value(&mut entries)?;
            while self.check(TokenKind::Comma) {
                self.consume(TokenKind::Comma)?;
                if self.check(TokenKind::RCurly) {
                    break;
                }
                self.parse_key_value(&mut entries)?;
            }
        }
        self.consume(TokenKind::RCurly)?;
        Ok(Expression::DictLit { entries })
    }

    fn parse_key_value(&mut self, entries: &mut DictEntries) -> ParseResult<()> {
        let kind = self.peek(0).kind;
        let key = match kind {
            TokenKind::Id | TokenKind::String => self.consume_any().text,
            _ => return Err(unexpected_token(self.peek(0))),
        };
        self.consume(TokenKind::Colon)?;
        let value = self.parse_expression()?;
        entries.insert(key, value);
        Ok(())
    }

    /// `!` applied to exactly one operand form
    fn parse_not(&mut self) -> ParseResult<Expression> {
        self.consume_value(TokenKind::Operator, "!")?;

        let kind = self.peek(0).kind;
        let inner = match kind {
            TokenKind::Id => self.parse_reference()?,
            TokenKind::LParen => {
                self.consume(TokenKind::LParen)?;
                let expression = self.parse_math_expression(None)?;
                self.consume(TokenKind::RParen)?;
                expression
            }
            TokenKind::Number => self.parse_number()?,
            TokenKind::Boolean => self.parse_boolean()?,
            TokenKind::String => self.parse_string()?,
            TokenKind::LSquare => self.parse_array()?,
            TokenKind::LCurly => self.parse_object_literal()?,
            TokenKind::Operator if self.peek(0).is_operator("!") => self.parse_not()?,
            _ => return Err(unexpected_token(self.peek(0))),
        };

        Ok(Expression::Not {
            inner: Box::new(inner),
        })
    }

    fn parse_variable(&mut self) -> ParseResult<Expression> {
        let token = self.consume(TokenKind::Id)?;
        Ok(Expression::Variable { name: token.text })
    }

    /// Number, string or boolean literal
    fn parse_literal(&mut self) -> ParseResult<Expression> {
        let kind = self.peek(0).kind;
        match kind {
            TokenKind::Number => self.parse_number(),
            TokenKind::String => self.parse_string(),
            TokenKind::Boolean => self.parse_boolean(),
            _ => Err(unexpected_token(self.peek(0))),
        }
    }

    fn parse_number(&mut self) -> ParseResult<Expression> {
        let token = self.consume(TokenKind::Number)?;
        Ok(Expression::NumberLit { value: token.text })
    }

    fn parse_string(&mut self) -> ParseResult<Expression> {
        let token = self.consume(TokenKind::String)?;
        Ok(Expression::StringLit { value: token.text })
    }

    fn parse_boolean(&mut self) -> ParseResult<Expression> {
        let token = self.consume(TokenKind::Boolean)?;
        Ok(Expression::BooleanLit {
            value: token.text == "true",
        })
    }

    // Helper methods

    fn peek(&self, offset: usize) -> &Token {
        self.cursor.peek(offset)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek(0).is(kind)
    }

    fn consume_any(&mut self) -> Token {
        self.cursor.advance().clone()
    }

    fn consume(&mut self, kind: TokenKind) -> ParseResult<Token> {
        let token = self.consume_any();
        if token.kind == kind {
            Ok(token)
        } else {
            Err(unexpected_kind(kind, &token))
        }
    }

    fn consume_value(&mut self, kind: TokenKind, text: &str) -> ParseResult<Token> {
        let token = self.consume(kind)?;
        if token.text == text {
            Ok(token)
        } else {
            Err(unexpected_value(text, &token))
        }
    }

    fn skip_semicolon(&mut self) {
        if self.check(TokenKind::Semicolon) {
            self.cursor.advance();
        }
    }
}

/// `name =` begins an assignment rather than an expression
fn is_assignment_start(token: &Token, next: &Token) -> bool {
    token.is(TokenKind::Id) && next.is_operator("=")
}

/// Tokens that can never continue an arithmetic run at paren depth zero
fn ends_expression(token: &Token, next: &Token) -> bool {
    match token.kind {
        TokenKind::RParen
        | TokenKind::Semicolon
        | TokenKind::Function
        | TokenKind::Comma
        | TokenKind::RCurly
        | TokenKind::Var
        | TokenKind::If
        | TokenKind::EOF => true,
        TokenKind::RSquare
        | TokenKind::Colon
        | TokenKind::Else
        | TokenKind::For
        | TokenKind::While
        | TokenKind::Return => true,
        TokenKind::Id => next.is_operator("="),
        _ => false,
    }
}

fn is_update_operator(token: &Token) -> bool {
    token.is_operator("++") || token.is_operator("--")
}

/// Whether the stacked operator `top` binds before the incoming `operator`
fn should_reduce(top: &Token, operator: &Token) -> bool {
    top.precedence > operator.precedence
        || (top.precedence == operator.precedence
            && operator.associativity == Some(Associativity::Left))
}

/// Fold the top operator and its two operands into a `BinaryOp`
fn reduce(operands: &mut Vec<Expression>, operators: &mut Vec<Token>) -> ParseResult<()> {
    let Some(operator) = operators.pop() else {
        return Ok(());
    };
    let right = operands.pop();
    let left = operands.pop();
    match (left, right) {
        (Some(left), Some(right)) => {
            operands.push(Expression::BinaryOp {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            });
            Ok(())
        }
        _ => Err(unexpected_token(&operator)),
    }
}
