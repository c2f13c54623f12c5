//! Contract tests for parser API
//!
//! These tests verify the parser component implements its contract correctly.

use parser::{
    parse, parse_source, scan, Expression, LexError, Lexer, ParseError, Parser, Program,
    SourcePosition, Statement, SyntaxError, Token, TokenCursor, TokenKind,
};

// =============================================================================
// Scanner Contract Tests
// =============================================================================

#[test]
fn test_lexer_new_creates_lexer() {
    let _lexer = Lexer::new("var x = 42;");
}

#[test]
fn test_lexer_tokenize_returns_result() {
    let result: Result<Vec<Token>, LexError> = Lexer::new("var x = 42;").tokenize();
    assert!(result.is_ok());
}

#[test]
fn test_scan_matches_lexer() {
    let source = "function f(a) { return a * 2 }";
    assert_eq!(scan(source).unwrap(), Lexer::new(source).tokenize().unwrap());
}

#[test]
fn test_scan_terminates_with_eof() {
    let tokens = scan("x").unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_scan_var_statement_kinds() {
    let kinds: Vec<TokenKind> = scan("var x = 5;").unwrap().iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Var,
            TokenKind::Id,
            TokenKind::Operator,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_operator_tokens_carry_binding() {
    let tokens = scan("a * b").unwrap();
    assert_eq!(tokens[1].precedence, Some(3));
    assert!(tokens[0].precedence.is_none());
}

#[test]
fn test_scan_error_has_position() {
    let err = scan("x\n  #").unwrap_err();
    assert_eq!(
        err.position(),
        SourcePosition {
            line: 2,
            column: 3,
            offset: 4
        }
    );
}

// =============================================================================
// Cursor Contract Tests
// =============================================================================

#[test]
fn test_cursor_lookahead_does_not_consume() {
    let cursor = TokenCursor::new(scan("a b").unwrap());
    assert_eq!(cursor.peek(1).text, "b");
    assert_eq!(cursor.peek(0).text, "a");
    assert_eq!(cursor.position(), 0);
}

// =============================================================================
// Parser Contract Tests
// =============================================================================

#[test]
fn test_parser_new_and_parse() {
    let tokens = scan("var x = 1;").unwrap();
    let result: Result<Program, ParseError> = Parser::new(tokens).parse();
    assert_eq!(result.unwrap().len(), 1);
}

#[test]
fn test_parse_function_matches_parser() {
    let tokens = scan("x = 1; y(x)").unwrap();
    assert_eq!(
        parse(tokens.clone()).unwrap(),
        Parser::new(tokens).parse().unwrap()
    );
}

#[test]
fn test_parse_source_reports_lex_errors() {
    assert!(matches!(parse_source("var s = 'open"), Err(SyntaxError::Lex(_))));
}

#[test]
fn test_parse_source_reports_parse_errors() {
    assert!(matches!(parse_source("var = 1"), Err(SyntaxError::Parse(_))));
}

#[test]
fn test_parse_is_repeatable() {
    let tokens = scan("function f() { return 1 + 2 }").unwrap();
    let first = parse(tokens.clone()).unwrap();
    let second = parse(tokens).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_expression_statement_shape() {
    let program = parse_source("print(1)").unwrap();
    assert!(matches!(
        &program[0],
        Statement::Expression {
            expression: Expression::Call { name, args }
        } if name == "print" && args.len() == 1
    ));
}

#[test]
fn test_parse_error_reports_found_token() {
    let err = parse(scan("var x = ;").unwrap()).unwrap_err();
    let found = err.token();
    assert_eq!(found.kind, TokenKind::Semicolon);
    assert_eq!(err.position(), found.position);
}
