//! Full Pipeline Integration Tests
//!
//! Tests the complete flow: Source -> Scanner -> Tokens -> Parser -> AST

use core_types::{SyntaxError, TokenKind};
use parser::{parse, scan, Expression, Program, Statement};

const BOOKS: &str = "
  var books = [
    {
      author: 'timur',
      price: 100
    },
    {
      author: 'ogden',
      price: 100
    }
  ]

  var newBooks = books.map(function(book) {
    return {
      author: book.author
    }
  })
";

/// Helper function to run the whole front end
fn parse_js(source: &str) -> Result<Program, SyntaxError> {
    let tokens = scan(source)?;
    Ok(parse(tokens)?)
}

/// Test: the books/map sample parses into two local assignments
#[test]
fn test_full_pipeline_books_sample() {
    let program = parse_js(BOOKS).expect("Parse failed");
    assert_eq!(program.len(), 2);

    let Statement::Assignment {
        name,
        expression: Expression::ArrayLit { elements },
        is_global: false,
    } = &program[0]
    else {
        panic!("Expected array assignment, got {:?}", program[0]);
    };
    assert_eq!(name, "books");
    assert_eq!(elements.len(), 2);
    let Expression::DictLit { entries } = &elements[1] else {
        panic!("Expected object literal");
    };
    assert_eq!(entries.get("author"), Some(&Expression::string("ogden")));
    assert_eq!(entries.get("price"), Some(&Expression::number("100")));
}

/// Test: the callback body keeps its nested member access
#[test]
fn test_full_pipeline_books_callback() {
    let program = parse_js(BOOKS).expect("Parse failed");
    let json = serde_json::to_value(&program).unwrap();

    let call = &json[1]["expression"]["property"];
    assert_eq!(call["type"], "Call");
    assert_eq!(call["name"], "map");

    let callback = &call["args"][0];
    assert_eq!(callback["type"], "Function");
    assert_eq!(callback["name"], "lambda");
    assert_eq!(callback["arg_names"][0], "book");

    let returned = &callback["body"][0]["expression"];
    assert_eq!(returned["type"], "DictLit");
    assert_eq!(returned["entries"]["author"]["object"], "book");
    assert_eq!(returned["entries"]["author"]["property"]["name"], "author");
}

/// Test: parsing the same tokens twice gives the same tree
#[test]
fn test_full_pipeline_is_deterministic() {
    let tokens = scan(BOOKS).unwrap();
    assert_eq!(parse(tokens.clone()).unwrap(), parse(tokens).unwrap());
}

/// Test: statement count matches top-level statements
#[test]
fn test_full_pipeline_statement_count() {
    let source = "
        function square(n) { return n * n }
        var total = 0
        for (var i = 0; i < 10; i++) { total = total + square(i) }
        while (total > 100) { total = total - 100 }
        if (total == 0) { print('zero') } else { print(total) }
        print(!done)
    ";
    let program = parse_js(source).expect("Parse failed");
    assert_eq!(program.len(), 6);
}

/// Test: token stream for a small statement
#[test]
fn test_full_pipeline_tokens() {
    let tokens = scan("if (a >= 10) { b = 'x' }").unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::If,
            TokenKind::LParen,
            TokenKind::Id,
            TokenKind::Operator,
            TokenKind::Number,
            TokenKind::RParen,
            TokenKind::LCurly,
            TokenKind::Id,
            TokenKind::Operator,
            TokenKind::String,
            TokenKind::RCurly,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[3].text, ">=");
    assert_eq!(tokens[9].text, "x");
}

/// Test: scanner errors surface through the pipeline with positions
#[test]
fn test_full_pipeline_lex_error() {
    let err = parse_js("var a = 1\nvar b = a +++ 2").unwrap_err();
    assert!(matches!(err, SyntaxError::Lex(_)));
    assert_eq!(err.position().line, 2);
}

/// Test: parser errors surface through the pipeline with positions
#[test]
fn test_full_pipeline_parse_error() {
    let err = parse_js("var books = [1, 2\nvar x = 1").unwrap_err();
    assert!(matches!(err, SyntaxError::Parse(_)));
    assert_eq!(err.position().line, 2);
}
