//! End-to-End CLI Integration Tests
//!
//! Tests the complete tool through the js_cli Driver API.
//! This is the highest level integration test - source code to rendered JSON.

use js_cli::{CliError, Driver};
use serde_json::Value;

fn render(source: &str) -> Value {
    let json = Driver::new().render_string(source).expect("Render failed");
    serde_json::from_str(&json).expect("Invalid JSON")
}

/// Test: precedence is visible in the rendered tree
#[test]
fn test_e2e_precedence() {
    let tree = render("1 + 2 * 3");
    let expression = &tree[0]["expression"];

    assert_eq!(expression["operator"]["text"], "+");
    assert_eq!(expression["left"]["value"], "1");
    assert_eq!(expression["right"]["operator"]["text"], "*");
}

/// Test: else-if chains hang off the first if
#[test]
fn test_e2e_else_if_chain() {
    let tree = render("if (a) { } else if (b) { } else { c() }");

    assert_eq!(tree.as_array().unwrap().len(), 1);
    assert_eq!(tree[0]["else_if"][0]["condition"]["name"], "b");
    assert_eq!(tree[0]["else_body"][0]["expression"]["name"], "c");
}

/// Test: global and local assignments are distinguished
#[test]
fn test_e2e_assignment_scope() {
    let tree = render("var a = 1; b = 2");

    assert_eq!(tree[0]["is_global"], false);
    assert_eq!(tree[1]["is_global"], true);
}

/// Test: errors carry a line:column location
#[test]
fn test_e2e_syntax_error_message() {
    let err = Driver::new().render_string("print(1))").unwrap_err();

    assert!(matches!(err, CliError::Syntax(_)));
    assert!(err.to_string().contains("1:9"), "{}", err);
}
