//! Abstract Syntax Tree node definitions
//!
//! Every node is owned exactly once by its parent; there are no back
//! references. Nodes are built once by the parser and never mutated.

use core_types::Token;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

/// A parsed program: its top-level statements in source order
pub type Program = Vec<Statement>;

/// Statements
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Statement {
    /// `function name(args) { body }`
    FunctionDecl(FunctionDecl),

    /// `var name = expression` (local) or `name = expression` (global)
    Assignment {
        /// Assigned name
        name: String,
        /// Assigned value
        expression: Expression,
        /// True when the name was not declared with `var`
        is_global: bool,
    },

    /// `if (...) { } else if (...) { } else { }`
    IfElse(IfElse),

    /// `for (init; condition; update) { body }`
    For {
        /// Loop initializer, always an assignment
        init: Box<Statement>,
        /// Loop condition
        condition: Expression,
        /// Per-iteration update, an assignment or an expression statement
        update: Box<Statement>,
        /// Loop body
        body: Vec<Statement>,
    },

    /// `while (condition) { body }`
    While {
        /// Loop condition
        condition: Expression,
        /// Loop body
        body: Vec<Statement>,
    },

    /// `return [expression]`
    Return {
        /// Returned value, if any
        #[serde(skip_serializing_if = "Option::is_none")]
        expression: Option<Expression>,
    },

    /// Expression evaluated for its effect
    Expression {
        /// The expression
        expression: Expression,
    },
}

/// Function declaration or function expression
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDecl {
    /// Declared name, `lambda` for anonymous functions
    pub name: String,
    /// Parameter names in order
    pub arg_names: Vec<String>,
    /// Function body
    pub body: Vec<Statement>,
}

/// Conditional with its `else if` chain and optional `else`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfElse {
    /// Branch condition
    pub condition: Expression,
    /// Statements run when the condition holds
    pub body: Vec<Statement>,
    /// `else if` branches in source order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub else_if: Vec<IfElse>,
    /// Trailing `else` block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub else_body: Option<Vec<Statement>>,
}

/// Expressions
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Expression {
    /// Numeric literal, raw source text
    NumberLit {
        /// Raw text
        value: String,
    },
    /// String literal, raw text without quotes
    StringLit {
        /// Raw text
        value: String,
    },
    /// `true` / `false`
    BooleanLit {
        /// Literal value
        value: bool,
    },
    /// Reference to a name
    Variable {
        /// Referenced name
        name: String,
    },
    /// `name(args)`
    Call {
        /// Callee name
        name: String,
        /// Argument expressions
        args: Vec<Expression>,
    },
    /// `object.property`
    MemberAccess {
        /// Object name
        object: String,
        /// A `Variable`, nested `MemberAccess` or `Call`
        property: Box<Expression>,
    },
    /// `[e, ...]`
    ArrayLit {
        /// Elements in order
        elements: Vec<Expression>,
    },
    /// `{ key: e, ... }`
    DictLit {
        /// Entries in source order
        entries: DictEntries,
    },
    /// `!inner`
    Not {
        /// Negated expression
        inner: Box<Expression>,
    },
    /// `left operator right`
    BinaryOp {
        /// The operator token, with its precedence
        operator: Token,
        /// Left operand
        left: Box<Expression>,
        /// Right operand
        right: Box<Expression>,
    },
    /// `function [name](args) { body }` in expression position
    Function(FunctionDecl),
    /// Postfix `operand++` / `operand--`
    Update {
        /// `++` or `--`
        operator: String,
        /// Updated operand
        operand: Box<Expression>,
    },
}

impl Expression {
    /// Numeric literal
    pub fn number(value: impl Into<String>) -> Self {
        Expression::NumberLit {
            value: value.into(),
        }
    }

    /// String literal
    pub fn string(value: impl Into<String>) -> Self {
        Expression::StringLit {
            value: value.into(),
        }
    }

    /// Variable reference
    pub fn variable(name: impl Into<String>) -> Self {
        Expression::Variable { name: name.into() }
    }
}

/// Ordered key/value entries of an object literal.
///
/// Keys stay in first-insertion order; inserting an existing key replaces
/// its value in place. Serializes as a JSON object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DictEntries {
    entries: Vec<(String, Expression)>,
}

impl DictEntries {
    /// Empty entry list
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`
    pub fn insert(&mut self, key: String, value: Expression) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Value stored under `key`
    pub fn get(&self, key: &str) -> Option<&Expression> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Entries in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Expression)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for DictEntries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Compact prefix rendering, e.g. `(+ 1 (* 2 3))`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::NumberLit { value } => f.write_str(value),
            Expression::StringLit { value } => write!(f, "'{}'", value),
            Expression::BooleanLit { value } => write!(f, "{}", value),
            Expression::Variable { name } => f.write_str(name),
            Expression::Call { name, args } => {
                write!(f, "{}(", name)?;
                write_list(f, args)?;
                f.write_str(")")
            }
            Expression::MemberAccess { object, property } => write!(f, "{}.{}", object, property),
            Expression::ArrayLit { elements } => {
                f.write_str("[")?;
                write_list(f, elements)?;
                f.write_str("]")
            }
            Expression::DictLit { entries } => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
            Expression::Not { inner } => write!(f, "!{}", inner),
            Expression::BinaryOp {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", operator.text, left, right),
            Expression::Function(decl) => {
                write!(f, "function {}({})", decl.name, decl.arg_names.join(", "))
            }
            Expression::Update { operator, operand } => write!(f, "{}{}", operand, operator),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Expression]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
