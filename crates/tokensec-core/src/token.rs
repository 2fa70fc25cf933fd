//! Token values and expression shape classification.
//!
//! A token value is either a literal string or an expression written as
//! `{!...}`. Expressions are never evaluated here; only their shape is
//! classified so the sanitizer can tell a bare property reference apart from
//! compound forms such as concatenation.

use std::fmt;

use serde::{Serialize, Serializer};

const EXPR_OPEN: &str = "{!";
const EXPR_CLOSE: &str = "}";

/// Shape of an expression body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionKind {
    /// Bare reference to another token or variable (`v.color`).
    Property,
    /// A single literal (`'red'`, `12`, `true`, `null`).
    Literal,
    /// Anything else: operators, calls, concatenation.
    Function,
}

impl ExpressionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ExpressionKind::Property => "PROPERTY",
            ExpressionKind::Literal => "LITERAL",
            ExpressionKind::Function => "FUNCTION",
        }
    }
}

/// Unevaluated expression with its classified shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expression {
    kind: ExpressionKind,
    body: String,
}

impl Expression {
    /// Classify an expression body (the text between `{!` and `}`).
    pub fn from_body(body: &str) -> Self {
        let body = body.trim();
        Self {
            kind: classify(body),
            body: body.to_string(),
        }
    }

    pub fn kind(&self) -> ExpressionKind {
        self.kind
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Source form, `{!body}`.
    pub fn source(&self) -> String {
        format!("{EXPR_OPEN}{}{EXPR_CLOSE}", self.body)
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source())
    }
}

/// Declared value of a token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    Literal(String),
    Expression(Expression),
}

impl TokenValue {
    /// `{!...}` becomes an expression; everything else is a literal.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed
            .strip_prefix(EXPR_OPEN)
            .and_then(|s| s.strip_suffix(EXPR_CLOSE))
        {
            Some(body) => TokenValue::Expression(Expression::from_body(body)),
            None => TokenValue::Literal(raw.to_string()),
        }
    }

    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            TokenValue::Expression(e) => Some(e),
            TokenValue::Literal(_) => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Literal(s) => f.write_str(s),
            TokenValue::Expression(e) => f.write_str(&e.source()),
        }
    }
}

fn classify(body: &str) -> ExpressionKind {
    if is_property_path(body) {
        ExpressionKind::Property
    } else if is_literal(body) {
        ExpressionKind::Literal
    } else {
        ExpressionKind::Function
    }
}

fn is_property_path(body: &str) -> bool {
    if matches!(body, "true" | "false" | "null") {
        return false;
    }
    !body.is_empty() && body.split('.').all(is_identifier)
}

fn is_identifier(seg: &str) -> bool {
    let mut chars = seg.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn is_literal(body: &str) -> bool {
    if matches!(body, "true" | "false" | "null") {
        return true;
    }
    if let Some(inner) = body
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
    {
        // a second quote inside means more than one string (e.g. 'a' + 'b')
        return !inner.contains('\'');
    }
    !body.is_empty() && body.parse::<f64>().is_ok()
}
