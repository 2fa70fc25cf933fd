//! Token definitions as handed over by the definition parser.

use std::collections::BTreeSet;

use serde::Serialize;

use tokensec_core::error::{Result, TokenSecError};
use tokensec_core::{SourceLocation, TokenValue};

/// One `name = value` styling token, owned by a namespace.
///
/// Built once during parsing and never mutated; validation only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDefinition {
    name: String,
    value: Option<TokenValue>,
    allowed_properties: BTreeSet<String>,
    namespace: String,
    location: Option<SourceLocation>,
}

#[derive(Serialize)]
struct TokenJson<'a> {
    descriptor: &'a str,
    value: Option<&'a TokenValue>,
}

impl TokenDefinition {
    pub fn builder() -> TokenDefinitionBuilder {
        TokenDefinitionBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `None` when the source omitted the value (rejected by validation).
    pub fn value(&self) -> Option<&TokenValue> {
        self.value.as_ref()
    }

    pub fn allowed_properties(&self) -> &BTreeSet<String> {
        &self.allowed_properties
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        self.location.as_ref()
    }

    /// Client payload: `{"descriptor": name, "value": value}`.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&TokenJson {
            descriptor: &self.name,
            value: self.value.as_ref(),
        })
        .map_err(|e| TokenSecError::Internal(format!("token json encode failed: {e}")))
    }
}

#[derive(Debug, Default)]
pub struct TokenDefinitionBuilder {
    name: String,
    value: Option<TokenValue>,
    allowed_properties: BTreeSet<String>,
    namespace: String,
    location: Option<SourceLocation>,
}

impl TokenDefinitionBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn value(mut self, value: TokenValue) -> Self {
        self.value = Some(value);
        self
    }

    /// Parse a raw attribute value (`{!...}` becomes an expression).
    pub fn raw_value(self, raw: &str) -> Self {
        self.value(TokenValue::parse(raw))
    }

    /// Comma-separated list; lower-cased, trimmed, empty entries dropped.
    pub fn allowed_properties(mut self, raw: &str) -> Self {
        self.allowed_properties = raw
            .to_lowercase()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        self
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn location(mut self, location: Option<SourceLocation>) -> Self {
        self.location = location;
        self
    }

    pub fn build(self) -> TokenDefinition {
        TokenDefinition {
            name: self.name,
            value: self.value,
            allowed_properties: self.allowed_properties,
            namespace: self.namespace,
            location: self.location,
        }
    }
}
