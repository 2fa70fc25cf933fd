//! Tokens bundles: a named set of token definitions in one namespace with an
//! optional access attribute, read from YAML for the CLI.

use std::fs;

use serde::Deserialize;

use tokensec_core::error::{Result, TokenSecError};
use tokensec_core::{AccessDecision, SourceLocation};

use crate::definition::TokenDefinition;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BundleFile {
    #[serde(default)]
    pub bundles: Vec<TokensBundle>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokensBundle {
    /// `namespace:name`.
    pub descriptor: String,
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub location: Option<SourceLocation>,
    #[serde(default)]
    pub tokens: Vec<TokenEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenEntry {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
    /// Comma-separated allowed CSS properties.
    #[serde(default)]
    pub property: Option<String>,
    #[serde(default)]
    pub location: Option<SourceLocation>,
}

impl TokensBundle {
    /// Split the descriptor into `(namespace, name)`.
    pub fn split_descriptor(&self) -> Result<(&str, &str)> {
        match self.descriptor.split_once(':') {
            Some((ns, name)) if !ns.trim().is_empty() && !name.trim().is_empty() => {
                Ok((ns.trim(), name.trim()))
            }
            _ => Err(TokenSecError::InvalidDefinition(format!(
                "Invalid tokens descriptor: '{}' (expected namespace:name)",
                self.descriptor
            ))),
        }
    }

    /// Build definitions for every entry, owned by `namespace`.
    pub fn definitions(&self, namespace: &str) -> Vec<TokenDefinition> {
        self.tokens
            .iter()
            .map(|t| {
                let mut b = TokenDefinition::builder()
                    .name(t.name.as_str())
                    .namespace(namespace)
                    .location(t.location.clone().or_else(|| self.location.clone()));
                if let Some(v) = &t.value {
                    b = b.raw_value(v);
                }
                if let Some(p) = &t.property {
                    b = b.allowed_properties(p);
                }
                b.build()
            })
            .collect()
    }
}

/// A bundle whose access and tokens all passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedBundle {
    pub namespace: String,
    pub name: String,
    pub access: AccessDecision,
    pub tokens: Vec<TokenDefinition>,
}

pub fn load_from_file(path: &str) -> Result<BundleFile> {
    let s = fs::read_to_string(path)
        .map_err(|e| TokenSecError::Internal(format!("read bundles failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<BundleFile> {
    serde_yaml::from_str(s)
        .map_err(|e| TokenSecError::InvalidDefinition(format!("invalid bundle yaml: {e}")))
}
