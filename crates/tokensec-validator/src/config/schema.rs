use std::collections::HashSet;

use serde::Deserialize;
use tokensec_core::error::{Result, TokenSecError};

use crate::access::attribute::is_qualified_name;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorConfig {
    pub version: u32,

    #[serde(default)]
    pub namespaces: NamespaceSection,

    #[serde(default)]
    pub tokens: TokenSection,

    #[serde(default)]
    pub access_methods: Vec<AccessMethodConfig>,
}

impl ValidatorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TokenSecError::BadConfig(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.namespaces.validate()?;
        self.tokens.validate()?;

        let mut seen = HashSet::new();
        for m in &self.access_methods {
            if !is_qualified_name(&m.name) {
                return Err(TokenSecError::BadConfig(format!(
                    "access_methods.name must be a qualified Class.method name: {}",
                    m.name
                )));
            }
            if m.returns.trim().is_empty() {
                return Err(TokenSecError::BadConfig(format!(
                    "access_methods.returns must not be empty (method {})",
                    m.name
                )));
            }
            if !seen.insert(m.name.as_str()) {
                return Err(TokenSecError::BadConfig(format!(
                    "access method listed twice: {}",
                    m.name
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct NamespaceSection {
    #[serde(default)]
    pub internal: Vec<String>,

    #[serde(default)]
    pub privileged: Vec<String>,
}

impl NamespaceSection {
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for ns in self.internal.iter().chain(&self.privileged) {
            if ns.trim().is_empty() {
                return Err(TokenSecError::BadConfig(
                    "namespace names must not be blank".into(),
                ));
            }
            if !seen.insert(ns.as_str()) {
                return Err(TokenSecError::BadConfig(format!(
                    "namespace listed twice: {ns}"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenSection {
    #[serde(default = "default_extra_properties")]
    pub extra_properties: Vec<String>,
}

impl Default for TokenSection {
    fn default() -> Self {
        Self {
            extra_properties: default_extra_properties(),
        }
    }
}

impl TokenSection {
    pub fn validate(&self) -> Result<()> {
        if self.extra_properties.iter().any(|p| p.trim().is_empty()) {
            return Err(TokenSecError::BadConfig(
                "tokens.extra_properties must not contain blank names".into(),
            ));
        }
        Ok(())
    }

    /// Lower-cased, trimmed extras.
    pub fn normalized_extra_properties(&self) -> Vec<String> {
        self.extra_properties
            .iter()
            .map(|p| p.trim().to_lowercase())
            .collect()
    }
}

fn default_extra_properties() -> Vec<String> {
    vec!["box-flex".into()]
}

/// Declaratively registered static access method.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccessMethodConfig {
    /// Fully qualified `pkg.Class.method`.
    pub name: String,
    /// Visibility keyword, or any other type name (treated as a wrong return type).
    pub returns: String,
}
