//! Validator config: namespace trust lists, extra CSS properties, and
//! declaratively registered access methods.
//!
//! Parsing is strict (unknown keys rejected at every level) and always
//! followed by `ValidatorConfig::validate`.

pub mod schema;

use std::fs;
use std::path::Path;

use tokensec_core::error::{Result, TokenSecError};

pub use schema::{AccessMethodConfig, NamespaceSection, TokenSection, ValidatorConfig};

/// Read and validate a config file. Read failures are `INTERNAL`, anything
/// wrong with the content is `BAD_CONFIG`; both name the file.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<ValidatorConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        TokenSecError::Internal(format!("read config {} failed: {e}", path.display()))
    })?;
    load_from_str(&s).map_err(|e| match e {
        TokenSecError::BadConfig(msg) => {
            TokenSecError::BadConfig(format!("{}: {msg}", path.display()))
        }
        other => other,
    })
}

pub fn load_from_str(s: &str) -> Result<ValidatorConfig> {
    let cfg: ValidatorConfig = serde_yaml::from_str(s)
        .map_err(|e| TokenSecError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;

    tracing::debug!(
        internal = cfg.namespaces.internal.len(),
        privileged = cfg.namespaces.privileged.len(),
        access_methods = cfg.access_methods.len(),
        "validator config loaded"
    );
    Ok(cfg)
}
