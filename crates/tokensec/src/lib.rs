//! tokensec: access attribute resolution and token value sanitizing for
//! styling token definitions.
//!
//! Embedders usually need only [`prelude`] and [`load_validator`]; the full
//! model and validator APIs stay reachable through [`core`] and [`validator`].

use std::path::Path;

pub mod core {
    pub use tokensec_core::*;
}

pub mod validator {
    pub use tokensec_validator::*;
}

/// Types a definition loader touches on every token.
pub mod prelude {
    pub use tokensec_core::{
        AccessDecision, Authentication, ErrorKind, LocatedError, SourceLocation, TokenSecError,
        TokenValue, Visibility,
    };
    pub use tokensec_validator::bundle::{TokensBundle, ValidatedBundle};
    pub use tokensec_validator::definition::TokenDefinition;
    pub use tokensec_validator::DefinitionValidator;
}

/// Load a config file and build the shared validator from it.
pub fn load_validator(
    config_path: impl AsRef<Path>,
) -> tokensec_core::Result<tokensec_validator::DefinitionValidator> {
    let cfg = tokensec_validator::config::load_from_file(config_path)?;
    tokensec_validator::DefinitionValidator::from_config(&cfg)
}
