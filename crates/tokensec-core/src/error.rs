//! Shared error type across tokensec crates.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable error codes (reported by diagnostics and the CLI).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Name/value/property-level defect in a definition.
    InvalidDefinition,
    /// Token value is an expression other than a bare property reference.
    IllegalExpression,
    /// Token value contains a character outside the allow-list.
    IllegalCharacters,
    /// Token value contains a blacklisted word.
    IllegalValue,
    /// A single access attribute token is not acceptable.
    InvalidAccessValue,
    /// Access attribute tokens cannot be combined.
    AccessCombination,
    /// Configuration could not be parsed or failed validation.
    BadConfig,
    /// Internal error.
    Internal,
}

impl ErrorKind {
    /// String representation used in logs and summaries.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidDefinition => "INVALID_DEFINITION",
            ErrorKind::IllegalExpression => "ILLEGAL_EXPRESSION",
            ErrorKind::IllegalCharacters => "ILLEGAL_CHARACTERS",
            ErrorKind::IllegalValue => "ILLEGAL_VALUE",
            ErrorKind::InvalidAccessValue => "INVALID_ACCESS_VALUE",
            ErrorKind::AccessCombination => "ACCESS_COMBINATION",
            ErrorKind::BadConfig => "BAD_CONFIG",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TokenSecError>;

/// Unified error type used by core and validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenSecError {
    #[error("{0}")]
    InvalidDefinition(String),
    #[error("Illegal expression in token value")]
    IllegalExpression,
    #[error("Illegal character in token value")]
    IllegalCharacters,
    #[error("'{0}' is not allowed in token values")]
    IllegalValue(String),
    #[error("{message}")]
    InvalidAccessValue { token: String, message: String },
    #[error("{0}")]
    AccessCombination(String),
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl TokenSecError {
    /// `Invalid access attribute value "<token>"`.
    pub fn invalid_access_value(token: &str) -> Self {
        TokenSecError::InvalidAccessValue {
            token: token.to_string(),
            message: format!("Invalid access attribute value \"{token}\""),
        }
    }

    /// Per-token rejection with a custom message.
    pub fn access_value(token: &str, message: impl Into<String>) -> Self {
        TokenSecError::InvalidAccessValue {
            token: token.to_string(),
            message: message.into(),
        }
    }

    /// Map the error to its stable code.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TokenSecError::InvalidDefinition(_) => ErrorKind::InvalidDefinition,
            TokenSecError::IllegalExpression => ErrorKind::IllegalExpression,
            TokenSecError::IllegalCharacters => ErrorKind::IllegalCharacters,
            TokenSecError::IllegalValue(_) => ErrorKind::IllegalValue,
            TokenSecError::InvalidAccessValue { .. } => ErrorKind::InvalidAccessValue,
            TokenSecError::AccessCombination(_) => ErrorKind::AccessCombination,
            TokenSecError::BadConfig(_) => ErrorKind::BadConfig,
            TokenSecError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Attach the source location of the originating attribute.
    pub fn at(self, location: Option<SourceLocation>) -> LocatedError {
        LocatedError {
            error: self,
            location,
        }
    }
}

/// Where a definition or attribute came from. Opaque to validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceLocation {
    pub file: String,
    #[serde(default)]
    pub line: Option<u32>,
    #[serde(default)]
    pub column: Option<u32>,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line: None,
            column: None,
        }
    }

    pub fn with_line(mut self, line: u32, column: u32) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file)?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
            if let Some(col) = self.column {
                write!(f, ":{col}")?;
            }
        }
        Ok(())
    }
}

/// Error plus the location of the definition that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}{}", .location.as_ref().map(|l| format!(" (at {l})")).unwrap_or_default())]
pub struct LocatedError {
    #[source]
    pub error: TokenSecError,
    pub location: Option<SourceLocation>,
}

impl LocatedError {
    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }
}

impl From<TokenSecError> for LocatedError {
    fn from(error: TokenSecError) -> Self {
        error.at(None)
    }
}
