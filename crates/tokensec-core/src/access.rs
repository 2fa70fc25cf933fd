//! Resolved access decision carried by a definition.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Who may reference a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Visibility {
    Global,
    Public,
    Private,
    Internal,
    Privileged,
}

impl Visibility {
    pub const ALL: [Visibility; 5] = [
        Visibility::Global,
        Visibility::Public,
        Visibility::Private,
        Visibility::Internal,
        Visibility::Privileged,
    ];

    /// Attribute keyword (upper case).
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Global => "GLOBAL",
            Visibility::Public => "PUBLIC",
            Visibility::Private => "PRIVATE",
            Visibility::Internal => "INTERNAL",
            Visibility::Privileged => "PRIVILEGED",
        }
    }

    /// Case-sensitive keyword match.
    pub fn from_keyword(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authentication requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Authentication {
    Authenticated,
    Unauthenticated,
    #[default]
    Unspecified,
}

impl Authentication {
    pub fn as_str(self) -> &'static str {
        match self {
            Authentication::Authenticated => "AUTHENTICATED",
            Authentication::Unauthenticated => "UNAUTHENTICATED",
            Authentication::Unspecified => "UNSPECIFIED",
        }
    }

    /// Only the two attribute keywords match; `UNSPECIFIED` is not spellable.
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "AUTHENTICATED" => Some(Authentication::Authenticated),
            "UNAUTHENTICATED" => Some(Authentication::Unauthenticated),
            _ => None,
        }
    }
}

impl fmt::Display for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated {visibility, authentication} pair. Immutable once resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessDecision {
    pub visibility: Visibility,
    pub authentication: Authentication,
}

impl AccessDecision {
    pub fn new(visibility: Visibility, authentication: Authentication) -> Self {
        Self {
            visibility,
            authentication,
        }
    }

    pub fn requires_authentication(&self) -> bool {
        self.authentication == Authentication::Authenticated
    }
}

impl Default for AccessDecision {
    /// Access used when a definition declares no attribute.
    fn default() -> Self {
        Self::new(Visibility::Public, Authentication::Unspecified)
    }
}

impl fmt::Display for AccessDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.authentication {
            Authentication::Unspecified => write!(f, "{}", self.visibility),
            auth => write!(f, "{},{}", self.visibility, auth),
        }
    }
}
