use std::collections::HashSet;

use crate::config::NamespaceSection;

/// Answers trust questions about a namespace. Supplied by the surrounding
/// framework's namespace registry.
pub trait NamespaceTrustOracle: Send + Sync {
    fn is_internal_namespace(&self, namespace: &str) -> bool;
    fn is_privileged_namespace(&self, namespace: &str) -> bool;
}

/// Trust snapshot for one namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NamespaceTrust {
    pub is_internal: bool,
    pub is_privileged: bool,
}

impl NamespaceTrust {
    pub const INTERNAL: NamespaceTrust = NamespaceTrust {
        is_internal: true,
        is_privileged: false,
    };
    pub const PRIVILEGED: NamespaceTrust = NamespaceTrust {
        is_internal: false,
        is_privileged: true,
    };
    pub const UNTRUSTED: NamespaceTrust = NamespaceTrust {
        is_internal: false,
        is_privileged: false,
    };

    /// Snapshot both predicates for `namespace`.
    pub fn of(oracle: &dyn NamespaceTrustOracle, namespace: &str) -> Self {
        Self {
            is_internal: oracle.is_internal_namespace(namespace),
            is_privileged: oracle.is_privileged_namespace(namespace),
        }
    }

    pub fn label(&self) -> &'static str {
        match (self.is_internal, self.is_privileged) {
            (true, _) => "internal",
            (false, true) => "privileged",
            (false, false) => "untrusted",
        }
    }
}

/// A fixed trust answer for every namespace.
impl NamespaceTrustOracle for NamespaceTrust {
    fn is_internal_namespace(&self, _namespace: &str) -> bool {
        self.is_internal
    }
    fn is_privileged_namespace(&self, _namespace: &str) -> bool {
        self.is_privileged
    }
}

/// Config-backed namespace registry. Names are case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct NamespaceRegistry {
    internal: HashSet<String>,
    privileged: HashSet<String>,
}

impl NamespaceRegistry {
    pub fn from_config(section: &NamespaceSection) -> Self {
        Self {
            internal: section.internal.iter().cloned().collect(),
            privileged: section.privileged.iter().cloned().collect(),
        }
    }
}

impl NamespaceTrustOracle for NamespaceRegistry {
    fn is_internal_namespace(&self, namespace: &str) -> bool {
        self.internal.contains(namespace)
    }

    fn is_privileged_namespace(&self, namespace: &str) -> bool {
        self.privileged.contains(namespace)
    }
}
