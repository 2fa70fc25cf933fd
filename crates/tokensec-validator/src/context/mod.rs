//! Namespace trust context shared across layers.
//!
//! Validators never look trust up on their own: callers snapshot a
//! `NamespaceTrust` for the declaring namespace and pass it in explicitly.

pub mod namespace;

pub use namespace::{NamespaceRegistry, NamespaceTrust, NamespaceTrustOracle};
