//! Value policy layer (sanitizer, CSS property registry).
//!
//! Compiles the value rules once so the definition validator can apply them
//! to every token without recompiling patterns.

pub mod properties;
pub mod sanitizer;

pub use properties::{CssPropertyRegistry, PropertyInfo, StandardProperties};
pub use sanitizer::ValueSanitizer;
