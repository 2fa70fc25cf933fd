//! Token value sanitizer for untrusted namespaces.
//!
//! Literals must pass a character allow-list and then a keyword blacklist.
//! The allow-list excludes backslashes, `&`, `;`, `*`, `<`, `>` and `:`.
//!
//! Expressions are checked by shape: only a bare property reference passes,
//! so `{!'ur' + 'l('}` cannot assemble a blacklisted word at runtime.

use regex::Regex;

use tokensec_core::error::{Result, TokenSecError};
use tokensec_core::{ExpressionKind, TokenValue};

/// Letters, digits, space, `_ - % # . , ( ) ' /` (applied after lower-casing).
const ALLOWED_CHARS: &str = r"^[ a-z0-9_\-%#.,()'/]*$";

/// Checked in this order; the first hit is reported.
pub const DISALLOWED: [&str; 3] = ["url", "expression", "javascript"];

/// Compiled sanitizer. Construct once, then share.
#[derive(Debug, Clone)]
pub struct ValueSanitizer {
    allowed: Regex,
}

impl ValueSanitizer {
    pub fn new() -> Result<Self> {
        let allowed = Regex::new(ALLOWED_CHARS)
            .map_err(|e| TokenSecError::Internal(format!("allowed chars pattern: {e}")))?;
        Ok(Self { allowed })
    }

    /// Validate `value`. Trusted namespaces skip every check. Never mutates.
    pub fn validate(&self, value: &TokenValue, trusted: bool) -> Result<()> {
        if trusted {
            return Ok(());
        }

        match value {
            TokenValue::Expression(expr) => {
                if expr.kind() != ExpressionKind::Property {
                    return Err(TokenSecError::IllegalExpression);
                }
                Ok(())
            }
            TokenValue::Literal(s) => self.validate_literal(s),
        }
    }

    fn validate_literal(&self, raw: &str) -> Result<()> {
        let lowered = raw.to_lowercase();
        if !self.allowed.is_match(&lowered) {
            return Err(TokenSecError::IllegalCharacters);
        }
        if let Some(word) = DISALLOWED.iter().find(|w| lowered.contains(*w)) {
            return Err(TokenSecError::IllegalValue((*word).to_string()));
        }
        Ok(())
    }
}
