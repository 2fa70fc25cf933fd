//! Access attribute tokenization and classification.
//!
//! `"GLOBAL, org.acme.Access.check"` splits into raw tokens which are then
//! classified without any lookups: keyword, method reference, or invalid.

use tokensec_core::{Authentication, Visibility};

/// Static keyword allowed in an access attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessKeyword {
    Visibility(Visibility),
    Authentication(Authentication),
}

impl AccessKeyword {
    /// Case-sensitive.
    pub fn parse(s: &str) -> Option<Self> {
        Visibility::from_keyword(s)
            .map(AccessKeyword::Visibility)
            .or_else(|| Authentication::from_keyword(s).map(AccessKeyword::Authentication))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AccessKeyword::Visibility(v) => v.as_str(),
            AccessKeyword::Authentication(a) => a.as_str(),
        }
    }
}

/// Classified attribute token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessToken {
    Keyword(AccessKeyword),
    /// `pkg.Class.method`, resolved later through the invoker.
    Method(String),
    /// Unrecognized keyword or malformed reference (raw text kept for the message).
    Invalid(String),
}

impl AccessToken {
    pub fn classify(raw: &str) -> Self {
        if let Some(k) = AccessKeyword::parse(raw) {
            AccessToken::Keyword(k)
        } else if is_qualified_name(raw) {
            AccessToken::Method(raw.to_string())
        } else {
            AccessToken::Invalid(raw.to_string())
        }
    }
}

/// Parsed access attribute, tokens in source order (duplicates kept).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessAttribute {
    tokens: Vec<AccessToken>,
}

impl AccessAttribute {
    /// Split on `,`, trim, drop empty segments. A blank attribute (or one
    /// made only of separators) yields a single invalid empty token.
    pub fn parse(raw: &str) -> Self {
        let mut tokens: Vec<AccessToken> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(AccessToken::classify)
            .collect();

        if tokens.is_empty() {
            tokens.push(AccessToken::Invalid(String::new()));
        }
        Self { tokens }
    }

    pub fn tokens(&self) -> &[AccessToken] {
        &self.tokens
    }

    pub fn has_method(&self) -> bool {
        self.tokens.iter().any(|t| matches!(t, AccessToken::Method(_)))
    }
}

/// At least two dot-separated Java-style identifiers (`Class.method`).
pub fn is_qualified_name(s: &str) -> bool {
    let mut segments = 0usize;
    for seg in s.split('.') {
        if !is_identifier(seg) {
            return false;
        }
        segments += 1;
    }
    segments >= 2
}

fn is_identifier(seg: &str) -> bool {
    let mut chars = seg.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
