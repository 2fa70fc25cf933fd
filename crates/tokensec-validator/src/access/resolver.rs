//! Access attribute resolution.
//!
//! Resolution runs in three passes over the tokens in source order, and the
//! first violation found aborts the whole attribute:
//! 1. classification: invalid tokens and unresolvable method references;
//! 2. combination: keyword/method exclusivity, one visibility, one
//!    authentication (an authentication keyword next to a method outside an
//!    internal namespace is reported as an invalid value instead);
//! 3. trust: per-occurrence checks against the declaring namespace.

use std::sync::Arc;

use tokensec_core::error::{Result, TokenSecError};
use tokensec_core::{AccessDecision, Authentication, Visibility};

use super::attribute::{AccessAttribute, AccessKeyword, AccessToken};
use super::methods::{ResolutionError, StaticAccessMethodInvoker};
use crate::context::NamespaceTrust;

/// Type a static access method has to return.
pub const EXPECTED_RETURN_TYPE: &str = "Access";

const ONE_VISIBILITY: &str = "Access attribute can only specify one of GLOBAL, PUBLIC, or PRIVATE";
const BOTH_AUTHENTICATIONS: &str =
    "Access attribute cannot specify both AUTHENTICATED and UNAUTHENTICATED";
const NO_STATIC_METHOD: &str = "Access attribute may not use a static method";

#[derive(Debug, Clone, Copy)]
enum Resolved<'a> {
    Keyword(AccessKeyword),
    Method { name: &'a str, visibility: Visibility },
}

/// Turns access attribute strings into decisions. Stateless apart from the
/// injected invoker; safe to share across threads.
#[derive(Clone)]
pub struct AccessResolver {
    invoker: Arc<dyn StaticAccessMethodInvoker>,
}

impl AccessResolver {
    pub fn new(invoker: Arc<dyn StaticAccessMethodInvoker>) -> Self {
        Self { invoker }
    }

    pub fn resolve(&self, raw: &str, trust: NamespaceTrust) -> Result<AccessDecision> {
        let attr = AccessAttribute::parse(raw);
        let resolved = self.classify(&attr)?;
        let decision = combine(&resolved, attr.has_method(), trust)?;
        check_trust(&resolved, trust)?;

        tracing::debug!(attribute = %raw, trust = trust.label(), %decision, "access resolved");
        Ok(decision)
    }

    fn classify<'a>(&self, attr: &'a AccessAttribute) -> Result<Vec<Resolved<'a>>> {
        let mut out = Vec::with_capacity(attr.tokens().len());
        for token in attr.tokens() {
            match token {
                AccessToken::Invalid(raw) => return Err(TokenSecError::invalid_access_value(raw)),
                AccessToken::Keyword(k) => out.push(Resolved::Keyword(*k)),
                AccessToken::Method(name) => {
                    let visibility = self
                        .invoker
                        .resolve(name)
                        .map_err(|e| method_error(name, &e))?;
                    out.push(Resolved::Method { name, visibility });
                }
            }
        }
        Ok(out)
    }
}

fn method_error(name: &str, err: &ResolutionError) -> TokenSecError {
    let message = match err {
        ResolutionError::NotFound(_) => format!(
            "\"{name}\" is not a known static method; it must return a result of type {EXPECTED_RETURN_TYPE}"
        ),
        ResolutionError::WrongReturnType { .. } => {
            format!("\"{name}\" must return a result of type {EXPECTED_RETURN_TYPE}")
        }
    };
    tracing::debug!(method = %name, error = %err, "access method rejected");
    TokenSecError::access_value(name, message)
}

fn combine(
    resolved: &[Resolved<'_>],
    has_method: bool,
    trust: NamespaceTrust,
) -> Result<AccessDecision> {
    let mut visibility: Option<Visibility> = None;
    let mut authentication: Option<Authentication> = None;

    for r in resolved {
        let v = match *r {
            // authentication is internal-only before it is a method conflict
            Resolved::Keyword(k @ AccessKeyword::Authentication(_))
                if has_method && !trust.is_internal =>
            {
                return Err(TokenSecError::invalid_access_value(k.as_str()));
            }
            Resolved::Keyword(k) if has_method => return Err(static_with_method(k)),
            Resolved::Keyword(AccessKeyword::Authentication(a)) => {
                if authentication.is_some_and(|prev| prev != a) {
                    return Err(TokenSecError::AccessCombination(BOTH_AUTHENTICATIONS.into()));
                }
                authentication = Some(a);
                continue;
            }
            Resolved::Keyword(AccessKeyword::Visibility(v)) => v,
            Resolved::Method { visibility: v, .. } => v,
        };

        if visibility.is_some_and(|prev| prev != v) {
            return Err(TokenSecError::AccessCombination(ONE_VISIBILITY.into()));
        }
        visibility = Some(v);
    }

    Ok(AccessDecision::new(
        visibility.unwrap_or(Visibility::Public),
        authentication.unwrap_or_default(),
    ))
}

fn static_with_method(k: AccessKeyword) -> TokenSecError {
    TokenSecError::AccessCombination(format!(
        "Access attribute may not specify \"{}\" when a static method is also specified",
        k.as_str()
    ))
}

fn check_trust(resolved: &[Resolved<'_>], trust: NamespaceTrust) -> Result<()> {
    for r in resolved {
        match *r {
            Resolved::Method { name, .. } if !trust.is_internal => {
                return Err(TokenSecError::access_value(name, NO_STATIC_METHOD));
            }
            Resolved::Keyword(k) if !keyword_allowed(k, trust) => {
                return Err(TokenSecError::invalid_access_value(k.as_str()));
            }
            _ => {}
        }
    }
    Ok(())
}

fn keyword_allowed(k: AccessKeyword, trust: NamespaceTrust) -> bool {
    match k {
        AccessKeyword::Authentication(_) => trust.is_internal,
        AccessKeyword::Visibility(Visibility::Internal) => trust.is_internal,
        AccessKeyword::Visibility(Visibility::Privileged) => {
            trust.is_internal || trust.is_privileged
        }
        AccessKeyword::Visibility(_) => true,
    }
}
