//! Definition validator: the shared engine wiring trust, access, and value
//! policy together.
//!
//! Built once at startup (regexes compiled, registries loaded), then shared.
//! Every check is a pure function of the definition plus the trust snapshot,
//! so calling it again always yields the same verdict.

use std::collections::HashSet;
use std::sync::Arc;

use regex::Regex;

use tokensec_core::error::{LocatedError, Result, TokenSecError};
use tokensec_core::{AccessDecision, SourceLocation};

use crate::access::{AccessResolver, MethodRegistry, StaticAccessMethodInvoker};
use crate::bundle::{TokensBundle, ValidatedBundle};
use crate::config::ValidatorConfig;
use crate::context::{NamespaceRegistry, NamespaceTrust, NamespaceTrustOracle};
use crate::definition::TokenDefinition;
use crate::policy::{CssPropertyRegistry, StandardProperties, ValueSanitizer};

const TOKEN_NAME: &str = r"^[a-zA-Z_](\.?[-a-zA-Z0-9_]*)*$";

#[derive(Clone)]
pub struct DefinitionValidator {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for DefinitionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefinitionValidator").finish_non_exhaustive()
    }
}

struct Inner {
    trust: Arc<dyn NamespaceTrustOracle>,
    access: AccessResolver,
    properties: Arc<dyn CssPropertyRegistry>,
    extra_properties: HashSet<String>,
    sanitizer: ValueSanitizer,
    token_name: Regex,
}

impl DefinitionValidator {
    pub fn new(
        trust: Arc<dyn NamespaceTrustOracle>,
        invoker: Arc<dyn StaticAccessMethodInvoker>,
        properties: Arc<dyn CssPropertyRegistry>,
        extra_properties: impl IntoIterator<Item = String>,
    ) -> Result<Self> {
        let token_name = Regex::new(TOKEN_NAME)
            .map_err(|e| TokenSecError::Internal(format!("token name pattern: {e}")))?;

        Ok(Self {
            inner: Arc::new(Inner {
                trust,
                access: AccessResolver::new(invoker),
                properties,
                extra_properties: extra_properties.into_iter().collect(),
                sanitizer: ValueSanitizer::new()?,
                token_name,
            }),
        })
    }

    /// Build from validated config: namespace registry, method registry, and
    /// the built-in CSS property table.
    pub fn from_config(cfg: &ValidatorConfig) -> Result<Self> {
        let methods = MethodRegistry::from_config(&cfg.access_methods);

        // methods that can never resolve are legal config but almost always a typo
        for m in &cfg.access_methods {
            if tokensec_core::Visibility::from_keyword(m.returns.trim()).is_none() {
                tracing::warn!(method = %m.name, returns = %m.returns, "access method does not return an access visibility; references to it will be rejected");
            }
        }

        Self::new(
            Arc::new(NamespaceRegistry::from_config(&cfg.namespaces)),
            Arc::new(methods),
            Arc::new(StandardProperties::new()),
            cfg.tokens.normalized_extra_properties(),
        )
    }

    pub fn trust_of(&self, namespace: &str) -> NamespaceTrust {
        NamespaceTrust::of(self.inner.trust.as_ref(), namespace)
    }

    /// Resolve a definition's access attribute. An absent attribute gets the
    /// default decision; a present one (even blank) goes through the resolver.
    pub fn resolve_access(
        &self,
        attribute: Option<&str>,
        namespace: &str,
        location: Option<&SourceLocation>,
    ) -> std::result::Result<AccessDecision, LocatedError> {
        let Some(raw) = attribute else {
            return Ok(AccessDecision::default());
        };
        self.inner
            .access
            .resolve(raw, self.trust_of(namespace))
            .map_err(|e| e.at(location.cloned()))
    }

    /// Name, value presence, allowed properties, then value sanitizing for
    /// namespaces that are not internal.
    pub fn validate_token(&self, def: &TokenDefinition) -> std::result::Result<(), LocatedError> {
        self.check_token(def)
            .map_err(|e| e.at(def.location().cloned()))
    }

    fn check_token(&self, def: &TokenDefinition) -> Result<()> {
        if !self.inner.token_name.is_match(def.name()) {
            return Err(TokenSecError::InvalidDefinition(format!(
                "Invalid token name: '{}'",
                def.name()
            )));
        }

        let value = def.value().ok_or_else(|| {
            TokenSecError::InvalidDefinition("Missing required attribute 'value'".into())
        })?;

        for property in def.allowed_properties() {
            if self.inner.properties.lookup(property).is_none()
                && !self.inner.extra_properties.contains(property)
            {
                return Err(TokenSecError::InvalidDefinition(format!(
                    "Unknown CSS property '{property}'"
                )));
            }
        }

        let trusted = self.trust_of(def.namespace()).is_internal;
        self.inner.sanitizer.validate(value, trusted)
    }

    /// Access first, then every token in declaration order. Duplicate names
    /// within a bundle are rejected.
    pub fn validate_bundle(
        &self,
        bundle: &TokensBundle,
    ) -> std::result::Result<ValidatedBundle, LocatedError> {
        let result = self.check_bundle(bundle);
        if let Err(e) = &result {
            tracing::warn!(
                bundle = %bundle.descriptor,
                code = e.kind().as_str(),
                error = %e,
                "tokens bundle rejected"
            );
        }
        result
    }

    fn check_bundle(&self, bundle: &TokensBundle) -> std::result::Result<ValidatedBundle, LocatedError> {
        let (namespace, name) = bundle
            .split_descriptor()
            .map_err(|e| e.at(bundle.location.clone()))?;

        let access =
            self.resolve_access(bundle.access.as_deref(), namespace, bundle.location.as_ref())?;

        let tokens = bundle.definitions(namespace);
        {
            let mut seen = HashSet::new();
            for def in &tokens {
                if !seen.insert(def.name()) {
                    return Err(TokenSecError::InvalidDefinition(format!(
                        "Duplicate token name '{}'",
                        def.name()
                    ))
                    .at(def.location().cloned()));
                }
                self.validate_token(def)?;
            }
        }

        tracing::debug!(namespace, bundle = name, %access, tokens = tokens.len(), "tokens bundle accepted");
        Ok(ValidatedBundle {
            namespace: namespace.to_string(),
            name: name.to_string(),
            access,
            tokens,
        })
    }
}
