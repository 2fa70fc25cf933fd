#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use tokensec_core::{Authentication, ErrorKind, TokenSecError, Visibility};
use tokensec_validator::access::{
    AccessAttribute, AccessKeyword, AccessResolver, AccessToken, MethodOutput, MethodRegistry,
    ResolutionError, StaticAccessMethodInvoker,
};
use tokensec_validator::context::NamespaceTrust;

/// Resolves `*.allowGlobal` to GLOBAL and counts calls; everything else is missing.
#[derive(Default)]
struct FakeInvoker {
    calls: AtomicUsize,
}

impl StaticAccessMethodInvoker for FakeInvoker {
    fn resolve(&self, qualified_name: &str) -> Result<Visibility, ResolutionError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if qualified_name.ends_with(".allowGlobal") {
            Ok(Visibility::Global)
        } else {
            Err(ResolutionError::NotFound(qualified_name.to_string()))
        }
    }
}

fn resolver() -> AccessResolver {
    AccessResolver::new(Arc::new(FakeInvoker::default()))
}

#[test]
fn global_in_internal_namespace() {
    let d = resolver().resolve("GLOBAL", NamespaceTrust::INTERNAL).unwrap();
    assert_eq!(d.visibility, Visibility::Global);
    assert_eq!(d.authentication, Authentication::Unspecified);
}

#[test]
fn conflicting_visibilities() {
    let e = resolver()
        .resolve("GLOBAL, PRIVATE", NamespaceTrust::INTERNAL)
        .unwrap_err();
    assert_eq!(e.kind(), ErrorKind::AccessCombination);
    assert_eq!(
        e.to_string(),
        "Access attribute can only specify one of GLOBAL, PUBLIC, or PRIVATE"
    );
}

#[test]
fn repeated_visibility_is_idempotent() {
    let d = resolver()
        .resolve("PUBLIC, PUBLIC", NamespaceTrust::INTERNAL)
        .unwrap();
    assert_eq!(d.visibility, Visibility::Public);
}

#[test]
fn both_authentications() {
    let e = resolver()
        .resolve("AUTHENTICATED,UNAUTHENTICATED", NamespaceTrust::INTERNAL)
        .unwrap_err();
    assert!(e
        .to_string()
        .contains("cannot specify both AUTHENTICATED and UNAUTHENTICATED"));
}

#[test]
fn authentication_requires_internal_namespace() {
    let e = resolver()
        .resolve("AUTHENTICATED", NamespaceTrust::UNTRUSTED)
        .unwrap_err();
    assert_eq!(e, TokenSecError::invalid_access_value("AUTHENTICATED"));
}

#[test]
fn internal_keyword_rejected_in_privileged_namespace() {
    let e = resolver()
        .resolve("INTERNAL", NamespaceTrust::PRIVILEGED)
        .unwrap_err();
    assert_eq!(e, TokenSecError::invalid_access_value("INTERNAL"));
}

#[test]
fn empty_attribute() {
    let e = resolver().resolve("", NamespaceTrust::INTERNAL).unwrap_err();
    assert_eq!(e, TokenSecError::invalid_access_value(""));
}

#[test]
fn method_reference_with_authentication_fails() {
    let e = resolver()
        .resolve("org.example.Access.allowGlobal,AUTHENTICATED", NamespaceTrust::INTERNAL)
        .unwrap_err();
    assert_eq!(e.kind(), ErrorKind::AccessCombination);
    assert_eq!(
        e.to_string(),
        "Access attribute may not specify \"AUTHENTICATED\" when a static method is also specified"
    );
}

#[test]
fn method_reference_with_authentication_outside_internal_namespace() {
    for trust in [NamespaceTrust::PRIVILEGED, NamespaceTrust::UNTRUSTED] {
        for attr in [
            "org.example.Access.allowGlobal,AUTHENTICATED",
            "AUTHENTICATED, org.example.Access.allowGlobal",
        ] {
            let e = resolver().resolve(attr, trust).unwrap_err();
            assert_eq!(e, TokenSecError::invalid_access_value("AUTHENTICATED"), "attr={attr}");
        }
    }

    // visibility keywords keep the exclusivity error in every namespace
    let e = resolver()
        .resolve("org.example.Access.allowGlobal,PUBLIC", NamespaceTrust::PRIVILEGED)
        .unwrap_err();
    assert_eq!(e.kind(), ErrorKind::AccessCombination);
}

#[test]
fn invalid_token_reported_regardless_of_position() {
    for attr in ["GLOBAL, BLAH, GLOBAL", "BLAH, GLOBAL, PRIVATE", "GLOBAL, PRIVATE, BLAH"] {
        for trust in [NamespaceTrust::INTERNAL, NamespaceTrust::PRIVILEGED, NamespaceTrust::UNTRUSTED] {
            let e = resolver().resolve(attr, trust).unwrap_err();
            assert_eq!(e, TokenSecError::invalid_access_value("BLAH"), "attr={attr}");
        }
    }
}

#[test]
fn missing_method_names_expected_return_type() {
    let e = resolver()
        .resolve("org.example.Access.nope", NamespaceTrust::INTERNAL)
        .unwrap_err();
    assert_eq!(e.kind(), ErrorKind::InvalidAccessValue);
    assert!(e.to_string().contains("must return a result of type Access"));
    match e {
        TokenSecError::InvalidAccessValue { token, .. } => assert_eq!(token, "org.example.Access.nope"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn keywords_never_reach_the_invoker() {
    let invoker = Arc::new(FakeInvoker::default());
    let r = AccessResolver::new(invoker.clone());
    r.resolve("GLOBAL, AUTHENTICATED", NamespaceTrust::INTERNAL).unwrap();
    r.resolve("BLAH", NamespaceTrust::INTERNAL).unwrap_err();
    assert_eq!(invoker.calls.load(Ordering::Relaxed), 0);

    r.resolve("a.b.allowGlobal", NamespaceTrust::INTERNAL).unwrap();
    assert_eq!(invoker.calls.load(Ordering::Relaxed), 1);
}

#[test]
fn same_inputs_same_verdict() {
    let r = resolver();
    for attr in ["GLOBAL", "GLOBAL, PRIVATE", "AUTHENTICATED", "x.y.allowGlobal", ""] {
        for trust in [NamespaceTrust::INTERNAL, NamespaceTrust::UNTRUSTED] {
            assert_eq!(r.resolve(attr, trust), r.resolve(attr, trust), "attr={attr}");
        }
    }
}

#[test]
fn shared_across_threads() {
    let r = resolver();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let r = r.clone();
            thread::spawn(move || {
                let attr = if i % 2 == 0 { "PRIVATE" } else { "a.B.allowGlobal" };
                r.resolve(attr, NamespaceTrust::INTERNAL).unwrap().visibility
            })
        })
        .collect();

    for (i, h) in handles.into_iter().enumerate() {
        let expected = if i % 2 == 0 { Visibility::Private } else { Visibility::Global };
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[test]
fn attribute_tokenization() {
    let attr = AccessAttribute::parse(" GLOBAL ,, org.acme.Access.check , global , AUTHENTICATED,GLOBAL");
    assert_eq!(
        attr.tokens(),
        &[
            AccessToken::Keyword(AccessKeyword::Visibility(Visibility::Global)),
            AccessToken::Method("org.acme.Access.check".into()),
            AccessToken::Invalid("global".into()),
            AccessToken::Keyword(AccessKeyword::Authentication(Authentication::Authenticated)),
            AccessToken::Keyword(AccessKeyword::Visibility(Visibility::Global)),
        ]
    );
    assert!(attr.has_method());

    assert_eq!(AccessAttribute::parse("  ").tokens(), &[AccessToken::Invalid(String::new())]);
    assert_eq!(
        AccessAttribute::parse("Access").tokens(),
        &[AccessToken::Invalid("Access".into())]
    );
}

#[test]
fn registry_accepts_closures() {
    let registry = MethodRegistry::new();
    registry.register(
        "org.acme.Access.privateOnly",
        Arc::new(|| MethodOutput::Visibility(Visibility::Private)),
    );
    registry.register(
        "org.acme.Access.name",
        Arc::new(|| MethodOutput::Other("String".into())),
    );

    assert_eq!(registry.resolve("org.acme.Access.privateOnly"), Ok(Visibility::Private));
    assert_eq!(
        registry.resolve("org.acme.Access.name"),
        Err(ResolutionError::WrongReturnType {
            name: "org.acme.Access.name".into(),
            returned: "String".into(),
        })
    );
    assert_eq!(
        registry.resolve("org.acme.Access.missing"),
        Err(ResolutionError::NotFound("org.acme.Access.missing".into()))
    );

    let d = AccessResolver::new(Arc::new(registry))
        .resolve("org.acme.Access.privateOnly", NamespaceTrust::INTERNAL)
        .unwrap();
    assert_eq!(d.visibility, Visibility::Private);
}
