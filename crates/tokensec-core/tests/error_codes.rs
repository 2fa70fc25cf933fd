#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use tokensec_core::{AccessDecision, Authentication, ErrorKind, SourceLocation, TokenSecError, Visibility};

#[test]
fn invalid_access_value_message() {
    let e = TokenSecError::invalid_access_value("BLAH");
    assert_eq!(e.to_string(), "Invalid access attribute value \"BLAH\"");
    assert_eq!(e.kind(), ErrorKind::InvalidAccessValue);
    assert_eq!(e.kind().as_str(), "INVALID_ACCESS_VALUE");
}

#[test]
fn sanitizer_messages() {
    assert_eq!(TokenSecError::IllegalExpression.to_string(), "Illegal expression in token value");
    assert_eq!(TokenSecError::IllegalCharacters.to_string(), "Illegal character in token value");
    assert_eq!(
        TokenSecError::IllegalValue("url".into()).to_string(),
        "'url' is not allowed in token values"
    );
}

#[test]
fn located_error_appends_location() {
    let loc = SourceLocation::new("ui/tokens.yaml").with_line(4, 7);
    let e = TokenSecError::IllegalCharacters.at(Some(loc));
    assert_eq!(e.to_string(), "Illegal character in token value (at ui/tokens.yaml:4:7)");
    assert_eq!(e.kind(), ErrorKind::IllegalCharacters);

    let bare = TokenSecError::IllegalCharacters.at(None);
    assert_eq!(bare.to_string(), "Illegal character in token value");
}

#[test]
fn default_decision_is_public_unspecified() {
    let d = AccessDecision::default();
    assert_eq!(d.visibility, Visibility::Public);
    assert_eq!(d.authentication, Authentication::Unspecified);
    assert!(!d.requires_authentication());
    assert_eq!(d.to_string(), "PUBLIC");

    let auth = AccessDecision::new(Visibility::Global, Authentication::Authenticated);
    assert_eq!(auth.to_string(), "GLOBAL,AUTHENTICATED");
}

#[test]
fn keywords_are_case_sensitive() {
    assert_eq!(Visibility::from_keyword("GLOBAL"), Some(Visibility::Global));
    assert_eq!(Visibility::from_keyword("global"), None);
    assert_eq!(Authentication::from_keyword("UNSPECIFIED"), None);
    assert_eq!(
        Authentication::from_keyword("UNAUTHENTICATED"),
        Some(Authentication::Unauthenticated)
    );
}
