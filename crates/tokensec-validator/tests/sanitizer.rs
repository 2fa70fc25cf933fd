#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use tokensec_core::{Expression, TokenSecError, TokenValue};
use tokensec_validator::policy::ValueSanitizer;

fn lit(s: &str) -> TokenValue {
    TokenValue::Literal(s.to_string())
}

#[test]
fn whitelisted_values_pass_untrusted() {
    let s = ValueSanitizer::new().unwrap();
    for v in [
        "#ffffff",
        "1px solid #ccc",
        "'Helvetica Neue', Arial, sans-serif",
        "bold 12px/30px georgia, serif",
        "50%",
        "rgba(0, 0, 0, 0.5)",
        "calc(100% - 10px)",
        "transparent",
        "",
    ] {
        s.validate(&lit(v), false)
            .unwrap_or_else(|e| panic!("value={v:?} rejected: {e}"));
    }
}

#[test]
fn blacklisted_words_fail_in_any_case() {
    let s = ValueSanitizer::new().unwrap();
    for (v, word) in [
        ("url(foo.png)", "url"),
        ("URL(foo.png)", "url"),
        ("Url", "url"),
        ("expression(alert(1))", "expression"),
        ("eXpReSsIoN", "expression"),
        ("javascript", "javascript"),
        ("JavaScript alert(1)", "javascript"),
        // first word in check order wins
        ("javascript url", "url"),
        ("curly", "url"),
    ] {
        assert_eq!(
            s.validate(&lit(v), false),
            Err(TokenSecError::IllegalValue(word.into())),
            "value={v:?}"
        );
    }
}

#[test]
fn characters_outside_allow_list_fail() {
    let s = ValueSanitizer::new().unwrap();
    for v in [
        "javascript:alert(1)",
        "red;background:blue",
        "\\75rl(x)",
        "&#117;rl(x)",
        "<script>",
        "/* comment */ red",
        "red\n",
        "\"quoted\"",
        "{!v.color}",
        "café",
    ] {
        assert_eq!(
            s.validate(&lit(v), false),
            Err(TokenSecError::IllegalCharacters),
            "value={v:?}"
        );
    }
}

#[test]
fn only_property_expressions_pass_untrusted() {
    let s = ValueSanitizer::new().unwrap();

    let property = TokenValue::parse("{!colorBackground}");
    assert_eq!(s.validate(&property, false), Ok(()));

    for raw in ["'ur' + 'l('", "'red'", "concat(a, b)", "v.a + v.b", ""] {
        let expr = TokenValue::Expression(Expression::from_body(raw));
        assert_eq!(
            s.validate(&expr, false),
            Err(TokenSecError::IllegalExpression),
            "expr={raw:?}"
        );
    }
}

#[test]
fn trusted_namespaces_bypass_everything() {
    let s = ValueSanitizer::new().unwrap();
    for v in [
        lit("url(foo.png)"),
        lit("javascript:alert(1)"),
        lit("expression(x)"),
        TokenValue::parse("{!'ur' + 'l('}"),
    ] {
        assert_eq!(s.validate(&v, true), Ok(()), "value={v}");
    }
}

#[test]
fn validation_does_not_mutate() {
    let s = ValueSanitizer::new().unwrap();
    let v = lit("Bold 12PX Arial");
    let before = v.clone();
    s.validate(&v, false).unwrap();
    assert_eq!(v, before);
}
