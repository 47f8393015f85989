use super::*;

// =============================================================
// Path derivation
// =============================================================

#[test]
fn share_path_for_post() {
    assert_eq!(share_path("42"), "/post/42/share");
}

// =============================================================
// Response decoding
// =============================================================

#[test]
fn share_link_decode() {
    let body: ShareLink = serde_json::from_str(r#"{"link":"https://x/42"}"#).unwrap();
    assert_eq!(body.link, "https://x/42");
}

#[test]
fn share_link_decode_ignores_extra_fields() {
    let body: ShareLink =
        serde_json::from_str(r#"{"link":"https://x/42","expires":null}"#).unwrap();
    assert_eq!(body.link, "https://x/42");
}

#[test]
fn share_link_rejects_missing_link() {
    assert!(serde_json::from_str::<ShareLink>(r#"{"url":"https://x/42"}"#).is_err());
}

#[test]
fn share_link_rejects_non_string_link() {
    assert!(serde_json::from_str::<ShareLink>(r#"{"link":42}"#).is_err());
}
