#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use remshield_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
platform:
  api_base_path: "/wp-json/"
  api_prefixx: "wp-json" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.platform.api_base_path, "/wp-json/");
    assert_eq!(cfg.platform.api_url_prefix, "wp-json");
    assert_eq!(cfg.platform.charset, "UTF-8");
}

#[test]
fn missing_toggles_default_to_all_off() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert!(!cfg.toggles.rest_disabled);
    assert!(!cfg.toggles.feed_disabled);
    assert!(!cfg.toggles.rpc_disabled);
}

#[test]
fn partial_toggles_default_the_rest() {
    let cfg = config::load_from_str(
        r#"
version: 1
toggles:
  rest_disabled: true
"#,
    )
    .expect("must parse");
    assert!(cfg.toggles.rest_disabled);
    assert!(!cfg.toggles.feed_disabled);
    assert!(!cfg.toggles.rpc_disabled);
}

#[test]
fn rejects_unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn rejects_relative_api_base_path() {
    let bad = r#"
version: 1
platform:
  api_base_path: "wp-json/"
"#;
    assert!(config::load_from_str(bad).is_err());
}

#[test]
fn rejects_empty_api_url_prefix() {
    let bad = r#"
version: 1
platform:
  api_url_prefix: ""
"#;
    assert!(config::load_from_str(bad).is_err());
}
