#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use stockade_engine::config;

#[test]
fn deny_unknown_fields_at_root() {
    let bad = r#"
version: 1
defaultz: # typo should fail
  default: 3
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code(), "BAD_CONFIG");
}

#[test]
fn deny_unknown_fields_in_engine_section() {
    let bad = r#"
version: 1
engine:
  count_timeout: 2000 # missing _ms suffix should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.engine.count_timeout_ms, 2000);
    assert!(cfg.defaults.is_empty());
}

#[test]
fn version_gate() {
    let bad = r#"
version: 2
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code(), "UNSUPPORTED_VERSION");
}

#[test]
fn engine_timeout_range_checked() {
    let bad = r#"
version: 1
engine:
  count_timeout_ms: 5
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code(), "BAD_CONFIG");
}

#[test]
fn rule_sections_parse_as_mappings() {
    let ok = r#"
version: 1
defaults:
  default: 3
  chest: 10
players:
  Hidendra:
    default: unlimited
groups:
  vip:
    default: 100
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.defaults.len(), 2);
    assert_eq!(cfg.players.len(), 1);
    assert_eq!(cfg.groups.len(), 1);
}
