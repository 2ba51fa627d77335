#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_constants() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.whatsapp_phone, "+5491112345678");
    assert_eq!(cfg.notify, NotifyTiming { enter_delay_ms: 100, auto_dismiss_ms: 5000, exit_ms: 300 });
    assert_eq!(cfg.theme_storage_key, "theme");
    assert_eq!(cfg.mobile_breakpoint_px, 768.0);
    assert!(cfg.validate().is_ok());
}

#[test]
fn empty_object_is_default() {
    let cfg = SiteConfig::from_json("{}").unwrap();
    assert_eq!(cfg, SiteConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = SiteConfig::from_json(r#"{ "whatsapp_phone": "+1 555 0100", "notify": { "auto_dismiss_ms": 8000 } }"#)
        .unwrap();
    assert_eq!(cfg.whatsapp_phone, "+1 555 0100");
    assert_eq!(cfg.notify.auto_dismiss_ms, 8000);
    assert_eq!(cfg.notify.exit_ms, 300);
    assert_eq!(cfg.form_error_message, SiteConfig::default().form_error_message);
}

#[test]
fn malformed_json_is_parse_error() {
    let err = SiteConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn mistyped_field_is_parse_error() {
    let err = SiteConfig::from_json(r#"{ "notify": { "exit_ms": "slow" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn zero_exit_window_is_invalid() {
    let err = SiteConfig::from_json(r#"{ "notify": { "exit_ms": 0 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("exit_ms"));
}

#[test]
fn empty_storage_key_is_invalid() {
    let err = SiteConfig::from_json(r#"{ "theme_storage_key": " " }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn negative_breakpoint_is_invalid() {
    let err = SiteConfig::from_json(r#"{ "mobile_breakpoint_px": -1 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn load_or_default_falls_back() {
    assert_eq!(SiteConfig::load_or_default(None), SiteConfig::default());
    assert_eq!(SiteConfig::load_or_default(Some("   ")), SiteConfig::default());
    assert_eq!(SiteConfig::load_or_default(Some("[1, 2]")), SiteConfig::default());
    assert_eq!(SiteConfig::load_or_default(Some(r#"{ "notify": { "auto_dismiss_ms": 0 } }"#)), SiteConfig::default());
}

#[test]
fn load_or_default_uses_valid_block() {
    let cfg = SiteConfig::load_or_default(Some(r#"{ "theme_storage_key": "molino-theme" }"#));
    assert_eq!(cfg.theme_storage_key, "molino-theme");
}

#[test]
fn form_messages_come_from_config() {
    let cfg = SiteConfig::from_json(r#"{ "form_success_message": "Gracias" }"#).unwrap();
    assert_eq!(cfg.form_messages().success, "Gracias");
}
