//! Tests for chat safety configuration.

use super::*;
use std::io::Write;

#[test]
fn test_defaults_are_valid() {
    let config = SafetyConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.max_messages, 3);
    assert_eq!(config.messages.empty, "Message cannot be empty");
}

#[test]
fn test_from_toml_partial() {
    let config = SafetyConfig::from_toml(
        r#"
max_messages = 5
extra_keywords = ["Jenius"]

[messages]
quota_exhausted = "Book first to keep chatting."
"#,
    )
    .unwrap();
    assert_eq!(config.max_messages, 5);
    assert_eq!(config.messages.quota_exhausted, "Book first to keep chatting.");
    assert_eq!(config.messages.empty, EMPTY_MESSAGE_REASON);
    let keywords = config.effective_keywords();
    assert!(keywords.contains(&"jenius".to_string()));
    assert!(keywords.contains(&"cash".to_string()));
}

#[test]
fn test_keyword_override_and_dedup() {
    let config = SafetyConfig {
        keywords: Some(vec!["Cash".into(), "cash".into()]),
        extra_keywords: vec!["CASH".into(), "venmo".into()],
        ..Default::default()
    };
    assert_eq!(config.effective_keywords(), vec!["cash".to_string(), "venmo".to_string()]);
}

#[test]
fn test_zero_quota_rejected() {
    let err = SafetyConfig::from_toml("max_messages = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_blank_keyword_rejected() {
    let err = SafetyConfig::from_toml(r#"keywords = ["cash", "  "]"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_invisible_only_keyword_rejected() {
    let config = SafetyConfig {
        extra_keywords: vec!["\u{200B}\u{FEFF}".into()],
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_fullwidth_keywords_normalized_and_deduplicated() {
    let config = SafetyConfig {
        keywords: Some(vec!["ＣＡＳＨ".into(), "cash".into(), "ＪＥＮＩＵＳ".into()]),
        ..Default::default()
    };
    assert_eq!(config.effective_keywords(), vec!["cash".to_string(), "jenius".to_string()]);
}

#[test]
fn test_max_messages_override_applied() {
    let config = SafetyConfig::default().apply_overrides(Some(" 5 ".into())).unwrap();
    assert_eq!(config.max_messages, 5);

    let config = SafetyConfig::default().apply_overrides(None).unwrap();
    assert_eq!(config.max_messages, DEFAULT_MAX_MESSAGES);
}

#[test]
fn test_invalid_max_messages_override_rejected() {
    let err = SafetyConfig::default().apply_overrides(Some("three".into())).unwrap_err();
    match err {
        ConfigError::Invalid(message) => {
            assert!(message.contains(MAX_MESSAGES_ENV));
            assert!(message.contains("three"));
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let err = SafetyConfig::default().apply_overrides(Some("0".into())).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_empty_keyword_list_rejected() {
    let err = SafetyConfig::from_toml("keywords = []").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_empty_advisory_rejected() {
    let err = SafetyConfig::from_toml("[messages]\nkeyword_blocked = \"\"").unwrap_err();
    assert!(err.to_string().contains("messages.keyword_blocked"));
}

#[test]
fn test_malformed_toml_rejected() {
    let err = SafetyConfig::from_toml("max_messages = \"three\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_audit_settings_parse() {
    let config = SafetyConfig::from_toml(
        "[audit]\nmin_severity = \"warning\"\ninclude_sensitive = true\nmax_events = 50",
    )
    .unwrap();
    assert_eq!(config.audit.min_severity, ModerationSeverity::Warning);
    assert!(config.audit.include_sensitive);
    assert_eq!(config.audit.max_events, 50);
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "max_messages = 7").unwrap();
    let config = SafetyConfig::from_file(file.path()).unwrap();
    assert_eq!(config.max_messages, 7);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SafetyConfig::from_file(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_toml_round_trip_of_defaults() {
    let config = SafetyConfig::default();
    let rendered = config.to_toml().unwrap();
    assert_eq!(SafetyConfig::from_toml(&rendered).unwrap(), config);
}
