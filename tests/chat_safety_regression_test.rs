//! Chat Safety Regression Tests
//!
//! End-to-end checks of the public chat safety API: decision order, censor
//! shape and idempotence, quota rules, and known bypass attempts.

use chat_guard::safety::{ChatSafetyPolicy, ContactKind};
use chat_guard::{
    can_send_message, censor_contact_info, contains_blocked_keywords, contains_contact_info,
    remaining_messages, validate_message, SafetyConfig, Verdict, DEFAULT_MAX_MESSAGES,
};

/// Messages with a detectable phone or email and no blocked keyword.
const CONTACT_ONLY: &[&str] = &[
    "call me at 0812345678900",
    "mail me at tenant@example.com",
    "reach me on +62 812-3456-7890 tonight",
    "ping wa.me/6281234567890",
    "join t.me/sunny_villa for photos",
    "Owner.Name@Villa.CO.ID is mine",
];

#[test]
fn test_documented_scenarios() {
    let empty = validate_message("");
    assert!(!empty.is_allowed);
    assert!(!empty.flagged);
    assert_eq!(empty.reason.as_deref(), Some("Message cannot be empty"));

    let phone = validate_message("call me at 0812345678900");
    assert!(phone.is_allowed);
    assert!(phone.flagged);
    assert_eq!(phone.censored_message.as_deref(), Some("call me at *************"));

    let cash = validate_message("let's do cash transfer instead");
    assert!(!cash.is_allowed);
    assert!(cash.flagged);

    let quota = can_send_message(false, 3, 3);
    assert!(!quota.can_send);
    assert_eq!(
        quota.reason.as_deref(),
        Some("You've reached the message limit. Book this property to unlock unlimited chat.")
    );

    assert_eq!(remaining_messages(5, 3), 0);
}

#[test]
fn test_contact_only_messages_censored_in_place() {
    for input in CONTACT_ONLY {
        assert!(!contains_blocked_keywords(input), "fixture has a keyword: {:?}", input);
        assert!(contains_contact_info(input), "no contact info in {:?}", input);

        let result = validate_message(input);
        assert_eq!(result.verdict(), Verdict::ContactCensored, "{:?}", input);

        let censored = result.censored_message.unwrap();
        assert_eq!(censored, censor_contact_info(input));
        assert_eq!(censored.chars().count(), input.chars().count());
        for (orig, out) in input.chars().zip(censored.chars()) {
            assert!(out == orig || out == '*');
        }
    }
}

#[test]
fn test_keywords_win_over_contact_info() {
    for input in CONTACT_ONLY {
        for keyword in ["cash", "Transfer", "WHATSAPP", "bypass", "tanpa aplikasi"] {
            let message = format!("{} {}", keyword, input);
            let result = validate_message(&message);
            assert_eq!(result.verdict(), Verdict::KeywordBlocked, "{:?}", message);
            assert!(result.censored_message.is_none());
        }
    }
}

#[test]
fn test_censor_idempotent_over_fixtures() {
    let extra = [
        "0812345678900 0812345678900 0812345678900",
        "+62 812-3456-7890+62 812-3456-7890",
        "x1234567890123456789012345",
        "a@b.cd@e.fg",
        "plain text with no contacts",
    ];
    for input in CONTACT_ONLY.iter().chain(extra.iter()) {
        let once = censor_contact_info(input);
        assert_eq!(censor_contact_info(&once), once, "{:?}", input);
    }
}

#[test]
fn test_zero_width_keyword_bypass_prevented() {
    let attempts = [
        "c\u{200B}ash",
        "tr\u{200C}ans\u{200D}fer",
        "whats\u{FEFF}app",
        "te\u{00AD}legram",
        "ｔｒａｎｓｆｅｒ",
    ];
    for attempt in &attempts {
        let result = validate_message(attempt);
        assert_eq!(result.verdict(), Verdict::KeywordBlocked, "bypass not caught: {:?}", attempt);
    }
}

#[test]
fn test_quota_rules() {
    for max in 1..5u32 {
        for sent in 0..8u32 {
            assert!(can_send_message(true, sent, max).can_send);
            assert_eq!(can_send_message(false, sent, max).can_send, sent < max);
            assert_eq!(remaining_messages(sent, max), max.saturating_sub(sent));
        }
    }
    assert_eq!(DEFAULT_MAX_MESSAGES, 3);
}

#[test]
fn test_policy_from_config_file_shape() {
    let config = SafetyConfig::from_toml(
        r#"
max_messages = 2
extra_keywords = ["jenius"]

[messages]
contact_censored = "Contact details hidden."
"#,
    )
    .unwrap();
    let policy = ChatSafetyPolicy::new(&config).unwrap();

    assert!(!policy.validate_message("bayar pakai Jenius").is_allowed);
    let censored = policy.validate_message("call me at 0812345678900");
    assert_eq!(censored.reason.as_deref(), Some("Contact details hidden."));
    assert!(!policy.can_send_message(false, 2).can_send);

    let kinds: Vec<ContactKind> = policy
        .detect_contact_info("tenant@example.com")
        .into_iter()
        .map(|m| m.kind)
        .collect();
    assert_eq!(kinds, vec![ContactKind::Email]);
}

#[test]
fn test_policy_shared_across_threads() {
    let policy = chat_guard::default_policy();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let message = format!("room {} is fine, call 08123456789{}", i, i);
                policy.validate_message(&message)
            })
        })
        .collect();
    for handle in handles {
        let result = handle.join().unwrap();
        assert_eq!(result.verdict(), Verdict::ContactCensored);
    }
}
