//! Tests for contact-info detection and censoring.

use super::contact_patterns::mask;
use super::*;

#[test]
fn test_bare_phone_detected() {
    assert!(contains_contact_info("0812345678900"));
    assert!(contains_contact_info("my number 6281234567890 ok"));
}

#[test]
fn test_punctuated_phone_detected() {
    assert!(contains_contact_info("+62 812-3456-7890"));
    assert!(contains_contact_info("62.812.3456.7890"));
}

#[test]
fn test_email_detected() {
    let matches = default_policy().detect_contact_info("mail me at tenant@example.com");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].kind, ContactKind::Email);
    assert_eq!(matches[0].text, "tenant@example.com");
    assert_eq!(matches[0].start, 11);
    assert_eq!(matches[0].end, 29);
}

#[test]
fn test_messaging_links_detected_case_insensitive() {
    assert!(contains_contact_info("WA.ME/628123"));
    let matches = default_policy().detect_contact_info("join T.ME/sunny_villa");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].kind, ContactKind::TelegramLink);
}

#[test]
fn test_local_punctuated_phone_detected() {
    for input in ["0812-3456-7890", "0812 3456 7890", "0812.3456.7890", "812-3456-7890"] {
        assert!(contains_contact_info(input), "missed {:?}", input);
    }
}

#[test]
fn test_censor_local_punctuated_phone() {
    assert_eq!(censor_contact_info("call 0812-3456-7890"), "call **************");
    assert_eq!(censor_contact_info("call 0812 3456 7890 ok"), "call ************** ok");
    assert_eq!(censor_contact_info("wa 0812.3456.7890"), "wa **************");
    assert_eq!(censor_contact_info("812-3456-7890 please"), "************* please");
}

#[test]
fn test_local_punctuated_phone_validated_as_censored() {
    let result = validate_message("call me on 0812-3456-7890 tonight");
    assert_eq!(result.verdict(), Verdict::ContactCensored);
    assert_eq!(
        result.censored_message.as_deref(),
        Some("call me on ************** tonight")
    );
}

#[test]
fn test_short_numbers_not_detected() {
    assert!(!contains_contact_info("room 12, floor 3, 2 guests"));
    assert!(!contains_contact_info("check-in at 14.00 on 2024-08-17"));
    assert!(!contains_contact_info("rent is 15.000.000 per month"));
}

#[test]
fn test_detect_reports_every_pattern_that_matches() {
    let matches = default_policy().detect_contact_info("wa.me/6281234567890");
    let kinds: Vec<ContactKind> = matches.iter().map(|m| m.kind).collect();
    assert!(kinds.contains(&ContactKind::Phone));
    assert!(kinds.contains(&ContactKind::WhatsAppLink));
    // Pattern order first, so the phone match is listed before the link.
    assert_eq!(kinds[0], ContactKind::Phone);
    assert_eq!(*kinds.last().unwrap(), ContactKind::WhatsAppLink);
}

#[test]
fn test_censor_phone() {
    assert_eq!(censor_contact_info("call me at 0812345678900"), "call me at *************");
}

#[test]
fn test_censor_international_phone() {
    assert_eq!(
        censor_contact_info("reach me on +62 812-3456-7890 tonight"),
        "reach me on ***************** tonight"
    );
}

#[test]
fn test_censor_email_and_telegram() {
    assert_eq!(
        censor_contact_info("tenant@example.com or t.me/sunny_villa"),
        "****************** or ****************"
    );
}

#[test]
fn test_censor_replaces_all_occurrences() {
    let censored = censor_contact_info("a@b.co then 0812345678900 then c@d.io");
    assert_eq!(censored, "****** then ************* then ******");
}

#[test]
fn test_censor_earlier_pattern_takes_overlapping_span() {
    // The bare-digit pattern claims the digits before the link pattern runs,
    // leaving the link prefix in place.
    assert_eq!(censor_contact_info("wa.me/6281234567890"), "wa.me/*************");
}

#[test]
fn test_censor_preserves_length_and_other_chars() {
    let inputs = [
        "電話 0812345678900 です",
        "ping me: owner.name+villa@mail.example.org!",
        "+62 812-3456-7890 / 081298765432",
        "nothing to hide here",
    ];
    for input in &inputs {
        let censored = censor_contact_info(input);
        assert_eq!(censored.chars().count(), input.chars().count(), "length changed for {:?}", input);
        for (orig, out) in input.chars().zip(censored.chars()) {
            assert!(out == orig || out == '*', "unexpected char {:?} in {:?}", out, censored);
        }
    }
}

#[test]
fn test_censor_without_matches_is_identity() {
    let text = "See you at the villa at 3pm";
    assert_eq!(censor_contact_info(text), text);
}

#[test]
fn test_censor_idempotent() {
    let long_run = format!("x{}", "1".repeat(25));
    let inputs = [
        "call me at 0812345678900",
        "+62 812-3456-7890 and 62.812.3456.7890",
        "0812-3456-7890 0812 3456 7890 812.3456.7890",
        "wa.me/6281234567890 t.me/villa_bot",
        "owner@villa.id, 0211234567890123456789",
        long_run.as_str(),
        "12345678901234567890123456789",
        "",
        "****",
    ];
    for input in &inputs {
        let once = censor_contact_info(input);
        let twice = censor_contact_info(&once);
        assert_eq!(once, twice, "censor not idempotent for {:?}", input);
        assert!(!contains_contact_info(&once), "residual contact info in {:?}", once);
    }
}

#[test]
fn test_mask_counts_chars() {
    assert_eq!(mask("abc"), "***");
    assert_eq!(mask("０８１"), "***");
    assert_eq!(mask(""), "");
}

#[test]
fn test_detector_performance() {
    let text = "Email: tenant@example.com Phone: +62 812-3456-7890 wa.me/6281234567890 ".repeat(100);
    let start = std::time::Instant::now();
    for _ in 0..100 {
        let _ = censor_contact_info(&text);
    }
    let duration = start.elapsed();
    assert!(duration.as_millis() < 5000, "Censoring too slow: {:?}", duration);
}
