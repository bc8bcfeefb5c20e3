// Copyright 2024-2026 Chat Guard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Pre-booking chat safety filter.
//!
//! Detects attempts to move payment or contact off the platform, censors
//! contact details, and enforces the pre-booking message quota. Every
//! operation here is synchronous and pure.

pub mod audit;
mod audit_types;
pub mod contact_detector;
pub mod contact_patterns;
pub mod keywords;
pub mod policy;
pub mod quota;
pub mod validator;

pub use audit::{ModerationEvent, ModerationLog, ModerationOutcome, ModerationSeverity};
pub use contact_detector::{ContactDetector, ContactMatch};
pub use contact_patterns::ContactKind;
pub use policy::{default_policy, ChatSafetyPolicy, PolicyError};
pub use quota::{QuotaDecision, DEFAULT_MAX_MESSAGES};
pub use validator::{ValidationResult, Verdict};

/// True if the message contains any blocked keyword (case-insensitive substring).
pub fn contains_blocked_keywords(message: &str) -> bool {
    default_policy().contains_blocked_keywords(message)
}

/// True if the message contains a phone number, email or messaging-app link.
pub fn contains_contact_info(message: &str) -> bool {
    default_policy().contains_contact_info(message)
}

/// Mask every contact detail with an equal-length run of `*`.
pub fn censor_contact_info(message: &str) -> String {
    default_policy().censor_contact_info(message)
}

/// Classify an outgoing message as allowed, blocked or allowed-but-censored.
pub fn validate_message(message: &str) -> ValidationResult {
    default_policy().validate_message(message)
}

/// Pre-booking quota gate. Use [`DEFAULT_MAX_MESSAGES`] for the standard cap.
pub fn can_send_message(has_active_booking: bool, sent_count: u32, max_messages: u32) -> QuotaDecision {
    default_policy().can_send_message_with_limit(has_active_booking, sent_count, max_messages)
}

/// `max(0, max_messages - sent_count)`.
pub fn remaining_messages(sent_count: u32, max_messages: u32) -> u32 {
    quota::remaining(sent_count, max_messages)
}


#[cfg(test)]
#[path = "contact_tests.rs"]
mod contact_tests;
