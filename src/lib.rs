// Copyright 2024-2026 Chat Guard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Chat Guard
//!
//! Pre-booking chat safety filter for the rental marketplace app: blocks
//! payment-bypass language, censors contact details, and enforces the message
//! quota that applies until a booking exists.

pub mod chat;
pub mod config;
pub mod logging;
pub mod safety;

pub use config::{ConfigError, SafetyConfig};
pub use safety::{
    can_send_message, censor_contact_info, contains_blocked_keywords, contains_contact_info,
    default_policy, remaining_messages, validate_message, ChatSafetyPolicy, QuotaDecision,
    ValidationResult, Verdict, DEFAULT_MAX_MESSAGES,
};
