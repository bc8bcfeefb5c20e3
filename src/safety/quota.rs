// Copyright 2024-2026 Chat Guard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Pre-booking message quota.
//!
//! Pure functions of (has_active_booking, sent_count, max_messages). The count
//! comes from the server on every load; nothing is cached here.

use serde::{Deserialize, Serialize};

/// Messages allowed before a booking exists.
pub const DEFAULT_MAX_MESSAGES: u32 = 3;

/// Outcome of a quota check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaDecision {
    pub can_send: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl QuotaDecision {
    pub fn allowed() -> Self {
        Self { can_send: true, reason: None }
    }

    pub fn exhausted(reason: impl Into<String>) -> Self {
        Self { can_send: false, reason: Some(reason.into()) }
    }
}

/// An active booking lifts the quota entirely; otherwise sending is allowed
/// while `sent_count < max_messages`.
pub fn check_quota(
    has_active_booking: bool,
    sent_count: u32,
    max_messages: u32,
    exhausted_reason: &str,
) -> QuotaDecision {
    if has_active_booking || sent_count < max_messages {
        QuotaDecision::allowed()
    } else {
        QuotaDecision::exhausted(exhausted_reason)
    }
}

/// Messages left before the cap, never negative.
pub fn remaining(sent_count: u32, max_messages: u32) -> u32 {
    max_messages.saturating_sub(sent_count)
}
