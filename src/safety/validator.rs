// Copyright 2024-2026 Chat Guard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Message validation result and decision order.
//!
//! Rules run in a fixed order and the first that applies wins:
//! empty, blocked keyword, contact info (censored), clean.

use serde::{Deserialize, Serialize};

use super::contact_detector::ContactDetector;
use super::keywords::KeywordMatcher;
use crate::config::PolicyMessages;

/// Classification of a [`ValidationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Empty,
    KeywordBlocked,
    ContactCensored,
    Clean,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Empty => write!(f, "empty"),
            Verdict::KeywordBlocked => write!(f, "keyword_blocked"),
            Verdict::ContactCensored => write!(f, "contact_censored"),
            Verdict::Clean => write!(f, "clean"),
        }
    }
}

/// Result of validating one outgoing message.
///
/// A rejected message never carries a censored version, and a flagged message
/// is either rejected or allowed with `censored_message` set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub censored_message: Option<String>,
    pub flagged: bool,
}

impl ValidationResult {
    pub fn empty(reason: impl Into<String>) -> Self {
        Self { is_allowed: false, reason: Some(reason.into()), censored_message: None, flagged: false }
    }

    pub fn blocked(reason: impl Into<String>) -> Self {
        Self { is_allowed: false, reason: Some(reason.into()), censored_message: None, flagged: true }
    }

    pub fn censored(censored: String, reason: impl Into<String>) -> Self {
        Self {
            is_allowed: true,
            reason: Some(reason.into()),
            censored_message: Some(censored),
            flagged: true,
        }
    }

    pub fn clean() -> Self {
        Self { is_allowed: true, reason: None, censored_message: None, flagged: false }
    }

    pub fn verdict(&self) -> Verdict {
        match (self.is_allowed, self.flagged) {
            (false, false) => Verdict::Empty,
            (false, true) => Verdict::KeywordBlocked,
            (true, true) => Verdict::ContactCensored,
            (true, false) => Verdict::Clean,
        }
    }
}

/// Run the decision rules over a message.
pub fn validate(
    message: &str,
    keywords: &KeywordMatcher,
    contacts: &ContactDetector,
    messages: &PolicyMessages,
) -> ValidationResult {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return ValidationResult::empty(&messages.empty);
    }
    if keywords.is_match(trimmed) {
        tracing::debug!(len = trimmed.len(), "message blocked by keyword filter");
        return ValidationResult::blocked(&messages.keyword_blocked);
    }
    if contacts.contains(trimmed) {
        tracing::debug!(len = trimmed.len(), "contact info censored");
        return ValidationResult::censored(contacts.censor(trimmed), &messages.contact_censored);
    }
    ValidationResult::clean()
}
