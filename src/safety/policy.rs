// Copyright 2024-2026 Chat Guard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Chat safety policy: compiled detectors plus quota settings.
//!
//! Built once and shared by reference. Holds no mutable state, so a single
//! instance can serve every conversation and thread.

use std::sync::OnceLock;
use thiserror::Error;

use super::contact_detector::{ContactDetector, ContactMatch};
use super::keywords::KeywordMatcher;
use super::quota::{self, QuotaDecision};
use super::validator::{self, ValidationResult};
use crate::config::{ConfigError, PolicyMessages, SafetyConfig};

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to compile contact pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Failed to build keyword matcher: {0}")]
    Keywords(#[from] aho_corasick::BuildError),
}

/// Immutable chat safety policy.
pub struct ChatSafetyPolicy {
    keywords: KeywordMatcher,
    contacts: ContactDetector,
    messages: PolicyMessages,
    max_messages: u32,
}

impl ChatSafetyPolicy {
    pub fn new(config: &SafetyConfig) -> Result<Self, PolicyError> {
        config.validate()?;
        Ok(Self {
            keywords: KeywordMatcher::new(&config.effective_keywords())?,
            contacts: ContactDetector::new()?,
            messages: config.messages.clone(),
            max_messages: config.max_messages,
        })
    }

    pub fn max_messages(&self) -> u32 {
        self.max_messages
    }

    pub fn keywords(&self) -> &[String] {
        self.keywords.keywords()
    }

    pub fn messages(&self) -> &PolicyMessages {
        &self.messages
    }

    pub fn contains_blocked_keywords(&self, message: &str) -> bool {
        self.keywords.is_match(message)
    }

    /// Keywords found in the message, for reporting only.
    pub fn matched_keywords(&self, message: &str) -> Vec<String> {
        self.keywords.matches(message)
    }

    pub fn contains_contact_info(&self, message: &str) -> bool {
        self.contacts.contains(message)
    }

    pub fn detect_contact_info(&self, message: &str) -> Vec<ContactMatch> {
        self.contacts.detect(message)
    }

    pub fn censor_contact_info(&self, message: &str) -> String {
        self.contacts.censor(message)
    }

    pub fn validate_message(&self, message: &str) -> ValidationResult {
        validator::validate(message, &self.keywords, &self.contacts, &self.messages)
    }

    /// Quota check against this policy's configured cap.
    pub fn can_send_message(&self, has_active_booking: bool, sent_count: u32) -> QuotaDecision {
        self.can_send_message_with_limit(has_active_booking, sent_count, self.max_messages)
    }

    pub fn can_send_message_with_limit(
        &self,
        has_active_booking: bool,
        sent_count: u32,
        max_messages: u32,
    ) -> QuotaDecision {
        quota::check_quota(
            has_active_booking,
            sent_count,
            max_messages,
            &self.messages.quota_exhausted,
        )
    }

    pub fn remaining_messages(&self, sent_count: u32) -> u32 {
        quota::remaining(sent_count, self.max_messages)
    }
}

static DEFAULT_POLICY: OnceLock<ChatSafetyPolicy> = OnceLock::new();

/// Process-wide policy built from the built-in lists.
pub fn default_policy() -> &'static ChatSafetyPolicy {
    DEFAULT_POLICY.get_or_init(|| {
        ChatSafetyPolicy::new(&SafetyConfig::default())
            .expect("built-in chat safety policy must compile")
    })
}
