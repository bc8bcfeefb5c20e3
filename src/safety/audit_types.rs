// Copyright 2024-2026 Chat Guard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Types for the moderation audit log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::AuditSettings;

/// Moderation event severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ModerationSeverity {
    Info = 0,
    Warning = 1,
    Critical = 2,
}

impl std::fmt::Display for ModerationSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModerationSeverity::Info => write!(f, "INFO"),
            ModerationSeverity::Warning => write!(f, "WARNING"),
            ModerationSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// What happened to an outgoing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationOutcome {
    EmptyRejected,
    KeywordBlocked,
    ContactCensored,
    CensorDeclined,
    QuotaExhausted,
    Delivered,
}

impl ModerationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationOutcome::EmptyRejected => "empty_rejected",
            ModerationOutcome::KeywordBlocked => "keyword_blocked",
            ModerationOutcome::ContactCensored => "contact_censored",
            ModerationOutcome::CensorDeclined => "censor_declined",
            ModerationOutcome::QuotaExhausted => "quota_exhausted",
            ModerationOutcome::Delivered => "delivered",
        }
    }

    /// Severity an outcome is recorded with.
    pub fn default_severity(&self) -> ModerationSeverity {
        match self {
            ModerationOutcome::KeywordBlocked => ModerationSeverity::Critical,
            ModerationOutcome::ContactCensored | ModerationOutcome::QuotaExhausted => {
                ModerationSeverity::Warning
            }
            ModerationOutcome::EmptyRejected
            | ModerationOutcome::CensorDeclined
            | ModerationOutcome::Delivered => ModerationSeverity::Info,
        }
    }
}

impl std::fmt::Display for ModerationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Moderation event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationEvent {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub severity: ModerationSeverity,
    pub outcome: ModerationOutcome,
    pub source: String,
    pub conversation_id: Option<String>,
    /// Keywords or contact kinds that triggered the outcome.
    pub matched: Vec<String>,
    pub message_chars: usize,
    /// Censored excerpt, only kept when sensitive logging is enabled.
    pub excerpt: Option<String>,
}

impl ModerationEvent {
    pub fn builder() -> ModerationEventBuilder {
        ModerationEventBuilder::default()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_log_string(&self) -> String {
        format!(
            "[{}] {} [{}] {} (conversation={:?}, matched={:?}, chars={})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.severity, self.outcome, self.source,
            self.conversation_id, self.matched, self.message_chars
        )
    }
}

/// Builder for moderation events
#[derive(Debug, Default)]
pub struct ModerationEventBuilder {
    severity: Option<ModerationSeverity>,
    outcome: Option<ModerationOutcome>,
    source: Option<String>,
    conversation_id: Option<String>,
    matched: Vec<String>,
    message_chars: usize,
    excerpt: Option<String>,
}

impl ModerationEventBuilder {
    pub fn severity(mut self, severity: ModerationSeverity) -> Self {
        self.severity = Some(severity); self
    }
    /// Sets the outcome, and the severity too unless one was given.
    pub fn outcome(mut self, outcome: ModerationOutcome) -> Self {
        self.severity.get_or_insert(outcome.default_severity());
        self.outcome = Some(outcome); self
    }
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into()); self
    }
    pub fn conversation_id(mut self, id: impl Into<String>) -> Self {
        self.conversation_id = Some(id.into()); self
    }
    pub fn matched(mut self, label: impl Into<String>) -> Self {
        self.matched.push(label.into()); self
    }
    pub fn matched_all<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.matched.extend(labels.into_iter().map(Into::into)); self
    }
    pub fn message_chars(mut self, chars: usize) -> Self {
        self.message_chars = chars; self
    }
    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into()); self
    }

    pub fn build(self) -> Result<ModerationEvent, &'static str> {
        Ok(ModerationEvent {
            id: generate_event_id(),
            timestamp: Utc::now(),
            severity: self.severity.ok_or("severity is required")?,
            outcome: self.outcome.ok_or("outcome is required")?,
            source: self.source.ok_or("source is required")?,
            conversation_id: self.conversation_id,
            matched: self.matched,
            message_chars: self.message_chars,
            excerpt: self.excerpt,
        })
    }
}

/// Generate a unique event ID
pub fn generate_event_id() -> String {
    use rand::RngCore;
    let mut bytes = [0u8; 16];
    rand::rngs::OsRng.fill_bytes(&mut bytes[..]);
    hex::encode(bytes)
}

/// Moderation log configuration
#[derive(Debug, Clone)]
pub struct ModerationLogConfig {
    pub min_severity: ModerationSeverity,
    pub max_events: usize,
    pub log_events: bool,
    pub include_sensitive: bool,
}

impl Default for ModerationLogConfig {
    fn default() -> Self {
        Self::from(&AuditSettings::default())
    }
}

impl From<&AuditSettings> for ModerationLogConfig {
    fn from(settings: &AuditSettings) -> Self {
        Self {
            min_severity: settings.min_severity,
            max_events: settings.max_events,
            log_events: settings.log_events,
            include_sensitive: settings.include_sensitive,
        }
    }
}
