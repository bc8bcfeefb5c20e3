// Copyright 2024-2026 Chat Guard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Chat safety configuration.
//!
//! Loaded from the TOML file named by `CHAT_GUARD_CONFIG` (built-in defaults
//! when unset), then overridden by `CHAT_GUARD_MAX_MESSAGES`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::safety::audit::ModerationSeverity;
use crate::safety::keywords::{default_keywords, normalize};
use crate::safety::quota::DEFAULT_MAX_MESSAGES;

pub const CONFIG_PATH_ENV: &str = "CHAT_GUARD_CONFIG";
pub const MAX_MESSAGES_ENV: &str = "CHAT_GUARD_MAX_MESSAGES";

pub const EMPTY_MESSAGE_REASON: &str = "Message cannot be empty";
pub const KEYWORD_BLOCKED_REASON: &str = "For your safety, arranging payments or sharing contact details outside the app is not allowed. Please complete bookings and payments through the app.";
pub const CONTACT_CENSORED_REASON: &str = "Contact information has been hidden. Keep conversations and payments in the app so your booking stays protected.";
pub const QUOTA_EXHAUSTED_REASON: &str =
    "You've reached the message limit. Book this property to unlock unlimited chat.";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Advisory texts surfaced to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyMessages {
    pub empty: String,
    pub keyword_blocked: String,
    pub contact_censored: String,
    pub quota_exhausted: String,
}

impl Default for PolicyMessages {
    fn default() -> Self {
        Self {
            empty: EMPTY_MESSAGE_REASON.to_string(),
            keyword_blocked: KEYWORD_BLOCKED_REASON.to_string(),
            contact_censored: CONTACT_CENSORED_REASON.to_string(),
            quota_exhausted: QUOTA_EXHAUSTED_REASON.to_string(),
        }
    }
}

/// Moderation audit settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditSettings {
    pub max_events: usize,
    pub min_severity: ModerationSeverity,
    /// Store a censored excerpt of the message with each event.
    pub include_sensitive: bool,
    /// Mirror every recorded event to the tracing output.
    pub log_events: bool,
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            max_events: 10_000,
            min_severity: ModerationSeverity::Info,
            include_sensitive: false,
            log_events: true,
        }
    }
}

/// Top-level chat safety configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyConfig {
    /// Outgoing messages allowed before a booking exists.
    pub max_messages: u32,
    /// Replaces the built-in keyword list when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Appended to the active keyword list.
    pub extra_keywords: Vec<String>,
    pub messages: PolicyMessages,
    pub audit: AuditSettings,
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            max_messages: DEFAULT_MAX_MESSAGES,
            keywords: None,
            extra_keywords: Vec::new(),
            messages: PolicyMessages::default(),
            audit: AuditSettings::default(),
        }
    }
}

impl SafetyConfig {
    /// Parse a TOML document. Missing fields take their defaults.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: SafetyConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&source)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Active keyword list: base list plus extras, normalized, deduplicated.
    pub fn effective_keywords(&self) -> Vec<String> {
        let base = match &self.keywords {
            Some(list) => list.clone(),
            None => default_keywords(),
        };
        let mut out: Vec<String> = Vec::with_capacity(base.len() + self.extra_keywords.len());
        for keyword in base.iter().chain(&self.extra_keywords) {
            let keyword = normalize(keyword);
            if !out.contains(&keyword) {
                out.push(keyword);
            }
        }
        out
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_messages == 0 {
            return Err(ConfigError::Invalid("max_messages must be greater than 0".into()));
        }
        let keywords = self.effective_keywords();
        if keywords.is_empty() {
            return Err(ConfigError::Invalid("keyword list cannot be empty".into()));
        }
        if keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ConfigError::Invalid("keywords cannot be blank".into()));
        }
        let texts = [
            ("messages.empty", &self.messages.empty),
            ("messages.keyword_blocked", &self.messages.keyword_blocked),
            ("messages.contact_censored", &self.messages.contact_censored),
            ("messages.quota_exhausted", &self.messages.quota_exhausted),
        ];
        for (field, text) in texts {
            if text.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{} cannot be empty", field)));
            }
        }
        if self.audit.max_events == 0 {
            return Err(ConfigError::Invalid("audit.max_events must be greater than 0".into()));
        }
        Ok(())
    }

    /// Apply environment overrides on top of this config.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_overrides(std::env::var(MAX_MESSAGES_ENV).ok())
    }

    /// Apply an override for `max_messages`, then validate the result.
    pub fn apply_overrides(mut self, max_messages: Option<String>) -> Result<Self, ConfigError> {
        if let Some(value) = max_messages {
            self.max_messages = value.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!(
                    "{} must be a positive integer, got {:?}",
                    MAX_MESSAGES_ENV, value
                ))
            })?;
        }
        self.validate()?;
        Ok(self)
    }
}

/// Path of the config file, if one is configured.
pub fn config_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from)
}

/// Load configuration from the environment.
pub fn load() -> Result<SafetyConfig, ConfigError> {
    let config = match config_path() {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading chat safety config");
            SafetyConfig::from_file(&path)?
        }
        None => SafetyConfig::default(),
    };
    config.apply_env()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
