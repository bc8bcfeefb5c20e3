// Copyright 2024-2026 Chat Guard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Moderation audit log.
//!
//! Bounded in-memory record of moderation decisions. Types live in
//! `audit_types.rs`.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::Arc;

pub use super::audit_types::*;

/// Moderation audit log
pub struct ModerationLog {
    config: ModerationLogConfig,
    events: RwLock<Vec<ModerationEvent>>,
}

impl ModerationLog {
    pub fn new(config: ModerationLogConfig) -> Self {
        Self { config, events: RwLock::new(Vec::new()) }
    }

    pub fn include_sensitive(&self) -> bool {
        self.config.include_sensitive
    }

    pub fn record(&self, mut event: ModerationEvent) {
        if event.severity < self.config.min_severity {
            return;
        }
        if !self.config.include_sensitive {
            event.excerpt = None;
        }
        if self.config.log_events {
            tracing::info!(target: "chat_guard::audit", "{}", event.to_log_string());
        }
        let mut events = self.events.write();
        events.push(event);
        if events.len() > self.config.max_events {
            let excess = events.len() - self.config.max_events;
            events.drain(0..excess);
        }
    }

    pub fn events(&self) -> Vec<ModerationEvent> {
        self.events.read().clone()
    }

    pub fn events_by_outcome(&self, outcome: ModerationOutcome) -> Vec<ModerationEvent> {
        self.events.read().iter()
            .filter(|e| e.outcome == outcome).cloned().collect()
    }

    pub fn events_by_severity(&self, severity: ModerationSeverity) -> Vec<ModerationEvent> {
        self.events.read().iter()
            .filter(|e| e.severity >= severity).cloned().collect()
    }

    pub fn events_by_time(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<ModerationEvent> {
        self.events.read().iter()
            .filter(|e| e.timestamp >= start && e.timestamp <= end).cloned().collect()
    }

    pub fn clear(&self) { self.events.write().clear(); }

    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        let events = self.events.read();
        serde_json::to_string_pretty(&*events)
    }

    pub fn event_count(&self) -> usize { self.events.read().len() }
}

impl Default for ModerationLog {
    fn default() -> Self { Self::new(ModerationLogConfig::default()) }
}

/// Global moderation log instance
static MODERATION_LOG: std::sync::OnceLock<Arc<ModerationLog>> = std::sync::OnceLock::new();

pub fn init_moderation_log(config: ModerationLogConfig) -> Arc<ModerationLog> {
    MODERATION_LOG.get_or_init(|| Arc::new(ModerationLog::new(config))).clone()
}

pub fn moderation_log() -> Option<Arc<ModerationLog>> {
    MODERATION_LOG.get().cloned()
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
