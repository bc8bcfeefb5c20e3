// Copyright 2024-2026 Chat Guard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Outgoing chat message pipeline.
//!
//! Sequencing per send attempt: fetch a fresh snapshot, check the quota,
//! validate the content, then either transmit, reject, or hand back a
//! censored version for the user to confirm. The quota is re-checked against
//! a new snapshot before a confirmed message goes out.

use std::sync::Arc;
use thiserror::Error;

use super::transport::{MessageTransport, TransportError};
use crate::safety::audit::{self, ModerationEvent, ModerationLog, ModerationOutcome};
use crate::safety::{ChatSafetyPolicy, ContactKind, Verdict};

#[derive(Error, Debug)]
pub enum ChatError {
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Why a message was not sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Nothing to send; the caller just does nothing.
    Empty { reason: String },
    /// Blocked keyword; must not be transmitted.
    PolicyViolation { reason: String, matched: Vec<String> },
    /// Pre-booking quota used up; steer the user toward booking.
    QuotaExhausted { reason: String },
}

impl Rejection {
    pub fn reason(&self) -> &str {
        match self {
            Rejection::Empty { reason }
            | Rejection::PolicyViolation { reason, .. }
            | Rejection::QuotaExhausted { reason } => reason,
        }
    }
}

/// A censored message waiting for the user's go-ahead.
///
/// Only the censored text is kept, so the original cannot be sent from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMessage {
    conversation_id: String,
    censored: String,
    reason: String,
    kinds: Vec<ContactKind>,
}

impl PendingMessage {
    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }

    /// Text that will be sent if the user accepts.
    pub fn censored_text(&self) -> &str {
        &self.censored
    }

    /// Advisory to show next to the censored text.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn kinds(&self) -> &[ContactKind] {
        &self.kinds
    }
}

/// User's answer to a censorship prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Accept,
    Decline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Transmitted; carries the text that went out.
    Sent { text: String },
    Rejected(Rejection),
    AwaitingConfirmation(PendingMessage),
    /// User declined the censored version; nothing was sent.
    Discarded,
}

/// Gatekeeper in front of a [`MessageTransport`].
pub struct ChatSender<T: MessageTransport> {
    transport: T,
    policy: Arc<ChatSafetyPolicy>,
    log: Option<Arc<ModerationLog>>,
}

impl<T: MessageTransport> ChatSender<T> {
    /// Records to the global moderation log when one has been initialized.
    pub fn new(transport: T, policy: Arc<ChatSafetyPolicy>) -> Self {
        Self { transport, policy, log: audit::moderation_log() }
    }

    pub fn with_log(mut self, log: Arc<ModerationLog>) -> Self {
        self.log = Some(log);
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn policy(&self) -> &ChatSafetyPolicy {
        &self.policy
    }

    /// Run one send attempt for the text exactly as the user typed it.
    pub async fn submit(&self, conversation_id: &str, text: &str) -> Result<SubmitOutcome, ChatError> {
        if let Some(rejection) = self.check_quota(conversation_id).await? {
            return Ok(SubmitOutcome::Rejected(rejection));
        }

        let trimmed = text.trim();
        let chars = trimmed.chars().count();
        let result = self.policy.validate_message(text);
        let reason = result.reason.clone().unwrap_or_default();

        match result.verdict() {
            Verdict::Empty => {
                self.record(ModerationEvent::builder()
                    .outcome(ModerationOutcome::EmptyRejected)
                    .conversation_id(conversation_id));
                Ok(SubmitOutcome::Rejected(Rejection::Empty { reason }))
            }
            Verdict::KeywordBlocked => {
                let matched = self.policy.matched_keywords(trimmed);
                self.record(ModerationEvent::builder()
                    .outcome(ModerationOutcome::KeywordBlocked)
                    .conversation_id(conversation_id)
                    .matched_all(matched.iter().cloned())
                    .message_chars(chars));
                Ok(SubmitOutcome::Rejected(Rejection::PolicyViolation { reason, matched }))
            }
            Verdict::ContactCensored => {
                let censored = result.censored_message.unwrap_or_default();
                let mut kinds: Vec<ContactKind> = Vec::new();
                for m in self.policy.detect_contact_info(trimmed) {
                    if !kinds.contains(&m.kind) {
                        kinds.push(m.kind);
                    }
                }
                self.record(ModerationEvent::builder()
                    .outcome(ModerationOutcome::ContactCensored)
                    .conversation_id(conversation_id)
                    .matched_all(kinds.iter().map(|k| k.name()))
                    .message_chars(chars)
                    .excerpt(censored.clone()));
                Ok(SubmitOutcome::AwaitingConfirmation(PendingMessage {
                    conversation_id: conversation_id.to_string(),
                    censored,
                    reason,
                    kinds,
                }))
            }
            Verdict::Clean => self.transmit(conversation_id, trimmed).await,
        }
    }

    /// Resolve a censorship prompt. Declining drops the message; accepting
    /// re-checks the quota and sends the censored text.
    pub async fn confirm(
        &self,
        pending: PendingMessage,
        confirmation: Confirmation,
    ) -> Result<SubmitOutcome, ChatError> {
        match confirmation {
            Confirmation::Decline => {
                self.record(ModerationEvent::builder()
                    .outcome(ModerationOutcome::CensorDeclined)
                    .conversation_id(pending.conversation_id.as_str()));
                Ok(SubmitOutcome::Discarded)
            }
            Confirmation::Accept => {
                if let Some(rejection) = self.check_quota(&pending.conversation_id).await? {
                    return Ok(SubmitOutcome::Rejected(rejection));
                }
                self.transmit(&pending.conversation_id, &pending.censored).await
            }
        }
    }

    async fn check_quota(&self, conversation_id: &str) -> Result<Option<Rejection>, ChatError> {
        let snapshot = self.transport.fetch_snapshot(conversation_id).await?;
        let decision = self.policy.can_send_message(snapshot.has_active_booking, snapshot.sent_count);
        if decision.can_send {
            return Ok(None);
        }
        self.record(ModerationEvent::builder()
            .outcome(ModerationOutcome::QuotaExhausted)
            .conversation_id(conversation_id));
        Ok(Some(Rejection::QuotaExhausted {
            reason: decision.reason.unwrap_or_default(),
        }))
    }

    async fn transmit(&self, conversation_id: &str, text: &str) -> Result<SubmitOutcome, ChatError> {
        self.transport.send(conversation_id, text).await.map_err(|e| {
            tracing::warn!(conversation_id, error = %e, "message transmission failed");
            e
        })?;
        self.record(ModerationEvent::builder()
            .outcome(ModerationOutcome::Delivered)
            .conversation_id(conversation_id)
            .message_chars(text.chars().count()));
        Ok(SubmitOutcome::Sent { text: text.to_string() })
    }

    fn record(&self, builder: audit::ModerationEventBuilder) {
        let event = match builder.source("chat_sender").build() {
            Ok(event) => event,
            Err(e) => {
                tracing::error!(error = e, "failed to build moderation event");
                return;
            }
        };
        metrics::counter!("chat_guard_messages_total", "outcome" => event.outcome.as_str())
            .increment(1);
        tracing::debug!(
            outcome = %event.outcome,
            conversation_id = ?event.conversation_id,
            "moderation decision"
        );
        if let Some(log) = &self.log {
            log.record(event);
        }
    }
}
