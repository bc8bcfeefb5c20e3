// Copyright 2024-2026 Chat Guard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Remote messaging service seam.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("Messaging service unavailable: {0}")]
    Unavailable(String),
    #[error("Messaging service rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("Conversation not found: {0}")]
    NotFound(String),
}

/// Server-reported state of one conversation, as returned with the message list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSnapshot {
    pub conversation_id: String,
    #[serde(default)]
    pub has_active_booking: bool,
    #[serde(default)]
    pub sent_count: u32,
}

/// The remote conversation/message service.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Fresh booking state and sent count for a conversation.
    async fn fetch_snapshot(&self, conversation_id: &str) -> Result<ConversationSnapshot, TransportError>;

    /// Transmit a message that already passed the quota and content checks.
    async fn send(&self, conversation_id: &str, text: &str) -> Result<(), TransportError>;
}
