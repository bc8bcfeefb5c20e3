// Copyright 2024-2026 Chat Guard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Chat screen glue: runs the safety checks in front of the messaging service.

pub mod sender;
pub mod transport;

pub use sender::{ChatError, ChatSender, Confirmation, PendingMessage, Rejection, SubmitOutcome};
pub use transport::{ConversationSnapshot, MessageTransport, TransportError};
