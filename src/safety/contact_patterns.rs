// Copyright 2024-2026 Chat Guard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Contact-info patterns, in precedence order.
//!
//! Order matters: the censor applies them one after another, so an earlier
//! pattern wins any span it shares with a later one. None of the patterns use
//! word-boundary assertions; a single censor pass therefore leaves nothing a
//! second pass could match.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Kind of contact detail a pattern finds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Phone,
    Email,
    WhatsAppLink,
    TelegramLink,
}

impl ContactKind {
    pub fn name(&self) -> &'static str {
        match self {
            ContactKind::Phone => "Phone Number",
            ContactKind::Email => "Email Address",
            ContactKind::WhatsAppLink => "WhatsApp Link",
            ContactKind::TelegramLink => "Telegram Link",
        }
    }
}

impl std::fmt::Display for ContactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Pattern sources, evaluated top to bottom.
const PATTERNS: &[(ContactKind, &str)] = &[
    // Bare 10-13 digit run.
    (ContactKind::Phone, r"[0-9]{10,13}"),
    // National format with leading zero.
    (ContactKind::Phone, r"0[0-9]{9,12}"),
    // Punctuated, optional country code: 0812-3456-7890, +62 812-3456-7890
    (ContactKind::Phone, r"(?:\+?[0-9]{2,3}[-.\s]?)?[0-9]{3,4}[-.\s]?[0-9]{3,4}[-.\s]?[0-9]{3,4}"),
    (ContactKind::Email, r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"),
    (ContactKind::WhatsAppLink, r"(?i)wa\.me/[0-9]+"),
    (ContactKind::TelegramLink, r"(?i)t\.me/[a-zA-Z0-9_]+"),
];

/// Compile the contact patterns in precedence order.
pub fn build_patterns() -> Result<Vec<(ContactKind, Regex)>, regex::Error> {
    PATTERNS
        .iter()
        .map(|(kind, src)| Ok((*kind, Regex::new(src)?)))
        .collect()
}

/// Equal-length mask for a matched span, one `*` per character.
pub fn mask(matched: &str) -> String {
    "*".repeat(matched.chars().count())
}
