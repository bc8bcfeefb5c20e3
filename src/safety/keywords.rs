// Copyright 2024-2026 Chat Guard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Blocked keyword list and substring matcher.
//!
//! Matching is plain substring containment on the lower-cased message, so short
//! keywords also fire inside longer words. That over-blocking is accepted:
//! missing a payment-bypass attempt is the failure that matters.
//!
//! # Security
//! Besides the lower-cased message, a normalized view (zero-width characters
//! stripped, NFKC folded) is scanned too, so `ｃａｓｈ` or `tr\u{200B}ansfer`
//! are still caught.

use aho_corasick::AhoCorasick;
use unicode_normalization::UnicodeNormalization;

/// Payment-method terms.
const PAYMENT_KEYWORDS: &[&str] = &[
    "transfer", "cod", "cash", "tunai", "rekening", "bank", "bca", "bni", "bri",
    "mandiri", "dana", "ovo", "gopay", "paypal", "venmo",
];

/// Contact channels outside the app.
const CHANNEL_KEYWORDS: &[&str] = &[
    "whatsapp", "telegram", "instagram", "email", "e-mail", "gmail",
];

/// Requests for a phone number.
const PHONE_REQUEST_KEYWORDS: &[&str] = &[
    "nomor", "nomer", "no hp", "hp", "phone", "telp", "telepon", "contact", "kontak",
];

/// Explicit bypass language.
const BYPASS_KEYWORDS: &[&str] = &[
    "bypass", "tanpa aplikasi", "luar aplikasi", "outside", "langsung", "off platform",
    "off-platform",
];

/// Built-in blocked keyword list, in category order.
pub fn default_keywords() -> Vec<String> {
    PAYMENT_KEYWORDS
        .iter()
        .chain(CHANNEL_KEYWORDS)
        .chain(PHONE_REQUEST_KEYWORDS)
        .chain(BYPASS_KEYWORDS)
        .map(|k| k.to_string())
        .collect()
}

/// Characters that render as nothing and are used to split keywords.
fn is_invisible(c: char) -> bool {
    matches!(
        c,
        '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}' | '\u{FEFF}' | '\u{00AD}'
    )
}

/// Lower-cased, invisible-free, NFKC view of a message.
pub fn normalize(message: &str) -> String {
    let visible: String = message.chars().filter(|c| !is_invisible(*c)).collect();
    visible.nfkc().collect::<String>().to_lowercase()
}

/// Compiled keyword matcher.
pub struct KeywordMatcher {
    keywords: Vec<String>,
    automaton: AhoCorasick,
}

impl KeywordMatcher {
    /// Keywords go through the same normalization as messages; callers
    /// reject blank entries beforehand.
    pub fn new(keywords: &[String]) -> Result<Self, aho_corasick::BuildError> {
        let keywords: Vec<String> = keywords.iter().map(|k| normalize(k)).collect();
        let automaton = AhoCorasick::new(&keywords)?;
        Ok(Self { keywords, automaton })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True if any keyword occurs anywhere in the message.
    pub fn is_match(&self, message: &str) -> bool {
        let lowered = message.to_lowercase();
        self.automaton.is_match(&lowered) || self.automaton.is_match(&normalize(message))
    }

    /// Every keyword present, deduplicated, in list order.
    pub fn matches(&self, message: &str) -> Vec<String> {
        let mut hit = vec![false; self.keywords.len()];
        for view in [message.to_lowercase(), normalize(message)] {
            for m in self.automaton.find_overlapping_iter(&view) {
                hit[m.pattern().as_usize()] = true;
            }
        }
        self.keywords
            .iter()
            .zip(hit)
            .filter_map(|(k, found)| found.then(|| k.clone()))
            .collect()
    }
}
