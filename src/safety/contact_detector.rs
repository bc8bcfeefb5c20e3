// Copyright 2024-2026 Chat Guard Contributors
// SPDX-License-Identifier: Apache-2.0

//! Contact-info detector and censor.
//!
//! Works on the raw message (no case folding, no normalization) so the
//! censored output keeps every non-matching character exactly as typed.

use regex::{Captures, Regex};
use std::sync::Arc;

use super::contact_patterns::{self, ContactKind};

/// A detected contact detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMatch {
    pub kind: ContactKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Contact detector with compiled patterns.
#[derive(Clone)]
pub struct ContactDetector {
    patterns: Arc<Vec<(ContactKind, Regex)>>,
}

impl ContactDetector {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            patterns: Arc::new(contact_patterns::build_patterns()?),
        })
    }

    /// True as soon as any pattern matches.
    pub fn contains(&self, message: &str) -> bool {
        self.patterns.iter().any(|(_, regex)| regex.is_match(message))
    }

    /// All matches against the raw message, grouped by pattern in precedence
    /// order and by position within each pattern. Spans of different
    /// patterns may overlap.
    pub fn detect(&self, message: &str) -> Vec<ContactMatch> {
        let mut matches = Vec::new();
        for (kind, regex) in self.patterns.iter() {
            for m in regex.find_iter(message) {
                matches.push(ContactMatch {
                    kind: *kind,
                    text: m.as_str().to_string(),
                    start: m.start(),
                    end: m.end(),
                });
            }
        }
        matches
    }

    /// Replace every match with an equal-length `*` run, pattern by pattern,
    /// each pattern seeing the output of the previous one.
    pub fn censor(&self, message: &str) -> String {
        let mut result = message.to_string();
        for (_, regex) in self.patterns.iter() {
            if regex.is_match(&result) {
                result = regex
                    .replace_all(&result, |caps: &Captures| contact_patterns::mask(&caps[0]))
                    .into_owned();
            }
        }
        result
    }
}
