// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled pattern facade.
//!
//! Compiles pattern text once, then scans any number of texts. Every scan is
//! bounded by a match cap and a loop guard that stops on a non-advancing match.

use std::collections::HashSet;

use fancy_regex::{CaptureMatches, Captures, Regex, RegexBuilder};
use serde::Deserialize;

use super::bind::{self, CaptureTable};
use super::classify::{MatchResult, classify};
use super::token::{self, Category};
use super::{normalize, whitespace};

/// Default maximum number of matches produced per scan.
pub const DEFAULT_MAX_MATCHES: usize = 50;

/// Default backtracking budget for a single match attempt.
pub const DEFAULT_BACKTRACK_LIMIT: usize = 1_000_000;

/// Errors raised while compiling a pattern.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// `REGEX(` without a matching `)`.
    #[error("unbalanced REGEX( at offset {offset} in pattern `{pattern}`")]
    UnbalancedRegex { pattern: String, offset: usize },

    /// The assembled expression was rejected by the regex engine.
    #[error("invalid pattern `{pattern}`")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },
}

/// Engine-wide limits applied to every scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MatchLimits {
    /// Maximum matches produced per scan.
    pub max_matches: usize,
    /// Backtracking steps allowed per match attempt.
    pub backtrack_limit: usize,
}

impl Default for MatchLimits {
    fn default() -> Self {
        Self { max_matches: DEFAULT_MAX_MATCHES, backtrack_limit: DEFAULT_BACKTRACK_LIMIT }
    }
}

/// Location and text of a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch<'t> {
    /// Byte offset of the match start.
    pub start: usize,
    /// Byte offset one past the match end.
    pub end: usize,
    pub text: &'t str,
}

/// A pattern compiled into a matcher.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    regex: Regex,
    /// Named groups in group order with their category.
    groups: Vec<(usize, Category)>,
    limits: MatchLimits,
}

impl CompiledPattern {
    /// Compile `pattern` with default limits.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Self::with_limits(pattern, MatchLimits::default())
    }

    /// Compile `pattern` with explicit engine limits.
    pub fn with_limits(pattern: &str, limits: MatchLimits) -> Result<Self, PatternError> {
        let pieces = token::extract(pattern)?;
        let segments = normalize::normalize(pieces);
        let (fragments, captures) = bind::bind(segments);
        let expr = whitespace::assemble(&whitespace::relax(fragments));

        tracing::debug!(pattern, expr = %expr, captures = captures.len(), "compiled pattern");
        Self::build(pattern, &expr, &captures, limits)
    }

    /// Compile plain text that must match literally, with no pattern syntax.
    pub fn literal(text: &str, limits: MatchLimits) -> Result<Self, PatternError> {
        let expr = fancy_regex::escape(text);
        Self::build(text, &expr, &CaptureTable::default(), limits)
    }

    fn build(
        pattern: &str,
        expr: &str,
        captures: &CaptureTable,
        limits: MatchLimits,
    ) -> Result<Self, PatternError> {
        let regex = RegexBuilder::new(expr)
            .backtrack_limit(limits.backtrack_limit)
            .build()
            .map_err(|e| PatternError::InvalidRegex {
                pattern: pattern.to_string(),
                source: Box::new(e),
            })?;

        let groups = regex
            .capture_names()
            .enumerate()
            .filter_map(|(index, name)| name.map(|name| (index, captures.category(name))))
            .collect();

        Ok(Self { source: pattern.to_string(), regex, groups, limits })
    }

    /// Pattern text this matcher was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Compiled matcher expression.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn limits(&self) -> MatchLimits {
        self.limits
    }

    /// Every match in `text`, classified. Each call rescans from the start.
    pub fn find_all(&self, text: &str) -> impl Iterator<Item = MatchResult> {
        self.scan(text).map(move |caps| classify(&caps, &self.groups))
    }

    /// First match in `text`, or an empty result when nothing matches.
    pub fn find_first(&self, text: &str) -> MatchResult {
        self.find_all(text).next().unwrap_or_default()
    }

    /// True if `text` contains at least one match.
    pub fn is_match(&self, text: &str) -> bool {
        self.scan(text).next().is_some()
    }

    /// Location and text of every match in `text`.
    pub fn spans<'t>(&self, text: &'t str) -> impl Iterator<Item = PatternMatch<'t>> {
        self.scan(text).filter_map(|caps| {
            caps.get(0).map(|m| PatternMatch { start: m.start(), end: m.end(), text: m.as_str() })
        })
    }

    fn scan<'r, 't>(&'r self, text: &'t str) -> Scan<'r, 't> {
        Scan {
            captures: self.regex.captures_iter(text),
            guard: ScanGuard::new(self.limits.max_matches),
            source: &self.source,
            done: false,
        }
    }
}

/// Raw captures under the match cap and loop guard.
struct Scan<'r, 't> {
    captures: CaptureMatches<'r, 't>,
    guard: ScanGuard,
    source: &'r str,
    done: bool,
}

impl<'t> Iterator for Scan<'_, 't> {
    type Item = Captures<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let caps = match self.captures.next() {
            Some(Ok(caps)) => caps,
            Some(Err(e)) => {
                tracing::warn!(pattern = self.source, "scan aborted: {}", e);
                self.done = true;
                return None;
            }
            None => {
                self.done = true;
                return None;
            }
        };

        let Some(whole) = caps.get(0) else {
            self.done = true;
            return None;
        };

        match self.guard.admit(whole.start(), whole.end() - whole.start()) {
            Admit::Yes => Some(caps),
            Admit::CapReached => {
                tracing::debug!(pattern = self.source, "match cap reached");
                self.done = true;
                None
            }
            Admit::Repeated => {
                tracing::warn!(pattern = self.source, at = whole.start(), "non-advancing match");
                self.done = true;
                None
            }
        }
    }
}

/// Outcome of offering a match to the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Admit {
    Yes,
    CapReached,
    Repeated,
}

/// Tracks produced matches by (start, length).
#[derive(Debug)]
struct ScanGuard {
    limit: usize,
    seen: HashSet<(usize, usize)>,
}

impl ScanGuard {
    fn new(limit: usize) -> Self {
        Self { limit, seen: HashSet::new() }
    }

    fn admit(&mut self, start: usize, len: usize) -> Admit {
        if self.seen.len() >= self.limit {
            return Admit::CapReached;
        }
        if !self.seen.insert((start, len)) {
            return Admit::Repeated;
        }
        Admit::Yes
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
