// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check interface: per-file input, severities, and the reporter that turns
//! pattern matches into findings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::line_index::LineIndex;
use crate::pattern::{CompiledPattern, MatchLimits};

/// Per-file input handed to every check.
#[derive(Debug, Clone)]
pub struct CheckParams<'a> {
    pub file_contents: &'a str,
    /// Directory containing the file, without trailing separator.
    pub file_path: String,
    /// File name without extension.
    pub file_name: String,
    /// Extension without the leading dot; empty when there is none.
    pub file_extension: String,
}

impl<'a> CheckParams<'a> {
    pub fn new(path: &Path, file_contents: &'a str) -> Self {
        let part = |s: Option<&std::ffi::OsStr>| {
            s.map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
        };
        let file_path = path
            .parent()
            .map(|p| p.to_string_lossy().trim_end_matches(['/', '\\']).to_string())
            .unwrap_or_default();

        Self {
            file_contents,
            file_path,
            file_name: part(path.file_stem()),
            file_extension: part(path.extension()),
        }
    }
}

/// Finding severity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warn,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
        }
    }
}

impl From<&str> for Severity {
    /// Unknown names fall back to `error`.
    fn from(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "warn" | "warning" => Self::Warn,
            "info" => Self::Info,
            _ => Self::Error,
        }
    }
}

impl From<String> for Severity {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

/// What a reporter should look for.
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    Pattern(&'a CompiledPattern),
    /// Plain text, matched literally.
    Text(&'a str),
}

/// Receives reports from checks.
pub trait Reporter {
    fn report(&mut self, target: Target<'_>, message: &str, severity: Severity);
}

/// A named check run against each file.
pub trait Check {
    fn name(&self) -> &str;

    fn run(&self, params: &CheckParams<'_>, reporter: &mut dyn Reporter);
}

/// One matched location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub path: PathBuf,
    /// 1-based line of the match start.
    pub line: u32,
    pub severity: Severity,
    pub message: String,
    /// Matched text.
    pub text: String,
}

/// Reporter that records one finding per match in a single file.
pub struct Findings<'a> {
    path: PathBuf,
    contents: &'a str,
    lines: LineIndex,
    limits: MatchLimits,
    findings: Vec<Finding>,
}

impl<'a> Findings<'a> {
    pub fn new(path: &Path, contents: &'a str, limits: MatchLimits) -> Self {
        Self {
            path: path.to_path_buf(),
            contents,
            lines: LineIndex::new(contents),
            limits,
            findings: Vec::new(),
        }
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }

    pub fn has_errors(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Error)
    }

    fn record(&mut self, pattern: &CompiledPattern, message: &str, severity: Severity) {
        for span in pattern.spans(self.contents) {
            self.findings.push(Finding {
                path: self.path.clone(),
                line: self.lines.line_of(span.start),
                severity,
                message: message.to_string(),
                text: span.text.to_string(),
            });
        }
    }
}

impl Reporter for Findings<'_> {
    fn report(&mut self, target: Target<'_>, message: &str, severity: Severity) {
        match target {
            Target::Pattern(pattern) => self.record(pattern, message, severity),
            Target::Text(text) => match CompiledPattern::literal(text, self.limits) {
                Ok(pattern) => self.record(&pattern, message, severity),
                Err(e) => tracing::warn!("cannot search for {:?}: {}", text, e),
            },
        }
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
