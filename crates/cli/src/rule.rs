// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern rules: a compiled pattern plus the message to report.

use crate::check::{Check, CheckParams, Reporter, Severity, Target};
use crate::config::RuleConfig;
use crate::pattern::{CompiledPattern, MatchLimits, PatternError};

/// A check that reports every match of one pattern.
#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    pattern: CompiledPattern,
    message: String,
    severity: Severity,
    /// Extensions this rule applies to; empty means every file.
    extensions: Vec<String>,
}

impl Rule {
    /// Build a rule from its config entry, compiling the pattern.
    pub fn from_config(config: &RuleConfig, limits: MatchLimits) -> Result<Self, PatternError> {
        let pattern = CompiledPattern::with_limits(&config.pattern, limits)?;
        let message = config.message.clone().unwrap_or_else(|| config.name.clone());
        let extensions = config
            .extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();

        Ok(Self {
            name: config.name.clone(),
            pattern,
            message,
            severity: config.severity,
            extensions,
        })
    }

    /// Build a rule for a pattern given on the command line.
    pub fn ad_hoc(
        pattern: &str,
        message: Option<&str>,
        severity: Severity,
        limits: MatchLimits,
    ) -> Result<Self, PatternError> {
        let pattern = CompiledPattern::with_limits(pattern, limits)?;
        let message =
            message.map_or_else(|| format!("matched `{}`", pattern.source()), String::from);

        Ok(Self {
            name: pattern.source().to_string(),
            pattern,
            message,
            severity,
            extensions: Vec::new(),
        })
    }

    /// True when this rule should run on `params`.
    pub fn applies_to(&self, params: &CheckParams<'_>) -> bool {
        self.extensions.is_empty()
            || self.extensions.iter().any(|ext| ext.eq_ignore_ascii_case(&params.file_extension))
    }
}

impl Check for Rule {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, params: &CheckParams<'_>, reporter: &mut dyn Reporter) {
        if !self.applies_to(params) {
            return;
        }
        reporter.report(Target::Pattern(&self.pattern), &self.message, self.severity);
    }
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
