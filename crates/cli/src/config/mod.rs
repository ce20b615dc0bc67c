// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing for `cgrep.toml`.
//!
//! Unknown keys are logged and ignored so that newer config files still load.

pub mod defaults;

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::check::Severity;
use crate::pattern::{MatchLimits, PatternError};
use crate::rule::Rule;

pub use defaults::{CONFIG_FILE_NAME, CONFIG_VERSION};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Schema version; only 1 is supported.
    pub version: Option<i64>,

    /// Engine limits applied to every pattern.
    pub engine: MatchLimits,

    /// Declared rules, in file order.
    pub rule: Vec<RuleConfig>,
}

/// One `[[rule]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    pub name: String,
    pub pattern: String,

    /// Reported message (defaults to the rule name).
    #[serde(default)]
    pub message: Option<String>,

    /// "error" | "warn" | "info"
    #[serde(default)]
    pub severity: Severity,

    /// File extensions to check, without the dot. Empty means every file.
    #[serde(default)]
    pub extensions: Vec<String>,
}

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },

    #[error(
        "unsupported config version {found} in {} (expected {})",
        path.display(),
        CONFIG_VERSION
    )]
    Version { path: PathBuf, found: i64 },

    #[error("rule `{name}`")]
    Rule {
        name: String,
        #[source]
        source: PatternError,
    },
}

impl Config {
    /// Compile every declared rule.
    pub fn rules(&self) -> Result<Vec<Rule>, ConfigError> {
        self.rule
            .iter()
            .map(|rule| {
                Rule::from_config(rule, self.engine)
                    .map_err(|source| ConfigError::Rule { name: rule.name.clone(), source })
            })
            .collect()
    }
}

/// Load configuration from a file.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    parse(&content, path)
}

/// Parse configuration text. `path` is used for messages only.
pub fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let parse_error =
        |e: toml::de::Error| ConfigError::Parse { path: path.to_path_buf(), source: Box::new(e) };

    let table: toml::Table = toml::from_str(content).map_err(parse_error)?;
    for key in unknown_keys(&table) {
        tracing::warn!("unknown config key `{}` in {}", key, path.display());
    }

    let config: Config = toml::Value::Table(table).try_into().map_err(parse_error)?;
    match config.version {
        Some(found) if found != CONFIG_VERSION => {
            Err(ConfigError::Version { path: path.to_path_buf(), found })
        }
        _ => Ok(config),
    }
}

/// Dotted paths of keys this version does not understand.
pub fn unknown_keys(table: &toml::Table) -> Vec<String> {
    let mut unknown: Vec<String> = table
        .keys()
        .filter(|key| !defaults::keys::TOP_LEVEL.contains(&key.as_str()))
        .cloned()
        .collect();

    if let Some(toml::Value::Table(engine)) = table.get("engine") {
        unknown.extend(
            engine
                .keys()
                .filter(|key| !defaults::keys::ENGINE.contains(&key.as_str()))
                .map(|key| format!("engine.{key}")),
        );
    }

    if let Some(toml::Value::Array(rules)) = table.get("rule") {
        for (i, rule) in rules.iter().enumerate() {
            let Some(rule) = rule.as_table() else { continue };
            unknown.extend(
                rule.keys()
                    .filter(|key| !defaults::keys::RULE.contains(&key.as_str()))
                    .map(|key| format!("rule[{i}].{key}")),
            );
        }
    }

    unknown
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
