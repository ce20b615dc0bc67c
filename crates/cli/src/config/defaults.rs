// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.

/// Config file name searched for by discovery.
pub const CONFIG_FILE_NAME: &str = "cgrep.toml";

/// Only supported config schema version.
pub const CONFIG_VERSION: i64 = 1;

/// Keys understood at each level of the config file.
pub mod keys {
    pub const TOP_LEVEL: &[&str] = &["version", "engine", "rule"];
    pub const ENGINE: &[&str] = &["max_matches", "backtrack_limit"];
    pub const RULE: &[&str] = &["name", "pattern", "message", "severity", "extensions"];
}
