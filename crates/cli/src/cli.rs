// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::check::Severity;
use crate::color::ColorMode;

/// Structural code search: find code by shape, not by text
#[derive(Debug, Parser)]
#[command(name = "cgrep")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Files to check
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Pattern to search for (repeatable)
    #[arg(short = 'e', long = "pattern", value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Message reported for --pattern matches
    #[arg(short, long, requires = "patterns")]
    pub message: Option<String>,

    /// Severity of --pattern matches (error, warn, info)
    #[arg(long, default_value = "error", value_name = "LEVEL")]
    pub severity: Severity,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = "CGREP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format for findings.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
