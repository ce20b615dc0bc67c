// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! cgrep: structural code pattern matching for JavaScript-family sources.
//!
//! Patterns are code with placeholders (`$a`, `$1`, `$@`, `$#`, `$$`, `$$$`)
//! compiled into a single matcher; see [`pattern`].

pub mod check;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod file_reader;
pub mod grammar;
pub mod line_index;
pub mod pattern;
pub mod report;
pub mod rule;

#[cfg(test)]
pub mod test_utils;
