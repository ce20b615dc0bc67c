// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structural code patterns.
//!
//! A pattern is code with placeholders. Compilation runs in stages:
//! - token: split `$a`, `$1`, `$@op`, `$#kw`, `$$`, `$$$`, `REGEX(...)` from text
//! - normalize: pad identifiers, literals and brackets; escape the rest
//! - bind: first use of a name defines a capture, later uses back-reference it
//! - whitespace: whitespace runs become lenient skips
//!
//! The result is a single backtracking regex (fancy-regex, for back-references
//! and lookaround). Matches are classified back into categories.
//!
//! ```ignore
//! let pattern = CompiledPattern::new("if ($a == $a)")?;
//! let found = pattern.find_first("if (x == x) {}");
//! assert_eq!(found.variables, vec!["x"]);
//! ```

pub mod bind;
pub mod classify;
pub mod matcher;
pub mod normalize;
pub mod token;
pub mod whitespace;

pub use classify::MatchResult;
pub use matcher::{
    CompiledPattern, DEFAULT_BACKTRACK_LIMIT, DEFAULT_MAX_MATCHES, MatchLimits, PatternError,
    PatternMatch,
};
pub use token::Category;

/// Compile `pattern` with default limits.
pub fn compile(pattern: &str) -> Result<CompiledPattern, PatternError> {
    CompiledPattern::new(pattern)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
