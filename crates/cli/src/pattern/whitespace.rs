// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Whitespace relaxation and final assembly.

use super::bind::Fragment;
use crate::grammar::LENIENT_WHITESPACE;

/// Collapse whitespace runs into one lenient skip and drop the leading and
/// trailing skip, so indentation around a pattern never blocks a match.
pub fn relax(fragments: Vec<Fragment>) -> Vec<Fragment> {
    let mut relaxed: Vec<Fragment> = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        if fragment == Fragment::Space && relaxed.last() == Some(&Fragment::Space) {
            continue;
        }
        relaxed.push(fragment);
    }

    if relaxed.first() == Some(&Fragment::Space) {
        relaxed.remove(0);
    }
    if relaxed.last() == Some(&Fragment::Space) {
        relaxed.pop();
    }
    relaxed
}

/// Render fragments as a single matcher expression. Raw fragments are
/// spliced in verbatim.
pub fn assemble(fragments: &[Fragment]) -> String {
    let mut expr = String::new();
    for fragment in fragments {
        match fragment {
            Fragment::Space => expr.push_str(LENIENT_WHITESPACE),
            Fragment::Expr(text) | Fragment::Raw(text) => expr.push_str(text),
        }
    }
    expr
}

#[cfg(test)]
#[path = "whitespace_tests.rs"]
mod tests;
