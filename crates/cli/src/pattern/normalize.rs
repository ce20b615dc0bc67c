// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Boundary normalization and escaping.
//!
//! Pads identifiers, literals, brackets and semicolons with whitespace so that
//! `if()` and `if ()` (or `5+5` and `5 + 5`) normalize to the same shape, then
//! escapes what remains so it matches literally.

use std::sync::LazyLock;

use regex::Regex;

use super::token::{Piece, Token};
use crate::grammar;

/// Normalized pattern unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Run of whitespace.
    Space,
    /// Escaped, literal pattern text.
    Text(String),
    /// Token awaiting a capture.
    Token(Token),
}

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| build(r"[$A-Za-z_][$A-Za-z0-9_]*"));
static LITERAL: LazyLock<Regex> = LazyLock::new(|| build(&grammar::LITERAL));

#[allow(clippy::expect_used)]
fn build(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex pattern")
}

/// Characters that always stand apart from their neighbours.
fn is_boundary_char(ch: char) -> bool {
    matches!(ch, '(' | ')' | '{' | '}' | '[' | ']' | ';')
}

/// Normalize extracted pieces into segments.
///
/// Blocks sit flush against their neighbours; every other token is separated
/// by whitespace.
pub fn normalize(pieces: Vec<Piece>) -> Vec<Segment> {
    let mut segments = Vec::new();

    for piece in pieces {
        match piece {
            Piece::Text(text) => push_text(&mut segments, &pad(&text)),
            Piece::Token(token @ Token::Block { .. }) => segments.push(Segment::Token(token)),
            Piece::Token(token) => {
                segments.push(Segment::Space);
                segments.push(Segment::Token(token));
                segments.push(Segment::Space);
            }
        }
    }

    segments
}

/// Insert whitespace around identifiers, literals and boundary characters.
pub fn pad(text: &str) -> String {
    let text = IDENTIFIER.replace_all(text, " ${0} ");
    let text = LITERAL.replace_all(&text, " ${0} ");

    let mut padded = String::with_capacity(text.len() * 2);
    for ch in text.chars() {
        if is_boundary_char(ch) {
            padded.push(' ');
            padded.push(ch);
            padded.push(' ');
        } else {
            padded.push(ch);
        }
    }
    padded
}

/// Split padded text into whitespace runs and escaped text.
fn push_text(segments: &mut Vec<Segment>, text: &str) {
    let mut run = String::new();
    let mut in_space = false;

    for ch in text.chars() {
        let is_space = ch.is_whitespace();
        if is_space != in_space && !run.is_empty() {
            flush(segments, &run, in_space);
            run.clear();
        }
        in_space = is_space;
        run.push(ch);
    }

    if !run.is_empty() {
        flush(segments, &run, in_space);
    }
}

fn flush(segments: &mut Vec<Segment>, run: &str, is_space: bool) {
    if is_space {
        segments.push(Segment::Space);
    } else {
        segments.push(Segment::Text(fancy_regex::escape(run).into_owned()));
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
