// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Token extraction.
//!
//! Scans a raw pattern left to right and splits it into plain text and
//! meta-syntax tokens. At each `$` the longest-reaching syntax wins:
//! `$$$`, `$$`, `$name`, `$N`, `$@name?`, `$#name?`. `REGEX(...)` bodies are
//! taken verbatim and never scanned for tokens.

use std::sync::LazyLock;

use regex::Regex;

use super::PatternError;

/// Semantic bucket of a capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Variable,
    Literal,
    Operator,
    Keyword,
    Block,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Variable => "variable",
            Self::Literal => "literal",
            Self::Operator => "operator",
            Self::Keyword => "keyword",
            Self::Block => "block",
            Self::Other => "other",
        }
    }
}

/// Who a token refers to within one pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identity {
    /// Explicit name written by the pattern author (`a` in `$a`).
    Named(String),
    /// Unnamed occurrence, numbered per compilation.
    Anonymous(usize),
}

/// A recognized meta-syntax unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Variable(Identity),
    Literal(Identity),
    Operator(Identity),
    Keyword(Identity),
    Block { greedy: bool, id: Identity },
    /// Raw matcher expression from `REGEX(...)`.
    Raw(String),
}

impl Token {
    pub fn category(&self) -> Category {
        match self {
            Self::Variable(_) => Category::Variable,
            Self::Literal(_) => Category::Literal,
            Self::Operator(_) => Category::Operator,
            Self::Keyword(_) => Category::Keyword,
            Self::Block { .. } => Category::Block,
            Self::Raw(_) => Category::Other,
        }
    }
}

/// Pattern split into text and token placeholders, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    Text(String),
    Token(Token),
}

/// `$name`: letters, then optional digits and underscores.
static VARIABLE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| token_regex(r"^\$([A-Za-z]+[0-9_]*)"));

/// `$N`
static LITERAL_TOKEN: LazyLock<Regex> = LazyLock::new(|| token_regex(r"^\$([0-9]+)"));

/// `$@` or `$@name`
static OPERATOR_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| token_regex(r"^\$@([A-Za-z]+[0-9_]*)?"));

/// `$#` or `$#name`
static KEYWORD_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| token_regex(r"^\$#([A-Za-z]+[0-9_]*)?"));

#[allow(clippy::expect_used)]
fn token_regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex pattern")
}

const RAW_OPEN: &str = "REGEX(";

/// Split `pattern` into text and tokens.
pub fn extract(pattern: &str) -> Result<Vec<Piece>, PatternError> {
    let mut scanner = Scanner { pattern, pieces: Vec::new(), text: String::new(), anonymous: 0 };
    let mut pos = 0;

    while pos < pattern.len() {
        let rest = &pattern[pos..];
        if let Some((token, len)) = scanner.token_at(pos, rest)? {
            scanner.push(token);
            pos += len;
        } else if let Some(ch) = rest.chars().next() {
            scanner.text.push(ch);
            pos += ch.len_utf8();
        }
    }

    Ok(scanner.finish())
}

struct Scanner<'a> {
    pattern: &'a str,
    pieces: Vec<Piece>,
    text: String,
    anonymous: usize,
}

impl Scanner<'_> {
    /// Try to read a token at the start of `rest`, returning it and its byte length.
    fn token_at(&mut self, pos: usize, rest: &str) -> Result<Option<(Token, usize)>, PatternError> {
        if rest.starts_with(RAW_OPEN) {
            let body_start = pos + RAW_OPEN.len();
            let body_len = raw_body_len(&self.pattern[body_start..])
                .ok_or_else(|| PatternError::UnbalancedRegex {
                    pattern: self.pattern.to_string(),
                    offset: pos,
                })?;
            let body = &self.pattern[body_start..body_start + body_len];
            return Ok(Some((Token::Raw(body.to_string()), RAW_OPEN.len() + body_len + 1)));
        }

        if !rest.starts_with('$') {
            return Ok(None);
        }

        if rest.starts_with("$$$") {
            let id = self.next_anonymous();
            return Ok(Some((Token::Block { greedy: true, id }, 3)));
        }
        if rest.starts_with("$$") {
            let id = self.next_anonymous();
            return Ok(Some((Token::Block { greedy: false, id }, 2)));
        }
        if let Some(caps) = VARIABLE_TOKEN.captures(rest) {
            let id = Identity::Named(caps[1].to_string());
            return Ok(Some((Token::Variable(id), caps[0].len())));
        }
        if let Some(caps) = LITERAL_TOKEN.captures(rest) {
            let id = Identity::Named(caps[1].to_string());
            return Ok(Some((Token::Literal(id), caps[0].len())));
        }
        if let Some(caps) = OPERATOR_TOKEN.captures(rest) {
            let id = self.identity(caps.get(1).map(|m| m.as_str()));
            return Ok(Some((Token::Operator(id), caps[0].len())));
        }
        if let Some(caps) = KEYWORD_TOKEN.captures(rest) {
            let id = self.identity(caps.get(1).map(|m| m.as_str()));
            return Ok(Some((Token::Keyword(id), caps[0].len())));
        }

        Ok(None)
    }

    fn identity(&mut self, name: Option<&str>) -> Identity {
        match name {
            Some(name) => Identity::Named(name.to_string()),
            None => self.next_anonymous(),
        }
    }

    fn next_anonymous(&mut self) -> Identity {
        let id = Identity::Anonymous(self.anonymous);
        self.anonymous += 1;
        id
    }

    fn push(&mut self, token: Token) {
        self.flush_text();
        self.pieces.push(Piece::Token(token));
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.pieces.push(Piece::Text(std::mem::take(&mut self.text)));
        }
    }

    fn finish(mut self) -> Vec<Piece> {
        self.flush_text();
        self.pieces
    }
}

/// Length of a raw-regex body up to (not including) its balanced `)`.
///
/// Escaped characters and bracketed classes do not count towards nesting.
fn raw_body_len(body: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_class = false;
    let mut chars = body.char_indices();

    while let Some((i, ch)) = chars.next() {
        match ch {
            '\\' => {
                chars.next();
            }
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            '(' if !in_class => depth += 1,
            ')' if !in_class => {
                if depth == 0 {
                    return Some(i);
                }
                depth -= 1;
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
