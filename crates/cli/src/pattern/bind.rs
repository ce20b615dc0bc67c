// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture binding.
//!
//! Turns every token into a matcher expression. The first occurrence of an
//! identity within its category defines a named group; later occurrences
//! become back-references, so the text there must repeat exactly.

use std::collections::HashMap;

use super::normalize::Segment;
use super::token::{Category, Identity, Token};
use crate::grammar;

/// Prefix for generated group names. Group names are internal and never
/// shown to callers.
const GROUP_PREFIX: &str = "__cg";

/// Bound pattern unit, ready for whitespace relaxation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Run of whitespace.
    Space,
    /// Matcher expression: escaped text, capture group or back-reference.
    Expr(String),
    /// Raw `REGEX(...)` body in its capture group, re-inserted last.
    Raw(String),
}

/// Category of every group defined by a compiled pattern, keyed by group name.
#[derive(Debug, Default, Clone)]
pub struct CaptureTable {
    groups: HashMap<String, Category>,
}

impl CaptureTable {
    /// Category of `group`; names the binder did not define are `Other`.
    pub fn category(&self, group: &str) -> Category {
        self.groups.get(group).copied().unwrap_or(Category::Other)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Bind tokens to captures.
pub fn bind(segments: Vec<Segment>) -> (Vec<Fragment>, CaptureTable) {
    let mut binder = Binder::default();
    let fragments = segments
        .into_iter()
        .map(|segment| match segment {
            Segment::Space => Fragment::Space,
            Segment::Text(text) => Fragment::Expr(text),
            Segment::Token(token) => binder.bind(token),
        })
        .collect();
    (fragments, binder.table)
}

#[derive(Default)]
struct Binder {
    /// Group name already defined for each (category, identity).
    bound: HashMap<(Category, Identity), String>,
    table: CaptureTable,
    next_group: usize,
}

impl Binder {
    fn bind(&mut self, token: Token) -> Fragment {
        let category = token.category();
        let (id, body) = match token {
            Token::Variable(id) => (id, grammar::VARIABLE.as_str()),
            Token::Literal(id) => (id, grammar::LITERAL.as_str()),
            Token::Operator(id) => (id, grammar::OPERATOR.as_str()),
            Token::Keyword(id) => (id, grammar::KEYWORD.as_str()),
            Token::Block { greedy: true, id } => (id, grammar::GREEDY_BLOCK),
            Token::Block { greedy: false, id } => (id, grammar::LAZY_BLOCK),
            Token::Raw(body) => {
                let group = self.define(category);
                return Fragment::Raw(format!("(?P<{group}>{body})"));
            }
        };

        let key = (category, id);
        if let Some(group) = self.bound.get(&key) {
            return Fragment::Expr(format!(r"\k<{group}>"));
        }

        let group = self.define(category);
        tracing::trace!(group = %group, category = category.as_str(), "new capture");
        let expr = format!("(?P<{group}>{body})");
        self.bound.insert(key, group);
        Fragment::Expr(expr)
    }

    fn define(&mut self, category: Category) -> String {
        let group = format!("{GROUP_PREFIX}{}", self.next_group);
        self.next_group += 1;
        self.table.groups.insert(group.clone(), category);
        group
    }
}

#[cfg(test)]
#[path = "bind_tests.rs"]
mod tests;
