// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match classification into semantic buckets.

use serde::Serialize;

use super::token::Category;

/// Captured text of one match, grouped by category.
///
/// Each list is in left-to-right definition order and holds one entry per
/// distinct capture; back-references add nothing.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub variables: Vec<String>,
    pub literals: Vec<String>,
    pub keywords: Vec<String>,
    pub operators: Vec<String>,
    pub blocks: Vec<String>,
    pub others: Vec<String>,
}

impl MatchResult {
    /// True when every list is empty (the no-match sentinel).
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
            && self.literals.is_empty()
            && self.keywords.is_empty()
            && self.operators.is_empty()
            && self.blocks.is_empty()
            && self.others.is_empty()
    }

    fn bucket(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Variable => &mut self.variables,
            Category::Literal => &mut self.literals,
            Category::Keyword => &mut self.keywords,
            Category::Operator => &mut self.operators,
            Category::Block => &mut self.blocks,
            Category::Other => &mut self.others,
        }
    }
}

/// Route each participating named group of `caps` into its bucket.
///
/// `groups` lists (group index, category) in group order.
pub fn classify(caps: &fancy_regex::Captures<'_>, groups: &[(usize, Category)]) -> MatchResult {
    let mut result = MatchResult::default();
    for &(index, category) in groups {
        if let Some(m) = caps.get(index) {
            result.bucket(category).push(m.as_str().to_string());
        }
    }
    result
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
