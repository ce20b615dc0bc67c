// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Byte offset to line number mapping.

/// Start offset of every line in a text.
#[derive(Debug, Clone)]
pub struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(memchr::memchr_iter(b'\n', text.as_bytes()).map(|i| i + 1))
            .collect();
        Self { starts }
    }

    /// 1-based line containing byte `offset`. Offsets past the end map to
    /// the last line.
    pub fn line_of(&self, offset: usize) -> u32 {
        let line = match self.starts.binary_search(&offset) {
            Ok(exact) => exact + 1,
            Err(insert) => insert,
        };
        // CORRECTNESS: line counts of checked files fit in u32.
        line as u32
    }
}

#[cfg(test)]
#[path = "line_index_tests.rs"]
mod tests;
