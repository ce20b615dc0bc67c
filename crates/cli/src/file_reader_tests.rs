// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Write;

use super::*;
use crate::test_utils::temp_file_with_content;

#[test]
fn small_file_is_owned() {
    let file = temp_file_with_content("const a = 1;\n");
    let content = FileContent::read(file.path()).unwrap();
    assert!(matches!(content, FileContent::Owned(_)));
    assert_eq!(content.as_str(), Some("const a = 1;\n"));
}

#[test]
fn large_file_is_mapped() {
    let text = "x".repeat(MMAP_THRESHOLD as usize + 1);
    let file = temp_file_with_content(&text);
    let content = FileContent::read(file.path()).unwrap();
    assert!(matches!(content, FileContent::Mapped(_)));
    assert_eq!(content.as_str().map(str::len), Some(text.len()));
}

#[test]
fn invalid_utf8_has_no_text() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0xff, 0xfe, 0x00]).unwrap();
    let content = FileContent::read(file.path()).unwrap();
    assert!(content.as_str().is_none());
}

#[test]
fn missing_file_is_an_error() {
    assert!(FileContent::read(Path::new("/nonexistent/file.js")).is_err());
}
