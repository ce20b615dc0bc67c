// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format output.

use std::io::{self, Write};

use serde_json::json;
use termcolor::WriteColor;

use super::{ReportFormatter, error_count};
use crate::check::Finding;

/// JSON format formatter.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn write(&self, out: &mut dyn WriteColor, findings: &[Finding]) -> io::Result<()> {
        let output = json!({
            "findings": findings,
            "errors": error_count(findings),
        });
        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
