// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Finding output in text or JSON format.

mod json;
mod text;

use std::io;

use termcolor::WriteColor;

use crate::check::{Finding, Severity};
use crate::cli::OutputFormat;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Trait for writing findings in an output format.
pub trait ReportFormatter {
    fn write(&self, out: &mut dyn WriteColor, findings: &[Finding]) -> io::Result<()>;
}

/// Write `findings` to `out` in `format`.
pub fn write_report(
    format: OutputFormat,
    out: &mut dyn WriteColor,
    findings: &[Finding],
) -> io::Result<()> {
    let formatter: Box<dyn ReportFormatter> = match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };
    formatter.write(out, findings)
}

/// Number of error-severity findings.
pub fn error_count(findings: &[Finding]) -> usize {
    findings.iter().filter(|f| f.severity == Severity::Error).count()
}
