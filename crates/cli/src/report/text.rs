// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format output.
//!
//! Consecutive findings from the same rule in the same file share a header:
//!
//! ```text
//! warn: self comparison
//!   app.js:2: if (a == a)
//!   app.js:5: if (b == b)
//! ```

use std::io::{self, Write};

use termcolor::WriteColor;

use super::{ReportFormatter, error_count};
use crate::check::Finding;
use crate::color::scheme;

/// Text format formatter.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn write(&self, out: &mut dyn WriteColor, findings: &[Finding]) -> io::Result<()> {
        let mut previous: Option<&Finding> = None;

        for finding in findings {
            if !previous.is_some_and(|p| same_group(p, finding)) {
                out.set_color(&scheme::severity(finding.severity))?;
                write!(out, "{}", finding.severity.as_str())?;
                out.reset()?;
                write!(out, ": ")?;
                out.set_color(&scheme::message())?;
                writeln!(out, "{}", finding.message)?;
                out.reset()?;
            }
            write_location(out, finding)?;
            previous = Some(finding);
        }

        if !findings.is_empty() {
            writeln!(
                out,
                "\n{} {}, {} {}",
                findings.len(),
                plural(findings.len(), "finding"),
                error_count(findings),
                plural(error_count(findings), "error"),
            )?;
        }
        Ok(())
    }
}

fn same_group(a: &Finding, b: &Finding) -> bool {
    a.path == b.path && a.severity == b.severity && a.message == b.message
}

fn write_location(out: &mut dyn WriteColor, finding: &Finding) -> io::Result<()> {
    write!(out, "  ")?;
    out.set_color(&scheme::path())?;
    write!(out, "{}", finding.path.display())?;
    out.reset()?;
    write!(out, ":")?;
    out.set_color(&scheme::line_number())?;
    write!(out, "{}", finding.line)?;
    out.reset()?;

    out.set_color(&scheme::matched())?;
    writeln!(out, ": {}", first_line(&finding.text))?;
    out.reset()
}

/// First line of a match; multi-line matches are marked with an ellipsis.
fn first_line(text: &str) -> String {
    match text.split_once('\n') {
        Some((first, _)) => format!("{} ...", first.trim_end()),
        None => text.to_string(),
    }
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 { word.to_string() } else { format!("{word}s") }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
