// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Default command: run every rule against every input file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use termcolor::{ColorChoice, StandardStream};

use cgrep::check::{Check, CheckParams, Finding, Findings};
use cgrep::cli::{Cli, OutputFormat};
use cgrep::color::resolve_color;
use cgrep::config::{self, CONFIG_FILE_NAME, Config};
use cgrep::discovery;
use cgrep::error::ExitCode;
use cgrep::file_reader::FileContent;
use cgrep::report;
use cgrep::rule::Rule;

/// Run cgrep with parsed arguments.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(cli)?;
    let rules = build_rules(cli, &config)?;
    if rules.is_empty() {
        anyhow::bail!(
            "nothing to search for: pass --pattern or add [[rule]] entries to {CONFIG_FILE_NAME}"
        );
    }
    tracing::debug!("{} rule(s) loaded", rules.len());

    let mut findings = Vec::new();
    for path in &cli.paths {
        findings.extend(check_file(path, &rules, &config));
    }

    let color = match cli.output {
        OutputFormat::Text => resolve_color(cli.color, cli.no_color),
        OutputFormat::Json => ColorChoice::Never,
    };
    let mut stdout = StandardStream::stdout(color);
    report::write_report(cli.output, &mut stdout, &findings).context("failed to write output")?;

    if report::error_count(&findings) > 0 {
        Ok(ExitCode::CheckFailed)
    } else {
        Ok(ExitCode::Success)
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let path: Option<PathBuf> = match &cli.config {
        Some(path) => Some(path.clone()),
        None => discovery::find_config(&std::env::current_dir()?),
    };

    match path {
        Some(path) => {
            tracing::debug!("config: {}", path.display());
            Ok(config::load(&path)?)
        }
        None => {
            tracing::debug!("config: (defaults)");
            Ok(Config::default())
        }
    }
}

fn build_rules(cli: &Cli, config: &Config) -> anyhow::Result<Vec<Rule>> {
    let mut rules = config.rules()?;
    for pattern in &cli.patterns {
        let rule = Rule::ad_hoc(pattern, cli.message.as_deref(), cli.severity, config.engine)?;
        rules.push(rule);
    }
    Ok(rules)
}

/// Findings for one file. Unreadable files are skipped with a warning.
fn check_file(path: &Path, rules: &[Rule], config: &Config) -> Vec<Finding> {
    if path.file_name().is_some_and(|name| name == CONFIG_FILE_NAME) {
        tracing::debug!("skipping config file {}", path.display());
        return Vec::new();
    }
    if path.is_dir() {
        tracing::warn!("skipping directory {}", path.display());
        return Vec::new();
    }

    let content = match FileContent::read(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("failed to read {}: {}", path.display(), e);
            return Vec::new();
        }
    };
    let Some(text) = content.as_str() else {
        tracing::warn!("skipping non-UTF-8 file {}", path.display());
        return Vec::new();
    };

    let params = CheckParams::new(path, text);
    let mut findings = Findings::new(path, text, config.engine);
    for rule in rules {
        rule.run(&params, &mut findings);
    }

    let findings = findings.into_findings();
    tracing::debug!("{}: {} finding(s)", path.display(), findings.len());
    findings
}
