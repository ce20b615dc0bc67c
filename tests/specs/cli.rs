//! Command-line behavior: patterns, exit codes and input handling.

use crate::prelude::*;

const APP: &str = "let a = 1;\nif (a == a) {\n  debugger;\n}\n";

/// > Exit code 1 when an error-severity pattern matches
#[test]
fn error_match_fails() {
    let project = Project::new().file("app.js", APP);
    project
        .cmd()
        .args(["-e", "if ($a == $a)", "app.js"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("app.js:2: if (a == a)"));
}

/// > Exit code 0 when nothing matches
#[test]
fn no_match_succeeds() {
    let project = Project::new().file("app.js", APP);
    project
        .cmd()
        .args(["-e", "while ($a)", "app.js"])
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}

/// > Warn-severity matches are reported but do not fail
#[test]
fn warn_match_succeeds() {
    let project = Project::new().file("app.js", APP);
    project
        .cmd()
        .args(["-e", "debugger;", "--severity", "warn", "-m", "no debugger", "app.js"])
        .assert()
        .success()
        .stdout(predicates::str::contains("warn: no debugger"))
        .stdout(predicates::str::contains("app.js:3"));
}

/// > Exit code 2 for an invalid pattern
#[test]
fn invalid_pattern_is_config_error() {
    let project = Project::new().file("app.js", APP);
    project
        .cmd()
        .args(["-e", "REGEX(a", "app.js"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unbalanced REGEX("));
}

/// > Exit code 2 when there is nothing to search for
#[test]
fn no_rules_is_config_error() {
    let project = Project::new().file("app.js", APP);
    project
        .cmd()
        .arg("app.js")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("nothing to search for"));
}

/// > Paths are required
#[test]
fn missing_paths_is_usage_error() {
    cgrep_cmd().args(["-e", "x"]).assert().failure();
}

/// > Unreadable files are skipped with a warning
#[test]
fn missing_file_is_skipped() {
    let project = Project::new().file("app.js", APP);
    project
        .cmd()
        .args(["-e", "debugger;", "missing.js", "app.js"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("missing.js"))
        .stdout(predicates::str::contains("app.js:3"));
}

/// > Non-UTF-8 files are skipped
#[test]
fn binary_file_is_skipped() {
    let project = Project::new();
    std::fs::write(project.path().join("blob.bin"), [0xff, 0xfe, 0x00]).unwrap();
    project
        .cmd()
        .args(["-e", "x", "blob.bin"])
        .assert()
        .success()
        .stderr(predicates::str::contains("non-UTF-8"));
}

/// > Matching is whitespace-insensitive across lines
#[test]
fn multi_line_match() {
    let project = Project::new().file("app.js", "catch (e) {\n  e = getError();\n}\n");
    project
        .cmd()
        .args(["-e", "catch ($e) { $e = $$ }", "app.js"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("app.js:1: catch (e) { ..."));
}

/// > --verbose logs at debug level to stderr
#[test]
fn verbose_logs_to_stderr() {
    let project = Project::new().file("app.js", APP);
    project
        .cmd()
        .args(["-v", "-e", "while ($a)", "app.js"])
        .assert()
        .success()
        .stderr(predicates::str::contains("rule(s) loaded"));
}
