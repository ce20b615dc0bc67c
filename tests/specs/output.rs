//! Text and JSON output.

use crate::prelude::*;

const APP: &str = "foo(1);\nfoo(2);\n";

/// > Text output groups matches under a severity header
#[test]
fn text_output() {
    let project = Project::new().file("app.js", APP);
    project
        .cmd()
        .args(["-e", "foo($1)", "-m", "no foo", "--severity", "info", "app.js"])
        .assert()
        .success()
        .stdout("info: no foo\n  app.js:1: foo(1)\n  app.js:2: foo(2)\n\n2 findings, 0 errors\n");
}

/// > JSON output is a single object with findings and an error count
#[test]
fn json_output() {
    let project = Project::new().file("app.js", APP);
    let output = project
        .cmd()
        .args(["-e", "foo($1)", "-o", "json", "app.js"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["errors"], 2);
    assert_eq!(value["findings"][1]["line"], 2);
    assert_eq!(value["findings"][1]["text"], "foo(2)");
    assert_eq!(value["findings"][0]["severity"], "error");
}

/// > JSON output for no findings
#[test]
fn json_output_empty() {
    let project = Project::new().file("app.js", APP);
    let output = project.cmd().args(["-e", "bar()", "-o", "json", "app.js"]).output().unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, serde_json::json!({ "findings": [], "errors": 0 }));
}

/// > --color=always emits escape codes; --no-color overrides it
#[test]
fn color_flags() {
    let project = Project::new().file("app.js", APP);
    project
        .cmd()
        .env_remove("NO_COLOR")
        .args(["-e", "foo($1)", "--color", "always", "app.js"])
        .assert()
        .stdout(predicates::str::contains("\u{1b}["));
    project
        .cmd()
        .args(["-e", "foo($1)", "--color", "always", "--no-color", "app.js"])
        .assert()
        .stdout(predicates::str::contains("\u{1b}[").not());
}
