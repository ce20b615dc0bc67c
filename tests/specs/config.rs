//! cgrep.toml discovery, rules and engine limits.

use crate::prelude::*;

const RULES: &str = r#"
[[rule]]
name = "self-compare"
pattern = "if ($a == $a)"
message = "Comparing a value with itself"

[[rule]]
name = "debugger"
pattern = "debugger;"
severity = "warning"
extensions = ["ts"]
"#;

const APP: &str = "if (a == a) {\n  debugger;\n}\n";

/// > Rules are read from cgrep.toml in the working directory
#[test]
fn rules_from_discovered_config() {
    let project = Project::new().config(RULES).file("app.js", APP);
    project
        .cmd()
        .arg("app.js")
        .assert()
        .code(1)
        .stdout(predicates::str::contains("error: Comparing a value with itself"))
        .stdout(predicates::str::contains("debugger").not());
}

/// > Config is discovered from a parent directory
#[test]
fn config_found_in_parent() {
    let project = Project::new().config(RULES).file("src/app.ts", APP);
    project
        .cmd()
        .current_dir(project.path().join("src"))
        .arg("app.ts")
        .assert()
        .code(1)
        .stdout(predicates::str::contains("warn: debugger"));
}

/// > --config selects an explicit file
#[test]
fn explicit_config_path() {
    let project = Project::new().file("rules/strict.toml", RULES).file("app.js", APP);
    project
        .cmd()
        .args(["-C", "rules/strict.toml", "app.js"])
        .assert()
        .code(1);
}

/// > CGREP_CONFIG selects an explicit file
#[test]
fn config_from_environment() {
    let project = Project::new().file("rules/strict.toml", RULES).file("app.js", APP);
    project
        .cmd()
        .env("CGREP_CONFIG", "rules/strict.toml")
        .arg("app.js")
        .assert()
        .code(1);
}

/// > Ad-hoc patterns run alongside configured rules
#[test]
fn patterns_add_to_rules() {
    let project = Project::new().config(RULES).file("app.js", APP);
    project
        .cmd()
        .args(["-e", "debugger;", "-m", "no debugger", "app.js"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("no debugger"))
        .stdout(predicates::str::contains("Comparing a value with itself"));
}

/// > cgrep.toml itself is never checked
#[test]
fn config_file_is_not_checked() {
    let project = Project::new().config(RULES);
    project
        .cmd()
        .args(["-e", "pattern", "cgrep.toml"])
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}

/// > Unknown keys are warned about, not rejected
#[test]
fn unknown_keys_warn() {
    let project = Project::new()
        .config("[engine]\nturbo = true\n\n[[rule]]\nname = \"x\"\npattern = \"while\"\n")
        .file("app.js", APP);
    project
        .cmd()
        .arg("app.js")
        .assert()
        .success()
        .stderr(predicates::str::contains("engine.turbo"));
}

/// > A bad rule pattern is a config error naming the rule
#[test]
fn bad_rule_pattern() {
    let project = Project::new()
        .config("[[rule]]\nname = \"broken\"\npattern = \"REGEX(\"\n")
        .file("app.js", APP);
    project
        .cmd()
        .arg("app.js")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("rule `broken`"));
}

/// > Malformed TOML is a config error
#[test]
fn malformed_config() {
    let project = Project::new().config("[[rule]\n").file("app.js", APP);
    project.cmd().args(["-e", "x", "app.js"]).assert().code(2);
}

/// > engine.max_matches caps matches per rule and file
#[test]
fn match_cap_from_config() {
    let project = Project::new()
        .config("[engine]\nmax_matches = 2\n\n[[rule]]\nname = \"call\"\npattern = \"f()\"\n")
        .file("app.js", "f();\nf();\nf();\nf();\n");
    project
        .cmd()
        .arg("app.js")
        .assert()
        .code(1)
        .stdout(predicates::str::contains("2 findings"));
}
