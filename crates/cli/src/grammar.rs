// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JavaScript grammar tables used by the pattern compiler.
//!
//! These are lexical approximations, not a parser: each table is rendered as a
//! regex fragment that recognizes one token class of the target language.

use std::sync::LazyLock;

/// Literal alternatives, minus the literal keywords.
///
/// The numeric form accepts chained suffix characters, so `3.02`, `0xff`,
/// `1e10` and `5px` are each a single literal.
const BASE_LITERALS: &[&str] = &[
    r#""[\s\S]*?""#,
    r"'[\s\S]*?'",
    r"`[\s\S]*?`",
    r"-?\d+[\w.]*",
    r"/[\s\S]*?/",
];

/// Identifiers that are literal values rather than names.
pub const LITERAL_KEYWORDS: &[&str] = &["true", "false", "NaN", "undefined", "null"];

/// Unary operators.
pub const UNARY_OPERATORS: &[&str] = &["++", "--", "~"];

/// Binary operators. Ternary `?:` is deliberately absent.
pub const BINARY_OPERATORS: &[&str] = &[
    "+", "-", "*", "**", "/", "%", "=", "==", "===", "!=", "!==", ">", "<", ">=", "<=", "&", "|",
    "^", "<<", ">>", ">>>",
];

/// Reserved and future-reserved words.
pub const KEYWORDS: &[&str] = &[
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "export",
    "extends",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "new",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
    "enum",
    "implements",
    "interface",
    "let",
    "package",
    "private",
    "protected",
    "public",
    "static",
    "await",
];

/// Characters that may continue an identifier.
const IDENT_CHAR: &str = r"[$\w]";

/// Literal alternation, including literal keywords.
pub static LITERAL: LazyLock<String> = LazyLock::new(|| {
    let alternatives: Vec<&str> = BASE_LITERALS.iter().chain(LITERAL_KEYWORDS).copied().collect();
    format!("(?:{})", alternatives.join("|"))
});

/// Operator alternation, longest spelling first.
pub static OPERATOR: LazyLock<String> = LazyLock::new(|| {
    let mut operators: Vec<&str> =
        UNARY_OPERATORS.iter().chain(BINARY_OPERATORS).copied().collect();
    operators.sort_by_key(|op| std::cmp::Reverse(op.len()));
    let escaped: Vec<String> =
        operators.iter().map(|op| fancy_regex::escape(op).into_owned()).collect();
    format!("(?:{})", escaped.join("|"))
});

/// Whole-word keyword alternation.
pub static KEYWORD: LazyLock<String> = LazyLock::new(|| {
    format!(r"(?<!{IDENT_CHAR})(?:{}){}", longest_first(KEYWORDS), not_followed_by_ident())
});

/// Identifier that is neither a keyword nor a literal keyword.
pub static VARIABLE: LazyLock<String> = LazyLock::new(|| {
    let reserved: Vec<&str> = KEYWORDS.iter().chain(LITERAL_KEYWORDS).copied().collect();
    format!(
        r"(?<!{IDENT_CHAR})(?!(?:{}){})[$A-Za-z_][$A-Za-z0-9_]*",
        longest_first(&reserved),
        not_followed_by_ident()
    )
});

/// Lazy block: shortest run of anything, newlines included.
pub const LAZY_BLOCK: &str = r"[\s\S]*?";

/// Greedy block: longest run of anything, newlines included.
pub const GREEDY_BLOCK: &str = r"[\s\S]*";

/// Lenient whitespace substituted for literal whitespace in patterns.
pub const LENIENT_WHITESPACE: &str = r"\s*";

fn not_followed_by_ident() -> String {
    format!("(?!{IDENT_CHAR})")
}

fn longest_first(words: &[&str]) -> String {
    let mut words = words.to_vec();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    words.dedup();
    words.join("|")
}

#[cfg(test)]
#[path = "grammar_tests.rs"]
mod tests;
