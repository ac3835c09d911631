//! JavaScript heuristic checker
//!
//! Unlike the line-oriented checkers, this one hands the whole snippet to a
//! small syntax scanner and converts at most one scan failure into a
//! diagnostic. Two leniency rules keep mid-typing submissions quiet: a
//! trimmed source ending in `)`, `{`, or `:` is treated as an intentionally
//! partial declaration, and "Unexpected end of input" failures are suppressed
//! for the same reason.

mod scanner;

pub use scanner::{scan, ScanError};

use crate::checker::Checker;
use crate::diagnostic::Diagnostic;
use crate::language::Language;
use crate::rule::RuleInfo;
use regex::Regex;

/// Hint lookup table, keyed by substring match against the error detail.
/// Checked in order; first match wins.
const HINTS: [(&str, &str); 4] = [
    ("Unexpected token", "Check brackets, parentheses, and quotes balance."),
    ("is not defined", "Variable may not be declared. Use const/let/var."),
    (
        "Cannot read properties",
        "Trying to access property on undefined/null value.",
    ),
    (
        "Invalid or unexpected token",
        "Check syntax near the error location.",
    ),
];

const DEFAULT_HINT: &str = "Review the syntax near the error line.";

fn hint_for(detail: &str) -> &'static str {
    for (key, hint) in HINTS {
        if detail.contains(key) {
            return hint;
        }
    }
    DEFAULT_HINT
}

/// Heuristic syntax checker for JavaScript/TypeScript snippets
pub struct JavascriptChecker {
    kind_and_detail: Regex,
    rules: Vec<RuleInfo>,
}

impl Default for JavascriptChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl JavascriptChecker {
    pub fn new() -> Self {
        Self {
            kind_and_detail: Regex::new(r"(\w+):\s+(.+)").unwrap(),
            rules: rules(),
        }
    }
}

impl Checker for JavascriptChecker {
    fn language(&self) -> Language {
        Language::Javascript
    }

    fn description(&self) -> &str {
        "Heuristic JavaScript syntax checker"
    }

    fn check(&self, source: &str) -> Vec<Diagnostic> {
        let trimmed = source.trim();

        // Partial declarations are fine while the user is still typing
        if trimmed.ends_with(')') || trimmed.ends_with('{') || trimmed.ends_with(':') {
            return Vec::new();
        }

        let err = match scanner::scan(source) {
            Ok(()) => return Vec::new(),
            Err(e) => e,
        };

        let message = err.to_string();

        // Incomplete code is acceptable too
        if message.contains("Unexpected end") {
            return Vec::new();
        }

        // "<Kind>: <detail>" - report the detail and look up a hint for it
        let diag = match self.kind_and_detail.captures(&message) {
            Some(captures) => {
                let detail = captures.get(2).map(|m| m.as_str()).unwrap_or(&message);
                Diagnostic::error("js-syntax-error", detail).with_hint(hint_for(detail))
            }
            None => Diagnostic::error("js-syntax-error", &message),
        };

        vec![diag]
    }

    fn rules(&self) -> &[RuleInfo] {
        &self.rules
    }
}

fn rules() -> Vec<RuleInfo> {
    vec![RuleInfo::new("js-syntax-error", "JavaScript syntax error")
        .with_description(
            "The snippet failed a structural syntax scan (bracket nesting, \
             string termination, function parameter lists)",
        )
        .with_example_bad("function add(a, b { return a + b; }")
        .with_example_good("function add(a, b) { return a + b; }")]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(source: &str) -> Vec<Diagnostic> {
        JavascriptChecker::new().check(source)
    }

    #[test]
    fn test_valid_function() {
        assert!(check("function add(a, b) { return a + b; }").is_empty());
    }

    #[test]
    fn test_unbalanced_parameter_list() {
        let errors = check("function add(a, b { return a + b; }");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule_id, "js-syntax-error");
        assert_eq!(errors[0].message, "Unexpected token '{'");
        assert_eq!(
            errors[0].hint.as_deref(),
            Some("Check brackets, parentheses, and quotes balance.")
        );
    }

    #[test]
    fn test_partial_code_leniency() {
        // Ends with ')' - treated as a declaration still being typed
        assert!(check("function sum(arr)").is_empty());
        assert!(check("function sum(arr) {").is_empty());
        assert!(check("if (x > 5):").is_empty());
    }

    #[test]
    fn test_unexpected_end_suppressed() {
        // Unclosed brace scans as "Unexpected end of input", which is
        // suppressed as intentionally incomplete
        assert!(check("function f() { return 1;").is_empty());
    }

    #[test]
    fn test_unterminated_string() {
        let errors = check("let s = \"hello;");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Invalid or unexpected token");
        assert_eq!(
            errors[0].hint.as_deref(),
            Some("Check syntax near the error location.")
        );
    }

    #[test]
    fn test_at_most_one_diagnostic() {
        let errors = check("let a = [1, 2); let b = [3, 4);");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_hint_lookup_order() {
        assert_eq!(
            hint_for("Unexpected token '}'"),
            "Check brackets, parentheses, and quotes balance."
        );
        assert_eq!(
            hint_for("x is not defined"),
            "Variable may not be declared. Use const/let/var."
        );
        assert_eq!(hint_for("something else entirely"), DEFAULT_HINT);
        // Case-sensitive containment: the capitalized key does not match
        // the "Invalid or unexpected token" detail
        assert_eq!(
            hint_for("Invalid or unexpected token"),
            "Check syntax near the error location."
        );
    }
}
