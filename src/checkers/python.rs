//! Python heuristic checker
//!
//! Line-by-line pattern rules. Blank lines and `#` comments are skipped;
//! every other line runs through the full rule sequence, so one line can
//! collect several diagnostics. All diagnostics carry a 1-based line number.

use crate::checker::Checker;
use crate::diagnostic::Diagnostic;
use crate::language::Language;
use crate::rule::RuleInfo;
use regex::Regex;

/// Heuristic syntax checker for Python snippets
pub struct PythonChecker {
    print_statement: Regex,
    block_keyword: Regex,
    leading_word: Regex,
    else_finally: Regex,
    assign_in_condition: Regex,
    condition_keyword: Regex,
    len_without_call: Regex,
    range_without_call: Regex,
    rules: Vec<RuleInfo>,
}

impl Default for PythonChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl PythonChecker {
    pub fn new() -> Self {
        Self {
            print_statement: Regex::new(r"\bprint\s+[^(]").unwrap(),
            block_keyword: Regex::new(
                r"^\s*(if|elif|else|for|while|def|class|try|except|finally|with)\b",
            )
            .unwrap(),
            leading_word: Regex::new(r"^\s*(\w+)").unwrap(),
            else_finally: Regex::new(r"^\s*(else|finally)").unwrap(),
            assign_in_condition: Regex::new(r"\b(if|elif|while|for)\b.*[^!=<>]\s=\s[^=]").unwrap(),
            condition_keyword: Regex::new(r"\b(if|elif|while|for)\b").unwrap(),
            len_without_call: Regex::new(r"\blen\s+\w").unwrap(),
            range_without_call: Regex::new(r"\brange\s+\w").unwrap(),
            rules: rules(),
        }
    }

    fn check_line(&self, line: &str, line_num: usize, errors: &mut Vec<Diagnostic>) {
        let trimmed = line.trim();

        // Python 2 style print statement
        if self.print_statement.is_match(trimmed) && !trimmed.contains("print(") {
            errors.push(
                Diagnostic::error(
                    "py-print-parens",
                    "'print' statement without parentheses - use print() not print",
                )
                .with_line(line_num)
                .with_hint(
                    "Python 3 requires parentheses. Use: print(\"text\") instead of print \"text\"",
                ),
            );
        }

        // Block keywords must end with a colon; else/finally are handled by
        // the dedicated check below
        if self.block_keyword.is_match(line) && !trimmed.ends_with(':') {
            let keyword = self
                .leading_word
                .captures(trimmed)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str())
                .unwrap_or("");
            if !keyword.is_empty() && keyword != "else" && keyword != "finally" {
                errors.push(
                    Diagnostic::error(
                        "py-missing-colon",
                        &format!("'{}' statement must end with a colon (:)", keyword),
                    )
                    .with_line(line_num)
                    .with_hint(&format!("Add a ':' at the end of the '{}' line", keyword)),
                );
            }
        }

        if self.else_finally.is_match(line) && !trimmed.ends_with(':') {
            let keyword = trimmed.split_whitespace().next().unwrap_or("");
            errors.push(
                Diagnostic::error(
                    "py-missing-colon",
                    &format!("'{}' statement must end with a colon (:)", keyword),
                )
                .with_line(line_num)
                .with_hint(&format!("Use: {}: (with colon)", keyword)),
            );
        }

        // Single = where a comparison was probably intended
        if self.assign_in_condition.is_match(trimmed) {
            let keyword = self
                .condition_keyword
                .captures(trimmed)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str())
                .unwrap_or("if");
            errors.push(
                Diagnostic::error(
                    "py-assign-in-condition",
                    &format!(
                        "Possible assignment (=) instead of comparison (==) in {} condition",
                        keyword
                    ),
                )
                .with_line(line_num)
                .with_hint(
                    "Use == for comparison instead of = for assignment. \
                     For example: if x == 5 not if x = 5",
                ),
            );
        }

        // len/range used without call parentheses
        if self.len_without_call.is_match(trimmed) && !trimmed.contains("len(") {
            errors.push(
                Diagnostic::error(
                    "py-call-without-parens",
                    "'len' should be used as a function: len(...)",
                )
                .with_line(line_num)
                .with_hint("Use: len(variable) with parentheses, not len variable"),
            );
        }

        if self.range_without_call.is_match(trimmed) && !trimmed.contains("range(") {
            errors.push(
                Diagnostic::error(
                    "py-call-without-parens",
                    "'range' should be used as a function: range(...)",
                )
                .with_line(line_num)
                .with_hint("Use: range(10) with parentheses, not range 10"),
            );
        }

        // Bracket balance, checked per line and per bracket kind
        for (open, close, kind, hint) in [
            ('(', ')', "parentheses", "Check that all ( are closed with )"),
            ('[', ']', "brackets", "Check that all [ are closed with ]"),
            ('{', '}', "braces", "Check that all { are closed with }"),
        ] {
            let opens = line.matches(open).count();
            let closes = line.matches(close).count();
            if opens != closes {
                errors.push(
                    Diagnostic::error("py-unbalanced-line", &format!("Mismatched {}", kind))
                        .with_line(line_num)
                        .with_hint(hint),
                );
            }
        }
    }
}

impl Checker for PythonChecker {
    fn language(&self) -> Language {
        Language::Python
    }

    fn description(&self) -> &str {
        "Heuristic Python syntax checker"
    }

    fn check(&self, source: &str) -> Vec<Diagnostic> {
        let mut errors = Vec::new();

        for (i, line) in source.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            self.check_line(line, i + 1, &mut errors);
        }

        errors
    }

    fn rules(&self) -> &[RuleInfo] {
        &self.rules
    }
}

fn rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo::new("py-print-parens", "Python 2 style print statement")
            .with_description("Python 3 requires print to be called as a function")
            .with_example_bad("print \"hello\"")
            .with_example_good("print(\"hello\")"),
        RuleInfo::new("py-missing-colon", "Block statement missing colon")
            .with_description(
                "if/elif/else/for/while/def/class/try/except/finally/with \
                 lines must end with a colon",
            )
            .with_example_bad("if x > 5")
            .with_example_good("if x > 5:"),
        RuleInfo::new("py-assign-in-condition", "Assignment in condition")
            .with_description("A single = inside a condition is usually a typo for ==")
            .with_example_bad("if x = 5:")
            .with_example_good("if x == 5:"),
        RuleInfo::new("py-call-without-parens", "Built-in used without call parentheses")
            .with_description("len and range are functions and need parentheses")
            .with_example_bad("n = len items")
            .with_example_good("n = len(items)"),
        RuleInfo::new("py-unbalanced-line", "Mismatched brackets on a line")
            .with_description(
                "Opening and closing parentheses, brackets, and braces are \
                 counted per line",
            )
            .with_example_bad("print(items[0)")
            .with_example_good("print(items[0])"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(source: &str) -> Vec<Diagnostic> {
        PythonChecker::new().check(source)
    }

    #[test]
    fn test_valid_function() {
        let errors = check("def factorial(n):\n  return n");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_missing_colon_on_if() {
        let errors = check("if x > 5\n  print(\"hello\")");
        assert!(!errors.is_empty());
        assert_eq!(errors[0].rule_id, "py-missing-colon");
        assert_eq!(errors[0].line, Some(1));
        assert!(errors[0].message.contains("'if'"));
    }

    #[test]
    fn test_missing_colon_on_else() {
        let errors = check("if x:\n    pass\nelse\n    pass");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("'else'"));
        assert_eq!(errors[0].line, Some(3));
    }

    #[test]
    fn test_print_without_parens() {
        let errors = check("print \"hello\"");
        assert!(errors.iter().any(|e| e.rule_id == "py-print-parens"));
    }

    #[test]
    fn test_print_with_parens_ok() {
        let errors = check("print(\"hello\")");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_assignment_in_condition() {
        let errors = check("if x = 5:\n    pass");
        assert!(errors.iter().any(|e| e.rule_id == "py-assign-in-condition"));
        assert!(errors[0].message.contains("if condition"));
    }

    #[test]
    fn test_comparison_not_flagged() {
        let errors = check("if x == 5:\n    pass");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_len_without_parens() {
        let errors = check("n = len items");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("'len'"));
    }

    #[test]
    fn test_range_without_parens() {
        let errors = check("for i in range(10):\n    pass");
        assert!(errors.is_empty());

        let errors = check("x = range 10");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("'range'"));
    }

    #[test]
    fn test_mismatched_parentheses() {
        let errors = check("print(items[0)");
        // Unbalanced [ and ] counts also differ on this line
        assert!(errors.iter().any(|e| e.message == "Mismatched brackets"));
        assert!(errors.iter().all(|e| e.line == Some(1)));
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let errors = check("# if x > 5\n\n# print \"hi\"");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_multiple_rules_fire_on_one_line() {
        // Missing colon and unbalanced parens on the same line
        let errors = check("if foo(x > 5");
        assert!(errors.iter().any(|e| e.rule_id == "py-missing-colon"));
        assert!(errors.iter().any(|e| e.rule_id == "py-unbalanced-line"));
    }

    #[test]
    fn test_all_diagnostics_have_hints() {
        let errors = check("if x = 5\nprint \"x\"\nn = len items");
        assert!(!errors.is_empty());
        assert!(errors.iter().all(|e| e.hint.is_some()));
        assert!(errors.iter().all(|e| e.line.is_some()));
    }
}
