//! C heuristic checker
//!
//! Two passes: whole-source structure checks (bracket balance, main entry
//! point) and per-line statement checks. The per-line rules are deliberately
//! line-local, so multi-line statements and string literals containing braces
//! can over- or under-report; that trade-off is inherent to the heuristic
//! approach.

use crate::checker::Checker;
use crate::diagnostic::Diagnostic;
use crate::language::Language;
use crate::rule::RuleInfo;
use regex::Regex;

/// Heuristic syntax checker for C snippets
pub struct CChecker {
    main_with_body: Regex,
    assign_in_condition: Regex,
    condition_keyword: Regex,
    declaration: Regex,
    assignment: Regex,
    bare_call: Regex,
    io_call: Regex,
    rules: Vec<RuleInfo>,
}

impl Default for CChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl CChecker {
    pub fn new() -> Self {
        Self {
            // (?s) so the captured body can span lines
            main_with_body: Regex::new(r"(?s)int\s+main\s*\(\s*\)\s*\{([^}]*)").unwrap(),
            assign_in_condition: Regex::new(r"\b(if|while|for)\s*\([^)]*[^!=<>]\s=\s[^=][^)]*\)")
                .unwrap(),
            condition_keyword: Regex::new(r"\b(if|while|for)\b").unwrap(),
            declaration: Regex::new(
                r"^(int|char|float|double|void|long|short|unsigned)\s+.*[a-zA-Z0-9_)\]]\s*$",
            )
            .unwrap(),
            assignment: Regex::new(r"^[a-zA-Z_]\w*\s*=.*[a-zA-Z0-9_)\]]\s*$").unwrap(),
            bare_call: Regex::new(r"^\w+\s*\([^)]*\)\s*[a-zA-Z0-9_)]\s*$").unwrap(),
            io_call: Regex::new(r"^(printf|scanf|return)\s*\(.*\)\s*$").unwrap(),
            rules: rules(),
        }
    }

    /// Whole-source checks: bracket balance and the main entry point
    fn check_structure(&self, source: &str, errors: &mut Vec<Diagnostic>) {
        for (open, close, kind, rule_id, hint) in [
            ('{', '}', "braces", "c-unbalanced-braces", "Make sure every { has a corresponding }"),
            ('(', ')', "parentheses", "c-unbalanced-parens", "Make sure every ( has a corresponding )"),
            ('[', ']', "brackets", "c-unbalanced-brackets", "Make sure every [ has a corresponding ]"),
        ] {
            let opens = source.matches(open).count();
            let closes = source.matches(close).count();
            if opens != closes {
                errors.push(
                    Diagnostic::error(
                        rule_id,
                        &format!("Mismatched {}: {} opening, {} closing", kind, opens, closes),
                    )
                    .with_hint(hint),
                );
            }
        }

        if !source.contains("main") {
            errors.push(
                Diagnostic::error(
                    "c-missing-main",
                    "Missing main() function - every C program needs a main function",
                )
                .with_hint("Add: int main() { ... return 0; }"),
            );
        }

        if let Some(captures) = self.main_with_body.captures(source) {
            let body = captures.get(1).map(|m| m.as_str()).unwrap_or("");
            if !body.contains("return") {
                errors.push(
                    Diagnostic::error(
                        "c-main-missing-return",
                        "main() function should have a return statement",
                    )
                    .with_hint("Add: return 0; at the end of main()"),
                );
            }
        }
    }

    fn check_assignment_in_conditions(&self, source: &str, errors: &mut Vec<Diagnostic>) {
        for (i, line) in source.lines().enumerate() {
            if self.assign_in_condition.is_match(line) {
                let keyword = self
                    .condition_keyword
                    .captures(line)
                    .and_then(|c| c.get(1))
                    .map(|m| m.as_str())
                    .unwrap_or("if");
                errors.push(
                    Diagnostic::error(
                        "c-assign-in-condition",
                        &format!(
                            "Possible assignment (=) instead of comparison (==) in {} condition",
                            keyword
                        ),
                    )
                    .with_line(i + 1)
                    .with_hint(
                        "Use == for comparison instead of = for assignment. \
                         For example: if (num == 5) not if (num = 5)",
                    ),
                );
            }
        }
    }

    fn check_semicolons(&self, source: &str, errors: &mut Vec<Diagnostic>) {
        for (i, line) in source.lines().enumerate() {
            let line = line.trim();

            // Comments and preprocessor directives are exempt
            if line.is_empty() || line.starts_with("//") || line.starts_with('*') || line.starts_with('#')
            {
                continue;
            }

            // Pure structural lines and control-flow headers are exempt
            if line == "{"
                || line == "}"
                || line == "},"
                || line.starts_with("if")
                || line.starts_with("else")
                || line.starts_with("for")
                || line.starts_with("while")
                || line.ends_with('{')
            {
                continue;
            }

            let needs_semicolon = self.declaration.is_match(line)
                || self.assignment.is_match(line)
                || self.bare_call.is_match(line)
                || self.io_call.is_match(line);

            if needs_semicolon && !line.ends_with(';') && !line.ends_with(',') {
                errors.push(
                    Diagnostic::error(
                        "c-missing-semicolon",
                        &format!("Missing semicolon at end of statement: \"{}\"", line),
                    )
                    .with_line(i + 1)
                    .with_hint(
                        "Add a semicolon (;) at the end of variable declarations, \
                         assignments, and function calls",
                    ),
                );
            }
        }
    }
}

impl Checker for CChecker {
    fn language(&self) -> Language {
        Language::C
    }

    fn description(&self) -> &str {
        "Heuristic C syntax checker"
    }

    fn check(&self, source: &str) -> Vec<Diagnostic> {
        let mut errors = Vec::new();
        self.check_structure(source, &mut errors);
        self.check_assignment_in_conditions(source, &mut errors);
        self.check_semicolons(source, &mut errors);
        errors
    }

    fn rules(&self) -> &[RuleInfo] {
        &self.rules
    }
}

fn rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo::new("c-unbalanced-braces", "Mismatched braces")
            .with_description("Opening and closing braces are counted over the whole source"),
        RuleInfo::new("c-unbalanced-parens", "Mismatched parentheses")
            .with_description("Opening and closing parentheses are counted over the whole source"),
        RuleInfo::new("c-unbalanced-brackets", "Mismatched brackets")
            .with_description("Opening and closing brackets are counted over the whole source"),
        RuleInfo::new("c-missing-main", "Missing main function")
            .with_description("Every C program needs a main entry point")
            .with_example_bad("int add(int a, int b) { return a + b; }")
            .with_example_good("int main() { return 0; }"),
        RuleInfo::new("c-main-missing-return", "main() without return")
            .with_description("main() should return a status code")
            .with_example_bad("int main() { printf(\"hi\"); }")
            .with_example_good("int main() { return 0; }"),
        RuleInfo::new("c-assign-in-condition", "Assignment in condition")
            .with_description("A single = inside a condition is usually a typo for ==")
            .with_example_bad("if (x = 5) { }")
            .with_example_good("if (x == 5) { }"),
        RuleInfo::new("c-missing-semicolon", "Missing semicolon")
            .with_description(
                "Declarations, assignments, and calls must end with a semicolon; \
                 the check is line-local",
            )
            .with_example_bad("int x = 5")
            .with_example_good("int x = 5;"),
    ]
}
