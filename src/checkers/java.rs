//! Java heuristic checker
//!
//! Mirrors the C checker's two-pass structure with Java vocabulary: a class
//! definition and a main method are required, declarations may carry
//! visibility modifiers, and System.out calls take the place of printf.

use crate::checker::Checker;
use crate::diagnostic::Diagnostic;
use crate::language::Language;
use crate::rule::RuleInfo;
use regex::Regex;

/// Heuristic syntax checker for Java snippets
pub struct JavaChecker {
    assign_in_condition: Regex,
    condition_keyword: Regex,
    declaration: Regex,
    assignment: Regex,
    bare_call: Regex,
    print_or_return: Regex,
    rules: Vec<RuleInfo>,
}

impl Default for JavaChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl JavaChecker {
    pub fn new() -> Self {
        Self {
            assign_in_condition: Regex::new(r"\b(if|while|for)\s*\([^)]*[^!=<>]\s=\s[^=][^)]*\)")
                .unwrap(),
            condition_keyword: Regex::new(r"\b(if|while|for)\b").unwrap(),
            declaration: Regex::new(
                r"^(public|private|protected|static)?\s*(int|String|double|boolean|void|long|char|float)\s+.*[a-zA-Z0-9_)\]]\s*$",
            )
            .unwrap(),
            assignment: Regex::new(r"^[a-zA-Z_]\w*\s*=.*[a-zA-Z0-9_)\]]\s*$").unwrap(),
            bare_call: Regex::new(r"^\w+\s*\([^)]*\)\s*[a-zA-Z0-9_)]\s*$").unwrap(),
            print_or_return: Regex::new(
                r"^(System\.out\.println|System\.out\.print|return)\s*\(.*\)\s*$",
            )
            .unwrap(),
            rules: rules(),
        }
    }

    fn check_structure(&self, source: &str, errors: &mut Vec<Diagnostic>) {
        for (open, close, kind, rule_id, hint) in [
            ('{', '}', "braces", "java-unbalanced-braces", "Make sure every { has a corresponding }"),
            ('(', ')', "parentheses", "java-unbalanced-parens", "Make sure every ( has a corresponding )"),
            ('[', ']', "brackets", "java-unbalanced-brackets", "Make sure every [ has a corresponding ]"),
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

        if !source.contains("class ") {
            errors.push(
                Diagnostic::error(
                    "java-missing-class",
                    "Missing class definition - Java programs need at least one public class",
                )
                .with_hint("Add: public class ClassName { ... }"),
            );
        }

        if !source.contains("main") {
            errors.push(
                Diagnostic::error(
                    "java-missing-main",
                    "Missing main() method - must have: public static void main(String[] args)",
                )
                .with_hint("Add the main method as entry point"),
            );
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
                        "java-assign-in-condition",
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

            // Comments, annotations, and import/package lines are exempt
            if line.is_empty()
                || line.starts_with("//")
                || line.starts_with('*')
                || line.starts_with('@')
                || line.starts_with("import")
                || line.starts_with("package")
            {
                continue;
            }

            // Pure structural lines and control-flow headers are exempt
            if line == "{"
                || line == "}"
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
                || self.print_or_return.is_match(line);

            if needs_semicolon && !line.ends_with(';') && !line.ends_with(',') {
                errors.push(
                    Diagnostic::error(
                        "java-missing-semicolon",
                        &format!("Missing semicolon at end of statement: \"{}\"", line),
                    )
                    .with_line(i + 1)
                    .with_hint(
                        "Add a semicolon (;) at the end of variable declarations, \
                         assignments, and method calls",
                    ),
                );
            }
        }
    }
}

impl Checker for JavaChecker {
    fn language(&self) -> Language {
        Language::Java
    }

    fn description(&self) -> &str {
        "Heuristic Java syntax checker"
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
        RuleInfo::new("java-unbalanced-braces", "Mismatched braces")
            .with_description("Opening and closing braces are counted over the whole source"),
        RuleInfo::new("java-unbalanced-parens", "Mismatched parentheses")
            .with_description("Opening and closing parentheses are counted over the whole source"),
        RuleInfo::new("java-unbalanced-brackets", "Mismatched brackets")
            .with_description("Opening and closing brackets are counted over the whole source"),
        RuleInfo::new("java-missing-class", "Missing class definition")
            .with_description("Java programs need at least one class")
            .with_example_bad("public static void main(String[] args) { }")
            .with_example_good("public class Main { public static void main(String[] args) { } }"),
        RuleInfo::new("java-missing-main", "Missing main method")
            .with_description("The entry point must be public static void main(String[] args)"),
        RuleInfo::new("java-assign-in-condition", "Assignment in condition")
            .with_description("A single = inside a condition is usually a typo for ==")
            .with_example_bad("if (x = 5) { }")
            .with_example_good("if (x == 5) { }"),
        RuleInfo::new("java-missing-semicolon", "Missing semicolon")
            .with_description(
                "Declarations, assignments, and calls must end with a semicolon; \
                 the check is line-local",
            )
            .with_example_bad("int x = 5")
            .with_example_good("int x = 5;"),
    ]
}
