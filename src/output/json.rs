//! JSON output formatter
//!
//! Serializes the evaluation exactly as the library's serde contract
//! defines it, so the CLI output and the library's JSON representation
//! never drift apart.

use super::OutputFormatter;
use crate::diagnostic::Diagnostic;
use crate::evaluator::Evaluation;

/// JSON formatter for machine-readable output
#[derive(Default)]
pub struct JsonFormatter {
    /// Pretty print with indentation
    pub pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable pretty printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, evaluation: &Evaluation) -> String {
        if self.pretty {
            serde_json::to_string_pretty(evaluation).unwrap_or_default()
        } else {
            serde_json::to_string(evaluation).unwrap_or_default()
        }
    }

    fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        if self.pretty {
            serde_json::to_string_pretty(diagnostic).unwrap_or_default()
        } else {
            serde_json::to_string(diagnostic).unwrap_or_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Severity;
    use crate::language::Language;

    #[test]
    fn test_json_format_diagnostic() {
        let formatter = JsonFormatter::new();
        let diag = Diagnostic::error("py-print-parens", "print statement needs parentheses")
            .with_line(2);

        let output = formatter.format_diagnostic(&diag);
        assert!(output.contains("\"ruleId\":\"py-print-parens\""));
        assert!(output.contains("\"severity\":\"error\""));
        assert!(output.contains("\"line\":2"));
        // Unset optional fields are omitted entirely
        assert!(!output.contains("column"));
        assert!(!output.contains("hint"));
    }

    #[test]
    fn test_json_format_evaluation() {
        let formatter = JsonFormatter::new();
        let evaluation = Evaluation {
            is_valid: false,
            language: Language::Java,
            errors: vec![Diagnostic::new(
                "java-missing-class",
                Severity::Error,
                "No class definition found",
            )],
            warnings: vec![],
            guidance: vec![],
            success_message: None,
        };

        let output = formatter.format(&evaluation);
        assert!(output.contains("\"isValid\":false"));
        assert!(output.contains("\"language\":\"java\""));
        assert!(!output.contains("successMessage"));
    }

    #[test]
    fn test_json_pretty() {
        let formatter = JsonFormatter::new().pretty();
        let diag = Diagnostic::error("js-syntax-error", "SyntaxError: Unexpected token ')'");

        let output = formatter.format_diagnostic(&diag);
        assert!(output.contains('\n'));
    }
}
