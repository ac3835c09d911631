//! Human-readable text output formatter

use super::OutputFormatter;
use crate::diagnostic::{Diagnostic, Severity};
use crate::evaluator::Evaluation;
use colored::*;

/// Text formatter with optional color support
pub struct TextFormatter {
    /// Enable colored output
    pub colored: bool,

    /// Show hints
    pub show_hints: bool,

    /// Show guidance notes
    pub show_guidance: bool,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self {
            colored: true,
            show_hints: true,
            show_guidance: true,
        }
    }
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable colors
    pub fn without_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn severity_str(&self, severity: Severity) -> ColoredString {
        let s = format!("{}", severity);
        if !self.colored {
            return s.normal();
        }
        match severity {
            Severity::Error => s.red().bold(),
            Severity::Warning => s.yellow().bold(),
        }
    }

    fn format_location(&self, diag: &Diagnostic) -> String {
        match (diag.line, diag.column) {
            (Some(line), Some(column)) => format!("line {}:{}: ", line, column),
            (Some(line), None) => format!("line {}: ", line),
            _ => String::new(),
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, evaluation: &Evaluation) -> String {
        let mut output = String::new();

        for diag in &evaluation.errors {
            output.push_str(&self.format_diagnostic(diag));
            output.push('\n');
        }

        for warning in &evaluation.warnings {
            output.push_str(&format!(
                "{}: {}\n",
                if self.colored {
                    "warning".yellow().bold().to_string()
                } else {
                    "warning".to_string()
                },
                warning
            ));
        }

        if self.show_guidance {
            for note in &evaluation.guidance {
                output.push_str(&format!(
                    "{} {}\n",
                    if self.colored {
                        "note:".blue().to_string()
                    } else {
                        "note:".to_string()
                    },
                    note
                ));
            }
        }

        if let Some(message) = &evaluation.success_message {
            output.push_str(&format!(
                "{}\n",
                if self.colored {
                    message.green().bold().to_string()
                } else {
                    message.clone()
                }
            ));
        } else {
            let count = evaluation.error_count();
            output.push_str(&format!(
                "{} {} found\n",
                count,
                if count == 1 { "error" } else { "errors" }
            ));
        }

        output
    }

    fn format_diagnostic(&self, diag: &Diagnostic) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}{}[{}]: {}\n",
            self.format_location(diag),
            self.severity_str(diag.severity),
            if self.colored {
                diag.rule_id.cyan().to_string()
            } else {
                diag.rule_id.clone()
            },
            diag.message
        ));

        if self.show_hints {
            if let Some(hint) = &diag.hint {
                output.push_str(&format!(
                    "   {} hint: {}\n",
                    if self.colored {
                        "=".blue().to_string()
                    } else {
                        "=".to_string()
                    },
                    hint
                ));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    fn failing_evaluation() -> Evaluation {
        Evaluation {
            is_valid: false,
            language: Language::Python,
            errors: vec![Diagnostic::error(
                "py-missing-colon",
                "Missing colon at end of statement",
            )
            .with_line(3)
            .with_hint("Block statements like if, for, and def need a ':' at the end.")],
            warnings: vec![],
            guidance: vec![],
            success_message: None,
        }
    }

    #[test]
    fn test_format_diagnostic() {
        let formatter = TextFormatter::new().without_color();
        let diag = Diagnostic::error("py-missing-colon", "Missing colon at end of statement")
            .with_line(3)
            .with_hint("Add a ':' at the end of the line.");

        let output = formatter.format_diagnostic(&diag);
        assert!(output.contains("line 3:"));
        assert!(output.contains("error"));
        assert!(output.contains("py-missing-colon"));
        assert!(output.contains("Missing colon"));
        assert!(output.contains("hint:"));
    }

    #[test]
    fn test_format_diagnostic_without_location() {
        let formatter = TextFormatter::new().without_color();
        let diag = Diagnostic::error("c-missing-main", "No main function found");

        let output = formatter.format_diagnostic(&diag);
        assert!(!output.contains("line"));
        assert!(output.starts_with("error"));
    }

    #[test]
    fn test_format_failing_evaluation() {
        let formatter = TextFormatter::new().without_color();
        let output = formatter.format(&failing_evaluation());
        assert!(output.contains("1 error found"));
        assert!(!output.contains("correct"));
    }

    #[test]
    fn test_format_valid_evaluation() {
        let formatter = TextFormatter::new().without_color();
        let evaluation = Evaluation {
            is_valid: true,
            language: Language::Javascript,
            errors: vec![],
            warnings: vec![],
            guidance: vec!["No syntax errors detected! Good job.".to_string()],
            success_message: Some("Your code is correct!".to_string()),
        };

        let output = formatter.format(&evaluation);
        assert!(output.contains("Your code is correct!"));
        assert!(output.contains("note: No syntax errors detected! Good job."));
    }

    #[test]
    fn test_warnings_rendered() {
        let formatter = TextFormatter::new().without_color();
        let evaluation = Evaluation {
            is_valid: true,
            language: Language::C,
            errors: vec![],
            warnings: vec!["Missing semicolon at end of statement".to_string()],
            guidance: vec![],
            success_message: Some("Your code is correct!".to_string()),
        };

        let output = formatter.format(&evaluation);
        assert!(output.contains("warning: Missing semicolon"));
    }
}
