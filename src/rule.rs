//! Rule metadata
//!
//! Checker rules are implemented in code, not loaded from manifests, but each
//! one still carries a stable ID and descriptive metadata so the CLI can list
//! and explain them, and so configuration can disable or re-classify them.

use crate::diagnostic::Severity;
use serde::{Deserialize, Serialize};

/// Metadata describing one heuristic rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleInfo {
    /// Unique rule identifier (e.g., "py-missing-colon")
    pub id: String,

    /// Human-readable name
    pub name: String,

    /// Default severity level
    pub severity: Severity,

    /// Detailed description
    #[serde(default)]
    pub description: Option<String>,

    /// Example of code that violates this rule
    #[serde(default)]
    pub example_bad: Option<String>,

    /// Example of correct code
    #[serde(default)]
    pub example_good: Option<String>,
}

impl RuleInfo {
    /// Create rule metadata with the default (error) severity
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            severity: Severity::Error,
            description: None,
            example_bad: None,
            example_good: None,
        }
    }

    /// Set the severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Set the description
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Set bad example
    pub fn with_example_bad(mut self, example: &str) -> Self {
        self.example_bad = Some(example.to_string());
        self
    }

    /// Set good example
    pub fn with_example_good(mut self, example: &str) -> Self {
        self.example_good = Some(example.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_info_creation() {
        let rule = RuleInfo::new("py-print-parens", "Python 2 style print");
        assert_eq!(rule.id, "py-print-parens");
        assert_eq!(rule.severity, Severity::Error);
        assert!(rule.description.is_none());
    }

    #[test]
    fn test_rule_info_builder() {
        let rule = RuleInfo::new("c-missing-main", "Missing main function")
            .with_severity(Severity::Error)
            .with_description("Every C program needs a main entry point")
            .with_example_bad("int add(int a, int b) { return a + b; }")
            .with_example_good("int main() { return 0; }");

        assert!(rule.description.is_some());
        assert!(rule.example_bad.is_some());
        assert!(rule.example_good.is_some());
    }
}
