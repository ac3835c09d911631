//! Core evaluator: dispatch, checking, and result assembly

use crate::checker::Checker;
use crate::config::Config;
use crate::diagnostic::{Diagnostic, Severity};
use crate::language::Language;
use crate::rule::RuleInfo;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Fixed affirmation attached to valid snippets
const SUCCESS_MESSAGE: &str = "Your code is correct!";

/// The evaluator's complete output for one submission
///
/// A pure value: created once per [`Evaluator::evaluate`] call, never mutated
/// afterwards, and serializes to the JSON contract consumed by callers
/// (camelCase field names, optional fields omitted).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    /// True iff no error-severity diagnostics were produced
    pub is_valid: bool,

    /// The language the hint resolved to
    pub language: Language,

    /// Error diagnostics, in detection order
    pub errors: Vec<Diagnostic>,

    /// Warning messages, in detection order
    pub warnings: Vec<String>,

    /// Informational and encouraging notes
    pub guidance: Vec<String>,

    /// Present only when the snippet is valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_message: Option<String>,
}

impl Evaluation {
    /// Number of error diagnostics
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Get exit code for CLI use (0 = valid, 1 = has errors)
    pub fn exit_code(&self) -> i32 {
        if self.is_valid {
            0
        } else {
            1
        }
    }
}

/// The main evaluator
///
/// Holds one checker per supported language and the configuration that
/// filters and re-classifies their rules. Evaluation is a pure function of
/// the input pair; the evaluator keeps no state between calls and can be
/// shared freely across threads.
pub struct Evaluator {
    /// Configuration
    config: Config,

    /// Registered checkers (keyed by language)
    checkers: HashMap<Language, Arc<dyn Checker>>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::with_default_checkers(Config::default())
    }
}

impl Evaluator {
    /// Create an evaluator with no checkers registered
    pub fn new(config: Config) -> Self {
        Self {
            config,
            checkers: HashMap::new(),
        }
    }

    /// Create an evaluator with all built-in checkers registered
    pub fn with_default_checkers(config: Config) -> Self {
        let mut evaluator = Self::new(config);
        evaluator.register_checker(Arc::new(crate::checkers::javascript::JavascriptChecker::new()));
        evaluator.register_checker(Arc::new(crate::checkers::python::PythonChecker::new()));
        evaluator.register_checker(Arc::new(crate::checkers::c::CChecker::new()));
        evaluator.register_checker(Arc::new(crate::checkers::java::JavaChecker::new()));
        evaluator
    }

    /// Register a checker for its language
    pub fn register_checker(&mut self, checker: Arc<dyn Checker>) {
        self.checkers.insert(checker.language(), checker);
    }

    /// Get the checker for a language
    pub fn checker(&self, language: Language) -> Option<&Arc<dyn Checker>> {
        self.checkers.get(&language)
    }

    /// Rule metadata across all registered checkers, in a stable order
    pub fn rules(&self) -> Vec<&RuleInfo> {
        let mut rules = Vec::new();
        for language in [Language::Javascript, Language::Python, Language::C, Language::Java] {
            if let Some(checker) = self.checkers.get(&language) {
                rules.extend(checker.rules());
            }
        }
        rules
    }

    /// Find rule metadata by ID
    pub fn find_rule(&self, rule_id: &str) -> Option<&RuleInfo> {
        self.rules().into_iter().find(|r| r.id == rule_id)
    }

    /// Evaluate a snippet against the checker its language hint resolves to.
    ///
    /// Never fails: every outcome, including empty input and unrecognized
    /// languages, is represented in the returned [`Evaluation`].
    pub fn evaluate(&self, source: &str, language_hint: &str) -> Evaluation {
        let trimmed = source.trim();

        if trimmed.is_empty() {
            return Evaluation {
                is_valid: false,
                language: Language::Other,
                errors: vec![Diagnostic::error("empty-code", "Code cannot be empty")],
                warnings: Vec::new(),
                guidance: vec!["Write some code to get started!".to_string()],
                success_message: None,
            };
        }

        let language = Language::classify(language_hint);
        debug!("hint {:?} resolved to language {}", language_hint, language);

        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if let Some(checker) = self.checkers.get(&language) {
            for mut diag in checker.check(source) {
                if !self.config.is_rule_enabled(&diag.rule_id) {
                    debug!("rule {} disabled by config", diag.rule_id);
                    continue;
                }
                if let Some(severity) = self.config.severity_override(&diag.rule_id) {
                    diag.severity = severity;
                }
                // Downgraded diagnostics are reported as warnings so that
                // is_valid stays equivalent to "no errors"
                match diag.severity {
                    Severity::Error => errors.push(diag),
                    Severity::Warning => warnings.push(diag.message),
                }
            }
        } else {
            // Unrecognized languages are never flagged; the result reports
            // valid with zero diagnostics by design
            debug!("no checker for language {}, skipping", language);
        }

        let mut guidance = Vec::new();

        if self.config.guidance.enabled {
            if language == Language::Javascript && source.contains("console.log") {
                guidance.push("Found console.log for debugging.".to_string());
            }

            if trimmed.len() < self.config.guidance.min_meaningful_len {
                guidance.push("Try adding more logic to make this code meaningful.".to_string());
            }
        }

        let is_valid = errors.is_empty();

        if is_valid && self.config.guidance.enabled {
            guidance.push("No syntax errors detected! Good job.".to_string());
        }

        Evaluation {
            is_valid,
            language,
            errors,
            warnings,
            guidance,
            success_message: is_valid.then(|| SUCCESS_MESSAGE.to_string()),
        }
    }
}
