//! Sensei - Educational Code Feedback Engine
//!
//! A lightweight, pattern-based checker for beginner code submissions.
//! Given a source snippet and a language hint, it runs a set of heuristic
//! rules for the detected language and assembles a structured evaluation:
//! errors with hints, warnings, and encouraging guidance notes.
//!
//! # Architecture
//!
//! ```text
//! CLI/API -> Evaluator -> Checker (per language) -> Diagnostics
//! ```
//!
//! The evaluator classifies the language hint, dispatches to the matching
//! checker, applies configuration (disabled rules, severity overrides), and
//! assembles the final [`Evaluation`].
//!
//! # Example
//!
//! ```
//! use sensei::Evaluator;
//!
//! let evaluator = Evaluator::default();
//! let evaluation = evaluator.evaluate("print('hello')", "python");
//! assert!(evaluation.is_valid);
//! ```

pub mod checker;
pub mod config;
pub mod diagnostic;
pub mod evaluator;
pub mod language;
pub mod output;
pub mod rule;

// Re-export main types
pub use checker::Checker;
pub use config::{ColorMode, Config, ConfigError, OutputFormat};
pub use diagnostic::{Diagnostic, Severity};
pub use evaluator::{Evaluation, Evaluator};
pub use language::Language;
pub use output::{JsonFormatter, OutputFormatter, TextFormatter};
pub use rule::RuleInfo;

// Built-in language checkers
pub mod checkers {
    pub mod c;
    pub mod java;
    pub mod javascript;
    pub mod python;
}
