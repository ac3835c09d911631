//! Output formatters for evaluation results

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::diagnostic::Diagnostic;
use crate::evaluator::Evaluation;

/// Output formatter trait
pub trait OutputFormatter: Send + Sync {
    /// Format the entire evaluation
    fn format(&self, evaluation: &Evaluation) -> String;

    /// Format a single diagnostic
    fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String;
}
