//! Checker trait for per-language heuristic evaluation

use crate::diagnostic::Diagnostic;
use crate::language::Language;
use crate::rule::RuleInfo;

/// A per-language heuristic checker
///
/// Checkers are pure: the same source always yields the same diagnostics, in
/// the same order, and a checker never fails - malformed input simply produces
/// diagnostics or an empty list. They hold no state between calls, so a single
/// instance is safe to share across threads.
pub trait Checker: Send + Sync {
    /// The language this checker handles
    fn language(&self) -> Language;

    /// Human-readable description
    fn description(&self) -> &str;

    /// Apply the checker's rules to the source text, in rule order
    fn check(&self, source: &str) -> Vec<Diagnostic>;

    /// Metadata for all rules this checker implements
    fn rules(&self) -> &[RuleInfo];
}
