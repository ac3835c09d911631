//! Supported languages and language-hint classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// A language the evaluator knows how to check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Javascript,
    Python,
    C,
    Java,
    /// Anything the classifier does not recognize; no checker runs for it
    #[default]
    Other,
}

impl Language {
    /// Classify a free-form language hint.
    ///
    /// The hint is matched case-insensitively by substring containment, in a
    /// fixed priority order. "java" wins over "c" only when "script" is
    /// absent, so "javascript" still lands on the JS family; "cpp" and "c++"
    /// land on C. Unmatched hints become [`Language::Other`].
    pub fn classify(hint: &str) -> Self {
        let hint = hint.to_lowercase();

        if hint.contains("js")
            || hint.contains("javascript")
            || hint.contains("ts")
            || hint.contains("typescript")
        {
            Language::Javascript
        } else if hint.contains("python") || hint.contains("py") {
            Language::Python
        } else if hint.contains("java") && !hint.contains("script") {
            Language::Java
        } else if hint.contains('c') {
            Language::C
        } else {
            Language::Other
        }
    }

    /// Infer a language from a file extension (CLI convenience)
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "js" | "jsx" | "mjs" | "cjs" | "ts" | "tsx" => Language::Javascript,
            "py" | "pyw" => Language::Python,
            "c" | "h" | "cpp" | "cc" | "cxx" | "hpp" => Language::C,
            "java" => Language::Java,
            _ => Language::Other,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Javascript => write!(f, "javascript"),
            Language::Python => write!(f, "python"),
            Language::C => write!(f, "c"),
            Language::Java => write!(f, "java"),
            Language::Other => write!(f, "other"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_javascript_family() {
        assert_eq!(Language::classify("javascript"), Language::Javascript);
        assert_eq!(Language::classify("JS"), Language::Javascript);
        assert_eq!(Language::classify("typescript"), Language::Javascript);
        assert_eq!(Language::classify("node.js"), Language::Javascript);
    }

    #[test]
    fn test_classify_python() {
        assert_eq!(Language::classify("python"), Language::Python);
        assert_eq!(Language::classify("Python 3"), Language::Python);
        assert_eq!(Language::classify("py"), Language::Python);
    }

    #[test]
    fn test_classify_java_not_javascript() {
        assert_eq!(Language::classify("java"), Language::Java);
        assert_eq!(Language::classify("Java 17"), Language::Java);
    }

    #[test]
    fn test_classify_c_family() {
        assert_eq!(Language::classify("c"), Language::C);
        // "cpp" and "c++" route to the C checker by the "contains c" fallback
        assert_eq!(Language::classify("cpp"), Language::C);
        assert_eq!(Language::classify("c++"), Language::C);
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(Language::classify("ruby"), Language::Other);
        assert_eq!(Language::classify(""), Language::Other);
        assert_eq!(Language::classify("unknown"), Language::Other);
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(Language::from_extension("js"), Language::Javascript);
        assert_eq!(Language::from_extension("PY"), Language::Python);
        assert_eq!(Language::from_extension("cpp"), Language::C);
        assert_eq!(Language::from_extension("java"), Language::Java);
        assert_eq!(Language::from_extension("rb"), Language::Other);
    }

    #[test]
    fn test_display_lowercase() {
        assert_eq!(Language::Javascript.to_string(), "javascript");
        assert_eq!(Language::Other.to_string(), "other");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Language::Javascript).unwrap();
        assert_eq!(json, "\"javascript\"");
    }
}
