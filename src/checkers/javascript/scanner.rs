//! Minimal JavaScript syntax scanner
//!
//! Replaces the "hand the text to the runtime and catch the compile error"
//! trick with a real scan that never evaluates anything. It tokenizes just
//! enough of the language - comments, string/template literals, bracket
//! nesting, `function` parameter lists - to catch the mistakes beginners
//! actually make, and reports them with the same message vocabulary a JS
//! engine would use so the hint table downstream still applies.
//!
//! Regex literals are not modeled; a `/` is treated as a plain operator.

use std::fmt;

/// A syntax problem found by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanError {
    /// Engine-style detail, e.g. "Unexpected token '{'"
    pub detail: String,
    /// Byte offset where the problem was detected
    pub offset: usize,
}

impl ScanError {
    fn new(detail: impl Into<String>, offset: usize) -> Self {
        Self {
            detail: detail.into(),
            offset,
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SyntaxError: {}", self.detail)
    }
}

impl std::error::Error for ScanError {}

/// State while inside a `function` parameter list
struct ParamScan {
    /// Bracket-stack depth of the parameter list's opening paren
    depth: usize,
    /// Inside a default-value expression, where arbitrary tokens are fine
    in_default: bool,
}

/// Where the header scan currently is, between `function` and its `(`
enum Header {
    /// Just saw the `function` keyword; a name or `(` may follow
    AfterKeyword,
    /// Not in a function header
    None,
}

/// Scan `source` for structural syntax errors without executing it.
pub fn scan(source: &str) -> Result<(), ScanError> {
    let bytes: Vec<char> = source.chars().collect();
    let mut i = 0;
    let mut stack: Vec<(char, usize)> = Vec::new();
    let mut header = Header::None;
    let mut params: Option<ParamScan> = None;
    // Last significant (non-whitespace, non-comment) character seen
    let mut prev: Option<char> = None;

    while i < bytes.len() {
        let ch = bytes[i];

        // Comments
        if ch == '/' && bytes.get(i + 1) == Some(&'/') {
            while i < bytes.len() && bytes[i] != '\n' {
                i += 1;
            }
            continue;
        }
        if ch == '/' && bytes.get(i + 1) == Some(&'*') {
            i += 2;
            while i < bytes.len() {
                if bytes[i] == '*' && bytes.get(i + 1) == Some(&'/') {
                    i += 2;
                    break;
                }
                i += 1;
            }
            continue;
        }

        // String and template literals
        if ch == '"' || ch == '\'' || ch == '`' {
            let start = i;
            let quote = ch;
            i += 1;
            let mut closed = false;
            while i < bytes.len() {
                if bytes[i] == '\\' {
                    i += 2;
                    continue;
                }
                if bytes[i] == quote {
                    closed = true;
                    i += 1;
                    break;
                }
                // Plain strings cannot span lines
                if bytes[i] == '\n' && quote != '`' {
                    break;
                }
                i += 1;
            }
            if !closed {
                return Err(ScanError::new("Invalid or unexpected token", start));
            }
            prev = Some(quote);
            continue;
        }

        // Identifiers and keywords
        if ch.is_alphabetic() || ch == '_' || ch == '$' {
            let start = i;
            while i < bytes.len() && (bytes[i].is_alphanumeric() || bytes[i] == '_' || bytes[i] == '$')
            {
                i += 1;
            }
            let word: String = bytes[start..i].iter().collect();
            if word == "function" {
                header = Header::AfterKeyword;
            }
            prev = Some('a');
            continue;
        }

        match ch {
            '(' | '[' | '{' => {

                // A brace right after a parameter name is the classic
                // "function add(a, b {" mistake; a brace after '(' or ','
                // is destructuring and stays legal
                if ch == '{' {
                    if let Some(p) = &params {
                        if !p.in_default && stack.len() == p.depth && prev == Some('a') {
                            return Err(ScanError::new("Unexpected token '{'", i));
                        }
                    }
                }

                stack.push((ch, i));
                if ch == '(' {
                    if matches!(header, Header::AfterKeyword) {
                        params = Some(ParamScan {
                            depth: stack.len(),
                            in_default: false,
                        });
                        header = Header::None;
                    }
                }
            }
            ')' | ']' | '}' => {
                let expected_open = match ch {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                match stack.pop() {
                    Some((open, _)) if open == expected_open => {
                        if let Some(p) = &params {
                            if ch == ')' && stack.len() + 1 == p.depth {
                                params = None;
                            }
                        }
                    }
                    _ => {
                        return Err(ScanError::new(format!("Unexpected token '{}'", ch), i));
                    }
                }
            }
            ',' => {
                if let Some(p) = &mut params {
                    if stack.len() == p.depth {
                        p.in_default = false;
                    }
                }
            }
            '=' => {
                if let Some(p) = &mut params {
                    if stack.len() == p.depth {
                        p.in_default = true;
                    }
                }
            }
            ';' => {
                if let Some(p) = &params {
                    if !p.in_default && stack.len() == p.depth {
                        return Err(ScanError::new("Unexpected token ';'", i));
                    }
                }
            }
            _ => {}
        }

        if !ch.is_whitespace() {
            prev = Some(if ch.is_alphanumeric() { 'a' } else { ch });
        }
        i += 1;
    }

    if let Some((_, offset)) = stack.first() {
        return Err(ScanError::new("Unexpected end of input", *offset));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_function() {
        assert!(scan("function add(a, b) { return a + b; }").is_ok());
    }

    #[test]
    fn test_brace_in_parameter_list() {
        let err = scan("function add(a, b { return a + b; }").unwrap_err();
        assert_eq!(err.detail, "Unexpected token '{'");
        assert_eq!(err.to_string(), "SyntaxError: Unexpected token '{'");
    }

    #[test]
    fn test_unclosed_brace_is_end_of_input() {
        let err = scan("function f() { return 1;").unwrap_err();
        assert_eq!(err.detail, "Unexpected end of input");
    }

    #[test]
    fn test_stray_closer() {
        let err = scan("let x = 1;)").unwrap_err();
        assert_eq!(err.detail, "Unexpected token ')'");
    }

    #[test]
    fn test_mismatched_closer() {
        let err = scan("let x = [1, 2);").unwrap_err();
        assert_eq!(err.detail, "Unexpected token ')'");
    }

    #[test]
    fn test_unterminated_string() {
        let err = scan("let s = \"hello;").unwrap_err();
        assert_eq!(err.detail, "Invalid or unexpected token");
    }

    #[test]
    fn test_template_literal_spans_lines() {
        assert!(scan("let s = `line one\nline two`;").is_ok());
    }

    #[test]
    fn test_strings_hide_brackets() {
        assert!(scan("let s = \"not a ) closer\";").is_ok());
        assert!(scan("let s = '{';").is_ok());
    }

    #[test]
    fn test_comments_hide_brackets() {
        assert!(scan("// not a ) closer\nlet x = 1;").is_ok());
        assert!(scan("/* { */ let x = 1;").is_ok());
    }

    #[test]
    fn test_default_parameter_with_object() {
        assert!(scan("function f(opts = {a: 1}, b) { return b; }").is_ok());
    }

    #[test]
    fn test_destructured_parameter_ok() {
        assert!(scan("function f({a, b}) { return a; }").is_ok());
    }

    #[test]
    fn test_destructured_parameter_not_flagged_after_default() {
        // Default-value mode ends at the comma
        let err = scan("function f(a = 1, b { }").unwrap_err();
        assert_eq!(err.detail, "Unexpected token '{'");
    }

    #[test]
    fn test_escaped_quote() {
        assert!(scan("let s = \"say \\\"hi\\\"\";").is_ok());
    }

    #[test]
    fn test_empty_source() {
        assert!(scan("").is_ok());
    }
}
