//! Token scanner for letter templates
//!
//! Templates carry placeholders written as `{{name}}`. The scanner finds
//! every placeholder, reports its trimmed name and byte span, and leaves
//! malformed input alone: an opening delimiter with no closing delimiter
//! before the end of the template stays literal text and is surfaced as a
//! [`ScanWarning`] instead of a token.
//!
//! Scanning is idempotent. Assembly re-scans after every compound
//! substitution rather than patching spans, so tokens are never mutated.

use logos::Logos;
use serde::Serialize;
use std::fmt;

/// Delimiter-level tokens produced by the logos lexer.
///
/// The patterns cover every input byte, so lexing cannot fail; single braces
/// fall through as plain text.
#[derive(Logos, Debug, PartialEq, Clone)]
enum Delim {
    #[token("{{")]
    Open,

    #[token("}}")]
    Close,

    #[regex(r"[^{}]+")]
    Text,

    #[token("{")]
    LoneOpenBrace,

    #[token("}")]
    LoneCloseBrace,
}

/// A `{{name}}` placeholder found in a template.
///
/// `start`/`end` are byte offsets of the full delimiter pair within the
/// scanned text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub name: String,
    pub start: usize,
    pub end: usize,
}

/// Non-fatal conditions noticed while scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanWarning {
    /// A `{{` with no matching `}}` before the end of the template.
    /// The literal text is left untouched.
    Unterminated { offset: usize },
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanWarning::Unterminated { offset } => {
                write!(f, "unterminated '{{{{' at byte {}", offset)
            }
        }
    }
}

/// Scan a template for `{{name}}` placeholders, discarding warnings.
pub fn scan(template: &str) -> Vec<Token> {
    scan_with_warnings(template).0
}

/// Scan a template for placeholders, returning parse warnings alongside.
///
/// Tokens are non-overlapping and returned in document order. The token name
/// is the trimmed text between the nearest delimiter pair; a pair enclosing
/// only whitespace produces no token.
pub fn scan_with_warnings(template: &str) -> (Vec<Token>, Vec<ScanWarning>) {
    let mut tokens = Vec::new();
    let mut warnings = Vec::new();

    // (start of "{{", start of the name text) while inside a placeholder
    let mut open: Option<(usize, usize)> = None;

    let mut lexer = Delim::lexer(template);
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(Delim::Open) => {
                if open.is_none() {
                    open = Some((span.start, span.end));
                }
                // A second "{{" while already open is part of the name text,
                // matching the original single-pass regex behaviour.
            }
            Ok(Delim::Close) => {
                if let Some((start, name_start)) = open.take() {
                    let name = template[name_start..span.start].trim();
                    if !name.is_empty() {
                        tokens.push(Token {
                            name: name.to_string(),
                            start,
                            end: span.end,
                        });
                    }
                }
                // A stray "}}" outside a placeholder is literal text.
            }
            // Plain text, single braces, or (unreachable) lex errors: nothing
            // to do, the open placeholder keeps accumulating by offset.
            Ok(_) | Err(()) => {}
        }
    }

    if let Some((start, _)) = open {
        warnings.push(ScanWarning::Unterminated { offset: start });
    }

    (tokens, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_simple_token() {
        let tokens = scan("Dear {{name}},");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name, "name");
        assert_eq!(tokens[0].start, 5);
        assert_eq!(tokens[0].end, 13);
        assert_eq!(&"Dear {{name}},"[5..13], "{{name}}");
    }

    #[test]
    fn test_scan_trims_names() {
        let tokens = scan("{{  figure }}");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name, "figure");
    }

    #[test]
    fn test_scan_repeated_names() {
        let tokens = scan("{{a}} and {{b}} and {{a}}");
        let names: Vec<&str> = tokens.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_scan_document_order_and_non_overlap() {
        let tokens = scan("{{one}}{{two}}");
        assert_eq!(tokens.len(), 2);
        assert!(tokens[0].end <= tokens[1].start);
    }

    #[test]
    fn test_unterminated_token_warns_and_emits_nothing() {
        let (tokens, warnings) = scan_with_warnings("before {{never closed");
        assert!(tokens.is_empty());
        assert_eq!(warnings, vec![ScanWarning::Unterminated { offset: 7 }]);
    }

    #[test]
    fn test_unterminated_after_valid_token() {
        let (tokens, warnings) = scan_with_warnings("{{ok}} then {{broken");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name, "ok");
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_empty_pair_is_not_a_token() {
        let (tokens, warnings) = scan_with_warnings("{{}} {{  }}");
        assert!(tokens.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_single_braces_are_literal() {
        let (tokens, warnings) = scan_with_warnings("{ not a token } }}");
        assert!(tokens.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_scan_is_idempotent() {
        let template = "Dear {{name}}. {{costs_section_choice}} {{broken";
        let first = scan_with_warnings(template);
        let second = scan_with_warnings(template);
        assert_eq!(first, second);
    }
}
