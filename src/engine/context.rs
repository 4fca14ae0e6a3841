//! Comment and docstring suppression.
//!
//! All checks are line-local: block comments and triple-quoted strings
//! that span multiple lines are not tracked across lines. That keeps
//! the filter allocation-free and O(line length) per candidate, at the
//! cost of known misses around multi-line constructs. See the crate
//! docs for the full list of limitations.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lang::Language;

static BLOCK_COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\*.*?\*/").unwrap());

/// Decide whether a candidate match at byte `offset` of `line` sits
/// inside a comment or docstring and should be dropped.
pub fn is_suppressed(language: Language, line: &str, offset: usize) -> bool {
    // Line comment: a marker anywhere at or before the offset wins,
    // even if it is itself inside a string literal.
    if let Some(idx) = line.find(language.line_comment()) {
        if idx <= offset {
            return true;
        }
    }

    // Block comment closed on this same line whose span covers the offset.
    if language.has_block_comments() {
        for m in BLOCK_COMMENT_RE.find_iter(line) {
            if m.start() <= offset && offset < m.end() {
                return true;
            }
        }
    }

    // Docstring: an odd number of triple-quote delimiters before the
    // offset means one was opened earlier on this line.
    if language.has_docstrings() {
        let before = &line[..offset.min(line.len())];
        if before.matches(r#"""""#).count() % 2 == 1 || before.matches("'''").count() % 2 == 1 {
            return true;
        }
    }

    false
}
