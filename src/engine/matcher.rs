//! Single-line pattern matching.
//!
//! Produces every non-overlapping occurrence of a pattern within one
//! line, left-to-right. Case sensitivity is owned by the pattern
//! itself (inline `(?i)`), not by the matcher.

use regex::Regex;

/// One raw pattern occurrence, in byte offsets into the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

/// Find all non-overlapping occurrences of `pattern` in `line`.
///
/// After a zero-width match the search position advances by one
/// character, so patterns that can match empty never loop forever.
pub fn find_matches(pattern: &Regex, line: &str) -> Vec<MatchSpan> {
    let mut spans = Vec::new();
    let mut pos = 0;

    while pos <= line.len() {
        let Some(m) = pattern.find_at(line, pos) else {
            break;
        };
        spans.push(MatchSpan {
            start: m.start(),
            end: m.end(),
        });
        pos = if m.end() > m.start() {
            m.end()
        } else {
            next_char_boundary(line, m.end())
        };
    }

    spans
}

/// Character column (zero-based) of a byte offset within a line.
pub fn char_column(line: &str, byte_idx: usize) -> u32 {
    line[..byte_idx.min(line.len())].chars().count() as u32
}

/// Character length of the span `start..end` within a line.
pub fn char_length(line: &str, span: MatchSpan) -> u32 {
    let end = span.end.min(line.len());
    let start = span.start.min(end);
    line[start..end].chars().count() as u32
}

fn next_char_boundary(s: &str, idx: usize) -> usize {
    if idx >= s.len() {
        return s.len() + 1;
    }
    let mut next = idx + 1;
    while next < s.len() && !s.is_char_boundary(next) {
        next += 1;
    }
    next
}
