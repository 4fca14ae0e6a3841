//! Supported source languages and their comment syntax.
//!
//! The scanner only understands languages it has comment heuristics
//! for; anything else is simply not applicable and scans to an empty
//! finding set.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Programming language of a scanned document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    JavaScriptReact,
    TypeScriptReact,
}

impl Language {
    /// Resolve an editor language identifier (e.g. `"python"`,
    /// `"typescriptreact"`). Unknown ids return `None`, not an error.
    pub fn from_id(id: &str) -> Option<Self> {
        match id.to_lowercase().as_str() {
            "python" => Some(Self::Python),
            "javascript" => Some(Self::JavaScript),
            "typescript" => Some(Self::TypeScript),
            "javascriptreact" | "jsx" => Some(Self::JavaScriptReact),
            "typescriptreact" | "tsx" => Some(Self::TypeScriptReact),
            _ => None,
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "py" => Some(Self::Python),
            "js" | "mjs" | "cjs" => Some(Self::JavaScript),
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "jsx" => Some(Self::JavaScriptReact),
            "tsx" => Some(Self::TypeScriptReact),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Canonical editor language identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::JavaScriptReact => "javascriptreact",
            Self::TypeScriptReact => "typescriptreact",
        }
    }

    /// Marker that starts a single-line comment.
    pub fn line_comment(&self) -> &'static str {
        match self {
            Self::Python => "#",
            _ => "//",
        }
    }

    /// Whether `/* ... */` block comments exist in this language.
    pub fn has_block_comments(&self) -> bool {
        !matches!(self, Self::Python)
    }

    /// Whether triple-quoted documentation strings exist.
    pub fn has_docstrings(&self) -> bool {
        matches!(self, Self::Python)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Python => write!(f, "Python"),
            Self::JavaScript => write!(f, "JavaScript"),
            Self::TypeScript => write!(f, "TypeScript"),
            Self::JavaScriptReact => write!(f, "JavaScript (JSX)"),
            Self::TypeScriptReact => write!(f, "TypeScript (TSX)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_editor_ids() {
        assert_eq!(Language::from_id("python"), Some(Language::Python));
        assert_eq!(
            Language::from_id("typescriptreact"),
            Some(Language::TypeScriptReact)
        );
        assert_eq!(Language::from_id("rust"), None);
    }

    #[test]
    fn resolves_extensions() {
        assert_eq!(
            Language::from_path(Path::new("app/server.py")),
            Some(Language::Python)
        );
        assert_eq!(
            Language::from_path(Path::new("src/chat.tsx")),
            Some(Language::TypeScriptReact)
        );
        assert_eq!(Language::from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn comment_syntax() {
        assert_eq!(Language::Python.line_comment(), "#");
        assert_eq!(Language::TypeScript.line_comment(), "//");
        assert!(!Language::Python.has_block_comments());
        assert!(Language::Python.has_docstrings());
        assert!(!Language::JavaScript.has_docstrings());
    }
}
