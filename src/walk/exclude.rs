//! Glob-based exclusion matching

use std::path::Path;

use glob::Pattern;
use tracing::warn;

/// Check a candidate against exclusion patterns.
///
/// Returns true when any pattern matches either the bare `name` or the
/// `full_path`. Matching is shell-style over the whole string, so `*` also
/// crosses path separators. An empty pattern list never matches.
pub fn should_skip(name: &str, full_path: &str, patterns: &[Pattern]) -> bool {
    patterns
        .iter()
        .any(|p| p.matches(name) || p.matches(full_path))
}

/// Rewrite a shell-style pattern into syntax `glob::Pattern` accepts.
///
/// Runs of `*` collapse to a single `*`, which already crosses separators.
/// A `[` without a closing `]` is a literal bracket. Class bodies are kept
/// as written, with `]` allowed as the first member.
pub fn translate_pattern(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                out.push('*');
                while i < chars.len() && chars[i] == '*' {
                    i += 1;
                }
                continue;
            }
            '[' => {
                let mut j = i + 1;
                if j < chars.len() && chars[j] == '!' {
                    j += 1;
                }
                if j < chars.len() && chars[j] == ']' {
                    j += 1;
                }
                while j < chars.len() && chars[j] != ']' {
                    j += 1;
                }
                if j >= chars.len() {
                    out.push_str("[[]");
                } else {
                    out.extend(&chars[i..=j]);
                    i = j;
                }
            }
            c => out.push(c),
        }
        i += 1;
    }

    out
}

/// Compile one pattern, falling back to a literal match.
fn compile_pattern(pattern: &str) -> Pattern {
    let translated = translate_pattern(pattern);
    match Pattern::new(&translated) {
        Ok(p) => p,
        Err(e) => {
            warn!("Pattern '{}' is not a usable glob ({}), matching it literally", pattern, e);
            Pattern::new(&Pattern::escape(pattern)).unwrap_or_default()
        }
    }
}

/// A compiled list of exclusion patterns.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    patterns: Vec<Pattern>,
}

impl ExclusionSet {
    /// Compile shell-style patterns. Every pattern is accepted.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        Self {
            patterns: patterns.iter().map(|p| compile_pattern(p.as_ref())).collect(),
        }
    }

    /// Check whether a path (by its name or its full form) is excluded.
    pub fn is_excluded(&self, name: &str, path: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        should_skip(name, &path.to_string_lossy(), &self.patterns)
    }
}
