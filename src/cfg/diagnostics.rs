//! Non-fatal diagnostics recorded during parsing.
//!
//! Nothing in the parser aborts on malformed input: every condition here is
//! recorded on the [`crate::cfg::Parser`] and processing continues with the
//! next line. The worst case, an unopenable file, only means that file
//! contributes no entries.

use std::fmt;

/// A recoverable problem found while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// `[` seen but the section name was empty at end of line.
    EmptySectionName { line: usize },
    /// `:` after a section header with no parent name following.
    EmptyInheritName { line: usize },
    /// Line ended in key mode with no key accumulated.
    EmptyKey { line: usize },
    /// Line ended in key mode: no `=` separator was seen.
    MissingEquals { line: usize },
    /// `=` seen but no value followed.
    MissingValue { line: usize },
    /// `#` seen with no directive argument following.
    EmptyPreprocessor { line: usize },
    /// Unrecognized character after `\` inside a quoted string. The escape
    /// is dropped and scanning continues.
    UnknownEscape { escape: char, line: usize },
    /// Inherit clause names a section that has not been defined yet. No keys
    /// are copied.
    MissingParent { parent: String, line: usize },
    /// The root file or an `#include` target could not be opened. That file
    /// contributes nothing.
    FileOpen { path: String, reason: String },
    /// An `#include` target is already being processed further up the stack.
    /// The include is skipped instead of recursing forever.
    CyclicInclude { path: String, line: usize },
}

impl Diagnostic {
    /// Source line the diagnostic refers to, if it has one. The counter runs
    /// across included files, matching value provenance.
    pub fn line(&self) -> Option<usize> {
        match self {
            Diagnostic::EmptySectionName { line }
            | Diagnostic::EmptyInheritName { line }
            | Diagnostic::EmptyKey { line }
            | Diagnostic::MissingEquals { line }
            | Diagnostic::MissingValue { line }
            | Diagnostic::EmptyPreprocessor { line }
            | Diagnostic::UnknownEscape { line, .. }
            | Diagnostic::MissingParent { line, .. }
            | Diagnostic::CyclicInclude { line, .. } => Some(*line),
            Diagnostic::FileOpen { .. } => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::EmptySectionName { line } => {
                write!(f, "syntax error: section name is empty at line {}", line)
            }
            Diagnostic::EmptyInheritName { line } => {
                write!(f, "syntax error: inherit name is empty at line {}", line)
            }
            Diagnostic::EmptyKey { line } => {
                write!(f, "syntax error: key is empty at line {}", line)
            }
            Diagnostic::MissingEquals { line } => {
                write!(f, "syntax error: no '=' separator at line {}", line)
            }
            Diagnostic::MissingValue { line } => {
                write!(f, "no value found at line {}", line)
            }
            Diagnostic::EmptyPreprocessor { line } => {
                write!(
                    f,
                    "syntax error: preprocessor directive is empty at line {}",
                    line
                )
            }
            Diagnostic::UnknownEscape { escape, line } => {
                write!(
                    f,
                    "unknown escape character '\\{}' at line {}",
                    escape, line
                )
            }
            Diagnostic::MissingParent { parent, line } => {
                write!(
                    f,
                    "inherited section \"{}\" does not exist (line {})",
                    parent, line
                )
            }
            Diagnostic::FileOpen { path, reason } => {
                write!(f, "file \"{}\" could not be opened: {}", path, reason)
            }
            Diagnostic::CyclicInclude { path, line } => {
                write!(f, "cyclic include of \"{}\" at line {}", path, line)
            }
        }
    }
}

impl std::error::Error for Diagnostic {}
