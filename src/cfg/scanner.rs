//! Character-level scanning state machine for cfg lines.
//!
//! The scanner consumes one line at a time and classifies every character
//! against a small modal state ([`Mode`]). Character meaning is context
//! sensitive: `:` starts an inheritance clause only while a section header is
//! being read, `=` separates key from value only outside quoted strings, and
//! inside a quoted string every character is literal until the closing `"`.
//!
//! Carry-over contract: the active section name persists across lines until
//! the next `[` header. The mode and every other accumulator (key, value,
//! inherit name, preprocessor argument) reset at the start of each line.
//!
//! The scanner knows nothing about files or the document; it reports what a
//! finished line asks for as [`LineEvent`]s, which the parser applies to the
//! document store. File-level concerns (blank/comment line skipping and
//! `#include` handling) live in [`crate::cfg::parser`].

use crate::cfg::diagnostics::Diagnostic;

/// Parse mode of the scanner within the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Accumulating a key name. Default mode at the start of every line.
    Key,
    /// Accumulating a section name after `[`.
    Section,
    /// Accumulating an unquoted value after `=`.
    Value,
    /// Accumulating a parent-section name after `:` in a section header.
    Inherit,
    /// Accumulating a quoted value after `"`; all characters are literal.
    String,
    /// Accumulating a directive argument after `#`.
    Preprocessor,
}

/// What a finished line asks the document layer to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// Insert or overwrite `(section, key) = value`.
    Entry {
        section: String,
        key: String,
        value: String,
    },
    /// Copy the parent section's current entries into the active section.
    Inherit { section: String, parent: String },
}

/// Events and diagnostics produced by scanning a single line.
#[derive(Debug, Default)]
pub struct LineOutcome {
    pub events: Vec<LineEvent>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Scanner state for one file.
#[derive(Debug)]
pub struct LineScanner {
    mode: Mode,
    section: String,
    key: String,
    value: String,
    inherit: String,
    preprocess: String,
}

impl LineScanner {
    pub fn new() -> Self {
        LineScanner {
            mode: Mode::Key,
            section: String::new(),
            key: String::new(),
            value: String::new(),
            inherit: String::new(),
            preprocess: String::new(),
        }
    }

    /// The mode the scanner was left in by the last line.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The section name entries are currently assigned under.
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Dispatch every character of `line`, then finalize whatever entry was
    /// in progress. `line_no` is recorded in diagnostics and carried into the
    /// produced events' provenance by the parser.
    pub fn scan_line(&mut self, line: &str, line_no: usize) -> LineOutcome {
        self.begin_line();

        let mut out = LineOutcome::default();
        let chars: Vec<char> = line.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            let chr = chars[i];

            if self.mode == Mode::String {
                match chr {
                    '"' => self.mode = Mode::Key,
                    '\\' => {
                        // Two-character escape; a trailing backslash at end
                        // of line is dropped.
                        if let Some(&next) = chars.get(i + 1) {
                            match next {
                                'n' => self.value.push('\n'),
                                't' => self.value.push('\t'),
                                '"' => self.value.push('"'),
                                '\'' => self.value.push('\''),
                                '\\' => self.value.push('\\'),
                                other => out.diagnostics.push(Diagnostic::UnknownEscape {
                                    escape: other,
                                    line: line_no,
                                }),
                            }
                            i += 1;
                        }
                    }
                    other => self.value.push(other),
                }
            } else {
                match chr {
                    '[' => {
                        self.mode = Mode::Section;
                        self.section.clear();
                    }
                    // `]` closes the header visually only; the section name
                    // already ended at the last accumulated character.
                    ']' => {}
                    '#' => {
                        self.mode = Mode::Preprocessor;
                        self.preprocess.clear();
                    }
                    ':' => {
                        if self.mode == Mode::Section {
                            self.mode = Mode::Inherit;
                        }
                    }
                    '=' => self.mode = Mode::Value,
                    // Comment: drop the remainder of the line.
                    ';' => break,
                    '"' => {
                        if self.mode == Mode::Value {
                            self.mode = Mode::String;
                        }
                    }
                    // Whitespace outside strings is never accumulated, so
                    // unquoted values cannot contain interior spaces.
                    ' ' | '\t' => {}
                    // Backslash is only meaningful inside a quoted string.
                    '\\' => {}
                    other => match self.mode {
                        Mode::Section => self.section.push(other),
                        Mode::Key => self.key.push(other),
                        Mode::Value => self.value.push(other),
                        Mode::Inherit => self.inherit.push(other),
                        Mode::Preprocessor => self.preprocess.push(other),
                        // Handled by the branch above.
                        Mode::String => {}
                    },
                }
            }

            i += 1;
        }

        self.finish_line(line_no, &mut out);
        out
    }

    fn begin_line(&mut self) {
        self.mode = Mode::Key;
        self.key.clear();
        self.value.clear();
        self.inherit.clear();
        self.preprocess.clear();
    }

    fn finish_line(&mut self, line_no: usize, out: &mut LineOutcome) {
        if self.section.is_empty() && self.mode == Mode::Section {
            out.diagnostics
                .push(Diagnostic::EmptySectionName { line: line_no });
        }
        if self.inherit.is_empty() && self.mode == Mode::Inherit {
            out.diagnostics
                .push(Diagnostic::EmptyInheritName { line: line_no });
        }
        if self.key.is_empty() && self.mode == Mode::Key {
            out.diagnostics.push(Diagnostic::EmptyKey { line: line_no });
        }
        if self.value.is_empty() && self.mode == Mode::Key {
            out.diagnostics
                .push(Diagnostic::MissingEquals { line: line_no });
        }
        if self.value.is_empty() && self.mode == Mode::Value {
            out.diagnostics
                .push(Diagnostic::MissingValue { line: line_no });
        }
        if self.preprocess.is_empty() && self.mode == Mode::Preprocessor {
            out.diagnostics
                .push(Diagnostic::EmptyPreprocessor { line: line_no });
        }

        if self.mode == Mode::Inherit && !self.inherit.is_empty() {
            out.events.push(LineEvent::Inherit {
                section: self.section.clone(),
                parent: std::mem::take(&mut self.inherit),
            });
            self.mode = Mode::Key;
        }

        if !self.section.is_empty() && self.mode != Mode::Section && !self.key.is_empty() {
            out.events.push(LineEvent::Entry {
                section: self.section.clone(),
                key: std::mem::take(&mut self.key),
                value: std::mem::take(&mut self.value),
            });
        }
    }
}

impl Default for LineScanner {
    fn default() -> Self {
        Self::new()
    }
}
