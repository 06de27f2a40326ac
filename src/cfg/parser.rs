//! File-level parsing: line loop, `#include` resolution, and assembly of the
//! scanned events into the document.
//!
//! The parser owns the [`Document`], the recorded [`Diagnostic`]s, the base
//! config path prepended to every include target, and one line counter that
//! runs across all processed files (value provenance is cumulative, so a line
//! number identifies a position in the overall processing order).
//!
//! Includes are processed depth first: when a line contains `#include`, the
//! target file is parsed to completion before the rest of the including file
//! continues. A stack of in-flight paths guards against include cycles.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::cfg::diagnostics::Diagnostic;
use crate::cfg::document::{ConfigValue, Document};
use crate::cfg::scanner::{LineEvent, LineScanner};

const INCLUDE_MARKER: &str = "#include";

/// Parser for ini-style cfg files.
///
/// Construction never fails: recoverable syntax problems and unopenable
/// files are recorded as diagnostics and the document simply lacks the
/// affected entries.
#[derive(Debug, Default)]
pub struct Parser {
    document: Document,
    diagnostics: Vec<Diagnostic>,
    base_config_path: String,
    line: usize,
    include_stack: Vec<PathBuf>,
}

impl Parser {
    pub fn new() -> Self {
        Parser::default()
    }

    /// Parse `path` (and transitively its includes) into a fresh parser.
    ///
    /// Includes resolve against the default (empty) base config path; use
    /// [`Parser::new`] + [`Parser::set_base_config_path`] +
    /// [`Parser::parse_file`] when a prefix is needed.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let mut parser = Parser::new();
        parser.parse_file(path);
        parser
    }

    /// Set the directory prefix prepended to every `#include` target.
    ///
    /// The prefix is textual, so a directory must end with a separator:
    /// `cfgs/` makes `#include "sub.cfg"` open `cfgs/sub.cfg`.
    pub fn set_base_config_path<S: Into<String>>(&mut self, path: S) {
        self.base_config_path = path.into();
    }

    pub fn base_config_path(&self) -> &str {
        &self.base_config_path
    }

    /// Read and process one file. A file that cannot be opened records a
    /// [`Diagnostic::FileOpen`] and contributes nothing; a file already being
    /// processed records a [`Diagnostic::CyclicInclude`] and is skipped.
    pub fn parse_file<P: AsRef<Path>>(&mut self, path: P) {
        let path = path.as_ref();
        // Canonicalize where possible so the cycle guard sees one spelling
        // per file; an unresolvable path falls back to its literal form.
        let identity = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if self.include_stack.contains(&identity) {
            self.diagnostics.push(Diagnostic::CyclicInclude {
                path: path.display().to_string(),
                line: self.line,
            });
            return;
        }

        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                self.diagnostics.push(Diagnostic::FileOpen {
                    path: path.display().to_string(),
                    reason: err.to_string(),
                });
                return;
            }
        };

        self.include_stack.push(identity);
        self.process_source(&source);
        self.include_stack.pop();
    }

    /// Process cfg text from memory through the same pipeline as
    /// [`Parser::parse_file`]. Includes still resolve against the base
    /// config path.
    pub fn parse_str(&mut self, source: &str) {
        self.process_source(source);
    }

    fn process_source(&mut self, source: &str) {
        // Scanner state is per file: the active section of an including file
        // does not leak into the included one, and vice versa.
        let mut scanner = LineScanner::new();

        for raw in source.lines() {
            self.line += 1;
            if raw.is_empty() || raw.starts_with(';') {
                continue;
            }

            // Includes are handled before character dispatch; the included
            // file is fully processed first, then this line's characters run
            // through the scanner (landing harmlessly in preprocessor mode).
            if let Some(argument) = include_argument(raw) {
                let target = format!("{}{}", self.base_config_path, argument);
                self.parse_file(Path::new(&target));
            }

            let outcome = scanner.scan_line(raw, self.line);
            self.diagnostics.extend(outcome.diagnostics);
            for event in outcome.events {
                self.apply(event);
            }
        }
    }

    fn apply(&mut self, event: LineEvent) {
        match event {
            LineEvent::Entry {
                section,
                key,
                value,
            } => {
                self.document.insert(
                    &section,
                    key,
                    ConfigValue {
                        value,
                        line: self.line,
                    },
                );
            }
            LineEvent::Inherit { section, parent } => {
                // The header creates the section context even when the
                // parent is missing.
                self.document.open_section(&section);
                if !self.document.inherit(&section, &parent, self.line) {
                    self.diagnostics.push(Diagnostic::MissingParent {
                        parent,
                        line: self.line,
                    });
                }
            }
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn section_exists(&self, section: &str) -> bool {
        self.document.section_exists(section)
    }

    pub fn key_exists(&self, section: &str, key: &str) -> bool {
        self.document.key_exists(section, key)
    }

    /// Value and provenance line for `(section, key)`, if present.
    pub fn lookup(&self, section: &str, key: &str) -> Option<(&str, usize)> {
        self.document
            .lookup(section, key)
            .map(|entry| (entry.value.as_str(), entry.line))
    }

    pub fn section_count(&self) -> usize {
        self.document.section_count()
    }

    /// Number of keys in `section`; reports to stderr and returns 0 when the
    /// section is absent.
    pub fn key_count(&self, section: &str) -> usize {
        if !self.document.section_exists(section) {
            eprintln!("section \"{}\" doesn't exist", section);
            return 0;
        }
        self.document.key_count(section)
    }

    /// Print every section and key=value pair to stdout.
    pub fn debug_dump(&self) {
        let stdout = io::stdout();
        // Dump failures mean stdout is gone; nothing sensible to do.
        let _ = self.document.dump_to(&mut stdout.lock());
    }
}

/// Include argument of `line`, if the line carries the `#include` marker:
/// everything after the marker with whitespace, quotes, and angle brackets
/// stripped.
fn include_argument(line: &str) -> Option<String> {
    let at = line.find(INCLUDE_MARKER)?;
    let rest = &line[at + INCLUDE_MARKER.len()..];
    Some(
        rest.chars()
            .filter(|c| !matches!(c, ' ' | '\t' | '"' | '<' | '>'))
            .collect(),
    )
}
