//! Test-support helpers: in-memory parsing and a fluent assertion builder
//! over parsed documents.
//!
//! Tests that walk the document maps directly are verbose and break whenever
//! the store representation shifts. The builder keeps assertions semantic:
//!
//! ```rust,ignore
//! use cfgp::cfg::testing::{assert_doc, parse_str};
//!
//! let parser = parse_str("[a]\nx = 1\n[b] : a\n");
//! assert_doc(parser.document())
//!     .section_count(2)
//!     .has("a", "x", "1")
//!     .has("b", "x", "1")
//!     .missing("b", "y");
//! ```

use crate::cfg::document::{Document, Section};
use crate::cfg::parser::Parser;

/// Parse cfg text from memory into a fresh parser.
pub fn parse_str(source: &str) -> Parser {
    let mut parser = Parser::new();
    parser.parse_str(source);
    parser
}

/// Create an assertion builder for a document.
pub fn assert_doc(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    pub fn section_count(self, expected: usize) -> Self {
        assert_eq!(
            self.doc.section_count(),
            expected,
            "expected {} sections, found {}",
            expected,
            self.doc.section_count()
        );
        self
    }

    /// Assert `(section, key)` holds exactly `value`.
    pub fn has(self, section: &str, key: &str, value: &str) -> Self {
        match self.doc.lookup(section, key) {
            Some(found) => assert_eq!(
                found.value, value,
                "[{}] {}: expected {:?}, found {:?}",
                section, key, value, found.value
            ),
            None => panic!("[{}] {}: entry not found", section, key),
        }
        self
    }

    /// Assert `(section, key)` holds `value` with provenance `line`.
    pub fn has_at_line(self, section: &str, key: &str, value: &str, line: usize) -> Self {
        match self.doc.lookup(section, key) {
            Some(found) => {
                assert_eq!(
                    found.value, value,
                    "[{}] {}: expected {:?}, found {:?}",
                    section, key, value, found.value
                );
                assert_eq!(
                    found.line, line,
                    "[{}] {}: expected line {}, found line {}",
                    section, key, line, found.line
                );
            }
            None => panic!("[{}] {}: entry not found", section, key),
        }
        self
    }

    pub fn missing(self, section: &str, key: &str) -> Self {
        if let Some(found) = self.doc.lookup(section, key) {
            panic!(
                "[{}] {}: expected no entry, found {:?}",
                section, key, found.value
            );
        }
        self
    }

    pub fn no_section(self, section: &str) -> Self {
        assert!(
            !self.doc.section_exists(section),
            "expected section [{}] to be absent",
            section
        );
        self
    }

    /// Drill into one section's entries.
    pub fn section<F>(self, name: &str, check: F) -> Self
    where
        F: FnOnce(SectionAssertion<'_>),
    {
        match self.doc.sections().find(|(section, _)| *section == name) {
            Some((_, entries)) => check(SectionAssertion { name, entries }),
            None => panic!("section [{}] not found", name),
        }
        self
    }
}

pub struct SectionAssertion<'a> {
    name: &'a str,
    entries: &'a Section,
}

impl<'a> SectionAssertion<'a> {
    pub fn key_count(self, expected: usize) -> Self {
        assert_eq!(
            self.entries.len(),
            expected,
            "[{}]: expected {} keys, found {}",
            self.name,
            expected,
            self.entries.len()
        );
        self
    }

    pub fn has(self, key: &str, value: &str) -> Self {
        match self.entries.get(key) {
            Some(found) => assert_eq!(
                found.value, value,
                "[{}] {}: expected {:?}, found {:?}",
                self.name, key, value, found.value
            ),
            None => panic!("[{}] {}: entry not found", self.name, key),
        }
        self
    }

    pub fn missing(self, key: &str) -> Self {
        assert!(
            !self.entries.contains_key(key),
            "[{}] {}: expected no entry",
            self.name,
            key
        );
        self
    }
}
