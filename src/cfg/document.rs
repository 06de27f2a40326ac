//! In-memory store for parsed (section, key, value) entries.
//!
//! The document is write-once-append during parsing and read-many afterward.
//! Maps are `BTreeMap` so the dump and JSON renderings are deterministic;
//! ordering carries no semantic meaning.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;

/// A raw string payload plus the line it originated from.
///
/// The line number is provenance for diagnostics only. Values are never
/// mutated after insertion; a later assignment to the same (section, key)
/// replaces the whole value (last write wins).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigValue {
    pub value: String,
    pub line: usize,
}

/// A section's entries: key name to value, keys unique within the section.
pub type Section = BTreeMap<String, ConfigValue>;

/// Mapping of section name to [`Section`], names unique within the document.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    sections: BTreeMap<String, Section>,
}

impl Document {
    pub fn new() -> Self {
        Document::default()
    }

    /// Insert or overwrite `(section, key)`, creating the section if needed.
    pub fn insert(&mut self, section: &str, key: String, value: ConfigValue) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key, value);
    }

    /// Create the section if it does not exist yet. A header with an inherit
    /// clause establishes the section context even when the inherit fails.
    pub fn open_section(&mut self, section: &str) {
        self.sections.entry(section.to_string()).or_default();
    }

    /// Copy the parent section's current entries into `section`, stamping
    /// each copy with `line` as its new provenance. This is a snapshot, not a
    /// live reference: later changes to the parent do not propagate.
    ///
    /// Returns false if the parent does not exist; nothing is copied then.
    pub fn inherit(&mut self, section: &str, parent: &str, line: usize) -> bool {
        let Some(entries) = self.sections.get(parent) else {
            return false;
        };
        let snapshot: Vec<(String, String)> = entries
            .iter()
            .map(|(key, value)| (key.clone(), value.value.clone()))
            .collect();

        let target = self.sections.entry(section.to_string()).or_default();
        for (key, value) in snapshot {
            target.insert(key, ConfigValue { value, line });
        }
        true
    }

    pub fn section_exists(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    pub fn key_exists(&self, section: &str, key: &str) -> bool {
        self.sections
            .get(section)
            .is_some_and(|entries| entries.contains_key(key))
    }

    pub fn lookup(&self, section: &str, key: &str) -> Option<&ConfigValue> {
        self.sections.get(section)?.get(key)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of keys in `section`; 0 if the section is absent.
    pub fn key_count(&self, section: &str) -> usize {
        self.sections.get(section).map_or(0, |entries| entries.len())
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections
            .iter()
            .map(|(name, entries)| (name.as_str(), entries))
    }

    /// Write every section and its `key = value` pairs to `w`.
    pub fn dump_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for (name, entries) in &self.sections {
            writeln!(w, "[{}]", name)?;
            for (key, value) in entries {
                writeln!(w, "{} = {}", key, value.value)?;
            }
            writeln!(w)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(raw: &str, line: usize) -> ConfigValue {
        ConfigValue {
            value: raw.to_string(),
            line,
        }
    }

    #[test]
    fn insert_and_lookup() {
        let mut doc = Document::new();
        doc.insert("s", "k".to_string(), value("v", 3));

        assert!(doc.section_exists("s"));
        assert!(doc.key_exists("s", "k"));
        assert_eq!(doc.lookup("s", "k"), Some(&value("v", 3)));
        assert_eq!(doc.lookup("s", "other"), None);
        assert_eq!(doc.lookup("other", "k"), None);
    }

    #[test]
    fn last_write_wins() {
        let mut doc = Document::new();
        doc.insert("s", "k".to_string(), value("first", 1));
        doc.insert("s", "k".to_string(), value("second", 9));
        assert_eq!(doc.lookup("s", "k"), Some(&value("second", 9)));
        assert_eq!(doc.key_count("s"), 1);
    }

    #[test]
    fn inherit_copies_a_snapshot() {
        let mut doc = Document::new();
        doc.insert("parent", "k".to_string(), value("1", 1));
        assert!(doc.inherit("child", "parent", 5));
        doc.insert("parent", "k".to_string(), value("2", 7));

        assert_eq!(doc.lookup("child", "k"), Some(&value("1", 5)));
        assert_eq!(doc.lookup("parent", "k"), Some(&value("2", 7)));
    }

    #[test]
    fn inherit_from_missing_parent_copies_nothing() {
        let mut doc = Document::new();
        assert!(!doc.inherit("child", "ghost", 2));
        assert!(!doc.section_exists("child"));
    }

    #[test]
    fn counts() {
        let mut doc = Document::new();
        doc.insert("a", "x".to_string(), value("1", 1));
        doc.insert("a", "y".to_string(), value("2", 2));
        doc.insert("b", "z".to_string(), value("3", 3));

        assert_eq!(doc.section_count(), 2);
        assert_eq!(doc.key_count("a"), 2);
        assert_eq!(doc.key_count("missing"), 0);
    }

    #[test]
    fn dump_is_deterministic() {
        let mut doc = Document::new();
        doc.insert("b", "k".to_string(), value("2", 2));
        doc.insert("a", "k".to_string(), value("1", 1));

        let mut buffer = Vec::new();
        doc.dump_to(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "[a]\nk = 1\n\n[b]\nk = 2\n\n"
        );
    }
}
