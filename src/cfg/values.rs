//! Typed accessors over the parsed document.
//!
//! Every accessor takes a caller-supplied default and always returns a
//! usable value: a missing section or key, an unconvertible string, or a
//! wrong-arity vector reports to stderr and falls back to the default.
//! "Value missing or malformed" is an expected outcome here, not an error.

use std::str::FromStr;

use crate::cfg::parser::Parser;

impl Parser {
    fn raw(&self, section: &str, key: &str) -> Option<&str> {
        let found = self.document().lookup(section, key);
        if found.is_none() {
            eprintln!(
                "section \"{}\" or key \"{}\" doesn't exist",
                section, key
            );
        }
        found.map(|entry| entry.value.as_str())
    }

    /// Parse the value as any `FromStr` type. Covers every numeric width;
    /// `parser.get::<i64>(...)`, `parser.get::<f32>(...)`, and so on.
    pub fn get<T: FromStr>(&self, section: &str, key: &str, default: T) -> T {
        match self.raw(section, key) {
            Some(raw) => match raw.parse() {
                Ok(value) => value,
                Err(_) => {
                    eprintln!(
                        "can't convert \"{}\" to the requested type, using the default",
                        raw
                    );
                    default
                }
            },
            None => default,
        }
    }

    /// Boolean value: `true`/`on`/`yes`/`1` and `false`/`off`/`no`/`0`.
    pub fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        match self.raw(section, key) {
            Some("true" | "on" | "yes" | "1") => true,
            Some("false" | "off" | "no" | "0") => false,
            Some(raw) => {
                eprintln!("unknown boolean value \"{}\", using the default", raw);
                default
            }
            None => default,
        }
    }

    /// String value as stored (escapes already resolved for quoted values).
    pub fn get_str(&self, section: &str, key: &str, default: &str) -> String {
        match self.raw(section, key) {
            Some(raw) => raw.to_string(),
            None => default.to_string(),
        }
    }

    /// Fixed-arity, comma-separated vector value, e.g.
    /// `parser.get_vec::<f32, 3>("window", "clear_color", [0.0; 3])`.
    /// The component count must match `N` exactly.
    pub fn get_vec<T, const N: usize>(&self, section: &str, key: &str, default: [T; N]) -> [T; N]
    where
        T: FromStr + Copy,
    {
        let Some(raw) = self.raw(section, key) else {
            return default;
        };

        let parts: Vec<&str> = raw.split(',').collect();
        if parts.len() != N {
            eprintln!(
                "key \"{}\" in section \"{}\" has {} components, expected {}; using the default",
                key,
                section,
                parts.len(),
                N
            );
            return default;
        }

        let mut out = default;
        for (slot, part) in out.iter_mut().zip(parts) {
            match part.parse() {
                Ok(value) => *slot = value,
                Err(_) => {
                    eprintln!(
                        "can't convert component \"{}\" of key \"{}\", using the default",
                        part, key
                    );
                    return default;
                }
            }
        }
        out
    }
}
