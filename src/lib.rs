//! # cfgp
//!
//! A parser for ini-style `.cfg` files.
//!
//! The format is line oriented: named `[section]` headers group `key = value`
//! entries, a header may inherit another section's entries with
//! `[child] : parent`, `#include "path"` splices another file in place, `;`
//! starts a comment, and quoted values carry escape sequences:
//!
//! ```text
//! #include "base.cfg"
//!
//! [window]
//! width = 1280
//! title = "my game\n(debug build)"
//! clear_color = 0.1, 0.1, 0.2
//! ; fullscreen is configured per machine
//!
//! [window_small] : window
//! width = 640
//! ```
//!
//! Parsing is a single pass over each file. Malformed lines never abort the
//! parse; they are recorded as [`cfg::Diagnostic`] values and skipped, so a
//! constructed [`cfg::Parser`] always holds a usable (possibly incomplete)
//! document. Typed accessors therefore take a caller-supplied default instead
//! of returning errors.

pub mod cfg;
