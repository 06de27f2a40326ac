//! Main module for cfg parsing functionality

pub mod diagnostics;
pub mod document;
pub mod parser;
pub mod scanner;
pub mod testing;
pub mod values;

pub use diagnostics::Diagnostic;
pub use document::{ConfigValue, Document, Section};
pub use parser::Parser;
pub use scanner::{LineEvent, LineOutcome, LineScanner, Mode};
