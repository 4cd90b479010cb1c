//! # readmelint_ast
//!
//! Data model for the readmelint pipeline.
//!
//! This crate provides:
//! - `Position` and `Span` source-location types
//! - `Severity` and `Diagnostic` for validation output
//! - `Header`, `Section`, and `ParsedReadme` for the parsed document
//!
//! All types are plain data: constructed once per parse/validate cycle and
//! never mutated afterwards. They carry serde derives so results can be
//! serialized directly (the CLI's JSON output relies on this).

mod diagnostic;
mod header;
mod readme;
mod section;
mod span;

pub use diagnostic::{Diagnostic, Severity};
pub use header::Header;
pub use readme::ParsedReadme;
pub use section::Section;
pub use span::{Position, Span};
