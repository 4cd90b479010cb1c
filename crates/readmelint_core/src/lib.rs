//! # readmelint_core
//!
//! Compliance validator and auto-fix engine for WordPress plugin
//! `readme.txt` files.
//!
//! This crate provides:
//! - The `validate` rule engine with a derived quality score
//! - The `auto_fix` heading/code-fence rewriter
//! - Configuration loading
//!
//! ## Example
//!
//! ```rust,ignore
//! use readmelint_core::validate;
//! use readmelint_parser::parse;
//!
//! let readme = parse(&std::fs::read_to_string("readme.txt")?);
//! let result = validate(&readme);
//! println!("score: {}, valid: {}", result.score, result.is_valid());
//! ```

mod autofix;
mod config;
mod error;
mod result;
mod validator;

pub use autofix::{AutoFixResult, auto_fix};
pub use config::{MultiLineStyle, ReadmeConfig};
pub use error::CoreError;
pub use result::ValidationResult;
pub use validator::validate;
