//! # readmelint_render
//!
//! WordPress-flavored Markdown to HTML rendering.
//!
//! This crate provides:
//! - `render` - the ordered-pass Markdown subset renderer (videos, H3-H6
//!   headings, blockquotes, lists, fenced code, links, emphasis)
//! - `wrap_paragraphs` - blank-line-delimited paragraph assembly
//! - `render_preview` - full preview document composition
//!
//! This is deliberately not a CommonMark implementation; it covers exactly
//! the subset wordpress.org renders for plugin readmes.
//!
//! ## Example
//!
//! ```rust
//! use readmelint_render::{RenderOptions, render};
//!
//! let html = render("**bold** and `code`", &RenderOptions::default());
//! assert_eq!(html, "<strong>bold</strong> and <code>code</code>");
//! ```

mod escape;
mod markdown;
mod paragraphs;
mod preview;
mod video;

pub use escape::escape_html;
pub use markdown::{RenderOptions, render};
pub use paragraphs::wrap_paragraphs;
pub use preview::render_preview;
