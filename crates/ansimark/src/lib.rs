//! XML-like markup for styled terminal output.
//!
//! This crate converts tags embedded in plain text into ANSI escape
//! sequences, so styled output never has to be composed from raw codes:
//!
//! - `<b>bold</b>`, `<red>red</red>`, `<RED>on red</RED>` - registry tags
//! - `<fg 208>`, `<bg #00005f>`, `<fg 255,136,0>` - extended colors
//! - `<red,yellow>`, `<bold,red,yellow>` - comma shorthand
//! - user-registered tags, including per-occurrence generators
//!
//! Closing the innermost open tag restores the styling of every tag still
//! open, which is what makes nested markup render correctly. Tags that
//! resolve to nothing are not errors: they pass through verbatim, so markup
//! from multiple vocabularies can share one string.
//!
//! # Usage
//!
//! ```
//! use ansimark::AnsiMarkup;
//!
//! // The process-wide default engine.
//! assert_eq!(ansimark::parse("<b>1</b>").unwrap(), "\x1b[1m1\x1b[0m");
//! assert_eq!(ansimark::strip("<b>1</b>2"), "12");
//!
//! // A configured engine.
//! let am = AnsiMarkup::builder()
//!     .tag_sep("{}")
//!     .always_reset(true)
//!     .build()
//!     .unwrap();
//! assert_eq!(am.parse("{d}dim").unwrap(), "\x1b[2mdim\x1b[0m");
//! ```
//!
//! Literal tag-shaped text survives via [`AnsiMarkup::raw`], and
//! [`AnsiString`] answers how wide markup renders once the invisible escape
//! characters are discounted.

pub mod codes;
mod color;
pub mod error;
pub mod logger;
pub mod markup;
mod parser;
pub mod text;

pub use error::MarkupError;
pub use markup::{parse, raw, strip, AnsiMarkup, Builder, TagValue};
pub use text::AnsiString;
