//! The parser façade.
//!
//! [`AnsiMarkup`] owns one immutable configuration and exposes the three
//! entry points: [`parse`](AnsiMarkup::parse) resolves tags into escape
//! sequences, [`strip`](AnsiMarkup::strip) removes them, and
//! [`raw`](AnsiMarkup::raw) escapes text so it can never be taken for a tag.
//!
//! # Examples
//!
//! ```
//! use ansimark::AnsiMarkup;
//!
//! let am = AnsiMarkup::new();
//! assert_eq!(am.parse("<b>1</b>").unwrap(), "\x1b[1m1\x1b[0m");
//! assert_eq!(am.strip("<b>1</b>"), "1");
//! ```
//!
//! A configured engine is built once and is safe to share across threads:
//!
//! ```
//! use ansimark::AnsiMarkup;
//!
//! let am = AnsiMarkup::builder()
//!     .tag("info", "\x1b[32m\x1b[1m")
//!     .strict(true)
//!     .build()
//!     .unwrap();
//! assert_eq!(am.parse("<info>ok</info>").unwrap(), "\x1b[32m\x1b[1mok\x1b[0m");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::error::MarkupError;
use crate::parser::matcher::{Matcher, Mode};
use crate::text::AnsiString;

/// Value substituted for a user-defined tag.
#[derive(Clone)]
pub enum TagValue {
    /// A fixed replacement fragment.
    Literal(String),
    /// Invoked afresh at every occurrence of the tag, so the replacement may
    /// differ between occurrences.
    Generator(Arc<dyn Fn() -> String + Send + Sync>),
}

impl TagValue {
    /// Wraps a closure as a generator value.
    pub fn generator<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        TagValue::Generator(Arc::new(f))
    }

    pub(crate) fn render(&self) -> String {
        match self {
            TagValue::Literal(text) => text.clone(),
            TagValue::Generator(f) => f(),
        }
    }
}

impl fmt::Debug for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            TagValue::Generator(_) => f.debug_tuple("Generator").field(&"..").finish(),
        }
    }
}

impl From<String> for TagValue {
    fn from(text: String) -> Self {
        TagValue::Literal(text)
    }
}

impl From<&str> for TagValue {
    fn from(text: &str) -> Self {
        TagValue::Literal(text.to_string())
    }
}

/// Resolved configuration, fixed for the lifetime of an [`AnsiMarkup`].
#[derive(Debug, Clone)]
pub(crate) struct Options {
    pub(crate) tags: HashMap<String, TagValue>,
    pub(crate) always_reset: bool,
    pub(crate) tag_sep: (char, char),
    pub(crate) strict: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tags: HashMap::new(),
            always_reset: false,
            tag_sep: ('<', '>'),
            strict: false,
        }
    }
}

/// Converts XML-like markup into ANSI escape sequences.
#[derive(Debug, Clone)]
pub struct AnsiMarkup {
    options: Options,
}

impl AnsiMarkup {
    /// Engine with the default configuration: `<`/`>` separators, no user
    /// tags, no forced reset, lenient about unterminated tags.
    pub fn new() -> Self {
        Self {
            options: Options::default(),
        }
    }

    /// Starts building an engine with non-default options.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Substitutes every resolved tag and returns the rendered text.
    ///
    /// Unknown tags pass through verbatim. Closing a tag that is not the
    /// innermost open one fails with [`MarkupError::UnbalancedTag`] when the
    /// tag is an open ancestor and [`MarkupError::MismatchedTag`] when it was
    /// never opened; either error aborts the whole substitution.
    pub fn parse(&self, text: &str) -> Result<String, MarkupError> {
        Matcher::new(&self.options).scan(text, Mode::Parse)
    }

    /// Removes every resolved tag and returns the remaining text.
    ///
    /// Invalid closing tags are dropped rather than reported; stripping
    /// never fails.
    pub fn strip(&self, text: &str) -> String {
        Matcher::new(&self.options)
            .scan(text, Mode::Strip)
            .unwrap_or_default()
    }

    /// Escapes `text` so that none of it can be recognized as a tag.
    ///
    /// Inserts a backslash before every open separator; the scanner emits
    /// such an escaped separator as the bare character. For any `text`,
    /// `parse(&raw(text))` and `strip(&raw(text))` both return `text`.
    pub fn raw(&self, text: &str) -> String {
        let open = self.options.tag_sep.0;
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            if c == open {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        escaped
    }

    /// Wraps `text` for rendered-length accounting against this engine.
    pub fn string(&self, text: impl Into<String>) -> AnsiString<'_> {
        AnsiString::new(self, text.into())
    }
}

impl Default for AnsiMarkup {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a configured [`AnsiMarkup`].
#[derive(Debug, Clone)]
pub struct Builder {
    tags: HashMap<String, TagValue>,
    always_reset: bool,
    tag_sep: String,
    strict: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            tags: HashMap::new(),
            always_reset: false,
            tag_sep: "<>".to_string(),
            strict: false,
        }
    }
}

impl Builder {
    /// Registers one user-defined tag.
    pub fn tag(mut self, name: impl Into<String>, value: impl Into<TagValue>) -> Self {
        self.tags.insert(name.into(), value.into());
        self
    }

    /// Registers a batch of user-defined tags.
    pub fn tags<I, N>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = (N, TagValue)>,
        N: Into<String>,
    {
        self.tags
            .extend(tags.into_iter().map(|(name, value)| (name.into(), value)));
        self
    }

    /// Appends a reset to every parse result that does not already end with
    /// one.
    pub fn always_reset(mut self, yes: bool) -> Self {
        self.always_reset = yes;
        self
    }

    /// Sets the separator pair, e.g. `"{}"`. Must be exactly two distinct
    /// characters, neither a backslash; violations surface from
    /// [`build`](Builder::build).
    pub fn tag_sep(mut self, sep: impl Into<String>) -> Self {
        self.tag_sep = sep.into();
        self
    }

    /// Treats tags left open at end of input as
    /// [`MarkupError::MismatchedTag`].
    pub fn strict(mut self, yes: bool) -> Self {
        self.strict = yes;
        self
    }

    /// Validates the configuration and builds the engine.
    pub fn build(self) -> Result<AnsiMarkup, MarkupError> {
        let mut chars = self.tag_sep.chars();
        let tag_sep = match (chars.next(), chars.next(), chars.next()) {
            (Some(open), Some(close), None) if open != close && open != '\\' && close != '\\' => {
                (open, close)
            }
            _ => return Err(MarkupError::Configuration(self.tag_sep)),
        };

        Ok(AnsiMarkup {
            options: Options {
                tags: self.tags,
                always_reset: self.always_reset,
                tag_sep,
                strict: self.strict,
            },
        })
    }
}

/// Process-wide engine with the default configuration, created on first use
/// and read-only thereafter.
static DEFAULT: Lazy<AnsiMarkup> = Lazy::new(AnsiMarkup::new);

/// [`AnsiMarkup::parse`] on the process-wide default engine.
pub fn parse(text: &str) -> Result<String, MarkupError> {
    DEFAULT.parse(text)
}

/// [`AnsiMarkup::strip`] on the process-wide default engine.
pub fn strip(text: &str) -> String {
    DEFAULT.strip(text)
}

/// [`AnsiMarkup::raw`] on the process-wide default engine.
pub fn raw(text: &str) -> String {
    DEFAULT.raw(text)
}
