//! Rendered-length accounting for markup strings.
//!
//! Escape fragments occupy characters in the parsed output without occupying
//! terminal columns, which breaks field-width arithmetic done on the source
//! text. [`AnsiString`] wraps a markup string and answers two questions:
//! how long is the text once every resolved tag is removed, and how many
//! invisible characters do the resolved escape codes add.

use std::fmt;

use once_cell::sync::OnceCell;

use crate::error::MarkupError;
use crate::markup::AnsiMarkup;

/// A markup string with lazily computed, cached length accounting.
///
/// Both values are computed at most once; the wrapper is immutable after
/// construction.
///
/// # Examples
///
/// ```
/// use ansimark::AnsiMarkup;
///
/// let am = AnsiMarkup::new();
/// let s = am.string("<b>abc</b>");
/// assert_eq!(s.len(), 3);
/// assert_eq!(s.delta().unwrap(), 8);
/// ```
pub struct AnsiString<'a> {
    markup: &'a AnsiMarkup,
    source: String,
    length: OnceCell<usize>,
    delta: OnceCell<usize>,
}

impl<'a> AnsiString<'a> {
    pub(crate) fn new(markup: &'a AnsiMarkup, source: String) -> Self {
        Self {
            markup,
            source,
            length: OnceCell::new(),
            delta: OnceCell::new(),
        }
    }

    /// The markup text as given.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Character count of the source with every resolved tag removed.
    pub fn len(&self) -> usize {
        *self
            .length
            .get_or_init(|| self.markup.strip(&self.source).chars().count())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Characters the resolved escape codes add to the parsed form, i.e. the
    /// character count of `parse(source)` minus [`len`](AnsiString::len).
    pub fn delta(&self) -> Result<usize, MarkupError> {
        self.delta
            .get_or_try_init(|| {
                let parsed = self.markup.parse(&self.source)?;
                Ok(parsed.chars().count().saturating_sub(self.len()))
            })
            .copied()
    }
}

impl fmt::Display for AnsiString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl fmt::Debug for AnsiString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnsiString")
            .field("source", &self.source)
            .finish()
    }
}
