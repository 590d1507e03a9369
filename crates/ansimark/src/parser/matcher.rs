//! The tag stack matcher.
//!
//! Consumes the scanner's token stream in a single pass, resolving each tag
//! and maintaining a stack of the tags currently open. Closing the innermost
//! tag emits a reset followed by the fragments of every tag still open, so
//! the text that follows keeps rendering with the ancestor styling. Closing
//! anything else that resolves is an error, classified by whether the tag is
//! an open ancestor ([`MarkupError::UnbalancedTag`]) or was never opened
//! ([`MarkupError::MismatchedTag`]). Tags that resolve to nothing are data:
//! their verbatim token text passes through unchanged.

use crate::codes;
use crate::color;
use crate::error::MarkupError;
use crate::markup::Options;
use crate::parser::lexer::{Lexer, Token};

/// Emission mode for one scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Emit resolved fragments; tag errors abort the scan.
    Parse,
    /// Emit nothing for resolved tags; tag errors drop the offending token.
    Strip,
}

/// One still-open tag: source name plus the fragment it resolved to.
#[derive(Clone, Debug)]
struct OpenTag {
    name: String,
    fragment: String,
}

/// Single-scan engine over one input string.
pub(crate) struct Matcher<'a> {
    options: &'a Options,
}

impl<'a> Matcher<'a> {
    pub(crate) fn new(options: &'a Options) -> Self {
        Self { options }
    }

    /// Runs the scan. In [`Mode::Strip`] the result is always `Ok`.
    pub(crate) fn scan(&self, text: &str, mode: Mode) -> Result<String, MarkupError> {
        let (open_sep, close_sep) = self.options.tag_sep;
        let mut output = String::with_capacity(text.len());
        let mut stack: Vec<OpenTag> = Vec::new();

        for token in Lexer::new(text, open_sep, close_sep) {
            match token {
                Token::Text(text) => output.push_str(text),
                Token::EscapedSep(c) => output.push(c),
                Token::Open { name, raw } => match self.resolve(name) {
                    Some(fragment) => {
                        if mode == Mode::Parse {
                            output.push_str(&fragment);
                        }
                        stack.push(OpenTag {
                            name: name.to_string(),
                            fragment,
                        });
                    }
                    None => output.push_str(raw),
                },
                Token::Close { name, raw } => {
                    if stack.last().is_some_and(|top| top.name == name) {
                        stack.pop();
                        if mode == Mode::Parse {
                            output.push_str(codes::RESET);
                            for open in &stack {
                                output.push_str(&open.fragment);
                            }
                        }
                    } else if !self.resolves(name) {
                        output.push_str(raw);
                    } else if mode == Mode::Parse {
                        return Err(self.invalid_close(&stack, name));
                    }
                }
            }
        }

        if mode == Mode::Parse {
            if self.options.strict {
                if let Some(open) = stack.last() {
                    return Err(MarkupError::MismatchedTag(format!(
                        "opening tag {:?} has no corresponding closing tag",
                        format!("{}{}{}", open_sep, open.name, close_sep),
                    )));
                }
            }
            if self.options.always_reset && !output.ends_with(codes::RESET) {
                output.push_str(codes::RESET);
            }
        }

        Ok(output)
    }

    /// Resolves a tag name to its fragment, invoking user generators.
    ///
    /// Priority: user table, direct registry match, extended color syntax,
    /// comma shorthand. `None` means the tag is unknown.
    fn resolve(&self, name: &str) -> Option<String> {
        if let Some(value) = self.options.tags.get(name) {
            return Some(value.render());
        }
        if let Some(fragment) = codes::lookup(name) {
            return Some(fragment.to_string());
        }
        if let Some(fragment) = color::resolve_extended(name) {
            return Some(fragment);
        }
        if name.contains(',') {
            return color::resolve_shorthand(name);
        }
        None
    }

    /// Whether a name would resolve, without invoking user generators.
    ///
    /// Used to classify closing tags, where the fragment is never emitted.
    fn resolves(&self, name: &str) -> bool {
        self.options.tags.contains_key(name)
            || codes::lookup(name).is_some()
            || color::resolve_extended(name).is_some()
            || (name.contains(',') && color::resolve_shorthand(name).is_some())
    }

    fn invalid_close(&self, stack: &[OpenTag], name: &str) -> MarkupError {
        let (open_sep, close_sep) = self.options.tag_sep;
        let token = format!("{}/{}{}", open_sep, name, close_sep);
        let closes_ancestor = stack.iter().any(|open| open.name == name);
        // The fast-close path did not apply, so when the closed tag is an
        // ancestor the top of the stack is an inner tag still open.
        if let (true, Some(inner)) = (closes_ancestor, stack.last()) {
            MarkupError::UnbalancedTag(format!(
                "closing tag {:?} closes an outer tag while {:?} is still open",
                token,
                format!("{}{}{}", open_sep, inner.name, close_sep),
            ))
        } else {
            MarkupError::MismatchedTag(format!(
                "closing tag {:?} has no corresponding opening tag",
                token,
            ))
        }
    }
}
