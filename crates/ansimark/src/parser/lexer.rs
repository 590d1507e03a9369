//! Scanner for tag tokens.
//!
//! Converts input text into a stream of tokens in one left-to-right pass.
//! The separator pair is configurable; with the default pair a tag token is
//! `<name>` or `</name>`, and a backslash immediately before the open
//! separator escapes it (`\<` is a literal `<`, never a tag start).

/// A token produced by the scanner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// Plain text run.
    Text(&'a str),
    /// Opening tag: the name between the separators, plus the verbatim token.
    Open { name: &'a str, raw: &'a str },
    /// Closing tag: the name after the `/` marker, plus the verbatim token.
    Close { name: &'a str, raw: &'a str },
    /// Escaped open separator, emitted as the bare character.
    EscapedSep(char),
}

/// Scanner over markup text.
pub(crate) struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    open: char,
    close: char,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(input: &'a str, open: char, close: char) -> Self {
        Self {
            input,
            pos: 0,
            open,
            close,
        }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Consumes a tag token starting at the open separator, or returns `None`
    /// without advancing when the text at the cursor is not a tag.
    fn consume_tag(&mut self) -> Option<Token<'a>> {
        let start = self.pos;
        let content_start = start + self.open.len_utf8();

        let mut content_len = None;
        for (idx, c) in self.input[content_start..].char_indices() {
            if c == self.close {
                content_len = Some(idx);
                break;
            }
            // An inner open separator restarts tag matching there.
            if c == self.open {
                return None;
            }
        }
        let content_len = content_len?;

        let content = &self.input[content_start..content_start + content_len];
        let raw = &self.input[start..content_start + content_len + self.close.len_utf8()];

        let token = if let Some(name) = content.strip_prefix('/') {
            if name.is_empty() {
                return None;
            }
            Token::Close { name, raw }
        } else {
            if content.is_empty() || content.contains('/') {
                return None;
            }
            Token::Open { name: content, raw }
        };

        self.pos = start + raw.len();
        Some(token)
    }

    /// Consumes text up to the next open separator or backslash.
    fn consume_text(&mut self) -> Token<'a> {
        let start = self.pos;
        for (idx, c) in self.remaining().char_indices() {
            if c == self.open || c == '\\' {
                self.pos = start + idx;
                return Token::Text(&self.input[start..self.pos]);
            }
        }
        self.pos = self.input.len();
        Token::Text(&self.input[start..])
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.remaining();
        let first = rest.chars().next()?;

        if first == self.open {
            if let Some(token) = self.consume_tag() {
                return Some(token);
            }
            // Not a tag: emit the separator itself and move on.
            self.pos += first.len_utf8();
            return Some(Token::Text(&rest[..first.len_utf8()]));
        }

        if first == '\\' {
            let mut chars = rest.chars();
            chars.next();
            if chars.next() == Some(self.open) {
                self.pos += 1 + self.open.len_utf8();
                return Some(Token::EscapedSep(self.open));
            }
            self.pos += 1;
            return Some(Token::Text(&rest[..1]));
        }

        Some(self.consume_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<Token<'_>> {
        Lexer::new(input, '<', '>').collect()
    }

    #[test]
    fn lex_plain_text() {
        assert_eq!(lex("hello world"), vec![Token::Text("hello world")]);
    }

    #[test]
    fn lex_open_and_close() {
        assert_eq!(
            lex("<b>1</b>"),
            vec![
                Token::Open { name: "b", raw: "<b>" },
                Token::Text("1"),
                Token::Close { name: "b", raw: "</b>" },
            ]
        );
    }

    #[test]
    fn lex_name_with_spaces_and_commas() {
        assert_eq!(
            lex("<fg red>"),
            vec![Token::Open { name: "fg red", raw: "<fg red>" }]
        );
        assert_eq!(
            lex("</b,r,y>"),
            vec![Token::Close { name: "b,r,y", raw: "</b,r,y>" }]
        );
    }

    #[test]
    fn lex_unterminated_tag_is_text() {
        assert_eq!(lex("a <b"), vec![Token::Text("a "), Token::Text("<"), Token::Text("b")]);
    }

    #[test]
    fn lex_empty_tag_is_text() {
        assert_eq!(lex("<>"), vec![Token::Text("<"), Token::Text(">")]);
        assert_eq!(lex("</>"), vec![Token::Text("<"), Token::Text("/>")]);
    }

    #[test]
    fn lex_slash_inside_open_name_is_text() {
        assert_eq!(
            lex("<a/b>"),
            vec![Token::Text("<"), Token::Text("a/b>")]
        );
    }

    #[test]
    fn lex_inner_open_restarts_matching() {
        assert_eq!(
            lex("a < b <r>c"),
            vec![
                Token::Text("a "),
                Token::Text("<"),
                Token::Text(" b "),
                Token::Open { name: "r", raw: "<r>" },
                Token::Text("c"),
            ]
        );
    }

    #[test]
    fn lex_escaped_separator() {
        assert_eq!(
            lex(r"\<b>x"),
            vec![Token::EscapedSep('<'), Token::Text("b>x")]
        );
    }

    #[test]
    fn lex_backslash_without_separator_is_text() {
        assert_eq!(
            lex(r"a\b"),
            vec![Token::Text("a"), Token::Text("\\"), Token::Text("b")]
        );
        assert_eq!(lex("\\"), vec![Token::Text("\\")]);
    }

    #[test]
    fn lex_custom_separators() {
        let tokens: Vec<_> = Lexer::new("{b}1{/b}<x>", '{', '}').collect();
        assert_eq!(
            tokens,
            vec![
                Token::Open { name: "b", raw: "{b}" },
                Token::Text("1"),
                Token::Close { name: "b", raw: "{/b}" },
                Token::Text("<x>"),
            ]
        );
    }

    #[test]
    fn lex_multibyte_text() {
        assert_eq!(
            lex("<b>日本語</b>"),
            vec![
                Token::Open { name: "b", raw: "<b>" },
                Token::Text("日本語"),
                Token::Close { name: "b", raw: "</b>" },
            ]
        );
    }
}
