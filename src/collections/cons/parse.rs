use std::str::FromStr;

use super::{ElementError, Link, ParseLinkError, SyntaxError};

/// Parses the debug form of a Link, such as `Link(3,Link(4,Link(5)))` or `()`. Whitespace is
/// allowed between tokens, so `Link(3, Link(4, Link(5)))` parses to the same list.
///
/// Each element is the text up to the next `,` or `)` that isn't nested inside brackets or a
/// double-quoted string, parsed with `T`'s own [`FromStr`] implementation.
///
/// ```
/// use cons_list::collections::cons::{range_link, Link};
///
/// let list: Link<i64> = "Link(3, Link(4, Link(5)))".parse().unwrap();
/// assert_eq!(list, range_link(3, 6));
/// assert_eq!(format!("{list:?}").parse::<Link<i64>>().unwrap(), list);
/// ```
impl<T: FromStr> FromStr for Link<T> {
    type Err = ParseLinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cursor = Cursor { input: s, offset: 0 };
        let mut reversed = Link::empty();
        let mut depth = 0_usize;

        loop {
            cursor.skip_whitespace();
            if cursor.eat("()") {
                break;
            }
            cursor.expect("Link(", "\"Link(\" or \"()\"")?;
            reversed = Link::new(cursor.element()?, reversed);
            depth += 1;

            cursor.skip_whitespace();
            if !cursor.eat(",") {
                break;
            }
        }

        for _ in 0..depth {
            cursor.skip_whitespace();
            cursor.expect(")", "\")\"")?;
        }

        cursor.skip_whitespace();
        if !cursor.remaining().is_empty() {
            return Err(cursor.syntax_error("end of input"));
        }

        // SAFETY: reversed was built above and never cloned.
        Ok(unsafe { reversed.into_reversed() })
    }
}

struct Cursor<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn remaining(&self) -> &'a str {
        &self.input[self.offset..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.remaining();
        self.offset += rest.len() - rest.trim_start().len();
    }

    fn eat(&mut self, token: &str) -> bool {
        if self.remaining().starts_with(token) {
            self.offset += token.len();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: &str, expected: &'static str) -> Result<(), ParseLinkError> {
        if self.eat(token) {
            Ok(())
        } else {
            Err(self.syntax_error(expected))
        }
    }

    fn syntax_error(&self, expected: &'static str) -> ParseLinkError {
        SyntaxError { offset: self.offset, expected }.into()
    }

    /// Consumes a single element, leaving the cursor on the `,` or `)` that terminates it.
    fn element<T: FromStr>(&mut self) -> Result<T, ParseLinkError> {
        self.skip_whitespace();
        let start = self.offset;
        let rest = self.remaining();

        let mut nesting = 0_usize;
        let mut quoted = false;
        let mut escaped = false;
        let mut end = None;

        for (index, c) in rest.char_indices() {
            if quoted {
                match c {
                    _ if escaped => escaped = false,
                    '\\' => escaped = true,
                    '"' => quoted = false,
                    _ => {},
                }
                continue;
            }

            match c {
                '"' => quoted = true,
                '(' | '[' | '{' => nesting += 1,
                ',' | ')' if nesting == 0 => {
                    end = Some(index);
                    break;
                },
                ')' | ']' | '}' => nesting = nesting.saturating_sub(1),
                _ => {},
            }
        }

        let Some(end) = end else {
            self.offset = self.input.len();
            return Err(self.syntax_error("\",\" or \")\""));
        };

        let text = rest[..end].trim_end();
        if text.is_empty() {
            return Err(self.syntax_error("element"));
        }

        self.offset = start + end;
        text.parse().map_err(|_| {
            ElementError {
                offset: start,
                text: text.to_owned(),
            }
            .into()
        })
    }
}
