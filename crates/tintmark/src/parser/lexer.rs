//! Scanner for tint markup.
//!
//! Converts input text into a stream of tokens. Scanning never fails:
//! anything that is not a well-formed control sequence is passed through as
//! literal text.

use crate::span::Span;

const CLOSE_TAG: &str = "[/]";

/// A token produced by the scanner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Input exhausted. Always the last token.
    EndOfInput,
    /// Close tag: `[/]`
    CloseTag,
    /// Opening tag attributes, split on spaces: `[red italics]` -> `["red", "italics"]`
    OpenTag(Vec<&'a str>),
    /// Literal text, including the character produced by an escape.
    Text(&'a str),
}

/// Scanner for tint markup.
///
/// Yields `(token, span)` pairs whose spans tile the input, finishing with
/// exactly one [`Token::EndOfInput`].
///
/// # Examples
///
/// ```
/// use tintmark::parser::{Scanner, Token};
///
/// let tokens: Vec<_> = Scanner::new("[red]Hi[/]").map(|(token, _)| token).collect();
/// assert_eq!(
///     tokens,
///     vec![
///         Token::OpenTag(vec!["red"]),
///         Token::Text("Hi"),
///         Token::CloseTag,
///         Token::EndOfInput,
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    finished: bool,
    /// Absolute offset of the nearest `]` found by the last search, or
    /// `Some(None)` once the rest of the input is known to contain none.
    next_close: Option<Option<usize>>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            finished: false,
            next_close: None,
        }
    }

    /// Get the remaining input.
    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Scan one token at the current position and advance past it.
    pub fn next_token(&mut self) -> (Token<'a>, Span) {
        let start = self.pos;
        let (token, len) = self.scan();
        self.pos += len;
        (token, Span::new(start, self.pos))
    }

    /// Match the rules in priority order; the first match wins.
    fn scan(&mut self) -> (Token<'a>, usize) {
        let rest = self.remaining();

        if rest.is_empty() {
            return (Token::EndOfInput, 0);
        }
        if rest.starts_with(CLOSE_TAG) {
            return (Token::CloseTag, CLOSE_TAG.len());
        }
        if rest.starts_with("\\[") || rest.starts_with("\\\\") {
            return (Token::Text(&rest[1..2]), 2);
        }
        if rest.starts_with('[') {
            return self.scan_tag();
        }
        self.scan_text()
    }

    /// Scan `[attr attr ...]`. Unclosed or empty tags degrade to a literal `[`.
    fn scan_tag(&mut self) -> (Token<'a>, usize) {
        let rest = self.remaining();

        match self.find_close(self.pos + 1) {
            Some(close) if close > self.pos + 1 => {
                let body = &self.input[self.pos + 1..close];
                let attributes = body.split(' ').filter(|attr| !attr.is_empty()).collect();
                (Token::OpenTag(attributes), close - self.pos + 1)
            }
            _ => (Token::Text(&rest[..1]), 1),
        }
    }

    /// Scan literal text up to the next `[` or `\`.
    fn scan_text(&self) -> (Token<'a>, usize) {
        let rest = self.remaining();

        // A backslash that did not form an escape is literal; skip it so the
        // run is never empty.
        let skip = usize::from(rest.starts_with('\\'));
        let len = rest[skip..]
            .find(['[', '\\'])
            .map_or(rest.len(), |idx| skip + idx);

        (Token::Text(&rest[..len]), len)
    }

    /// Find the absolute offset of the first `]` at or after `from`.
    ///
    /// Results are cached so a run of unclosed `[` characters does not
    /// rescan the tail of the input for each one.
    fn find_close(&mut self, from: usize) -> Option<usize> {
        match self.next_close {
            Some(None) => return None,
            Some(Some(close)) if close >= from => return Some(close),
            _ => {}
        }

        let found = self.input[from..].find(']').map(|idx| from + idx);
        self.next_close = Some(found);
        found
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = (Token<'a>, Span);

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let (token, span) = self.next_token();
        if token == Token::EndOfInput {
            self.finished = true;
        }
        Some((token, span))
    }
}
