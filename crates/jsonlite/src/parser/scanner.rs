//! Cursor over document text: whitespace, comments and lookahead

use crate::error::ParseError;

/// Whitespace as the C locale defines it, vertical tab and form feed included.
pub(crate) fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Byte cursor over a document with trailing whitespace removed.
///
/// The cursor only ever stops on ASCII bytes or just past one, so it always
/// sits on a `char` boundary of the underlying `str`.
pub(crate) struct Scanner<'a> {
    text: &'a str,
    pos: usize,
    allow_comments: bool,
    trace: bool,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(text: &'a str, allow_comments: bool, trace: bool) -> Self {
        let end = text
            .bytes()
            .rposition(|b| !is_space(b))
            .map_or(0, |last| last + 1);
        Self {
            text: &text[..end],
            pos: 0,
            allow_comments,
            trace,
        }
    }

    /// Current byte offset.
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    pub(crate) fn bump(&mut self) {
        self.pos += 1;
    }

    pub(crate) fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    pub(crate) fn starts_with(&self, literal: &str) -> bool {
        self.text.as_bytes()[self.pos..].starts_with(literal.as_bytes())
    }

    /// Consume a run of ASCII digits, returning how many there were.
    pub(crate) fn eat_digits(&mut self) -> usize {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - start
    }

    pub(crate) fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.text[start..end]
    }

    /// The full character at `pos`, for error messages.
    pub(crate) fn char_at(&self, pos: usize) -> char {
        self.text[pos..].chars().next().unwrap_or('\0')
    }

    /// Offset of the next `needle` at or after `from`.
    pub(crate) fn find(&self, from: usize, needle: u8) -> Option<usize> {
        self.text.as_bytes()[from..]
            .iter()
            .position(|&b| b == needle)
            .map(|i| from + i)
    }

    /// Number of consecutive backslashes ending just before `pos`, not
    /// looking further back than `floor`.
    pub(crate) fn backslashes_before(&self, pos: usize, floor: usize) -> usize {
        self.text.as_bytes()[floor..pos]
            .iter()
            .rev()
            .take_while(|&&b| b == b'\\')
            .count()
    }

    pub(crate) fn skip_space(&mut self) {
        while self.peek().is_some_and(is_space) {
            self.pos += 1;
        }
    }

    fn at_comment(&self) -> bool {
        self.allow_comments && self.starts_with("//")
    }

    /// Skip a run of `//` comment lines and the whitespace between them.
    ///
    /// Each comment must end in a newline. When `eof_ends_comment` is set a
    /// final comment may instead run to the end of input.
    fn skip_comments(&mut self, eof_ends_comment: bool) -> Result<(), ParseError> {
        while self.at_comment() {
            let start = self.pos;
            match self.find(start, b'\n') {
                Some(newline) => self.pos = newline + 1,
                None if eof_ends_comment => self.pos = self.text.len(),
                None => return Err(ParseError::UnterminatedComment { offset: start }),
            }
            self.skip_space();
        }
        Ok(())
    }

    /// Skip whitespace and comments and return the lookahead byte without
    /// consuming it.
    pub(crate) fn next_token(&mut self) -> Result<u8, ParseError> {
        self.skip_space();
        if self.is_at_end() {
            return Err(ParseError::UnexpectedEnd { offset: self.pos });
        }
        self.skip_comments(false)?;
        let token = self
            .peek()
            .ok_or(ParseError::UnexpectedEnd { offset: self.pos })?;
        if self.trace {
            log::trace!("token '{}' at offset {}", self.char_at(self.pos), self.pos);
        }
        Ok(token)
    }

    /// Skip whitespace and comments after the top-level value; `true` when
    /// nothing else remains.
    pub(crate) fn finish(&mut self) -> Result<bool, ParseError> {
        self.skip_space();
        self.skip_comments(true)?;
        Ok(self.is_at_end())
    }
}
