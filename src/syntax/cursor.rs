// Forward-only read position over one input text.
//
// The end of the slice is the terminator: every lookahead returns `None` there, so
// no scan can run past the input.

/// Bytes skipped between tokens.
const WHITESPACE: [u8; 4] = [b' ', b'\t', b'\n', b'\r'];

#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// End offset of the character starting at `offset`, or the input length when
    /// `offset` is at or past the end. `offset` must be a char boundary.
    pub(crate) fn char_end(&self, offset: usize) -> usize {
        self.input
            .get(offset..)
            .and_then(|rest| rest.chars().next())
            .map_or(self.input.len(), |c| offset + c.len_utf8())
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.remaining().as_bytes().first().copied()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The unconsumed tail of the input.
    pub(crate) fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Moves past `len` bytes. Callers only advance over ASCII they have already
    /// matched, so the position always stays on a char boundary.
    pub(crate) fn advance(&mut self, len: usize) {
        debug_assert!(self.pos + len <= self.input.len());
        self.pos += len;
    }

    pub(crate) fn skip_whitespace(&mut self) {
        let skipped = self
            .remaining()
            .bytes()
            .take_while(|b| WHITESPACE.contains(b))
            .count();
        self.pos += skipped;
    }
}
