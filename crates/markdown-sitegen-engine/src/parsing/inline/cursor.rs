/// A forward-only cursor over a string slice for delimiter scanning.
///
/// Positions are byte offsets into `s`. Every position the tokenizer seeks to
/// sits just after an ASCII delimiter, so they are always char boundaries.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Text from the current position to the end.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }

    /// Text between two absolute positions.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }

    /// Absolute position of the next `pat` at or after the cursor.
    pub fn find(&self, pat: &str) -> Option<usize> {
        self.find_from(self.i, pat)
    }

    /// Absolute position of the next `pat` at or after `from`.
    pub fn find_from(&self, from: usize, pat: &str) -> Option<usize> {
        self.s.get(from..)?.find(pat).map(|off| from + off)
    }

    /// Checks if the text at `at` starts with `pat`.
    pub fn starts_with_at(&self, at: usize, pat: &str) -> bool {
        self.s.get(at..).is_some_and(|tail| tail.starts_with(pat))
    }

    /// Moves the cursor to an absolute position.
    pub fn seek(&mut self, to: usize) {
        self.i = to;
    }
}
