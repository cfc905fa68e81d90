/// A cursor for byte-by-byte scanning of annotated text with position tracking.
///
/// Delimiters are ASCII, so byte-level matching never splits a multibyte
/// character: continuation bytes are always >= 0x80.
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

    /// Peeks at the current char without advancing.
    ///
    /// Returns `None` at EOF or when the cursor sits inside a multibyte char.
    pub fn peek_char(&self) -> Option<char> {
        self.s.get(self.i..)?.chars().next()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Returns the absolute position of the nearest occurrence of `pat`
    /// at or after the cursor, without advancing.
    pub fn find(&self, pat: &[u8]) -> Option<usize> {
        if pat.is_empty() {
            return Some(self.i);
        }
        let rest = self.s.as_bytes().get(self.i..)?;
        rest.windows(pat.len())
            .position(|w| w == pat)
            .map(|off| self.i + off)
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Moves the cursor to an absolute byte position.
    pub fn seek(&mut self, pos: usize) {
        self.i = pos;
    }
}
