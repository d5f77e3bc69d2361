//! Byte cursor for traversing source text.
//!
//! The cursor keeps the offset of the byte under examination (`position`),
//! the offset of the byte after it (`read_position`) and a copy of the
//! current byte. It moves forward one byte at a time and never rewinds.
//! Once the end of input is reached it stays there: the current byte reads
//! as `0` and further advances are no-ops.
//!
//! Line and column numbers are 1-based. Columns count characters, so the
//! continuation bytes of a multi-byte UTF-8 sequence do not bump them.

/// A forward-only cursor over the bytes of a source string.
///
/// # Example
///
/// ```
/// use toyc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x");
/// assert_eq!(cursor.ch(), b'l');
/// assert_eq!(cursor.peek_char(), b'e');
/// cursor.read_char();
/// assert_eq!(cursor.ch(), b'e');
/// assert_eq!(cursor.column(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Offset of the current byte.
    position: usize,

    /// Offset of the byte after the current one.
    read_position: usize,

    /// The current byte, `0` past the end.
    ch: u8,

    /// Line of the current byte (1-based).
    line: u32,

    /// Column of the current byte (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor with the first byte of `source` loaded.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            read_position: 1,
            ch: source.as_bytes().first().copied().unwrap_or(0),
            line: 1,
            column: 1,
        }
    }

    /// Advances to the next byte.
    ///
    /// Does nothing once the end of input has been reached.
    ///
    /// ```
    /// use toyc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a");
    /// cursor.read_char();
    /// assert!(cursor.is_at_end());
    /// cursor.read_char();
    /// assert_eq!(cursor.position(), 1);
    /// assert_eq!(cursor.ch(), 0);
    /// ```
    #[inline]
    pub fn read_char(&mut self) {
        if self.is_at_end() {
            return;
        }

        let left = self.ch;
        self.position = self.read_position;
        self.read_position += 1;
        self.ch = self.byte_at(self.position);

        if left == b'\n' {
            self.line += 1;
            self.column = 1;
        } else if !is_continuation(self.ch) {
            self.column += 1;
        }
    }

    /// The current byte, or `0` at the end of input.
    #[inline]
    pub fn ch(&self) -> u8 {
        self.ch
    }

    /// The byte after the current one, or `0` if there is none.
    #[inline]
    pub fn peek_char(&self) -> u8 {
        self.byte_at(self.read_position)
    }

    #[inline]
    fn byte_at(&self, offset: usize) -> u8 {
        self.source.as_bytes().get(offset).copied().unwrap_or(0)
    }

    /// The character starting at the current byte.
    ///
    /// Returns `None` at the end of input or when the cursor sits inside a
    /// multi-byte sequence.
    ///
    /// ```
    /// use toyc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("é!");
    /// assert_eq!(cursor.current_char(), Some('é'));
    /// assert_eq!(Cursor::new("").current_char(), None);
    /// ```
    pub fn current_char(&self) -> Option<char> {
        self.source.get(self.position..)?.chars().next()
    }

    /// Returns true once every byte has been consumed.
    ///
    /// A NUL byte inside the source is not the end of input.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Offset of the current byte.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Offset of the byte after the current one.
    #[inline]
    pub fn read_position(&self) -> usize {
        self.read_position
    }

    /// Line of the current byte (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the current byte (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Source text in `start..end`, or `""` if that range is not a valid
    /// slice of the source.
    ///
    /// ```
    /// use toyc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("let x");
    /// assert_eq!(cursor.slice(0, 3), "let");
    /// assert_eq!(cursor.slice(3, 99), "");
    /// ```
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        self.source.get(start..end).unwrap_or_default()
    }

    /// Source text from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.position)
    }

    /// The full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}

/// `10xxxxxx`
#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}
