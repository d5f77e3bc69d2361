//! Whitespace and comment skipping.

use toyc_util::Span;

use crate::lexer::Truncation;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments.
    ///
    /// Whitespace is space, tab, newline and carriage return. Comments are
    /// `//` to end of line and `/* ... */`, which does not nest. The two
    /// kinds of skipping interleave until neither applies.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        loop {
            match (self.cursor.ch(), self.cursor.peek_char()) {
                (b' ' | b'\t' | b'\n' | b'\r', _) => self.cursor.read_char(),
                (b'/', b'/') => self.skip_line_comment(),
                (b'/', b'*') => self.skip_block_comment(),
                _ => return,
            }
        }
    }

    /// Skips a line comment, leaving the cursor on the newline.
    fn skip_line_comment(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.ch() != b'\n' {
            self.cursor.read_char();
        }
    }

    /// Skips a block comment through the first `*/`.
    ///
    /// An unterminated comment runs to end of input and is reported as a
    /// truncation.
    fn skip_block_comment(&mut self) {
        let start = Span::point(self.cursor.position(), self.cursor.line(), self.cursor.column());
        self.cursor.read_char();
        self.cursor.read_char();

        loop {
            if self.cursor.is_at_end() {
                self.report_truncation(Truncation::UnterminatedBlockComment, start);
                return;
            }
            if self.cursor.ch() == b'*' && self.cursor.peek_char() == b'/' {
                self.cursor.read_char();
                self.cursor.read_char();
                return;
            }
            self.cursor.read_char();
        }
    }
}
