//! Span module - Source location tracking.
//!
//! A [`Span`] pairs a half-open byte range with the 1-based line and column
//! where the range starts. Spans are cheap `Copy` values handed out by the
//! lexer on every token and attached to every diagnostic.
//!
//! # Examples
//!
//! ```
//! use toyc_util::span::Span;
//!
//! let span = Span::new(4, 7, 1, 5);
//! assert_eq!(span.len(), 3);
//! assert_eq!(span.slice("let foo = 1;"), Some("foo"));
//! ```

use std::fmt;

/// A region of source text.
///
/// # Examples
///
/// ```
/// use toyc_util::span::Span;
///
/// let span = Span::new(10, 20, 2, 3);
/// assert_eq!(span.start, 10);
/// assert_eq!(span.end, 20);
/// assert_eq!(span.to_string(), "2:3");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source (inclusive)
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for diagnostics that have no location
    ///
    /// # Examples
    ///
    /// ```
    /// use toyc_util::span::Span;
    ///
    /// assert!(Span::DUMMY.is_dummy());
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use toyc_util::span::Span;
    ///
    /// let point = Span::point(12, 3, 1);
    /// assert!(point.is_empty());
    /// assert_eq!(point.start, 12);
    /// ```
    #[inline]
    pub const fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if this is [`Span::DUMMY`]
    #[inline]
    pub fn is_dummy(&self) -> bool {
        *self == Self::DUMMY
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns the text this span covers in `source`
    ///
    /// Returns `None` when the span lies outside `source` or does not fall
    /// on character boundaries.
    #[inline]
    pub fn slice<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start..self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
