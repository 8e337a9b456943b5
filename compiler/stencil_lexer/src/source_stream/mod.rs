//! Forward-only buffered window over a byte stream.
//!
//! The tokenizer never seeks and never re-reads: bytes move from the
//! reader into a fixed-capacity buffer, are inspected through
//! [`window()`](SourceStream::window) and [`lookahead()`](SourceStream::lookahead),
//! and are released with [`advance()`](SourceStream::advance).
//!
//! # Failure Atomicity
//!
//! A failed read consumes nothing. Everything already buffered stays
//! buffered, so a caller may retry after an I/O error without losing or
//! duplicating input.

use std::io::{self, Read};

use tracing::trace;

use crate::config::{TokenizerConfig, DEFAULT_BUFFER_CAPACITY};
use crate::delimiter::DELIMITER_LEN;
use crate::error::TokenizeError;

/// Buffered, forward-only view of a reader.
///
/// # Layout
///
/// ```text
/// [consumed..., unread..., free...]
///               ^          ^
///             start       end
/// ```
///
/// `offset` is the absolute stream position of `buf[start]`.
#[derive(Debug)]
pub struct SourceStream<R> {
    reader: R,
    /// Fixed-size storage; its length is the configured capacity.
    buf: Vec<u8>,
    start: usize,
    end: usize,
    offset: u64,
    /// Set once the reader has returned `Ok(0)`.
    exhausted: bool,
}

impl<R: Read> SourceStream<R> {
    /// Wrap `reader` with a buffer of [`DEFAULT_BUFFER_CAPACITY`] bytes.
    pub fn new(reader: R) -> Self {
        Self::from_parts(reader, DEFAULT_BUFFER_CAPACITY)
    }

    /// Wrap `reader` with a buffer of `capacity` bytes.
    ///
    /// A buffer smaller than a delimiter cannot hold the two-byte
    /// lookahead, so it is rejected with
    /// [`TokenizeError::BufferTooSmall`] before anything is read.
    pub fn with_capacity(reader: R, capacity: usize) -> Result<Self, TokenizeError> {
        TokenizerConfig::with_buffer_capacity(capacity).validate()?;
        Ok(Self::from_parts(reader, capacity))
    }

    fn from_parts(reader: R, capacity: usize) -> Self {
        Self {
            reader,
            buf: vec![0; capacity],
            start: 0,
            end: 0,
            offset: 0,
            exhausted: false,
        }
    }

    /// Absolute position of the next unread byte.
    #[inline]
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Unread buffered bytes, refilling first if none are buffered.
    ///
    /// An empty slice means the stream has ended.
    pub fn window(&mut self) -> io::Result<&[u8]> {
        self.fill(1)?;
        Ok(&self.buf[self.start..self.end])
    }

    /// The next two bytes, without consuming them.
    ///
    /// Refills across chunk boundaries. `None` marks the end of the stream.
    pub fn lookahead(&mut self) -> io::Result<[Option<u8>; DELIMITER_LEN]> {
        self.fill(DELIMITER_LEN)?;
        let unread = &self.buf[self.start..self.end];
        Ok([unread.first().copied(), unread.get(1).copied()])
    }

    /// Release `n` bytes that have been inspected.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        debug_assert!(
            n <= self.end - self.start,
            "advance {n} exceeds {} buffered bytes",
            self.end - self.start
        );
        self.start += n;
        self.offset += n as u64;
    }

    /// Returns `true` once the reader has reported end of stream and every
    /// buffered byte has been consumed.
    pub fn is_drained(&self) -> bool {
        self.exhausted && self.start == self.end
    }

    /// Give back the underlying reader. Buffered unread bytes are dropped.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read until at least `min` bytes are buffered or the reader is done.
    fn fill(&mut self, min: usize) -> io::Result<()> {
        while self.end - self.start < min && !self.exhausted {
            if self.start == self.end {
                self.start = 0;
                self.end = 0;
            } else if self.end == self.buf.len() {
                self.buf.copy_within(self.start..self.end, 0);
                self.end -= self.start;
                self.start = 0;
            }
            match self.reader.read(&mut self.buf[self.end..]) {
                Ok(0) => {
                    trace!(offset = self.offset, "source exhausted");
                    self.exhausted = true;
                }
                Ok(n) => {
                    trace!(offset = self.offset, bytes = n, "source refilled");
                    self.end += n;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}
