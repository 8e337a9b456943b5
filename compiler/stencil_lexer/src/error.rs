//! Tokenizer failures.
//!
//! An unterminated construct is not an error: it shows up structurally as
//! an `Open*` marker with no matching `Close*` before `EndOfInput`.

use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Failure surfaced by [`Tokenizer`](crate::Tokenizer).
#[derive(Debug, Error)]
pub enum TokenizeError {
    /// The reader failed. Distinct from a normal end of stream.
    ///
    /// The tokenizer keeps its state and pending text, so calling
    /// `next_token` again resumes from the failed read.
    #[error("failed to read template source at byte {offset}")]
    Io {
        offset: u64,
        #[source]
        source: io::Error,
    },

    /// A text region is not valid UTF-8. The tokenizer is finished after this.
    #[error("template source is not valid UTF-8 at byte {offset}")]
    InvalidUtf8 {
        offset: u64,
        #[source]
        source: FromUtf8Error,
    },

    /// The configured read buffer cannot hold a full delimiter.
    #[error("read buffer capacity {capacity} is below the minimum of {minimum} bytes")]
    BufferTooSmall { capacity: usize, minimum: usize },
}

impl TokenizeError {
    /// Returns `true` if tokenization can continue after this error.
    pub fn is_resumable(&self) -> bool {
        matches!(self, TokenizeError::Io { .. })
    }
}
