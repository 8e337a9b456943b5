//! Tokenizer configuration.
//!
//! Delimiters are fixed; the only tunable is how much of the stream is
//! buffered per read.

use crate::delimiter::DELIMITER_LEN;
use crate::error::TokenizeError;

/// Default read buffer capacity in bytes.
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// Smallest buffer that can hold a full delimiter for lookahead.
pub const MIN_BUFFER_CAPACITY: usize = DELIMITER_LEN;

/// Configuration for a [`Tokenizer`](crate::Tokenizer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Bytes requested from the reader per refill.
    /// Defaults to 8 KiB.
    pub buffer_capacity: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl TokenizerConfig {
    /// Create a config with the specified buffer capacity.
    pub fn with_buffer_capacity(buffer_capacity: usize) -> Self {
        Self { buffer_capacity }
    }

    /// Check the config before any input is read.
    pub fn validate(&self) -> Result<(), TokenizeError> {
        if self.buffer_capacity < MIN_BUFFER_CAPACITY {
            return Err(TokenizeError::BufferTooSmall {
                capacity: self.buffer_capacity,
                minimum: MIN_BUFFER_CAPACITY,
            });
        }
        Ok(())
    }
}
