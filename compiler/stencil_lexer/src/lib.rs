//! Streaming tokenizer for Stencil templates.
//!
//! Splits a template into literal text and the three bracketed constructs:
//! comments `{# #}`, variables `{{ }}` and tags `{% %}`. Construct bodies
//! are opaque `Text`; interpreting them is the parser's job.
//!
//! ```
//! use stencil_lexer::{tokenize_str, TokenKind};
//!
//! let tokens = tokenize_str("Hi {{ name }}!").unwrap_or_default();
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Text,
//!         TokenKind::OpenVariable,
//!         TokenKind::Text,
//!         TokenKind::CloseVariable,
//!         TokenKind::Text,
//!         TokenKind::EndOfInput,
//!     ]
//! );
//! ```
//!
//! # Guarantees
//!
//! - Lossless: concatenating [`Token::source_text`] over the stream
//!   reproduces the input exactly.
//! - Exactly one `EndOfInput`, always last.
//! - The input is read strictly forward with two bytes of lookahead.
//! - `Text` tokens are never empty.

mod config;
mod delimiter;
mod error;
mod source_stream;
mod token;
mod tokenizer;
mod transcript;

#[cfg(test)]
mod test_readers;

use std::io::Read;
use std::sync::Once;

pub use config::{TokenizerConfig, DEFAULT_BUFFER_CAPACITY, MIN_BUFFER_CAPACITY};
pub use delimiter::Construct;
pub use error::TokenizeError;
pub use source_stream::SourceStream;
pub use token::{Span, Token, TokenKind};
pub use tokenizer::Tokenizer;
pub use transcript::{reconstruct, render_transcript, transcript_of};

/// Tokenize a whole stream, including the final `EndOfInput`.
pub fn tokenize<R: Read>(reader: R) -> Result<Vec<Token>, TokenizeError> {
    Tokenizer::new(reader).collect()
}

/// Tokenize in-memory template text.
pub fn tokenize_str(source: &str) -> Result<Vec<Token>, TokenizeError> {
    tokenize(source.as_bytes())
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=stencil_lexer=debug` or `RUST_LOG=stencil_lexer=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
