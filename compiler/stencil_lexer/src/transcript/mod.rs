//! Line-per-token transcripts and round-trip reconstruction.
//!
//! The transcript is a debugging and conformance format, not a persisted
//! one: one rendered token per line, each line terminated by `\n`.

use std::fmt::Write as _;
use std::io::Read;

use crate::error::TokenizeError;
use crate::token::Token;
use crate::tokenizer::Tokenizer;

/// Tokenize `reader` to the end and render the transcript.
pub fn render_transcript<R: Read>(reader: R) -> Result<String, TokenizeError> {
    let mut out = String::new();
    for token in Tokenizer::new(reader) {
        push_line(&mut out, &token?);
    }
    Ok(out)
}

/// Render already-collected tokens as a transcript.
pub fn transcript_of(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        push_line(&mut out, token);
    }
    out
}

/// Concatenate the source text of every token.
///
/// For any complete token stream this reproduces the tokenized input.
pub fn reconstruct(tokens: &[Token]) -> String {
    tokens.iter().map(Token::source_text).collect()
}

fn push_line(out: &mut String, token: &Token) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{token}");
}
