//! Pull-based template tokenizer.
//!
//! Each [`Tokenizer::next_token`] call yields exactly one token. The
//! scanner alternates between literal mode (looking for `{#`, `{{`, `{%`)
//! and inside-construct mode (looking for the active close delimiter only;
//! constructs do not nest).
//!
//! # Deferred Markers
//!
//! When a delimiter ends a run of text, the text is returned first and the
//! delimiter's marker is owed to the next call. The owed marker is held in
//! [`State`], so every transition is visible in one `match`.
//!
//! # Empty Regions
//!
//! An empty region never produces a `Text` token: `{{}}` is
//! `OpenVariable, CloseVariable`, and every `Text` token is non-empty.

use std::io::Read;
use std::mem;

use tracing::{debug, trace};

use crate::config::TokenizerConfig;
use crate::delimiter::{Construct, CLOSE_TRAIL, DELIMITER_LEN, OPEN_LEAD};
use crate::error::TokenizeError;
use crate::source_stream::SourceStream;
use crate::token::{Span, Token, TokenKind};

/// Scanner state between `next_token` calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Scanning literal text for an open delimiter.
    Literal,
    /// Open delimiter consumed at `at`; its marker has not been emitted.
    OpenPending { construct: Construct, at: u64 },
    /// Scanning a construct body for its close delimiter.
    Inside(Construct),
    /// Close delimiter consumed at `at`; its marker has not been emitted.
    ClosePending { construct: Construct, at: u64 },
    /// End of stream reached; `EndOfInput` has not been emitted.
    Drained,
    /// `EndOfInput` has been emitted, or a fatal error stopped the scan.
    Finished,
}

/// What a text scan stopped on.
enum Stop {
    /// A delimiter for `construct` starts at `at` and has been consumed.
    Delimiter { construct: Construct, at: u64 },
    /// The stream ended first.
    End,
}

/// Streaming tokenizer over any [`Read`] source.
///
/// The reader is only ever read forward. Pass `&mut reader` to keep
/// ownership of the stream with the caller; the tokenizer never closes it.
pub struct Tokenizer<R> {
    source: SourceStream<R>,
    state: State,
    /// Text scanned but not yet emitted.
    pending: Vec<u8>,
    /// Stream offset of `pending[0]`.
    pending_start: u64,
}

impl<R: Read> Tokenizer<R> {
    /// Create a tokenizer with the default configuration.
    pub fn new(reader: R) -> Self {
        Self::from_source(SourceStream::new(reader))
    }

    /// Create a tokenizer, rejecting an invalid configuration before any
    /// input is read.
    pub fn with_config(reader: R, config: TokenizerConfig) -> Result<Self, TokenizeError> {
        let source = SourceStream::with_capacity(reader, config.buffer_capacity)?;
        Ok(Self::from_source(source))
    }

    fn from_source(source: SourceStream<R>) -> Self {
        Self {
            source,
            state: State::Literal,
            pending: Vec::new(),
            pending_start: 0,
        }
    }

    /// Produce the next token.
    ///
    /// The last token is always `EndOfInput`; calling again after it
    /// returns `EndOfInput` again.
    pub fn next_token(&mut self) -> Result<Token, TokenizeError> {
        let token = self.step()?;
        trace!(kind = token.kind.name(), span = %token.span, "token");
        Ok(token)
    }

    /// Returns `true` once `EndOfInput` has been emitted or a fatal error
    /// has ended tokenization.
    ///
    /// After [`TokenizeError::InvalidUtf8`], `next_token` returns
    /// `EndOfInput` at the offset where scanning stopped, not at the end of
    /// the stream.
    pub fn is_finished(&self) -> bool {
        self.state == State::Finished
    }

    /// Give back the underlying reader. Bytes already buffered but not yet
    /// tokenized are dropped.
    pub fn into_inner(self) -> R {
        self.source.into_inner()
    }

    /// One transition of the state machine.
    fn step(&mut self) -> Result<Token, TokenizeError> {
        match self.state {
            State::Literal => self.literal(),
            State::OpenPending { construct, at } => {
                self.state = State::Inside(construct);
                Ok(marker(construct.open_kind(), at))
            }
            State::Inside(construct) => self.inside(construct),
            State::ClosePending { construct, at } => {
                self.state = State::Literal;
                Ok(marker(construct.close_kind(), at))
            }
            State::Drained | State::Finished => {
                self.state = State::Finished;
                Ok(Token::end_of_input(self.source.offset()))
            }
        }
    }

    fn literal(&mut self) -> Result<Token, TokenizeError> {
        match self.scan_text(OPEN_LEAD, Construct::from_open_second)? {
            Stop::Delimiter { construct, at } => {
                self.state = State::OpenPending { construct, at };
            }
            Stop::End => self.state = State::Drained,
        }
        self.flush_or_step()
    }

    fn inside(&mut self, construct: Construct) -> Result<Token, TokenizeError> {
        let closes = |byte: u8| (byte == CLOSE_TRAIL).then_some(construct);
        match self.scan_text(construct.close_lead(), closes)? {
            Stop::Delimiter { construct, at } => {
                self.state = State::ClosePending { construct, at };
            }
            Stop::End => {
                debug!(
                    construct = ?construct,
                    offset = self.source.offset(),
                    "unterminated construct"
                );
                self.state = State::Drained;
            }
        }
        self.flush_or_step()
    }

    /// Emit pending text if there is any, otherwise whatever the state the
    /// scan ended in owes.
    fn flush_or_step(&mut self) -> Result<Token, TokenizeError> {
        if self.pending.is_empty() {
            return self.step();
        }
        let bytes = mem::take(&mut self.pending);
        let start = self.pending_start;
        let end = start + bytes.len() as u64;
        match String::from_utf8(bytes) {
            Ok(contents) => Ok(Token::text(contents, Span::new(start, end))),
            Err(source) => {
                let offset = start + source.utf8_error().valid_up_to() as u64;
                self.state = State::Finished;
                Err(TokenizeError::InvalidUtf8 { offset, source })
            }
        }
    }

    /// Accumulate text until a delimiter is found or the stream ends.
    ///
    /// `lead` is the first delimiter byte; `classify` maps the byte after
    /// it to the construct it completes. A lead that does not complete a
    /// delimiter is text, and scanning resumes at the byte after it, so in
    /// `{{{` the first two braces form the delimiter.
    ///
    /// On an I/O error, everything scanned so far stays in `pending` and
    /// the state is unchanged, so the next call resumes cleanly.
    fn scan_text(
        &mut self,
        lead: u8,
        classify: impl Fn(u8) -> Option<Construct>,
    ) -> Result<Stop, TokenizeError> {
        if self.pending.is_empty() {
            self.pending_start = self.source.offset();
        }
        loop {
            let offset = self.source.offset();
            let window = self.source.window().map_err(|e| io_error(offset, e))?;
            if window.is_empty() {
                return Ok(Stop::End);
            }
            let Some(pos) = memchr::memchr(lead, window) else {
                let len = window.len();
                self.pending.extend_from_slice(window);
                self.source.advance(len);
                continue;
            };
            self.pending.extend_from_slice(&window[..pos]);
            self.source.advance(pos);

            let at = self.source.offset();
            let [_, second] = self.source.lookahead().map_err(|e| io_error(at, e))?;
            if let Some(construct) = second.and_then(&classify) {
                self.source.advance(DELIMITER_LEN);
                return Ok(Stop::Delimiter { construct, at });
            }
            self.pending.push(lead);
            self.source.advance(1);
        }
    }
}

fn io_error(offset: u64, source: std::io::Error) -> TokenizeError {
    TokenizeError::Io { offset, source }
}

fn marker(kind: TokenKind, at: u64) -> Token {
    Token::marker(kind, Span::new(at, at + DELIMITER_LEN as u64))
}

/// Yields every token up to and including `EndOfInput`, then `None`.
///
/// A fatal error ends iteration after it is yielded; a resumable I/O error
/// does not.
impl<R: Read> Iterator for Tokenizer<R> {
    type Item = Result<Token, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }
        Some(self.next_token())
    }
}

impl<R: Read> std::iter::FusedIterator for Tokenizer<R> {}
