//! Token values exchanged between the tokenizer and its caller.

use std::fmt;

use crate::delimiter::Construct;

/// Half-open byte range `[start, end)` in the input stream.
///
/// Offsets are `u64` because the input is an unbounded stream rather than
/// an in-memory file.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: u64,
    pub end: u64,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u64, end: u64) -> Self {
        Span { start, end }
    }

    /// Create a point span (zero-length).
    #[inline]
    pub const fn point(offset: u64) -> Self {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u64 {
        self.end - self.start
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Token classification.
///
/// There is no "unclassified" kind: a [`Token`] only comes into existence
/// once the tokenizer knows what it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// Literal text, either between constructs or inside one.
    Text,
    /// `{#`
    OpenComment,
    /// `#}`
    CloseComment,
    /// `{{`
    OpenVariable,
    /// `}}`
    CloseVariable,
    /// `{%`
    OpenTag,
    /// `%}`
    CloseTag,
    /// End of the token stream. Always the last token.
    EndOfInput,
}

impl TokenKind {
    /// Name used by the textual rendering.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Text => "Text",
            TokenKind::OpenComment => "OpenComment",
            TokenKind::CloseComment => "CloseComment",
            TokenKind::OpenVariable => "OpenVariable",
            TokenKind::CloseVariable => "CloseVariable",
            TokenKind::OpenTag => "OpenTag",
            TokenKind::CloseTag => "CloseTag",
            TokenKind::EndOfInput => "EndOfInput",
        }
    }

    /// The fixed source text of a marker kind.
    ///
    /// Returns `None` for `Text` (variable contents) and `EndOfInput`
    /// (no source text).
    pub const fn lexeme(self) -> Option<&'static str> {
        match self.construct() {
            Some(construct) if self.is_open() => Some(construct.open()),
            Some(construct) => Some(construct.close()),
            None => None,
        }
    }

    /// The construct a marker kind belongs to.
    pub const fn construct(self) -> Option<Construct> {
        match self {
            TokenKind::OpenComment | TokenKind::CloseComment => Some(Construct::Comment),
            TokenKind::OpenVariable | TokenKind::CloseVariable => Some(Construct::Variable),
            TokenKind::OpenTag | TokenKind::CloseTag => Some(Construct::Tag),
            TokenKind::Text | TokenKind::EndOfInput => None,
        }
    }

    /// Returns `true` for `OpenComment`, `OpenVariable` and `OpenTag`.
    pub const fn is_open(self) -> bool {
        matches!(
            self,
            TokenKind::OpenComment | TokenKind::OpenVariable | TokenKind::OpenTag
        )
    }

    /// Returns `true` for `CloseComment`, `CloseVariable` and `CloseTag`.
    pub const fn is_close(self) -> bool {
        matches!(
            self,
            TokenKind::CloseComment | TokenKind::CloseVariable | TokenKind::CloseTag
        )
    }

    /// Returns `true` for delimiter markers.
    pub const fn is_marker(self) -> bool {
        self.construct().is_some()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified region of the input.
///
/// `contents` is only meaningful for [`TokenKind::Text`]; markers and
/// `EndOfInput` carry an empty string. The text between an open and close
/// marker is its own `Text` token rather than a payload of the marker.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub contents: String,
    pub span: Span,
}

impl Token {
    /// A `Text` token.
    pub fn text(contents: String, span: Span) -> Self {
        Token {
            kind: TokenKind::Text,
            contents,
            span,
        }
    }

    /// A payload-free token (marker or `EndOfInput`).
    pub fn marker(kind: TokenKind, span: Span) -> Self {
        debug_assert!(kind != TokenKind::Text, "text tokens carry contents");
        Token {
            kind,
            contents: String::new(),
            span,
        }
    }

    /// An `EndOfInput` token at `offset`.
    pub fn end_of_input(offset: u64) -> Self {
        Token::marker(TokenKind::EndOfInput, Span::point(offset))
    }

    /// Returns `true` if this is the `EndOfInput` token.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// The exact input this token was scanned from.
    ///
    /// Concatenating this over a whole token stream reproduces the input.
    pub fn source_text(&self) -> &str {
        match self.kind {
            TokenKind::Text => &self.contents,
            kind => kind.lexeme().unwrap_or(""),
        }
    }
}

/// Renders `Kind` for payload-free tokens and `Kind "contents"` for text,
/// with newlines shown as `\n`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.name())?;
        if self.kind == TokenKind::Text {
            f.write_str(" \"")?;
            let mut rest = self.contents.as_str();
            while let Some(pos) = memchr::memchr(b'\n', rest.as_bytes()) {
                f.write_str(&rest[..pos])?;
                f.write_str("\\n")?;
                rest = &rest[pos + 1..];
            }
            f.write_str(rest)?;
            f.write_str("\"")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
