//! The fixed delimiter table.
//!
//! Every construct is bracketed by a two-byte open delimiter starting with
//! `{` and a two-byte close delimiter ending with `}`:
//!
//! | Construct | Open | Close |
//! |-----------|------|-------|
//! | Comment   | `{#` | `#}`  |
//! | Variable  | `{{` | `}}`  |
//! | Tag       | `{%` | `%}`  |
//!
//! Because all delimiters are exactly two ASCII bytes, two bytes of
//! lookahead are enough to tell a delimiter from a look-alike, and a
//! delimiter can never split a multi-byte UTF-8 sequence.

use crate::token::TokenKind;

/// Lead byte shared by every open delimiter.
pub const OPEN_LEAD: u8 = b'{';

/// Trailing byte shared by every close delimiter.
pub const CLOSE_TRAIL: u8 = b'}';

/// Length in bytes of every delimiter.
pub const DELIMITER_LEN: usize = 2;

/// A bracketed region embedded in literal text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Construct {
    /// `{# ... #}`
    Comment,
    /// `{{ ... }}`
    Variable,
    /// `{% ... %}`
    Tag,
}

impl Construct {
    /// All constructs, in table order.
    pub const ALL: [Construct; 3] = [Construct::Comment, Construct::Variable, Construct::Tag];

    /// The open delimiter string.
    pub const fn open(self) -> &'static str {
        match self {
            Construct::Comment => "{#",
            Construct::Variable => "{{",
            Construct::Tag => "{%",
        }
    }

    /// The close delimiter string.
    pub const fn close(self) -> &'static str {
        match self {
            Construct::Comment => "#}",
            Construct::Variable => "}}",
            Construct::Tag => "%}",
        }
    }

    /// First byte of the close delimiter; the second is always `}`.
    #[inline]
    pub const fn close_lead(self) -> u8 {
        match self {
            Construct::Comment => b'#',
            Construct::Variable => b'}',
            Construct::Tag => b'%',
        }
    }

    /// Classify the byte following a `{`.
    ///
    /// Returns `None` for anything that does not complete an open
    /// delimiter, in which case the `{` is literal text.
    #[inline]
    pub const fn from_open_second(byte: u8) -> Option<Construct> {
        match byte {
            b'#' => Some(Construct::Comment),
            b'{' => Some(Construct::Variable),
            b'%' => Some(Construct::Tag),
            _ => None,
        }
    }

    /// Marker kind emitted for the open delimiter.
    pub const fn open_kind(self) -> TokenKind {
        match self {
            Construct::Comment => TokenKind::OpenComment,
            Construct::Variable => TokenKind::OpenVariable,
            Construct::Tag => TokenKind::OpenTag,
        }
    }

    /// Marker kind emitted for the close delimiter.
    pub const fn close_kind(self) -> TokenKind {
        match self {
            Construct::Comment => TokenKind::CloseComment,
            Construct::Variable => TokenKind::CloseVariable,
            Construct::Tag => TokenKind::CloseTag,
        }
    }
}
