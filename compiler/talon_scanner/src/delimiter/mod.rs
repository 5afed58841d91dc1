//! Closing-quote record for one open string literal.

use bitflags::bitflags;

bitflags! {
    /// Which quote closes an open string literal.
    ///
    /// Stored as one byte so the delimiter stack serializes verbatim. A
    /// freshly opened string sets exactly one bit; foreign bytes restored
    /// from a snapshot are kept as-is and resolved by [`end_character`].
    ///
    /// [`end_character`]: Delimiter::end_character
    #[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
    pub struct Delimiter: u8 {
        const SINGLE_QUOTE = 1 << 0;
        const DOUBLE_QUOTE = 1 << 1;
        const BACK_QUOTE = 1 << 2;
    }
}

/// A character that cannot open a string literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0:?} is not a string quote")]
pub struct DelimiterError(pub char);

impl Delimiter {
    /// The delimiter opened by `quote`, if it is a string quote.
    pub fn for_opener(quote: char) -> Option<Self> {
        match quote {
            '\'' => Some(Delimiter::SINGLE_QUOTE),
            '"' => Some(Delimiter::DOUBLE_QUOTE),
            '`' => Some(Delimiter::BACK_QUOTE),
            _ => None,
        }
    }

    /// The character that closes this string.
    ///
    /// Single quote wins over double over backtick when several bits are
    /// set. `None` when no known bit is set.
    pub fn end_character(self) -> Option<char> {
        if self.contains(Delimiter::SINGLE_QUOTE) {
            Some('\'')
        } else if self.contains(Delimiter::DOUBLE_QUOTE) {
            Some('"')
        } else if self.contains(Delimiter::BACK_QUOTE) {
            Some('`')
        } else {
            None
        }
    }

    /// The serialized byte.
    #[inline]
    pub fn to_byte(self) -> u8 {
        self.bits()
    }

    /// Restore from a serialized byte, keeping unknown bits.
    #[inline]
    pub fn from_byte(byte: u8) -> Self {
        Delimiter::from_bits_retain(byte)
    }
}

impl TryFrom<char> for Delimiter {
    type Error = DelimiterError;

    fn try_from(quote: char) -> Result<Self, Self::Error> {
        Delimiter::for_opener(quote).ok_or(DelimiterError(quote))
    }
}
