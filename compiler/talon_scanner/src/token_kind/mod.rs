//! External token kinds and the per-call set of requested kinds.
//!
//! The discriminants are the host grammar's external-token indices and must
//! not be reordered.

use bitflags::bitflags;

/// A token kind this scanner can emit, or read as a legality flag.
///
/// `Comment` and the three `Close*` kinds are never emitted. The close kinds
/// only tell the scanner whether the host is inside a bracket pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    Newline = 0,
    Indent = 1,
    Dedent = 2,
    StringStart = 3,
    StringContent = 4,
    StringEnd = 5,
    RegexStart = 6,
    RegexContent = 7,
    RegexEnd = 8,
    Comment = 9,
    CloseParen = 10,
    CloseBracket = 11,
    CloseBrace = 12,
}

impl TokenKind {
    /// Every kind, in external-index order.
    pub const ALL: [TokenKind; 13] = [
        TokenKind::Newline,
        TokenKind::Indent,
        TokenKind::Dedent,
        TokenKind::StringStart,
        TokenKind::StringContent,
        TokenKind::StringEnd,
        TokenKind::RegexStart,
        TokenKind::RegexContent,
        TokenKind::RegexEnd,
        TokenKind::Comment,
        TokenKind::CloseParen,
        TokenKind::CloseBracket,
        TokenKind::CloseBrace,
    ];

    /// Human-readable name, matching the grammar's external symbol names.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Newline => "NEWLINE",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::StringStart => "STRING_START",
            TokenKind::StringContent => "STRING_CONTENT",
            TokenKind::StringEnd => "STRING_END",
            TokenKind::RegexStart => "REGEX_START",
            TokenKind::RegexContent => "REGEX_CONTENT",
            TokenKind::RegexEnd => "REGEX_END",
            TokenKind::Comment => "COMMENT",
            TokenKind::CloseParen => "CLOSE_PAREN",
            TokenKind::CloseBracket => "CLOSE_BRACKET",
            TokenKind::CloseBrace => "CLOSE_BRACE",
        }
    }

    /// The single-bit [`TokenSet`] for this kind.
    #[inline]
    pub const fn bit(self) -> TokenSet {
        TokenSet::from_bits_retain(1u16 << (self as u8))
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Token kinds the host is willing to accept at the current position.
    ///
    /// Bit `n` corresponds to the [`TokenKind`] with discriminant `n`.
    #[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
    pub struct TokenSet: u16 {
        const NEWLINE = 1 << 0;
        const INDENT = 1 << 1;
        const DEDENT = 1 << 2;
        const STRING_START = 1 << 3;
        const STRING_CONTENT = 1 << 4;
        const STRING_END = 1 << 5;
        const REGEX_START = 1 << 6;
        const REGEX_CONTENT = 1 << 7;
        const REGEX_END = 1 << 8;
        const COMMENT = 1 << 9;
        const CLOSE_PAREN = 1 << 10;
        const CLOSE_BRACKET = 1 << 11;
        const CLOSE_BRACE = 1 << 12;

        /// Any bracket-close kind: the host is inside a bracket pair.
        const BRACKETS = Self::CLOSE_PAREN.bits()
            | Self::CLOSE_BRACKET.bits()
            | Self::CLOSE_BRACE.bits();
    }
}

impl TokenSet {
    /// Build a set from a list of kinds.
    pub fn from_kinds(kinds: &[TokenKind]) -> Self {
        kinds
            .iter()
            .fold(TokenSet::empty(), |set, &kind| set | kind.bit())
    }

    /// Build a set from the host's boolean legality table.
    ///
    /// Entry `n` is the legality of the kind with discriminant `n`. Missing
    /// trailing entries read as `false`; extra entries are ignored.
    pub fn from_valid_symbols(valid: &[bool]) -> Self {
        TokenKind::ALL
            .iter()
            .zip(valid)
            .filter(|&(_, &is_valid)| is_valid)
            .fold(TokenSet::empty(), |set, (&kind, _)| set | kind.bit())
    }

    /// Whether the host accepts `kind` here.
    #[inline]
    pub fn allows(self, kind: TokenKind) -> bool {
        self.contains(kind.bit())
    }

    /// The host is inside a paren, bracket, or brace pair.
    #[inline]
    pub fn within_brackets(self) -> bool {
        self.intersects(TokenSet::BRACKETS)
    }

    /// The host is recovering from an error.
    ///
    /// Literal content and INDENT are never legal together in a well-formed
    /// parse state, so both being requested means the host is trying every
    /// token. The content scanners stand down and NEWLINE is withheld.
    #[inline]
    pub fn is_error_recovery(self) -> bool {
        self.intersects(TokenSet::STRING_CONTENT | TokenSet::REGEX_CONTENT)
            && self.contains(TokenSet::INDENT)
    }
}

impl From<TokenKind> for TokenSet {
    fn from(kind: TokenKind) -> Self {
        kind.bit()
    }
}
