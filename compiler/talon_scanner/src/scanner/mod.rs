//! Per-call dispatch between the literal-body and layout scanners.

use talon_lexer_core::Lexer;
use tracing::trace;

use crate::content::{self, ContentOutcome};
use crate::layout;
use crate::state::StateError;
use crate::{Delimiter, ScannerState, TokenKind, TokenSet};

/// Which scanner handles a call, chosen fresh from the state and the
/// requested kinds.
///
/// Priority: string body, then regex body, then layout. Neither body
/// scanner runs while the host is in error recovery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ScanMode {
    StringContent(Delimiter),
    RegexContent,
    Layout,
}

impl ScanMode {
    pub(crate) fn select(state: &ScannerState, requested: TokenSet) -> Self {
        let recovering = requested.is_error_recovery();
        if requested.allows(TokenKind::StringContent) && !recovering {
            if let Some(delimiter) = state.top_delimiter() {
                return ScanMode::StringContent(delimiter);
            }
        }
        if requested.allows(TokenKind::RegexContent) && !recovering {
            return ScanMode::RegexContent;
        }
        ScanMode::Layout
    }
}

/// The external scanner for one parse branch.
///
/// All memory lives in the owned [`ScannerState`]; the host saves it with
/// [`serialize`](Self::serialize) whenever it forks a branch and restores
/// it with [`deserialize`](Self::deserialize) before scanning on one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scanner {
    state: ScannerState,
}

impl Scanner {
    /// A scanner in the zero state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from an existing state.
    pub fn with_state(state: ScannerState) -> Self {
        Self { state }
    }

    #[inline]
    pub fn state(&self) -> &ScannerState {
        &self.state
    }

    /// Scan for one token of a requested kind at the lexer's position.
    ///
    /// `None` means no token here: the host rewinds and lets its own
    /// grammar rules consume the input. On `Some`, the token ends at the
    /// lexer's marked end.
    pub fn scan<L: Lexer + ?Sized>(
        &mut self,
        lexer: &mut L,
        requested: TokenSet,
    ) -> Option<TokenKind> {
        let mode = ScanMode::select(&self.state, requested);
        let outcome = match mode {
            ScanMode::StringContent(delimiter) => {
                content::scan_string(lexer, &mut self.state, delimiter)
            }
            ScanMode::RegexContent => content::scan_regex(lexer),
            ScanMode::Layout => ContentOutcome::Exhausted,
        };

        let kind = match outcome {
            ContentOutcome::Emit(kind) => Some(kind),
            ContentOutcome::Reject => None,
            // Nothing consumed yet; the end of input may still close a block.
            ContentOutcome::Exhausted => layout::scan_layout(lexer, &mut self.state, requested),
        };

        if let Some(kind) = kind {
            trace!(
                %kind,
                ?mode,
                depth = self.state.depth(),
                baseline = self.state.indent_baseline(),
                "committed token"
            );
        }
        kind
    }

    /// [`scan`](Self::scan) with the host's boolean legality table.
    pub fn scan_valid_symbols<L: Lexer + ?Sized>(
        &mut self,
        lexer: &mut L,
        valid_symbols: &[bool],
    ) -> Option<TokenKind> {
        self.scan(lexer, TokenSet::from_valid_symbols(valid_symbols))
    }

    /// Snapshot the state for the current branch.
    pub fn serialize(&self) -> Vec<u8> {
        self.state.serialize()
    }

    /// Snapshot the state into the host's branch buffer.
    pub fn serialize_into(&self, buffer: &mut [u8]) -> Result<usize, StateError> {
        self.state.serialize_into(buffer)
    }

    /// Restore a snapshot taken by [`serialize`](Self::serialize).
    pub fn deserialize(&mut self, bytes: &[u8]) {
        self.state.deserialize(bytes);
    }
}
