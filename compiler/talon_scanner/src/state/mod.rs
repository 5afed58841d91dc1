//! Serializable scanner state.
//!
//! The host keeps one snapshot per parse branch and restores it before
//! every scan on that branch, so everything the scanner remembers between
//! calls lives here and nowhere else.
//!
//! # Encoding
//!
//! ```text
//! [depth: u8][delimiter: u8; depth][indent_baseline: u8]
//! ```
//!
//! The stack is written bottom to top.

use smallvec::SmallVec;
use tracing::trace;

use crate::Delimiter;

/// Deepest string nesting the encoding can represent.
///
/// Opening a string beyond this depth is refused rather than silently
/// truncated at serialization time.
pub const MAX_DELIMITER_DEPTH: usize = u8::MAX as usize;

/// Size of the per-branch buffer the host hands to
/// [`ScannerState::serialize_into`].
pub const SERIALIZATION_BUFFER_SIZE: usize = 1024;

/// Longest possible encoding: depth byte, full stack, baseline byte.
pub const MAX_SERIALIZED_LEN: usize = 1 + MAX_DELIMITER_DEPTH + 1;

const _: () = assert!(MAX_SERIALIZED_LEN <= SERIALIZATION_BUFFER_SIZE);

/// Failure to write a snapshot into a host buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("scanner state needs {needed} bytes but the buffer holds {capacity}")]
    BufferTooSmall { needed: usize, capacity: usize },
}

/// Delimiter stack plus indentation baseline.
///
/// # Invariants
///
/// - The top of `delimiters` closes the innermost open string.
/// - `delimiters.len() <= MAX_DELIMITER_DEPTH`.
/// - `indent_baseline` is 0 outside an indented block; INDENT sets it from 0
///   and DEDENT resets it to 0. It never moves between two positive values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScannerState {
    delimiters: SmallVec<[Delimiter; 8]>,
    indent_baseline: u8,
}

impl ScannerState {
    /// The zero state: no open strings, baseline 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open delimiters, outermost first.
    #[inline]
    pub fn delimiters(&self) -> &[Delimiter] {
        &self.delimiters
    }

    /// The delimiter of the innermost open string.
    #[inline]
    pub fn top_delimiter(&self) -> Option<Delimiter> {
        self.delimiters.last().copied()
    }

    /// Number of open strings.
    #[inline]
    pub fn depth(&self) -> usize {
        self.delimiters.len()
    }

    /// Record a newly opened string.
    ///
    /// Returns `false`, leaving the stack unchanged, when it is already
    /// [`MAX_DELIMITER_DEPTH`] deep.
    pub fn push_delimiter(&mut self, delimiter: Delimiter) -> bool {
        if self.delimiters.len() >= MAX_DELIMITER_DEPTH {
            return false;
        }
        self.delimiters.push(delimiter);
        true
    }

    /// Close the innermost open string.
    pub fn pop_delimiter(&mut self) -> Option<Delimiter> {
        self.delimiters.pop()
    }

    /// Indentation width of the current block, 0 at top level.
    #[inline]
    pub fn indent_baseline(&self) -> u8 {
        self.indent_baseline
    }

    /// Enter an indented block measured at `width` columns.
    ///
    /// Widths past 255 columns saturate.
    pub fn enter_block(&mut self, width: u32) {
        self.indent_baseline = u8::try_from(width).unwrap_or(u8::MAX);
    }

    /// Leave the current indented block.
    pub fn leave_block(&mut self) {
        self.indent_baseline = 0;
    }

    /// Returns `true` for the zero state.
    pub fn is_initial(&self) -> bool {
        self.delimiters.is_empty() && self.indent_baseline == 0
    }

    /// Length of the encoding [`serialize`](Self::serialize) produces.
    pub fn serialized_len(&self) -> usize {
        1 + self.delimiters.len().min(MAX_DELIMITER_DEPTH) + 1
    }

    /// Encode the state.
    pub fn serialize(&self) -> Vec<u8> {
        let mut buffer = vec![0; self.serialized_len()];
        let written = self.write_to(&mut buffer);
        buffer.truncate(written);
        buffer
    }

    /// Encode the state into a host-supplied buffer, returning the number
    /// of bytes written.
    pub fn serialize_into(&self, buffer: &mut [u8]) -> Result<usize, StateError> {
        let needed = self.serialized_len();
        if buffer.len() < needed {
            return Err(StateError::BufferTooSmall {
                needed,
                capacity: buffer.len(),
            });
        }
        Ok(self.write_to(buffer))
    }

    /// Caller guarantees `buffer.len() >= self.serialized_len()`.
    fn write_to(&self, buffer: &mut [u8]) -> usize {
        // Stacks never exceed the limit, but the count byte must not wrap.
        let depth = self.delimiters.len().min(MAX_DELIMITER_DEPTH);
        let mut i = 0;
        buffer[i] = u8::try_from(depth).unwrap_or(u8::MAX);
        i += 1;
        for (slot, delimiter) in buffer[i..i + depth].iter_mut().zip(&self.delimiters) {
            *slot = delimiter.to_byte();
        }
        i += depth;
        buffer[i] = self.indent_baseline;
        i += 1;
        i
    }

    /// Replace the state with the one encoded in `bytes`.
    ///
    /// An empty slice restores the zero state. Truncated input keeps the
    /// delimiters that are present and reads a missing baseline as 0; no
    /// byte past `bytes.len()` is read.
    pub fn deserialize(&mut self, bytes: &[u8]) {
        self.delimiters.clear();
        self.indent_baseline = 0;

        let Some((&depth, rest)) = bytes.split_first() else {
            return;
        };
        let depth = usize::from(depth);
        let present = depth.min(rest.len());
        self.delimiters
            .extend(rest[..present].iter().copied().map(Delimiter::from_byte));
        self.indent_baseline = rest.get(depth).copied().unwrap_or(0);

        trace!(
            depth = self.delimiters.len(),
            baseline = self.indent_baseline,
            "restored scanner state"
        );
    }
}
