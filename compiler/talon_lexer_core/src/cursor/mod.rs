//! Character cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer one UTF-8 character at a time.
//! End of input is reported as `'\0'`, read from the sentinel byte. An
//! interior null byte reads the same way; [`Cursor::is_eof`] compares the
//! position against the source length to tell them apart.

/// Character cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so the host can rewind by keeping an old copy.
///
/// # Invariant
///
/// `buf` must be sentinel-terminated: `buf[source_len] == 0x00`, and all
/// bytes after `source_len` are `0x00`. This is guaranteed by
/// [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the character at the current position.
    ///
    /// Returns `'\0'` at end of input. A malformed sequence (impossible for a
    /// buffer built from `&str`) decodes as U+FFFD.
    #[inline]
    pub fn current(&self) -> char {
        let lead = self.buf[self.pos as usize];
        if lead.is_ascii() {
            return char::from(lead);
        }
        let start = self.pos as usize;
        let end = (start + Self::utf8_char_width(lead) as usize).min(self.buf.len());
        std::str::from_utf8(&self.buf[start..end])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Advance past one full character. A no-op at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.is_eof() {
            return;
        }
        let width = Self::utf8_char_width(self.buf[self.pos as usize]);
        self.pos = (self.pos + width).min(self.source_len);
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Returns `true` if the cursor has reached the end of the source.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Move to an absolute byte offset, clamped to the source length.
    ///
    /// `pos` must sit on a character boundary; offsets produced by this
    /// cursor always do.
    #[inline]
    pub fn set_pos(&mut self, pos: u32) {
        self.pos = pos.min(self.source_len);
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract a source substring as `&str`.
    ///
    /// Out-of-range or non-boundary offsets yield an empty string.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        let end = end.min(self.source_len) as usize;
        let start = (start as usize).min(end);
        std::str::from_utf8(&self.buf[start..end]).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests;
