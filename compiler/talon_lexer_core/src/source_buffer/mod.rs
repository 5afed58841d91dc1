//! Owned source text with a zero sentinel after it.
//!
//! The cursor decodes characters straight out of this buffer and reads the
//! sentinel as lookahead `'\0'` once the text runs out, so end of input needs
//! no separate length check at each step. The buffer is padded with zeros up
//! to a 64-byte multiple, which keeps a multi-byte decode near the end
//! inside the allocation.
//!
//! A leading UTF-8 byte order mark is kept in the buffer but excluded from
//! the scannable content: [`SourceBuffer::content_start`] points past it.

use crate::Cursor;

/// Padding granularity of the backing allocation.
const CACHE_LINE: usize = 64;

/// Encoded UTF-8 byte order mark.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Source text terminated by a `0x00` sentinel.
///
/// ```text
/// [bom?, text..., 0x00, 0x00 padding...]
///        ^        ^
///        |        len()
///        content_start()
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    bytes: Vec<u8>,
    /// Byte length of the text, BOM included; the sentinel sits here.
    text_len: u32,
    /// First byte the scanner should see.
    content_start: u32,
}

impl SourceBuffer {
    /// Copy `source` into a sentinel-terminated buffer.
    ///
    /// Texts longer than `u32::MAX` bytes are truncated to that length.
    pub fn new(source: &str) -> Self {
        let text = source.as_bytes();
        let text = &text[..text.len().min(u32::MAX as usize)];

        let padded = (text.len() / CACHE_LINE + 1) * CACHE_LINE;
        let mut bytes = Vec::with_capacity(padded);
        bytes.extend_from_slice(text);
        bytes.resize(padded, 0);

        let content_start = if text.starts_with(UTF8_BOM) {
            UTF8_BOM.len()
        } else {
            0
        };

        Self {
            bytes,
            text_len: u32::try_from(text.len()).unwrap_or(u32::MAX),
            content_start: u32::try_from(content_start).unwrap_or(0),
        }
    }

    /// The text, BOM included, without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.text_len as usize]
    }

    /// A cursor at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.bytes, self.text_len)
    }

    /// Byte offset where scanning starts: 3 after a UTF-8 BOM, else 0.
    pub fn content_start(&self) -> u32 {
        self.content_start
    }

    /// Whether the text began with a UTF-8 byte order mark.
    pub fn has_bom(&self) -> bool {
        self.content_start > 0
    }

    /// Length of the text in bytes.
    pub fn len(&self) -> u32 {
        self.text_len
    }

    pub fn is_empty(&self) -> bool {
        self.text_len == 0
    }
}
