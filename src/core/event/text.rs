//=========================================================================
// Text Buffer
//=========================================================================
//
// Inline, fixed-capacity UTF-8 text used by text input and IME events.
//
// Copying out of a raw record is the only place text is trusted less
// than the type system would like, so construction clamps in order:
//   reported length → raw buffer size → first NUL → capacity → char boundary
//
// The result is always a valid prefix of the source and never allocates.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use crate::core::raw::RawText;

//=== Constants ===========================================================

/// Maximum number of UTF-8 bytes a text payload holds (a 32-byte C
/// buffer minus its terminator).
pub const TEXT_CAPACITY: usize = 31;

//=== TextBuffer ==========================================================

/// Owned text payload with a hard byte capacity.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextBuffer {
    bytes: [u8; TEXT_CAPACITY],
    len: u8,
}

impl TextBuffer {
    /// Same as [`TEXT_CAPACITY`].
    pub const CAPACITY: usize = TEXT_CAPACITY;

    //--- Construction -----------------------------------------------------

    /// Empty buffer.
    pub const fn new() -> Self {
        Self {
            bytes: [0; Self::CAPACITY],
            len: 0,
        }
    }

    /// Copies the longest prefix of `text` that fits, ending on a char
    /// boundary.
    pub fn from_str_truncated(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// Decodes a raw platform text buffer without ever reading past the
    /// reported length or the buffer itself.
    pub fn from_raw(raw: &RawText) -> Self {
        let reported = (raw.len as usize).min(raw.bytes.len());
        Self::from_bytes(&raw.bytes[..reported])
    }

    fn from_bytes(source: &[u8]) -> Self {
        let terminated = match source.iter().position(|&b| b == 0) {
            Some(nul) => &source[..nul],
            None => source,
        };
        let clamped = &terminated[..terminated.len().min(Self::CAPACITY)];

        // Longest valid UTF-8 prefix. Cuts a character split by the clamp
        // and anything after the first invalid sequence.
        let valid = match std::str::from_utf8(clamped) {
            Ok(text) => text.len(),
            Err(e) => e.valid_up_to(),
        };

        let mut buffer = Self::new();
        buffer.bytes[..valid].copy_from_slice(&clamped[..valid]);
        buffer.len = valid as u8;
        buffer
    }

    //--- Accessors --------------------------------------------------------

    pub fn as_str(&self) -> &str {
        // Construction only ever stores a validated prefix.
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or_default()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for TextBuffer {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for TextBuffer {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TextBuffer {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
