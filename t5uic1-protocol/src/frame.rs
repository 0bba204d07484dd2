//! Command frame construction
//!
//! A [`Frame`] is the serialized body of one command: the header byte,
//! the opcode and the payload fields. Fields are appended through the
//! push methods; 16-bit values go out big-endian. The fixed tail is not
//! part of the frame, the transport writes it after the body.

use heapless::Vec;

/// First byte of every command frame
pub const FRAME_HEAD: u8 = 0xAA;

/// Fixed terminator written after the frame body
pub const FRAME_TAIL: [u8; 4] = [0xCC, 0x33, 0xC3, 0x3C];

/// Horizontal resolution of the panel in pixels
pub const DISPLAY_WIDTH: u16 = 272;

/// Vertical resolution of the panel in pixels
pub const DISPLAY_HEIGHT: u16 = 480;

/// Maximum frame body size: an 11-byte string-command head plus one
/// two-byte glyph per 6-pixel column across the full display width.
/// Every other command is far smaller.
pub const FRAME_CAPACITY: usize = 11 + (DISPLAY_WIDTH as usize / 6) * 2;

/// Errors that can occur while building a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Appending the field would exceed the frame capacity
    Overflow,
}

/// One outgoing command frame, header included and tail excluded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    bytes: Vec<u8, FRAME_CAPACITY>,
}

impl Frame {
    /// Create a frame holding only the header byte
    pub fn new() -> Self {
        let mut bytes = Vec::new();
        // Cannot fail, capacity is well above one byte
        let _ = bytes.push(FRAME_HEAD);
        Self { bytes }
    }

    /// Append a single byte field
    pub fn push_byte(&mut self, value: u8) -> Result<(), FrameError> {
        self.bytes.push(value).map_err(|_| FrameError::Overflow)
    }

    /// Append a 16-bit field, high byte first.
    ///
    /// Either both bytes land in the frame or neither does.
    pub fn push_word(&mut self, value: u16) -> Result<(), FrameError> {
        if self.remaining() < 2 {
            return Err(FrameError::Overflow);
        }
        let [hi, lo] = value.to_be_bytes();
        // Room was checked, the pushes cannot fail
        let _ = self.bytes.push(hi);
        let _ = self.bytes.push(lo);
        Ok(())
    }

    /// Append text bytes, truncated to the lesser of `limit` and the
    /// remaining capacity. Returns how many bytes were written.
    ///
    /// Bytes are copied verbatim; the panel charset is ASCII plus
    /// GB2312, so the driver does not reinterpret encodings.
    pub fn push_text(&mut self, text: &str, limit: usize) -> usize {
        let take = text.len().min(limit).min(self.remaining());
        // take never exceeds the remaining capacity
        let _ = self.bytes.extend_from_slice(&text.as_bytes()[..take]);
        take
    }

    /// Payload bytes still available
    pub fn remaining(&self) -> usize {
        FRAME_CAPACITY - self.bytes.len()
    }

    /// Current body length, header included
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// A frame always carries at least the header byte
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Serialized body: header, opcode, payload
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}
