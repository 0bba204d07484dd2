//! Handshake reply accumulation
//!
//! After the host sends the handshake query the display answers with
//! `A5 00 'O' 'K'`. Bring-up noise can precede the reply, so the buffer
//! restarts whenever its first byte is not the sentinel; only a stream
//! position that opens with `0xA5` can grow into an accepted reply.

use heapless::Vec;

/// Leading byte of a valid handshake reply
pub const SENTINEL: u8 = 0xA5;

/// Reply bytes expected after the sentinel
const ACK_TAIL: [u8; 3] = [0x00, b'O', b'K'];

/// Receive window for one handshake attempt
pub const REPLY_CAPACITY: usize = 26;

/// Accumulates handshake reply bytes, discarding any noise prefix
#[derive(Debug, Clone)]
pub struct ReplyBuffer {
    bytes: Vec<u8, REPLY_CAPACITY>,
}

impl ReplyBuffer {
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Store one received byte.
    ///
    /// While the buffer does not start with the sentinel it is cleared,
    /// so garbage before the reply never shifts later bytes out of
    /// position. Returns whether the byte was kept.
    pub fn push(&mut self, byte: u8) -> bool {
        if self.bytes.push(byte).is_err() {
            return false;
        }
        if self.bytes[0] != SENTINEL {
            self.bytes.clear();
            return false;
        }
        true
    }

    /// Whether the window can take no more bytes
    pub fn is_full(&self) -> bool {
        self.bytes.len() == REPLY_CAPACITY
    }

    /// Bytes accepted so far
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Accepted bytes, sentinel first
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Decide the handshake: at least four bytes captured and the
    /// reply opening with the full `A5 00 'O' 'K'` sequence.
    ///
    /// Trailing bytes beyond the fourth do not matter; displays flush
    /// whatever else sits in their transmit path after the reply.
    pub fn is_ack(&self) -> bool {
        self.bytes.len() >= 4 && self.bytes[0] == SENTINEL && self.bytes[1..4] == ACK_TAIL
    }
}

impl Default for ReplyBuffer {
    fn default() -> Self {
        Self::new()
    }
}
