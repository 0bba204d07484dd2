//! In-memory doubles for the serial link and the delay provider

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_io::{ErrorType, Read, ReadReady, Write};
use heapless::Vec;

use crate::link::SerialLink;

/// Scripted serial link: records writes, serves canned reply bytes
pub struct MockLink {
    /// Every byte the driver wrote, in order
    pub written: Vec<u8, 512>,
    /// Baud rate passed to the last `open`
    pub opened_at: Option<u32>,
    /// What `is_connected` reports
    pub connected: bool,
    replies: Vec<u8, 64>,
    cursor: usize,
}

impl MockLink {
    pub fn new() -> Self {
        Self {
            written: Vec::new(),
            opened_at: None,
            connected: true,
            replies: Vec::new(),
            cursor: 0,
        }
    }

    /// Link that will answer reads with `bytes`, then fall silent
    pub fn with_reply(bytes: &[u8]) -> Self {
        let mut link = Self::new();
        link.replies.extend_from_slice(bytes).unwrap();
        link
    }
}

impl Default for MockLink {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorType for MockLink {
    type Error = Infallible;
}

impl Read for MockLink {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if buf.is_empty() || self.cursor >= self.replies.len() {
            return Ok(0);
        }
        buf[0] = self.replies[self.cursor];
        self.cursor += 1;
        Ok(1)
    }
}

impl Write for MockLink {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.written.extend_from_slice(buf).unwrap();
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl ReadReady for MockLink {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(self.cursor < self.replies.len())
    }
}

impl SerialLink for MockLink {
    fn open(&mut self, baudrate: u32) -> Result<(), Self::Error> {
        self.opened_at = Some(baudrate);
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}

/// Delay provider that only accumulates the requested time
#[derive(Default)]
pub struct MockDelay {
    pub elapsed_ns: u64,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += ns as u64;
    }
}
