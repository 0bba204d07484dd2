//! Serial link abstraction
//!
//! The driver talks to the display through anything that implements
//! [`SerialLink`]: the blocking `embedded-io` traits carry the data
//! path, and two extra methods cover the link control the stream traits
//! leave out.

use embedded_io::{Read, ReadReady, Write};

/// Baud rate the display ships configured for
pub const DEFAULT_BAUDRATE: u32 = 115_200;

/// Serial link configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            baudrate: DEFAULT_BAUDRATE,
        }
    }
}

/// Byte stream to the display plus link control.
///
/// `read_ready` must answer without blocking; the handshake loop polls
/// it to drain exactly what the display has sent so far and no more.
pub trait SerialLink: Read + Write + ReadReady {
    /// Open the link, or reopen it at a new baud rate
    fn open(&mut self, baudrate: u32) -> Result<(), Self::Error>;

    /// Whether the link reports an established connection.
    ///
    /// Plain UARTs can always answer `true`; USB-CDC style links
    /// answer from their enumeration state.
    fn is_connected(&self) -> bool;
}
