//! Paced frame delivery and the handshake-only receive path

use embedded_hal::delay::DelayNs;
use t5uic1_protocol::frame::{Frame, FRAME_TAIL};

use crate::link::SerialLink;

/// Gap between consecutive bytes on the wire, in microseconds.
///
/// The controller's input path loses bytes that arrive back to back.
pub const BYTE_GAP_US: u32 = 1;

/// Step size for the connect busy-wait
const CONNECT_POLL_MS: u32 = 1;

/// Owns the serial link and moves frames across it
pub struct Transport<S> {
    port: S,
}

impl<S: SerialLink> Transport<S> {
    pub fn new(port: S) -> Self {
        Self { port }
    }

    /// Open the link and wait for it to report a connection.
    ///
    /// Blocks in 1 ms steps up to `timeout_ms`. `Ok(false)` means the
    /// link never came up; callers may still proceed and let the
    /// handshake fail on silence instead.
    pub fn connect(
        &mut self,
        baudrate: u32,
        timeout_ms: u32,
        delay: &mut impl DelayNs,
    ) -> Result<bool, S::Error> {
        self.port.open(baudrate)?;
        let mut waited = 0;
        while !self.port.is_connected() {
            if waited >= timeout_ms {
                return Ok(false);
            }
            delay.delay_ms(CONNECT_POLL_MS);
            waited += CONNECT_POLL_MS;
        }
        Ok(true)
    }

    /// Write the frame body and the fixed tail, one byte at a time
    /// with [`BYTE_GAP_US`] after each byte.
    ///
    /// The display never acknowledges a frame; an `Err` here is a
    /// local link fault, not a protocol failure.
    pub fn send(&mut self, frame: &Frame, delay: &mut impl DelayNs) -> Result<(), S::Error> {
        for &byte in frame.as_bytes() {
            self.write_paced(byte, delay)?;
        }
        for &byte in &FRAME_TAIL {
            self.write_paced(byte, delay)?;
        }
        Ok(())
    }

    fn write_paced(&mut self, byte: u8, delay: &mut impl DelayNs) -> Result<(), S::Error> {
        self.port.write_all(&[byte])?;
        delay.delay_us(BYTE_GAP_US);
        Ok(())
    }

    /// Give the serial link back
    pub fn release(self) -> S {
        self.port
    }

    /// Read one byte if the display has sent one
    pub fn poll_byte(&mut self) -> Result<Option<u8>, S::Error> {
        if !self.port.read_ready()? {
            return Ok(None);
        }
        let mut byte = [0u8; 1];
        let n = self.port.read(&mut byte)?;
        Ok((n == 1).then_some(byte[0]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockDelay, MockLink};
    use t5uic1_protocol::Command;

    #[test]
    fn test_send_appends_tail() {
        let mut transport = Transport::new(MockLink::new());
        let mut delay = MockDelay::default();
        let frame = Command::Refresh.encode().unwrap();
        transport.send(&frame, &mut delay).unwrap();
        assert_eq!(
            transport.port.written.as_slice(),
            &[0xAA, 0x3D, 0xCC, 0x33, 0xC3, 0x3C]
        );
    }

    #[test]
    fn test_send_paces_every_byte() {
        let mut transport = Transport::new(MockLink::new());
        let mut delay = MockDelay::default();
        let frame = Command::Refresh.encode().unwrap();
        transport.send(&frame, &mut delay).unwrap();
        // Two body bytes plus four tail bytes, one microsecond each
        assert_eq!(delay.elapsed_ns, 6_000);
    }

    #[test]
    fn test_connect_opens_at_requested_baudrate() {
        let mut transport = Transport::new(MockLink::new());
        let mut delay = MockDelay::default();
        let up = transport.connect(115_200, 1000, &mut delay).unwrap();
        assert!(up);
        assert_eq!(transport.port.opened_at, Some(115_200));
        assert_eq!(delay.elapsed_ns, 0);
    }

    #[test]
    fn test_connect_times_out_without_connection() {
        let mut link = MockLink::new();
        link.connected = false;
        let mut transport = Transport::new(link);
        let mut delay = MockDelay::default();
        let up = transport.connect(115_200, 50, &mut delay).unwrap();
        assert!(!up);
        // 50 poll steps of 1 ms each
        assert_eq!(delay.elapsed_ns, 50_000_000);
    }

    #[test]
    fn test_poll_byte_drains_then_reports_empty() {
        let mut transport = Transport::new(MockLink::with_reply(&[0xA5, 0x00]));
        assert_eq!(transport.poll_byte().unwrap(), Some(0xA5));
        assert_eq!(transport.poll_byte().unwrap(), Some(0x00));
        assert_eq!(transport.poll_byte().unwrap(), None);
    }
}
