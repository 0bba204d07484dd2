//! Blocking driver for DWIN T5UIC1 serial displays
//!
//! [`T5uic1`] owns the serial link and a delay provider and exposes one
//! method per display command. The controller wants paced byte
//! delivery, so every call blocks the caller for a short, bounded time.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │     T5uic1      │  one method per command
//! ├─────────────────┤
//! │    Transport    │  paced writes, handshake reads
//! ├─────────────────┤
//! │   SerialLink    │  embedded-io byte stream + link control
//! └─────────────────┘
//! ```
//!
//! Frames come from the `t5uic1-protocol` crate; this crate moves them
//! over the wire and runs the bring-up handshake.
//!
//! # Example
//!
//! ```ignore
//! let mut lcd = T5uic1::new(uart, delay);
//! if lcd.handshake()? {
//!     lcd.clear(Color::BLACK)?;
//!     lcd.draw_string(true, Font::Size8x16, Color::WHITE, Color::BLACK, 14, 7, "Ready")?;
//!     lcd.refresh()?;
//! }
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod lcd;
pub mod link;
pub mod transport;

#[cfg(test)]
mod testing;

pub use lcd::{Error, T5uic1};
pub use link::{LinkConfig, SerialLink, DEFAULT_BAUDRATE};
pub use transport::Transport;

// Re-export the protocol vocabulary so callers need only this crate
pub use t5uic1_protocol as protocol;
pub use t5uic1_protocol::{
    Color, Command, Font, IconStyle, Orientation, RectMode, ShiftDir, ShiftMode,
};
