//! DWIN T5UIC1 command protocol
//!
//! Frame building and handshake-reply parsing for T5UIC1-kernel serial
//! displays, the 272x480 panels fitted to Creality E3V2-class printers.
//! The protocol is one-way: the host streams framed drawing commands and
//! the display never acknowledges them. The only display-originated
//! traffic is the four-byte reply to the bring-up handshake.
//!
//! # Frame format
//!
//! ```text
//! ┌──────────┬──────────┬───────────────┬───────────────────┐
//! │ HEADER   │ OPCODE   │ PAYLOAD       │ TAIL              │
//! │ 0xAA     │ 1 byte   │ 0-99 bytes    │ CC 33 C3 3C       │
//! └──────────┴──────────┴───────────────┴───────────────────┘
//! ```
//!
//! Multi-byte fields are big-endian. [`Frame`] holds header, opcode and
//! payload; the transport layer appends the tail when it puts the frame
//! on the wire.

#![no_std]
#![deny(unsafe_code)]

pub mod color;
pub mod command;
pub mod font;
pub mod frame;
pub mod handshake;

// Re-export the main types at crate root for convenience
pub use color::Color;
pub use command::{Command, IconStyle, Orientation, RectMode, ShiftDir, ShiftMode};
pub use font::Font;
pub use frame::{
    Frame, FrameError, DISPLAY_HEIGHT, DISPLAY_WIDTH, FRAME_CAPACITY, FRAME_HEAD, FRAME_TAIL,
};
pub use handshake::{ReplyBuffer, REPLY_CAPACITY, SENTINEL};
