//! Display commands and their wire encoding
//!
//! [`Command`] covers the T5UIC1 drawing and control set. Each variant
//! serializes to one frame body through [`Command::encode`]; payload
//! layouts follow the kernel's documented field order, with 16-bit
//! fields big-endian.

use crate::color::Color;
use crate::font::Font;
use crate::frame::{Frame, FrameError, DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Command opcodes, second byte of every frame
pub mod opcode {
    pub const HANDSHAKE: u8 = 0x00;
    pub const CLEAR_SCREEN: u8 = 0x01;
    pub const DRAW_POINT: u8 = 0x02;
    pub const DRAW_LINE: u8 = 0x03;
    pub const DRAW_RECTANGLE: u8 = 0x05;
    pub const AREA_MOVE: u8 = 0x09;
    pub const DRAW_STRING: u8 = 0x11;
    pub const ICON_SHOW: u8 = 0x23;
    pub const ICON_SHOW_SRAM: u8 = 0x24;
    pub const JPG_CACHE: u8 = 0x25;
    pub const ICON_ANIMATION: u8 = 0x28;
    pub const ANIMATION_CONTROL: u8 = 0x29;
    pub const BRIGHTNESS: u8 = 0x30;
    pub const ORIENTATION: u8 = 0x34;
    pub const REFRESH: u8 = 0x3D;

    /// Only two-byte opcode in the set
    pub const JPG_SHOW_AND_CACHE: u16 = 0x2200;
}

/// Rectangle paint mode for [`Command::DrawRectangle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum RectMode {
    /// Outline only
    Outline = 0,
    /// Solid fill
    Fill = 1,
    /// Invert the covered pixels
    XorFill = 2,
}

/// Shift direction for [`Command::AreaMove`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ShiftDir {
    Left = 0,
    Right = 1,
    Up = 2,
    Down = 3,
}

/// Fill behavior for [`Command::AreaMove`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ShiftMode {
    /// Shifted-out pixels reappear at the opposite edge
    Circular = 0,
    /// Vacated pixels take the fill color
    Translate = 1,
}

/// Screen rotation for [`Command::SetOrientation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Orientation {
    #[default]
    Deg0 = 0,
    Deg90 = 1,
    Deg180 = 2,
    Deg270 = 3,
}

/// Background handling bits shared by the icon commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IconStyle {
    /// Draw the icon's own background instead of filtering it out
    pub show_background: bool,
    /// Restore the underlying area from the virtual display buffer
    pub restore_background: bool,
    /// Stronger background filtering; honored only while the
    /// background is filtered out
    pub enhanced_filter: bool,
}

impl IconStyle {
    /// Bit 7 background display, bit 6 background restore, bit 5 filter
    fn bits(self) -> u8 {
        ((self.show_background as u8) << 7)
            | ((self.restore_background as u8) << 6)
            | ((self.enhanced_filter as u8) << 5)
    }
}

/// One display command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command<'a> {
    /// Liveness query; the only command the display answers
    Handshake,
    /// Fill the whole screen with one color
    ClearScreen { color: Color },
    /// Paint a `width` x `height` dot at (x, y)
    DrawPoint {
        color: Color,
        width: u8,
        height: u8,
        x: u16,
        y: u16,
    },
    /// Straight line between two points, endpoints included
    DrawLine {
        color: Color,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
    },
    /// Rectangle spanned by two corner points
    DrawRectangle {
        mode: RectMode,
        color: Color,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
    },
    /// Shift a screen region by `distance` pixels
    AreaMove {
        mode: ShiftMode,
        dir: ShiftDir,
        distance: u16,
        fill: Color,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
    },
    /// Render text from the built-in fonts
    DrawString {
        /// Halve the advance width for ASCII glyphs
        width_adjust: bool,
        /// Paint `background` behind the glyphs
        show_background: bool,
        font: Font,
        color: Color,
        background: Color,
        x: u16,
        y: u16,
        text: &'a str,
    },
    /// Blit icon `icon` from flash icon library `library`
    ShowIcon {
        style: IconStyle,
        /// Library index, low five bits used
        library: u8,
        icon: u8,
        x: u16,
        y: u16,
    },
    /// Blit an icon previously unpacked to SRAM
    ShowIconFromSram {
        style: IconStyle,
        /// Source address in display SRAM
        address: u16,
        x: u16,
        y: u16,
    },
    /// Decompress JPEG `picture` into SRAM cache slot `slot`
    CacheJpg { slot: u8, picture: u8 },
    /// Show JPEG `picture` full screen and cache it in SRAM
    ShowAndCacheJpg { picture: u8 },
    /// Start or stop a flash-library icon animation
    IconAnimation {
        /// Animation slot, low four bits used
        animation: u8,
        enabled: bool,
        library: u8,
        /// First icon of the loop
        first: u8,
        /// Last icon of the loop
        last: u8,
        x: u16,
        y: u16,
        /// Frame interval in 10 ms units
        interval: u8,
    },
    /// Per-slot animation enable bits, one bit per slot
    AnimationControl { state: u16 },
    /// Backlight level, 0x00-0xFF
    SetBrightness { brightness: u8 },
    /// Rotate the display coordinate system
    SetOrientation { orientation: Orientation },
    /// Commit buffered drawing to the visible screen
    Refresh,
}

impl<'a> Command<'a> {
    /// Serialize into a frame body ready for the transport
    pub fn encode(&self) -> Result<Frame, FrameError> {
        let mut frame = Frame::new();
        match *self {
            Command::Handshake => {
                frame.push_byte(opcode::HANDSHAKE)?;
            }
            Command::ClearScreen { color } => {
                frame.push_byte(opcode::CLEAR_SCREEN)?;
                frame.push_word(color.0)?;
            }
            Command::DrawPoint {
                color,
                width,
                height,
                x,
                y,
            } => {
                frame.push_byte(opcode::DRAW_POINT)?;
                frame.push_word(color.0)?;
                frame.push_byte(width)?;
                frame.push_byte(height)?;
                frame.push_word(x)?;
                frame.push_word(y)?;
            }
            Command::DrawLine {
                color,
                x0,
                y0,
                x1,
                y1,
            } => {
                frame.push_byte(opcode::DRAW_LINE)?;
                frame.push_word(color.0)?;
                frame.push_word(x0)?;
                frame.push_word(y0)?;
                frame.push_word(x1)?;
                frame.push_word(y1)?;
            }
            Command::DrawRectangle {
                mode,
                color,
                x0,
                y0,
                x1,
                y1,
            } => {
                frame.push_byte(opcode::DRAW_RECTANGLE)?;
                frame.push_byte(mode as u8)?;
                frame.push_word(color.0)?;
                frame.push_word(x0)?;
                frame.push_word(y0)?;
                frame.push_word(x1)?;
                frame.push_word(y1)?;
            }
            Command::AreaMove {
                mode,
                dir,
                distance,
                fill,
                x0,
                y0,
                x1,
                y1,
            } => {
                frame.push_byte(opcode::AREA_MOVE)?;
                // Bit 7 mode, bits 1-0 direction
                frame.push_byte(((mode as u8) << 7) | dir as u8)?;
                frame.push_word(distance)?;
                frame.push_word(fill.0)?;
                frame.push_word(x0)?;
                frame.push_word(y0)?;
                frame.push_word(x1)?;
                frame.push_word(y1)?;
            }
            Command::DrawString {
                width_adjust,
                show_background,
                font,
                color,
                background,
                x,
                y,
                text,
            } => {
                frame.push_byte(opcode::DRAW_STRING)?;
                // Bit 7 width adjust, bit 6 background show, bits 3-0 font
                frame.push_byte(
                    ((width_adjust as u8) << 7) | ((show_background as u8) << 6) | font as u8,
                )?;
                frame.push_word(color.0)?;
                frame.push_word(background.0)?;
                frame.push_word(x)?;
                frame.push_word(y)?;
                // Whatever does not fit the frame is dropped
                frame.push_text(text, usize::MAX);
            }
            Command::ShowIcon {
                style,
                library,
                icon,
                x,
                y,
            } => {
                // Icon placement past the panel edge is undefined on the
                // controller; clamp to the visible area
                let x = x.min(DISPLAY_WIDTH - 1);
                let y = y.min(DISPLAY_HEIGHT - 1);
                frame.push_byte(opcode::ICON_SHOW)?;
                frame.push_word(x)?;
                frame.push_word(y)?;
                frame.push_byte(style.bits() | (library & 0x1F))?;
                frame.push_byte(icon)?;
            }
            Command::ShowIconFromSram { style, address, x, y } => {
                let x = x.min(DISPLAY_WIDTH - 1);
                let y = y.min(DISPLAY_HEIGHT - 1);
                frame.push_byte(opcode::ICON_SHOW_SRAM)?;
                frame.push_word(x)?;
                frame.push_word(y)?;
                frame.push_byte(style.bits())?;
                frame.push_word(address)?;
            }
            Command::CacheJpg { slot, picture } => {
                frame.push_byte(opcode::JPG_CACHE)?;
                frame.push_byte(slot)?;
                frame.push_byte(picture)?;
            }
            Command::ShowAndCacheJpg { picture } => {
                frame.push_word(opcode::JPG_SHOW_AND_CACHE)?;
                frame.push_byte(picture)?;
            }
            Command::IconAnimation {
                animation,
                enabled,
                library,
                first,
                last,
                x,
                y,
                interval,
            } => {
                let x = x.min(DISPLAY_WIDTH - 1);
                let y = y.min(DISPLAY_HEIGHT - 1);
                frame.push_byte(opcode::ICON_ANIMATION)?;
                frame.push_word(x)?;
                frame.push_word(y)?;
                // Bit 7 running, bit 6 always set, bits 5-4 unused,
                // bits 3-0 slot
                frame.push_byte(((enabled as u8) << 7) | 0x40 | (animation & 0x0F))?;
                frame.push_byte(library)?;
                frame.push_byte(first)?;
                frame.push_byte(last)?;
                frame.push_byte(interval)?;
            }
            Command::AnimationControl { state } => {
                frame.push_byte(opcode::ANIMATION_CONTROL)?;
                frame.push_word(state)?;
            }
            Command::SetBrightness { brightness } => {
                frame.push_byte(opcode::BRIGHTNESS)?;
                frame.push_byte(brightness)?;
            }
            Command::SetOrientation { orientation } => {
                frame.push_byte(opcode::ORIENTATION)?;
                // Unlock preamble required by the kernel
                frame.push_byte(0x5A)?;
                frame.push_byte(0xA5)?;
                frame.push_byte(orientation as u8)?;
            }
            Command::Refresh => {
                frame.push_byte(opcode::REFRESH)?;
            }
        }
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{FRAME_CAPACITY, FRAME_HEAD};

    #[test]
    fn test_handshake_frame() {
        let frame = Command::Handshake.encode().unwrap();
        assert_eq!(frame.as_bytes(), &[FRAME_HEAD, 0x00]);
    }

    #[test]
    fn test_clear_screen() {
        let frame = Command::ClearScreen {
            color: Color(0x1234),
        }
        .encode()
        .unwrap();
        assert_eq!(frame.as_bytes(), &[0xAA, 0x01, 0x12, 0x34]);
    }

    #[test]
    fn test_draw_point() {
        let frame = Command::DrawPoint {
            color: Color::RED,
            width: 2,
            height: 3,
            x: 0x0105,
            y: 0x01C0,
        }
        .encode()
        .unwrap();
        assert_eq!(
            frame.as_bytes(),
            &[0xAA, 0x02, 0xF8, 0x00, 0x02, 0x03, 0x01, 0x05, 0x01, 0xC0]
        );
    }

    #[test]
    fn test_draw_line() {
        let frame = Command::DrawLine {
            color: Color(0xFFFF),
            x0: 10,
            y0: 20,
            x1: 260,
            y1: 400,
        }
        .encode()
        .unwrap();
        assert_eq!(
            frame.as_bytes(),
            &[0xAA, 0x03, 0xFF, 0xFF, 0x00, 0x0A, 0x00, 0x14, 0x01, 0x04, 0x01, 0x90]
        );
    }

    #[test]
    fn test_draw_rectangle_modes() {
        for (mode, byte) in [
            (RectMode::Outline, 0x00),
            (RectMode::Fill, 0x01),
            (RectMode::XorFill, 0x02),
        ] {
            let frame = Command::DrawRectangle {
                mode,
                color: Color(0x0001),
                x0: 1,
                y0: 2,
                x1: 3,
                y1: 4,
            }
            .encode()
            .unwrap();
            assert_eq!(
                frame.as_bytes(),
                &[0xAA, 0x05, byte, 0x00, 0x01, 0x00, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04]
            );
        }
    }

    #[test]
    fn test_area_move_packs_mode_and_dir() {
        let frame = Command::AreaMove {
            mode: ShiftMode::Translate,
            dir: ShiftDir::Down,
            distance: 8,
            fill: Color::BLACK,
            x0: 0,
            y0: 100,
            x1: 271,
            y1: 200,
        }
        .encode()
        .unwrap();
        let bytes = frame.as_bytes();
        assert_eq!(bytes[1], 0x09);
        assert_eq!(bytes[2], 0x83);
        // Mode and direction decode back out of the packed byte
        assert_eq!(bytes[2] >> 7, ShiftMode::Translate as u8);
        assert_eq!(bytes[2] & 0x03, ShiftDir::Down as u8);
        assert_eq!(&bytes[3..5], &[0x00, 0x08]);
        assert_eq!(&bytes[5..7], &[0x00, 0x00]);
        assert_eq!(&bytes[11..13], &[0x01, 0x0F]);
    }

    #[test]
    fn test_draw_string_layout() {
        let frame = Command::DrawString {
            width_adjust: false,
            show_background: true,
            font: Font::Size8x16,
            color: Color(0xFFFF),
            background: Color(0x0000),
            x: 14,
            y: 7,
            text: "OK",
        }
        .encode()
        .unwrap();
        assert_eq!(
            frame.as_bytes(),
            &[0xAA, 0x11, 0x41, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x0E, 0x00, 0x07, b'O', b'K']
        );
    }

    #[test]
    fn test_draw_string_width_adjust_bit() {
        let frame = Command::DrawString {
            width_adjust: true,
            show_background: false,
            font: Font::Size6x12,
            color: Color(0x0000),
            background: Color(0x0000),
            x: 0,
            y: 0,
            text: "",
        }
        .encode()
        .unwrap();
        assert_eq!(frame.as_bytes()[2], 0x80);
    }

    #[test]
    fn test_draw_string_truncates_to_capacity() {
        let long = [b'a'; FRAME_CAPACITY];
        let frame = Command::DrawString {
            width_adjust: false,
            show_background: false,
            font: Font::Size8x16,
            color: Color(0xFFFF),
            background: Color(0x0000),
            x: 0,
            y: 0,
            text: core::str::from_utf8(&long).unwrap(),
        }
        .encode()
        .unwrap();
        assert_eq!(frame.len(), FRAME_CAPACITY);
    }

    #[test]
    fn test_show_icon() {
        let frame = Command::ShowIcon {
            style: IconStyle {
                show_background: true,
                restore_background: false,
                enhanced_filter: false,
            },
            library: 7,
            icon: 42,
            x: 100,
            y: 200,
        }
        .encode()
        .unwrap();
        assert_eq!(
            frame.as_bytes(),
            &[0xAA, 0x23, 0x00, 0x64, 0x00, 0xC8, 0x87, 42]
        );
    }

    #[test]
    fn test_show_icon_clamps_to_panel() {
        let frame = Command::ShowIcon {
            style: IconStyle::default(),
            library: 0,
            icon: 1,
            x: DISPLAY_WIDTH + 50,
            y: DISPLAY_HEIGHT + 50,
        }
        .encode()
        .unwrap();
        let bytes = frame.as_bytes();
        // 271 and 479
        assert_eq!(&bytes[2..6], &[0x01, 0x0F, 0x01, 0xDF]);
    }

    #[test]
    fn test_show_icon_from_sram() {
        let frame = Command::ShowIconFromSram {
            style: IconStyle {
                show_background: false,
                restore_background: true,
                enhanced_filter: true,
            },
            address: 0x1000,
            x: 0,
            y: 0,
        }
        .encode()
        .unwrap();
        assert_eq!(
            frame.as_bytes(),
            &[0xAA, 0x24, 0x00, 0x00, 0x00, 0x00, 0x60, 0x10, 0x00]
        );
    }

    #[test]
    fn test_jpg_commands() {
        let cache = Command::CacheJpg {
            slot: 3,
            picture: 9,
        }
        .encode()
        .unwrap();
        assert_eq!(cache.as_bytes(), &[0xAA, 0x25, 0x03, 0x09]);

        let show = Command::ShowAndCacheJpg { picture: 1 }.encode().unwrap();
        assert_eq!(show.as_bytes(), &[0xAA, 0x22, 0x00, 0x01]);
    }

    #[test]
    fn test_icon_animation() {
        let frame = Command::IconAnimation {
            animation: 2,
            enabled: true,
            library: 4,
            first: 10,
            last: 19,
            x: 50,
            y: 60,
            interval: 5,
        }
        .encode()
        .unwrap();
        assert_eq!(
            frame.as_bytes(),
            &[0xAA, 0x28, 0x00, 0x32, 0x00, 0x3C, 0xC2, 0x04, 0x0A, 0x13, 0x05]
        );
    }

    #[test]
    fn test_icon_animation_slot_is_low_nibble() {
        // Bits 5-4 of the flag byte stay clear even for oversized ids
        for animation in [0x0F, 0x3F] {
            let frame = Command::IconAnimation {
                animation,
                enabled: false,
                library: 0,
                first: 0,
                last: 0,
                x: 0,
                y: 0,
                interval: 0,
            }
            .encode()
            .unwrap();
            assert_eq!(frame.as_bytes()[6], 0x4F);
        }
    }

    #[test]
    fn test_animation_control_bits() {
        let frame = Command::AnimationControl { state: 0x0005 }.encode().unwrap();
        let bytes = frame.as_bytes();
        assert_eq!(bytes, &[0xAA, 0x29, 0x00, 0x05]);
        // Slots 0 and 2 run, slot 1 does not
        let state = u16::from_be_bytes([bytes[2], bytes[3]]);
        assert_ne!(state & (1 << 0), 0);
        assert_eq!(state & (1 << 1), 0);
        assert_ne!(state & (1 << 2), 0);
    }

    #[test]
    fn test_brightness() {
        let frame = Command::SetBrightness { brightness: 0x1F }.encode().unwrap();
        assert_eq!(frame.as_bytes(), &[0xAA, 0x30, 0x1F]);
    }

    #[test]
    fn test_orientation_carries_unlock_preamble() {
        let frame = Command::SetOrientation {
            orientation: Orientation::Deg270,
        }
        .encode()
        .unwrap();
        assert_eq!(frame.as_bytes(), &[0xAA, 0x34, 0x5A, 0xA5, 0x03]);
    }

    #[test]
    fn test_refresh() {
        let frame = Command::Refresh.encode().unwrap();
        assert_eq!(frame.as_bytes(), &[0xAA, 0x3D]);
    }
}
