//! Driver handle for a T5UIC1-kernel display

use embedded_hal::delay::DelayNs;
use t5uic1_protocol::command::Command;
use t5uic1_protocol::frame::FrameError;
use t5uic1_protocol::handshake::ReplyBuffer;
use t5uic1_protocol::{Color, Font, IconStyle, Orientation, RectMode, ShiftDir, ShiftMode};

use crate::link::{LinkConfig, SerialLink};
use crate::transport::Transport;

/// How long [`T5uic1::handshake`] waits for the link to come up
const CONNECT_TIMEOUT_MS: u32 = 1000;

/// Pause between the query and the first reply read
const QUERY_SETTLE_MS: u32 = 10;

/// Pause after each accepted reply byte
const REPLY_POLL_MS: u32 = 10;

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The command could not be encoded into a frame
    Frame(FrameError),
    /// The serial link failed
    Link(E),
}

impl<E> From<FrameError> for Error<E> {
    fn from(err: FrameError) -> Self {
        Error::Frame(err)
    }
}

/// Driver for a T5UIC1-kernel display.
///
/// Owns the serial link and the delay provider. Every call blocks until
/// its frame is on the wire; hosts with concurrent callers must put
/// their own mutual exclusion around the handle.
pub struct T5uic1<S, D> {
    transport: Transport<S>,
    delay: D,
    config: LinkConfig,
    connected: bool,
}

impl<S: SerialLink, D: DelayNs> T5uic1<S, D> {
    /// Driver over `port` at the display's stock baud rate
    pub fn new(port: S, delay: D) -> Self {
        Self::with_config(port, delay, LinkConfig::default())
    }

    pub fn with_config(port: S, delay: D, config: LinkConfig) -> Self {
        Self {
            transport: Transport::new(port),
            delay,
            config,
            connected: false,
        }
    }

    /// Whether the last [`handshake`](Self::handshake) succeeded
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Give the serial link and delay provider back
    pub fn release(self) -> (S, D) {
        (self.transport.release(), self.delay)
    }

    /// Bring-up handshake.
    ///
    /// Opens the link, sends the liveness query and collects the reply
    /// window. `Ok(true)` means the display answered `A5 00 'O' 'K'`;
    /// `Ok(false)` means it stayed silent or answered garbage, which on
    /// this hardware usually means no display is fitted. `Err` is a
    /// fault on the local link, never a verdict about the display.
    pub fn handshake(&mut self) -> Result<bool, Error<S::Error>> {
        // A link that never reports ready is not fatal by itself; the
        // read loop below sees silence and reports the display absent
        self.transport
            .connect(self.config.baudrate, CONNECT_TIMEOUT_MS, &mut self.delay)
            .map_err(Error::Link)?;

        self.send(Command::Handshake)?;
        self.delay.delay_ms(QUERY_SETTLE_MS);

        let mut reply = ReplyBuffer::new();
        while !reply.is_full() {
            match self.transport.poll_byte().map_err(Error::Link)? {
                Some(byte) => {
                    // The pause lets the rest of the reply trickle in
                    if reply.push(byte) {
                        self.delay.delay_ms(REPLY_POLL_MS);
                    }
                }
                None => break,
            }
        }

        self.connected = reply.is_ack();
        Ok(self.connected)
    }

    /// Fill the whole screen with `color`
    pub fn clear(&mut self, color: Color) -> Result<(), Error<S::Error>> {
        self.send(Command::ClearScreen { color })
    }

    /// Paint a dot at (x, y); `width` and `height` span 1-15 pixels each
    pub fn draw_point(
        &mut self,
        color: Color,
        width: u8,
        height: u8,
        x: u16,
        y: u16,
    ) -> Result<(), Error<S::Error>> {
        self.send(Command::DrawPoint {
            color,
            width,
            height,
            x,
            y,
        })
    }

    /// Draw a line from (x0, y0) to (x1, y1), endpoints included
    pub fn draw_line(
        &mut self,
        color: Color,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
    ) -> Result<(), Error<S::Error>> {
        self.send(Command::DrawLine { color, x0, y0, x1, y1 })
    }

    /// Draw the rectangle spanned by (x0, y0) and (x1, y1)
    pub fn draw_rectangle(
        &mut self,
        mode: RectMode,
        color: Color,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
    ) -> Result<(), Error<S::Error>> {
        self.send(Command::DrawRectangle {
            mode,
            color,
            x0,
            y0,
            x1,
            y1,
        })
    }

    /// Shift the region spanned by (x0, y0) and (x1, y1) by `distance`
    /// pixels. In [`ShiftMode::Translate`] the vacated strip is painted
    /// with `fill`; in [`ShiftMode::Circular`] the shifted-out pixels
    /// come back on the opposite edge.
    #[allow(clippy::too_many_arguments)]
    pub fn move_area(
        &mut self,
        mode: ShiftMode,
        dir: ShiftDir,
        distance: u16,
        fill: Color,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
    ) -> Result<(), Error<S::Error>> {
        self.send(Command::AreaMove {
            mode,
            dir,
            distance,
            fill,
            x0,
            y0,
            x1,
            y1,
        })
    }

    /// Render `text` at (x, y) with one of the built-in fonts.
    ///
    /// With `show_background` the glyph cells are painted `background`
    /// first, which is how menus overwrite stale text. Text that does
    /// not fit one frame is cut off at the frame boundary.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_string(
        &mut self,
        show_background: bool,
        font: Font,
        color: Color,
        background: Color,
        x: u16,
        y: u16,
        text: &str,
    ) -> Result<(), Error<S::Error>> {
        self.send(Command::DrawString {
            width_adjust: false,
            show_background,
            font,
            color,
            background,
            x,
            y,
            text,
        })
    }

    /// Raster a small degree symbol with its upper-left corner at (x, y)
    pub fn draw_degree_symbol(
        &mut self,
        color: Color,
        x: u16,
        y: u16,
    ) -> Result<(), Error<S::Error>> {
        const DOTS: [(u16, u16); 8] = [
            (1, 0),
            (2, 0),
            (0, 1),
            (3, 1),
            (0, 2),
            (3, 2),
            (1, 3),
            (2, 3),
        ];
        for (dx, dy) in DOTS {
            self.draw_point(color, 1, 1, x.saturating_add(dx), y.saturating_add(dy))?;
        }
        Ok(())
    }

    /// Blit icon `icon` from flash icon library `library` at (x, y).
    ///
    /// Coordinates past the panel edge are clamped to the visible area.
    pub fn show_icon(
        &mut self,
        style: IconStyle,
        library: u8,
        icon: u8,
        x: u16,
        y: u16,
    ) -> Result<(), Error<S::Error>> {
        self.send(Command::ShowIcon {
            style,
            library,
            icon,
            x,
            y,
        })
    }

    /// Blit an icon previously unpacked to display SRAM at `address`
    pub fn show_icon_from_sram(
        &mut self,
        style: IconStyle,
        address: u16,
        x: u16,
        y: u16,
    ) -> Result<(), Error<S::Error>> {
        self.send(Command::ShowIconFromSram { style, address, x, y })
    }

    /// Decompress JPEG `picture` into SRAM cache slot `slot`
    pub fn cache_jpg(&mut self, slot: u8, picture: u8) -> Result<(), Error<S::Error>> {
        self.send(Command::CacheJpg { slot, picture })
    }

    /// Show JPEG `picture` full screen and keep it cached in SRAM
    pub fn show_and_cache_jpg(&mut self, picture: u8) -> Result<(), Error<S::Error>> {
        self.send(Command::ShowAndCacheJpg { picture })
    }

    /// Run icons `first..=last` of `library` as animation slot
    /// `animation`, one frame every `interval` x 10 ms
    #[allow(clippy::too_many_arguments)]
    pub fn icon_animation(
        &mut self,
        animation: u8,
        enabled: bool,
        library: u8,
        first: u8,
        last: u8,
        x: u16,
        y: u16,
        interval: u8,
    ) -> Result<(), Error<S::Error>> {
        self.send(Command::IconAnimation {
            animation,
            enabled,
            library,
            first,
            last,
            x,
            y,
            interval,
        })
    }

    /// Start and stop animation slots in one go, one bit per slot
    pub fn animation_control(&mut self, state: u16) -> Result<(), Error<S::Error>> {
        self.send(Command::AnimationControl { state })
    }

    /// Set the backlight level; 0x00 turns the backlight off
    pub fn set_brightness(&mut self, brightness: u8) -> Result<(), Error<S::Error>> {
        self.send(Command::SetBrightness { brightness })
    }

    /// Rotate the display coordinate system
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<(), Error<S::Error>> {
        self.send(Command::SetOrientation { orientation })
    }

    /// Commit buffered drawing to the visible screen
    pub fn refresh(&mut self) -> Result<(), Error<S::Error>> {
        self.send(Command::Refresh)
    }

    fn send(&mut self, command: Command<'_>) -> Result<(), Error<S::Error>> {
        let frame = command.encode()?;
        self.transport
            .send(&frame, &mut self.delay)
            .map_err(Error::Link)
    }
}
