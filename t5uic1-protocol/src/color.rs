//! RGB565 color values

/// 16-bit color in the RGB565 layout the controller consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xFFFF);
    pub const RED: Color = Color::from_rgb(0x1F, 0x00, 0x00);
    pub const GREEN: Color = Color::from_rgb(0x00, 0x3F, 0x00);
    pub const BLUE: Color = Color::from_rgb(0x00, 0x00, 0x1F);
    pub const YELLOW: Color = Color::from_rgb(0x1F, 0x3F, 0x00);
    pub const CYAN: Color = Color::from_rgb(0x00, 0x3F, 0x1F);
    pub const MAGENTA: Color = Color::from_rgb(0x1F, 0x00, 0x1F);

    /// Pack 5-6-5 channel values: `(r << 11) | (g << 5) | b`.
    ///
    /// Out-of-range channels saturate at their field width (red and
    /// blue at 31, green at 63).
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r = if r > 0x1F { 0x1F } else { r };
        let g = if g > 0x3F { 0x3F } else { g };
        let b = if b > 0x1F { 0x1F } else { b };
        Color(((r as u16) << 11) | ((g as u16) << 5) | b as u16)
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Color(raw)
    }
}
