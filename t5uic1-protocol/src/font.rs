//! Font size selectors for the string command

/// Character cell sizes supported by the T5UIC1 kernel.
///
/// The wire value occupies the low nibble of the string command's flag
/// byte. Cells are twice as tall as they are wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Font {
    Size6x12 = 0x00,
    #[default]
    Size8x16 = 0x01,
    Size10x20 = 0x02,
    Size12x24 = 0x03,
    Size14x28 = 0x04,
    Size16x32 = 0x05,
    Size20x40 = 0x06,
    Size24x48 = 0x07,
    Size28x56 = 0x08,
    Size32x64 = 0x09,
}

impl Font {
    /// Glyph cell width in pixels
    pub const fn width(self) -> u16 {
        match self {
            Font::Size6x12 => 6,
            Font::Size8x16 => 8,
            Font::Size10x20 => 10,
            Font::Size12x24 => 12,
            Font::Size14x28 => 14,
            Font::Size16x32 => 16,
            Font::Size20x40 => 20,
            Font::Size24x48 => 24,
            Font::Size28x56 => 28,
            Font::Size32x64 => 32,
        }
    }

    /// Glyph cell height in pixels
    pub const fn height(self) -> u16 {
        self.width() * 2
    }
}
