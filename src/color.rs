//! RGB565 packed color type
//!
//! The ST7701 parallel interface is configured for 16-bit packed color
//! (`COLMOD = 0x55`): 5 bits red, 6 bits green, 5 bits blue, packed
//! `RRRRR GGGGGG BBBBB` in a single `u16`.
//!
//! ## Conversion
//!
//! [`Rgb565::from_rgb888`] truncates an 8:8:8 triple to the top 5/6/5 bits.
//! The conversion is one-directional; going back to RGB888 loses precision
//! and is not provided.
//!
//! ## Example
//!
//! ```
//! use st7701::Rgb565;
//!
//! assert_eq!(Rgb565::from_rgb888(0xFF, 0x00, 0x00), Rgb565::RED);
//! assert_eq!(Rgb565::from_rgb888(0x00, 0xFF, 0x00), Rgb565::GREEN);
//! assert_eq!(Rgb565::BLUE.raw(), 0x001F);
//! ```

/// A packed RGB565 color value
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Rgb565(u16);

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Rgb565 {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU16;
}

impl Rgb565 {
    /// All bits clear
    pub const BLACK: Self = Self(0x0000);
    /// All bits set
    pub const WHITE: Self = Self(0xFFFF);
    /// Full red channel
    pub const RED: Self = Self(0xF800);
    /// Full green channel
    pub const GREEN: Self = Self(0x07E0);
    /// Full blue channel
    pub const BLUE: Self = Self(0x001F);

    /// Wrap an already-packed RGB565 value
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Get the packed 16-bit value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Truncate an RGB888 triple down to RGB565
    ///
    /// Keeps the top 5 bits of red, 6 of green and 5 of blue.
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3))
    }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Rgb565> for u16 {
    fn from(color: Rgb565) -> Self {
        color.0
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Rgb565> for Rgb565 {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb565) -> Self {
        use embedded_graphics_core::prelude::IntoStorage;
        Self(color.into_storage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncation_keeps_top_bits() {
        // 0xFF in every channel saturates every field
        assert_eq!(Rgb565::from_rgb888(0xFF, 0xFF, 0xFF), Rgb565::WHITE);
        // Low bits below the kept field are discarded
        assert_eq!(Rgb565::from_rgb888(0x07, 0x03, 0x07), Rgb565::BLACK);
        assert_eq!(Rgb565::from_rgb888(0x08, 0x00, 0x00).raw(), 0x0800);
        assert_eq!(Rgb565::from_rgb888(0x00, 0x04, 0x00).raw(), 0x0020);
        assert_eq!(Rgb565::from_rgb888(0x00, 0x00, 0x08).raw(), 0x0001);
    }

    #[test]
    fn test_named_constants() {
        assert_eq!(Rgb565::BLACK.raw(), 0x0000);
        assert_eq!(Rgb565::WHITE.raw(), 0xFFFF);
        assert_eq!(Rgb565::RED.raw(), 0xF800);
        assert_eq!(Rgb565::GREEN.raw(), 0x07E0);
        assert_eq!(Rgb565::BLUE.raw(), 0x001F);
    }

    #[test]
    fn test_raw_round_trip() {
        let c = Rgb565::from_raw(0x1234);
        assert_eq!(u16::from(c), 0x1234);
        assert_eq!(Rgb565::from(0x1234u16), c);
    }
}
