//! embedded-graphics support
//!
//! Implements [`DrawTarget`] for [`Framebuffer`], so anything from the
//! embedded-graphics ecosystem (text, primitives, images) renders through the
//! same clipped pixel path as the native drawing calls. Out-of-bounds pixels
//! are dropped rather than reported, matching the native primitives, so
//! drawing is infallible.
//!
//! Enabled with the `graphics` feature (on by default).
//!
//! ## Example
//!
//! ```
//! use embedded_graphics::prelude::*;
//! use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
//! use st7701::{Framebuffer, Rgb565};
//!
//! let mut store = [0u16; 8 * 8];
//! let mut fb = Framebuffer::new(&mut store, 8, 8).unwrap();
//!
//! Rectangle::new(Point::new(1, 1), Size::new(3, 2))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
//!     .draw(&mut fb)
//!     .unwrap();
//! ```

use core::convert::Infallible;

use embedded_graphics_core::Pixel;
use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{OriginDimensions, Size};

use crate::color::Rgb565;
use crate::framebuffer::Framebuffer;

impl OriginDimensions for Framebuffer<'_> {
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}

impl DrawTarget for Framebuffer<'_> {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.pixel(point.x, point.y, color);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

    #[test]
    fn test_filled_rectangle_lands_in_store() {
        let mut store = [0u16; 6 * 4];
        let mut fb = Framebuffer::new(&mut store, 6, 4).unwrap();

        Rectangle::new(Point::new(1, 1), Size::new(2, 2))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::WHITE))
            .draw(&mut fb)
            .unwrap();

        for (x, y) in [(1, 1), (2, 1), (1, 2), (2, 2)] {
            assert_eq!(fb.as_pixels()[y * 6 + x], Rgb565::WHITE.raw());
        }
        assert_eq!(
            fb.as_pixels().iter().filter(|px| **px != 0).count(),
            4
        );
    }

    #[test]
    fn test_out_of_bounds_drawing_is_clipped() {
        let mut store = [0u16; 4 * 4];
        let mut fb = Framebuffer::new(&mut store, 4, 4).unwrap();

        Line::new(Point::new(-2, 0), Point::new(6, 0))
            .into_styled(PrimitiveStyle::with_stroke(Rgb565::RED, 1))
            .draw(&mut fb)
            .unwrap();

        for x in 0..4 {
            assert_eq!(fb.as_pixels()[x], Rgb565::RED.raw());
        }
        assert!(fb.as_pixels()[4..].iter().all(|px| *px == 0));
    }

    #[test]
    fn test_size_follows_rotation() {
        let mut store = [0u16; 3 * 2];
        let mut fb = Framebuffer::new(&mut store, 3, 2).unwrap();
        assert_eq!(fb.size(), Size::new(3, 2));
        fb.rotate(90).unwrap();
        assert_eq!(fb.size(), Size::new(2, 3));
    }
}
