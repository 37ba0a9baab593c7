//! Clipped drawing primitives over a borrowed RGB565 buffer
//!
//! [`Framebuffer`] wraps a borrowed `&mut [u16]` store together with its
//! logical width and height. The store is typically owned by an external DMA
//! scanout engine that re-reads it continuously; this layer performs no
//! synchronization with that reader, so multi-pixel operations can be
//! observed mid-update (visible tearing). That is an accepted limitation,
//! documented here rather than hidden behind a lock.
//!
//! All drawing operations accept possibly out-of-range geometry and silently
//! clip it to the visible area, so calls compose without bounds pre-checks.
//! The one input-validation failure in this layer is [`Framebuffer::blit`]'s
//! undersized-source check.
//!
//! ## Example
//!
//! ```
//! use st7701::{Framebuffer, Rgb565};
//!
//! let mut store = [0u16; 10 * 10];
//! let mut fb = Framebuffer::new(&mut store, 10, 10).unwrap();
//!
//! fb.fill(Rgb565::BLUE);
//! fb.fill_rect(-2, 0, 5, 3, Rgb565::RED); // clipped to columns 0..3
//! fb.pixel(100, 100, Rgb565::GREEN); // silently dropped
//! ```

use crate::color::Rgb565;
use crate::error::GeometryError;
use crate::rotate::rotate_in_place;

/// Clip a 1-D span against `[0, limit)`
///
/// Returns the clipped start, the clipped length, and how much was trimmed
/// off the leading edge (the source-origin adjustment for blits), or `None`
/// when nothing survives. Arithmetic runs in `i64` so extreme coordinates
/// clip instead of wrapping.
fn clip_span(start: i32, extent: i32, limit: usize) -> Option<(usize, usize, usize)> {
    let mut start = i64::from(start);
    let mut extent = i64::from(extent);
    let mut skipped = 0i64;
    if start < 0 {
        skipped = -start;
        extent -= skipped;
        start = 0;
    }
    let limit = limit as i64;
    if start >= limit {
        return None;
    }
    if start + extent > limit {
        extent = limit - start;
    }
    if extent <= 0 {
        return None;
    }
    Some((start as usize, extent as usize, skipped as usize))
}

/// A borrowed packed-RGB565 pixel buffer with logical dimensions
///
/// Invariant: `store.len() == width * height` at all times. Rotation updates
/// the dimension pair only after the in-place permutation has completed, so a
/// reader holding `&self` never observes new dimensions over un-permuted
/// data.
pub struct Framebuffer<'a> {
    /// Pixel store, row-major
    store: &'a mut [u16],
    /// Logical width in pixels
    width: usize,
    /// Logical height in pixels
    height: usize,
}

impl<'a> Framebuffer<'a> {
    /// Wrap a borrowed store with the given logical dimensions
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::SizeMismatch` if `store.len() != width * height`.
    pub fn new(store: &'a mut [u16], width: usize, height: usize) -> Result<Self, GeometryError> {
        let expected = width * height;
        if store.len() != expected {
            return Err(GeometryError::SizeMismatch {
                expected,
                provided: store.len(),
            });
        }
        Ok(Self {
            store,
            width,
            height,
        })
    }

    /// Current logical width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Current logical height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read access to the pixel store
    pub fn as_pixels(&self) -> &[u16] {
        self.store
    }

    /// Overwrite every pixel
    pub fn fill(&mut self, color: Rgb565) {
        self.store.fill(color.raw());
    }

    /// Set a single pixel; out-of-range coordinates are dropped
    pub fn pixel(&mut self, x: i32, y: i32, color: Rgb565) {
        if x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height {
            self.store[y as usize * self.width + x as usize] = color.raw();
        }
    }

    /// Draw a horizontal line, clipped to the visible span
    pub fn hline(&mut self, x: i32, y: i32, w: i32, color: Rgb565) {
        if y < 0 || y as usize >= self.height {
            return;
        }
        let Some((x, w, _)) = clip_span(x, w, self.width) else {
            return;
        };
        let start = y as usize * self.width + x;
        self.store[start..start + w].fill(color.raw());
    }

    /// Draw a vertical line, clipped to the visible span
    pub fn vline(&mut self, x: i32, y: i32, h: i32, color: Rgb565) {
        if x < 0 || x as usize >= self.width {
            return;
        }
        let Some((y, h, _)) = clip_span(y, h, self.height) else {
            return;
        };
        for row in y..y + h {
            self.store[row * self.width + x as usize] = color.raw();
        }
    }

    /// Fill a rectangle, clipping each edge independently
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb565) {
        let Some((x, w, _)) = clip_span(x, w, self.width) else {
            return;
        };
        let Some((y, h, _)) = clip_span(y, h, self.height) else {
            return;
        };
        for row in y..y + h {
            let start = row * self.width + x;
            self.store[start..start + w].fill(color.raw());
        }
    }

    /// Copy a `w x h` RGB565 image into the buffer at `(x, y)`
    ///
    /// `src` holds little-endian RGB565 pixels, row-major. The copy clips on
    /// all four sides, adjusting the source read origin to match; rows are
    /// copied independently per scanline.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::SourceTooSmall` if `src` holds fewer than
    /// `w * h * 2` bytes; checked before any write, leaving the destination
    /// unmodified.
    pub fn blit(&mut self, src: &[u8], x: i32, y: i32, w: i32, h: i32) -> Result<(), GeometryError> {
        if w <= 0 || h <= 0 {
            return Ok(());
        }
        let required = w as usize * h as usize * 2;
        if src.len() < required {
            return Err(GeometryError::SourceTooSmall {
                required,
                provided: src.len(),
            });
        }

        let Some((dst_x, copy_w, src_x)) = clip_span(x, w, self.width) else {
            return Ok(());
        };
        let Some((dst_y, copy_h, src_y)) = clip_span(y, h, self.height) else {
            return Ok(());
        };

        for row in 0..copy_h {
            let dst_start = (dst_y + row) * self.width + dst_x;
            let src_start = (src_y + row) * w as usize + src_x;
            for col in 0..copy_w {
                let byte = (src_start + col) * 2;
                self.store[dst_start + col] = u16::from_le_bytes([src[byte], src[byte + 1]]);
            }
        }
        Ok(())
    }

    /// Rotate the buffer in place by 90, 180 or 270 degrees clockwise
    ///
    /// The logical dimensions are swapped only after the permutation has
    /// fully completed. Callers sharing the store with a scanout engine will
    /// observe tearing during the permutation; see the module docs.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidAngle` for any other angle; the buffer
    /// is left untouched.
    pub fn rotate(&mut self, degrees: u16) -> Result<(), GeometryError> {
        let (w, h) = rotate_in_place(self.store, self.width, self.height, degrees)?;
        self.width = w;
        self.height = h;
        Ok(())
    }
}
