//! High-level display driver
//!
//! [`Display`] ties the pieces together: it owns a [`PanelInterface`], plays
//! the vendor bring-up script over it, and exposes the clipped drawing
//! primitives of the attached [`Framebuffer`]. The framebuffer store itself is
//! borrowed from the caller, who typically hands the same memory to a DMA
//! scanout engine configured from [`Config::timings`]; after `init` the
//! serial link is only needed again for `deinit`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use st7701::{BitBangInterface, Builder, Dimensions, Display, Rgb565};
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # fn example(store: &mut [u16]) -> Result<(), Box<dyn core::error::Error>> {
//! let interface = BitBangInterface::new(
//!     MockPin, MockPin, MockPin, MockPin, Some(MockPin), MockDelay,
//! );
//! let config = Builder::new().dimensions(Dimensions::new(854, 480)?).build()?;
//!
//! let mut display = Display::new(interface, config);
//! display.init(&mut MockDelay, store)?;
//! display.backlight(true)?;
//!
//! display.fill(Rgb565::BLACK)?;
//! display.fill_rect(10, 10, 100, 50, Rgb565::RED)?;
//! # Ok(())
//! # }
//! ```

use embedded_hal::delay::DelayNs;

use crate::color::Rgb565;
use crate::command;
use crate::config::Config;
use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::init::{BRING_UP_SEQUENCE, SequenceOp};
use crate::interface::PanelInterface;

/// Lifecycle state of the panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelState {
    /// Before `init` or after `deinit`; drawing operations are rejected
    Off,
    /// Bring-up completed, framebuffer attached
    Ready,
}

/// ST7701 display driver
///
/// Generic over the hardware interface. Construct with [`Display::new`], then
/// call [`Display::init`] with a delay provider and the framebuffer store
/// before any drawing operation.
pub struct Display<'a, I: PanelInterface> {
    /// Hardware interface (serial configuration link)
    interface: I,
    /// Display configuration
    config: Config,
    /// Attached framebuffer; present only in [`PanelState::Ready`]
    framebuffer: Option<Framebuffer<'a>>,
    /// Lifecycle state
    state: PanelState,
}

impl<'a, I: PanelInterface> Display<'a, I> {
    /// Create a new display driver
    ///
    /// No hardware access happens here; the panel stays untouched until
    /// [`Display::init`].
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            framebuffer: None,
            state: PanelState::Off,
        }
    }

    /// Bring the panel up and attach the framebuffer store
    ///
    /// Drives the hardware reset pulse, plays the vendor bring-up script over
    /// the serial link (with its mandatory delays), clears `store` to black
    /// and wraps it as the drawing surface. `store` must hold exactly
    /// [`Dimensions::pixel_count`](crate::Dimensions::pixel_count) elements.
    ///
    /// The script is open-loop: nothing is read back, so success here means
    /// the bytes were clocked out, not that the panel accepted them.
    ///
    /// # Errors
    ///
    /// - `Error::Geometry` if `store` does not match the configured dimensions
    /// - `Error::Interface` if the serial link fails
    pub fn init<D: DelayNs>(
        &mut self,
        delay: &mut D,
        store: &'a mut [u16],
    ) -> Result<(), Error<I>> {
        let dims = self.config.dimensions;
        let mut framebuffer = Framebuffer::new(store, dims.cols as usize, dims.rows as usize)?;

        self.interface.hard_reset().map_err(Error::Interface)?;
        self.run_bring_up(delay)?;

        // The panel is scanning from here on; don't let it show stale memory
        framebuffer.fill(Rgb565::BLACK);
        self.framebuffer = Some(framebuffer);
        self.state = PanelState::Ready;
        log::info!("panel ready, {}x{}", dims.cols, dims.rows);
        Ok(())
    }

    /// Shut the panel down and release the framebuffer store
    ///
    /// Sends display-off and sleep-in, switches the backlight off, and
    /// returns to [`PanelState::Off`]. The borrowed store becomes available
    /// to the caller again once the driver is dropped or re-initialized.
    ///
    /// # Errors
    ///
    /// Returns `Error::Interface` if the serial link fails.
    pub fn deinit(&mut self) -> Result<(), Error<I>> {
        self.interface
            .write_command(command::DISPLAY_OFF)
            .map_err(Error::Interface)?;
        self.interface
            .write_command(command::SLEEP_IN)
            .map_err(Error::Interface)?;
        self.interface
            .set_backlight(false)
            .map_err(Error::Interface)?;
        self.framebuffer = None;
        self.state = PanelState::Off;
        log::debug!("panel off");
        Ok(())
    }

    /// Switch the backlight on or off
    ///
    /// Allowed in any state; a no-op when no backlight pin is wired.
    ///
    /// # Errors
    ///
    /// Returns `Error::Interface` if driving the pin fails.
    pub fn backlight(&mut self, on: bool) -> Result<(), Error<I>> {
        self.interface.set_backlight(on).map_err(Error::Interface)
    }

    /// Play the bring-up script over the serial link
    fn run_bring_up<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I>> {
        for op in BRING_UP_SEQUENCE {
            match op {
                SequenceOp::Command { opcode, params } => {
                    self.interface
                        .write_command(*opcode)
                        .map_err(Error::Interface)?;
                    for param in *params {
                        self.interface
                            .write_data(*param)
                            .map_err(Error::Interface)?;
                    }
                }
                SequenceOp::DelayMs(ms) => delay.delay_ms(*ms),
            }
        }
        log::debug!("bring-up script sent, {} ops", BRING_UP_SEQUENCE.len());
        Ok(())
    }

    /// Framebuffer access, gated on the lifecycle state
    fn framebuffer_mut(&mut self) -> Result<&mut Framebuffer<'a>, Error<I>> {
        self.framebuffer.as_mut().ok_or(Error::NotInitialized)
    }

    /// Overwrite every pixel
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` before `init` or after `deinit`.
    pub fn fill(&mut self, color: Rgb565) -> Result<(), Error<I>> {
        self.framebuffer_mut()?.fill(color);
        Ok(())
    }

    /// Set a single pixel; out-of-range coordinates are dropped
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` before `init` or after `deinit`.
    pub fn pixel(&mut self, x: i32, y: i32, color: Rgb565) -> Result<(), Error<I>> {
        self.framebuffer_mut()?.pixel(x, y, color);
        Ok(())
    }

    /// Draw a horizontal line, clipped to the visible span
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` before `init` or after `deinit`.
    pub fn hline(&mut self, x: i32, y: i32, w: i32, color: Rgb565) -> Result<(), Error<I>> {
        self.framebuffer_mut()?.hline(x, y, w, color);
        Ok(())
    }

    /// Draw a vertical line, clipped to the visible span
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` before `init` or after `deinit`.
    pub fn vline(&mut self, x: i32, y: i32, h: i32, color: Rgb565) -> Result<(), Error<I>> {
        self.framebuffer_mut()?.vline(x, y, h, color);
        Ok(())
    }

    /// Fill a rectangle, clipping each edge independently
    ///
    /// # Errors
    ///
    /// Returns `Error::NotInitialized` before `init` or after `deinit`.
    pub fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Rgb565,
    ) -> Result<(), Error<I>> {
        self.framebuffer_mut()?.fill_rect(x, y, w, h, color);
        Ok(())
    }

    /// Copy a `w x h` little-endian RGB565 image to `(x, y)`, clipped
    ///
    /// # Errors
    ///
    /// - `Error::NotInitialized` before `init` or after `deinit`
    /// - `Error::Geometry` if `src` holds fewer than `w * h * 2` bytes
    pub fn blit(&mut self, src: &[u8], x: i32, y: i32, w: i32, h: i32) -> Result<(), Error<I>> {
        self.framebuffer_mut()?.blit(src, x, y, w, h)?;
        Ok(())
    }

    /// Rotate the framebuffer in place by 90, 180 or 270 degrees clockwise
    ///
    /// Returns the post-rotation `(width, height)`. The scanout engine keeps
    /// reading the old geometry; reconfigure it to the returned dimensions.
    ///
    /// # Errors
    ///
    /// - `Error::NotInitialized` before `init` or after `deinit`
    /// - `Error::Geometry` for angles other than 90/180/270
    pub fn rotate(&mut self, degrees: u16) -> Result<(usize, usize), Error<I>> {
        let framebuffer = self.framebuffer_mut()?;
        framebuffer.rotate(degrees)?;
        Ok((framebuffer.width(), framebuffer.height()))
    }

    /// Current logical width in pixels
    ///
    /// Follows rotation while initialized; falls back to the configured
    /// dimensions otherwise.
    pub fn width(&self) -> usize {
        self.framebuffer
            .as_ref()
            .map_or(self.config.dimensions.cols as usize, Framebuffer::width)
    }

    /// Current logical height in pixels
    pub fn height(&self) -> usize {
        self.framebuffer
            .as_ref()
            .map_or(self.config.dimensions.rows as usize, Framebuffer::height)
    }

    /// Read access to the attached framebuffer, if initialized
    pub fn framebuffer(&self) -> Option<&Framebuffer<'a>> {
        self.framebuffer.as_ref()
    }

    /// Display configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current lifecycle state
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Release the hardware interface
    pub fn release(self) -> I {
        self.interface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, Dimensions};
    use crate::interface::Mode;
    use alloc::vec::Vec;

    struct MockInterface {
        writes: Vec<(Mode, u8)>,
        resets: usize,
        backlight: Vec<bool>,
    }

    impl MockInterface {
        fn new() -> Self {
            Self {
                writes: Vec::new(),
                resets: 0,
                backlight: Vec::new(),
            }
        }
    }

    impl PanelInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
            self.writes.push((Mode::Command, command));
            Ok(())
        }

        fn write_data(&mut self, data: u8) -> Result<(), Self::Error> {
            self.writes.push((Mode::Data, data));
            Ok(())
        }

        fn hard_reset(&mut self) -> Result<(), Self::Error> {
            self.resets += 1;
            Ok(())
        }

        fn set_backlight(&mut self, on: bool) -> Result<(), Self::Error> {
            self.backlight.push(on);
            Ok(())
        }
    }

    struct MockDelay {
        ms: Vec<u32>,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
        fn delay_ms(&mut self, ms: u32) {
            self.ms.push(ms);
        }
    }

    fn display_4x3() -> Display<'static, MockInterface> {
        let config = Builder::new()
            .dimensions(Dimensions::new(3, 4).unwrap())
            .build()
            .unwrap();
        Display::new(MockInterface::new(), config)
    }

    fn init_4x3(display: &mut Display<'static, MockInterface>) {
        let store = alloc::vec![0u16; 12].leak();
        let mut delay = MockDelay { ms: Vec::new() };
        display.init(&mut delay, store).unwrap();
    }

    /// The vendor register stream, written out frame by frame
    ///
    /// Kept independent of the script table so a table edit cannot silently
    /// rewrite the expectation.
    const VENDOR_FRAMES: &[(u8, &[u8])] = &[
        (0xFF, &[0x77, 0x01, 0x00, 0x00, 0x13]),
        (0xEF, &[0x08]),
        (0xFF, &[0x77, 0x01, 0x00, 0x00, 0x10]),
        (0xC0, &[0xE9, 0x03]),
        (0xC1, &[0x10, 0x0C]),
        (0xC2, &[0x20, 0x0A]),
        (0xCC, &[0x10]),
        (
            0xB0,
            &[
                0x07, 0x14, 0x9C, 0x0B, 0x10, 0x06, 0x08, 0x09, 0x08, 0x22, 0x02, 0x4F, 0x0E,
                0x66, 0x2D, 0x1C,
            ],
        ),
        (
            0xB1,
            &[
                0x09, 0x17, 0x9E, 0x0F, 0x11, 0x06, 0x0C, 0x08, 0x08, 0x26, 0x04, 0x51, 0x10,
                0x6A, 0x33, 0x1D,
            ],
        ),
        (0xFF, &[0x77, 0x01, 0x00, 0x00, 0x11]),
        (0xB0, &[0x4D]),
        (0xB1, &[0x43]),
        (0xB2, &[0x84]),
        (0xB3, &[0x80]),
        (0xB5, &[0x45]),
        (0xB7, &[0x85]),
        (0xB8, &[0x33]),
        (0xC1, &[0x78]),
        (0xC2, &[0x78]),
        (0xD0, &[0x88]),
        (0xE0, &[0x00, 0x00, 0x02]),
        (
            0xE1,
            &[0x06, 0xA0, 0x08, 0xA0, 0x05, 0xA0, 0x07, 0xA0, 0x00, 0x44, 0x44],
        ),
        (
            0xE2,
            &[0x30, 0x30, 0x44, 0x44, 0x6E, 0xA0, 0x00, 0x00, 0x6E, 0xA0, 0x00, 0x00],
        ),
        (0xE3, &[0x00, 0x00, 0x33, 0x33]),
        (0xE4, &[0x44, 0x44]),
        (
            0xE5,
            &[
                0x0D, 0x69, 0x0A, 0xA0, 0x0F, 0x6B, 0x0A, 0xA0, 0x09, 0x65, 0x0A, 0xA0, 0x0B,
                0x67, 0x0A, 0xA0,
            ],
        ),
        (0xE6, &[0x00, 0x00, 0x33, 0x33]),
        (0xE7, &[0x44, 0x44]),
        (
            0xE8,
            &[
                0x0C, 0x68, 0x0A, 0xA0, 0x0E, 0x6A, 0x0A, 0xA0, 0x08, 0x64, 0x0A, 0xA0, 0x0A,
                0x66, 0x0A, 0xA0,
            ],
        ),
        (0xE9, &[0x36, 0x00]),
        (0xEB, &[0x00, 0x01, 0xE4, 0xE4, 0x44, 0x88, 0x40]),
        (
            0xED,
            &[
                0xFF, 0x45, 0x67, 0xFA, 0x01, 0x2B, 0xCF, 0xFF, 0xFF, 0xFC, 0xB2, 0x10, 0xAF,
                0x76, 0x54, 0xFF,
            ],
        ),
        (0xEF, &[0x10, 0x0D, 0x04, 0x08, 0x3F, 0x1F]),
        (0x3A, &[0x55]),
        (0x11, &[]),
        (0x35, &[0x00]),
        (0x29, &[]),
    ];

    #[test]
    fn test_init_sends_exact_vendor_stream() {
        let mut display = display_4x3();
        let store = alloc::vec![0u16; 12].leak();
        let mut delay = MockDelay { ms: Vec::new() };
        display.init(&mut delay, store).unwrap();

        let mut expected = Vec::new();
        for (opcode, params) in VENDOR_FRAMES {
            expected.push((Mode::Command, *opcode));
            for param in *params {
                expected.push((Mode::Data, *param));
            }
        }
        assert_eq!(display.release().writes, expected);
        assert_eq!(delay.ms, [120, 20]);
    }

    #[test]
    fn test_init_clears_store_to_black() {
        let mut display = display_4x3();
        let store = alloc::vec![0xFFFFu16; 12].leak();
        let mut delay = MockDelay { ms: Vec::new() };
        display.init(&mut delay, store).unwrap();
        let pixels = display.framebuffer().unwrap().as_pixels();
        assert!(pixels.iter().all(|px| *px == Rgb565::BLACK.raw()));
    }

    #[test]
    fn test_init_resets_before_the_script() {
        let mut display = display_4x3();
        init_4x3(&mut display);
        assert_eq!(display.state(), PanelState::Ready);
        assert_eq!(display.release().resets, 1);
    }

    #[test]
    fn test_init_rejects_wrong_store_size() {
        let mut display = display_4x3();
        let store = alloc::vec![0u16; 11].leak();
        let mut delay = MockDelay { ms: Vec::new() };
        let result = display.init(&mut delay, store);
        assert!(matches!(result, Err(Error::Geometry(_))));
        // Nothing was sent
        assert_eq!(display.state(), PanelState::Off);
        assert!(display.release().writes.is_empty());
    }

    #[test]
    fn test_drawing_before_init_is_rejected() {
        let mut display = display_4x3();
        assert!(matches!(
            display.fill(Rgb565::BLACK),
            Err(Error::NotInitialized)
        ));
        assert!(matches!(
            display.pixel(0, 0, Rgb565::RED),
            Err(Error::NotInitialized)
        ));
        assert!(matches!(
            display.hline(0, 0, 4, Rgb565::RED),
            Err(Error::NotInitialized)
        ));
        assert!(matches!(
            display.vline(0, 0, 3, Rgb565::RED),
            Err(Error::NotInitialized)
        ));
        assert!(matches!(
            display.fill_rect(0, 0, 2, 2, Rgb565::RED),
            Err(Error::NotInitialized)
        ));
        assert!(matches!(display.rotate(90), Err(Error::NotInitialized)));
        assert!(matches!(
            display.blit(&[0, 0], 0, 0, 1, 1),
            Err(Error::NotInitialized)
        ));
    }

    #[test]
    fn test_deinit_sends_shutdown_and_detaches() {
        let mut display = display_4x3();
        init_4x3(&mut display);

        display.deinit().unwrap();
        assert_eq!(display.state(), PanelState::Off);
        assert!(matches!(
            display.fill(Rgb565::BLACK),
            Err(Error::NotInitialized)
        ));

        let interface = display.release();
        let tail = &interface.writes[interface.writes.len() - 2..];
        assert_eq!(
            tail,
            [
                (Mode::Command, command::DISPLAY_OFF),
                (Mode::Command, command::SLEEP_IN),
            ]
        );
        assert_eq!(interface.backlight, [false]);
    }

    #[test]
    fn test_drawing_after_init_touches_framebuffer() {
        let mut display = display_4x3();
        init_4x3(&mut display);

        display.fill(Rgb565::BLUE).unwrap();
        display.pixel(0, 0, Rgb565::WHITE).unwrap();
        display.hline(0, 1, 4, Rgb565::RED).unwrap();

        let pixels = display.framebuffer().unwrap().as_pixels();
        assert_eq!(pixels[0], Rgb565::WHITE.raw());
        assert_eq!(pixels[4], Rgb565::RED.raw());
        assert_eq!(pixels[8], Rgb565::BLUE.raw());
    }

    #[test]
    fn test_rotate_reports_new_dimensions() {
        let mut display = display_4x3();
        init_4x3(&mut display);

        assert_eq!((display.width(), display.height()), (4, 3));
        let (w, h) = display.rotate(90).unwrap();
        assert_eq!((w, h), (3, 4));
        assert_eq!((display.width(), display.height()), (3, 4));
    }

    #[test]
    fn test_backlight_allowed_in_any_state() {
        let mut display = display_4x3();
        display.backlight(true).unwrap();
        init_4x3(&mut display);
        display.backlight(false).unwrap();
        assert_eq!(display.release().backlight, [true, false]);
    }
}
