//! ST7701 Parallel-RGB LCD Driver
//!
//! A driver for the ST7701 LCD controller as wired in parallel-RGB mode:
//! pixel data is scanned out continuously by an external DMA engine, while
//! this crate owns the 9-bit serial configuration link, the vendor bring-up
//! script, and a clipped RGB565 drawing layer over the shared framebuffer.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support (bit-banged serial link over GPIO outputs)
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Configurable display dimensions up to 480x864
//! - Clipped drawing primitives: pixel, lines, rectangles, image blit
//! - In-place rotation by 90/180/270 degrees with no scratch buffer
//!
//! ## Division of labor
//!
//! The parallel RGB scanout is NOT driven by this crate. The host platform
//! starts its own scanout engine (LCD peripheral plus DMA) against the same
//! pixel store it lends to [`Display::init`], using the timing parameters in
//! [`RgbTimings`]. The serial link here is only used for bring-up and
//! shutdown; everything in between is memory writes.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use st7701::{BitBangInterface, Builder, Dimensions, Display, Rgb565};
//!
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let (cs, sck, sda, rst, bl) = (MockPin, MockPin, MockPin, MockPin, MockPin);
//! # let delay = MockDelay;
//! # let framebuffer: &mut [u16] = &mut [];
//! let interface = BitBangInterface::new(cs, sck, sda, rst, Some(bl), delay);
//! let dims = match Dimensions::new(854, 480) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.init(&mut MockDelay, framebuffer);
//! let _ = display.backlight(true);
//! let _ = display.fill(Rgb565::BLACK);
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// RGB565 packed color type
pub mod color;
/// ST7701 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Clipped drawing primitives over the pixel store
pub mod framebuffer;
/// Vendor bring-up script
pub mod init;
/// Hardware interface abstraction
pub mod interface;
/// In-place framebuffer rotation
pub mod rotate;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::Rgb565;
pub use config::{Builder, Config, Dimensions, MAX_GATE_OUTPUTS, MAX_SOURCE_OUTPUTS, RgbTimings};
pub use display::{Display, PanelState};
pub use error::{BuilderError, Error, GeometryError};
pub use framebuffer::Framebuffer;
pub use init::{BRING_UP_SEQUENCE, SequenceOp};
pub use interface::{BitBangInterface, LinkError, Mode, PanelInterface, SETTLE_DELAY_US};
pub use rotate::rotate_in_place;
