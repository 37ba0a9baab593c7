//! ST7701 command definitions
//!
//! This module defines the command bytes used to configure the ST7701
//! controller over its 9-bit serial interface. Each 9-bit transfer carries a
//! mode bit (0 = command, 1 = parameter) followed by the byte, MSB first.
//!
//! ## Register pages
//!
//! Most configuration opcodes live in vendor register banks ("pages")
//! selected with [`PAGE_SELECT`] (`0xFF`). A page-select frame must precede
//! any page-relative opcode; the active page stays in effect until the next
//! page-select frame. The standard command set (`SLPOUT`, `COLMOD`, `TEON`,
//! `DISPON`, ...) is reachable from any page.
//!
//! ## Example
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use st7701::{command, BitBangInterface, PanelInterface};
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut interface: BitBangInterface<_, _, _, _, MockPin, _> =
//! #     BitBangInterface::new(MockPin, MockPin, MockPin, MockPin, None, MockDelay);
//! // Select vendor page 0x10, then set RGB565 pixel format
//! let _ = interface.write_command(command::PAGE_SELECT);
//! for byte in [0x77, 0x01, 0x00, 0x00, 0x10] {
//!     let _ = interface.write_data(byte);
//! }
//! let _ = interface.write_command(command::COLMOD);
//! let _ = interface.write_data(command::COLMOD_RGB565);
//! ```

// Standard command set (page-independent)

/// Sleep in command (0x10)
///
/// Enters minimum-power mode; the panel stops scanning.
pub const SLEEP_IN: u8 = 0x10;

/// Sleep out command (0x11)
///
/// Exits sleep mode. The controller needs at least 120ms before it will
/// accept further frames.
pub const SLEEP_OUT: u8 = 0x11;

/// Display off command (0x28)
///
/// Blanks the panel output without losing configuration.
pub const DISPLAY_OFF: u8 = 0x28;

/// Display on command (0x29)
///
/// Starts scanning; must only be sent after sleep-out has settled.
pub const DISPLAY_ON: u8 = 0x29;

/// Tearing effect line on command (0x35)
///
/// Requires 1 byte: 0x00 = V-blanking only, 0x01 = V + H blanking.
pub const TEARING_EFFECT_ON: u8 = 0x35;

/// Interface pixel format command (0x3A)
///
/// Requires 1 byte: [`COLMOD_RGB565`] for 16-bit packed, 0x60 for RGB666.
pub const COLMOD: u8 = 0x3A;

/// COLMOD parameter selecting 16-bit packed RGB565
pub const COLMOD_RGB565: u8 = 0x55;

/// Command2 bank select (0xFF)
///
/// Requires 5 bytes: fixed preamble `0x77 0x01 0x00 0x00` plus the bank
/// number. Subsequent opcodes are interpreted relative to the selected bank
/// until the next bank select.
pub const PAGE_SELECT: u8 = 0xFF;

// Command2 BK0 (page 0x10) - display settings

/// Display line setting (0xC0), 2 bytes
pub const LNESET: u8 = 0xC0;

/// Porch control (0xC1), 2 bytes
pub const PORCTRL: u8 = 0xC1;

/// Inversion selection and frame rate (0xC2), 2 bytes
pub const INVSET: u8 = 0xC2;

/// RGB interface control (0xCC), 1 byte
pub const RGBCTRL: u8 = 0xCC;

/// Positive voltage gamma control (0xB0), 16 bytes
pub const PVGAMCTRL: u8 = 0xB0;

/// Negative voltage gamma control (0xB1), 16 bytes
pub const NVGAMCTRL: u8 = 0xB1;

// Command2 BK1 (page 0x11) - power settings
//
// The BK1 opcodes reuse the 0xB0-0xD0 range; they only mean power control
// while page 0x11 is active.

/// VOP amplitude (0xB0), 1 byte
pub const VRHS: u8 = 0xB0;

/// VCOM amplitude (0xB1), 1 byte
pub const VCOMS: u8 = 0xB1;

/// VGH voltage (0xB2), 1 byte
pub const VGHSS: u8 = 0xB2;

/// Test command setting (0xB3), 1 byte
pub const TESTCMD: u8 = 0xB3;

/// VGL voltage (0xB5), 1 byte
pub const VGLS: u8 = 0xB5;

/// Power control 1 (0xB7), 1 byte
pub const PWCTRL1: u8 = 0xB7;

/// Power control 2 (0xB8), 1 byte
pub const PWCTRL2: u8 = 0xB8;

/// Source pre-drive timing 1 (0xC1), 1 byte
pub const SPD1: u8 = 0xC1;

/// Source pre-drive timing 2 (0xC2), 1 byte
pub const SPD2: u8 = 0xC2;

/// MIPI setting 1 (0xD0), 1 byte
pub const MIPISET1: u8 = 0xD0;
