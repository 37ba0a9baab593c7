//! Hardware interface abstraction
//!
//! This module provides the [`PanelInterface`] trait and the
//! [`BitBangInterface`] struct for driving the ST7701's 9-bit serial
//! configuration link over discrete GPIO lines.
//!
//! ## Hardware Requirements
//!
//! The ST7701 configuration link needs 4 GPIO outputs plus an optional
//! backlight enable, all pre-configured as push-pull outputs:
//! - **CS**: Chip select (active low)
//! - **SCK**: Serial clock
//! - **SDA**: Serial data
//! - **RST**: Reset (pulsed low during bring-up)
//! - **BL**: Backlight enable (optional)
//!
//! ## Protocol
//!
//! Each transfer is 9 bits: a mode bit (0 = command, 1 = data) followed by
//! the byte MSB-first. Every bit is clocked low, data set, then clocked high,
//! with a fixed settle delay between line changes. The link is write-only:
//! there is no acknowledgement or readback, so a wiring fault is only
//! observable as a corrupted panel. Transfers must not be re-entered
//! concurrently; the shared line state is not protected.
//!
//! ## Example
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use st7701::{BitBangInterface, PanelInterface};
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! // Create interface with CS, SCK, SDA, RST pins, backlight and delay
//! let mut interface = BitBangInterface::new(
//!     MockPin, MockPin, MockPin, MockPin, Some(MockPin), MockDelay,
//! );
//!
//! // Reset pulse, then send a command with one parameter
//! let _ = interface.hard_reset();
//! let _ = interface.write_command(0x3A);
//! let _ = interface.write_data(0x55);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// Settle time between line changes, in microseconds
///
/// The exact magnitude is a hardware constant; correctness only requires it
/// to meet the controller's minimum and to be the same for every bit.
pub const SETTLE_DELAY_US: u32 = 1;

/// Mode bit of a 9-bit transfer
///
/// The first bit on the wire distinguishes an opcode byte from a
/// parameter/data byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Opcode byte (mode bit 0)
    Command,
    /// Parameter byte (mode bit 1)
    Data,
}

/// Trait for the hardware interface to the ST7701 controller
///
/// This trait abstracts over different hardware implementations, allowing
/// [`Display`](crate::display::Display) to work with any GPIO implementation
/// that satisfies embedded-hal traits, or with a test double.
///
/// ## Implementing
///
/// For most cases, use the provided [`BitBangInterface`]. If the serial link
/// is wired through something else (an I/O expander, a 9-bit capable SPI
/// peripheral), implement this trait on your own type.
pub trait PanelInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send an opcode byte (mode bit 0)
    ///
    /// # Errors
    ///
    /// Returns an error if driving a pin fails.
    fn write_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Send a parameter byte (mode bit 1)
    ///
    /// # Errors
    ///
    /// Returns an error if driving a pin fails.
    fn write_data(&mut self, data: u8) -> Result<(), Self::Error>;

    /// Drive the hardware reset pulse
    ///
    /// The implementation must:
    /// 1. Set RST high, wait 10ms
    /// 2. Set RST low, wait 100ms
    /// 3. Set RST high, wait 10ms
    ///
    /// # Errors
    ///
    /// Returns an error if driving the reset pin fails.
    fn hard_reset(&mut self) -> Result<(), Self::Error>;

    /// Switch the backlight on or off
    ///
    /// A no-op when no backlight pin is wired.
    ///
    /// # Errors
    ///
    /// Returns an error if driving the backlight pin fails.
    fn set_backlight(&mut self, on: bool) -> Result<(), Self::Error>;
}

/// Errors that can occur at the link level
///
/// Generic over the GPIO error type. The link itself is open-loop and cannot
/// fail; only the pins can.
#[derive(Debug)]
pub enum LinkError<PinErr> {
    /// GPIO pin error
    Pin(PinErr),
}

impl<PinErr: Debug> core::fmt::Display for LinkError<PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<PinErr: Debug> core::error::Error for LinkError<PinErr> {}

/// Bit-banged 9-bit serial interface for the ST7701
///
/// Implements [`PanelInterface`] over embedded-hal v1.0 GPIO outputs and a
/// [`DelayNs`] provider. The delay is owned because every bit transition
/// needs a settle interval.
///
/// ## Type Parameters
///
/// * `CS` - Chip select pin implementing [`OutputPin`]
/// * `SCK` - Clock pin implementing [`OutputPin`]
/// * `SDA` - Data pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
/// * `BL` - Backlight enable pin implementing [`OutputPin`]
/// * `D` - Delay provider implementing [`DelayNs`]
pub struct BitBangInterface<CS, SCK, SDA, RST, BL, D> {
    /// Chip select pin (active low)
    cs: CS,
    /// Serial clock pin
    sck: SCK,
    /// Serial data pin
    sda: SDA,
    /// Reset pin
    rst: RST,
    /// Optional backlight enable pin
    backlight: Option<BL>,
    /// Delay provider for bit settle times and the reset pulse
    delay: D,
}

impl<CS, SCK, SDA, RST, BL, D, PinErr> BitBangInterface<CS, SCK, SDA, RST, BL, D>
where
    CS: OutputPin<Error = PinErr>,
    SCK: OutputPin<Error = PinErr>,
    SDA: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    BL: OutputPin<Error = PinErr>,
    D: DelayNs,
    PinErr: Debug,
{
    /// Create a new bit-bang interface
    ///
    /// The pins must already be configured as push-pull outputs. CS and SCK
    /// idle high; callers typically set them high before bring-up.
    pub fn new(cs: CS, sck: SCK, sda: SDA, rst: RST, backlight: Option<BL>, delay: D) -> Self {
        Self {
            cs,
            sck,
            sda,
            rst,
            backlight,
            delay,
        }
    }

    /// Release the pins and delay provider
    pub fn release(self) -> (CS, SCK, SDA, RST, Option<BL>, D) {
        (
            self.cs,
            self.sck,
            self.sda,
            self.rst,
            self.backlight,
            self.delay,
        )
    }

    /// Clock one bit out: SCK low, SDA set, SCK high
    fn clock_bit(&mut self, bit: bool) -> Result<(), LinkError<PinErr>> {
        self.sck.set_low().map_err(LinkError::Pin)?;
        self.delay.delay_us(SETTLE_DELAY_US);
        if bit {
            self.sda.set_high().map_err(LinkError::Pin)?;
        } else {
            self.sda.set_low().map_err(LinkError::Pin)?;
        }
        self.delay.delay_us(SETTLE_DELAY_US);
        self.sck.set_high().map_err(LinkError::Pin)?;
        self.delay.delay_us(SETTLE_DELAY_US);
        Ok(())
    }

    /// Perform one 9-bit transfer: mode bit, then the byte MSB-first
    fn transfer(&mut self, mode: Mode, byte: u8) -> Result<(), LinkError<PinErr>> {
        self.cs.set_low().map_err(LinkError::Pin)?;
        self.delay.delay_us(SETTLE_DELAY_US);

        self.clock_bit(mode == Mode::Data)?;
        for i in (0..8).rev() {
            self.clock_bit((byte >> i) & 1 != 0)?;
        }

        self.cs.set_high().map_err(LinkError::Pin)?;
        self.delay.delay_us(SETTLE_DELAY_US);
        Ok(())
    }
}

impl<CS, SCK, SDA, RST, BL, D, PinErr> PanelInterface for BitBangInterface<CS, SCK, SDA, RST, BL, D>
where
    CS: OutputPin<Error = PinErr>,
    SCK: OutputPin<Error = PinErr>,
    SDA: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    BL: OutputPin<Error = PinErr>,
    D: DelayNs,
    PinErr: Debug,
{
    type Error = LinkError<PinErr>;

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.transfer(Mode::Command, command)
    }

    fn write_data(&mut self, data: u8) -> Result<(), Self::Error> {
        self.transfer(Mode::Data, data)
    }

    fn hard_reset(&mut self) -> Result<(), Self::Error> {
        // Pulse shape: high 10ms, low 100ms, high 10ms
        self.rst.set_high().map_err(LinkError::Pin)?;
        self.delay.delay_ms(10);
        self.rst.set_low().map_err(LinkError::Pin)?;
        self.delay.delay_ms(100);
        self.rst.set_high().map_err(LinkError::Pin)?;
        self.delay.delay_ms(10);
        Ok(())
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), Self::Error> {
        if let Some(bl) = self.backlight.as_mut() {
            if on {
                bl.set_high().map_err(LinkError::Pin)?;
            } else {
                bl.set_low().map_err(LinkError::Pin)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use core::convert::Infallible;

    /// Everything a transfer touches, in wire order
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Level(char, bool),
        DelayUs(u32),
    }

    type Trace = Rc<RefCell<Vec<Event>>>;

    struct TracePin {
        label: char,
        trace: Trace,
    }

    impl embedded_hal::digital::ErrorType for TracePin {
        type Error = Infallible;
    }

    impl OutputPin for TracePin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.trace.borrow_mut().push(Event::Level(self.label, false));
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.trace.borrow_mut().push(Event::Level(self.label, true));
            Ok(())
        }
    }

    struct TraceDelay {
        trace: Trace,
    }

    impl DelayNs for TraceDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.trace.borrow_mut().push(Event::DelayUs(ns / 1000));
        }
        fn delay_us(&mut self, us: u32) {
            self.trace.borrow_mut().push(Event::DelayUs(us));
        }
        fn delay_ms(&mut self, ms: u32) {
            self.trace.borrow_mut().push(Event::DelayUs(ms * 1000));
        }
    }

    fn traced_interface() -> (
        BitBangInterface<TracePin, TracePin, TracePin, TracePin, TracePin, TraceDelay>,
        Trace,
    ) {
        let trace: Trace = Rc::new(RefCell::new(Vec::new()));
        let pin = |label| TracePin {
            label,
            trace: Rc::clone(&trace),
        };
        let interface = BitBangInterface::new(
            pin('c'),
            pin('k'),
            pin('d'),
            pin('r'),
            Some(pin('b')),
            TraceDelay {
                trace: Rc::clone(&trace),
            },
        );
        (interface, trace)
    }

    /// Reconstruct the bits sampled on SCK rising edges
    fn sampled_bits(events: &[Event]) -> Vec<bool> {
        let mut bits = Vec::new();
        let mut sda = false;
        for event in events {
            match event {
                Event::Level('d', level) => sda = *level,
                Event::Level('k', true) => bits.push(sda),
                _ => {}
            }
        }
        bits
    }

    #[test]
    fn test_command_transfer_is_nine_bits_mode_first() {
        let (mut interface, trace) = traced_interface();
        interface.write_command(0xA5).unwrap();

        let events = trace.borrow();
        let bits = sampled_bits(&events);
        // Mode bit 0, then 0xA5 = 1010_0101 MSB-first
        assert_eq!(
            bits,
            [false, true, false, true, false, false, true, false, true]
        );
    }

    #[test]
    fn test_data_transfer_sets_mode_bit() {
        let (mut interface, trace) = traced_interface();
        interface.write_data(0x00).unwrap();

        let events = trace.borrow();
        let bits = sampled_bits(&events);
        assert_eq!(bits.len(), 9);
        assert!(bits[0]);
        assert!(bits[1..].iter().all(|bit| !bit));
    }

    #[test]
    fn test_transfer_framed_by_chip_select() {
        let (mut interface, trace) = traced_interface();
        interface.write_command(0xFF).unwrap();

        let events = trace.borrow();
        let cs_edges: Vec<bool> = events
            .iter()
            .filter_map(|e| match e {
                Event::Level('c', level) => Some(*level),
                _ => None,
            })
            .collect();
        assert_eq!(cs_edges, [false, true]);
        // CS asserted before the first clock edge, released after the last
        let first_clk = events
            .iter()
            .position(|e| matches!(e, Event::Level('k', _)))
            .unwrap();
        let cs_low = events
            .iter()
            .position(|e| matches!(e, Event::Level('c', false)))
            .unwrap();
        assert!(cs_low < first_clk);
    }

    #[test]
    fn test_every_bit_gets_a_settle_delay() {
        let (mut interface, trace) = traced_interface();
        interface.write_data(0x5A).unwrap();

        let events = trace.borrow();
        // 9 bits x 3 line changes + 2 CS changes, one settle delay after each
        let delays = events
            .iter()
            .filter(|e| matches!(e, Event::DelayUs(SETTLE_DELAY_US)))
            .count();
        assert_eq!(delays, 9 * 3 + 2);
    }

    #[test]
    fn test_hard_reset_pulse_shape() {
        let (mut interface, trace) = traced_interface();
        interface.hard_reset().unwrap();

        let events = trace.borrow();
        assert_eq!(
            &events[..],
            [
                Event::Level('r', true),
                Event::DelayUs(10_000),
                Event::Level('r', false),
                Event::DelayUs(100_000),
                Event::Level('r', true),
                Event::DelayUs(10_000),
            ]
        );
    }

    #[test]
    fn test_backlight_drives_pin() {
        let (mut interface, trace) = traced_interface();
        interface.set_backlight(true).unwrap();
        interface.set_backlight(false).unwrap();

        let events = trace.borrow();
        assert_eq!(
            &events[..],
            [Event::Level('b', true), Event::Level('b', false)]
        );
    }

    #[test]
    fn test_backlight_without_pin_is_noop() {
        let trace: Trace = Rc::new(RefCell::new(Vec::new()));
        let pin = |label| TracePin {
            label,
            trace: Rc::clone(&trace),
        };
        let mut interface: BitBangInterface<_, _, _, _, TracePin, _> = BitBangInterface::new(
            pin('c'),
            pin('k'),
            pin('d'),
            pin('r'),
            None,
            TraceDelay {
                trace: Rc::clone(&trace),
            },
        );
        interface.set_backlight(true).unwrap();
        assert!(trace.borrow().is_empty());
    }
}
