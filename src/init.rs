//! Vendor bring-up script
//!
//! The ST7701 powers up with its registers in an undefined state; before the
//! parallel RGB interface can be trusted it must be walked through a fixed
//! vendor-supplied register script over the 9-bit serial link. The script is
//! modeled as data - an ordered table of [`SequenceOp`] entries - consumed by
//! the generic player in [`Display`](crate::display::Display), so the
//! timing-critical player and the vendor byte values can be tested separately.
//!
//! The byte values, their order, and the interleaved delays are an external
//! contract supplied by the panel vendor. They are reproduced here
//! byte-for-byte; deviating from them produces an uninitialized or corrupted
//! display. The sequence is open-loop: nothing is read back and no step can
//! detect failure.

use crate::command;

/// One step of the bring-up script
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceOp {
    /// Send an opcode byte followed by its parameter bytes
    Command {
        /// Opcode, sent with the mode bit clear
        opcode: u8,
        /// Parameters, each sent with the mode bit set
        params: &'static [u8],
    },
    /// Block for the given number of milliseconds before the next frame
    DelayMs(u32),
}

/// Shorthand for building script entries
const fn cmd(opcode: u8, params: &'static [u8]) -> SequenceOp {
    SequenceOp::Command { opcode, params }
}

/// The fixed ST7701 bring-up script
///
/// Register pages 0x13, 0x10 and 0x11 are selected in turn via
/// [`command::PAGE_SELECT`]; every page-relative opcode is preceded by the
/// page select for its bank. The hardware reset pulse is not part of the
/// table - it is driven by
/// [`PanelInterface::hard_reset`](crate::interface::PanelInterface::hard_reset)
/// before the script is played.
pub const BRING_UP_SEQUENCE: &[SequenceOp] = &[
    // Page 13 (vendor-specific)
    cmd(command::PAGE_SELECT, &[0x77, 0x01, 0x00, 0x00, 0x13]),
    cmd(0xEF, &[0x08]),
    // Page 10 (display settings)
    cmd(command::PAGE_SELECT, &[0x77, 0x01, 0x00, 0x00, 0x10]),
    cmd(command::LNESET, &[0xE9, 0x03]),
    cmd(command::PORCTRL, &[0x10, 0x0C]),
    cmd(command::INVSET, &[0x20, 0x0A]),
    cmd(command::RGBCTRL, &[0x10]),
    cmd(
        command::PVGAMCTRL,
        &[
            0x07, 0x14, 0x9C, 0x0B, 0x10, 0x06, 0x08, 0x09, 0x08, 0x22, 0x02, 0x4F, 0x0E, 0x66,
            0x2D, 0x1C,
        ],
    ),
    cmd(
        command::NVGAMCTRL,
        &[
            0x09, 0x17, 0x9E, 0x0F, 0x11, 0x06, 0x0C, 0x08, 0x08, 0x26, 0x04, 0x51, 0x10, 0x6A,
            0x33, 0x1D,
        ],
    ),
    // Page 11 (power settings)
    cmd(command::PAGE_SELECT, &[0x77, 0x01, 0x00, 0x00, 0x11]),
    cmd(command::VRHS, &[0x4D]),
    cmd(command::VCOMS, &[0x43]),
    cmd(command::VGHSS, &[0x84]),
    cmd(command::TESTCMD, &[0x80]),
    cmd(command::VGLS, &[0x45]),
    cmd(command::PWCTRL1, &[0x85]),
    cmd(command::PWCTRL2, &[0x33]),
    cmd(command::SPD1, &[0x78]),
    cmd(command::SPD2, &[0x78]),
    cmd(command::MIPISET1, &[0x88]),
    // GIP timing (gate-in-panel)
    cmd(0xE0, &[0x00, 0x00, 0x02]),
    cmd(
        0xE1,
        &[0x06, 0xA0, 0x08, 0xA0, 0x05, 0xA0, 0x07, 0xA0, 0x00, 0x44, 0x44],
    ),
    cmd(
        0xE2,
        &[0x30, 0x30, 0x44, 0x44, 0x6E, 0xA0, 0x00, 0x00, 0x6E, 0xA0, 0x00, 0x00],
    ),
    cmd(0xE3, &[0x00, 0x00, 0x33, 0x33]),
    cmd(0xE4, &[0x44, 0x44]),
    cmd(
        0xE5,
        &[
            0x0D, 0x69, 0x0A, 0xA0, 0x0F, 0x6B, 0x0A, 0xA0, 0x09, 0x65, 0x0A, 0xA0, 0x0B, 0x67,
            0x0A, 0xA0,
        ],
    ),
    cmd(0xE6, &[0x00, 0x00, 0x33, 0x33]),
    cmd(0xE7, &[0x44, 0x44]),
    cmd(
        0xE8,
        &[
            0x0C, 0x68, 0x0A, 0xA0, 0x0E, 0x6A, 0x0A, 0xA0, 0x08, 0x64, 0x0A, 0xA0, 0x0A, 0x66,
            0x0A, 0xA0,
        ],
    ),
    cmd(0xE9, &[0x36, 0x00]),
    cmd(0xEB, &[0x00, 0x01, 0xE4, 0xE4, 0x44, 0x88, 0x40]),
    cmd(
        0xED,
        &[
            0xFF, 0x45, 0x67, 0xFA, 0x01, 0x2B, 0xCF, 0xFF, 0xFF, 0xFC, 0xB2, 0x10, 0xAF, 0x76,
            0x54, 0xFF,
        ],
    ),
    cmd(0xEF, &[0x10, 0x0D, 0x04, 0x08, 0x3F, 0x1F]),
    // 16-bit packed pixel format
    cmd(command::COLMOD, &[command::COLMOD_RGB565]),
    // Sleep out; the controller needs 120ms before the next frame
    cmd(command::SLEEP_OUT, &[]),
    SequenceOp::DelayMs(120),
    // Tearing effect on (V-blanking only)
    cmd(command::TEARING_EFFECT_ON, &[0x00]),
    // Display on, short settle
    cmd(command::DISPLAY_ON, &[]),
    SequenceOp::DelayMs(20),
];
