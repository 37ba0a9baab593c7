//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! framebuffer geometry ([`GeometryError`]) and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`GeometryError`] - Invalid-argument errors from drawing and rotation
//! - [`Error`] - Runtime errors during display operations
//! - [`LinkError`](crate::interface::LinkError) - Low-level pin errors on the serial link
//!
//! ## Example
//!
//! ```
//! use st7701::{Builder, Dimensions, BuilderError};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Invalid dimensions
//! let result = Dimensions::new(1000, 500); // Too large
//! assert!(result.is_err());
//! ```

use crate::interface::PanelInterface;

/// Maximum gate outputs (rows) supported by the ST7701 controller
///
/// The ST7701 drives up to 864 gate lines.
///
/// NOTE: Most panels wire fewer gates; configure [`crate::Dimensions`] accordingly.
pub const MAX_GATE_OUTPUTS: u16 = 864;

/// Maximum source outputs (columns) supported by the ST7701 controller
///
/// The ST7701 drives up to 480 RGB source lines.
pub const MAX_SOURCE_OUTPUTS: u16 = 480;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
pub enum Error<I: PanelInterface> {
    /// Serial link error (GPIO)
    ///
    /// Wraps the underlying hardware error from the [`PanelInterface`] implementation.
    Interface(I::Error),
    /// A drawing or geometry operation was invoked before `init` completed
    /// (or after `deinit`)
    NotInitialized,
    /// Invalid-argument error from the drawing or geometry layer
    Geometry(GeometryError),
}

// Manual impl: deriving would demand `I: Debug`, but only `I::Error`
// appears in the variants and the trait already requires it to be `Debug`.
impl<I: PanelInterface> core::fmt::Debug for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => f.debug_tuple("Interface").field(e).finish(),
            Self::NotInitialized => write!(f, "NotInitialized"),
            Self::Geometry(e) => f.debug_tuple("Geometry").field(e).finish(),
        }
    }
}

impl<I: PanelInterface> From<GeometryError> for Error<I> {
    fn from(err: GeometryError) -> Self {
        Self::Geometry(err)
    }
}

impl<I: PanelInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::NotInitialized => write!(f, "Display not initialized"),
            Self::Geometry(e) => write!(f, "{e}"),
        }
    }
}

impl<I: PanelInterface> core::error::Error for Error<I> {}

/// Invalid-argument errors from the framebuffer and geometry layers
///
/// Out-of-bounds drawing geometry is never an error (it is silently clipped);
/// these variants cover the cases that abort an operation with no partial effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// Rotation angle is not one of 90, 180 or 270 degrees
    ///
    /// The buffer is left untouched.
    InvalidAngle {
        /// Angle that was requested
        degrees: u16,
    },
    /// Blit source buffer is smaller than `w * h * 2` bytes
    ///
    /// Checked before any write; the destination is left unmodified.
    SourceTooSmall {
        /// Required source size in bytes
        required: usize,
        /// Provided source size in bytes
        provided: usize,
    },
    /// Pixel store length does not match `width * height`
    SizeMismatch {
        /// Expected element count
        expected: usize,
        /// Provided element count
        provided: usize,
    },
}

impl core::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidAngle { degrees } => {
                write!(
                    f,
                    "Invalid rotation angle: {degrees} (expected 90, 180 or 270)"
                )
            }
            Self::SourceTooSmall { required, provided } => {
                write!(
                    f,
                    "Blit source too small: required {required} bytes, provided {provided}"
                )
            }
            Self::SizeMismatch { expected, provided } => {
                write!(
                    f,
                    "Buffer size mismatch: expected {expected} pixels, provided {provided}"
                )
            }
        }
    }
}

impl core::error::Error for GeometryError {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Number of rows (height) requested
        rows: u16,
        /// Number of columns (width) requested
        cols: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { rows, cols } => write!(
                f,
                "Invalid dimensions {rows}x{cols} (max {MAX_GATE_OUTPUTS}x{MAX_SOURCE_OUTPUTS})"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
