//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_GATE_OUTPUTS, MAX_SOURCE_OUTPUTS};

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Number of rows (height in pixels, corresponds to gate outputs)
    pub rows: u16,
    /// Number of columns (width in pixels, corresponds to source outputs)
    pub cols: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - rows == 0 or rows > MAX_GATE_OUTPUTS
    /// - cols == 0 or cols > MAX_SOURCE_OUTPUTS
    pub fn new(rows: u16, cols: u16) -> Result<Self, BuilderError> {
        if rows == 0 || rows > MAX_GATE_OUTPUTS {
            return Err(BuilderError::InvalidDimensions { rows, cols });
        }
        if cols == 0 || cols > MAX_SOURCE_OUTPUTS {
            return Err(BuilderError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of pixels in the framebuffer
    pub fn pixel_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Required framebuffer size in bytes (16 bits per pixel)
    pub fn buffer_size(&self) -> usize {
        self.pixel_count() * 2
    }
}

/// Scanout timing parameters for the parallel RGB interface
///
/// These are handed to the external DMA scanout engine when it is started;
/// the crate itself never drives the parallel interface. The defaults are the
/// vendor constants for the 480x854 reference panel. Bounce-buffer sizing and
/// memory alignment are board-specific tuning left to the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RgbTimings {
    /// Pixel clock in Hz
    pub pclk_hz: u32,
    /// HSYNC pulse width in pixel clocks
    pub hsync_pulse_width: u16,
    /// HSYNC back porch in pixel clocks
    pub hsync_back_porch: u16,
    /// HSYNC front porch in pixel clocks
    pub hsync_front_porch: u16,
    /// VSYNC pulse width in lines
    pub vsync_pulse_width: u16,
    /// VSYNC back porch in lines
    pub vsync_back_porch: u16,
    /// VSYNC front porch in lines
    pub vsync_front_porch: u16,
}

impl Default for RgbTimings {
    fn default() -> Self {
        Self {
            pclk_hz: 12_000_000,
            hsync_pulse_width: 10,
            hsync_back_porch: 50,
            hsync_front_porch: 10,
            vsync_pulse_width: 2,
            vsync_back_porch: 20,
            vsync_front_porch: 10,
        }
    }
}

/// Display configuration
///
/// Use [`Builder`] to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Parallel RGB scanout timings
    pub timings: RgbTimings,
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use st7701::{Builder, Dimensions};
///
/// let dims = match Dimensions::new(854, 480) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// Parallel RGB scanout timings
    timings: RgbTimings,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            timings: RgbTimings::default(),
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set scanout timings
    ///
    /// Defaults are the vendor constants for the reference panel.
    pub fn timings(mut self, timings: RgbTimings) -> Self {
        self.timings = timings;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            timings: self.timings,
        })
    }
}
