//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS, PAGE_HEIGHT};

/// Default splash screen duration in milliseconds
pub const DEFAULT_SPLASH_DURATION_MS: u32 = 3_000;

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Number of columns (width in pixels, corresponds to segment outputs)
    pub width: u8,
    /// Number of rows (height in pixels, corresponds to common outputs)
    pub height: u8,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width == 0 or width > MAX_COLUMNS
    /// - height == 0 or height > MAX_ROWS
    /// - height % 8 != 0 (display RAM is addressed in 8-row pages)
    pub fn new(width: u8, height: u8) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_COLUMNS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_ROWS || height % PAGE_HEIGHT != 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> u8 {
        self.height / PAGE_HEIGHT
    }

    /// Calculate required buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        self.width as usize * self.pages() as usize
    }
}

/// Display configuration
///
/// Holds the panel geometry, the splash behaviour of
/// [`Display::begin`](crate::display::Display::begin) and the arguments of the
/// initialization sequence. Use `Builder` to create a Config.
///
/// The defaults reproduce the common 128x64 module wiring: internal charge
/// pump, segment remap and reversed COM scan (origin at the top left with
/// the flex cable at the bottom), alternative COM pin layout.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Show the splash image during `begin()`
    pub splash: bool,
    /// How long the splash image stays up, in milliseconds
    pub splash_duration_ms: u32,
    /// Clock divide ratio / oscillator frequency byte
    pub clock_divider: u8,
    /// Vertical display offset (0..=63)
    pub display_offset: u8,
    /// RAM row shown on the first display line (0..=63)
    pub start_line: u8,
    /// Charge pump setting (0x14 internal, 0x10 external VCC)
    pub charge_pump: u8,
    /// Map column 127 to SEG0
    pub segment_remap: bool,
    /// Scan COM outputs from COM[N-1] to COM0
    pub com_scan_descending: bool,
    /// COM pins hardware configuration byte
    pub com_pins: u8,
    /// Contrast written during initialization
    pub contrast: u8,
    /// Pre-charge period byte
    pub precharge: u8,
    /// VCOMH deselect level byte
    pub vcom_detect: u8,
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust
/// use ssd1306_fb::{Builder, Dimensions};
///
/// let dims = match Dimensions::new(128, 32) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new().dimensions(dims).com_pins(0x02).splash(false).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.dimensions.pages(), 4);
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// Show the splash image during `begin()`
    splash: bool,
    /// How long the splash image stays up, in milliseconds
    splash_duration_ms: u32,
    /// Clock divide ratio / oscillator frequency byte
    clock_divider: u8,
    /// Vertical display offset
    display_offset: u8,
    /// RAM row shown on the first display line
    start_line: u8,
    /// Charge pump setting
    charge_pump: u8,
    /// Map column 127 to SEG0
    segment_remap: bool,
    /// Scan COM outputs in reverse
    com_scan_descending: bool,
    /// COM pins hardware configuration byte
    com_pins: u8,
    /// Contrast written during initialization
    contrast: u8,
    /// Pre-charge period byte
    precharge: u8,
    /// VCOMH deselect level byte
    vcom_detect: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            splash: true,
            splash_duration_ms: DEFAULT_SPLASH_DURATION_MS,
            // Reset value: divide ratio 1, oscillator mid-range
            clock_divider: 0x80,
            display_offset: 0x00,
            start_line: 0,
            // Internal DC/DC on, needed by the common 3.3V modules
            charge_pump: 0x14,
            segment_remap: true,
            com_scan_descending: true,
            // Alternative COM pin layout (128x64); 128x32 modules want 0x02
            com_pins: 0x12,
            contrast: 0xCF,
            precharge: 0xF1,
            vcom_detect: 0x40,
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

    /// Enable or disable the splash screen shown by `begin()`
    pub fn splash(mut self, enabled: bool) -> Self {
        self.splash = enabled;
        self
    }

    /// Set how long the splash screen stays up
    pub fn splash_duration_ms(mut self, ms: u32) -> Self {
        self.splash_duration_ms = ms;
        self
    }

    /// Set the clock divide ratio / oscillator frequency byte
    pub fn clock_divider(mut self, value: u8) -> Self {
        self.clock_divider = value;
        self
    }

    /// Set the vertical display offset
    pub fn display_offset(mut self, value: u8) -> Self {
        self.display_offset = value;
        self
    }

    /// Set the display start line (masked to 0..=63)
    pub fn start_line(mut self, line: u8) -> Self {
        self.start_line = line & 0x3F;
        self
    }

    /// Set the charge pump byte (0x14 internal, 0x10 external VCC)
    pub fn charge_pump(mut self, value: u8) -> Self {
        self.charge_pump = value;
        self
    }

    /// Set whether column 127 maps to SEG0
    pub fn segment_remap(mut self, value: bool) -> Self {
        self.segment_remap = value;
        self
    }

    /// Set whether COM outputs scan in reverse
    ///
    /// Together with [`segment_remap`](Self::segment_remap) this rotates the
    /// picture by 180 degrees when both are flipped.
    pub fn com_scan_descending(mut self, value: bool) -> Self {
        self.com_scan_descending = value;
        self
    }

    /// Set the COM pins hardware configuration byte
    pub fn com_pins(mut self, value: u8) -> Self {
        self.com_pins = value;
        self
    }

    /// Set the contrast written during initialization
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = value;
        self
    }

    /// Set the pre-charge period byte
    pub fn precharge(mut self, value: u8) -> Self {
        self.precharge = value;
        self
    }

    /// Set the VCOMH deselect level byte
    pub fn vcom_detect(mut self, value: u8) -> Self {
        self.vcom_detect = value;
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
            splash: self.splash,
            splash_duration_ms: self.splash_duration_ms,
            clock_divider: self.clock_divider,
            display_offset: self.display_offset,
            start_line: self.start_line,
            charge_pump: self.charge_pump,
            segment_remap: self.segment_remap,
            com_scan_descending: self.com_scan_descending,
            com_pins: self.com_pins,
            contrast: self.contrast,
            precharge: self.precharge,
            vcom_detect: self.vcom_detect,
        })
    }
}
