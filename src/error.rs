//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! framebuffer storage ([`BufferError`]) and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`BufferError`] - Framebuffer allocation or adoption failures
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level bus errors
//!
//! Pixel-level mistakes (drawing outside the panel) are never errors; they
//! are clipped silently.
//!
//! ## Example
//!
//! ```
//! use ssd1306_fb::{Builder, BuilderError, Dimensions};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Height must be a whole number of pages
//! let result = Dimensions::new(128, 60);
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Maximum number of columns (segment outputs) driven by the SSD1306
pub const MAX_COLUMNS: u8 = 128;

/// Maximum number of rows (common outputs) driven by the SSD1306
pub const MAX_ROWS: u8 = 64;

/// Number of pixel rows packed into one byte of display RAM
pub const PAGE_HEIGHT: u8 = 8;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (I2C/SPI/GPIO)
    ///
    /// Wraps the underlying bus error. The controller may be left in a
    /// partially configured state if this happens during initialization.
    Interface(I::Error),
    /// Framebuffer storage could not be allocated or adopted
    Buffer(BufferError),
    /// Invalid scroll page range
    ///
    /// Both pages must lie on the panel and `start` must not exceed `end`.
    InvalidScrollRange {
        /// First page of the scrolled area
        start: u8,
        /// Last page of the scrolled area
        end: u8,
    },
}

impl<I: DisplayInterface> From<BufferError> for Error<I> {
    fn from(err: BufferError) -> Self {
        Self::Buffer(err)
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::Buffer(e) => write!(f, "{e}"),
            Self::InvalidScrollRange { start, end } => {
                write!(f, "Invalid scroll range: pages {start}..={end}")
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors raised while creating or adopting framebuffer storage
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BufferError {
    /// The allocator could not provide the buffer
    Allocation {
        /// Requested size in bytes
        requested: usize,
    },
    /// A caller-supplied buffer is shorter than the panel needs
    TooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl core::fmt::Display for BufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Allocation { requested } => {
                write!(f, "Failed to allocate {requested} byte framebuffer")
            }
            Self::TooSmall { required, provided } => write!(
                f,
                "Buffer too small: required {required} bytes, provided {provided}"
            ),
        }
    }
}

impl core::error::Error for BufferError {}

/// Errors that can occur when building configuration
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
        /// Width in pixels requested
        width: u8,
        /// Height in pixels requested
        height: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_COLUMNS}x{MAX_ROWS}, height must be multiple of {PAGE_HEIGHT})"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
