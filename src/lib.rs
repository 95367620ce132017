//! SSD1306 OLED Framebuffer Driver
//!
//! A driver for SSD1306 monochrome OLED panels (up to 128x64 pixels) that
//! keeps a full copy of display RAM in memory and pushes it to the
//! controller on demand.
//!
//! ## Features
//!
//! - `no_std` compatible, heap-free with caller-provided buffers
//! - `embedded-hal` v1.0 support, I2C and 4-wire SPI
//! - Built-in primitives: lines, rectangles, circles, bitmaps, 5x7 text
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Hardware scrolling, contrast, inversion
//!
//! ## Usage
//!
//! ```rust
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
//! use ssd1306_fb::{Builder, Color, Dimensions, Display, I2cInterface};
//!
//! # struct MockI2c;
//! # impl ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: SevenBitAddress,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let i2c = MockI2c;
//! # let mut delay = MockDelay;
//! let interface = I2cInterface::new(i2c);
//! let dims = match Dimensions::new(128, 64) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).splash(false).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = match Display::with_buffer(interface, config, [0u8; 1024]) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//! let _ = display.begin(&mut delay);
//!
//! let fb = display.framebuffer_mut();
//! fb.draw_rect(0, 0, 127, 63, Color::On);
//! fb.draw_string(10, 28, "Hello", 2, Color::On, false, false);
//! let _ = display.flush();
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Monochrome pixel color
pub mod color;
/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Drawing primitives on the framebuffer
pub mod draw;
/// Error types for the driver
pub mod error;
/// Built-in 5x7 font
pub mod font;
/// Page-organized pixel buffer
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;
/// Boot splash image
pub mod splash;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::Color;
pub use config::{Builder, Config, Dimensions, MAX_COLUMNS, MAX_ROWS};
pub use display::{CONTRAST_ADVISORY_LIMIT, Display, ScrollDirection, ScrollSpeed};
pub use draw::TextPosition;
pub use error::{BufferError, BuilderError, Error};
pub use framebuffer::Framebuffer;
pub use interface::InterfaceError;
pub use interface::{DEFAULT_I2C_ADDRESS, DisplayInterface, I2cInterface, SpiInterface};
