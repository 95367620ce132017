//! SSD1306 command definitions
//!
//! This module defines the command bytes used to control the SSD1306 OLED
//! controller. Every command byte and every command argument travels in its
//! own command frame; pixel data travels in data frames.
//!
//! ## Frame Structure (I2C)
//!
//! Each bus write starts with a control byte:
//! - [`COMMAND_CONTROL`] (`0x00`): the next byte is a command (or argument)
//! - [`DATA_CONTROL`] (`0x40`): the remaining bytes are display RAM data
//!
//! ## Example
//!
//! ```rust
//! use ssd1306_fb::{command, DisplayInterface};
//! # use core::convert::Infallible;
//! # struct Bus;
//! # impl DisplayInterface for Bus {
//! #     type Error = Infallible;
//! #     fn send_command(&mut self, _command: u8) -> Result<(), Self::Error> { Ok(()) }
//! #     fn send_data(&mut self, _data: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let mut interface = Bus;
//! // Set contrast to the power-on default
//! let _ = interface.send_command(command::SET_CONTRAST);
//! let _ = interface.send_command(0x7F);
//! ```

// Frame control bytes

/// Control byte that marks a command frame (Co = 0, D/C# = 0)
pub const COMMAND_CONTROL: u8 = 0x00;

/// Control byte that marks a data frame (Co = 0, D/C# = 1)
pub const DATA_CONTROL: u8 = 0x40;

// Fundamental commands

/// Set contrast control command (0x81)
///
/// Followed by one argument byte (0x00..=0xFF).
pub const SET_CONTRAST: u8 = 0x81;

/// Resume display from RAM content (0xA4)
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;

/// Normal display, a set RAM bit lights the pixel (0xA6)
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverse display, a cleared RAM bit lights the pixel (0xA7)
pub const INVERT_DISPLAY: u8 = 0xA7;

/// Display off, sleep mode (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on, normal mode (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

// Addressing commands

/// Set memory addressing mode command (0x20)
///
/// Followed by one argument: 0x00 horizontal, 0x01 vertical, 0x02 page.
pub const MEMORY_MODE: u8 = 0x20;

/// Horizontal addressing mode argument for [`MEMORY_MODE`]
///
/// The column pointer wraps to the next page after the last column, which
/// is what makes the page layout of the framebuffer stream straight to RAM.
pub const MEMORY_MODE_HORIZONTAL: u8 = 0x00;

/// Set column address range command (0x21)
///
/// Followed by two arguments: start column, end column.
pub const COLUMN_ADDR: u8 = 0x21;

/// Set page address range command (0x22)
///
/// Followed by two arguments: start page, end page.
pub const PAGE_ADDR: u8 = 0x22;

// Hardware configuration commands

/// Set display start line (0x40 | line, line in 0..=63)
pub const SET_START_LINE: u8 = 0x40;

/// Set segment re-map (0xA0 | remap)
///
/// Bit 0 set maps column 127 to SEG0.
pub const SEG_REMAP: u8 = 0xA0;

/// Set multiplex ratio command (0xA8)
///
/// Followed by one argument: number of rows - 1.
pub const SET_MULTIPLEX: u8 = 0xA8;

/// COM output scan direction, COM0 to COM[N-1] (0xC0)
pub const COM_SCAN_INC: u8 = 0xC0;

/// COM output scan direction, COM[N-1] to COM0 (0xC8)
pub const COM_SCAN_DEC: u8 = 0xC8;

/// Set display offset command (0xD3)
///
/// Followed by one argument: vertical shift by COM (0..=63).
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration command (0xDA)
///
/// Followed by one argument: 0x02 sequential (128x32), 0x12 alternative (128x64).
pub const SET_COM_PINS: u8 = 0xDA;

// Timing and driving scheme commands

/// Set display clock divide ratio / oscillator frequency command (0xD5)
pub const SET_DISPLAY_CLOCK_DIV: u8 = 0xD5;

/// Set pre-charge period command (0xD9)
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set VCOMH deselect level command (0xDB)
pub const SET_VCOM_DETECT: u8 = 0xDB;

/// Charge pump setting command (0x8D)
///
/// Followed by one argument: 0x14 enable, 0x10 disable.
pub const CHARGE_PUMP: u8 = 0x8D;

// Scrolling commands

/// Right horizontal scroll setup (0x26)
pub const RIGHT_HORIZONTAL_SCROLL: u8 = 0x26;

/// Left horizontal scroll setup (0x27)
pub const LEFT_HORIZONTAL_SCROLL: u8 = 0x27;

/// Vertical and right horizontal scroll setup (0x29)
pub const VERTICAL_AND_RIGHT_HORIZONTAL_SCROLL: u8 = 0x29;

/// Vertical and left horizontal scroll setup (0x2A)
pub const VERTICAL_AND_LEFT_HORIZONTAL_SCROLL: u8 = 0x2A;

/// Deactivate scroll (0x2E)
///
/// RAM must be rewritten after this command, the controller keeps its
/// scrolled row pointer until the next full write.
pub const DEACTIVATE_SCROLL: u8 = 0x2E;

/// Activate scroll (0x2F)
///
/// Only valid after one of the scroll setup commands.
pub const ACTIVATE_SCROLL: u8 = 0x2F;

/// Set vertical scroll area command (0xA3)
///
/// Followed by two arguments: rows in the fixed top area, rows in the scroll area.
pub const SET_VERTICAL_SCROLL_AREA: u8 = 0xA3;
