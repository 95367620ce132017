//! Splash screen bitmap
//!
//! A 128x64 image shown by [`Display::begin`](crate::display::Display::begin)
//! unless the splash is disabled in the configuration. Packed 1 bit per pixel,
//! row-major, MSB first, 16 bytes per row, the format
//! [`Framebuffer::draw_bitmap`](crate::framebuffer::Framebuffer::draw_bitmap) expects.

/// Splash bitmap width in pixels
pub const SPLASH_WIDTH: u8 = 128;

/// Splash bitmap height in pixels
pub const SPLASH_HEIGHT: u8 = 64;

/// Splash bitmap, one 16-byte row per line
#[rustfmt::skip]
pub const SPLASH: [u8; 1024] = [
    0x3F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFC,
    0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02,
    0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
    0x8F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xF1,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x7F, 0x87, 0xF9, 0xF8, 0x01, 0x81, 0xFF, 0x87, 0xE0, 0x1E, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x7F, 0x87, 0xF9, 0xF8, 0x01, 0x81, 0xFF, 0x87, 0xE0, 0x1E, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x01, 0x80, 0x18, 0x01, 0x86, 0x07, 0x80, 0x06, 0x18, 0x18, 0x60, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x01, 0x80, 0x18, 0x01, 0x86, 0x07, 0x80, 0x06, 0x18, 0x18, 0x60, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x01, 0x80, 0x18, 0x01, 0x81, 0x81, 0x80, 0x18, 0x18, 0x79, 0x80, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x01, 0x80, 0x18, 0x01, 0x81, 0x81, 0x80, 0x18, 0x18, 0x79, 0x80, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x7E, 0x07, 0xE1, 0x81, 0x81, 0x80, 0x06, 0x19, 0x99, 0xFE, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x7E, 0x07, 0xE1, 0x81, 0x81, 0x80, 0x06, 0x19, 0x99, 0xFE, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x01, 0x80, 0x19, 0x81, 0x81, 0x80, 0x01, 0x9E, 0x19, 0x81, 0x80, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x01, 0x80, 0x19, 0x81, 0x81, 0x80, 0x01, 0x9E, 0x19, 0x81, 0x80, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x01, 0x80, 0x19, 0x86, 0x01, 0x81, 0x81, 0x98, 0x19, 0x81, 0x80, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x01, 0x80, 0x19, 0x86, 0x01, 0x81, 0x81, 0x98, 0x19, 0x81, 0x80, 0x00, 0x09,
    0x90, 0x00, 0x01, 0xFE, 0x1F, 0xE1, 0xF8, 0x07, 0xE0, 0x7E, 0x07, 0xE0, 0x7E, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x01, 0xFE, 0x1F, 0xE1, 0xF8, 0x07, 0xE0, 0x7E, 0x07, 0xE0, 0x7E, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x80, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x60, 0x00, 0x00, 0x04, 0x00, 0x18, 0x60, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x90, 0x00, 0x00, 0x04, 0x00, 0x24, 0x90, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x85, 0x8E, 0x68, 0xE5, 0x91, 0x20, 0x83, 0x96, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x01, 0xC6, 0x41, 0x55, 0x16, 0x51, 0x71, 0xC4, 0x59, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x84, 0x0F, 0x55, 0xF4, 0x51, 0x20, 0x87, 0xD0, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x84, 0x11, 0x45, 0x04, 0x53, 0x20, 0x84, 0x10, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x84, 0x0F, 0x44, 0xE7, 0x8D, 0x20, 0x83, 0x90, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x21, 0xC7, 0x00, 0x00, 0x03, 0x04, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x62, 0x28, 0x80, 0x00, 0x04, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x20, 0x28, 0x80, 0x88, 0x08, 0x14, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x20, 0x47, 0x00, 0x50, 0x0F, 0x24, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x20, 0x88, 0x80, 0x20, 0x08, 0xBE, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x21, 0x08, 0x80, 0x50, 0x08, 0x84, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x73, 0xE7, 0x00, 0x88, 0x07, 0x04, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x90, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09,
    0x8F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xF1,
    0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
    0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02,
    0x3F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFC,
];
