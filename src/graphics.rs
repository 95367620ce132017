//! Graphics support via embedded-graphics
//!
//! [`Framebuffer`] and [`Display`] implement the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait, so
//! any embedded-graphics primitive, font or image can be rendered into the
//! page buffer. Drawing never touches the bus; call
//! [`Display::flush`] afterwards.
//!
//! Pixels outside the panel are dropped, like the built-in primitives do.
//!
//! ## Example
//!
//! ```rust
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use ssd1306_fb::{Color, Dimensions, Framebuffer};
//!
//! let dims = match Dimensions::new(128, 64) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let mut fb = match Framebuffer::from_buffer(dims, [0u8; 1024]) {
//!     Ok(fb) => fb,
//!     Err(_) => return,
//! };
//!
//! let _ = Rectangle::new(Point::new(0, 0), Size::new(128, 64))
//!     .into_styled(PrimitiveStyle::with_stroke(Color::On, 1))
//!     .draw(&mut fb);
//!
//! let _ = Circle::new(Point::new(90, 20), 24)
//!     .into_styled(PrimitiveStyle::with_fill(Color::On))
//!     .draw(&mut fb);
//!
//! let _ = Text::new(
//!     "Hello, OLED!",
//!     Point::new(4, 12),
//!     MonoTextStyle::new(&FONT_6X10, Color::On),
//! )
//! .draw(&mut fb);
//!
//! assert!(fb.get_pixel(0, 0));
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
};

use crate::color::Color;
use crate::display::Display;
use crate::framebuffer::Framebuffer;
use crate::interface::DisplayInterface;

impl<B> DrawTarget for Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.draw_pixel(x, y, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_screen(color);
        Ok(())
    }
}

impl<B> OriginDimensions for Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}

impl<I, B> DrawTarget for Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.framebuffer_mut().draw_iter(pixels)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.framebuffer_mut().fill_screen(color);
        Ok(())
    }
}

impl<I, B> OriginDimensions for Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        self.framebuffer().size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, Dimensions};
    use embedded_graphics::{
        pixelcolor::BinaryColor,
        prelude::*,
        primitives::{Line, PrimitiveStyle, Rectangle},
    };

    #[derive(Debug)]
    struct MockInterface;

    impl DisplayInterface for MockInterface {
        type Error = Infallible;

        fn send_command(&mut self, _command: u8) -> Result<(), Self::Error> {
            Ok(())
        }

        fn send_data(&mut self, _data: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn test_framebuffer() -> Framebuffer<[u8; 512]> {
        Framebuffer::from_buffer(Dimensions::new(128, 32).unwrap(), [0u8; 512]).unwrap()
    }

    #[test]
    fn test_size_matches_dimensions() {
        let fb = test_framebuffer();
        assert_eq!(fb.size(), Size::new(128, 32));

        let config = Builder::new()
            .dimensions(Dimensions::new(96, 16).unwrap())
            .build()
            .unwrap();
        let display = Display::with_buffer(MockInterface, config, [0u8; 192]).unwrap();
        assert_eq!(display.size(), Size::new(96, 16));
    }

    #[test]
    fn test_filled_rectangle_sets_page_bytes() {
        let mut fb = test_framebuffer();
        Rectangle::new(Point::new(0, 0), Size::new(4, 8))
            .into_styled(PrimitiveStyle::with_fill(Color::On))
            .draw(&mut fb)
            .unwrap();

        assert_eq!(&fb.page(0)[..5], &[0xFF, 0xFF, 0xFF, 0xFF, 0x00]);
        assert!(fb.page(1).iter().all(|b| *b == 0));
    }

    #[test]
    fn test_offscreen_pixels_are_clipped() {
        let mut fb = test_framebuffer();
        Line::new(Point::new(-10, 5), Point::new(200, 5))
            .into_styled(PrimitiveStyle::with_stroke(Color::On, 1))
            .draw(&mut fb)
            .unwrap();

        for x in 0..128 {
            assert!(fb.get_pixel(x, 5));
        }
        assert!(!fb.get_pixel(0, 4));
    }

    #[test]
    fn test_clear_fills_whole_buffer() {
        let mut fb = test_framebuffer();
        DrawTarget::clear(&mut fb, Color::On).unwrap();
        assert!(fb.as_bytes().iter().all(|b| *b == 0xFF));
    }

    #[test]
    fn test_display_draws_into_framebuffer() {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 64).unwrap())
            .build()
            .unwrap();
        let mut display = Display::with_buffer(MockInterface, config, [0u8; 1024]).unwrap();

        Pixel(Point::new(3, 9), Color::from(BinaryColor::On))
            .draw(&mut display)
            .unwrap();
        assert!(display.framebuffer().get_pixel(3, 9));

        DrawTarget::clear(&mut display, Color::Off).unwrap();
        assert!(display.framebuffer().as_bytes().iter().all(|b| *b == 0));
    }
}
