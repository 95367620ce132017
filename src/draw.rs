//! Drawing primitives
//!
//! Everything here mutates a [`Framebuffer`] only; nothing touches the bus.
//! Call [`Display::flush`](crate::display::Display::flush) to show the result.
//!
//! All primitives clip per pixel: shapes may extend past the panel edges,
//! and the off-panel part is dropped silently.
//!
//! ## Example
//!
//! ```
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
//! fb.draw_rect(0, 0, 127, 63, Color::On);
//! fb.draw_fill_circle(64, 32, 10, Color::On);
//! let end = fb.draw_string(4, 4, "Hi!", 1, Color::On, false, true);
//! assert_eq!((end.x, end.y), (18, 7));
//! ```

use crate::color::Color;
use crate::font::{GLYPH_HEIGHT, GLYPH_WIDTH, glyph};
use crate::framebuffer::Framebuffer;

/// Horizontal advance of one unscaled character cell (glyph + 1px gap)
pub const CHAR_ADVANCE: i32 = GLYPH_WIDTH as i32 + 1;

/// Vertical advance of one unscaled text line (glyph + 1px gap)
pub const LINE_ADVANCE: i32 = GLYPH_HEIGHT as i32 + 1;

/// Cursor offset after rendering a string
///
/// Both coordinates are relative to the string's origin. `x` is where the
/// next character would start on the last line; `y` is the bottom of the
/// last line (line offset + `7 * scale`). Useful for centering text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextPosition {
    /// Horizontal offset of the cursor
    pub x: i32,
    /// Vertical offset of the bottom of the last line
    pub y: i32,
}

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Draw a single pixel
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.set_pixel(x, y, color.is_on());
    }

    /// Paint the whole panel in one color
    pub fn fill_screen(&mut self, color: Color) {
        self.fill_bytes(color.fill_byte());
    }

    /// Draw `len` pixels to the right of `(x, y)`, starting at `(x, y)`
    pub fn draw_horizontal_line(&mut self, x: i32, y: i32, len: i32, color: Color) {
        for i in 0..len {
            self.draw_pixel(x.saturating_add(i), y, color);
        }
    }

    /// Draw `len` pixels downwards, starting at `(x, y)`
    pub fn draw_vertical_line(&mut self, x: i32, y: i32, len: i32, color: Color) {
        for i in 0..len {
            self.draw_pixel(x, y.saturating_add(i), color);
        }
    }

    /// Draw a rectangle outline
    ///
    /// The top and bottom edges are `width` pixels long and sit on rows `y`
    /// and `y + height`; the left and right edges are `height` pixels long
    /// and sit on columns `x` and `x + width`. The bottom-right corner pixel
    /// `(x + width, y + height)` is not drawn.
    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.draw_horizontal_line(x, y, width, color);
        self.draw_vertical_line(x.saturating_add(width), y, height, color);
        self.draw_horizontal_line(x, y.saturating_add(height), width, color);
        self.draw_vertical_line(x, y, height, color);
    }

    /// Draw a filled rectangle
    ///
    /// Draws the [`draw_rect`](Self::draw_rect) outline, then fills the
    /// `width` by `height` box at `(x, y)`.
    pub fn draw_fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.draw_rect(x, y, width, height, color);
        for dy in 0..height {
            self.draw_horizontal_line(x, y.saturating_add(dy), width, color);
        }
    }

    /// Draw a circle outline by sampling its parametric equation
    ///
    /// Plots `(x + r cos t, y + r sin t)` (truncated toward zero) for
    /// `t = 0, step, 2 * step, ...` while `t < 2 pi`. Smaller steps give a
    /// smoother outline at a higher cost; about `0.1` suits small radii.
    /// A step that is not a positive number draws nothing.
    ///
    /// `t` accumulates in `f32`. Once the step is too small to change `t`,
    /// every further sample would hit the same pixel and the sweep stops.
    pub fn draw_circle(&mut self, x: i32, y: i32, r: i32, angle_step: f32, color: Color) {
        if angle_step.is_nan() || angle_step <= 0.0 {
            return;
        }
        let (cx, cy, r) = (f64::from(x), f64::from(y), f64::from(r));
        let mut angle = 0.0f32;
        while f64::from(angle) < core::f64::consts::TAU {
            let t = f64::from(angle);
            let px = cx + r * libm::cos(t);
            let py = cy + r * libm::sin(t);
            self.draw_pixel(px as i32, py as i32, color);

            let next = angle + angle_step;
            if next <= angle {
                break;
            }
            angle = next;
        }
    }

    /// Draw a filled circle
    ///
    /// Each row `dy` in `-r..=r` is filled from `-w` to `w`, where
    /// `w = floor(sqrt(r^2 - dy^2))`.
    pub fn draw_fill_circle(&mut self, x: i32, y: i32, r: i32, color: Color) {
        if r < 0 {
            return;
        }
        let r2 = i64::from(r) * i64::from(r);
        for dy in -r..=r {
            let half = (r2 - i64::from(dy) * i64::from(dy)) as u64;
            let dx_limit = half.isqrt() as i32;
            self.draw_horizontal_line(
                x.saturating_sub(dx_limit),
                y.saturating_add(dy),
                dx_limit.saturating_mul(2).saturating_add(1),
                color,
            );
        }
    }

    /// Overlay a packed 1-bit bitmap
    ///
    /// `bitmap` is row-major, most significant bit first, and every row is
    /// padded to `(w + 7) / 8` bytes. Set bits are drawn in `color`; clear
    /// bits leave the framebuffer untouched. Rows missing from a short
    /// bitmap are skipped.
    pub fn draw_bitmap(&mut self, x: i32, y: i32, bitmap: &[u8], w: i32, h: i32, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        let row_bytes = (w as usize).div_ceil(8);
        for (j, row) in bitmap.chunks(row_bytes).take(h as usize).enumerate() {
            for i in 0..w as usize {
                let Some(byte) = row.get(i / 8) else {
                    break;
                };
                if byte & (0x80 >> (i % 8)) != 0 {
                    self.draw_pixel(x.saturating_add(i as i32), y.saturating_add(j as i32), color);
                }
            }
        }
    }

    /// Render text with the built-in 5x7 font
    ///
    /// # Arguments
    ///
    /// * `x`, `y` - Top-left corner of the first character
    /// * `text` - Characters outside `0x20..=0x7F` are skipped; `\n` starts a new line
    /// * `scale` - Integer magnification in both axes
    /// * `color` - Glyph color
    /// * `with_background` - Paint a 7x9 cell in the inverse color behind each glyph
    /// * `wrap` - Start a new line when the next character would cross the right edge
    ///
    /// Each character advances the cursor by `6 * scale` pixels and each line
    /// by `8 * scale` pixels. Returns the final cursor offset.
    #[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
    pub fn draw_string(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        scale: u8,
        color: Color,
        with_background: bool,
        wrap: bool,
    ) -> TextPosition {
        let scale = i32::from(scale);
        let char_width = CHAR_ADVANCE * scale;
        let line_height = LINE_ADVANCE * scale;
        let screen_width = i32::from(self.width());

        let mut cursor = TextPosition::default();

        for c in text.chars() {
            if c == '\n' {
                cursor.x = 0;
                cursor.y = cursor.y.saturating_add(line_height);
                continue;
            }

            let Some(columns) = glyph(c) else {
                continue;
            };

            if wrap && cursor.x.saturating_add(char_width) > screen_width {
                cursor.x = 0;
                cursor.y = cursor.y.saturating_add(line_height);
            }

            let origin_x = x.saturating_add(cursor.x);
            let origin_y = y.saturating_add(cursor.y);

            if with_background {
                // One pixel of margin around the 5x7 glyph box
                for cx in -1..=i32::from(GLYPH_WIDTH) {
                    for cy in -1..=i32::from(GLYPH_HEIGHT) {
                        self.draw_scaled_dot(origin_x, origin_y, cx, cy, scale, color.inverted());
                    }
                }
            }

            for (cx, column) in columns.iter().enumerate() {
                for cy in 0..i32::from(GLYPH_HEIGHT) {
                    if (column >> cy) & 1 == 1 {
                        self.draw_scaled_dot(origin_x, origin_y, cx as i32, cy, scale, color);
                    }
                }
            }

            cursor.x = cursor.x.saturating_add(char_width);
        }

        TextPosition {
            x: cursor.x,
            y: cursor.y.saturating_add(i32::from(GLYPH_HEIGHT) * scale),
        }
    }

    /// Paint one font cell pixel as a `scale` x `scale` block
    fn draw_scaled_dot(&mut self, x: i32, y: i32, cx: i32, cy: i32, scale: i32, color: Color) {
        let left = x.saturating_add(cx * scale);
        let top = y.saturating_add(cy * scale);
        for dy in 0..scale {
            self.draw_horizontal_line(left, top.saturating_add(dy), scale, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Dimensions;
    use alloc::vec;
    use alloc::vec::Vec;

    fn fb(width: u8, height: u8) -> Framebuffer<Vec<u8>> {
        let dims = Dimensions::new(width, height).unwrap();
        Framebuffer::from_buffer(dims, vec![0u8; dims.buffer_size()]).unwrap()
    }

    fn lit(fb: &Framebuffer<Vec<u8>>) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..i32::from(fb.height()) {
            for x in 0..i32::from(fb.width()) {
                if fb.get_pixel(x, y) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_draw_pixel_color_selects_set_or_clear() {
        let mut fb = fb(16, 8);
        fb.draw_pixel(2, 3, Color::On);
        assert!(fb.get_pixel(2, 3));
        fb.draw_pixel(2, 3, Color::from(2u8));
        assert!(!fb.get_pixel(2, 3));
    }

    #[test]
    fn test_fill_screen_uses_actual_geometry() {
        let mut fb = fb(128, 32);
        fb.fill_screen(Color::On);
        assert_eq!(fb.as_bytes().len(), 512);
        assert!(fb.as_bytes().iter().all(|b| *b == 0xFF));

        fb.fill_screen(Color::Off);
        assert!(fb.as_bytes().iter().all(|b| *b == 0x00));
    }

    #[test]
    fn test_horizontal_line_on_first_row() {
        let mut fb = fb(128, 64);
        fb.draw_horizontal_line(0, 0, 128, Color::On);

        for page in 0..8u8 {
            let expected = if page == 0 { 0x01 } else { 0x00 };
            assert!(fb.page(page).iter().all(|b| *b == expected), "page {page}");
        }
    }

    #[test]
    fn test_vertical_line() {
        let mut fb = fb(16, 16);
        fb.draw_vertical_line(3, 2, 10, Color::On);
        let expected: Vec<(i32, i32)> = (2..12).map(|y| (3, y)).collect();
        assert_eq!(lit(&fb), expected);
    }

    #[test]
    fn test_lines_clip_and_ignore_negative_length() {
        let mut fb = fb(16, 8);
        fb.draw_horizontal_line(-4, 1, 8, Color::On);
        assert_eq!(lit(&fb), [(0, 1), (1, 1), (2, 1), (3, 1)]);

        fb.clear();
        fb.draw_vertical_line(0, 0, -5, Color::On);
        assert!(lit(&fb).is_empty());
    }

    #[test]
    fn test_rect_outline_pixels() {
        let mut fb = fb(16, 16);
        fb.draw_rect(1, 2, 4, 3, Color::On);

        let mut expected = Vec::new();
        for y in 0..16 {
            for x in 0..16 {
                let top_or_bottom = (y == 2 || y == 5) && (1..5).contains(&x);
                let left = x == 1 && (2..5).contains(&y);
                let right = x == 5 && (2..5).contains(&y);
                if top_or_bottom || left || right {
                    expected.push((x, y));
                }
            }
        }
        assert_eq!(lit(&fb), expected);
        // Corner opposite the origin stays dark
        assert!(!fb.get_pixel(5, 5));
    }

    #[test]
    fn test_fill_rect_full_display_is_all_ones() {
        let mut fb = fb(128, 64);
        fb.draw_fill_rect(0, 0, 128, 64, Color::On);
        assert!(fb.as_bytes().iter().all(|b| *b == 0xFF));
    }

    #[test]
    fn test_fill_rect_interior() {
        let mut fb = fb(16, 16);
        fb.draw_fill_rect(2, 2, 3, 2, Color::On);
        for x in 2..5 {
            for y in 2..4 {
                assert!(fb.get_pixel(x, y));
            }
        }
        // Outline row and column beyond the box
        assert!(fb.get_pixel(2, 4));
        assert!(fb.get_pixel(5, 2));
        assert!(!fb.get_pixel(5, 4));
    }

    #[test]
    fn test_circle_outline_hits_axis_points() {
        let mut fb = fb(64, 64);
        fb.draw_circle(32, 32, 10, 0.01, Color::On);
        assert!(fb.get_pixel(42, 32));
        // Truncation pulls the bottom point just inside the radius
        assert!(fb.get_pixel(32, 41));
        assert!(fb.get_pixel(22, 32));
        assert!(!fb.get_pixel(32, 32));
    }

    #[test]
    fn test_circle_samples_in_double_precision() {
        let mut fb = fb(64, 64);
        fb.draw_circle(32, 32, 10, core::f32::consts::FRAC_PI_2, Color::On);
        // f32 pi/2 sits just past the true angle: cos < 0 and sin < 1
        // pull the second sample to (31, 41), not (32, 42)
        assert_eq!(lit(&fb), [(32, 22), (22, 31), (42, 32), (31, 41)]);
    }

    #[test]
    fn test_circle_tiny_step_terminates() {
        let mut fb = fb(64, 64);
        fb.draw_circle(32, 32, 10, 1.0e-7, Color::On);
        assert!(fb.get_pixel(42, 32));
        assert!(fb.get_pixel(32, 41));
    }

    #[test]
    fn test_circle_rejects_non_positive_step() {
        let mut fb = fb(32, 32);
        fb.draw_circle(16, 16, 5, 0.0, Color::On);
        fb.draw_circle(16, 16, 5, -1.0, Color::On);
        fb.draw_circle(16, 16, 5, f32::NAN, Color::On);
        assert!(lit(&fb).is_empty());
    }

    #[test]
    fn test_fill_circle_is_exact_disk() {
        let mut fb = fb(32, 32);
        fb.draw_fill_circle(10, 10, 3, Color::On);

        let mut expected = Vec::new();
        for y in 0..32 {
            for x in 0..32 {
                let (dx, dy) = (x - 10i32, y - 10i32);
                if dx * dx + dy * dy <= 9 {
                    expected.push((x, y));
                }
            }
        }
        assert_eq!(lit(&fb), expected);
        assert_eq!(lit(&fb).len(), 29);
    }

    #[test]
    fn test_fill_circle_zero_radius_is_one_pixel() {
        let mut fb = fb(8, 8);
        fb.draw_fill_circle(4, 4, 0, Color::On);
        assert_eq!(lit(&fb), [(4, 4)]);
    }

    #[test]
    fn test_bitmap_zero_bits_leave_buffer_untouched() {
        let mut fb = fb(32, 16);
        fb.draw_horizontal_line(0, 5, 32, Color::On);
        let before = fb.as_bytes().to_vec();

        fb.draw_bitmap(0, 0, &[0u8; 64], 32, 16, Color::Off);
        fb.draw_bitmap(0, 0, &[0u8; 64], 32, 16, Color::On);
        assert_eq!(fb.as_bytes(), before.as_slice());
    }

    #[test]
    fn test_bitmap_msb_first_with_row_padding() {
        let mut fb = fb(16, 8);
        // 10 px wide => 2 bytes per row
        let bitmap = [0b1000_0000, 0b0100_0000, 0b0000_0001, 0b0000_0000];
        fb.draw_bitmap(2, 3, &bitmap, 10, 2, Color::On);
        assert_eq!(lit(&fb), [(2, 3), (11, 3), (9, 4)]);
    }

    #[test]
    fn test_bitmap_short_data_is_clipped() {
        let mut fb = fb(16, 8);
        fb.draw_bitmap(0, 0, &[0xFF], 8, 4, Color::On);
        assert_eq!(lit(&fb).len(), 8);
    }

    #[test]
    fn test_string_single_glyph_position() {
        let mut fb = fb(128, 64);
        let pos = fb.draw_string(0, 0, "A", 1, Color::On, false, true);
        assert_eq!(pos, TextPosition { x: 6, y: 7 });

        // Column 0 of 'A' is 0x7E: rows 1..=6
        assert!(!fb.get_pixel(0, 0));
        assert!(fb.get_pixel(0, 1));
        assert!(fb.get_pixel(0, 6));
        assert!(!fb.get_pixel(5, 3));
    }

    #[test]
    fn test_string_scale_doubles_pixels() {
        let mut fb = fb(128, 64);
        let pos = fb.draw_string(0, 0, "A", 2, Color::On, false, true);
        assert_eq!(pos, TextPosition { x: 12, y: 14 });
        assert!(fb.get_pixel(0, 2));
        assert!(fb.get_pixel(1, 3));
        assert!(!fb.get_pixel(0, 1));
    }

    #[test]
    fn test_string_newline_and_skipped_characters() {
        let mut fb = fb(128, 64);
        let pos = fb.draw_string(0, 0, "ab\ncé\t", 1, Color::On, false, false);
        assert_eq!(pos, TextPosition { x: 6, y: 15 });
    }

    #[test]
    fn test_string_wraps_at_panel_width() {
        let mut fb = fb(128, 64);
        // 21 glyphs fit in 126 px; the 22nd wraps
        let text: alloc::string::String = core::iter::repeat_n('x', 22).collect();
        let pos = fb.draw_string(0, 0, &text, 1, Color::On, false, true);
        assert_eq!(pos, TextPosition { x: 6, y: 15 });

        fb.clear();
        let pos = fb.draw_string(0, 0, &text, 1, Color::On, false, false);
        assert_eq!(pos, TextPosition { x: 132, y: 7 });
    }

    #[test]
    fn test_string_cursor_saturates_on_long_text() {
        let mut fb = fb(16, 8);
        // Blank glyphs keep the run cheap; only the cursor moves
        let spaces: alloc::string::String = core::iter::repeat_n(' ', 1_500_000).collect();
        let pos = fb.draw_string(0, 0, &spaces, 255, Color::On, false, false);
        assert_eq!(pos.x, i32::MAX);
        assert_eq!(pos.y, 7 * 255);

        let lines: alloc::string::String = core::iter::repeat_n('\n', 1_100_000).collect();
        let pos = fb.draw_string(0, 0, &lines, 255, Color::On, false, false);
        assert_eq!(pos.y, i32::MAX);
    }

    #[test]
    fn test_string_background_paints_inverse_cell() {
        let mut fb = fb(32, 16);
        fb.draw_string(1, 1, " ", 1, Color::On, true, true);
        // Space glyph is empty, so only the background is visible: cleared
        assert!(lit(&fb).is_empty());

        fb.fill_screen(Color::On);
        fb.draw_string(1, 1, " ", 1, Color::On, true, true);
        for x in 0..7 {
            for y in 0..9 {
                assert!(!fb.get_pixel(x, y), "({x}, {y}) should be cleared");
            }
        }
        assert!(fb.get_pixel(7, 0));
        assert!(fb.get_pixel(0, 9));
    }

    #[test]
    fn test_string_inverse_text_on_background() {
        let mut fb = fb(32, 16);
        fb.draw_string(1, 1, "A", 1, Color::Off, true, true);
        // Background is lit, glyph pixels are dark
        assert!(fb.get_pixel(0, 0));
        assert!(fb.get_pixel(1, 1));
        assert!(!fb.get_pixel(1, 2));
    }
}
