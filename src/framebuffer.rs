//! Page-organized 1-bit framebuffer
//!
//! The buffer mirrors SSD1306 display RAM in horizontal addressing mode:
//! `width` bytes per page, `height / 8` pages, and each byte holds a vertical
//! strip of 8 pixels with bit 0 at the top.
//!
//! ```text
//! byte index = x + (y / 8) * width
//! bit        = y % 8
//! ```
//!
//! Because the layout is bit-exact with the controller, a flush is a plain
//! copy of each page.
//!
//! ## Example
//!
//! ```
//! use ssd1306_fb::{Dimensions, Framebuffer};
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
//! fb.set_pixel(3, 9, true);
//! assert!(fb.get_pixel(3, 9));
//! assert_eq!(fb.as_bytes()[3 + 128], 0b0000_0010);
//! ```

use crate::config::{Dimensions, PAGE_HEIGHT};
use crate::error::BufferError;

/// 1-bit framebuffer in SSD1306 page layout
///
/// Generic over the backing storage so it can live in a static array, on
/// the stack, or (with the `alloc` feature) in a `Vec<u8>`.
#[derive(Clone, Debug)]
pub struct Framebuffer<B> {
    /// Panel geometry
    dimensions: Dimensions,
    /// Backing storage, at least `dimensions.buffer_size()` bytes
    buffer: B,
}

#[cfg(feature = "alloc")]
impl Framebuffer<alloc::vec::Vec<u8>> {
    /// Allocate a zeroed framebuffer on the heap
    ///
    /// # Errors
    ///
    /// Returns `BufferError::Allocation` if the allocator cannot provide
    /// `dimensions.buffer_size()` bytes.
    pub fn new(dimensions: Dimensions) -> Result<Self, BufferError> {
        let size = dimensions.buffer_size();
        let mut buffer = alloc::vec::Vec::new();
        buffer
            .try_reserve_exact(size)
            .map_err(|_| BufferError::Allocation { requested: size })?;
        buffer.resize(size, 0);
        Ok(Self { dimensions, buffer })
    }
}

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Adopt caller-provided storage
    ///
    /// The buffer is cleared. Bytes past `dimensions.buffer_size()` are
    /// left alone and never sent to the display.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::TooSmall` if `buffer` is shorter than
    /// `dimensions.buffer_size()`.
    pub fn from_buffer(dimensions: Dimensions, buffer: B) -> Result<Self, BufferError> {
        let required = dimensions.buffer_size();
        let provided = buffer.as_ref().len();
        if provided < required {
            return Err(BufferError::TooSmall { required, provided });
        }
        let mut fb = Self { dimensions, buffer };
        fb.clear();
        Ok(fb)
    }

    /// Panel geometry
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Width in pixels
    pub fn width(&self) -> u8 {
        self.dimensions.width
    }

    /// Height in pixels
    pub fn height(&self) -> u8 {
        self.dimensions.height
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.bytes_mut().fill(0);
    }

    /// Fill every byte with the same value
    pub(crate) fn fill_bytes(&mut self, value: u8) {
        self.bytes_mut().fill(value);
    }

    /// Read a pixel
    ///
    /// Coordinates outside the panel read as off.
    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        self.locate(x, y)
            .and_then(|(index, mask)| self.as_bytes().get(index).map(|b| b & mask != 0))
            .unwrap_or(false)
    }

    /// Set or clear a pixel
    ///
    /// Coordinates outside the panel are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        let Some((index, mask)) = self.locate(x, y) else {
            return;
        };
        if let Some(byte) = self.bytes_mut().get_mut(index) {
            if on {
                *byte |= mask;
            } else {
                *byte &= !mask;
            }
        }
    }

    /// Complement every pixel
    ///
    /// Applying it twice restores the original buffer.
    pub fn invert(&mut self) {
        for byte in self.bytes_mut() {
            *byte = !*byte;
        }
    }

    /// Swap in new storage, returning the previous one
    ///
    /// The new buffer is used as-is (not cleared). It must hold at least
    /// `dimensions().buffer_size()` bytes in page layout; this is checked
    /// only in debug builds. A shorter buffer does not cause a panic in
    /// release builds: missing bytes read as off and ignore writes.
    pub fn replace_buffer(&mut self, buffer: B) -> B {
        debug_assert!(
            buffer.as_ref().len() >= self.dimensions.buffer_size(),
            "replacement buffer too small: required {} bytes, got {}",
            self.dimensions.buffer_size(),
            buffer.as_ref().len()
        );
        core::mem::replace(&mut self.buffer, buffer)
    }

    /// Raw buffer contents in page layout
    pub fn as_bytes(&self) -> &[u8] {
        let bytes = self.buffer.as_ref();
        &bytes[..bytes.len().min(self.dimensions.buffer_size())]
    }

    /// The `width` bytes of one page
    ///
    /// Returns an empty slice for a page past the end of the buffer.
    pub fn page(&self, page: u8) -> &[u8] {
        let width = self.dimensions.width as usize;
        let start = page as usize * width;
        self.as_bytes().get(start..start + width).unwrap_or(&[])
    }

    /// Give back the backing storage
    pub fn into_inner(self) -> B {
        self.buffer
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        let size = self.dimensions.buffer_size();
        let bytes = self.buffer.as_mut();
        let len = bytes.len().min(size);
        &mut bytes[..len]
    }

    /// Byte index and bit mask of an on-panel pixel
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= self.dimensions.width as i32 || y >= self.dimensions.height as i32
        {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        let page_height = PAGE_HEIGHT as usize;
        let index = x + (y / page_height) * self.dimensions.width as usize;
        Some((index, 1 << (y % page_height)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn fb(width: u8, height: u8) -> Framebuffer<Vec<u8>> {
        let dims = Dimensions::new(width, height).unwrap();
        Framebuffer::from_buffer(dims, vec![0u8; dims.buffer_size()]).unwrap()
    }

    #[test]
    fn test_set_then_get_every_pixel() {
        let mut fb = fb(128, 64);
        for y in 0..64 {
            for x in 0..128 {
                fb.set_pixel(x, y, true);
                assert!(fb.get_pixel(x, y), "({x}, {y}) should be on");
                fb.set_pixel(x, y, false);
                assert!(!fb.get_pixel(x, y), "({x}, {y}) should be off");
            }
        }
    }

    #[test]
    fn test_page_layout() {
        let mut fb = fb(128, 64);
        fb.set_pixel(0, 0, true);
        fb.set_pixel(5, 7, true);
        fb.set_pixel(5, 8, true);
        fb.set_pixel(127, 63, true);

        let bytes = fb.as_bytes();
        assert_eq!(bytes[0], 0x01);
        assert_eq!(bytes[5], 0x80);
        assert_eq!(bytes[128 + 5], 0x01);
        assert_eq!(bytes[7 * 128 + 127], 0x80);
    }

    #[test]
    fn test_out_of_bounds_writes_are_ignored() {
        let mut fb = fb(128, 64);
        fb.set_pixel(10, 10, true);
        let before = fb.as_bytes().to_vec();

        for (x, y) in [(-1, 0), (0, -1), (128, 0), (0, 64), (i32::MAX, 3), (i32::MIN, 3)] {
            fb.set_pixel(x, y, true);
            fb.set_pixel(x, y, false);
        }
        assert_eq!(fb.as_bytes(), before.as_slice());
    }

    #[test]
    fn test_out_of_bounds_reads_are_off() {
        let mut fb = fb(128, 64);
        fb.fill_bytes(0xFF);
        assert!(!fb.get_pixel(-1, 0));
        assert!(!fb.get_pixel(128, 0));
        assert!(!fb.get_pixel(0, 64));
    }

    #[test]
    fn test_clear() {
        let mut fb = fb(128, 32);
        fb.fill_bytes(0x5A);
        fb.clear();
        for y in 0..32 {
            for x in 0..128 {
                assert!(!fb.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn test_invert_is_self_inverse() {
        let mut fb = fb(64, 16);
        for i in 0..64 {
            fb.set_pixel(i, (i * 7) % 16, true);
        }
        let original = fb.as_bytes().to_vec();

        fb.invert();
        assert_ne!(fb.as_bytes(), original.as_slice());
        assert!(!fb.get_pixel(0, 0));
        assert!(fb.get_pixel(1, 0));

        fb.invert();
        assert_eq!(fb.as_bytes(), original.as_slice());
    }

    #[test]
    fn test_from_buffer_rejects_short_buffer() {
        let dims = Dimensions::new(128, 64).unwrap();
        let result = Framebuffer::from_buffer(dims, vec![0u8; 1023]);
        assert!(matches!(
            result,
            Err(BufferError::TooSmall {
                required: 1024,
                provided: 1023
            })
        ));
    }

    #[test]
    fn test_from_buffer_clears_storage() {
        let dims = Dimensions::new(8, 8).unwrap();
        let fb = Framebuffer::from_buffer(dims, [0xFFu8; 8]).unwrap();
        assert_eq!(fb.as_bytes(), &[0u8; 8]);
    }

    #[test]
    fn test_replace_buffer_swaps_storage() {
        let mut fb = fb(8, 8);
        fb.set_pixel(0, 0, true);

        let old = fb.replace_buffer(vec![0xFFu8; 8]);
        assert_eq!(old[0], 0x01);
        assert!(fb.get_pixel(7, 7));
        assert_eq!(fb.as_bytes(), &[0xFFu8; 8]);
    }

    #[test]
    fn test_page_slices() {
        let mut fb = fb(16, 16);
        fb.set_pixel(3, 8, true);
        assert_eq!(fb.page(0), &[0u8; 16]);
        assert_eq!(fb.page(1)[3], 0x01);
        assert!(fb.page(2).is_empty());
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_new_allocates_zeroed_buffer() {
        let fb = Framebuffer::new(Dimensions::new(128, 64).unwrap()).unwrap();
        assert_eq!(fb.as_bytes().len(), 1024);
        assert!(fb.as_bytes().iter().all(|b| *b == 0));
    }
}
