//! Core display operations

use embedded_hal::delay::DelayNs;
use log::{debug, trace, warn};

use crate::color::Color;
use crate::command::{
    ACTIVATE_SCROLL, CHARGE_PUMP, COLUMN_ADDR, COM_SCAN_DEC, COM_SCAN_INC, DEACTIVATE_SCROLL,
    DISPLAY_OFF, DISPLAY_ON, INVERT_DISPLAY, LEFT_HORIZONTAL_SCROLL, MEMORY_MODE,
    MEMORY_MODE_HORIZONTAL, NORMAL_DISPLAY, PAGE_ADDR, RIGHT_HORIZONTAL_SCROLL, SEG_REMAP,
    SET_COM_PINS, SET_CONTRAST, SET_DISPLAY_CLOCK_DIV, SET_DISPLAY_OFFSET, SET_MULTIPLEX,
    SET_PRECHARGE, SET_START_LINE, SET_VCOM_DETECT, SET_VERTICAL_SCROLL_AREA,
    VERTICAL_AND_LEFT_HORIZONTAL_SCROLL, VERTICAL_AND_RIGHT_HORIZONTAL_SCROLL,
};
use crate::config::{Config, Dimensions};
use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::interface::DisplayInterface;
use crate::splash::{SPLASH, SPLASH_HEIGHT, SPLASH_WIDTH};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Contrast values above this are accepted but logged as a warning
///
/// High contrast shortens OLED lifetime and raises current draw.
pub const CONTRAST_ADVISORY_LIMIT: u8 = 207;

/// Hardware scroll direction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Content moves to the left
    Left,
    /// Content moves to the right
    Right,
    /// Content moves up and to the left
    DiagonalLeft,
    /// Content moves up and to the right
    DiagonalRight,
}

impl ScrollDirection {
    fn is_diagonal(self) -> bool {
        matches!(self, Self::DiagonalLeft | Self::DiagonalRight)
    }

    fn command(self) -> u8 {
        match self {
            Self::Left => LEFT_HORIZONTAL_SCROLL,
            Self::Right => RIGHT_HORIZONTAL_SCROLL,
            Self::DiagonalLeft => VERTICAL_AND_LEFT_HORIZONTAL_SCROLL,
            Self::DiagonalRight => VERTICAL_AND_RIGHT_HORIZONTAL_SCROLL,
        }
    }
}

/// Interval between scroll steps, in frames
///
/// The discriminant is the 3-bit code the controller expects. The codes are
/// not monotonic in speed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum ScrollSpeed {
    /// 5 frames
    #[default]
    Frames5 = 0x00,
    /// 64 frames
    Frames64 = 0x01,
    /// 128 frames
    Frames128 = 0x02,
    /// 256 frames
    Frames256 = 0x03,
    /// 3 frames
    Frames3 = 0x04,
    /// 4 frames
    Frames4 = 0x05,
    /// 25 frames
    Frames25 = 0x06,
    /// 2 frames
    Frames2 = 0x07,
}

/// SSD1306 display session
///
/// Owns the transport, the configuration and the framebuffer. Draw into
/// [`framebuffer_mut`](Self::framebuffer_mut) (or directly through the
/// embedded-graphics `DrawTarget` impl), then call [`flush`](Self::flush).
///
/// ## Type Parameters
///
/// * `I` - Interface type implementing [`DisplayInterface`]
/// * `B` - Framebuffer storage, e.g. `[u8; 1024]` or `Vec<u8>`
pub struct Display<I, B>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Off-screen copy of display RAM
    framebuffer: Framebuffer<B>,
}

#[cfg(feature = "alloc")]
impl<I> Display<I, alloc::vec::Vec<u8>>
where
    I: DisplayInterface,
{
    /// Create a new Display with a heap-allocated framebuffer
    ///
    /// Nothing is sent to the controller until [`begin`](Self::begin) or
    /// [`init`](Self::init).
    ///
    /// # Errors
    ///
    /// Returns `Error::Buffer` if the framebuffer cannot be allocated.
    pub fn new(interface: I, config: Config) -> Result<Self, Error<I>> {
        let framebuffer = Framebuffer::new(config.dimensions)?;
        Ok(Self {
            interface,
            config,
            framebuffer,
        })
    }
}

impl<I, B> Display<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a new Display on caller-provided storage
    ///
    /// The buffer is cleared.
    ///
    /// # Errors
    ///
    /// Returns `Error::Buffer` if `buffer` is shorter than
    /// `config.dimensions.buffer_size()`.
    pub fn with_buffer(interface: I, config: Config, buffer: B) -> Result<Self, Error<I>> {
        let framebuffer = Framebuffer::from_buffer(config.dimensions, buffer)?;
        Ok(Self {
            interface,
            config,
            framebuffer,
        })
    }

    /// Initialize the controller and show a blank screen
    ///
    /// Runs [`init`](Self::init). If the splash screen is enabled it is
    /// drawn, flushed and held for `config.splash_duration_ms`. The
    /// framebuffer is then cleared and flushed.
    pub fn begin<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        debug!(
            "begin {}x{} (splash: {})",
            self.config.dimensions.width, self.config.dimensions.height, self.config.splash
        );
        self.init()?;

        if self.config.splash {
            self.framebuffer.clear();
            self.framebuffer.draw_bitmap(
                0,
                0,
                &SPLASH,
                i32::from(SPLASH_WIDTH),
                i32::from(SPLASH_HEIGHT),
                Color::On,
            );
            self.flush()?;
            delay.delay_ms(self.config.splash_duration_ms);
        }

        self.framebuffer.clear();
        self.flush()
    }

    /// Send the power-on initialization sequence
    ///
    /// Leaves the controller in horizontal addressing mode with scrolling
    /// disabled and the panel switched on. Display RAM is not touched.
    pub fn init(&mut self) -> DisplayResult<I> {
        let Dimensions { width, height } = self.config.dimensions;
        debug!("init sequence for {}x{} panel", width, height);

        self.send_command(DISPLAY_OFF)?;

        self.send_command(SET_DISPLAY_CLOCK_DIV)?;
        self.send_command(self.config.clock_divider)?;

        // Multiplex ratio: one COM line per row
        self.send_command(SET_MULTIPLEX)?;
        self.send_command(height.saturating_sub(1))?;

        self.send_command(SET_DISPLAY_OFFSET)?;
        self.send_command(self.config.display_offset)?;
        self.send_command(SET_START_LINE | self.config.start_line)?;

        self.send_command(CHARGE_PUMP)?;
        self.send_command(self.config.charge_pump)?;

        // Horizontal addressing: flush relies on column then page wrap
        self.send_command(MEMORY_MODE)?;
        self.send_command(MEMORY_MODE_HORIZONTAL)?;

        self.send_command(SEG_REMAP | u8::from(self.config.segment_remap))?;
        self.send_command(if self.config.com_scan_descending {
            COM_SCAN_DEC
        } else {
            COM_SCAN_INC
        })?;

        self.send_command(SET_COM_PINS)?;
        self.send_command(self.config.com_pins)?;

        self.send_command(SET_CONTRAST)?;
        self.send_command(self.config.contrast)?;

        self.send_command(SET_PRECHARGE)?;
        self.send_command(self.config.precharge)?;

        self.send_command(SET_VCOM_DETECT)?;
        self.send_command(self.config.vcom_detect)?;

        self.send_command(DEACTIVATE_SCROLL)?;
        self.send_command(DISPLAY_ON)?;

        Ok(())
    }

    /// Copy the framebuffer into display RAM
    ///
    /// Sets the page and column windows to the whole panel, then writes one
    /// data transfer per page. The framebuffer is not modified. If the bus
    /// fails midway, pages already sent stay on the panel.
    pub fn flush(&mut self) -> DisplayResult<I> {
        let pages = self.config.dimensions.pages();
        let width = self.config.dimensions.width;
        trace!("flush {} pages of {} bytes", pages, width);

        self.send_command(PAGE_ADDR)?;
        self.send_command(0)?;
        self.send_command(pages.saturating_sub(1))?;

        self.send_command(COLUMN_ADDR)?;
        self.send_command(0)?;
        self.send_command(width.saturating_sub(1))?;

        for page in 0..pages {
            self.interface
                .send_data(self.framebuffer.page(page))
                .map_err(Error::Interface)?;
        }

        Ok(())
    }

    /// Set the panel contrast
    ///
    /// Values above [`CONTRAST_ADVISORY_LIMIT`] are sent unchanged, with a
    /// warning.
    pub fn set_contrast(&mut self, contrast: u8) -> DisplayResult<I> {
        if contrast > CONTRAST_ADVISORY_LIMIT {
            warn!(
                "contrast {} exceeds advisory limit {}",
                contrast, CONTRAST_ADVISORY_LIMIT
            );
        }
        self.send_command(SET_CONTRAST)?;
        self.send_command(contrast)
    }

    /// Start a continuous hardware scroll over a page range
    ///
    /// The controller moves the content of pages `start_page..=end_page` on
    /// its own; display RAM and the framebuffer are not changed. Diagonal
    /// scrolls also shift the whole panel up by one row per step.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidScrollRange` (without touching the bus) unless
    /// `start_page <= end_page < pages`.
    pub fn start_scroll(
        &mut self,
        direction: ScrollDirection,
        start_page: u8,
        end_page: u8,
        speed: ScrollSpeed,
    ) -> DisplayResult<I> {
        if start_page > end_page || end_page >= self.config.dimensions.pages() {
            return Err(Error::InvalidScrollRange {
                start: start_page,
                end: end_page,
            });
        }
        debug!(
            "start scroll {:?} pages {}..={} at {:?}",
            direction, start_page, end_page, speed
        );

        // Parameters cannot change while a scroll is active
        self.send_command(DEACTIVATE_SCROLL)?;

        if direction.is_diagonal() {
            self.send_command(SET_VERTICAL_SCROLL_AREA)?;
            self.send_command(0x00)?;
            self.send_command(self.config.dimensions.height)?;
        }

        self.send_command(direction.command())?;
        self.send_command(0x00)?;
        self.send_command(start_page)?;
        self.send_command(speed as u8)?;
        self.send_command(end_page)?;
        // Vertical offset per step
        self.send_command(u8::from(direction.is_diagonal()))?;
        self.send_command(0xFF)?;

        self.send_command(ACTIVATE_SCROLL)
    }

    /// Stop any hardware scroll
    ///
    /// Scrolling corrupts display RAM contents, so pass `refresh = true` to
    /// rewrite the framebuffer afterwards.
    pub fn stop_scroll(&mut self, refresh: bool) -> DisplayResult<I> {
        debug!("stop scroll (refresh: {})", refresh);
        self.send_command(DEACTIVATE_SCROLL)?;
        if refresh {
            self.flush()?;
        }
        Ok(())
    }

    /// Switch the panel on or off (sleep mode)
    ///
    /// Display RAM is retained while off.
    pub fn set_display_on(&mut self, on: bool) -> DisplayResult<I> {
        self.send_command(if on { DISPLAY_ON } else { DISPLAY_OFF })
    }

    /// Toggle hardware inversion
    ///
    /// The controller lights cleared bits instead of set bits. The
    /// framebuffer is not touched; see [`Framebuffer::invert`] for that.
    pub fn set_inverted(&mut self, inverted: bool) -> DisplayResult<I> {
        self.send_command(if inverted {
            INVERT_DISPLAY
        } else {
            NORMAL_DISPLAY
        })
    }

    /// Send a raw command or argument byte to the controller
    pub fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Borrow the framebuffer
    pub fn framebuffer(&self) -> &Framebuffer<B> {
        &self.framebuffer
    }

    /// Mutably borrow the framebuffer for drawing
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer<B> {
        &mut self.framebuffer
    }

    /// Tear down the session, returning the interface and the buffer
    pub fn release(self) -> (I, B) {
        (self.interface, self.framebuffer.into_inner())
    }
}
