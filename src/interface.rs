//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and two implementations
//! for talking to the SSD1306 controller:
//!
//! - [`I2cInterface`]: every write starts with a control byte, `0x00` for a
//!   command and `0x40` for display data
//! - [`SpiInterface`]: 4-wire SPI, the DC pin selects command (low) or data (high)
//!
//! Bus speed, pin muxing and the reset pulse are the caller's business; the
//! interfaces only issue writes on an already configured bus.
//!
//! ## Example
//!
//! ```rust
//! use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
//! use ssd1306_fb::{DisplayInterface, I2cInterface};
//! # use core::convert::Infallible;
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
//! let mut interface = I2cInterface::new(MockI2c);
//!
//! // Display on: sends the frame [0x00, 0xAF]
//! let _ = interface.send_command(0xAF);
//!
//! // RAM data: sends the frame [0x40, 0xFF, 0x00, 0xFF]
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//! ```

use core::fmt::Debug;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;
use embedded_hal::spi::SpiDevice;

use crate::command::{COMMAND_CONTROL, DATA_CONTROL};
use crate::error::MAX_COLUMNS;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the byte transport to the SSD1306 controller
///
/// This trait abstracts over bus implementations, allowing the
/// [`Display`](crate::display::Display) to work with any transport that can
/// distinguish command bytes from data bytes.
///
/// ## Implementing
///
/// For most cases, use [`I2cInterface`] or [`SpiInterface`]. Implement this
/// trait yourself to add logging, a bus-sharing scheme, or a test double.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a single command (or command argument) byte
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send display RAM data
    ///
    /// # Arguments
    ///
    /// * `data` - Bytes in the controller's page layout
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer fails.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over the bus and GPIO error types. [`I2cInterface`] never
/// produces the `Pin` variant.
#[derive(Debug)]
pub enum InterfaceError<BusErr, PinErr = core::convert::Infallible> {
    /// Bus communication error (I2C or SPI)
    Bus(BusErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<BusErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<BusErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "Bus error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<BusErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<BusErr, PinErr> {}

/// Default 7-bit I2C address (SA0 pin low)
pub const DEFAULT_I2C_ADDRESS: u8 = 0x3C;

/// Alternate 7-bit I2C address (SA0 pin high)
pub const ALTERNATE_I2C_ADDRESS: u8 = 0x3D;

/// Largest payload carried by one data frame
const MAX_DATA_PAYLOAD: usize = MAX_COLUMNS as usize;

/// I2C interface implementation for SSD1306
///
/// Commands go out as 2-byte frames `[0x00, command]`. Data goes out as
/// `[0x40, bytes...]` with at most one full page row (128 bytes) per frame,
/// so a 128-column page flush is a single 129-byte write.
#[derive(Debug)]
pub struct I2cInterface<I2C> {
    /// I2C bus handle
    i2c: I2C,
    /// 7-bit device address
    address: u8,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new interface at [`DEFAULT_I2C_ADDRESS`]
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_I2C_ADDRESS)
    }

    /// Create a new interface at a specific 7-bit address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Get the device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the I2C bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = InterfaceError<I2C::Error>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.i2c
            .write(self.address, &[COMMAND_CONTROL, command])
            .map_err(InterfaceError::Bus)
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        let mut frame = [0u8; MAX_DATA_PAYLOAD + 1];
        frame[0] = DATA_CONTROL;

        for chunk in data.chunks(MAX_DATA_PAYLOAD) {
            let len = chunk.len() + 1;
            frame[1..len].copy_from_slice(chunk);
            self.i2c
                .write(self.address, &frame[..len])
                .map_err(InterfaceError::Bus)?;
        }
        Ok(())
    }
}

/// 4-wire SPI interface implementation for SSD1306
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`] (handles chip select)
/// * `DC` - Data/Command pin implementing [`OutputPin`]
#[derive(Debug)]
pub struct SpiInterface<SPI, DC> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
}

impl<SPI, DC> SpiInterface<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    /// Create a new SPI interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self { spi, dc }
    }

    /// Release the SPI device and DC pin
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }
}

impl<SPI, DC> DisplayInterface for SpiInterface<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    type Error = InterfaceError<SPI::Error, DC::Error>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Bus)
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Bus)
    }
}
