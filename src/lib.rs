//! Register read/write helpers for I2C slave devices.
//!
//! Sensor drivers address a register by sending its index and then reading
//! or writing consecutive bytes. [`read_i2c_bytes`] and [`write_i2c_bytes`]
//! do that over any [`hw::I2cTransport`], checking the byte count the
//! transport reports after every transfer. Failures collapse into
//! [`CommonIoError::Fail`]; the failing step is only reported through the
//! log.
//!
//! ```
//! use i2c_reg_helpers::{read_i2c_bytes, write_i2c_bytes, support::EmulatedBus};
//!
//! let mut bus = EmulatedBus::new().with_device(0x76).unwrap();
//! write_i2c_bytes(Some(&mut bus), 0x76, &[0xF4, 0x27], 2).unwrap();
//!
//! let mut buf = [0xF4];
//! read_i2c_bytes(Some(&mut bus), 0x76, &mut buf, 1).unwrap();
//! assert_eq!(buf, [0x27]);
//! ```

#![cfg_attr(not(test), no_std)]

mod fmt;

pub mod config;
pub mod helpers;
pub mod hw;
pub mod support;

pub use helpers::{
    read_i2c_bytes, write_i2c_bytes, CommonIoError, RegisterIo, StatusCode, SUCCESS,
};
pub use hw::I2cTransport;
