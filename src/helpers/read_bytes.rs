use crate::hw::I2cTransport;

use super::{buffer_fits, verify_count, CommonIoError};

const OP: &str = "read_i2c_bytes";

/// Read `length` bytes from a register of slave `address`.
///
/// The register is taken from `values[0]`; on success `values[..length]`
/// holds the register contents, overwriting the register byte. Each step is
/// attempted once and any failure, including a transferred byte count other
/// than requested, yields [`CommonIoError::Fail`]. After a failure the buffer
/// contents are unspecified.
///
/// `None` stands for a transport that was never opened.
pub fn read_i2c_bytes<I2C>(
    i2c: Option<&mut I2C>,
    address: u8,
    values: &mut [u8],
    length: u8,
) -> Result<(), CommonIoError>
where
    I2C: I2cTransport,
{
    let Some(i2c) = i2c else {
        error!("{}: no I2C transport", OP);
        return Err(CommonIoError::Fail);
    };
    buffer_fits(OP, values, length)?;

    debug!("{}: set slave address to 0x{:X}", OP, address);
    i2c.set_slave_address(address).map_err(|_| {
        error!("{}: setting the slave address 0x{:X} failed", OP, address);
        CommonIoError::Fail
    })?;

    let reg = values[0];
    debug!("{}: write the start register 0x{:X}", OP, reg);
    i2c.write_sync(&[reg]).map_err(|_| {
        error!("{}: writing 0x{:X} failed", OP, reg);
        CommonIoError::Fail
    })?;
    verify_count(OP, "written", i2c.tx_byte_count(), 1)?;

    let dest = &mut values[..length as usize];
    i2c.read_sync(dest).map_err(|_| {
        error!("{}: failed to read {} bytes at 0x{:X}", OP, length, reg);
        CommonIoError::Fail
    })?;
    verify_count(OP, "read", i2c.rx_byte_count(), length)?;

    trace!("{}: read {} bytes @ 0x{:X} from 0x{:X}", OP, length, reg, address);
    Ok(())
}
