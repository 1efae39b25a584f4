use crate::hw::I2cTransport;

use super::{buffer_fits, verify_count, CommonIoError};

const OP: &str = "write_i2c_bytes";

/// Write `values[..length]` to slave `address` in a single transaction.
///
/// `values[0]` is the start register, the rest is payload. Fails with
/// [`CommonIoError::Fail`] on any transport error or if the transmitted byte
/// count differs from `length`.
pub fn write_i2c_bytes<I2C>(
    i2c: Option<&mut I2C>,
    address: u8,
    values: &[u8],
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

    debug!(
        "{}: write the start register 0x{:X} and length {}",
        OP, values[0], length
    );
    i2c.write_sync(&values[..length as usize]).map_err(|_| {
        error!("{}: writing 0x{:X} failed", OP, values[0]);
        CommonIoError::Fail
    })?;
    verify_count(OP, "written", i2c.tx_byte_count(), length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support::{BusEvent, EmulatedBus};

    #[test]
    fn test_missing_transport() {
        assert_eq!(
            write_i2c_bytes::<EmulatedBus>(None, 0x76, &[0xF4, 0x27], 2),
            Err(CommonIoError::Fail)
        );
    }

    #[test]
    fn test_only_length_bytes_sent() {
        let mut bus = EmulatedBus::new().with_device(0x76).unwrap();

        assert_eq!(
            write_i2c_bytes(Some(&mut bus), 0x76, &[0xF4, 0x27, 0x99], 2),
            Ok(())
        );
        assert_eq!(bus.register(0x76, 0xF4), Some(0x27));
        assert_eq!(bus.register(0x76, 0xF5), Some(0x00));
        assert!(bus.journal().any(|e| *e == BusEvent::Write(2)));
    }

    #[test]
    fn test_failed_write_skips_count() {
        let mut bus = EmulatedBus::new().with_device(0x76).unwrap();
        bus.faults.write = true;

        assert_eq!(
            write_i2c_bytes(Some(&mut bus), 0x76, &[0xF4, 0x27], 2),
            Err(CommonIoError::Fail)
        );
        assert!(!bus.journal().any(|e| *e == BusEvent::TxCount));
    }

    #[test]
    fn test_count_query_failure() {
        let mut bus = EmulatedBus::new().with_device(0x76).unwrap();
        bus.faults.byte_count = true;

        assert_eq!(
            write_i2c_bytes(Some(&mut bus), 0x76, &[0xF4, 0x27], 2),
            Err(CommonIoError::Fail)
        );
        assert_eq!(bus.register(0x76, 0xF4), Some(0x27));
    }
}
