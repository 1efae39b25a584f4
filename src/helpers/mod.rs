use crate::hw::I2cTransport;

mod io_error;
pub use io_error::{CommonIoError, StatusCode, SUCCESS};

mod read_bytes;
pub use read_bytes::read_i2c_bytes;

mod write_bytes;
pub use write_bytes::write_i2c_bytes;

/// Register access on a transport that is known to be present.
pub trait RegisterIo {
    /// Read `length` bytes starting at the register held in `values[0]`.
    fn read_registers(
        &mut self,
        address: u8,
        values: &mut [u8],
        length: u8,
    ) -> Result<(), CommonIoError>;

    /// Write `values[..length]`, register first, as one transaction.
    fn write_registers(&mut self, address: u8, values: &[u8], length: u8)
        -> Result<(), CommonIoError>;
}

impl<T: I2cTransport> RegisterIo for T {
    fn read_registers(
        &mut self,
        address: u8,
        values: &mut [u8],
        length: u8,
    ) -> Result<(), CommonIoError> {
        read_i2c_bytes(Some(self), address, values, length)
    }

    fn write_registers(
        &mut self,
        address: u8,
        values: &[u8],
        length: u8,
    ) -> Result<(), CommonIoError> {
        write_i2c_bytes(Some(self), address, values, length)
    }
}

/// Buffer must hold the register byte and `length` bytes.
fn buffer_fits(op: &str, values: &[u8], length: u8) -> Result<(), CommonIoError> {
    if values.is_empty() || values.len() < length as usize {
        error!(
            "{}: buffer of {} bytes is too short for {} bytes",
            op,
            values.len(),
            length
        );
        Err(CommonIoError::Fail)
    } else {
        Ok(())
    }
}

fn verify_count<E>(
    op: &str,
    what: &str,
    reported: Result<u16, E>,
    expected: u8,
) -> Result<(), CommonIoError> {
    match reported {
        Ok(n) if n == expected as u16 => {
            debug!("{}: {} {} bytes", op, what, n);
            Ok(())
        }
        Ok(n) => {
            error!(
                "{}: failed to check the number of {} bytes {} vs. {}",
                op, what, n, expected
            );
            Err(CommonIoError::Fail)
        }
        Err(_) => {
            error!("{}: failed to query the number of {} bytes", op, what);
            Err(CommonIoError::Fail)
        }
    }
}
