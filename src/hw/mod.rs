mod hal_transport;
pub use hal_transport::{HalTransport, HalTransportError};

/// Synchronous I2C transport, one call per bus step.
///
/// Every call blocks until the transaction completes or fails. Timeouts, if
/// any, belong to the implementation.
pub trait I2cTransport {
    type Error;

    /// Select the slave addressed by subsequent transfers.
    fn set_slave_address(&mut self, address: u8) -> Result<(), Self::Error>;

    /// Transmit `bytes` as one transaction.
    fn write_sync(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Receive `buffer.len()` bytes as one transaction.
    fn read_sync(&mut self, buffer: &mut [u8]) -> Result<(), Self::Error>;

    /// Number of bytes transmitted by the last write.
    fn tx_byte_count(&mut self) -> Result<u16, Self::Error>;

    /// Number of bytes received by the last read.
    fn rx_byte_count(&mut self) -> Result<u16, Self::Error>;
}

impl<T: I2cTransport + ?Sized> I2cTransport for &mut T {
    type Error = T::Error;

    fn set_slave_address(&mut self, address: u8) -> Result<(), Self::Error> {
        (**self).set_slave_address(address)
    }

    fn write_sync(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).write_sync(bytes)
    }

    fn read_sync(&mut self, buffer: &mut [u8]) -> Result<(), Self::Error> {
        (**self).read_sync(buffer)
    }

    fn tx_byte_count(&mut self) -> Result<u16, Self::Error> {
        (**self).tx_byte_count()
    }

    fn rx_byte_count(&mut self) -> Result<u16, Self::Error> {
        (**self).rx_byte_count()
    }
}
