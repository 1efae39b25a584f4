use embedded_hal::blocking::i2c::{Read, Write};

use super::I2cTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HalTransportError<E> {
    /// Transfer requested before a slave address was configured
    AddressNotSet,
    /// Error reported by the underlying bus
    Bus(E),
}

/// Presents an `embedded-hal` blocking bus as an [`I2cTransport`].
///
/// The bus itself has no notion of a selected slave or of transferred byte
/// counts, so both are tracked here. A failed transfer records a count of 0.
pub struct HalTransport<I2C> {
    i2c: I2C,
    address: Option<u8>,
    tx_count: u16,
    rx_count: u16,
}

impl<I2C> HalTransport<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            address: None,
            tx_count: 0,
            rx_count: 0,
        }
    }

    pub fn address(&self) -> Option<u8> {
        self.address
    }

    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> I2cTransport for HalTransport<I2C>
where
    I2C: Read<Error = E> + Write<Error = E>,
{
    type Error = HalTransportError<E>;

    fn set_slave_address(&mut self, address: u8) -> Result<(), Self::Error> {
        self.address = Some(address);
        Ok(())
    }

    fn write_sync(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        let addr = self.address.ok_or(HalTransportError::AddressNotSet)?;

        self.tx_count = 0;
        self.i2c.write(addr, bytes).map_err(HalTransportError::Bus)?;
        self.tx_count = bytes.len() as u16;
        Ok(())
    }

    fn read_sync(&mut self, buffer: &mut [u8]) -> Result<(), Self::Error> {
        let addr = self.address.ok_or(HalTransportError::AddressNotSet)?;

        self.rx_count = 0;
        self.i2c.read(addr, buffer).map_err(HalTransportError::Bus)?;
        self.rx_count = buffer.len() as u16;
        Ok(())
    }

    fn tx_byte_count(&mut self) -> Result<u16, Self::Error> {
        Ok(self.tx_count)
    }

    fn rx_byte_count(&mut self) -> Result<u16, Self::Error> {
        Ok(self.rx_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Nack;

    struct FakeBus {
        last_addr: u8,
        written: [u8; 8],
        written_len: usize,
        fail: bool,
    }

    impl FakeBus {
        fn new() -> Self {
            Self {
                last_addr: 0,
                written: [0; 8],
                written_len: 0,
                fail: false,
            }
        }
    }

    impl Write for FakeBus {
        type Error = Nack;

        fn write(&mut self, addr: u8, bytes: &[u8]) -> Result<(), Self::Error> {
            if self.fail {
                return Err(Nack);
            }
            self.last_addr = addr;
            self.written[..bytes.len()].copy_from_slice(bytes);
            self.written_len = bytes.len();
            Ok(())
        }
    }

    impl Read for FakeBus {
        type Error = Nack;

        fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
            if self.fail {
                return Err(Nack);
            }
            self.last_addr = addr;
            buffer.iter_mut().enumerate().for_each(|(i, b)| *b = i as u8);
            Ok(())
        }
    }

    #[test]
    fn test_transfer_without_address() {
        let mut t = HalTransport::new(FakeBus::new());
        assert_eq!(t.write_sync(&[1]), Err(HalTransportError::AddressNotSet));
        let mut buf = [0u8; 2];
        assert_eq!(t.read_sync(&mut buf), Err(HalTransportError::AddressNotSet));
    }

    #[test]
    fn test_counts_follow_transfers() {
        let mut t = HalTransport::new(FakeBus::new());
        t.set_slave_address(0x76).unwrap();
        assert_eq!(t.address(), Some(0x76));

        t.write_sync(&[0xF4, 0x27, 0x00]).unwrap();
        assert_eq!(t.tx_byte_count(), Ok(3));

        let mut buf = [0u8; 5];
        t.read_sync(&mut buf).unwrap();
        assert_eq!(t.rx_byte_count(), Ok(5));
        assert_eq!(buf, [0, 1, 2, 3, 4]);

        let bus = t.release();
        assert_eq!(bus.last_addr, 0x76);
        assert_eq!(&bus.written[..bus.written_len], &[0xF4, 0x27, 0x00]);
    }

    #[test]
    fn test_failed_transfer_resets_count() {
        let mut t = HalTransport::new(FakeBus::new());
        t.set_slave_address(0x10).unwrap();
        t.write_sync(&[1, 2]).unwrap();
        assert_eq!(t.tx_byte_count(), Ok(2));

        t.i2c.fail = true;
        assert_eq!(t.write_sync(&[1, 2]), Err(HalTransportError::Bus(Nack)));
        assert_eq!(t.tx_byte_count(), Ok(0));

        let mut buf = [0u8; 1];
        assert_eq!(t.read_sync(&mut buf), Err(HalTransportError::Bus(Nack)));
        assert_eq!(t.rx_byte_count(), Ok(0));
    }
}
