use heapless::{Deque, Vec};
use static_assertions::{const_assert, const_assert_eq};

use crate::config::{
    EMULATOR_JOURNAL_LEN, EMULATOR_MAX_DEVICES, EMULATOR_REGISTERS, I2C_ADDR_MAX, I2C_ADDR_MIN,
};
use crate::hw::I2cTransport;

// register pointer is a u8
const_assert_eq!(EMULATOR_REGISTERS, 256);
const_assert!(EMULATOR_MAX_DEVICES > 0);
const_assert!(EMULATOR_JOURNAL_LEN > 0);

/// One transport call as seen by the emulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusEvent {
    SetSlaveAddress(u8),
    Write(usize),
    Read(usize),
    TxCount,
    RxCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmulatorError {
    /// Failure forced through [`Faults`]
    Injected,
    /// No device answers at this address
    Nack(u8),
    /// Transfer requested before a slave address was configured
    AddressNotSet,
    /// Write length refused by [`Faults::accept_write_len`]
    RejectedLength(usize),
    /// Address outside the 7-bit range
    InvalidAddress(u8),
    /// Device already attached at this address
    AddressInUse(u8),
    TooManyDevices,
}

/// Failures to inject into subsequent transport calls.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Faults {
    pub set_address: bool,
    pub write: bool,
    pub read: bool,
    /// Fail both byte count queries
    pub byte_count: bool,
    /// Reported instead of the real transmitted count
    pub tx_count: Option<u16>,
    /// Reported instead of the real received count
    pub rx_count: Option<u16>,
    /// Only writes of exactly this many bytes are acknowledged
    pub accept_write_len: Option<usize>,
}

struct EmulatedDevice {
    address: u8,
    registers: [u8; EMULATOR_REGISTERS],
    pointer: u8,
}

impl EmulatedDevice {
    fn new(address: u8) -> Self {
        Self {
            address,
            registers: [0; EMULATOR_REGISTERS],
            pointer: 0,
        }
    }

    /// First byte selects the register, the rest is stored from there on.
    fn write(&mut self, bytes: &[u8]) {
        if let Some((&reg, data)) = bytes.split_first() {
            self.pointer = reg;
            for &b in data {
                self.registers[self.pointer as usize] = b;
                self.pointer = self.pointer.wrapping_add(1);
            }
        }
    }

    fn read(&mut self, buffer: &mut [u8]) {
        for b in buffer.iter_mut() {
            *b = self.registers[self.pointer as usize];
            self.pointer = self.pointer.wrapping_add(1);
        }
    }
}

/// Register-map devices on an emulated bus.
///
/// Each device has 256 byte registers behind an auto-incrementing pointer,
/// the way most sensors behave: a write loads the pointer from its first byte
/// and stores the remaining bytes, a read returns consecutive registers.
pub struct EmulatedBus {
    devices: Vec<EmulatedDevice, EMULATOR_MAX_DEVICES>,
    address: Option<u8>,
    tx_count: u16,
    rx_count: u16,
    journal: Deque<BusEvent, EMULATOR_JOURNAL_LEN>,
    pub faults: Faults,
}

impl EmulatedBus {
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
            address: None,
            tx_count: 0,
            rx_count: 0,
            journal: Deque::new(),
            faults: Faults::default(),
        }
    }

    pub fn add_device(&mut self, address: u8) -> Result<(), EmulatorError> {
        if !(I2C_ADDR_MIN..=I2C_ADDR_MAX).contains(&address) {
            return Err(EmulatorError::InvalidAddress(address));
        }
        if self.device(address).is_some() {
            return Err(EmulatorError::AddressInUse(address));
        }
        self.devices
            .push(EmulatedDevice::new(address))
            .map_err(|_| EmulatorError::TooManyDevices)
    }

    pub fn with_device(mut self, address: u8) -> Result<Self, EmulatorError> {
        self.add_device(address)?;
        Ok(self)
    }

    pub fn register(&self, address: u8, reg: u8) -> Option<u8> {
        self.device(address).map(|d| d.registers[reg as usize])
    }

    pub fn set_register(&mut self, address: u8, reg: u8, value: u8) -> Result<(), EmulatorError> {
        let dev = self
            .device_mut(address)
            .ok_or(EmulatorError::Nack(address))?;
        dev.registers[reg as usize] = value;
        Ok(())
    }

    /// Oldest first; only the most recent calls are kept.
    pub fn journal(&self) -> impl Iterator<Item = &BusEvent> {
        self.journal.iter()
    }

    pub fn clear_journal(&mut self) {
        self.journal.clear();
    }

    fn record(&mut self, event: BusEvent) {
        if self.journal.is_full() {
            self.journal.pop_front();
        }
        // room was made above
        let _ = self.journal.push_back(event);
    }

    fn device(&self, address: u8) -> Option<&EmulatedDevice> {
        self.devices.iter().find(|d| d.address == address)
    }

    fn device_mut(&mut self, address: u8) -> Option<&mut EmulatedDevice> {
        self.devices.iter_mut().find(|d| d.address == address)
    }

    fn selected_device(&mut self) -> Result<&mut EmulatedDevice, EmulatorError> {
        let addr = self.address.ok_or(EmulatorError::AddressNotSet)?;
        self.device_mut(addr).ok_or(EmulatorError::Nack(addr))
    }
}

impl Default for EmulatedBus {
    fn default() -> Self {
        Self::new()
    }
}

impl I2cTransport for EmulatedBus {
    type Error = EmulatorError;

    fn set_slave_address(&mut self, address: u8) -> Result<(), Self::Error> {
        self.record(BusEvent::SetSlaveAddress(address));
        if self.faults.set_address {
            return Err(EmulatorError::Injected);
        }
        self.address = Some(address);
        Ok(())
    }

    fn write_sync(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.record(BusEvent::Write(bytes.len()));
        self.tx_count = 0;
        if self.faults.write {
            return Err(EmulatorError::Injected);
        }
        if let Some(len) = self.faults.accept_write_len {
            if len != bytes.len() {
                return Err(EmulatorError::RejectedLength(bytes.len()));
            }
        }

        self.selected_device()?.write(bytes);
        self.tx_count = bytes.len() as u16;
        Ok(())
    }

    fn read_sync(&mut self, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.record(BusEvent::Read(buffer.len()));
        self.rx_count = 0;
        if self.faults.read {
            return Err(EmulatorError::Injected);
        }

        self.selected_device()?.read(buffer);
        self.rx_count = buffer.len() as u16;
        Ok(())
    }

    fn tx_byte_count(&mut self) -> Result<u16, Self::Error> {
        self.record(BusEvent::TxCount);
        if self.faults.byte_count {
            return Err(EmulatorError::Injected);
        }
        Ok(self.faults.tx_count.unwrap_or(self.tx_count))
    }

    fn rx_byte_count(&mut self) -> Result<u16, Self::Error> {
        self.record(BusEvent::RxCount);
        if self.faults.byte_count {
            return Err(EmulatorError::Injected);
        }
        Ok(self.faults.rx_count.unwrap_or(self.rx_count))
    }
}
