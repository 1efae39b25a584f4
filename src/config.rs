//-----------------------------------------------------------------------------

pub const LOG_TARGET: &str = "i2c-reg-helpers";
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

//-----------------------------------------------------------------------------

pub const I2C_ADDR_MIN: u8 = 0x0;
pub const I2C_ADDR_MAX: u8 = 0x7F;

//-----------------------------------------------------------------------------

pub const EMULATOR_MAX_DEVICES: usize = 4;
pub const EMULATOR_REGISTERS: usize = 256;
pub const EMULATOR_JOURNAL_LEN: usize = 16;
