mod emulated_bus;
pub use emulated_bus::{BusEvent, EmulatedBus, EmulatorError, Faults};
