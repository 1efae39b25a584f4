//! Log backend selection: `defmt` on target, the `log` facade otherwise.

#![macro_use]
#![allow(unused_macros)]

macro_rules! log_at {
    ($level:ident, $defmt_macro:ident, $($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::$defmt_macro!($($arg)*);
        #[cfg(not(feature = "defmt"))]
        {
            if ::log::Level::$level <= $crate::config::LOG_LEVEL {
                ::log::log!(target: $crate::config::LOG_TARGET, ::log::Level::$level, $($arg)*);
            }
        }
    }};
}

macro_rules! trace {
    ($($arg:tt)*) => { log_at!(Trace, trace, $($arg)*) };
}

macro_rules! debug {
    ($($arg:tt)*) => { log_at!(Debug, debug, $($arg)*) };
}

macro_rules! info {
    ($($arg:tt)*) => { log_at!(Info, info, $($arg)*) };
}

macro_rules! warn {
    ($($arg:tt)*) => { log_at!(Warn, warn, $($arg)*) };
}

macro_rules! error {
    ($($arg:tt)*) => { log_at!(Error, error, $($arg)*) };
}
