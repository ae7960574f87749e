//! Logging facade
//!
//! Firmware builds log through `defmt` over RTT; host builds go through
//! the `log` crate so tests can attach `env_logger`. Call sites use the
//! crate macros below and stick to `{}`, `{:?}` and `{:#x}` placeholders,
//! which both backends understand. The warning level is `warning!`, as a
//! local `warn` macro cannot be re-exported next to the builtin attribute.

#[cfg(feature = "embedded")]
macro_rules! trace {
    ($($arg:tt)*) => { defmt::trace!($($arg)*) };
}

#[cfg(not(feature = "embedded"))]
macro_rules! trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(feature = "embedded")]
macro_rules! debug {
    ($($arg:tt)*) => { defmt::debug!($($arg)*) };
}

#[cfg(not(feature = "embedded"))]
macro_rules! debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(feature = "embedded")]
macro_rules! info {
    ($($arg:tt)*) => { defmt::info!($($arg)*) };
}

#[cfg(not(feature = "embedded"))]
macro_rules! info {
    ($($arg:tt)*) => { log::info!($($arg)*) };
}

#[cfg(feature = "embedded")]
macro_rules! warning {
    ($($arg:tt)*) => { defmt::warn!($($arg)*) };
}

#[cfg(not(feature = "embedded"))]
macro_rules! warning {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

pub(crate) use {debug, info, trace, warning};
