//! Error types for the acoustic link

use thiserror::Error;

/// Errors surfaced by the tone engine and the transport built on it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ModemError {
    /// A byte is already in flight; offer it again later
    #[error("transmitter busy")]
    Busy,
}

#[cfg(feature = "embedded")]
impl defmt::Format for ModemError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Busy => defmt::write!(f, "Busy"),
        }
    }
}

/// Result alias for link operations
pub type ModemResult<T> = Result<T, ModemError>;
