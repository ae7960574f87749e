//! Symbol Codec
//!
//! Splits a byte into the tone symbols that carry it.
//!
//! # Bit order
//!
//! Both alphabets send the most significant bits first. `0b1100_0110`
//! becomes `HIGH HIGH LOW LOW LOW HIGH HIGH LOW` in the binary alphabet
//! and `HIGH LOW UP DOWN` in the chirp alphabet. The chirp-ID broadcaster
//! walks its bits the other way round; see [`BitOrder`].

use heapless::Vec;

use crate::config::SYMBOLS_PER_BYTE;
use crate::types::{Alphabet, BitOrder};

/// Bit order used by [`encode`]
pub const LINK_BIT_ORDER: BitOrder = BitOrder::MsbFirst;

/// One tone event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    /// Flat low tone
    Low,
    /// Flat high tone
    High,
    /// Ramp from the low toward the high tone
    Up,
    /// Ramp from the high toward the low tone
    Down,
}

impl Symbol {
    /// Check whether the tone changes during the symbol
    #[must_use]
    pub const fn is_ramp(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Chirp alphabet entry for a bit pair, first bit being the more
    /// significant one
    #[must_use]
    pub const fn from_dibit(hi: bool, lo: bool) -> Self {
        match (hi, lo) {
            (false, false) => Self::Low,
            (false, true) => Self::Up,
            (true, false) => Self::Down,
            (true, true) => Self::High,
        }
    }

    /// Binary alphabet entry for one bit
    #[must_use]
    pub const fn from_bit(bit: bool) -> Self {
        if bit {
            Self::High
        } else {
            Self::Low
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Symbol {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Low => defmt::write!(f, "LOW"),
            Self::High => defmt::write!(f, "HIGH"),
            Self::Up => defmt::write!(f, "UP"),
            Self::Down => defmt::write!(f, "DOWN"),
        }
    }
}

/// Symbols for one byte, in transmission order
pub type SymbolPlan = Vec<Symbol, SYMBOLS_PER_BYTE>;

/// Encode a byte into its symbol plan
///
/// Yields 8 symbols for [`Alphabet::Binary`] and 4 for [`Alphabet::Chirp`].
#[must_use]
pub fn encode(byte: u8, alphabet: Alphabet) -> SymbolPlan {
    let mut plan = SymbolPlan::new();
    match alphabet {
        Alphabet::Binary => {
            for i in 0..8 {
                let _ = plan.push(Symbol::from_bit(LINK_BIT_ORDER.bit(byte, i)));
            }
        }
        Alphabet::Chirp => {
            for pair in 0..4 {
                let hi = LINK_BIT_ORDER.bit(byte, pair * 2);
                let lo = LINK_BIT_ORDER.bit(byte, pair * 2 + 1);
                let _ = plan.push(Symbol::from_dibit(hi, lo));
            }
        }
    }
    plan
}

/// Bits of a byte in the given walk order
#[must_use]
pub fn bits(byte: u8, order: BitOrder) -> [bool; 8] {
    let mut out = [false; 8];
    for (i, bit) in (0u8..).zip(out.iter_mut()) {
        *bit = order.bit(byte, i);
    }
    out
}
