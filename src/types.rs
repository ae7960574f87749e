//! Shared types used across the firmware
//!
//! This module defines domain-specific types that enforce invariants
//! at compile time and provide type safety throughout the codebase.

use core::fmt;

use crate::config::{NUM_MOTORS, TONE_DUTY_PERCENT};

/// Propulsion motor identifier
///
/// The airframe is a quadcopter; motors are numbered M1..M4 as printed
/// on the frame and indexed 0..3 internally.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MotorId {
    /// Front right
    M1,
    /// Rear right
    M2,
    /// Rear left
    M3,
    /// Front left
    M4,
}

impl MotorId {
    /// All motors in index order
    pub const ALL: [Self; NUM_MOTORS] = [Self::M1, Self::M2, Self::M3, Self::M4];

    /// Get the zero-based motor index
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::M1 => 0,
            Self::M2 => 1,
            Self::M3 => 2,
            Self::M4 => 3,
        }
    }

    /// Look up a motor by zero-based index
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::M1),
            1 => Some(Self::M2),
            2 => Some(Self::M3),
            3 => Some(Self::M4),
            _ => None,
        }
    }

    /// Single-motor bitmap bit
    #[must_use]
    pub const fn bit(self) -> u8 {
        1 << self.index()
    }
}

impl fmt::Debug for MotorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{}", self.index() + 1)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for MotorId {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "M{}", self.index() + 1);
    }
}

/// Bitmap of motors
///
/// Bit `i` selects motor index `i`. Only the low four bits are kept,
/// so `0b1010` selects M2 and M4.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct MotorMask(u8);

impl MotorMask {
    /// Bits that map to real motors
    const VALID_BITS: u8 = (1 << NUM_MOTORS) - 1;

    /// No motors selected
    pub const NONE: Self = Self(0);

    /// Every motor selected
    pub const ALL: Self = Self(Self::VALID_BITS);

    /// Create from a raw bitmap, discarding bits above the motor count
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::VALID_BITS)
    }

    /// Mask selecting a single motor
    #[must_use]
    pub const fn single(motor: MotorId) -> Self {
        Self(motor.bit())
    }

    /// Get the raw bitmap
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check whether a motor is selected
    #[must_use]
    pub const fn contains(self, motor: MotorId) -> bool {
        self.0 & motor.bit() != 0
    }

    /// Check whether no motor is selected
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Add a motor to the selection
    #[must_use]
    pub const fn with(self, motor: MotorId) -> Self {
        Self(self.0 | motor.bit())
    }

    /// Number of selected motors
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate over selected motors in index order
    pub fn iter(self) -> impl Iterator<Item = MotorId> {
        MotorId::ALL.into_iter().filter(move |m| self.contains(*m))
    }
}

impl fmt::Debug for MotorMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MotorMask({:04b})", self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for MotorMask {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=u8:b}", self.0);
    }
}

/// Symbol alphabet used by the tone engine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// Two flat tones, one symbol per bit
    #[default]
    Binary,
    /// Two flat tones plus up/down ramps, one symbol per bit pair
    Chirp,
}

impl Alphabet {
    /// Bits carried by one symbol
    #[must_use]
    pub const fn bits_per_symbol(self) -> u8 {
        match self {
            Self::Binary => 1,
            Self::Chirp => 2,
        }
    }

    /// Symbols needed to carry one byte
    #[must_use]
    pub const fn symbols_per_byte(self) -> usize {
        match self {
            Self::Binary => 8,
            Self::Chirp => 4,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Alphabet {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Binary => defmt::write!(f, "BIN"),
            Self::Chirp => defmt::write!(f, "CHIRP"),
        }
    }
}

/// Order in which the bits of a byte are walked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitOrder {
    /// Bit 7 first
    MsbFirst,
    /// Bit 0 first
    LsbFirst,
}

impl BitOrder {
    /// Read the bit at position `i` of the walk (0 = first bit sent)
    #[must_use]
    pub const fn bit(self, byte: u8, i: u8) -> bool {
        let shift = match self {
            Self::MsbFirst => 7 - (i & 7),
            Self::LsbFirst => i & 7,
        };
        byte & (1 << shift) != 0
    }
}

/// PWM duty cycle (0-65535)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DutyCycle(u16);

impl DutyCycle {
    /// 0% duty cycle
    pub const ZERO: Self = Self(0);

    /// Create from percentage (0-100)
    #[must_use]
    pub const fn from_percent(percent: u8) -> Self {
        let percent = if percent > 100 { 100 } else { percent };
        Self(((percent as u32 * 65535) / 100) as u16)
    }

    /// Duty for a motor playing `hz`: the tone duty, or zero when silent
    #[must_use]
    pub const fn for_tone(hz: u32) -> Self {
        if hz == 0 {
            Self::ZERO
        } else {
            Self::from_percent(TONE_DUTY_PERCENT)
        }
    }

    /// Get raw 16-bit value
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Get as percentage
    #[must_use]
    pub const fn as_percent(self) -> u8 {
        ((self.0 as u32 * 100) / 65535) as u8
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for DutyCycle {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}%", self.as_percent());
    }
}
