//! System configuration and constants
//!
//! Compile-time constants for the acoustic link plus the parameter sets
//! that may be changed at runtime. Parameter sets are plain values: a
//! consumer applies a new set by rebuilding the state machine it feeds.

use crate::types::{Alphabet, MotorId, MotorMask};

/// Number of propulsion motors on the airframe
pub const NUM_MOTORS: usize = 4;

/// Symbols needed for one byte when every symbol carries one bit
pub const SYMBOLS_PER_BYTE: usize = 8;

/// Period of the data link task in milliseconds
pub const TRANSMISSION_TASK_PERIOD_MS: u32 = 25;

/// Period of the chirp-ID and beacon task in milliseconds
pub const SOUND_TASK_PERIOD_MS: u32 = 50;

/// Default link center frequency
pub const DEFAULT_CENTER_FREQ_HZ: u32 = 10_000;

/// Default distance between the low and high tone
pub const DEFAULT_BANDWIDTH_HZ: u32 = 500;

/// Default time a symbol is held
pub const DEFAULT_SYMBOL_MS: u32 = 100;

/// Default silence between chirp-alphabet symbols
pub const DEFAULT_SYMBOL_PAUSE_MS: u32 = 50;

/// Default silence between repeated bytes on the link
pub const DEFAULT_MESSAGE_GAP_MS: u32 = 400;

/// Silent ticks between chirp-ID bits (exceeded before the next bit)
pub const CHIRP_ID_PAUSE_TICKS: u8 = 2;

/// Default chirp-ID payload (alternating up/down chirps)
pub const DEFAULT_CHIRP_ID_MESSAGE: u8 = 0xAA;

/// Default ID beacon tone
pub const DEFAULT_ID_FREQUENCY_HZ: u32 = 16_000;

/// Default ID beacon duration in sound task ticks
pub const DEFAULT_ID_BROADCAST_TICKS: u8 = 4;

/// Default ID beacon motors (M1 only)
pub const DEFAULT_ID_MOTORS: MotorMask = MotorMask::single(MotorId::M1);

/// Link group A: motors M1-M3 sound together
pub const LINK_GROUP_A: MotorMask = MotorMask::from_bits(0b0111);

/// Link group B: motor M4 alone
pub const LINK_GROUP_B: MotorMask = MotorMask::single(MotorId::M4);

/// Bytes the link cycles through when selecting a payload by index
pub const LINK_TEXT: &[u8] = b"Hello world! :) \n";

/// PWM duty applied to a motor while it sounds a tone
pub const TONE_DUTY_PERCENT: u8 = 5;

/// Ceiling division used for every ms-to-ticks conversion
#[must_use]
pub const fn ticks_for_ms(ms: u32, period_ms: u32) -> u32 {
    if period_ms == 0 {
        return 0;
    }
    ms.div_ceil(period_ms)
}

/// Tone link parameters as set by the operator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModulationParams {
    /// Center between the low and high tone
    pub center_freq: u32,
    /// Distance between the low and high tone
    pub bandwidth: u32,
    /// Time a symbol is held
    pub symbol_ms: u32,
    /// Silence between symbols (chirp alphabet only)
    pub pause_ms: u32,
    /// Symbol alphabet
    pub alphabet: Alphabet,
}

impl ModulationParams {
    /// Binary link parameters
    #[must_use]
    pub const fn binary(center_freq: u32, bandwidth: u32, symbol_ms: u32) -> Self {
        Self {
            center_freq,
            bandwidth,
            symbol_ms,
            pause_ms: 0,
            alphabet: Alphabet::Binary,
        }
    }

    /// Chirp link parameters
    #[must_use]
    pub const fn chirp(center_freq: u32, bandwidth: u32, symbol_ms: u32, pause_ms: u32) -> Self {
        Self {
            center_freq,
            bandwidth,
            symbol_ms,
            pause_ms,
            alphabet: Alphabet::Chirp,
        }
    }

    /// Low tone
    #[must_use]
    pub const fn low_freq(&self) -> u32 {
        self.center_freq.saturating_sub(self.bandwidth / 2)
    }

    /// High tone
    #[must_use]
    pub const fn high_freq(&self) -> u32 {
        self.center_freq + self.bandwidth / 2
    }
}

impl Default for ModulationParams {
    fn default() -> Self {
        Self::binary(DEFAULT_CENTER_FREQ_HZ, DEFAULT_BANDWIDTH_HZ, DEFAULT_SYMBOL_MS)
    }
}

/// Per-motor chirp-ID sweep parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChirpParams {
    /// Sweep center
    pub center_freq: u16,
    /// Sweep duration in milliseconds
    pub chirp_len_ms: u16,
    /// Sweep rate in Hz per second
    pub chirp_slope: u16,
}

impl ChirpParams {
    /// Create sweep parameters
    #[must_use]
    pub const fn new(center_freq: u16, chirp_len_ms: u16, chirp_slope: u16) -> Self {
        Self {
            center_freq,
            chirp_len_ms,
            chirp_slope,
        }
    }

    /// Total frequency change over one chirp
    #[must_use]
    pub const fn sweep_hz(&self) -> u32 {
        (self.chirp_slope as u32).saturating_mul(self.chirp_len_ms as u32) / 1000
    }

    /// Frequency change per task tick, saturating for very long periods
    #[must_use]
    pub const fn step_hz(&self, period_ms: u32) -> u32 {
        (self.chirp_slope as u32).saturating_mul(period_ms) / 1000
    }

    /// Lowest frequency of the sweep
    #[must_use]
    pub const fn bottom_freq(&self) -> u32 {
        (self.center_freq as u32).saturating_sub(self.sweep_hz() / 2)
    }

    /// Highest frequency of the sweep
    #[must_use]
    pub const fn top_freq(&self) -> u32 {
        self.center_freq as u32 + self.sweep_hz() / 2
    }
}

/// Factory chirp-ID parameters, neighbouring motors on distinct centers
pub const DEFAULT_CHIRP_PARAMS: [ChirpParams; NUM_MOTORS] = [
    ChirpParams::new(13_000, 500, 2_000),
    ChirpParams::new(15_000, 500, 2_000),
    ChirpParams::new(13_000, 500, 2_000),
    ChirpParams::new(15_000, 500, 2_000),
];

/// ID beacon parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BeaconParams {
    /// Tone that identifies the vehicle
    pub frequency: u32,
    /// Motors that emit the tone
    pub motors: MotorMask,
    /// Ticks the tone is held after the start tick
    pub duration_ticks: u8,
}

impl Default for BeaconParams {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_ID_FREQUENCY_HZ,
            motors: DEFAULT_ID_MOTORS,
            duration_ticks: DEFAULT_ID_BROADCAST_TICKS,
        }
    }
}
