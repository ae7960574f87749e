//! Tone Engine
//!
//! Tick-driven transmitter for one byte at a time. The scheduler calls
//! [`ToneEngine::advance`] once per task period; the engine walks the
//! symbol plan of the byte in flight and drives its [`ToneActuator`].
//!
//! # Timing
//!
//! ```text
//! prepare   tick 1 .. n-1      tick n            (chirp, pause p)
//!    │          │                 │
//!    ▼          ▼                 ▼
//!  [sym 0 tone ........... ] [silence p ticks] [sym 1 tone ...] ... 0 Hz
//! ```
//!
//! Each symbol is held for `symbol_ticks` ticks. The chirp alphabet
//! inserts `pause_ticks` ticks of silence between symbols; the binary
//! alphabet runs symbols back to back. After the last symbol the output
//! is silenced and [`TickOutcome::MessageComplete`] is reported once.
//!
//! The actuator is written only when the commanded tone changes, so a
//! run of equal flat symbols costs a single write.

use crate::actuator::ToneActuator;
use crate::config::{ticks_for_ms, ModulationParams};
use crate::error::{ModemError, ModemResult};
use crate::logging::{debug, info, trace};
use crate::types::Alphabet;

use super::planner::FrequencyPlanner;
use super::symbol::{self, SymbolPlan};

/// Engine configuration, fixed for the lifetime of an engine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModulationConfig {
    /// Low tone in Hz
    pub low_freq: u32,
    /// High tone in Hz
    pub high_freq: u32,
    /// Ticks a symbol is held
    pub symbol_ticks: u32,
    /// Silent ticks between symbols (chirp alphabet only)
    pub pause_ticks: u32,
    /// Symbol alphabet
    pub alphabet: Alphabet,
    /// Ramp slope in Hz per tick (chirp alphabet only)
    pub freq_slope: u32,
}

impl ModulationConfig {
    /// Binary alphabet configuration
    #[must_use]
    pub const fn binary(low_freq: u32, high_freq: u32, symbol_ticks: u32) -> Self {
        Self {
            low_freq,
            high_freq,
            symbol_ticks,
            pause_ticks: 0,
            alphabet: Alphabet::Binary,
            freq_slope: 0,
        }
    }

    /// Chirp alphabet configuration, slope derived from the tone spacing
    #[must_use]
    pub const fn chirp(low_freq: u32, high_freq: u32, symbol_ticks: u32, pause_ticks: u32) -> Self {
        Self {
            low_freq,
            high_freq,
            symbol_ticks,
            pause_ticks,
            alphabet: Alphabet::Chirp,
            freq_slope: FrequencyPlanner::slope_for(
                high_freq.saturating_sub(low_freq),
                symbol_ticks,
            ),
        }
    }

    /// Derive tick counts from operator parameters for a task period
    #[must_use]
    pub const fn from_params(params: &ModulationParams, period_ms: u32) -> Self {
        let symbol_ticks = ticks_for_ms(params.symbol_ms, period_ms);
        match params.alphabet {
            Alphabet::Binary => Self::binary(params.low_freq(), params.high_freq(), symbol_ticks),
            Alphabet::Chirp => Self::chirp(
                params.low_freq(),
                params.high_freq(),
                symbol_ticks,
                ticks_for_ms(params.pause_ms, period_ms),
            ),
        }
    }

    /// Override the ramp slope
    #[must_use]
    pub const fn with_slope(mut self, freq_slope: u32) -> Self {
        self.freq_slope = freq_slope;
        self
    }

    /// Silent ticks actually inserted between symbols
    #[must_use]
    pub const fn effective_pause_ticks(&self) -> u32 {
        match self.alphabet {
            Alphabet::Binary => 0,
            Alphabet::Chirp => self.pause_ticks,
        }
    }

    /// Ticks from `prepare_and_transmit` to `MessageComplete` for one byte
    #[must_use]
    pub const fn ticks_per_byte(&self) -> u32 {
        let symbols = self.alphabet.symbols_per_byte() as u32;
        let hold = if self.symbol_ticks == 0 { 1 } else { self.symbol_ticks };
        symbols * hold + (symbols - 1) * self.effective_pause_ticks()
    }

    const fn planner(&self) -> FrequencyPlanner {
        FrequencyPlanner::new(self.low_freq, self.high_freq, self.freq_slope)
    }
}

/// Result of one engine tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing in flight
    Idle,
    /// Holding a symbol or a pause
    InProgress,
    /// Moved on to the next symbol
    SymbolBoundary,
    /// Last symbol finished, output silenced
    MessageComplete,
}

#[cfg(feature = "embedded")]
impl defmt::Format for TickOutcome {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Idle => defmt::write!(f, "Idle"),
            Self::InProgress => defmt::write!(f, "InProgress"),
            Self::SymbolBoundary => defmt::write!(f, "Boundary"),
            Self::MessageComplete => defmt::write!(f, "Complete"),
        }
    }
}

/// Progress through the byte in flight
#[derive(Clone, Debug, Default)]
struct TransmissionState {
    symbols: SymbolPlan,
    index: usize,
    /// Ticks into the current symbol; negative while pausing
    counter: i32,
    /// Last tone written to the actuator
    current_freq: u32,
    transmitting: bool,
}

/// Single-byte tone transmitter
///
/// Owns its actuator and is driven through `&mut self` only, so a tick and
/// a control call can never interleave.
#[derive(Debug)]
pub struct ToneEngine<A: ToneActuator> {
    config: ModulationConfig,
    actuator: A,
    state: TransmissionState,
}

impl<A: ToneActuator> ToneEngine<A> {
    /// Create an idle engine
    #[must_use]
    pub fn new(config: ModulationConfig, actuator: A) -> Self {
        Self {
            config,
            actuator,
            state: TransmissionState::default(),
        }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &ModulationConfig {
        &self.config
    }

    /// Check if a byte is in flight
    #[must_use]
    pub const fn is_transmitting(&self) -> bool {
        self.state.transmitting
    }

    /// Last tone written to the actuator (0 when silent)
    #[must_use]
    pub const fn current_frequency(&self) -> u32 {
        self.state.current_freq
    }

    /// Index of the symbol being sent
    #[must_use]
    pub const fn symbol_index(&self) -> usize {
        self.state.index
    }

    /// Borrow the actuator
    #[must_use]
    pub const fn actuator(&self) -> &A {
        &self.actuator
    }

    /// Mutably borrow the actuator
    pub fn actuator_mut(&mut self) -> &mut A {
        &mut self.actuator
    }

    /// Start sending a byte and sound its first symbol
    ///
    /// # Errors
    ///
    /// [`ModemError::Busy`] while another byte is in flight; the byte in
    /// flight is not disturbed.
    pub fn prepare_and_transmit(&mut self, byte: u8) -> ModemResult<()> {
        if self.state.transmitting {
            debug!("tone engine busy, rejecting {:#x}", byte);
            return Err(ModemError::Busy);
        }

        self.state.symbols = symbol::encode(byte, self.config.alphabet);
        self.state.index = 0;
        self.state.transmitting = true;
        info!("tone tx start {:#x}", byte);

        self.start_symbol();
        Ok(())
    }

    /// Advance by one scheduler tick
    pub fn advance(&mut self) -> TickOutcome {
        if !self.state.transmitting {
            return TickOutcome::Idle;
        }

        self.state.counter = self.state.counter.saturating_add(1);

        // Inter-symbol pause: silent until the counter climbs back to zero
        if self.state.counter < 0 {
            return TickOutcome::InProgress;
        }
        if self.state.counter == 0 {
            self.start_symbol();
            return TickOutcome::InProgress;
        }

        let ticks = self.state.counter.unsigned_abs();
        if ticks < self.config.symbol_ticks {
            let hz = self.config.planner().frequency(self.current_symbol(), ticks);
            self.command(hz);
            return TickOutcome::InProgress;
        }

        self.state.index += 1;
        if self.state.index >= self.state.symbols.len() {
            self.command(0);
            self.state.transmitting = false;
            info!("tone tx complete");
            return TickOutcome::MessageComplete;
        }

        trace!("tone tx symbol {}", self.state.index);
        let pause = self.config.effective_pause_ticks();
        if pause > 0 {
            self.command(0);
            self.state.counter = -i32::try_from(pause).unwrap_or(i32::MAX);
        } else {
            self.start_symbol();
        }
        TickOutcome::SymbolBoundary
    }

    /// Abort the byte in flight and silence the output
    ///
    /// Returns `true` if a byte was interrupted. An idle engine is left
    /// untouched and its actuator is not written.
    pub fn force_stop(&mut self) -> bool {
        if !self.state.transmitting {
            return false;
        }

        self.state.transmitting = false;
        self.state.current_freq = 0;
        self.actuator.set_frequency(0);
        info!("tone tx stopped at symbol {}", self.state.index);
        true
    }

    /// Replace the configuration, abandoning any byte in flight
    ///
    /// Equivalent to destroying the engine and creating a new one over the
    /// same actuator. Returns `true` if a byte was interrupted.
    pub fn reconfigure(&mut self, config: ModulationConfig) -> bool {
        let interrupted = self.force_stop();
        self.config = config;
        self.state = TransmissionState::default();
        debug!(
            "tone engine reconfigured {}..{} Hz, {} ticks/symbol",
            config.low_freq,
            config.high_freq,
            config.symbol_ticks
        );
        interrupted
    }

    /// Stop the engine for good and hand back its actuator
    ///
    /// The second value reports whether a byte was interrupted.
    pub fn destroy(mut self) -> (A, bool) {
        let interrupted = self.force_stop();
        (self.actuator, interrupted)
    }

    fn current_symbol(&self) -> symbol::Symbol {
        // index < len whenever transmitting
        self.state.symbols[self.state.index]
    }

    fn start_symbol(&mut self) {
        self.state.counter = 0;
        let hz = self.config.planner().frequency(self.current_symbol(), 0);
        self.command(hz);
    }

    fn command(&mut self, hz: u32) {
        if hz != self.state.current_freq {
            self.actuator.set_frequency(hz);
            self.state.current_freq = hz;
        }
    }
}
