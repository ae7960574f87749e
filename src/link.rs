//! Motor Link Controller
//!
//! Runs the data link on two motor groups at once: group A (M1-M3) and
//! group B (M4), each with its own tone engine and byte. While the link
//! is enabled both groups repeat their byte, separated by a silent gap.
//!
//! # Sequence
//!
//! ```text
//! enabled ──► gap ──► send A+B ──► (either done) ──► gap ──► send A+B ...
//! ```
//!
//! Parameter changes are staged and applied at the start of the next
//! tick by rebuilding both engines, which abandons any byte on air.

use crate::actuator::{MotorBank, MotorGroup, PendingTone};
use crate::config::{
    ticks_for_ms, ModulationParams, DEFAULT_MESSAGE_GAP_MS, LINK_GROUP_A, LINK_GROUP_B, LINK_TEXT,
    TRANSMISSION_TASK_PERIOD_MS,
};
use crate::error::ModemError;
use crate::logging::{debug, info, warning};
use crate::modem::engine::{ModulationConfig, TickOutcome, ToneEngine};
use crate::types::MotorMask;

/// Motor group of the link
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkGroup {
    /// Motors M1-M3
    A,
    /// Motor M4
    B,
}

#[cfg(feature = "embedded")]
impl defmt::Format for LinkGroup {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::A => defmt::write!(f, "A"),
            Self::B => defmt::write!(f, "B"),
        }
    }
}

/// Engine plus the motors it drives
#[derive(Debug)]
struct GroupChannel {
    engine: ToneEngine<PendingTone>,
    motors: MotorGroup,
    message: u8,
}

impl GroupChannel {
    fn new(params: &ModulationParams, period_ms: u32, motors: MotorMask, message: u8) -> Self {
        Self {
            engine: ToneEngine::new(
                ModulationConfig::from_params(params, period_ms),
                PendingTone::new(),
            ),
            motors: MotorGroup::new(motors),
            message,
        }
    }

    fn flush<B: MotorBank>(&mut self, bank: &mut B) {
        if let Some(hz) = self.engine.actuator_mut().take() {
            self.motors.apply(bank, hz);
        }
    }
}

/// Outcome of one link tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkTick {
    /// Group A engine outcome
    pub a: TickOutcome,
    /// Group B engine outcome
    pub b: TickOutcome,
    /// A new pair of bytes was started this tick
    pub started: bool,
}

/// Two-group data link
#[derive(Debug)]
pub struct MotorLink {
    group_a: GroupChannel,
    group_b: GroupChannel,
    period_ms: u32,
    enabled: bool,
    streaming: bool,
    gap_ticks: u32,
    gap_counter: u32,
    staged: Option<(ModulationParams, ModulationParams)>,
    last_error: Option<ModemError>,
}

impl MotorLink {
    /// Create a link with per-group parameters
    #[must_use]
    pub fn new(params_a: ModulationParams, params_b: ModulationParams, period_ms: u32) -> Self {
        Self {
            group_a: GroupChannel::new(&params_a, period_ms, LINK_GROUP_A, LINK_TEXT[0]),
            group_b: GroupChannel::new(&params_b, period_ms, LINK_GROUP_B, LINK_TEXT[1]),
            period_ms,
            enabled: false,
            streaming: false,
            gap_ticks: ticks_for_ms(DEFAULT_MESSAGE_GAP_MS, period_ms),
            gap_counter: 0,
            staged: None,
            last_error: None,
        }
    }

    fn group(&self, group: LinkGroup) -> &GroupChannel {
        match group {
            LinkGroup::A => &self.group_a,
            LinkGroup::B => &self.group_b,
        }
    }

    fn group_mut(&mut self, group: LinkGroup) -> &mut GroupChannel {
        match group {
            LinkGroup::A => &mut self.group_a,
            LinkGroup::B => &mut self.group_b,
        }
    }

    /// Turn repeated transmission on or off
    ///
    /// Turning it off lets the bytes on air finish.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Check if the link repeats its bytes
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Check if a pair of bytes is on air
    #[must_use]
    pub const fn is_streaming(&self) -> bool {
        self.streaming
    }

    /// Byte a group repeats
    #[must_use]
    pub fn message(&self, group: LinkGroup) -> u8 {
        self.group(group).message
    }

    /// Change the byte a group repeats, from its next start
    pub fn set_message(&mut self, group: LinkGroup, byte: u8) {
        self.group_mut(group).message = byte;
    }

    /// Pick a group's byte from the built-in text by index
    ///
    /// Returns the selected byte, or `None` if the index is past the end.
    pub fn select_text(&mut self, group: LinkGroup, index: usize) -> Option<u8> {
        let byte = *LINK_TEXT.get(index)?;
        self.set_message(group, byte);
        Some(byte)
    }

    /// Change the silence between repeated bytes
    pub fn set_message_gap_ms(&mut self, gap_ms: u32) {
        self.gap_ticks = ticks_for_ms(gap_ms, self.period_ms);
    }

    /// Silent ticks between repeated bytes
    #[must_use]
    pub const fn message_gap_ticks(&self) -> u32 {
        self.gap_ticks
    }

    /// Stage new parameters for both groups, applied on the next tick
    pub fn stage_params(&mut self, params_a: ModulationParams, params_b: ModulationParams) {
        self.staged = Some((params_a, params_b));
    }

    /// Check if staged parameters await the next tick
    #[must_use]
    pub const fn has_staged_params(&self) -> bool {
        self.staged.is_some()
    }

    /// Engine of a group
    #[must_use]
    pub fn engine(&self, group: LinkGroup) -> &ToneEngine<PendingTone> {
        &self.group(group).engine
    }

    /// Tone last written to a group's motors
    #[must_use]
    pub fn group_frequency(&self, group: LinkGroup) -> u32 {
        self.group(group).motors.last_frequency()
    }

    /// Last error reported when starting a byte
    #[must_use]
    pub const fn last_error(&self) -> Option<ModemError> {
        self.last_error
    }

    /// Abort both groups and silence their motors
    pub fn stop<B: MotorBank>(&mut self, bank: &mut B) -> bool {
        let a = self.group_a.engine.force_stop();
        let b = self.group_b.engine.force_stop();
        self.streaming = false;
        self.group_a.flush(bank);
        self.group_b.flush(bank);
        a || b
    }

    /// Advance the link by one scheduler tick
    pub fn tick<B: MotorBank>(&mut self, bank: &mut B) -> LinkTick {
        self.apply_staged();

        let mut report = LinkTick {
            a: self.group_a.engine.advance(),
            b: self.group_b.engine.advance(),
            started: false,
        };

        if self.enabled && !self.streaming {
            self.gap_counter += 1;
            if self.gap_counter >= self.gap_ticks {
                self.gap_counter = 0;
                self.start_pair();
                report.started = true;
            }
        } else {
            if !self.enabled {
                self.streaming = false;
            }
            if self.streaming
                && (!self.group_a.engine.is_transmitting() || !self.group_b.engine.is_transmitting())
            {
                self.streaming = false;
            }
        }

        self.group_a.flush(bank);
        self.group_b.flush(bank);
        report
    }

    fn start_pair(&mut self) {
        self.streaming = true;
        self.last_error = None;
        for group in [LinkGroup::A, LinkGroup::B] {
            let channel = self.group_mut(group);
            let byte = channel.message;
            if let Err(err) = channel.engine.prepare_and_transmit(byte) {
                warning!("link group {:?} could not start {:#x}", group, byte);
                self.last_error = Some(err);
            }
        }
        debug!(
            "link sending A={:#x} B={:#x}",
            self.group_a.message,
            self.group_b.message
        );
    }

    fn apply_staged(&mut self) {
        let Some((params_a, params_b)) = self.staged.take() else {
            return;
        };
        let a = self
            .group_a
            .engine
            .reconfigure(ModulationConfig::from_params(&params_a, self.period_ms));
        let b = self
            .group_b
            .engine
            .reconfigure(ModulationConfig::from_params(&params_b, self.period_ms));
        info!("link parameters applied, interrupted A={} B={}", a, b);
    }
}

impl Default for MotorLink {
    fn default() -> Self {
        Self::new(
            ModulationParams::default(),
            ModulationParams::default(),
            TRANSMISSION_TASK_PERIOD_MS,
        )
    }
}
