//! ID Beacon
//!
//! The simplest broadcast: one fixed tone on a set of motors for a fixed
//! number of ticks. A request that arrives while the beacon is sounding
//! is dropped, not queued.

use crate::actuator::MotorBank;
use crate::config::BeaconParams;
use crate::logging::{debug, info};
use crate::types::MotorMask;

use super::RequestLatch;

/// Result of one beacon tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BeaconOutcome {
    /// Not sounding
    Idle,
    /// Tone switched on this tick
    Started,
    /// Tone held
    Holding,
    /// Tone switched off this tick
    Finished,
}

#[cfg(feature = "embedded")]
impl defmt::Format for BeaconOutcome {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Idle => defmt::write!(f, "Idle"),
            Self::Started => defmt::write!(f, "Started"),
            Self::Holding => defmt::write!(f, "Holding"),
            Self::Finished => defmt::write!(f, "Finished"),
        }
    }
}

/// Single-tone identification beacon
#[derive(Clone, Debug)]
pub struct IdBeacon {
    params: BeaconParams,
    request: RequestLatch,
    broadcasting: bool,
    /// Ticks elapsed since the tone went on, start tick included; wider
    /// than `duration_ticks` so it can always run past it
    ticks: u16,
    /// Motors switched on for the running broadcast
    motors_in_use: MotorMask,
}

impl IdBeacon {
    /// Create a dormant beacon
    #[must_use]
    pub const fn new(params: BeaconParams) -> Self {
        Self {
            params,
            request: RequestLatch::new(),
            broadcasting: false,
            ticks: 0,
            motors_in_use: MotorMask::NONE,
        }
    }

    /// Beacon parameters
    #[must_use]
    pub const fn params(&self) -> &BeaconParams {
        &self.params
    }

    /// Change the parameters; a running broadcast keeps its motors
    pub fn set_params(&mut self, params: BeaconParams) {
        self.params = params;
    }

    /// Ask for a broadcast on the next tick
    pub fn request_broadcast(&mut self) {
        self.request.request();
    }

    /// Check if the tone is sounding
    #[must_use]
    pub const fn is_broadcasting(&self) -> bool {
        self.broadcasting
    }

    /// Motors sounding the tone
    #[must_use]
    pub const fn motors_in_use(&self) -> MotorMask {
        self.motors_in_use
    }

    /// Advance by one tick
    pub fn tick<B: MotorBank>(&mut self, bank: &mut B) -> BeaconOutcome {
        let requested = self.request.take();
        let mut outcome = BeaconOutcome::Holding;

        if requested {
            if self.broadcasting {
                debug!("id beacon busy, request dropped");
            } else {
                self.broadcasting = true;
                self.motors_in_use = self.params.motors;
                bank.set_group_frequency(self.motors_in_use, self.params.frequency);
                info!(
                    "id beacon {} Hz on {:?}",
                    self.params.frequency,
                    self.motors_in_use
                );
                outcome = BeaconOutcome::Started;
            }
        }

        if !self.broadcasting {
            return BeaconOutcome::Idle;
        }

        self.ticks += 1;
        if self.ticks <= u16::from(self.params.duration_ticks) {
            return outcome;
        }

        bank.set_group_frequency(self.motors_in_use, 0);
        self.broadcasting = false;
        self.ticks = 0;
        self.motors_in_use = MotorMask::NONE;
        debug!("id beacon done");
        BeaconOutcome::Finished
    }
}

impl Default for IdBeacon {
    fn default() -> Self {
        Self::new(BeaconParams::default())
    }
}
