//! Tone Actuators
//!
//! The only thing the link can ask of a motor is "spin your PWM at this
//! frequency" or "go silent" (frequency `0`). A [`ToneActuator`] is one
//! such output as seen by a single state machine; a [`MotorBank`] is the
//! motor driver behind all four motors.

use crate::types::{MotorId, MotorMask};

/// Single tone output
pub trait ToneActuator {
    /// Command a tone in Hz, `0` silences the output
    fn set_frequency(&mut self, hz: u32);
}

impl<F: FnMut(u32)> ToneActuator for F {
    fn set_frequency(&mut self, hz: u32) {
        self(hz);
    }
}

/// Motor driver able to set the tone of each motor
pub trait MotorBank {
    /// Command a tone on one motor, `0` silences it
    fn set_motor_frequency(&mut self, motor: MotorId, hz: u32);

    /// Command the same tone on every motor of a mask
    fn set_group_frequency(&mut self, motors: MotorMask, hz: u32) {
        for motor in motors.iter() {
            self.set_motor_frequency(motor, hz);
        }
    }
}

impl<B: MotorBank + ?Sized> MotorBank for &mut B {
    fn set_motor_frequency(&mut self, motor: MotorId, hz: u32) {
        (**self).set_motor_frequency(motor, hz);
    }
}

/// Actuator that holds the last commanded tone until it is collected
///
/// Lets a state machine run without owning the motor bank: the owner of
/// the bank drains the pending tone after each tick and forwards it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PendingTone {
    /// Tone awaiting delivery
    pending: Option<u32>,
    /// Last tone handed out by [`PendingTone::take`]
    delivered: u32,
}

impl PendingTone {
    /// Create an idle actuator
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: None,
            delivered: 0,
        }
    }

    /// Collect the pending tone, if any
    pub fn take(&mut self) -> Option<u32> {
        let hz = self.pending.take()?;
        self.delivered = hz;
        Some(hz)
    }

    /// Check whether a tone is waiting
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Last tone that was collected
    #[must_use]
    pub const fn delivered(&self) -> u32 {
        self.delivered
    }
}

impl ToneActuator for PendingTone {
    fn set_frequency(&mut self, hz: u32) {
        // A silence followed by a retone within one tick collapses to the
        // final value; only what the motors would hear matters.
        self.pending = Some(hz);
    }
}

/// Several motors driven as one tone output
///
/// Remembers the tone last written so repeated commands for the same
/// frequency never reach the motor driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MotorGroup {
    motors: MotorMask,
    last_hz: u32,
}

impl MotorGroup {
    /// Create a group over a motor mask
    #[must_use]
    pub const fn new(motors: MotorMask) -> Self {
        Self { motors, last_hz: 0 }
    }

    /// Motors in this group
    #[must_use]
    pub const fn motors(&self) -> MotorMask {
        self.motors
    }

    /// Last tone written to the motors
    #[must_use]
    pub const fn last_frequency(&self) -> u32 {
        self.last_hz
    }

    /// Write a tone to every motor of the group, skipping repeats
    ///
    /// Returns `true` if the motor driver was touched.
    pub fn apply<B: MotorBank>(&mut self, bank: &mut B, hz: u32) -> bool {
        if hz == self.last_hz {
            return false;
        }
        bank.set_group_frequency(self.motors, hz);
        self.last_hz = hz;
        true
    }
}
