//! Motor PWM Driver
//!
//! Brushed motors are driven from the four channels of one general
//! purpose timer. The PWM carrier normally sits above hearing; playing a
//! tone moves the carrier into the audible band and gives the sounding
//! motor a small duty so the winding actually vibrates.
//!
//! All four channels share the timer, so they share one carrier: the most
//! recently requested non-zero tone wins, and the carrier returns to its
//! inaudible default once every motor has been silenced.

use embassy_stm32::time::Hertz;
use embassy_stm32::timer::simple_pwm::SimplePwm;
use embassy_stm32::timer::{Channel, GeneralInstance4Channel};

use crate::actuator::MotorBank;
use crate::config::NUM_MOTORS;
use crate::types::{DutyCycle, MotorId};

/// Inaudible carrier used when no tone is requested
pub const SILENT_CARRIER_HZ: u32 = 32_000;

const fn channel_of(motor: MotorId) -> Channel {
    match motor {
        MotorId::M1 => Channel::Ch1,
        MotorId::M2 => Channel::Ch2,
        MotorId::M3 => Channel::Ch3,
        MotorId::M4 => Channel::Ch4,
    }
}

/// Four motors on one PWM timer
pub struct PwmMotorBank<'d, T: GeneralInstance4Channel> {
    pwm: SimplePwm<'d, T>,
    tones: [u32; NUM_MOTORS],
    carrier_hz: u32,
}

impl<'d, T: GeneralInstance4Channel> PwmMotorBank<'d, T> {
    /// Take over a timer, starting on the silent carrier with motors idle
    pub fn new(mut pwm: SimplePwm<'d, T>) -> Self {
        pwm.set_frequency(Hertz(SILENT_CARRIER_HZ));
        for motor in MotorId::ALL {
            let mut ch = pwm.channel(channel_of(motor));
            ch.set_duty_cycle_fraction(0, u16::MAX);
            ch.enable();
        }
        Self {
            pwm,
            tones: [0; NUM_MOTORS],
            carrier_hz: SILENT_CARRIER_HZ,
        }
    }

    /// Duty currently on a motor's pin: the tone duty while it sounds
    #[must_use]
    pub const fn output_duty(&self, motor: MotorId) -> DutyCycle {
        DutyCycle::for_tone(self.tones[motor.index()])
    }

    fn apply_duty(&mut self, motor: MotorId) {
        let duty = self.output_duty(motor);
        self.pwm
            .channel(channel_of(motor))
            .set_duty_cycle_fraction(duty.raw(), u16::MAX);
    }

    /// Current carrier frequency
    #[must_use]
    pub const fn carrier_hz(&self) -> u32 {
        self.carrier_hz
    }

    fn retune(&mut self, hz: u32) {
        if hz == self.carrier_hz {
            return;
        }
        self.pwm.set_frequency(Hertz(hz));
        self.carrier_hz = hz;
        // A new period rescales the compare registers; restore the duty
        for motor in MotorId::ALL {
            self.apply_duty(motor);
        }
        defmt::trace!("motor carrier {} Hz", hz);
    }
}

impl<T: GeneralInstance4Channel> MotorBank for PwmMotorBank<'_, T> {
    fn set_motor_frequency(&mut self, motor: MotorId, hz: u32) {
        self.tones[motor.index()] = hz;
        if hz != 0 {
            self.retune(hz);
        } else if self.tones.iter().all(|&t| t == 0) {
            self.retune(SILENT_CARRIER_HZ);
        }
        self.apply_duty(motor);
    }
}
