//! Chirp ID Broadcaster
//!
//! Every motor sweeps out its own ID byte as eight chirps: a set bit is
//! an up-chirp from the bottom to the top of the motor's sweep, a clear
//! bit a down-chirp. Bits go out least significant first with a short
//! silence between chirps.
//!
//! ```text
//! bit:      0 (1)        1 (0)        2 (1)
//!        ╱╱╱╱╱╱╱╱╱   ╲╲╲╲╲╲╲╲╲   ╱╱╱╱╱╱╱╱╱
//!       bottom→top   top→bottom   bottom→top
//!                  ^^^          ^^^
//!                 pause        pause
//! ```
//!
//! One request starts every idle motor in the same tick. Motors that are
//! still busy from an earlier broadcast ignore it. The request is consumed
//! on that tick even if every motor was busy; it is not kept for later.

use crate::actuator::MotorBank;
use crate::config::{
    ChirpParams, CHIRP_ID_PAUSE_TICKS, DEFAULT_CHIRP_ID_MESSAGE, DEFAULT_CHIRP_PARAMS, NUM_MOTORS,
    SYMBOLS_PER_BYTE,
};
use crate::logging::{debug, info};
use crate::types::{BitOrder, MotorId, MotorMask};

use super::RequestLatch;

/// Bit order of chirp-ID messages
pub const CHIRP_ID_BIT_ORDER: BitOrder = BitOrder::LsbFirst;

/// Per-motor broadcast progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChannelBroadcastState {
    message: u8,
    /// Bits whose chirp has been started
    bit_cursor: u8,
    in_pause: bool,
    pause_ticks: u8,
    bottom_freq: u32,
    top_freq: u32,
    start_freq: u32,
    end_freq: u32,
    step_freq: i32,
    current_freq: u32,
    /// Tone last written to the motor
    last_freq: u32,
    active: bool,
}

impl ChannelBroadcastState {
    /// Check if the motor is broadcasting
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Message snapshotted at broadcast start
    #[must_use]
    pub const fn message(&self) -> u8 {
        self.message
    }

    /// Number of chirps started so far
    #[must_use]
    pub const fn bit_cursor(&self) -> u8 {
        self.bit_cursor
    }

    /// Check if the motor sits in an inter-chirp pause
    #[must_use]
    pub const fn in_pause(&self) -> bool {
        self.in_pause
    }

    /// Tone the channel wants on the motor
    #[must_use]
    pub const fn current_frequency(&self) -> u32 {
        self.current_freq
    }

    /// Signed per-tick sweep step of the running chirp
    #[must_use]
    pub const fn step_frequency(&self) -> i32 {
        self.step_freq
    }

    fn begin(&mut self, message: u8, params: &ChirpParams, period_ms: u32) {
        let step = params.step_hz(period_ms);
        self.bottom_freq = params.bottom_freq();
        self.top_freq = params.top_freq();
        self.step_freq = i32::try_from(step).unwrap_or(i32::MAX);
        self.message = message;
        self.bit_cursor = 0;
        self.in_pause = false;
        self.active = true;
        self.setup_next_chirp();
    }

    fn setup_next_chirp(&mut self) {
        self.pause_ticks = 0;
        let step = self.step_freq.abs();
        if CHIRP_ID_BIT_ORDER.bit(self.message, self.bit_cursor) {
            self.start_freq = self.bottom_freq;
            self.end_freq = self.top_freq;
            self.step_freq = step;
        } else {
            self.start_freq = self.top_freq;
            self.end_freq = self.bottom_freq;
            self.step_freq = -step;
        }
        self.current_freq = self.start_freq;
        self.bit_cursor += 1;
    }

    /// Advance an active channel by one tick; `true` when the broadcast
    /// has just ended
    fn advance(&mut self) -> bool {
        if self.in_pause {
            self.pause_ticks = self.pause_ticks.saturating_add(1);
            if self.pause_ticks <= CHIRP_ID_PAUSE_TICKS {
                return false;
            }
            self.in_pause = false;
            self.setup_next_chirp();
        }

        let finished = self.step_freq == 0
            || (self.step_freq < 0 && self.current_freq < self.end_freq)
            || (self.step_freq > 0 && self.current_freq > self.end_freq);

        if !finished {
            self.current_freq = self.current_freq.saturating_add_signed(self.step_freq);
            return false;
        }

        self.current_freq = 0;
        if usize::from(self.bit_cursor) >= SYMBOLS_PER_BYTE {
            self.active = false;
            return true;
        }
        self.in_pause = true;
        false
    }
}

/// Motors touched by one broadcaster tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BroadcastTick {
    /// Motors that started a broadcast this tick
    pub started: MotorMask,
    /// Motors that sent their last chirp this tick
    pub finished: MotorMask,
    /// Motors broadcasting after this tick
    pub active: MotorMask,
}

/// Chirp-coded ID broadcaster over all motors
#[derive(Clone, Debug)]
pub struct ChirpBroadcaster {
    channels: [ChannelBroadcastState; NUM_MOTORS],
    params: [ChirpParams; NUM_MOTORS],
    messages: [u8; NUM_MOTORS],
    period_ms: u32,
    request: RequestLatch,
}

impl ChirpBroadcaster {
    /// Create a broadcaster with factory sweeps, ticked every `period_ms`
    #[must_use]
    pub fn new(period_ms: u32) -> Self {
        Self::with_params(DEFAULT_CHIRP_PARAMS, period_ms)
    }

    /// Create a broadcaster with explicit per-motor sweeps
    #[must_use]
    pub fn with_params(params: [ChirpParams; NUM_MOTORS], period_ms: u32) -> Self {
        Self {
            channels: [ChannelBroadcastState::default(); NUM_MOTORS],
            params,
            messages: [DEFAULT_CHIRP_ID_MESSAGE; NUM_MOTORS],
            period_ms,
            request: RequestLatch::new(),
        }
    }

    /// Sweep parameters of a motor
    #[must_use]
    pub const fn params(&self, motor: MotorId) -> &ChirpParams {
        &self.params[motor.index()]
    }

    /// Change a motor's sweep; takes effect at its next broadcast
    pub fn set_params(&mut self, motor: MotorId, params: ChirpParams) {
        self.params[motor.index()] = params;
    }

    /// Message a motor will send
    #[must_use]
    pub const fn message(&self, motor: MotorId) -> u8 {
        self.messages[motor.index()]
    }

    /// Change a motor's message; takes effect at its next broadcast
    pub fn set_message(&mut self, motor: MotorId, message: u8) {
        self.messages[motor.index()] = message;
    }

    /// Give every motor the same message
    pub fn set_shared_message(&mut self, message: u8) {
        self.messages = [message; NUM_MOTORS];
    }

    /// Ask for a broadcast on the next tick
    pub fn request_broadcast(&mut self) {
        self.request.request();
    }

    /// Check if a request awaits the next tick
    #[must_use]
    pub const fn is_request_pending(&self) -> bool {
        self.request.is_pending()
    }

    /// Broadcast progress of a motor
    #[must_use]
    pub const fn channel(&self, motor: MotorId) -> &ChannelBroadcastState {
        &self.channels[motor.index()]
    }

    /// Motors currently broadcasting
    #[must_use]
    pub fn active_motors(&self) -> MotorMask {
        MotorId::ALL
            .into_iter()
            .filter(|m| self.channels[m.index()].active)
            .fold(MotorMask::NONE, MotorMask::with)
    }

    /// Advance every motor by one tick
    ///
    /// A pending request is consumed here, once, after being offered to
    /// all motors. Tones reach the motors one tick after the channel
    /// computed them and only when they differ from the last one written.
    pub fn tick<B: MotorBank>(&mut self, bank: &mut B) -> BroadcastTick {
        let start = self.request.take();
        let mut report = BroadcastTick::default();

        for motor in MotorId::ALL {
            let i = motor.index();
            let channel = &mut self.channels[i];

            if start && !channel.active {
                channel.begin(self.messages[i], &self.params[i], self.period_ms);
                report.started = report.started.with(motor);
                info!(
                    "chirp id {:?} start msg={:#x} {}..{} Hz",
                    motor,
                    channel.message,
                    channel.bottom_freq,
                    channel.top_freq
                );
            }

            if channel.current_freq != channel.last_freq {
                bank.set_motor_frequency(motor, channel.current_freq);
                channel.last_freq = channel.current_freq;
            }

            if channel.active && channel.advance() {
                report.finished = report.finished.with(motor);
                debug!("chirp id {:?} done", motor);
            }

            if channel.active {
                report.active = report.active.with(motor);
            }
        }

        report
    }
}
