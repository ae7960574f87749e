//! Acoustic Transport Scheme
//!
//! Shape of a pluggable byte-stream modulation scheme: a transport layer
//! feeds it bytes, ticks it periodically and learns through a callback
//! when each byte has left the motors.
//!
//! [`SingleByteScheme`] is the scheme backed directly by a
//! [`ToneEngine`]. It holds at most one byte; anything longer has to be
//! paced by the caller using the byte-sent callback.

use crate::actuator::ToneActuator;
use crate::error::{ModemError, ModemResult};
use crate::logging::debug;

use super::engine::{ModulationConfig, TickOutcome, ToneEngine};

/// Callback fired once a byte has been fully sent
pub type ByteSentCallback = fn();

/// Pluggable acoustic modulation scheme
pub trait AcousticScheme {
    /// Scheme-specific configuration
    type Config;

    /// Apply a new configuration, abandoning anything in flight
    ///
    /// # Errors
    ///
    /// Scheme-specific; the engine-backed scheme never fails.
    fn configure(&mut self, config: Self::Config) -> ModemResult<()>;

    /// Bytes not yet fully sent, including the one on air
    fn queue_len(&self) -> usize;

    /// Offer bytes for transmission, returning how many were accepted
    ///
    /// # Errors
    ///
    /// [`ModemError::Busy`] if no byte can be accepted right now.
    fn transmit(&mut self, buf: &[u8]) -> ModemResult<usize>;

    /// Install or clear the byte-sent callback
    fn set_byte_sent_callback(&mut self, callback: Option<ByteSentCallback>);

    /// Periodic update, called once per scheduler tick
    fn update(&mut self) -> TickOutcome;

    /// Abort transmission and drop queued bytes; `true` if anything was
    /// interrupted
    fn stop(&mut self) -> bool;

    /// Tear the scheme down
    fn destroy(self)
    where
        Self: Sized;
}

/// Scheme with a single byte in flight
pub struct SingleByteScheme<A: ToneActuator> {
    engine: ToneEngine<A>,
    on_byte_sent: Option<ByteSentCallback>,
}

impl<A: ToneActuator> SingleByteScheme<A> {
    /// Create a scheme over a fresh engine
    #[must_use]
    pub fn new(config: ModulationConfig, actuator: A) -> Self {
        Self {
            engine: ToneEngine::new(config, actuator),
            on_byte_sent: None,
        }
    }

    /// Borrow the engine
    #[must_use]
    pub const fn engine(&self) -> &ToneEngine<A> {
        &self.engine
    }
}

impl<A: ToneActuator> AcousticScheme for SingleByteScheme<A> {
    type Config = ModulationConfig;

    fn configure(&mut self, config: ModulationConfig) -> ModemResult<()> {
        if self.engine.reconfigure(config) {
            debug!("scheme reconfigured mid-byte, byte dropped");
        }
        Ok(())
    }

    fn queue_len(&self) -> usize {
        usize::from(self.engine.is_transmitting())
    }

    fn transmit(&mut self, buf: &[u8]) -> ModemResult<usize> {
        let Some(&byte) = buf.first() else {
            return Ok(0);
        };
        if self.engine.is_transmitting() {
            return Err(ModemError::Busy);
        }
        self.engine.prepare_and_transmit(byte)?;
        Ok(1)
    }

    fn set_byte_sent_callback(&mut self, callback: Option<ByteSentCallback>) {
        self.on_byte_sent = callback;
    }

    fn update(&mut self) -> TickOutcome {
        let outcome = self.engine.advance();
        if outcome == TickOutcome::MessageComplete {
            if let Some(callback) = self.on_byte_sent {
                callback();
            }
        }
        outcome
    }

    fn stop(&mut self) -> bool {
        self.engine.force_stop()
    }

    fn destroy(self) {
        let _ = self.engine.destroy();
    }
}
