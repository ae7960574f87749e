//! Motor Acoustic Communication Firmware Library
//!
//! Turns the propulsion motors of a small quadcopter into a speaker. By
//! moving the motors' PWM carrier into the audible band the vehicle can
//! send short messages and identify itself acoustically, without a radio
//! or extra hardware.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    APPLICATION LAYER                         │
//! │  Motor Link (A/B groups)  │  Chirp ID  │  ID Beacon          │
//! ├─────────────────────────────────────────────────────────────┤
//! │                      MODEM LAYER                             │
//! │  Symbol Codec  │  Frequency Planner  │  Tone Engine          │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   HAL / DRIVER LAYER                         │
//! │  Tone actuators  │  PWM motor bank                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    RTOS / SCHEDULER                          │
//! │           embassy-rs (fixed-period ticker)                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything above the HAL is plain tick-driven logic: a scheduler calls
//! `tick`/`advance` once per period and nothing blocks or allocates, so
//! the same code runs on the target and in host tests.

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export dependencies needed by applications (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_executor;
#[cfg(feature = "embedded")]
pub use embassy_stm32;
#[cfg(feature = "embedded")]
pub use embassy_sync;
#[cfg(feature = "embedded")]
pub use embassy_time;

mod logging;

/// Hardware Abstraction Layer
///
/// PWM-driven motor bank for the STM32G474.
#[cfg(feature = "embedded")]
pub mod hal;

/// Tone outputs and the motor driver interface
pub mod actuator;

/// Symbol codec, frequency planner and tone engine
pub mod modem;

/// Chirp ID broadcaster and ID beacon
pub mod broadcast;

/// Two-group data link controller
pub mod link;

/// Error types
pub mod error;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
#[cfg(feature = "embedded")]
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::actuator::{MotorBank, ToneActuator};
    pub use crate::broadcast::beacon::{BeaconOutcome, IdBeacon};
    pub use crate::broadcast::chirp_id::ChirpBroadcaster;
    pub use crate::config::*;
    pub use crate::link::MotorLink;
    pub use crate::types::*;

    // Embassy
    pub use embassy_time::{Duration, Instant, Ticker, Timer};

    // Logging
    pub use defmt::{debug, error, info, trace, warn};
}
