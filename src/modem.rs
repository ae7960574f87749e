//! Acoustic Modem
//!
//! Byte-to-tone encoding and the tick-driven transmitter that plays the
//! tones on a motor.

pub mod engine;
pub mod planner;
pub mod scheme;
pub mod symbol;
