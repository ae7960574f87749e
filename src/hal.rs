//! Hardware Abstraction Layer
//!
//! Provides safe abstractions over STM32G474 peripherals.
//! This module isolates hardware-specific code from the link logic.

pub mod motors;
