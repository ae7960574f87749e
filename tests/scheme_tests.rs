//! Acoustic Scheme Tests
//!
//! Tests for the transport-facing scheme interface over the tone engine.
//! Run with: cargo test --no-default-features --features std --test scheme_tests

use std::sync::atomic::{AtomicU32, Ordering};

use motor_acoustic_comms::actuator::PendingTone;
use motor_acoustic_comms::error::ModemError;
use motor_acoustic_comms::modem::engine::{ModulationConfig, TickOutcome};
use motor_acoustic_comms::modem::scheme::{AcousticScheme, SingleByteScheme};

fn scheme() -> SingleByteScheme<PendingTone> {
    SingleByteScheme::new(ModulationConfig::binary(9_750, 10_250, 4), PendingTone::new())
}

// ============================================================================
// Transmit Tests
// ============================================================================

#[test]
fn accepts_one_byte() {
    let mut s = scheme();
    assert_eq!(s.transmit(b"Hi"), Ok(1));
    assert_eq!(s.queue_len(), 1);
    assert!(s.engine().is_transmitting());
}

#[test]
fn empty_buffer_is_not_an_error() {
    let mut s = scheme();
    assert_eq!(s.transmit(&[]), Ok(0));
    assert_eq!(s.queue_len(), 0);
}

#[test]
fn busy_while_sending() {
    let mut s = scheme();
    s.transmit(&[0x41]).unwrap();
    assert_eq!(s.transmit(&[0x42]), Err(ModemError::Busy));
    assert_eq!(s.queue_len(), 1);
}

#[test]
fn queue_drains_on_completion() {
    let mut s = scheme();
    s.transmit(&[0x41]).unwrap();
    let outcomes: Vec<TickOutcome> = (0..32).map(|_| s.update()).collect();
    assert_eq!(outcomes.last(), Some(&TickOutcome::MessageComplete));
    assert_eq!(s.queue_len(), 0);
    assert_eq!(s.transmit(&[0x42]), Ok(1));
}

// ============================================================================
// Callback Tests
// ============================================================================

static SENT: AtomicU32 = AtomicU32::new(0);

fn count_sent() {
    SENT.fetch_add(1, Ordering::SeqCst);
}

#[test]
fn callback_fires_once_per_byte() {
    let mut s = scheme();
    s.set_byte_sent_callback(Some(count_sent));

    for byte in [0x10, 0x20, 0x30] {
        s.transmit(&[byte]).unwrap();
        for _ in 0..40 {
            s.update();
        }
    }
    assert_eq!(SENT.load(Ordering::SeqCst), 3);

    // Stopped bytes do not count as sent
    s.transmit(&[0x40]).unwrap();
    assert!(s.stop());
    for _ in 0..40 {
        s.update();
    }
    assert_eq!(SENT.load(Ordering::SeqCst), 3);

    s.set_byte_sent_callback(None);
    s.transmit(&[0x50]).unwrap();
    for _ in 0..40 {
        s.update();
    }
    assert_eq!(SENT.load(Ordering::SeqCst), 3);
}

// ============================================================================
// Lifecycle Tests
// ============================================================================

#[test]
fn stop_when_idle() {
    let mut s = scheme();
    assert!(!s.stop());
}

#[test]
fn configure_drops_byte_in_flight() {
    let mut s = scheme();
    s.transmit(&[0xFF]).unwrap();
    assert_eq!(s.configure(ModulationConfig::binary(1_000, 2_000, 1)), Ok(()));
    assert_eq!(s.queue_len(), 0);
    assert_eq!(s.engine().config().symbol_ticks, 1);

    s.transmit(&[0xFF]).unwrap();
    let done = (1..=20).find(|_| s.update() == TickOutcome::MessageComplete);
    assert_eq!(done, Some(8));
}

#[test]
fn destroy_consumes_scheme() {
    let mut s = scheme();
    s.transmit(&[0x01]).unwrap();
    s.destroy();
}
