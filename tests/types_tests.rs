//! Types Module Tests
//!
//! Tests for domain types (MotorId, MotorMask, Alphabet, BitOrder)
//! Run with: cargo test --no-default-features --features std --test types_tests

use motor_acoustic_comms::error::ModemError;
use motor_acoustic_comms::config::TONE_DUTY_PERCENT;
use motor_acoustic_comms::types::{Alphabet, BitOrder, DutyCycle, MotorId, MotorMask};

// =============================================================================
// MotorId Tests
// =============================================================================

#[test]
fn test_motor_index_round_trip() {
    for (i, motor) in MotorId::ALL.iter().enumerate() {
        assert_eq!(motor.index(), i);
        assert_eq!(MotorId::from_index(i), Some(*motor));
    }
    assert_eq!(MotorId::from_index(4), None);
}

#[test]
fn test_motor_bits() {
    assert_eq!(MotorId::M1.bit(), 0b0001);
    assert_eq!(MotorId::M4.bit(), 0b1000);
}

#[test]
fn test_motor_debug_uses_frame_numbering() {
    assert_eq!(format!("{:?}", MotorId::M1), "M1");
    assert_eq!(format!("{:?}", MotorId::M4), "M4");
}

// =============================================================================
// MotorMask Tests
// =============================================================================

#[test]
fn test_mask_drops_unknown_bits() {
    let mask = MotorMask::from_bits(0xF5);
    assert_eq!(mask.bits(), 0b0101);
    assert_eq!(MotorMask::ALL.bits(), 0b1111);
}

#[test]
fn test_mask_membership() {
    let mask = MotorMask::from_bits(0b1010);
    assert!(!mask.contains(MotorId::M1));
    assert!(mask.contains(MotorId::M2));
    assert!(!mask.contains(MotorId::M3));
    assert!(mask.contains(MotorId::M4));
    assert_eq!(mask.count(), 2);
}

#[test]
fn test_mask_iter_in_index_order() {
    let motors: Vec<MotorId> = MotorMask::from_bits(0b1101).iter().collect();
    assert_eq!(motors, vec![MotorId::M1, MotorId::M3, MotorId::M4]);
    assert_eq!(MotorMask::NONE.iter().count(), 0);
}

#[test]
fn test_mask_builder() {
    let mask = MotorMask::NONE.with(MotorId::M2).with(MotorId::M2);
    assert_eq!(mask, MotorMask::single(MotorId::M2));
    assert!(MotorMask::default().is_empty());
}

#[test]
fn test_mask_debug() {
    assert_eq!(format!("{:?}", MotorMask::from_bits(0b0011)), "MotorMask(0011)");
}

// =============================================================================
// Alphabet Tests
// =============================================================================

#[test]
fn test_alphabet_sizes() {
    assert_eq!(Alphabet::default(), Alphabet::Binary);
    for alphabet in [Alphabet::Binary, Alphabet::Chirp] {
        let bits = alphabet.bits_per_symbol() as usize * alphabet.symbols_per_byte();
        assert_eq!(bits, 8);
    }
}

// =============================================================================
// BitOrder Tests
// =============================================================================

#[test]
fn test_bit_order_indexing() {
    let byte = 0b1000_0010;
    assert!(BitOrder::MsbFirst.bit(byte, 0));
    assert!(!BitOrder::LsbFirst.bit(byte, 0));
    assert!(BitOrder::LsbFirst.bit(byte, 1));
    assert!(BitOrder::MsbFirst.bit(byte, 6));
}

// =============================================================================
// DutyCycle Tests
// =============================================================================

#[test]
fn test_duty_percent_conversion() {
    assert_eq!(DutyCycle::from_percent(0), DutyCycle::ZERO);
    assert_eq!(DutyCycle::from_percent(100).raw(), 65535);
    assert_eq!(DutyCycle::from_percent(250).raw(), 65535);
    assert_eq!(DutyCycle::from_percent(50).raw(), 32767);
    assert_eq!(DutyCycle::from_percent(100).as_percent(), 100);
}

#[test]
fn test_duty_follows_tone() {
    assert_eq!(DutyCycle::for_tone(0), DutyCycle::ZERO);
    assert_eq!(
        DutyCycle::for_tone(16_000),
        DutyCycle::from_percent(TONE_DUTY_PERCENT)
    );
    assert_ne!(DutyCycle::for_tone(1).raw(), 0);
}

// =============================================================================
// Error Tests
// =============================================================================

#[test]
fn test_busy_display() {
    assert_eq!(ModemError::Busy.to_string(), "transmitter busy");
}
