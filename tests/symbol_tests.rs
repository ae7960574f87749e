//! Symbol Codec Tests
//!
//! Tests for byte-to-symbol encoding in both alphabets and both bit orders.
//! Run with: cargo test --no-default-features --features std --test symbol_tests

use motor_acoustic_comms::modem::symbol::{bits, encode, Symbol, LINK_BIT_ORDER};
use motor_acoustic_comms::types::{Alphabet, BitOrder};

use Symbol::{Down, High, Low, Up};

/// Rebuild a byte from binary symbols sent MSB first
fn decode_binary(symbols: &[Symbol]) -> u8 {
    symbols.iter().fold(0u8, |acc, s| (acc << 1) | u8::from(*s == High))
}

/// Rebuild a byte from chirp symbols sent MSB pair first
fn decode_chirp(symbols: &[Symbol]) -> u8 {
    symbols.iter().fold(0u8, |acc, s| {
        let pair = match s {
            Low => 0b00,
            Up => 0b01,
            Down => 0b10,
            High => 0b11,
        };
        (acc << 2) | pair
    })
}

// ============================================================================
// Binary Alphabet Tests
// ============================================================================

#[test]
fn binary_has_eight_flat_symbols() {
    for byte in 0..=u8::MAX {
        let plan = encode(byte, Alphabet::Binary);
        assert_eq!(plan.len(), 8);
        assert!(plan.iter().all(|s| matches!(s, Low | High)));
    }
}

#[test]
fn binary_round_trip() {
    for byte in 0..=u8::MAX {
        let plan = encode(byte, Alphabet::Binary);
        assert_eq!(decode_binary(&plan), byte, "byte {byte:#04x}");
    }
}

#[test]
fn binary_is_msb_first() {
    let plan = encode(0b1100_0110, Alphabet::Binary);
    assert_eq!(
        plan.as_slice(),
        &[High, High, Low, Low, Low, High, High, Low]
    );
    assert_eq!(LINK_BIT_ORDER, BitOrder::MsbFirst);
}

#[test]
fn binary_extremes() {
    assert!(encode(0x00, Alphabet::Binary).iter().all(|s| *s == Low));
    assert!(encode(0xFF, Alphabet::Binary).iter().all(|s| *s == High));
}

// ============================================================================
// Chirp Alphabet Tests
// ============================================================================

#[test]
fn chirp_has_four_symbols() {
    for byte in 0..=u8::MAX {
        let plan = encode(byte, Alphabet::Chirp);
        assert_eq!(plan.len(), 4);
    }
}

#[test]
fn chirp_round_trip() {
    for byte in 0..=u8::MAX {
        let plan = encode(byte, Alphabet::Chirp);
        assert_eq!(decode_chirp(&plan), byte, "byte {byte:#04x}");
    }
}

#[test]
fn chirp_table_order() {
    // 11 00 01 10
    let plan = encode(0b1100_0110, Alphabet::Chirp);
    assert_eq!(plan.as_slice(), &[High, Low, Up, Down]);
}

#[test]
fn chirp_uses_every_symbol() {
    // 00 01 10 11
    let plan = encode(0b0001_1011, Alphabet::Chirp);
    assert_eq!(plan.as_slice(), &[Low, Up, Down, High]);
}

// ============================================================================
// Bit Order Tests
// ============================================================================

#[test]
fn lsb_first_walk() {
    let walk = bits(0b0000_0101, BitOrder::LsbFirst);
    assert_eq!(walk, [true, false, true, false, false, false, false, false]);
}

#[test]
fn msb_first_walk() {
    let walk = bits(0b0000_0101, BitOrder::MsbFirst);
    assert_eq!(walk, [false, false, false, false, false, true, false, true]);
}

#[test]
fn lsb_round_trip() {
    for byte in 0..=u8::MAX {
        let walk = bits(byte, BitOrder::LsbFirst);
        let rebuilt = walk
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, b)| acc | (u8::from(*b) << i));
        assert_eq!(rebuilt, byte);
    }
}

#[test]
fn orders_disagree_on_asymmetric_bytes() {
    // Sending with one order and reading with the other is not compatible
    assert_ne!(bits(0x01, BitOrder::LsbFirst), bits(0x01, BitOrder::MsbFirst));
    // Palindromic bytes are the exception
    assert_eq!(bits(0x81, BitOrder::LsbFirst), bits(0x81, BitOrder::MsbFirst));
}
