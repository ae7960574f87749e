//! Configuration and Constants Tests
//!
//! Tests to verify configuration values are valid and consistent.
//! Run with: cargo test --no-default-features --features std --test config_tests

use motor_acoustic_comms::config::*;
use motor_acoustic_comms::types::{Alphabet, MotorId, MotorMask};

// =============================================================================
// Task Period Tests
// =============================================================================

#[test]
fn sound_task_is_multiple_of_link_task() {
    assert_eq!(SOUND_TASK_PERIOD_MS % TRANSMISSION_TASK_PERIOD_MS, 0);
}

#[test]
fn tick_conversion_rounds_up() {
    assert_eq!(ticks_for_ms(100, 25), 4);
    assert_eq!(ticks_for_ms(101, 25), 5);
    assert_eq!(ticks_for_ms(1, 25), 1);
    assert_eq!(ticks_for_ms(0, 25), 0);
}

#[test]
fn tick_conversion_zero_period() {
    assert_eq!(ticks_for_ms(100, 0), 0);
}

#[test]
fn default_gap_is_sixteen_link_ticks() {
    assert_eq!(ticks_for_ms(DEFAULT_MESSAGE_GAP_MS, TRANSMISSION_TASK_PERIOD_MS), 16);
}

// =============================================================================
// Link Parameter Tests
// =============================================================================

#[test]
fn default_params_are_binary() {
    let params = ModulationParams::default();
    assert_eq!(params.alphabet, Alphabet::Binary);
    assert_eq!(params.center_freq, DEFAULT_CENTER_FREQ_HZ);
    assert_eq!(params.low_freq(), 9_750);
    assert_eq!(params.high_freq(), 10_250);
}

#[test]
fn tones_stay_audible() {
    let params = ModulationParams::default();
    assert!(params.low_freq() > 20);
    assert!(params.high_freq() < 20_000);
}

#[test]
fn low_tone_saturates() {
    let params = ModulationParams::binary(100, 1_000, 100);
    assert_eq!(params.low_freq(), 0);
    assert_eq!(params.high_freq(), 600);
}

#[test]
fn chirp_params_keep_pause() {
    let params = ModulationParams::chirp(12_000, 800, 200, DEFAULT_SYMBOL_PAUSE_MS);
    assert_eq!(params.alphabet, Alphabet::Chirp);
    assert_eq!(params.pause_ms, 50);
    assert_eq!(ModulationParams::binary(12_000, 800, 200).pause_ms, 0);
}

#[test]
fn link_text_fills_both_groups() {
    assert!(LINK_TEXT.len() >= 2);
    assert_eq!(LINK_TEXT[0], b'H');
    assert_eq!(LINK_TEXT.last(), Some(&b'\n'));
}

// =============================================================================
// Motor Group Tests
// =============================================================================

#[test]
fn link_groups_are_disjoint() {
    assert_eq!(LINK_GROUP_A.bits() & LINK_GROUP_B.bits(), 0);
    assert_eq!(LINK_GROUP_A.count() + LINK_GROUP_B.count(), NUM_MOTORS as u32);
}

#[test]
fn link_group_membership() {
    assert!(LINK_GROUP_A.contains(MotorId::M1));
    assert!(LINK_GROUP_A.contains(MotorId::M3));
    assert!(!LINK_GROUP_A.contains(MotorId::M4));
    assert_eq!(LINK_GROUP_B, MotorMask::single(MotorId::M4));
}

// =============================================================================
// Chirp ID Parameter Tests
// =============================================================================

#[test]
fn default_chirp_sweep() {
    let p = DEFAULT_CHIRP_PARAMS[0];
    assert_eq!(p.sweep_hz(), 1_000);
    assert_eq!(p.step_hz(SOUND_TASK_PERIOD_MS), 100);
    assert_eq!(p.bottom_freq(), 12_500);
    assert_eq!(p.top_freq(), 13_500);
}

#[test]
fn neighbouring_motors_use_distinct_centers() {
    for i in 0..NUM_MOTORS {
        let next = (i + 1) % NUM_MOTORS;
        assert_ne!(
            DEFAULT_CHIRP_PARAMS[i].center_freq,
            DEFAULT_CHIRP_PARAMS[next].center_freq
        );
    }
}

#[test]
fn sweeps_do_not_overlap() {
    let a = DEFAULT_CHIRP_PARAMS[0];
    let b = DEFAULT_CHIRP_PARAMS[1];
    assert!(a.top_freq() < b.bottom_freq());
}

#[test]
fn narrow_sweep_bottom_saturates() {
    let p = ChirpParams::new(100, 1_000, 1_000);
    assert_eq!(p.bottom_freq(), 0);
    assert_eq!(p.top_freq(), 600);
}

#[test]
fn long_period_step_saturates() {
    let p = ChirpParams::new(13_000, 500, 2_000);
    assert_eq!(p.step_hz(u32::MAX), u32::MAX / 1000);

    let widest = ChirpParams::new(u16::MAX, u16::MAX, u16::MAX);
    assert_eq!(widest.sweep_hz(), u32::from(u16::MAX) * u32::from(u16::MAX) / 1000);
    assert!(widest.top_freq() > widest.bottom_freq());
}

#[test]
fn chirp_id_fits_a_byte() {
    assert_eq!(SYMBOLS_PER_BYTE, 8);
    assert!(CHIRP_ID_PAUSE_TICKS > 0);
}

// =============================================================================
// Beacon Parameter Tests
// =============================================================================

#[test]
fn default_beacon() {
    let b = BeaconParams::default();
    assert_eq!(b.frequency, DEFAULT_ID_FREQUENCY_HZ);
    assert_eq!(b.motors, MotorMask::single(MotorId::M1));
    assert_eq!(b.duration_ticks, DEFAULT_ID_BROADCAST_TICKS);
    assert!(!b.motors.is_empty());
}
