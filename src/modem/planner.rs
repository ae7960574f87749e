//! Chirp Frequency Planner
//!
//! Instantaneous tone for a symbol at a given tick within the symbol.
//! Flat symbols hold their tone; ramps move linearly by a fixed slope
//! per tick starting from their origin tone. Ramps are not clamped at the
//! far end, so the last ticks of a symbol may run past the opposite tone
//! by at most one slope when the slope was rounded up.

use super::symbol::Symbol;

/// Tone plan for one engine configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrequencyPlanner {
    low: u32,
    high: u32,
    slope: u32,
}

impl FrequencyPlanner {
    /// Create a planner over `[low, high]` ramping by `slope` Hz per tick
    #[must_use]
    pub const fn new(low: u32, high: u32, slope: u32) -> Self {
        Self { low, high, slope }
    }

    /// Slope that covers `bandwidth` within `symbol_ticks` ticks
    #[must_use]
    pub const fn slope_for(bandwidth: u32, symbol_ticks: u32) -> u32 {
        let ticks = if symbol_ticks == 0 { 1 } else { symbol_ticks };
        bandwidth.div_ceil(ticks)
    }

    /// Tone commanded for `symbol` on tick `tick` of the symbol (0-based)
    #[must_use]
    pub const fn frequency(&self, symbol: Symbol, tick: u32) -> u32 {
        match symbol {
            Symbol::Low => self.low,
            Symbol::High => self.high,
            Symbol::Up => self.low.saturating_add(self.slope.saturating_mul(tick)),
            Symbol::Down => self.high.saturating_sub(self.slope.saturating_mul(tick)),
        }
    }

    /// Ramp slope in Hz per tick
    #[must_use]
    pub const fn slope(&self) -> u32 {
        self.slope
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_symbols_hold() {
        let p = FrequencyPlanner::new(9_750, 10_250, 25);
        for tick in [0, 1, 7, 100] {
            assert_eq!(p.frequency(Symbol::Low, tick), 9_750);
            assert_eq!(p.frequency(Symbol::High, tick), 10_250);
        }
    }

    #[test]
    fn ramps_are_symmetric() {
        let p = FrequencyPlanner::new(12_750, 13_250, 25);
        for tick in 0..20 {
            let up = p.frequency(Symbol::Up, tick) - 12_750;
            let down = 13_250 - p.frequency(Symbol::Down, tick);
            assert_eq!(up, down);
        }
    }

    #[test]
    fn slope_rounds_up() {
        assert_eq!(FrequencyPlanner::slope_for(500, 20), 25);
        assert_eq!(FrequencyPlanner::slope_for(500, 3), 167);
        assert_eq!(FrequencyPlanner::slope_for(500, 0), 500);
    }
}
