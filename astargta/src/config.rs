//! Constants and score tables used throughout the engine.

use gta_types::Score;
use lazy_static::lazy_static;

/// Default threshold on consecutive non-positive columns before a branch is
/// dropped. `0` disables pruning.
pub const DEFAULT_HEURISTIC_PRUNING: u32 = 20;

/// Alignments at least this long have no precomputed exit penalty; indexing
/// past the table is a programming error.
pub const MAX_EXIT_LENGTH: usize = 3000;

lazy_static! {
    /// `exit_probabilities[L] = 2 ln(2 / (L + 2))`: the termination penalty
    /// for an alignment of length `L`.
    pub static ref EXIT_PROBABILITIES: Vec<Score> = (0..MAX_EXIT_LENGTH)
        .map(|l| 2.0 * (2.0 / (l as Score + 2.0)).ln())
        .collect();
}

/// Exit score used to pick the reported goal: bit-scaled real score plus a
/// penalty that discounts short alignments.
#[inline]
pub fn exit_score(real_score: Score, length: usize) -> Score {
    (real_score + EXIT_PROBABILITIES[length]) / std::f64::consts::LN_2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_penalty_table() {
        assert_eq!(EXIT_PROBABILITIES.len(), MAX_EXIT_LENGTH);
        assert_eq!(EXIT_PROBABILITIES[0], 0.0);
        assert!((EXIT_PROBABILITIES[1] - 2.0 * (2.0f64 / 3.0).ln()).abs() < 1e-12);
        // Strictly decreasing: longer alignments are discounted less than
        // shorter ones are rewarded.
        assert!(EXIT_PROBABILITIES.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn exit_score_is_bit_scaled() {
        assert!((exit_score(1.0, 0) - 1.0 / std::f64::consts::LN_2).abs() < 1e-12);
        assert!(exit_score(1.0, 10) < exit_score(1.0, 0));
    }
}
