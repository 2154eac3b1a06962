//! Scoring kernel: seed-word scores against a run of match columns.

use crate::model::{HmmError, ProfileHmm, Transition};
use gta_types::Score;

fn check_range(hmm: &ProfileHmm, word: &[u8], s0: usize) -> Result<(), HmmError> {
    if s0 + word.len() > hmm.model_length() {
        return Err(HmmError::ModelOutOfRange {
            state: s0 + word.len(),
            model_length: hmm.model_length(),
        });
    }
    Ok(())
}

/// Normalized score of `word` matched against columns `s0+1..=s0+|word|`:
/// the raw match path score minus each column's maximum match emission.
pub fn score_start(hmm: &ProfileHmm, word: &[u8], s0: usize) -> Result<Score, HmmError> {
    check_range(hmm, word, s0)?;
    Ok(word
        .iter()
        .enumerate()
        .map(|(i, &sym)| {
            let s = s0 + i + 1;
            hmm.msc(s, sym) + hmm.tsc(s - 1, Transition::MM) - hmm.max_match_emission(s)
        })
        .sum())
}

/// Unnormalized match path score of `word` against columns `s0+1..=s0+|word|`.
pub fn real_score_start(hmm: &ProfileHmm, word: &[u8], s0: usize) -> Result<Score, HmmError> {
    check_range(hmm, word, s0)?;
    Ok(word
        .iter()
        .enumerate()
        .map(|(i, &sym)| {
            let s = s0 + i + 1;
            hmm.msc(s, sym) + hmm.tsc(s - 1, Transition::MM)
        })
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Alphabet;

    fn toy() -> ProfileHmm {
        // Three DNA columns preferring a, c, g with transitions of -0.1.
        let mut match_em = Vec::new();
        for best in 0..3usize {
            let mut row = vec![-1.0; 4];
            row[best] = 2.0;
            match_em.push(row);
        }
        ProfileHmm::new(
            Alphabet::Dna,
            match_em,
            vec![vec![0.0; 4]; 3],
            vec![[-0.1; 7]; 3],
        )
    }

    #[test]
    fn real_score_sums_emissions_and_transitions() {
        let hmm = toy();
        // 'a' then 'c' from state 0: two matches, two MM transitions.
        let word = [0u8, 1u8];
        assert!((real_score_start(&hmm, &word, 0).unwrap() - (2.0 - 0.1 + 2.0 - 0.1)).abs() < 1e-12);
        // Mismatching word.
        let word = [3u8, 3u8];
        assert!((real_score_start(&hmm, &word, 0).unwrap() - (-1.0 - 0.1 - 1.0 - 0.1)).abs() < 1e-12);
    }

    #[test]
    fn normalized_score_subtracts_column_maxima() {
        let hmm = toy();
        let word = [0u8, 1u8];
        let real = real_score_start(&hmm, &word, 0).unwrap();
        let norm = score_start(&hmm, &word, 0).unwrap();
        assert!((norm - (real - 2.0 - 2.0)).abs() < 1e-12);
        // A perfectly matching word is only penalized by transitions.
        assert!((norm - (-0.2)).abs() < 1e-12);
    }

    #[test]
    fn overrunning_the_model_is_an_error() {
        let hmm = toy();
        assert_eq!(
            score_start(&hmm, &[0, 0, 0], 1),
            Err(HmmError::ModelOutOfRange {
                state: 4,
                model_length: 3
            })
        );
        assert!(score_start(&hmm, &[0, 0, 0], 0).is_ok());
    }
}
