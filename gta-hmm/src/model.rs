//! Profile HMM parameter storage.
//!
//! All scores are natural-log odds. Impossible transitions are stored as
//! `-inf`; the search never steps through them.

use gta_types::Score;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alphabet {
    Dna,
    Protein,
}

impl Alphabet {
    /// Number of emission symbols.
    #[inline]
    pub fn size(&self) -> usize {
        match self {
            Alphabet::Dna => 4,
            Alphabet::Protein => 20,
        }
    }
}

/// The seven plan7 transition kinds, in storage order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    MM,
    MI,
    MD,
    IM,
    II,
    DM,
    DD,
}

pub const NUM_TRANSITIONS: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HmmError {
    /// A scoring query addressed a state outside the model.
    ModelOutOfRange { state: usize, model_length: usize },
}

impl std::fmt::Display for HmmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HmmError::ModelOutOfRange {
                state,
                model_length,
            } => write!(f, "state {state} outside model of length {model_length}"),
        }
    }
}

impl std::error::Error for HmmError {}

/// A profile HMM over `model_length` match columns.
///
/// Match emissions belong to columns `1..=m`, insert emissions and
/// transitions to states `0..m`. Accessors index directly; the checked
/// entry points live in the scoring kernel.
pub struct ProfileHmm {
    alphabet: Alphabet,
    model_length: usize,
    /// `model_length * alphabet.size()`, column `s` at row `s - 1`.
    msc: Vec<Score>,
    /// `model_length * alphabet.size()`, insert state `s` at row `s`.
    isc: Vec<Score>,
    /// `model_length * NUM_TRANSITIONS`, transitions out of column `s` at row `s`.
    tsc: Vec<Score>,
    /// Per-column maximum match emission.
    max_match: Vec<Score>,
}

impl ProfileHmm {
    /// Build a model from per-state tables: `match_emissions[s-1]` for
    /// columns `1..=m`, `insert_emissions[s]` and `transitions[s]` for
    /// states `0..m`.
    pub fn new(
        alphabet: Alphabet,
        match_emissions: Vec<Vec<Score>>,
        insert_emissions: Vec<Vec<Score>>,
        transitions: Vec<[Score; NUM_TRANSITIONS]>,
    ) -> ProfileHmm {
        let m = match_emissions.len();
        let width = alphabet.size();
        assert_eq!(insert_emissions.len(), m);
        assert_eq!(transitions.len(), m);
        assert!(match_emissions.iter().all(|row| row.len() == width));
        assert!(insert_emissions.iter().all(|row| row.len() == width));

        let max_match = match_emissions
            .iter()
            .map(|row| row.iter().cloned().fold(Score::NEG_INFINITY, Score::max))
            .collect();
        ProfileHmm {
            alphabet,
            model_length: m,
            msc: match_emissions.into_iter().flatten().collect(),
            isc: insert_emissions.into_iter().flatten().collect(),
            tsc: transitions.into_iter().flatten().collect(),
            max_match,
        }
    }

    #[inline]
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    #[inline]
    pub fn model_length(&self) -> usize {
        self.model_length
    }

    /// Match emission of column `state` (`1..=model_length`) for `symbol`.
    #[inline]
    pub fn msc(&self, state: usize, symbol: u8) -> Score {
        debug_assert!((1..=self.model_length).contains(&state));
        self.msc[(state - 1) * self.alphabet.size() + symbol as usize]
    }

    /// Insert emission of insert state `state` (`0..model_length`) for `symbol`.
    #[inline]
    pub fn isc(&self, state: usize, symbol: u8) -> Score {
        debug_assert!(state < self.model_length);
        self.isc[state * self.alphabet.size() + symbol as usize]
    }

    /// Transition score out of column `state` (`0..model_length`).
    #[inline]
    pub fn tsc(&self, state: usize, kind: Transition) -> Score {
        debug_assert!(state < self.model_length);
        self.tsc[state * NUM_TRANSITIONS + kind as usize]
    }

    /// Largest match emission of column `state` (`1..=model_length`).
    #[inline]
    pub fn max_match_emission(&self, state: usize) -> Score {
        debug_assert!((1..=self.model_length).contains(&state));
        self.max_match[state - 1]
    }
}
