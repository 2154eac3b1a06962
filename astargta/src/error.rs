//! Typed engine errors.

use gta_hmm::HmmError;

/// Failures that abort the current seed search. Partial goals are not
/// errors; they come back with `partial = true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Input contained a byte outside the model's alphabet.
    InvalidAlphabet { byte: u8 },

    /// The seed k-mer is not indexed in the graph.
    SeedNotInGraph,

    /// The starting node is not terminal and has no legal successors.
    NoSuccessors,

    /// A scoring query addressed a state outside the model.
    ModelOutOfRange { state: usize, model_length: usize },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::InvalidAlphabet { byte } => {
                write!(f, "byte {:?} outside the model alphabet", *byte as char)
            }
            SearchError::SeedNotInGraph => write!(f, "seed k-mer not indexed in the graph"),
            SearchError::NoSuccessors => {
                write!(f, "starting node has no legal successors")
            }
            SearchError::ModelOutOfRange {
                state,
                model_length,
            } => write!(f, "state {state} outside model of length {model_length}"),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<HmmError> for SearchError {
    fn from(e: HmmError) -> SearchError {
        match e {
            HmmError::ModelOutOfRange {
                state,
                model_length,
            } => SearchError::ModelOutOfRange {
                state,
                model_length,
            },
        }
    }
}
