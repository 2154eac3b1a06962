//! Profile HMM storage and scoring.

mod model;
mod score;

pub use model::{Alphabet, HmmError, ProfileHmm, Transition, NUM_TRANSITIONS};
pub use score::{real_score_start, score_start};
