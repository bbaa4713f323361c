//! Cascade search crate - beam search drivers for both games.

mod line;
mod pair;

pub use line::{LineChoice, LineSearch, LINE_BEAM_WIDTH, LINE_SEARCH_DEPTH};
pub use pair::{PairChoice, PairSearch, PAIR_BEAM_WIDTH, PAIR_SEARCH_DEPTH, PREDICTOR_TOP_K};
