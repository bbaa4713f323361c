//! Cascade eval crate - board evaluation for both games.
//!
//! Weighted sums of structural features over resolved boards, plus the
//! potential-estimator seam for the pair game.

mod line;
mod pair;
mod potential;
mod weights;

pub use line::{evaluate_line, evaluate_line_board, LINE_LOSS_SCORE};
pub use pair::{
    chain_probe_deep, danger, evaluate_pair, evaluate_pair_base, evaluate_pair_fallback,
    evaluate_pair_light, pair_chain_efficiency, potential_term, PAIR_LIGHT_LOSS_SCORE,
    PAIR_LOSS_SCORE,
};
pub use potential::{
    encode_layers, predict_chain, ChainDistribution, ChainPrediction, LoadState, NullEstimator,
    PotentialEstimator, PredictError, CHAIN_CLASSES,
};
pub use weights::{LineWeights, PairWeights};
