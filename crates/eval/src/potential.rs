//! Potential-estimator seam.
//!
//! The estimator is an external collaborator that predicts, for a stable
//! board, a distribution over the chain length the board can eventually
//! produce. Model loading and lifetime live outside this crate; the engine
//! only consumes predictions through this trait and treats every failure
//! as "no prediction".

use cascade_core::{PairBoard, PairColor};
use thiserror::Error;

/// Chain-length classes 0 through 18+.
pub const CHAIN_CLASSES: usize = 19;

/// One-shot load status of the external model.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoadState {
    NotLoaded,
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("estimator is not ready")]
    NotReady,
    #[error("prediction failed: {0}")]
    Failed(String),
}

/// Probability distribution over chain-length classes.
#[derive(Clone, Debug)]
pub struct ChainDistribution {
    probs: [f32; CHAIN_CLASSES],
}

impl ChainDistribution {
    pub fn new(probs: [f32; CHAIN_CLASSES]) -> Self {
        Self { probs }
    }

    /// Probability-weighted mean chain length.
    pub fn expected(&self) -> f32 {
        self.probs
            .iter()
            .enumerate()
            .map(|(class, &p)| class as f32 * p)
            .sum()
    }

    /// Most probable class and its probability.
    pub fn argmax(&self) -> (usize, f32) {
        let mut best_class = 0;
        let mut best_prob = self.probs[0];
        for (class, &p) in self.probs.iter().enumerate().skip(1) {
            if p > best_prob {
                best_prob = p;
                best_class = class;
            }
        }
        (best_class, best_prob)
    }
}

/// Derived summary of one prediction.
#[derive(Clone, Copy, Debug)]
pub struct ChainPrediction {
    pub expected: f32,
    pub class: usize,
    pub confidence: f32,
}

/// Injected capability: load status plus prediction. Implementations wrap
/// whatever inference runtime actually hosts the model.
pub trait PotentialEstimator {
    fn load_state(&self) -> LoadState;
    fn predict(&self, board: &PairBoard) -> Result<ChainDistribution, PredictError>;
}

/// Stand-in when no model is wired up; never ready, never predicts.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullEstimator;

impl PotentialEstimator for NullEstimator {
    fn load_state(&self) -> LoadState {
        LoadState::NotLoaded
    }

    fn predict(&self, _board: &PairBoard) -> Result<ChainDistribution, PredictError> {
        Err(PredictError::NotReady)
    }
}

/// Query the estimator, degrading to None on anything but a clean answer.
/// A load in progress is unavailability, never something to block on.
pub fn predict_chain(
    estimator: &dyn PotentialEstimator,
    board: &PairBoard,
) -> Option<ChainPrediction> {
    if estimator.load_state() != LoadState::Ready {
        return None;
    }
    match estimator.predict(board) {
        Ok(distribution) => {
            let (class, confidence) = distribution.argmax();
            Some(ChainPrediction {
                expected: distribution.expected(),
                class,
                confidence,
            })
        }
        Err(err) => {
            log::warn!("potential estimator failed, using internal probe: {err}");
            None
        }
    }
}

/// Board encoding contract: one layer per color plus one empty layer,
/// layer-major, each layer row-major from the top row down. 5 x 13 x 6
/// values of 0.0 or 1.0.
pub fn encode_layers(board: &PairBoard) -> Vec<f32> {
    let mut layers =
        Vec::with_capacity((PairColor::ALL.len() + 1) * PairBoard::TOTAL_HEIGHT * PairBoard::WIDTH);

    for channel in 0..=PairColor::ALL.len() {
        let color = PairColor::from_index(channel);
        for y in (0..PairBoard::TOTAL_HEIGHT).rev() {
            for x in 0..PairBoard::WIDTH {
                let hit = match color {
                    Some(color) => board.get(x, y) == Some(color),
                    None => board.get(x, y).is_none(),
                };
                layers.push(if hit { 1.0 } else { 0.0 });
            }
        }
    }

    layers
}
