//! Beam search over pair placements.

use std::cmp::Ordering;

use rayon::prelude::*;

use cascade_core::{PairMove, PairState};
use cascade_engine::{enumerate_pair_moves, step_pair};
use cascade_eval::{
    evaluate_pair_fallback, evaluate_pair_light, potential_term, PairWeights, PotentialEstimator,
    PAIR_LOSS_SCORE,
};

pub const PAIR_BEAM_WIDTH: usize = 40;
pub const PAIR_SEARCH_DEPTH: usize = 3;
/// Final-ply survivors re-scored with the costly external estimator.
pub const PREDICTOR_TOP_K: usize = 10;

/// The chosen first action plus diagnostics.
#[derive(Clone, Copy, Debug)]
pub struct PairChoice {
    pub action: PairMove,
    pub score: f32,
    pub max_chain: u32,
}

pub struct PairSearch {
    pub depth: usize,
    pub beam_width: usize,
    pub weights: PairWeights,
}

impl Default for PairSearch {
    fn default() -> Self {
        Self {
            depth: PAIR_SEARCH_DEPTH,
            beam_width: PAIR_BEAM_WIDTH,
            weights: PairWeights::default(),
        }
    }
}

struct PairNode {
    state: PairState,
    actions: Vec<PairMove>,
    chain_score: f32,
    max_chain: u32,
    score: f32,
}

impl PairSearch {
    pub fn new(depth: usize, beam_width: usize) -> Self {
        Self {
            depth: depth.max(1),
            beam_width: beam_width.max(1),
            weights: PairWeights::default(),
        }
    }

    /// Pick the best next placement for the given state. Always answers:
    /// an already-lost state falls back to the first legal action, then to
    /// the fixed default.
    pub fn search(
        &self,
        state: &PairState,
        estimator: Option<&dyn PotentialEstimator>,
    ) -> PairChoice {
        let mut beam = vec![PairNode {
            state: state.clone(),
            actions: Vec::new(),
            chain_score: 0.0,
            max_chain: 0,
            score: 0.0,
        }];

        for ply in 0..self.depth {
            let is_last_ply = ply + 1 == self.depth;

            // beam members share nothing; expansion is free to run in
            // parallel and collects in node order
            let mut candidates: Vec<PairNode> = beam
                .par_iter()
                .flat_map_iter(|node| self.expand(node))
                .collect();

            if candidates.is_empty() {
                break;
            }

            candidates.par_iter_mut().for_each(|candidate| {
                candidate.score = if candidate.state.game_over {
                    candidate.chain_score + PAIR_LOSS_SCORE
                } else if is_last_ply {
                    candidate.chain_score + evaluate_pair_fallback(&candidate.state, &self.weights)
                } else {
                    candidate.chain_score + evaluate_pair_light(&candidate.state, &self.weights)
                };
            });

            // the estimator is assumed costly: only the provisional top K
            // stable survivors get re-scored with it
            if is_last_ply && estimator.is_some() {
                sort_by_score(&mut candidates);
                let top_k = PREDICTOR_TOP_K.min(self.beam_width).min(candidates.len());
                for candidate in candidates[..top_k].iter_mut() {
                    if candidate.state.game_over {
                        continue;
                    }
                    if let Some(term) =
                        potential_term(&candidate.state.board, estimator, &self.weights)
                    {
                        candidate.score += term;
                    }
                }
            }

            sort_by_score(&mut candidates);
            candidates.truncate(self.beam_width);
            beam = candidates;
        }

        if let Some(best) = beam.first() {
            if let Some(&action) = best.actions.first() {
                return PairChoice {
                    action,
                    score: best.score,
                    max_chain: best.max_chain,
                };
            }
        }

        let legal = enumerate_pair_moves(&state.board);
        PairChoice {
            action: legal.first().copied().unwrap_or(PairMove::DEFAULT),
            score: 0.0,
            max_chain: 0,
        }
    }

    fn expand(&self, node: &PairNode) -> Vec<PairNode> {
        if node.state.game_over || node.state.current.is_none() {
            // nothing left to place; the node rides along unchanged
            return vec![PairNode {
                state: node.state.clone(),
                actions: node.actions.clone(),
                chain_score: node.chain_score,
                max_chain: node.max_chain,
                score: 0.0,
            }];
        }

        enumerate_pair_moves(&node.state.board)
            .into_iter()
            .map(|mv| {
                let mut next = node.state.clone();
                let result = step_pair(&mut next, &mv);

                // only huge chains earn a direct reward here; smaller ones
                // are left to the board evaluation
                let mut chain_score = node.chain_score;
                if result.chains >= 10 {
                    chain_score += (result.chains as f32).powi(3) * self.weights.chain_power;
                }

                let mut actions = node.actions.clone();
                actions.push(mv);

                PairNode {
                    state: next,
                    actions,
                    chain_score,
                    max_chain: node.max_chain.max(result.chains),
                    score: 0.0,
                }
            })
            .collect()
    }
}

/// Stable sort descending: ties keep enumeration order.
fn sort_by_score(nodes: &mut [PairNode]) {
    nodes.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}
