//! Pair-game board evaluation.
//!
//! A base weighted sum over structure and connectivity, a light variant for
//! inner search plies, and a chain-potential term that prefers the external
//! estimator on stable boards and probes single-cell drops otherwise.

use crate::potential::{predict_chain, PotentialEstimator};
use crate::weights::PairWeights;
use cascade_core::{PairBoard, PairColor, PairState};
use cascade_engine::{is_stable, resolve};

pub const PAIR_LOSS_SCORE: f32 = -1_000_000.0;
pub const PAIR_LIGHT_LOSS_SCORE: f32 = -100_000.0;

fn column_heights(board: &PairBoard) -> [usize; PairBoard::WIDTH] {
    let mut heights = [0usize; PairBoard::WIDTH];
    for (x, h) in heights.iter_mut().enumerate() {
        *h = board.column_height(x);
    }
    heights
}

/// Chain-seed patterns: same color separated vertically, trigger-ready
/// 3-groups, and vertically stacked same-color pairs.
fn chain_patterns(board: &PairBoard, weights: &PairWeights) -> f32 {
    let mut score = 0.0f32;

    // same color in one column with 1-3 other cells between: clearing the
    // cells between drops the upper onto the lower
    for x in 0..PairBoard::WIDTH {
        let mut column: Vec<(usize, PairColor)> = Vec::new();
        for y in 0..PairBoard::TOTAL_HEIGHT {
            if let Some(color) = board.get(x, y) {
                column.push((y, color));
            }
        }
        for i in 0..column.len() {
            for j in i + 1..column.len() {
                if column[i].1 == column[j].1 {
                    let gap = column[j].0 - column[i].0 - 1;
                    if (1..=3).contains(&gap) {
                        score += weights.same_color_above;
                    }
                }
            }
        }
    }

    // a 3-group with different-colored cells above is a ready trigger:
    // clearing above drops material onto it
    for group in board.groups() {
        if group.len() == 3 {
            for &(x, y) in &group.cells {
                for above in (y as usize + 1)..PairBoard::TOTAL_HEIGHT {
                    if let Some(color) = board.get(x as usize, above) {
                        if color != group.color {
                            score += weights.trigger_ready;
                            break;
                        }
                    }
                }
            }
        }
    }

    for x in 0..PairBoard::WIDTH {
        for y in 0..PairBoard::TOTAL_HEIGHT - 1 {
            match (board.get(x, y), board.get(x, y + 1)) {
                (Some(a), Some(b)) if a == b => score += weights.vertical_pair,
                _ => {}
            }
        }
    }

    score
}

/// Base structural evaluation: heights, valleys, connectivity, shape.
pub fn evaluate_pair_base(state: &PairState, weights: &PairWeights) -> f32 {
    if state.game_over {
        return PAIR_LOSS_SCORE;
    }

    let board = &state.board;
    let mut score = 0.0f32;

    let heights = column_heights(board);
    let max_height = heights.iter().copied().max().unwrap_or(0);
    let avg_height = heights.iter().sum::<usize>() as f32 / PairBoard::WIDTH as f32;

    score += weights.height * avg_height;
    if max_height > 8 {
        score += weights.max_height * (max_height - 8) as f32 * 2.0;
    }

    let entry_height = heights[PairBoard::SPAWN_COLUMN];
    if entry_height > 5 {
        score += weights.entry_column * (entry_height - 5) as f32;
    }

    for x in 1..PairBoard::WIDTH - 1 {
        let depth = heights[x - 1].min(heights[x + 1]) as i32 - heights[x] as i32;
        if depth >= 2 {
            score += weights.valley * depth as f32;
        }
    }

    let mut isolated = 0u32;
    let mut pairs = 0u32;
    let mut triples = 0u32;
    for group in board.groups() {
        match group.len() {
            1 => isolated += 1,
            2 => pairs += 1,
            3 => triples += 1,
            _ => {}
        }
    }
    score += weights.isolated * isolated as f32;
    score += weights.connectivity_2 * pairs as f32;
    score += weights.connectivity_3 * triples as f32;

    score += chain_patterns(board, weights);

    for x in 0..PairBoard::WIDTH - 1 {
        if heights[x].abs_diff(heights[x + 1]) <= 1 {
            score += weights.flatness;
        }
    }

    // monotone staircase toward either edge
    let left_stair = heights.windows(2).all(|w| w[0] >= w[1]);
    let right_stair = heights.windows(2).all(|w| w[0] <= w[1]);
    if left_stair || right_stair {
        score += weights.stair * 3.0;
    }

    if heights[0] >= heights[2] || heights[5] >= heights[3] {
        score += weights.edge_stack * 2.0;
    }

    score
}

/// Best chain reachable by dropping one cell of any color into any column,
/// scaled super-linearly and doubled again for chains of 4 and 5.
pub fn chain_probe_deep(board: &PairBoard, weights: &PairWeights) -> f32 {
    let mut best = 0.0f32;

    for x in 0..PairBoard::WIDTH {
        let height = board.column_height(x);
        if height >= PairBoard::TOTAL_HEIGHT - 1 {
            continue;
        }
        for color in PairColor::ALL {
            let mut probe = board.clone();
            probe.set(x, height, Some(color));
            let result = resolve(&mut probe);
            if result.chains >= 1 {
                let mut potential = (result.chains as f32).powf(2.5) * weights.chain_probe;
                if result.chains >= 4 {
                    potential *= 2.0;
                }
                if result.chains >= 5 {
                    potential *= 2.0;
                }
                if potential > best {
                    best = potential;
                }
            }
        }
    }

    best
}

/// Full evaluation without the external estimator: base terms plus the
/// internal chain probe.
pub fn evaluate_pair_fallback(state: &PairState, weights: &PairWeights) -> f32 {
    if state.game_over {
        return PAIR_LOSS_SCORE;
    }
    evaluate_pair_base(state, weights) + chain_probe_deep(&state.board, weights)
}

/// The estimator term for a stable board: expected chain squared, scaled.
/// None when the estimator is missing, not ready, failing, or the board is
/// unstable; callers fall back to the internal probe.
pub fn potential_term(
    board: &PairBoard,
    estimator: Option<&dyn PotentialEstimator>,
    weights: &PairWeights,
) -> Option<f32> {
    let estimator = estimator?;
    if !is_stable(board) {
        return None;
    }
    let prediction = predict_chain(estimator, board)?;
    Some(prediction.expected.powi(2) * weights.potential / 100.0)
}

/// Full evaluation: base terms plus the estimator term when available,
/// the internal probe otherwise.
pub fn evaluate_pair(
    state: &PairState,
    estimator: Option<&dyn PotentialEstimator>,
    weights: &PairWeights,
) -> f32 {
    if state.game_over {
        return PAIR_LOSS_SCORE;
    }
    match potential_term(&state.board, estimator, weights) {
        Some(term) => evaluate_pair_base(state, weights) + term,
        None => evaluate_pair_fallback(state, weights),
    }
}

/// Cheap evaluation for inner search plies: heights, entry column, triples,
/// and a one-drop probe that stops at the first chaining color per column.
pub fn evaluate_pair_light(state: &PairState, weights: &PairWeights) -> f32 {
    if state.game_over {
        return PAIR_LIGHT_LOSS_SCORE;
    }

    let board = &state.board;
    let mut score = 0.0f32;

    let heights = column_heights(board);
    let avg_height = heights.iter().sum::<usize>() as f32 / PairBoard::WIDTH as f32;
    score += weights.height * avg_height;

    let entry_height = heights[PairBoard::SPAWN_COLUMN];
    if entry_height > 5 {
        score += weights.entry_column * (entry_height - 5) as f32;
    }

    for group in board.groups() {
        if group.len() == 3 {
            score += weights.connectivity_3;
        }
    }

    for x in 0..PairBoard::WIDTH {
        let height = board.column_height(x);
        if height >= PairBoard::TOTAL_HEIGHT - 1 {
            continue;
        }
        for color in PairColor::ALL {
            let mut probe = board.clone();
            probe.set(x, height, Some(color));
            let result = resolve(&mut probe);
            if result.chains >= 2 {
                score += weights.chain_probe * result.chains as f32;
                break;
            }
        }
    }

    score
}

/// Loss proximity in [0, 1], from overall height and the entry column.
pub fn danger(board: &PairBoard) -> f32 {
    let heights = column_heights(board);
    let max_height = heights.iter().copied().max().unwrap_or(0);
    let entry_height = heights[PairBoard::SPAWN_COLUMN];

    let mut danger = 0.0f32;
    if max_height >= 8 {
        danger += (max_height - 7) as f32 * 0.15;
    }
    if entry_height >= 6 {
        danger += (entry_height - 5) as f32 * 0.2;
    }
    danger.min(1.0)
}

/// Predicted chain length per four cells on the board. Higher means the
/// same material promises a bigger chain. Zero without a usable prediction.
pub fn pair_chain_efficiency(board: &PairBoard, estimator: Option<&dyn PotentialEstimator>) -> f32 {
    let cells = board.cell_count();
    if cells == 0 {
        return 0.0;
    }
    let Some(estimator) = estimator else {
        return 0.0;
    };
    let Some(prediction) = predict_chain(estimator, board) else {
        return 0.0;
    };
    prediction.class as f32 / (cells as f32 / 4.0)
}
