//! Line-game board evaluation.

use crate::weights::LineWeights;
use cascade_core::{Board, SpinType};

/// Overrides every other term once the hidden band is occupied.
pub const LINE_LOSS_SCORE: f32 = -1_000_000.0;

/// Convenience variant for boards scored without a clear event.
pub fn evaluate_line_board(board: &Board, weights: &LineWeights) -> f32 {
    evaluate_line(board, 0, SpinType::None, weights)
}

/// Score a resolved board, including the clear event that produced it.
pub fn evaluate_line(board: &Board, lines_cleared: u8, spin: SpinType, weights: &LineWeights) -> f32 {
    if board.has_hidden_cells() {
        return LINE_LOSS_SCORE;
    }

    let mut score = 0.0f32;

    match spin {
        SpinType::Full => {
            let idx = (lines_cleared as usize).min(3);
            score += weights.spin_bonus[idx];
        }
        SpinType::Mini => {
            let idx = (lines_cleared as usize).min(2);
            score += weights.spin_mini_bonus[idx];
        }
        SpinType::None => {}
    }

    let mut heights = [0usize; Board::WIDTH];
    for (x, h) in heights.iter_mut().enumerate() {
        *h = board.height_of(x);
    }
    let max_height = heights.iter().copied().max().unwrap_or(0);
    let avg_height = heights.iter().sum::<usize>() as f32 / Board::WIDTH as f32;

    // holes: empty cells under cover, plus how deeply they are buried
    let mut holes = 0u32;
    let mut covered = 0u32;
    let mut deep_holes = 0u32;
    let mut hole_columns = 0u32;
    for x in 0..Board::WIDTH {
        let mut blocks_above = 0u32;
        let mut column_has_hole = false;
        for y in (0..Board::HEIGHT).rev() {
            if board.get(x, y) {
                blocks_above += 1;
            } else if blocks_above > 0 {
                holes += 1;
                covered += blocks_above;
                column_has_hole = true;
                if blocks_above >= 2 {
                    deep_holes += 1;
                }
            }
        }
        if column_has_hole {
            hole_columns += 1;
        }
    }
    score += holes as f32 * weights.hole;
    score += covered as f32 * weights.covered_hole;
    score += deep_holes as f32 * weights.deep_hole;
    score += hole_columns as f32 * weights.hole_column;

    // height terms, linear and squared
    score += max_height as f32 * weights.max_height;
    score += (max_height * max_height) as f32 * weights.height_squared;
    score += avg_height * weights.avg_height;

    // steep extra penalty once the stack nears the hidden band
    if max_height >= 15 {
        score += (max_height - 14) as f32 * weights.danger_height;
    } else if max_height >= 12 {
        score += (max_height - 11) as f32 * (weights.danger_height / 2.0);
    }

    // tall center columns sit under the entry point
    let center_height = heights[4].max(heights[5]) as f32;
    if center_height > avg_height + 2.0 {
        score += (center_height - avg_height) * weights.center_height;
    }

    let variance = heights
        .iter()
        .map(|&h| (h as f32 - avg_height).powi(2))
        .sum::<f32>()
        / Board::WIDTH as f32;
    score += variance.sqrt() * weights.height_variance;

    // surface shape: bumpiness, cliffs, wells
    let mut bumpiness = 0usize;
    let mut cliffs = 0u32;
    let mut well_count = 0u32;
    let mut well_column = 0usize;
    for x in 0..Board::WIDTH {
        if x > 0 {
            let diff = heights[x].abs_diff(heights[x - 1]);
            bumpiness += diff;
            if diff >= 3 {
                cliffs += 1;
            }
        }
        let left = if x > 0 { heights[x - 1] } else { usize::MAX };
        let right = if x + 1 < Board::WIDTH {
            heights[x + 1]
        } else {
            usize::MAX
        };
        if left.min(right) >= heights[x] + 2 {
            well_count += 1;
            well_column = x;
        }
    }
    score += bumpiness as f32 * weights.bumpiness;
    score += cliffs as f32 * weights.cliff;

    // a single edge well is an I-piece slot; more than one is a liability.
    // no well credit at dangerous heights - clearing comes first
    if well_count == 1 && max_height < 12 {
        if well_column == 0 || well_column == Board::WIDTH - 1 {
            let (near, next) = if well_column == 0 {
                (heights[1], heights[2])
            } else {
                (heights[Board::WIDTH - 2], heights[Board::WIDTH - 3])
            };
            let depth = near.min(next).saturating_sub(heights[well_column]);
            score += depth as f32 * weights.well_depth;
            score += weights.single_well;
        }
    } else if well_count > 1 {
        score += (well_count - 1) as f32 * weights.blocked_column;
    }

    // partial row credit, scaled up when the stack is high enough that
    // clearing must win over building
    let danger_multiplier = if max_height >= 12 {
        3.0
    } else if max_height >= 10 {
        2.0
    } else {
        1.0
    };
    for y in 0..Board::VISIBLE_HEIGHT {
        let filled = (0..Board::WIDTH).filter(|&x| board.get(x, y)).count();
        if filled == Board::WIDTH - 1 {
            score += weights.almost_complete_row * danger_multiplier;
        } else if filled == Board::WIDTH - 2 {
            score += weights.nearly_complete_row * danger_multiplier;
        }
    }

    if lines_cleared > 0 {
        let clear_multiplier = if max_height >= 12 { 2.0 } else { 1.0 };
        score += lines_cleared as f32 * weights.lines_cleared * clear_multiplier;
        let idx = (lines_cleared as usize).min(weights.clear_bonus.len() - 1);
        score += weights.clear_bonus[idx] * clear_multiplier;
    }

    if bumpiness <= 4 {
        score += weights.flat;
    }
    if max_height <= 6 {
        score += weights.low_profile;
    }
    if board.is_empty() {
        score += weights.perfect_clear;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loss_score_overrides_everything() {
        let mut board = Board::new();
        board.set(0, Board::VISIBLE_HEIGHT, true);
        let w = LineWeights::default();
        assert_eq!(evaluate_line(&board, 4, SpinType::Full, &w), LINE_LOSS_SCORE);
    }

    #[test]
    fn test_empty_board_collects_flat_low_and_perfect_clear() {
        let board = Board::new();
        let w = LineWeights::default();
        let score = evaluate_line_board(&board, &w);
        assert_eq!(score, w.flat + w.low_profile + w.perfect_clear);
    }

    #[test]
    fn test_holes_are_penalized() {
        let mut covered = Board::new();
        covered.set(0, 0, true);
        covered.set(0, 1, true);

        let mut with_hole = Board::new();
        with_hole.set(0, 1, true);
        with_hole.set(0, 2, true);

        let w = LineWeights::default();
        assert!(evaluate_line_board(&covered, &w) > evaluate_line_board(&with_hole, &w));
    }

    #[test]
    fn test_clear_bonus_scales_superlinearly() {
        let board = Board::new();
        let w = LineWeights::default();
        let single = evaluate_line(&board, 1, SpinType::None, &w);
        let quad = evaluate_line(&board, 4, SpinType::None, &w);
        let base = evaluate_line_board(&board, &w);
        assert_eq!(single - base, w.lines_cleared + w.clear_bonus[1]);
        assert_eq!(quad - base, 4.0 * w.lines_cleared + w.clear_bonus[4]);
    }

    #[test]
    fn test_spin_clear_outranks_plain_clear() {
        let board = Board::new();
        let w = LineWeights::default();
        let plain = evaluate_line(&board, 2, SpinType::None, &w);
        let spun = evaluate_line(&board, 2, SpinType::Full, &w);
        assert_eq!(spun - plain, w.spin_bonus[2]);
    }

    #[test]
    fn test_deep_holes_cost_more_than_shallow() {
        let mut shallow = Board::new();
        shallow.set(3, 1, true); // one cover over a hole at (3, 0)

        let mut deep = Board::new();
        deep.set(3, 1, true);
        deep.set(3, 2, true); // two covers

        let w = LineWeights::default();
        assert!(evaluate_line_board(&shallow, &w) > evaluate_line_board(&deep, &w));
    }
}
