//! Beam search over line-game placements with hold handling.

use std::cmp::Ordering;

use rayon::prelude::*;

use cascade_core::{Board, GameState, Move, Piece, SpinType};
use cascade_engine::{apply_move, enumerate_placements};
use cascade_eval::{evaluate_line, LineWeights};

pub const LINE_BEAM_WIDTH: usize = 80;
pub const LINE_SEARCH_DEPTH: usize = 4;

/// The chosen first action plus diagnostics.
#[derive(Clone, Copy, Debug)]
pub struct LineChoice {
    pub action: Move,
    pub score: f32,
    pub lines_cleared: u32,
}

pub struct LineSearch {
    pub depth: usize,
    pub beam_width: usize,
    pub weights: LineWeights,
}

impl Default for LineSearch {
    fn default() -> Self {
        Self {
            depth: LINE_SEARCH_DEPTH,
            beam_width: LINE_BEAM_WIDTH,
            weights: LineWeights::default(),
        }
    }
}

/// One candidate sequence. Each node carries the piece sequence its seed
/// committed to, so hold branches and plain branches prune against each
/// other in a single beam.
#[derive(Clone)]
struct LineNode {
    board: Board,
    pieces: Vec<Piece>,
    use_hold: bool,
    actions: Vec<Move>,
    total_lines: u32,
    last_lines: u8,
    last_spin: SpinType,
    lost: bool,
    score: f32,
}

impl LineSearch {
    pub fn new(depth: usize, beam_width: usize) -> Self {
        Self {
            depth: depth.max(1),
            beam_width: beam_width.max(1),
            weights: LineWeights::default(),
        }
    }

    /// Pick the best next placement, considering the hold swap. None means
    /// no legal placement exists for any first-piece option - the state is
    /// already lost.
    pub fn search(&self, state: &GameState) -> Option<LineChoice> {
        let current = state.current?;

        let mut beam: Vec<LineNode> = self
            .seed_options(state, current)
            .into_iter()
            .map(|(pieces, use_hold)| LineNode {
                board: state.board.clone(),
                pieces,
                use_hold,
                actions: Vec::new(),
                total_lines: 0,
                last_lines: 0,
                last_spin: SpinType::None,
                lost: false,
                score: 0.0,
            })
            .collect();

        for ply in 0..self.depth {
            let mut candidates: Vec<LineNode> = beam
                .par_iter()
                .flat_map_iter(|node| self.expand(node, ply))
                .collect();

            if candidates.is_empty() {
                // no node could place anything; keep the best prior layer
                break;
            }

            candidates.par_iter_mut().for_each(|candidate| {
                candidate.score = self.score(candidate);
            });

            candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
            candidates.truncate(self.beam_width);
            beam = candidates;
        }

        // the beam stays sorted, so the head is the best across every seed
        // branch, hold variants included
        let best = beam.into_iter().next()?;
        let action = *best.actions.first()?;
        Some(LineChoice {
            action,
            score: best.score,
            lines_cleared: best.total_lines,
        })
    }

    /// First-piece options: the current piece, the held piece when hold is
    /// available and distinct, or the next queued piece when hold is empty
    /// (which consumes one extra queue slot).
    fn seed_options(&self, state: &GameState, current: Piece) -> Vec<(Vec<Piece>, bool)> {
        let mut options = Vec::new();

        let mut plain = Vec::with_capacity(self.depth + 1);
        plain.push(current);
        plain.extend(state.queue.iter().take(self.depth));
        options.push((plain, false));

        if state.can_hold {
            match state.hold {
                Some(held) if held != current => {
                    let mut swapped = Vec::with_capacity(self.depth + 1);
                    swapped.push(held);
                    swapped.extend(state.queue.iter().take(self.depth));
                    options.push((swapped, true));
                }
                None => {
                    if let Some(&next) = state.queue.first() {
                        let mut shifted = Vec::with_capacity(self.depth + 1);
                        shifted.push(next);
                        shifted.extend(state.queue.iter().skip(1).take(self.depth));
                        options.push((shifted, true));
                    }
                }
                _ => {}
            }
        }

        options
    }

    fn expand(&self, node: &LineNode, ply: usize) -> Vec<LineNode> {
        if node.lost || ply >= node.pieces.len() {
            // nothing to place; the node rides along unchanged
            return vec![node.clone()];
        }

        let piece = node.pieces[ply];
        enumerate_placements(&node.board, piece)
            .into_iter()
            .map(|mut mv| {
                // hold is only ever spent on the first placement
                mv.hold_used = ply == 0 && node.use_hold;

                let (board, lines) = apply_move(&node.board, &mv);
                let lost = board.has_hidden_cells();

                let mut actions = node.actions.clone();
                actions.push(mv);

                LineNode {
                    board,
                    pieces: node.pieces.clone(),
                    use_hold: node.use_hold,
                    actions,
                    total_lines: node.total_lines + lines as u32,
                    last_lines: lines,
                    last_spin: mv.spin_type,
                    lost,
                    score: 0.0,
                }
            })
            .collect()
    }

    fn score(&self, node: &LineNode) -> f32 {
        let mut score = evaluate_line(&node.board, node.last_lines, node.last_spin, &self.weights);
        // cumulative clears keep earlier plies honest
        score += node.total_lines as f32 * 100.0;
        if node.last_spin != SpinType::None && node.last_lines > 0 {
            score += node.last_lines as f32 * 200.0;
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_core::Rotation;

    fn state_with_queue(pieces: &[Piece]) -> GameState {
        GameState::with_queue(pieces.to_vec())
    }

    #[test]
    fn test_search_empty_board_returns_move() {
        let search = LineSearch::new(2, 40);
        let state = state_with_queue(&[Piece::T, Piece::I, Piece::O]);
        let choice = search.search(&state).expect("expected a move");

        let legal = enumerate_placements(&state.board, Piece::T);
        let held = enumerate_placements(&state.board, Piece::I);
        let matches_plain = legal
            .iter()
            .any(|m| m.x == choice.action.x && m.rotation == choice.action.rotation
                && !choice.action.hold_used);
        let matches_hold = held
            .iter()
            .any(|m| m.x == choice.action.x && m.rotation == choice.action.rotation
                && choice.action.hold_used);
        assert!(matches_plain || matches_hold);
    }

    #[test]
    fn test_search_clears_waiting_line() {
        let search = LineSearch::new(1, LINE_BEAM_WIDTH);
        let mut state = state_with_queue(&[Piece::I, Piece::O]);
        state.can_hold = false;
        for x in 0..Board::WIDTH {
            if !(3..7).contains(&x) {
                state.board.set(x, 0, true);
            }
        }

        let choice = search.search(&state).expect("expected a move");
        let (board, lines) = apply_move(&state.board, &choice.action);
        assert_eq!(lines, 1);
        assert!(board.is_empty());
    }

    #[test]
    fn test_hold_swap_is_considered() {
        let search = LineSearch::new(1, LINE_BEAM_WIDTH);
        // row open at the far left; only the held I can clear it this turn
        let mut state = GameState {
            current: Some(Piece::O),
            hold: Some(Piece::I),
            ..GameState::new()
        };
        for x in 0..Board::WIDTH {
            if x >= 4 {
                state.board.set(x, 0, true);
            }
        }

        let choice = search.search(&state).expect("expected a move");
        assert!(choice.action.hold_used);
        assert_eq!(choice.action.piece, Piece::I);
        let (_, lines) = apply_move(&state.board, &choice.action);
        assert_eq!(lines, 1);
    }

    #[test]
    fn test_hold_from_queue_shifts_consumption() {
        let search = LineSearch::new(2, LINE_BEAM_WIDTH);
        let state = GameState {
            current: Some(Piece::S),
            hold: None,
            queue: vec![Piece::I, Piece::O, Piece::T],
            ..GameState::new()
        };
        // the hold branch consumes the queue one slot further, so the first
        // placed piece is either the current S or the queued I
        let choice = search.search(&state).expect("expected a move");
        if choice.action.hold_used {
            assert_eq!(choice.action.piece, Piece::I);
        } else {
            assert_eq!(choice.action.piece, Piece::S);
        }
    }

    #[test]
    fn test_no_current_piece_returns_none() {
        let search = LineSearch::default();
        let state = GameState::new();
        assert!(search.search(&state).is_none());
    }

    #[test]
    fn test_avoids_hidden_band_when_alternative_exists() {
        let search = LineSearch::new(1, LINE_BEAM_WIDTH);
        let mut state = state_with_queue(&[Piece::O, Piece::O]);
        state.can_hold = false;
        // stack nearly to the hidden band everywhere except the right edge
        for x in 0..Board::WIDTH - 2 {
            for y in 0..Board::VISIBLE_HEIGHT - 1 {
                state.board.set(x, y, true);
            }
        }

        let choice = search.search(&state).expect("expected a move");
        let (board, _) = apply_move(&state.board, &choice.action);
        assert!(!board.has_hidden_cells());
    }

    #[test]
    fn test_spin_setup_scores_higher_than_burying_it() {
        // direct check that the scorer rewards spin clears via the weights
        let search = LineSearch::default();
        let node_score = |spin: SpinType, lines: u8| {
            let node = LineNode {
                board: Board::new(),
                pieces: vec![Piece::T],
                use_hold: false,
                actions: vec![Move::new(Piece::T, Rotation::South, 4, 1)],
                total_lines: lines as u32,
                last_lines: lines,
                last_spin: spin,
                lost: false,
                score: 0.0,
            };
            search.score(&node)
        };
        assert!(node_score(SpinType::Full, 2) > node_score(SpinType::None, 2));
    }
}
