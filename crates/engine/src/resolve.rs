//! Cascading chain resolution for the pair game.
//!
//! Gravity then group popping, repeated until a full pass clears nothing.
//! Idempotent at the fixed point: resolving a resolved board is a no-op.

use cascade_core::PairBoard;
use serde::{Deserialize, Serialize};

/// Chain bonus factors indexed by chain number (1-based).
/// Saturates at 256 for chains of 12 and beyond.
pub const CHAIN_BONUS: [u32; 12] = [0, 0, 8, 16, 32, 64, 96, 128, 160, 192, 224, 256];

pub fn chain_bonus(chain: u32) -> u32 {
    CHAIN_BONUS
        .get(chain as usize)
        .copied()
        .unwrap_or(256)
}

/// Outcome of one resolution call.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct ChainResult {
    /// Number of passes that cleared at least one group.
    pub chains: u32,
    /// Total cells popped across all passes.
    pub cleared: u32,
    /// Sum over passes of `popped * 10 * max(1, chain_bonus(chain))`.
    pub score: u32,
}

/// Run resolution to its fixed point.
pub fn resolve(board: &mut PairBoard) -> ChainResult {
    let mut result = ChainResult::default();

    loop {
        board.apply_gravity();
        let popped = board.pop_groups();
        if popped == 0 {
            break;
        }
        result.chains += 1;
        result.cleared += popped;
        result.score += popped * 10 * chain_bonus(result.chains).max(1);
    }

    result
}

/// A board is stable when no same-color component of size >= 4 exists,
/// i.e. resolution would be a no-op. Gates the potential estimator.
pub fn is_stable(board: &PairBoard) -> bool {
    board.groups().iter().all(|g| g.len() < 4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_core::PairColor;

    #[test]
    fn test_chain_bonus_table() {
        assert_eq!(chain_bonus(1), 0);
        assert_eq!(chain_bonus(2), 8);
        assert_eq!(chain_bonus(5), 64);
        assert_eq!(chain_bonus(11), 256);
        assert_eq!(chain_bonus(12), 256);
        assert_eq!(chain_bonus(30), 256);
    }

    #[test]
    fn test_single_group_score() {
        let mut board = PairBoard::new();
        for y in 0..4 {
            board.set(2, y, Some(PairColor::Red));
        }
        let result = resolve(&mut board);
        assert_eq!(result.chains, 1);
        assert_eq!(result.cleared, 4);
        // 4 cells x 10 x max(1, 0)
        assert_eq!(result.score, 40);
        assert!(board.is_empty());
    }

    #[test]
    fn test_two_step_chain() {
        let mut board = PairBoard::new();
        // Column 0: four greens under one red; columns 0-2 hold three more
        // reds that complete a group once the greens pop and the red falls.
        for y in 0..4 {
            board.set(0, y, Some(PairColor::Green));
        }
        board.set(0, 4, Some(PairColor::Red));
        board.set(1, 0, Some(PairColor::Red));
        board.set(2, 0, Some(PairColor::Red));
        board.set(3, 0, Some(PairColor::Red));
        let result = resolve(&mut board);
        assert_eq!(result.chains, 2);
        assert_eq!(result.cleared, 8);
        // pass 1: 4 x 10 x 1 = 40; pass 2: 4 x 10 x 8 = 320
        assert_eq!(result.score, 360);
        assert!(board.is_empty());
    }

    #[test]
    fn test_resolve_idempotent() {
        let mut board = PairBoard::new();
        for y in 0..4 {
            board.set(1, y, Some(PairColor::Blue));
        }
        board.set(0, 0, Some(PairColor::Yellow));
        resolve(&mut board);
        let settled = board.clone();
        let second = resolve(&mut board);
        assert_eq!(second, ChainResult::default());
        assert_eq!(board, settled);
    }

    #[test]
    fn test_gravity_runs_before_first_pop() {
        let mut board = PairBoard::new();
        // three floating blues drop onto a fourth
        board.set(3, 0, Some(PairColor::Blue));
        board.set(3, 5, Some(PairColor::Blue));
        board.set(3, 7, Some(PairColor::Blue));
        board.set(3, 9, Some(PairColor::Blue));
        let result = resolve(&mut board);
        assert_eq!(result.chains, 1);
        assert_eq!(result.cleared, 4);
    }

    #[test]
    fn test_stability() {
        let mut board = PairBoard::new();
        for y in 0..3 {
            board.set(0, y, Some(PairColor::Red));
        }
        assert!(is_stable(&board));
        board.set(1, 0, Some(PairColor::Red));
        assert!(!is_stable(&board));
    }
}
