//! Placement application for both games.

use crate::resolve::{resolve, ChainResult};
use cascade_core::{Board, Move, Pair, PairBoard, PairMove, PairState};

/// Apply a line-game move to a board and return the resulting board and
/// lines cleared. Cells that settle above the top of the grid are dropped.
pub fn apply_move(board: &Board, mv: &Move) -> (Board, u8) {
    let mut next = board.clone();

    for (dx, dy) in mv.piece.minos(mv.rotation) {
        let x = mv.x + dx;
        let y = mv.y + dy;
        if x >= 0 && y >= 0 && (x as usize) < Board::WIDTH && (y as usize) < Board::HEIGHT {
            next.set(x as usize, y as usize, true);
        }
    }

    let lines = next.clear_lines();
    (next, lines)
}

/// Write a pair at its settled resting cells. Distinct columns drop
/// independently; a shared column places the lower cell first and stacks
/// the other directly above it.
pub fn place_pair(board: &mut PairBoard, pair: Pair, mv: &PairMove) {
    let (dx, _) = mv.orientation.offset();
    let axis_col = mv.column as usize;
    let child_col = (mv.column + dx) as usize;

    let mut put = |board: &mut PairBoard, x: usize, y: usize, color| {
        if y < PairBoard::TOTAL_HEIGHT {
            board.set(x, y, Some(color));
        }
    };

    if axis_col == child_col {
        let rest = board.column_height(axis_col);
        // lower cell first, per orientation
        if mv.orientation.offset().1 < 0 {
            put(board, child_col, rest, pair.child);
            put(board, axis_col, rest + 1, pair.axis);
        } else {
            put(board, axis_col, rest, pair.axis);
            put(board, child_col, rest + 1, pair.child);
        }
    } else {
        let axis_rest = board.column_height(axis_col);
        let child_rest = board.column_height(child_col);
        put(board, axis_col, axis_rest, pair.axis);
        put(board, child_col, child_rest, pair.child);
    }
}

/// Has the pair game reached its loss state? The entry column is blocked
/// when its top visible row or hidden row is occupied after resolution.
pub fn pair_lost(board: &PairBoard) -> bool {
    let col = PairBoard::SPAWN_COLUMN;
    board.get(col, PairBoard::VISIBLE_HEIGHT - 1).is_some()
        || board.get(col, PairBoard::VISIBLE_HEIGHT).is_some()
}

/// Place the active pair, run resolution, update the loss flag, and advance
/// the queue. The move must come from `enumerate_pair_moves` - illegal
/// placements are excluded there, never here.
pub fn step_pair(state: &mut PairState, mv: &PairMove) -> ChainResult {
    let Some(pair) = state.current else {
        return ChainResult::default();
    };
    if state.game_over {
        return ChainResult::default();
    }

    place_pair(&mut state.board, pair, mv);
    let result = resolve(&mut state.board);

    if pair_lost(&state.board) {
        state.game_over = true;
        state.current = None;
    } else {
        state.advance_queue();
    }

    result
}
