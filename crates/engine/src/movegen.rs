//! Legal placement enumeration for both games.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::collision::hard_drop_y;
use crate::spin::detect_spin;
use cascade_core::{Board, Move, Orientation, PairBoard, PairMove, Piece, Rotation};

/// All distinct settled placements for a piece: every rotation crossed with
/// every column offset (including columns starting outside the board - wide
/// pieces settle legally with their center off the nominal origin), each
/// hard-dropped. Placements that occupy the same resulting cells are
/// deduplicated, so the O piece's four identical rotation states collapse
/// into one class.
pub fn enumerate_placements(board: &Board, piece: Piece) -> Vec<Move> {
    let mut seen: FxHashSet<[(i8, i8); 4]> = FxHashSet::default();
    let mut moves: SmallVec<[Move; 64]> = SmallVec::new();

    for rotation in Rotation::ALL {
        for x in -2..(Board::WIDTH as i8 + 2) {
            let Some(y) = hard_drop_y(board, piece, rotation, x) else {
                continue;
            };
            let mut cells = piece.minos(rotation).map(|(dx, dy)| (x + dx, y + dy));
            cells.sort_unstable();
            if seen.insert(cells) {
                let spin = detect_spin(board, piece, rotation, x, y);
                moves.push(Move::new(piece, rotation, x, y).with_spin(spin));
            }
        }
    }

    moves.into_vec()
}

/// Is the pair placement legal? Axis and child columns must be in range;
/// a vertical placement needs two free visible rows in its shared column,
/// a horizontal one needs a free visible row in each column. The hidden
/// row never counts as resting headroom.
pub fn pair_move_legal(board: &PairBoard, column: i8, orientation: Orientation) -> bool {
    let (dx, _) = orientation.offset();
    let axis_col = column;
    let child_col = column + dx;

    if axis_col < 0 || axis_col >= PairBoard::WIDTH as i8 {
        return false;
    }
    if child_col < 0 || child_col >= PairBoard::WIDTH as i8 {
        return false;
    }

    let axis_height = board.column_height(axis_col as usize);
    let child_height = board.column_height(child_col as usize);

    if axis_col == child_col {
        axis_height + 2 <= PairBoard::VISIBLE_HEIGHT
    } else {
        axis_height + 1 <= PairBoard::VISIBLE_HEIGHT
            && child_height + 1 <= PairBoard::VISIBLE_HEIGHT
    }
}

/// All legal pair placements, orientation-major then column order.
pub fn enumerate_pair_moves(board: &PairBoard) -> Vec<PairMove> {
    let mut moves = Vec::new();
    for orientation in Orientation::ALL {
        for column in 0..PairBoard::WIDTH as i8 {
            if pair_move_legal(board, column, orientation) {
                moves.push(PairMove::new(column, orientation));
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_core::PairColor;

    #[test]
    fn test_o_piece_nine_placements() {
        let board = Board::new();
        let moves = enumerate_placements(&board, Piece::O);
        assert_eq!(moves.len(), 9);
    }

    #[test]
    fn test_i_piece_placements() {
        let board = Board::new();
        let moves = enumerate_placements(&board, Piece::I);
        // 7 horizontal + 10 vertical
        assert_eq!(moves.len(), 17);
    }

    #[test]
    fn test_t_piece_placements() {
        let board = Board::new();
        let moves = enumerate_placements(&board, Piece::T);
        // 8 per three-wide rotation, 9 per two-wide rotation
        assert_eq!(moves.len(), 34);
    }

    #[test]
    fn test_all_placements_rest_on_floor_when_empty() {
        let board = Board::new();
        for mv in enumerate_placements(&board, Piece::L) {
            let min_y = mv
                .piece
                .minos(mv.rotation)
                .iter()
                .map(|&(_, dy)| mv.y + dy)
                .min()
                .unwrap();
            assert_eq!(min_y, 0);
        }
    }

    #[test]
    fn test_pair_moves_empty_board() {
        let board = PairBoard::new();
        let moves = enumerate_pair_moves(&board);
        // 6 columns x 2 vertical orientations + 5 x 2 horizontal
        assert_eq!(moves.len(), 22);
    }

    #[test]
    fn test_pair_moves_exclude_full_column() {
        let mut board = PairBoard::new();
        for y in 0..PairBoard::VISIBLE_HEIGHT {
            board.set(
                0,
                y,
                Some(if y % 2 == 0 {
                    PairColor::Red
                } else {
                    PairColor::Blue
                }),
            );
        }
        let moves = enumerate_pair_moves(&board);
        assert!(moves
            .iter()
            .all(|m| m.column != 0 || m.orientation.offset().0 != 0));
        assert!(!moves.contains(&PairMove::new(0, Orientation::Up)));
        // horizontal placements touching column 0 also need a free row there
        assert!(!moves.contains(&PairMove::new(1, Orientation::Left)));
    }

    #[test]
    fn test_pair_single_free_row_rejects_vertical() {
        let mut board = PairBoard::new();
        for y in 0..PairBoard::VISIBLE_HEIGHT - 1 {
            board.set(3, y, Some(PairColor::Green));
        }
        assert!(!pair_move_legal(&board, 3, Orientation::Up));
        assert!(pair_move_legal(&board, 3, Orientation::Right));
    }
}
