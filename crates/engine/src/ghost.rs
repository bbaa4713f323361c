//! Ghost previews - settled resting cells for a committed decision.
//!
//! Pure queries; the board is never mutated.

use crate::collision::hard_drop_y;
use cascade_core::{Board, Orientation, Pair, PairBoard, PairColor, PairMove, Piece, Rotation};

/// One previewed pair cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GhostCell {
    pub x: u8,
    pub y: u8,
    pub color: PairColor,
}

/// Settled cells of a line-game piece dropped in the given column and
/// rotation, or None when the column is out of range.
pub fn line_ghost_cells(
    board: &Board,
    piece: Piece,
    rotation: Rotation,
    x: i8,
) -> Option<[(i8, i8); 4]> {
    let y = hard_drop_y(board, piece, rotation, x)?;
    Some(piece.minos(rotation).map(|(dx, dy)| (x + dx, y + dy)))
}

/// Settled visible cells of a pair placement. Empty when either target
/// column has no visible resting row; cells that would settle in the
/// hidden row are omitted.
pub fn pair_ghost_cells(board: &PairBoard, pair: Pair, mv: &PairMove) -> Vec<GhostCell> {
    let (dx, _) = mv.orientation.offset();
    let axis_col = mv.column;
    let child_col = mv.column + dx;

    if axis_col < 0 || axis_col >= PairBoard::WIDTH as i8 {
        return Vec::new();
    }
    if child_col < 0 || child_col >= PairBoard::WIDTH as i8 {
        return Vec::new();
    }

    let axis_col = axis_col as usize;
    let child_col = child_col as usize;
    let axis_rest = board.column_height(axis_col);
    let child_rest = board.column_height(child_col);
    if axis_rest >= PairBoard::VISIBLE_HEIGHT || child_rest >= PairBoard::VISIBLE_HEIGHT {
        return Vec::new();
    }

    let cell = |x: usize, y: usize, color: PairColor| GhostCell {
        x: x as u8,
        y: y as u8,
        color,
    };

    let mut cells = Vec::with_capacity(2);
    match mv.orientation {
        Orientation::Up => {
            cells.push(cell(axis_col, axis_rest, pair.axis));
            if axis_rest + 1 < PairBoard::VISIBLE_HEIGHT {
                cells.push(cell(child_col, axis_rest + 1, pair.child));
            }
        }
        Orientation::Down => {
            cells.push(cell(child_col, child_rest, pair.child));
            if child_rest + 1 < PairBoard::VISIBLE_HEIGHT {
                cells.push(cell(axis_col, child_rest + 1, pair.axis));
            }
        }
        Orientation::Right | Orientation::Left => {
            cells.push(cell(axis_col, axis_rest, pair.axis));
            cells.push(cell(child_col, child_rest, pair.child));
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_ghost_on_empty_board() {
        let board = Board::new();
        let cells = line_ghost_cells(&board, Piece::O, Rotation::North, 0).expect("in range");
        assert!(cells.contains(&(0, 0)));
        assert!(cells.contains(&(1, 0)));
        assert!(cells.contains(&(0, 1)));
        assert!(cells.contains(&(1, 1)));
    }

    #[test]
    fn test_line_ghost_out_of_range() {
        let board = Board::new();
        assert!(line_ghost_cells(&board, Piece::O, Rotation::North, 9).is_none());
    }

    #[test]
    fn test_line_ghost_does_not_mutate() {
        let board = Board::new();
        let before = board.clone();
        let _ = line_ghost_cells(&board, Piece::T, Rotation::East, 4);
        assert_eq!(board, before);
    }

    #[test]
    fn test_pair_ghost_vertical() {
        let mut board = PairBoard::new();
        board.set(2, 0, Some(PairColor::Yellow));
        let pair = Pair::new(PairColor::Red, PairColor::Blue);
        let cells = pair_ghost_cells(&board, pair, &PairMove::new(2, Orientation::Up));
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0], GhostCell { x: 2, y: 1, color: PairColor::Red });
        assert_eq!(cells[1], GhostCell { x: 2, y: 2, color: PairColor::Blue });
    }

    #[test]
    fn test_pair_ghost_full_column_is_empty() {
        let mut board = PairBoard::new();
        for y in 0..PairBoard::VISIBLE_HEIGHT {
            board.set(
                4,
                y,
                Some(if y % 2 == 0 {
                    PairColor::Red
                } else {
                    PairColor::Blue
                }),
            );
        }
        let pair = Pair::new(PairColor::Red, PairColor::Blue);
        assert!(pair_ghost_cells(&board, pair, &PairMove::new(4, Orientation::Up)).is_empty());
        assert!(pair_ghost_cells(&board, pair, &PairMove::new(3, Orientation::Right)).is_empty());
    }

    #[test]
    fn test_pair_ghost_out_of_range_column() {
        let board = PairBoard::new();
        let pair = Pair::new(PairColor::Red, PairColor::Blue);
        assert!(pair_ghost_cells(&board, pair, &PairMove::new(5, Orientation::Right)).is_empty());
    }
}
