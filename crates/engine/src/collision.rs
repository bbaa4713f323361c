//! collision detection - walls, floor, other blocks

use cascade_core::{Board, Piece, Rotation};

/// does piece collide with anything?
/// Cells above the top of the grid count as free space; they are simply
/// never written when the piece locks.
pub fn collides(board: &Board, piece: Piece, rotation: Rotation, x: i8, y: i8) -> bool {
    for (dx, dy) in piece.minos(rotation) {
        let cx = x + dx;
        let cy = y + dy;
        if cx < 0 || cx >= Board::WIDTH as i8 || cy < 0 {
            return true;
        }
        if cy >= Board::HEIGHT as i8 {
            continue;
        }
        if board.get(cx as usize, cy as usize) {
            return true;
        }
    }
    false
}

/// can we place here? (just !collides)
pub fn can_place(board: &Board, piece: Piece, rotation: Rotation, x: i8, y: i8) -> bool {
    !collides(board, piece, rotation, x, y)
}

/// Classic drop-as-far-as-possible: start above the stack and descend one
/// row at a time until the next step collides; the resting y is the last
/// legal row. Returns None when the column is out of range for this
/// rotation (no legal position at any height).
pub fn hard_drop_y(board: &Board, piece: Piece, rotation: Rotation, x: i8) -> Option<i8> {
    let mut y = Board::HEIGHT as i8 + 2;
    if collides(board, piece, rotation, x, y) {
        return None;
    }
    while !collides(board, piece, rotation, x, y - 1) {
        y -= 1;
    }
    Some(y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_collision_empty_board() {
        let board = Board::new();
        assert!(!collides(&board, Piece::T, Rotation::North, 4, 1));
    }

    #[test]
    fn test_collision_with_wall() {
        let board = Board::new();
        // T piece at x=-1 should collide with left wall
        assert!(collides(&board, Piece::T, Rotation::North, -1, 1));
    }

    #[test]
    fn test_collision_with_floor() {
        let board = Board::new();
        // T North at y=0 has minos at y=0 and y=1, should be valid
        assert!(!collides(&board, Piece::T, Rotation::North, 4, 0));
        // T South at y=0 has a mino at y=-1, should collide
        assert!(collides(&board, Piece::T, Rotation::South, 4, 0));
    }

    #[test]
    fn test_collision_with_filled_cell() {
        let mut board = Board::new();
        board.set(4, 0, true);
        assert!(collides(&board, Piece::T, Rotation::North, 4, 0));
    }

    #[test]
    fn test_above_grid_is_free() {
        let board = Board::new();
        assert!(!collides(&board, Piece::I, Rotation::East, 4, Board::HEIGHT as i8));
    }

    #[test]
    fn test_hard_drop_empty_board() {
        let board = Board::new();
        assert_eq!(hard_drop_y(&board, Piece::T, Rotation::North, 4), Some(0));
    }

    #[test]
    fn test_hard_drop_with_obstacle() {
        let mut board = Board::new();
        for x in 0..Board::WIDTH {
            board.set(x, 5, true);
        }
        assert_eq!(hard_drop_y(&board, Piece::T, Rotation::North, 4), Some(6));
    }

    #[test]
    fn test_hard_drop_out_of_range() {
        let board = Board::new();
        assert_eq!(hard_drop_y(&board, Piece::T, Rotation::North, -2), None);
    }
}
