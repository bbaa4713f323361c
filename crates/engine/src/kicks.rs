//! Standard SRS wall-kick tables for line-game rotation.
//!
//! Offsets are (dx, dy) with y up; the in-place test (0, 0) leads every
//! table. The I piece has its own table; O never kicks.

use crate::collision::can_place;
use cascade_core::{Board, Piece, Rotation};

/// Get kick offsets for a rotation transition.
/// Returns slice of (dx, dy) offsets to try in order.
pub fn get_kicks(piece: Piece, from: Rotation, to: Rotation) -> &'static [(i8, i8)] {
    let key = rotation_key(from, to);

    match piece {
        Piece::I => i_kicks(key),
        Piece::O => &[],
        _ => jlstz_kicks(key),
    }
}

/// First kick offset that lets the piece occupy a legal position, applied.
/// Returns the kicked (x, y), or None when every offset collides.
pub fn try_wall_kick(
    board: &Board,
    piece: Piece,
    from: Rotation,
    to: Rotation,
    x: i8,
    y: i8,
) -> Option<(i8, i8)> {
    for &(dx, dy) in get_kicks(piece, from, to) {
        let nx = x + dx;
        let ny = y + dy;
        if can_place(board, piece, to, nx, ny) {
            return Some((nx, ny));
        }
    }
    None
}

fn rotation_key(from: Rotation, to: Rotation) -> u8 {
    from.index() as u8 * 10 + to.index() as u8
}

/// JLSTZ kick table (standard SRS)
fn jlstz_kicks(key: u8) -> &'static [(i8, i8)] {
    match key {
        // CW rotations
        01 => &[(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)], // N -> E
        12 => &[(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],     // E -> S
        23 => &[(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],    // S -> W
        30 => &[(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],  // W -> N

        // CCW rotations
        10 => &[(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],     // E -> N
        21 => &[(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)], // S -> E
        32 => &[(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],  // W -> S
        03 => &[(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],    // N -> W

        _ => &[],
    }
}

/// I piece kick table (standard SRS)
fn i_kicks(key: u8) -> &'static [(i8, i8)] {
    match key {
        // CW rotations
        01 => &[(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)], // N -> E
        12 => &[(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)], // E -> S
        23 => &[(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)], // S -> W
        30 => &[(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)], // W -> N

        // CCW rotations
        10 => &[(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)], // E -> N
        21 => &[(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)], // S -> E
        32 => &[(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)], // W -> S
        03 => &[(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)], // N -> W

        _ => &[],
    }
}
