//! Corner-based spin classification for the pivot piece.

use cascade_core::{Board, Piece, Rotation, SpinType};

/// Classify a T placement by its four diagonal corners.
///
/// A corner counts as filled when occupied, outside the horizontal bounds,
/// or below the floor - but not when above the top of the grid. Three or
/// more filled corners make a spin; a spin is a mini when both trailing
/// corners are filled while the leading pair (per current rotation) is not.
///
/// Engine-generated placements carry no move history, so every T placement
/// is treated as rotation-final. Plain rotate-and-drop placements can
/// therefore be over-classified; a known deviation from rule-accurate
/// detection.
pub fn detect_spin(board: &Board, piece: Piece, rotation: Rotation, x: i8, y: i8) -> SpinType {
    if piece != Piece::T {
        return SpinType::None;
    }

    // corner order: above-left, above-right, below-left, below-right
    let corners = [
        (x - 1, y + 1),
        (x + 1, y + 1),
        (x - 1, y - 1),
        (x + 1, y - 1),
    ];
    let filled = corners.map(|(cx, cy)| {
        if cx < 0 || cx >= Board::WIDTH as i8 || cy < 0 {
            true
        } else if cy >= Board::HEIGHT as i8 {
            false
        } else {
            board.get(cx as usize, cy as usize)
        }
    });

    if filled.iter().filter(|&&f| f).count() < 3 {
        return SpinType::None;
    }

    // leading corners face the flat top of the T
    let (front, back): ([usize; 2], [usize; 2]) = match rotation {
        Rotation::North => ([0, 1], [2, 3]),
        Rotation::East => ([1, 3], [0, 2]),
        Rotation::South => ([2, 3], [0, 1]),
        Rotation::West => ([0, 2], [1, 3]),
    };
    let front_filled = front.iter().filter(|&&i| filled[i]).count();
    let back_filled = back.iter().filter(|&&i| filled[i]).count();

    if back_filled == 2 && front_filled < 2 {
        SpinType::Mini
    } else {
        SpinType::Full
    }
}
