//! Piece types and mino offset tables for the line game.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Piece {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    pub fn cw(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    pub fn ccw(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Quarter-turn clockwise about the center cell.
fn rotate_cw(minos: [(i8, i8); 4]) -> [(i8, i8); 4] {
    minos.map(|(x, y)| (y, -x))
}

impl Piece {
    pub const ALL: [Piece; 7] = [
        Piece::I,
        Piece::O,
        Piece::T,
        Piece::S,
        Piece::Z,
        Piece::J,
        Piece::L,
    ];

    /// North-facing mino offsets relative to the piece center (SRS).
    fn north_minos(self) -> [(i8, i8); 4] {
        match self {
            Piece::I => [(-1, 0), (0, 0), (1, 0), (2, 0)],
            Piece::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
            Piece::T => [(-1, 0), (0, 0), (1, 0), (0, 1)],
            Piece::S => [(-1, 0), (0, 0), (0, 1), (1, 1)],
            Piece::Z => [(-1, 1), (0, 1), (0, 0), (1, 0)],
            Piece::J => [(-1, 1), (-1, 0), (0, 0), (1, 0)],
            Piece::L => [(1, 1), (-1, 0), (0, 0), (1, 0)],
        }
    }

    /// Mino offsets at the given rotation. O never changes; I alternates
    /// between its horizontal and vertical bars; the rest are true
    /// quarter-turns of the North table.
    pub fn minos(self, rot: Rotation) -> [(i8, i8); 4] {
        match self {
            Piece::O => self.north_minos(),
            Piece::I => match rot {
                Rotation::North | Rotation::South => [(-1, 0), (0, 0), (1, 0), (2, 0)],
                Rotation::East | Rotation::West => [(0, -1), (0, 0), (0, 1), (0, 2)],
            },
            _ => {
                let mut minos = self.north_minos();
                for _ in 0..rot.index() {
                    minos = rotate_cw(minos);
                }
                minos
            }
        }
    }
}
