//! Placement action types for both games.

use crate::{Orientation, Piece, Rotation};
use serde::{Deserialize, Serialize};

/// Spin classification for a line-game placement.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum SpinType {
    None,
    Mini,
    Full,
}

/// A settled line-game placement: piece center at (x, y) in the given
/// rotation, optionally reached by swapping with the hold slot first.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Move {
    pub piece: Piece,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    pub hold_used: bool,
    pub spin_type: SpinType,
}

impl Move {
    pub fn new(piece: Piece, rotation: Rotation, x: i8, y: i8) -> Self {
        Self {
            piece,
            rotation,
            x,
            y,
            hold_used: false,
            spin_type: SpinType::None,
        }
    }

    pub fn with_spin(mut self, spin_type: SpinType) -> Self {
        self.spin_type = spin_type;
        self
    }

    pub fn with_hold(mut self) -> Self {
        self.hold_used = true;
        self
    }
}

/// A pair-game placement: axis column plus child orientation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PairMove {
    pub column: i8,
    pub orientation: Orientation,
}

impl PairMove {
    pub fn new(column: i8, orientation: Orientation) -> Self {
        Self {
            column,
            orientation,
        }
    }

    /// Fallback action when the state is already lost: the first slot in
    /// enumeration order.
    pub const DEFAULT: Self = Self {
        column: 0,
        orientation: Orientation::Up,
    };
}
