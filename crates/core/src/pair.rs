//! Falling two-cell unit for the pair game.

use crate::PairColor;
use serde::{Deserialize, Serialize};

/// Where the child cell sits relative to the axis cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Up,
        Orientation::Right,
        Orientation::Down,
        Orientation::Left,
    ];

    /// Child offset from the axis cell, y-up.
    pub fn offset(self) -> (i8, i8) {
        match self {
            Self::Up => (0, 1),
            Self::Right => (1, 0),
            Self::Down => (0, -1),
            Self::Left => (-1, 0),
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A falling pair: the axis cell the player pivots around, plus a child.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Pair {
    pub axis: PairColor,
    pub child: PairColor,
}

impl Pair {
    pub fn new(axis: PairColor, child: PairColor) -> Self {
        Self { axis, child }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        assert_eq!(Orientation::Up.offset(), (0, 1));
        assert_eq!(Orientation::Right.offset(), (1, 0));
        assert_eq!(Orientation::Down.offset(), (0, -1));
        assert_eq!(Orientation::Left.offset(), (-1, 0));
    }

    #[test]
    fn test_pair_new() {
        let p = Pair::new(PairColor::Red, PairColor::Blue);
        assert_eq!(p.axis, PairColor::Red);
        assert_eq!(p.child, PairColor::Blue);
    }
}
