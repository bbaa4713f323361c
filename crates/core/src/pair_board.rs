//! pair-game board - flat row-major color grid with exclusive ownership
//!
//! Cloning is a full value copy; beam members never share cells.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The four pair colors. Cell identity only - rendering is external.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum PairColor {
    Red,
    Green,
    Blue,
    Yellow,
}

impl PairColor {
    pub const ALL: [PairColor; 4] = [
        PairColor::Red,
        PairColor::Green,
        PairColor::Blue,
        PairColor::Yellow,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// A 4-connected same-color component found by flood fill.
#[derive(Clone, Debug)]
pub struct Group {
    pub color: PairColor,
    pub cells: Vec<(u8, u8)>,
}

impl Group {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

const CELLS: usize = PairBoard::WIDTH * PairBoard::TOTAL_HEIGHT;

/// 6x13 pair-game board, row-major `Option<PairColor>` cells.
/// Row 0 is bottom; row 12 is the hidden band above the visible field.
/// Invariant: gravity-settled after any resolution step completes.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PairBoard {
    cells: [Option<PairColor>; CELLS],
}

impl Default for PairBoard {
    fn default() -> Self {
        Self {
            cells: [None; CELLS],
        }
    }
}

impl PairBoard {
    pub const WIDTH: usize = 6;
    pub const VISIBLE_HEIGHT: usize = 12;
    pub const HIDDEN_ROWS: usize = 1;
    pub const TOTAL_HEIGHT: usize = 13;
    /// Pairs enter the field above this column.
    pub const SPAWN_COLUMN: usize = 2;

    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn idx(x: usize, y: usize) -> usize {
        y * Self::WIDTH + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<PairColor> {
        self.cells[Self::idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: Option<PairColor>) {
        self.cells[Self::idx(x, y)] = cell;
    }

    /// Occupied rows from the top-most occupied cell down to the floor.
    /// Empty column -> 0.
    pub fn column_height(&self, x: usize) -> usize {
        for y in (0..Self::TOTAL_HEIGHT).rev() {
            if self.get(x, y).is_some() {
                return y + 1;
            }
        }
        0
    }

    pub fn cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Drop every floating cell until blocked. One column at a time;
    /// colors keep their relative order.
    pub fn apply_gravity(&mut self) {
        for x in 0..Self::WIDTH {
            let mut write = 0;
            for y in 0..Self::TOTAL_HEIGHT {
                if let Some(color) = self.get(x, y) {
                    if write != y {
                        self.set(x, write, Some(color));
                        self.set(x, y, None);
                    }
                    write += 1;
                }
            }
        }
    }

    /// All 4-connected same-color components, via flood fill with an
    /// explicit stack (visited-once, 4-directional).
    pub fn groups(&self) -> Vec<Group> {
        let mut visited = [false; CELLS];
        let mut groups = Vec::new();
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for y in 0..Self::TOTAL_HEIGHT {
            for x in 0..Self::WIDTH {
                let Some(color) = self.get(x, y) else {
                    continue;
                };
                if visited[Self::idx(x, y)] {
                    continue;
                }

                let mut cells = Vec::new();
                visited[Self::idx(x, y)] = true;
                stack.push((x, y));
                while let Some((cx, cy)) = stack.pop() {
                    cells.push((cx as u8, cy as u8));
                    let mut push = |nx: usize, ny: usize| {
                        if self.get(nx, ny) == Some(color) && !visited[Self::idx(nx, ny)] {
                            visited[Self::idx(nx, ny)] = true;
                            stack.push((nx, ny));
                        }
                    };
                    if cx > 0 {
                        push(cx - 1, cy);
                    }
                    if cx + 1 < Self::WIDTH {
                        push(cx + 1, cy);
                    }
                    if cy > 0 {
                        push(cx, cy - 1);
                    }
                    if cy + 1 < Self::TOTAL_HEIGHT {
                        push(cx, cy + 1);
                    }
                }

                groups.push(Group { color, cells });
            }
        }

        groups
    }

    /// Clear every component of size >= 4 simultaneously.
    /// Returns the number of cells popped.
    pub fn pop_groups(&mut self) -> u32 {
        let mut popped = 0u32;
        for group in self.groups() {
            if group.len() >= 4 {
                for &(x, y) in &group.cells {
                    self.set(x as usize, y as usize, None);
                    popped += 1;
                }
            }
        }
        popped
    }
}

impl Serialize for PairBoard {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let codes: Vec<i8> = self
            .cells
            .iter()
            .map(|c| c.map_or(-1, |color| color.index() as i8))
            .collect();
        codes.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PairBoard {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let codes: Vec<i8> = Vec::deserialize(deserializer)?;
        if codes.len() != CELLS {
            return Err(serde::de::Error::custom("expected 78 cells"));
        }
        let mut board = PairBoard::new();
        for (i, &code) in codes.iter().enumerate() {
            board.cells[i] = match code {
                -1 => None,
                c => Some(
                    PairColor::from_index(c as usize)
                        .ok_or_else(|| serde::de::Error::custom("color code out of range"))?,
                ),
            };
        }
        Ok(board)
    }
}

impl std::fmt::Display for PairBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in (0..Self::VISIBLE_HEIGHT).rev() {
            for x in 0..Self::WIDTH {
                let ch = match self.get(x, y) {
                    Some(PairColor::Red) => 'R',
                    Some(PairColor::Green) => 'G',
                    Some(PairColor::Blue) => 'B',
                    Some(PairColor::Yellow) => 'Y',
                    None => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get() {
        let mut b = PairBoard::new();
        b.set(3, 5, Some(PairColor::Red));
        assert_eq!(b.get(3, 5), Some(PairColor::Red));
        assert_eq!(b.get(2, 5), None);
    }

    #[test]
    fn test_column_height_ignores_gaps() {
        let mut b = PairBoard::new();
        b.set(1, 0, Some(PairColor::Blue));
        b.set(1, 3, Some(PairColor::Green));
        assert_eq!(b.column_height(1), 4);
        assert_eq!(b.column_height(0), 0);
    }

    #[test]
    fn test_gravity_compacts_column() {
        let mut b = PairBoard::new();
        b.set(2, 5, Some(PairColor::Red));
        b.set(2, 8, Some(PairColor::Yellow));
        b.apply_gravity();
        assert_eq!(b.get(2, 0), Some(PairColor::Red));
        assert_eq!(b.get(2, 1), Some(PairColor::Yellow));
        assert_eq!(b.get(2, 5), None);
        assert_eq!(b.get(2, 8), None);
    }

    #[test]
    fn test_groups_four_directional() {
        let mut b = PairBoard::new();
        // L-shaped red group of 3 plus a diagonal red that must not join
        b.set(0, 0, Some(PairColor::Red));
        b.set(0, 1, Some(PairColor::Red));
        b.set(1, 0, Some(PairColor::Red));
        b.set(2, 1, Some(PairColor::Red));
        let groups = b.groups();
        let sizes: Vec<usize> = groups.iter().map(Group::len).collect();
        assert!(sizes.contains(&3));
        assert!(sizes.contains(&1));
    }

    #[test]
    fn test_pop_groups_clears_only_big_groups() {
        let mut b = PairBoard::new();
        for y in 0..4 {
            b.set(0, y, Some(PairColor::Green));
        }
        b.set(1, 0, Some(PairColor::Red));
        assert_eq!(b.pop_groups(), 4);
        assert_eq!(b.get(0, 0), None);
        assert_eq!(b.get(1, 0), Some(PairColor::Red));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut b = PairBoard::new();
        b.set(4, 2, Some(PairColor::Yellow));
        let json = serde_json::to_string(&b).expect("serialize");
        let back: PairBoard = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(b, back);
    }
}
