//! Game state representations.
//!
//! States are value-like: every simulated step operates on an independent
//! deep copy, so the beam can hold many concurrent clones without aliasing.

use crate::{Board, Pair, PairBoard, Piece};
use serde::{Deserialize, Serialize};

/// Line-game state: board, active piece, hold slot, lookahead queue.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub current: Option<Piece>,
    pub hold: Option<Piece>,
    /// One hold per drop; reset externally when a new piece spawns.
    pub can_hold: bool,
    pub queue: Vec<Piece>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::new(),
            current: None,
            hold: None,
            can_hold: true,
            queue: Vec::new(),
        }
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_queue(queue: Vec<Piece>) -> Self {
        let current = queue.first().copied();
        Self {
            queue: if queue.is_empty() {
                queue
            } else {
                queue[1..].to_vec()
            },
            current,
            ..Self::default()
        }
    }
}

/// Pair-game state: board, active pair, lookahead queue, loss flag.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PairState {
    pub board: PairBoard,
    pub current: Option<Pair>,
    pub queue: Vec<Pair>,
    pub game_over: bool,
}

impl Default for PairState {
    fn default() -> Self {
        Self {
            board: PairBoard::new(),
            current: None,
            queue: Vec::new(),
            game_over: false,
        }
    }
}

impl PairState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the front of the queue into the active slot.
    /// The active slot stays empty once the queue runs dry.
    pub fn advance_queue(&mut self) {
        self.current = if self.queue.is_empty() {
            None
        } else {
            Some(self.queue.remove(0))
        };
    }
}
