//! Cascade core crate - fundamental types for both puzzle games.

mod board;
mod moves;
mod pair;
mod pair_board;
mod piece;
mod state;

pub use board::Board;
pub use moves::{Move, PairMove, SpinType};
pub use pair::{Orientation, Pair};
pub use pair_board::{Group, PairBoard, PairColor};
pub use piece::{Piece, Rotation};
pub use state::{GameState, PairState};
