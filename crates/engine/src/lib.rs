//! cascade-engine - board simulation for both puzzle games.
//!
//! Placement legality, SRS kicks, placement enumeration, resolution
//! (cascading chains / line clears), spin detection, ghost previews.

pub mod apply;
pub mod collision;
pub mod ghost;
pub mod kicks;
pub mod movegen;
pub mod resolve;
pub mod spin;

pub use apply::{apply_move, pair_lost, place_pair, step_pair};
pub use collision::{can_place, collides, hard_drop_y};
pub use ghost::{line_ghost_cells, pair_ghost_cells, GhostCell};
pub use kicks::{get_kicks, try_wall_kick};
pub use movegen::{enumerate_pair_moves, enumerate_placements, pair_move_legal};
pub use resolve::{chain_bonus, is_stable, resolve, ChainResult};
pub use spin::detect_spin;
