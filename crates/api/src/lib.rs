//! cascade-api - the external move-query surface.
//!
//! Converts caller-side board and piece encodings into the internal model
//! via caller-supplied mapping tables, runs the searches, and returns
//! plain-data decisions. Malformed input fails with a typed error rather
//! than ever producing an illegal action.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use cascade_core::{Board, GameState, Orientation, Pair, PairBoard, PairColor, PairState, Piece, Rotation};
use cascade_search::{LineSearch, PairSearch};

pub use cascade_core::{Move, PairMove, SpinType};
pub use cascade_engine::{line_ghost_cells, pair_ghost_cells, try_wall_kick, GhostCell};
pub use cascade_eval::{
    ChainDistribution, ChainPrediction, LineWeights, LoadState, NullEstimator, PairWeights,
    PotentialEstimator, PredictError, CHAIN_CLASSES,
};
pub use cascade_search::{
    LINE_BEAM_WIDTH, LINE_SEARCH_DEPTH, PAIR_BEAM_WIDTH, PAIR_SEARCH_DEPTH, PREDICTOR_TOP_K,
};

/// Caller color token -> internal pair color.
pub type ColorMap = HashMap<String, PairColor>;
/// Caller piece token -> internal piece.
pub type PieceMap = HashMap<String, Piece>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("board has {rows} rows, expected {expected}")]
    BadRowCount { rows: usize, expected: usize },
    #[error("row {row} has {cells} cells, expected {expected}")]
    BadRowWidth {
        row: usize,
        cells: usize,
        expected: usize,
    },
    #[error("unmapped color token `{0}`")]
    UnknownColor(String),
    #[error("unmapped piece token `{0}`")]
    UnknownPiece(String),
}

/// Chosen pair placement plus the search's internal score for diagnostics.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PairDecision {
    pub column: i8,
    pub orientation: Orientation,
    pub score: f32,
    pub max_chain: u32,
}

/// Chosen line-game placement plus diagnostics.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct LineDecision {
    pub column: i8,
    pub rotation: Rotation,
    pub use_hold: bool,
    pub score: f32,
}

/// The conventional one-letter piece names.
pub fn standard_piece_map() -> PieceMap {
    let mut map = PieceMap::new();
    map.insert("I".into(), Piece::I);
    map.insert("O".into(), Piece::O);
    map.insert("T".into(), Piece::T);
    map.insert("S".into(), Piece::S);
    map.insert("Z".into(), Piece::Z);
    map.insert("J".into(), Piece::J);
    map.insert("L".into(), Piece::L);
    map
}

fn lookup_color(token: &str, map: &ColorMap) -> Result<PairColor, ApiError> {
    map.get(token)
        .copied()
        .ok_or_else(|| ApiError::UnknownColor(token.to_string()))
}

fn lookup_piece(token: &str, map: &PieceMap) -> Result<Piece, ApiError> {
    map.get(token)
        .copied()
        .ok_or_else(|| ApiError::UnknownPiece(token.to_string()))
}

/// Build a pair board from caller rows, ordered top row first (hidden row
/// included). Every token must be mapped; `None` cells are empty.
pub fn pair_board_from_rows(
    rows: &[Vec<Option<&str>>],
    map: &ColorMap,
) -> Result<PairBoard, ApiError> {
    if rows.len() != PairBoard::TOTAL_HEIGHT {
        return Err(ApiError::BadRowCount {
            rows: rows.len(),
            expected: PairBoard::TOTAL_HEIGHT,
        });
    }

    let mut board = PairBoard::new();
    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != PairBoard::WIDTH {
            return Err(ApiError::BadRowWidth {
                row,
                cells: cells.len(),
                expected: PairBoard::WIDTH,
            });
        }
        let y = PairBoard::TOTAL_HEIGHT - 1 - row;
        for (x, cell) in cells.iter().enumerate() {
            if let Some(token) = cell {
                board.set(x, y, Some(lookup_color(token, map)?));
            }
        }
    }
    Ok(board)
}

/// Build a line-game board from caller occupancy rows, top row first
/// (hidden rows included).
pub fn line_board_from_rows(rows: &[Vec<bool>]) -> Result<Board, ApiError> {
    if rows.len() != Board::HEIGHT {
        return Err(ApiError::BadRowCount {
            rows: rows.len(),
            expected: Board::HEIGHT,
        });
    }

    let mut board = Board::new();
    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != Board::WIDTH {
            return Err(ApiError::BadRowWidth {
                row,
                cells: cells.len(),
                expected: Board::WIDTH,
            });
        }
        let y = Board::HEIGHT - 1 - row;
        for (x, &filled) in cells.iter().enumerate() {
            if filled {
                board.set(x, y, true);
            }
        }
    }
    Ok(board)
}

/// Move query for the pair game. `current` and `next` are (axis, child)
/// token pairs; `estimator` is consulted on stable boards when it is ready.
pub fn find_best_pair_move(
    rows: &[Vec<Option<&str>>],
    current: (&str, &str),
    next: Option<(&str, &str)>,
    color_map: &ColorMap,
    estimator: Option<&dyn PotentialEstimator>,
) -> Result<PairDecision, ApiError> {
    let board = pair_board_from_rows(rows, color_map)?;
    let current = Pair::new(
        lookup_color(current.0, color_map)?,
        lookup_color(current.1, color_map)?,
    );
    let mut queue = Vec::new();
    if let Some((axis, child)) = next {
        queue.push(Pair::new(
            lookup_color(axis, color_map)?,
            lookup_color(child, color_map)?,
        ));
    }

    let state = PairState {
        board,
        current: Some(current),
        queue,
        game_over: false,
    };

    let search = PairSearch::default();
    let choice = search.search(&state, estimator);
    Ok(PairDecision {
        column: choice.action.column,
        orientation: choice.action.orientation,
        score: choice.score,
        max_chain: choice.max_chain,
    })
}

/// Move query for the line game. Returns Ok(None) when no placement exists
/// for any first-piece option - an already-lost state, not an error.
pub fn find_best_line_move(
    rows: &[Vec<bool>],
    current: &str,
    queue: &[&str],
    hold: Option<&str>,
    can_hold: bool,
    piece_map: &PieceMap,
) -> Result<Option<LineDecision>, ApiError> {
    let board = line_board_from_rows(rows)?;
    let current = lookup_piece(current, piece_map)?;
    let queue = queue
        .iter()
        .map(|token| lookup_piece(token, piece_map))
        .collect::<Result<Vec<_>, _>>()?;
    let hold = hold.map(|token| lookup_piece(token, piece_map)).transpose()?;

    let state = GameState {
        board,
        current: Some(current),
        hold,
        can_hold,
        queue,
    };

    let search = LineSearch::default();
    Ok(search.search(&state).map(|choice| LineDecision {
        column: choice.action.x,
        rotation: choice.action.rotation,
        use_hold: choice.action.hold_used,
        score: choice.score,
    }))
}
