//! Crate-level error taxonomy.
//!
//! Kept deliberately small: the core only ever fails at its text-parsing
//! boundaries (FEN, square/move notation). Anything inside move generation
//! or search that would indicate a broken invariant is a programmer error
//! and panics instead of returning a `Result`.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error("malformed FEN: {0}")]
    MalformedFen(String),

    #[error("malformed square notation: {0:?}")]
    MalformedSquare(String),

    #[error("malformed move notation: {0:?}")]
    MalformedMoveText(String),

    #[error("illegal move: {0:?}")]
    IllegalMove(String),

    #[error("illegal position: {0}")]
    IllegalPosition(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
