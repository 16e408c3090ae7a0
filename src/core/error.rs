//! Typed move rejections.
//!
//! Every failure in the crate is one of these variants, detected before any
//! state is committed. A rejected operation leaves its inputs untouched, and
//! the history manager propagates engine rejections verbatim — nothing is
//! caught, masked, or rewrapped between layers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::position::{BoardSize, Pos};

/// Why a move or navigation request was rejected.
///
/// All variants are ordinary, expected outcomes of invalid input; there are
/// no retries (the same input always yields the same result) and no fatal
/// errors at this layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RuleViolation {
    /// The position does not correspond to an intersection on the board.
    #[error("{pos} is outside the {size} board")]
    OutOfBounds { pos: Pos, size: BoardSize },

    /// The target intersection already holds a stone.
    #[error("{pos} is already occupied")]
    CellOccupied { pos: Pos },

    /// After capture resolution the mover's own group has no liberties.
    #[error("placing at {pos} would be suicide")]
    SuicidalMove { pos: Pos },

    /// The resulting position recreates a forbidden prior position.
    #[error("placing at {pos} recreates a prior position")]
    KoViolation { pos: Pos },

    /// A checked navigation target is outside the history.
    #[error("history index {index} out of range (length {len})")]
    InvalidNavigation { index: usize, len: usize },
}
