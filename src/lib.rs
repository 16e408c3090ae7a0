//! # goban-core
//!
//! An immutable rules engine and history manager for the game of Go.
//!
//! ## Design Principles
//!
//! 1. **Pure values**: every operation takes a state or game by reference
//!    and returns a new one. Nothing is mutated in place, so snapshots can
//!    be shared freely across readers without synchronization.
//!
//! 2. **Cheap snapshots**: states and histories use persistent data
//!    structures (`im`), so each move shares structure with its predecessor
//!    instead of copying the board.
//!
//! 3. **Typed rejections**: illegal moves are ordinary, expected outcomes.
//!    Every failure is a [`RuleViolation`] variant returned before anything
//!    is committed.
//!
//! ## Architecture
//!
//! - **Board/State Engine**: [`State`] snapshots plus the group/liberty
//!   traversal that decides legality and resolves captures. Opposing groups
//!   are captured before the mover's own liberties are checked, so a capture
//!   can legalize an otherwise-suicidal point.
//!
//! - **History Manager**: [`Game`] holds a newest-first sequence of states
//!   and a cursor. Navigation moves the cursor; a placement made from an
//!   older state discards the superseded future and prepends the successor
//!   (branch-on-rewind). Repetition (ko) is checked here, against the viewed
//!   timeline.
//!
//! ## Example
//!
//! ```
//! use goban_core::{BoardSize, Game};
//!
//! let size = BoardSize::NINE;
//! let game = Game::new(size);
//! let game = game.play(size.at(4, 4)).unwrap();
//! let game = game.play(size.at(3, 4)).unwrap();
//!
//! // Rewind one move and branch: the newer state is discarded.
//! let rewound = game.jump(1);
//! let branched = rewound.play(size.at(5, 5)).unwrap();
//! assert_eq!(branched.len(), 3);
//! ```
//!
//! ## Modules
//!
//! - `core`: colors, cells, board geometry, configuration, rejections
//! - `board`: immutable states, groups and liberties, placement rules
//! - `history`: the game container and time-travel cursor

pub mod core;
pub mod board;
pub mod history;

// Re-export commonly used types
pub use crate::core::{
    BoardSize, Cell, Color, ColorMap, GameConfig, KoRule, Pos, RuleViolation,
};

pub use crate::board::{Group, State};

pub use crate::history::Game;
