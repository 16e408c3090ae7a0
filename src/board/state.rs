//! Immutable board snapshots.
//!
//! A `State` is one position in a game: the grid contents, whose turn it is,
//! and the running capture tallies. States are never mutated after
//! construction — every move builds a new one. The `im` persistent vector
//! keeps successors cheap by sharing structure with their predecessor, so a
//! long history does not cost a full board copy per move.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{BoardSize, Cell, Color, ColorMap, Pos};

/// One immutable snapshot of the game.
///
/// The grid length is fixed at creation (`size.cells()`) and never changes
/// across the lifetime of a game. A state alone is sufficient to resume
/// play: it carries the mover as well as the position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub(crate) size: BoardSize,
    pub(crate) positions: Vector<Cell>,
    pub(crate) current: Color,
    pub(crate) captures: ColorMap<u32>,
}

impl State {
    /// Create an empty board with Black to move.
    #[must_use]
    pub fn empty(size: BoardSize) -> Self {
        Self {
            size,
            positions: std::iter::repeat(Cell::Empty).take(size.cells()).collect(),
            current: Color::Black,
            captures: ColorMap::with_value(0),
        }
    }

    /// Board geometry.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// The color to move from this state.
    #[must_use]
    pub fn current(&self) -> Color {
        self.current
    }

    /// Contents of one intersection.
    ///
    /// Panics if `pos` is out of bounds; use [`get`](Self::get) for checked
    /// access.
    #[must_use]
    pub fn cell(&self, pos: Pos) -> Cell {
        self.positions[pos.index()]
    }

    /// Contents of one intersection, or `None` out of bounds.
    #[must_use]
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.positions.get(pos.index()).copied()
    }

    /// The full grid, one cell per intersection in index order.
    #[must_use]
    pub fn positions(&self) -> &Vector<Cell> {
        &self.positions
    }

    /// Stones `color` has captured so far.
    #[must_use]
    pub fn captured_by(&self, color: Color) -> u32 {
        self.captures[color]
    }

    /// Number of stones of `color` on the board.
    #[must_use]
    pub fn stone_count(&self, color: Color) -> usize {
        self.positions.iter().filter(|c| c.is_stone(color)).count()
    }

    /// Record a pass: same position, other color to move.
    #[must_use]
    pub fn pass(&self) -> State {
        let mut next = self.clone();
        next.current = self.current.opponent();
        next
    }
}

impl fmt::Display for State {
    /// Diagnostic rendering: `x` Black, `o` White, `.` empty, one row per
    /// line, then the mover.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size.side() {
            for x in 0..self.size.side() {
                let glyph = match self.cell(self.size.at(x, y)) {
                    Cell::Empty => '.',
                    Cell::Stone(Color::Black) => 'x',
                    Cell::Stone(Color::White) => 'o',
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        write!(f, "{} to move", self.current)
    }
}
