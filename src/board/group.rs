//! Connected groups and their liberties.
//!
//! A group is a maximal set of same-colored stones connected by orthogonal
//! adjacency. Groups are never stored; they are recomputed on demand by a
//! breadth-first traversal from a seed stone. The member set doubles as the
//! visited set, so every query touches each cell at most once and a
//! legality check stays O(board size).

use rustc_hash::FxHashSet;
use std::collections::VecDeque;

use crate::core::{Cell, Color, Pos};

use super::state::State;

/// A maximal connected set of same-colored stones and its liberties.
///
/// Every stone on a board belongs to exactly one group of its color at any
/// instant. A group whose liberty set is empty is captured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    /// Color of every member stone.
    pub color: Color,

    /// The member stones.
    pub stones: FxHashSet<Pos>,

    /// Empty intersections orthogonally adjacent to any member.
    pub liberties: FxHashSet<Pos>,
}

impl Group {
    /// Number of liberties.
    #[must_use]
    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }

    /// A group with no liberties is captured.
    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.liberties.is_empty()
    }
}

impl State {
    /// Compute the group containing the stone at `seed`.
    ///
    /// Returns `None` if `seed` is empty or out of bounds.
    #[must_use]
    pub fn group_at(&self, seed: Pos) -> Option<Group> {
        let color = self.get(seed)?.stone()?;

        let mut stones = FxHashSet::default();
        let mut liberties = FxHashSet::default();
        let mut queue = VecDeque::new();

        stones.insert(seed);
        queue.push_back(seed);

        while let Some(pos) = queue.pop_front() {
            for neighbor in self.size().neighbors(pos) {
                match self.cell(neighbor) {
                    Cell::Empty => {
                        liberties.insert(neighbor);
                    }
                    Cell::Stone(c) if c == color => {
                        if stones.insert(neighbor) {
                            queue.push_back(neighbor);
                        }
                    }
                    Cell::Stone(_) => {}
                }
            }
        }

        Some(Group {
            color,
            stones,
            liberties,
        })
    }
}
