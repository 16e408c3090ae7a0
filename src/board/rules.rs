//! Placement legality and capture resolution.
//!
//! Evaluation order is the heart of the rules: after the tentative stone
//! goes down, adjacent opposing groups with no liberties are removed first,
//! and only then is the mover's own group checked. A capture can therefore
//! free the liberty that legalizes an otherwise-suicidal point.

use tracing::debug;

use crate::core::{Cell, Pos, RuleViolation};

use super::state::State;

impl State {
    /// Attempt to place a stone for the current mover.
    ///
    /// On success returns the successor state: captures resolved, the
    /// mover's capture tally updated, and the turn flipped. On failure the
    /// rejection names the violated rule and `self` is untouched — the
    /// tentative board never escapes this function.
    ///
    /// Repetition (ko) is not checked here; it needs history context and is
    /// applied by [`Game::play`](crate::history::Game::play).
    pub fn place(&self, pos: Pos) -> Result<State, RuleViolation> {
        if !self.size.contains(pos) {
            return Err(RuleViolation::OutOfBounds {
                pos,
                size: self.size,
            });
        }
        if !self.cell(pos).is_empty() {
            return Err(RuleViolation::CellOccupied { pos });
        }

        let mover = self.current;
        let mut next = self.clone();
        next.positions.set(pos.index(), Cell::Stone(mover));

        // Remove adjacent opposing groups that just lost their last liberty.
        // A group reached through a second neighbor has already been cleared
        // off the board, so the occupancy check skips it.
        let mut captured = 0u32;
        for neighbor in self.size.neighbors(pos) {
            if !next.cell(neighbor).is_stone(mover.opponent()) {
                continue;
            }
            let Some(group) = next.group_at(neighbor) else {
                continue;
            };
            if !group.is_captured() {
                continue;
            }
            captured += group.stones.len() as u32;
            for &stone in &group.stones {
                next.positions.set(stone.index(), Cell::Empty);
            }
        }

        // The mover's own group must end the move with a liberty.
        if let Some(own) = next.group_at(pos) {
            if own.is_captured() {
                return Err(RuleViolation::SuicidalMove { pos });
            }
        }

        if captured > 0 {
            next.captures[mover] += captured;
            debug!(%pos, %mover, captured, "captured opposing stones");
        }
        next.current = mover.opponent();
        Ok(next)
    }

    /// Enumerate the placements [`place`](Self::place) would accept from
    /// this state.
    ///
    /// Repetition is not considered;
    /// [`Game::legal_moves`](crate::history::Game::legal_moves) filters ko.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Pos> {
        self.size
            .all()
            .filter(|&pos| self.place(pos).is_ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardSize, Color};

    /// Build a state with the given stones via the public API, using passes
    /// to control whose turn it is. Placements must not trigger captures.
    fn state_with(size: BoardSize, black: &[(u16, u16)], white: &[(u16, u16)]) -> State {
        let mut state = State::empty(size);
        for &(x, y) in black {
            state = state.place(size.at(x, y)).unwrap();
            state = state.pass();
        }
        state = state.pass();
        for &(x, y) in white {
            state = state.place(size.at(x, y)).unwrap();
            state = state.pass();
        }
        state
    }

    #[test]
    fn test_place_flips_mover() {
        let size = BoardSize::NINE;
        let state = State::empty(size);
        let next = state.place(size.at(4, 4)).unwrap();

        assert_eq!(next.cell(size.at(4, 4)), Cell::Stone(Color::Black));
        assert_eq!(next.current(), Color::White);
        // The predecessor is untouched.
        assert_eq!(state.cell(size.at(4, 4)), Cell::Empty);
        assert_eq!(state.current(), Color::Black);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let state = State::empty(BoardSize::NINE);
        let err = state.place(Pos::new(81)).unwrap_err();
        assert!(matches!(err, RuleViolation::OutOfBounds { .. }));
    }

    #[test]
    fn test_occupied_rejected() {
        let size = BoardSize::NINE;
        let state = State::empty(size).place(size.at(2, 2)).unwrap();

        let err = state.place(size.at(2, 2)).unwrap_err();
        assert_eq!(
            err,
            RuleViolation::CellOccupied {
                pos: size.at(2, 2)
            }
        );
    }

    #[test]
    fn test_corner_capture() {
        let size = BoardSize::NINE;
        // White corner stone with one liberty left at (0, 1).
        let state = state_with(size, &[(1, 0)], &[(0, 0)]);
        assert_eq!(state.current(), Color::White);
        let state = state.pass();

        let next = state.place(size.at(0, 1)).unwrap();
        assert_eq!(next.cell(size.at(0, 0)), Cell::Empty);
        assert_eq!(next.captured_by(Color::Black), 1);
        assert_eq!(next.captured_by(Color::White), 0);
    }

    #[test]
    fn test_multi_stone_group_capture() {
        let size = BoardSize::NINE;
        // Two white stones in the corner, surrounded by black except (2, 0).
        let state = state_with(
            size,
            &[(0, 1), (1, 1)],
            &[(0, 0), (1, 0)],
        );
        let state = state.pass();
        assert_eq!(state.current(), Color::Black);

        let next = state.place(size.at(2, 0)).unwrap();
        assert_eq!(next.cell(size.at(0, 0)), Cell::Empty);
        assert_eq!(next.cell(size.at(1, 0)), Cell::Empty);
        assert_eq!(next.captured_by(Color::Black), 2);
    }

    #[test]
    fn test_one_move_captures_two_groups() {
        let size = BoardSize::new(5);
        // Two separate white stones, each with (2, 1) as the last liberty.
        let state = state_with(
            size,
            &[(0, 1), (1, 0), (1, 2), (3, 0), (3, 2), (4, 1)],
            &[(1, 1), (3, 1)],
        );
        let state = state.pass();
        assert_eq!(state.current(), Color::Black);

        let next = state.place(size.at(2, 1)).unwrap();
        assert_eq!(next.cell(size.at(1, 1)), Cell::Empty);
        assert_eq!(next.cell(size.at(3, 1)), Cell::Empty);
        assert_eq!(next.captured_by(Color::Black), 2);
    }

    #[test]
    fn test_suicide_rejected() {
        // 2x2 board: White on two cells, Black plays the corner they
        // surround. Neither white group is capturable, so the placement
        // would leave Black's stone with no liberties.
        let size = BoardSize::new(2);
        let state = state_with(size, &[], &[(1, 0), (0, 1)]);
        let state = state.pass();
        assert_eq!(state.current(), Color::Black);

        let err = state.place(size.at(0, 0)).unwrap_err();
        assert_eq!(
            err,
            RuleViolation::SuicidalMove {
                pos: size.at(0, 0)
            }
        );
        // No observable mutation on the rejection path.
        assert_eq!(state.cell(size.at(0, 0)), Cell::Empty);
        assert_eq!(state.stone_count(Color::White), 2);
    }

    #[test]
    fn test_capture_legalizes_suicidal_point() {
        // Same corner, but now the whole white group has (0, 0) as its only
        // liberty: the placement captures first, then re-evaluates.
        let size = BoardSize::new(2);
        let state = state_with(size, &[], &[(1, 0), (0, 1), (1, 1)]);
        let state = state.pass();
        assert_eq!(state.current(), Color::Black);

        let next = state.place(size.at(0, 0)).unwrap();
        assert_eq!(next.cell(size.at(0, 0)), Cell::Stone(Color::Black));
        assert_eq!(next.cell(size.at(1, 0)), Cell::Empty);
        assert_eq!(next.cell(size.at(0, 1)), Cell::Empty);
        assert_eq!(next.cell(size.at(1, 1)), Cell::Empty);
        assert_eq!(next.captured_by(Color::Black), 3);
    }

    #[test]
    fn test_two_by_two_linear_scenario() {
        // 4-cell board: Black takes 0, then White takes 1. A single white
        // stone is not enough surround, so nothing is captured.
        let size = BoardSize::new(2);
        let state = State::empty(size);

        let state = state.place(Pos::new(0)).unwrap();
        assert_eq!(state.cell(Pos::new(0)), Cell::Stone(Color::Black));
        assert_eq!(state.current(), Color::White);

        let state = state.place(Pos::new(1)).unwrap();
        assert_eq!(state.cell(Pos::new(0)), Cell::Stone(Color::Black));
        assert_eq!(state.cell(Pos::new(1)), Cell::Stone(Color::White));
        assert_eq!(state.cell(Pos::new(2)), Cell::Empty);
        assert_eq!(state.cell(Pos::new(3)), Cell::Empty);
        assert_eq!(state.current(), Color::Black);
    }

    #[test]
    fn test_legal_moves_excludes_occupied_and_suicidal() {
        let size = BoardSize::new(2);
        let state = state_with(size, &[], &[(1, 0), (0, 1)]);

        // White to move: both empty points connect to living white stones.
        assert_eq!(state.legal_moves(), vec![size.at(0, 0), size.at(1, 1)]);
        // Black to move: both empty points are suicide.
        assert!(state.pass().legal_moves().is_empty());
    }

    #[test]
    fn test_legal_moves_on_empty_board() {
        let state = State::empty(BoardSize::NINE);
        assert_eq!(state.legal_moves().len(), 81);
    }
}
