//! The game container: state sequence, cursor, branch-on-write navigation.
//!
//! `history` is ordered newest-first; index 0 is the most recent state and
//! the sequence is never empty. Navigation only moves the cursor. A move
//! made while the cursor sits on an older state permanently discards every
//! state newer than the viewed one before the successor is prepended —
//! branching replaces the future, it does not fork it, so exactly one
//! timeline exists at any moment.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::State;
use crate::core::{BoardSize, GameConfig, KoRule, Pos, RuleViolation};

/// A game: its recorded states, a cursor, and the repetition rule.
///
/// `Game` is a pure value like [`State`]: every operation returns a new
/// `Game` and leaves its input untouched. The persistent vector makes the
/// truncate-and-prepend branch rule cheap — the kept tail is shared, never
/// copied.
///
/// ```
/// use goban_core::{BoardSize, Game};
///
/// let size = BoardSize::NINE;
/// let game = Game::new(size).play(size.at(2, 2)).unwrap();
///
/// // The same point is now occupied.
/// let err = game.play(size.at(2, 2)).unwrap_err();
/// assert_eq!(format!("{}", err), "Pos(20) is already occupied");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    history: Vector<State>,
    cursor: usize,
    ko: KoRule,
}

impl Game {
    /// Start a game on an empty board with the default rules.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self::with_config(GameConfig::new(size))
    }

    /// Start a game from a configuration.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        let mut history = Vector::new();
        history.push_back(State::empty(config.size));
        Self {
            history,
            cursor: 0,
            ko: config.ko,
        }
    }

    /// The currently viewed state.
    ///
    /// Panics if the cursor is out of range. That can only happen after an
    /// unvalidated [`jump`](Self::jump), which is a caller bug rather than
    /// a recoverable condition.
    #[must_use]
    pub fn state(&self) -> &State {
        &self.history[self.cursor]
    }

    /// Number of recorded states. At least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always `false`: a game starts with its empty-board state and
    /// truncation never drops the viewed state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Cursor into the history (0 = newest).
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The configured repetition rule.
    #[must_use]
    pub fn ko_rule(&self) -> KoRule {
        self.ko
    }

    /// `true` iff `index` addresses a recorded state.
    ///
    /// ```
    /// use goban_core::{BoardSize, Game};
    ///
    /// let game = Game::new(BoardSize::NINE);
    /// assert!(game.contains_index(0));
    /// assert!(!game.contains_index(1));
    /// ```
    #[must_use]
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.history.len()
    }

    /// Iterate over the recorded states, newest first.
    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.history.iter()
    }

    /// Attempt a placement from the viewed state.
    ///
    /// On success the superseded future (states newer than the viewed one)
    /// is discarded, the successor is prepended, and the cursor returns to
    /// the newest state. On failure the engine's rejection is returned
    /// verbatim and `self` is unchanged.
    pub fn play(&self, pos: Pos) -> Result<Game, RuleViolation> {
        let next = self.state().place(pos)?;
        if self.repeats(&next) {
            debug!(%pos, "rejected: position repetition");
            return Err(RuleViolation::KoViolation { pos });
        }
        Ok(self.branch(next))
    }

    /// Record a pass: same position, other color to move.
    ///
    /// Always legal. Exempt from repetition checking (a pass repeats the
    /// position by definition) and subject to the same branch rule as a
    /// placement.
    #[must_use]
    pub fn pass(&self) -> Game {
        self.branch(self.state().pass())
    }

    /// Move the cursor without validation.
    ///
    /// The sequence itself is never touched, so previously reachable states
    /// stay reachable until a move branches over them. Out-of-range indices
    /// are not clamped or corrected; validate with
    /// [`contains_index`](Self::contains_index) or use
    /// [`try_jump`](Self::try_jump), since [`state`](Self::state) panics on
    /// a dangling cursor.
    #[must_use]
    pub fn jump(&self, index: usize) -> Game {
        Game {
            history: self.history.clone(),
            cursor: index,
            ko: self.ko,
        }
    }

    /// Checked navigation.
    pub fn try_jump(&self, index: usize) -> Result<Game, RuleViolation> {
        if !self.contains_index(index) {
            return Err(RuleViolation::InvalidNavigation {
                index,
                len: self.history.len(),
            });
        }
        Ok(self.jump(index))
    }

    /// Placements legal from the viewed state, repetition included.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Pos> {
        let state = self.state();
        state
            .size()
            .all()
            .filter(|&pos| match state.place(pos) {
                Ok(next) => !self.repeats(&next),
                Err(_) => false,
            })
            .collect()
    }

    /// Truncate the superseded future and prepend `next`.
    fn branch(&self, next: State) -> Game {
        let mut history = self.history.skip(self.cursor);
        history.push_front(next);
        Game {
            history,
            cursor: 0,
            ko: self.ko,
        }
    }

    /// Does `next` recreate a position the configured repetition rule
    /// forbids? Only states visible from the cursor count — a branched-away
    /// future cannot cause a violation.
    fn repeats(&self, next: &State) -> bool {
        let window = match self.ko {
            KoRule::Off => return false,
            KoRule::Recent(plies) => plies,
            KoRule::Superko => self.history.len(),
        };
        self.history
            .iter()
            .skip(self.cursor)
            .take(window)
            .any(|prior| prior.positions() == next.positions())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::with_config(GameConfig::default())
    }
}
