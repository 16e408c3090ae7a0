//! Game configuration.
//!
//! A game is configured at creation with its board geometry and repetition
//! rule. The engine treats the configuration as plain data and carries it
//! unchanged for the lifetime of the game.

use serde::{Deserialize, Serialize};

use super::position::BoardSize;

/// Repetition (ko) rule applied by the history manager.
///
/// A placement is checked after capture resolution: if the resulting
/// position matches a forbidden prior position, the move is rejected with
/// `KoViolation`. Comparison is over board contents only, not the mover.
/// Passes are exempt — a pass repeats the position by definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KoRule {
    /// No repetition checking.
    Off,
    /// Reject a placement whose resulting position matches any of the most
    /// recent `n` positions in the current timeline. `Recent(2)` is the
    /// simple ko rule: it forbids recreating the position the opponent just
    /// captured out of.
    Recent(usize),
    /// Reject any repeat of any position in the current timeline
    /// (positional superko).
    Superko,
}

impl Default for KoRule {
    fn default() -> Self {
        KoRule::Recent(2)
    }
}

/// Game configuration: board geometry plus the repetition rule.
///
/// ```
/// use goban_core::{BoardSize, GameConfig, KoRule};
///
/// let config = GameConfig::new(BoardSize::THIRTEEN).with_ko(KoRule::Superko);
/// assert_eq!(config.size, BoardSize::THIRTEEN);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length.
    pub size: BoardSize,

    /// Repetition rule.
    pub ko: KoRule,
}

impl GameConfig {
    /// Create a configuration with the default ko rule (simple ko).
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            ko: KoRule::default(),
        }
    }

    /// Set the repetition rule.
    #[must_use]
    pub fn with_ko(mut self, ko: KoRule) -> Self {
        self.ko = ko;
        self
    }
}
