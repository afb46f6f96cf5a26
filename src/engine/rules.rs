//! Game session configuration

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Rules for one game session.
///
/// Built from a preset and adjusted with builder methods:
///
/// ```
/// use qgame::{GameRules, Player};
///
/// let rules = GameRules::standard()
///     .with_starting_player(Player::O)
///     .with_max_turns(20)
///     .with_freeze_window(2);
/// assert_eq!(rules.max_turns, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    /// Who makes the first move
    pub starting_player: Player,
    /// Number of accepted moves that ends the game (ignored in hardcore)
    pub max_turns: usize,
    /// Number of trailing moves during which a played cell cannot be
    /// replayed (0 disables freezing)
    pub freeze_window: usize,
    /// End the game on full grid coverage instead of a move count
    pub hardcore: bool,
}

impl GameRules {
    /// Standard rules: X starts, 14 turns, cells freeze for 1 turn.
    pub fn standard() -> Self {
        GameRules {
            starting_player: Player::X,
            max_turns: 14,
            freeze_window: 1,
            hardcore: false,
        }
    }

    /// Hardcore rules: the game ends once every cell has been played at
    /// least once; cells freeze for 1 turn.
    pub fn hardcore() -> Self {
        GameRules {
            hardcore: true,
            ..GameRules::standard()
        }
    }

    /// Set the starting player.
    pub fn with_starting_player(mut self, player: Player) -> Self {
        self.starting_player = player;
        self
    }

    /// Set the move count that ends a non-hardcore game.
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set the freeze window.
    pub fn with_freeze_window(mut self, freeze_window: usize) -> Self {
        self.freeze_window = freeze_window;
        self
    }

    /// Check the configuration is playable.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] when `max_turns`
    /// is zero for a non-hardcore game.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if !self.hardcore && self.max_turns == 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: "max_turns must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for GameRules {
    fn default() -> Self {
        GameRules::standard()
    }
}
