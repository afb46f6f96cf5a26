//! Active-player tracking

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Tracks whose move is active, toggling after each accepted move.
///
/// The inactive player is always the opponent of the active one, so only
/// the active side is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    active: Player,
}

impl Turn {
    /// Create a turn with the given starting player.
    pub fn starting(player: Player) -> Self {
        Turn { active: player }
    }

    /// The player whose move it is.
    pub fn active(&self) -> Player {
        self.active
    }

    /// The player waiting for their move.
    pub fn inactive(&self) -> Player {
        self.active.opponent()
    }

    /// Swap the active and inactive players.
    pub fn switch(&mut self) {
        self.active = self.active.opponent();
    }
}

impl Default for Turn {
    fn default() -> Self {
        Turn::starting(Player::X)
    }
}
