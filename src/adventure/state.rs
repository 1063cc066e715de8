use crate::character::Player;
use crate::world::Progress;
use serde::{Deserialize, Serialize};

/// Everything the adventure game persists: the player plus world
/// progress flags. Transient combat state is never saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    #[serde(default = "Progress::new")]
    pub progress: Progress,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            player: Player::new(),
            progress: Progress::new(),
        }
    }
}
