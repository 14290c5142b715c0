use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum GameState {
    InProgress,
    Won,
    #[serde(alias = "draw")]
    Drawn,
}

impl GameState {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameState::InProgress)
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::InProgress => write!(f, "inProgress"),
            GameState::Won => write!(f, "won"),
            GameState::Drawn => write!(f, "drawn"),
        }
    }
}
