use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Marker;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Player {
    pub name: String,
    #[serde(rename = "token")]
    pub marker: Marker,
    /// Only sent for the player whose turn it is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.marker)
    }
}

impl Player {
    pub fn new(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            name: name.into(),
            marker,
            secret: None,
        }
    }

    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }
}

/// Winner of a sub-board or of the whole game.
///
/// The server either sends the winning player or a bare string. A bare string
/// is compared like a marker, so a draw marker (e.g. `"draw"`) is owned by
/// nobody.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum Winner {
    Player(Player),
    Marker(Marker),
}

impl Winner {
    pub fn is(&self, marker: &Marker) -> bool {
        match self {
            Winner::Player(player) => player.marker == *marker,
            Winner::Marker(winner) => winner == marker,
        }
    }
}

impl Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Player(player) => write!(f, "{}", player.name),
            Winner::Marker(marker) => write!(f, "{}", marker),
        }
    }
}
