use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize};

use crate::{Board, GameState, Player, Winner};

/// Identifier the server allocated for a game. Accepted as a JSON string or number.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct GameId(pub String);

impl<'de> Deserialize<'de> for GameId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => GameId(id),
            RawId::Number(id) => GameId(id.to_string()),
        })
    }
}

impl Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        GameId(id.to_string())
    }
}

/// Game state as returned by the server after joining or moving.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameData {
    pub id: GameId,
    pub state: GameState,
    #[serde(default)]
    pub next_board: Option<usize>,
    pub boards: Board,
    #[serde(default)]
    pub current_player: Option<Player>,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub winner: Option<Winner>,
}

impl GameData {
    /// The first participant that does not share the current player's marker.
    pub fn opponent(&self) -> Option<&Player> {
        let current = self.current_player.as_ref()?;
        self.players
            .iter()
            .find(|player| player.marker != current.marker)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Field, Marker};
    use serde_json::{from_value, json};

    fn empty_rows() -> serde_json::Value {
        json!([[null, null, null], [null, null, null], [null, null, null]])
    }

    fn sample_game() -> serde_json::Value {
        let mut boards: Vec<serde_json::Value> = (0..9)
            .map(|_| json!({"rows": empty_rows(), "playable": false, "winner": null}))
            .collect();
        boards[4] = json!({
            "rows": [["X", null, null], [null, "O", null], [null, null, null]],
            "playable": true,
            "winner": null
        });
        json!({
            "id": 17,
            "state": "inProgress",
            "nextBoard": 4,
            "boards": boards,
            "currentPlayer": {"name": "bot", "token": "X", "secret": "abc"},
            "players": [{"name": "bot", "token": "X"}, {"name": "robot", "token": "O"}],
            "winner": null
        })
    }

    #[test]
    fn decode_game_data() {
        let game: GameData = from_value(sample_game()).expect("failed to decode game");

        assert_eq!(game.id, GameId::from("17"));
        assert_eq!(game.state, GameState::InProgress);
        assert_eq!(game.next_board, Some(4));
        assert_eq!(
            game.boards[4].cells[(0, 0)],
            Field::Occupied {
                marker: Marker::new("X")
            }
        );
        assert_eq!(game.boards[4].cells[(1, 1)].to_string(), "O");
        assert!(game.boards[4].playable);
        assert!(!game.boards[0].playable);
        assert_eq!(game.opponent().map(|p| p.name.as_str()), Some("robot"));
    }

    #[test]
    fn missing_state_fails_fast() {
        let mut game = sample_game();
        game.as_object_mut().unwrap().remove("state");
        assert!(from_value::<GameData>(game).is_err());
    }

    #[test]
    fn unknown_state_is_rejected() {
        let mut game = sample_game();
        game["state"] = json!("paused");
        assert!(from_value::<GameData>(game).is_err());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let mut game = sample_game();
        game["createdAt"] = json!("2024-01-01");
        game["boards"][0]["lastMove"] = json!(3);
        assert!(from_value::<GameData>(game).is_ok());
    }

    #[test]
    fn terminal_game_may_omit_current_player() {
        let mut game = sample_game();
        game["state"] = json!("won");
        game["currentPlayer"] = json!(null);
        game["winner"] = json!({"name": "robot", "token": "O"});

        let game: GameData = from_value(game).expect("failed to decode game");
        assert_eq!(game.state, GameState::Won);
        assert!(game.current_player.is_none());
        assert!(game.opponent().is_none());
        assert!(game.winner.is_some_and(|w| w.is(&Marker::new("O"))));
    }
}
