use serde_json::{json, Value};

use crate::GameData;

/// Server response for a game where nothing has been played yet: every
/// sub-board empty and playable, the bot (`X`) to move.
pub fn game_json(id: &str, state: &str) -> Value {
    let sub_board = json!({
        "rows": [[null, null, null], [null, null, null], [null, null, null]],
        "playable": true,
        "winner": null
    });
    json!({
        "id": id,
        "state": state,
        "nextBoard": null,
        "boards": vec![sub_board; 9],
        "currentPlayer": {"name": "bot", "token": "X", "secret": "secret-x"},
        "players": [{"name": "bot", "token": "X"}, {"name": "robot", "token": "O"}],
        "winner": null
    })
}

/// Decodes [`game_json`] after applying `edit` to it.
pub fn game(id: &str, state: &str, edit: impl FnOnce(&mut Value)) -> GameData {
    let mut value = game_json(id, state);
    edit(&mut value);
    serde_json::from_value(value).expect("invalid game fixture")
}
