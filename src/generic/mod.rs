mod boards;
mod field;
mod game_data;
mod gamestate;
mod r#move;
mod player;

pub use boards::{would_complete_line, Board, Ownership, SubBoard};
pub use field::{Field, Marker};
pub use game_data::{GameData, GameId};
pub use gamestate::GameState;
pub use player::{Player, Winner};
pub use r#move::{to_coordinates, Coordinates, Move};
