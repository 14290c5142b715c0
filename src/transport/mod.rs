mod factory;
mod http_transport;

pub use factory::TransportFactory;
pub use http_transport::{ErrorKind, HttpTransport, HttpTransportArgs};

use crate::{GameData, GameId, Move};
use core::fmt::{Debug, Display};
use std::future::Future;

/// Transport is the interface to the game server.
/// The turn loop doesn't care how the server is reached; the server is the
/// authority on legality and on the resulting game state.
pub trait Transport: Sized {
    type Args: Clone;
    type ErrorKind: Debug + Display;

    fn new(args: Self::Args) -> Result<Self, Self::ErrorKind>;

    /// asks the server to allocate a new game and returns its id.
    fn create_game(&mut self) -> impl Future<Output = Result<GameId, Self::ErrorKind>> + Send;

    /// joins the game as `player_name`. With `pair_with_robot` the server
    /// matches the player against a computer opponent.
    fn join_game(
        &mut self,
        game_id: &GameId,
        player_name: &str,
        pair_with_robot: bool,
    ) -> impl Future<Output = Result<GameData, Self::ErrorKind>> + Send;

    /// submits a move authorized by `secret` and returns the resulting game.
    fn submit_move(
        &mut self,
        game_id: &GameId,
        secret: &str,
        new_move: Move,
    ) -> impl Future<Output = Result<GameData, Self::ErrorKind>> + Send;
}
