use std::fmt::{Debug, Display};

use log::{debug, info};

use crate::{select_move, GameData, GameId, GameState, IllegalState, Transport, Winner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Terminal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnError<E> {
    Transport(E),
    IllegalState(IllegalState),
}

impl<E> From<IllegalState> for TurnError<E> {
    fn from(error: IllegalState) -> Self {
        TurnError::IllegalState(error)
    }
}

impl<E: Display> Display for TurnError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnError::Transport(error) => write!(f, "{}", error),
            TurnError::IllegalState(error) => write!(f, "illegal game state: {}", error),
        }
    }
}

impl<E: Debug + Display> std::error::Error for TurnError<E> {}

#[derive(Debug, Clone)]
pub struct PlayArgs {
    pub player_name: String,
    /// Joins this game, or creates a new one when absent.
    pub game_id: Option<GameId>,
    pub pair_with_robot: bool,
}

/// How a game ended, as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub game_id: GameId,
    pub state: GameState,
    pub winner: Option<Winner>,
    pub moves_played: usize,
}

impl Display for GameSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Game state: {}", self.state)?;
        match &self.winner {
            Some(winner) => write!(f, "Game winner: {}", winner),
            None => write!(f, "Game winner: None"),
        }
    }
}

/// Plays one game: pick a move, submit it, take the server's answer as the
/// new state, until the server reports the game as finished.
pub struct TurnLoop<T: Transport> {
    transport: T,
    game: GameData,
    moves_played: usize,
}

impl<T: Transport> TurnLoop<T> {
    /// Creates the game if needed and joins it.
    pub async fn start(
        mut transport: T,
        args: PlayArgs,
    ) -> Result<Self, TurnError<T::ErrorKind>> {
        let game_id = match args.game_id {
            Some(game_id) => game_id,
            None => {
                let game_id = transport
                    .create_game()
                    .await
                    .map_err(TurnError::Transport)?;
                info!("Created game {}", game_id);
                game_id
            }
        };

        let game = transport
            .join_game(&game_id, &args.player_name, args.pair_with_robot)
            .await
            .map_err(TurnError::Transport)?;
        info!("Joined game {} as {}", game.id, args.player_name);

        Ok(Self::with_game(transport, game))
    }

    pub fn with_game(transport: T, game: GameData) -> Self {
        Self {
            transport,
            game,
            moves_played: 0,
        }
    }

    pub fn game(&self) -> &GameData {
        &self.game
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn phase(&self) -> Phase {
        if self.game.state.is_in_progress() {
            Phase::Playing
        } else {
            Phase::Terminal
        }
    }

    /// Plays a single turn. Does nothing once the game is over.
    pub async fn step(&mut self) -> Result<Phase, TurnError<T::ErrorKind>> {
        if self.phase() == Phase::Terminal {
            return Ok(Phase::Terminal);
        }

        info!("\n{}", self.game.boards);
        let next_move = select_move(&self.game)?;
        let secret = self
            .game
            .current_player
            .as_ref()
            .and_then(|player| player.secret.as_deref())
            .ok_or(IllegalState::MissingSecret)?;

        info!(
            "Playing sub-board {}, cell {}",
            next_move.board, next_move.cell
        );
        let game = self
            .transport
            .submit_move(&self.game.id, secret, next_move)
            .await
            .map_err(TurnError::Transport)?;

        self.game = game;
        self.moves_played += 1;
        debug!("Game {} is {}", self.game.id, self.game.state);

        Ok(self.phase())
    }

    /// Plays until the server reports a finished game.
    pub async fn run(&mut self) -> Result<GameSummary, TurnError<T::ErrorKind>> {
        while self.step().await? == Phase::Playing {}

        info!("\n{}", self.game.boards);
        Ok(self.summary())
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            game_id: self.game.id.clone(),
            state: self.game.state,
            winner: self.game.winner.clone(),
            moves_played: self.moves_played,
        }
    }
}
