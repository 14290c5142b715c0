use std::fmt::Display;

use log::debug;

use crate::{
    strategy::projection::{cell_ownership, empty_cells, playable_subboards, subboard_ownership},
    to_coordinates, would_complete_line, GameData, Marker, Move, Ownership, SubBoard,
};

/// The game state does not allow the bot to pick a legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalState {
    NoPlayableSubBoard,
    BoardOutOfRange { board: usize },
    SubBoardFull { board: usize },
    MissingCurrentPlayer,
    MissingSecret,
    UnknownOpponent,
}

impl Display for IllegalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalState::NoPlayableSubBoard => write!(f, "no sub-board is playable"),
            IllegalState::BoardOutOfRange { board } => {
                write!(f, "sub-board {} does not exist", board)
            }
            IllegalState::SubBoardFull { board } => {
                write!(f, "sub-board {} has no empty cell", board)
            }
            IllegalState::MissingCurrentPlayer => write!(f, "the game has no current player"),
            IllegalState::MissingSecret => write!(f, "the current player has no secret"),
            IllegalState::UnknownOpponent => write!(f, "the opponent could not be identified"),
        }
    }
}

impl std::error::Error for IllegalState {}

const CORNERS: [usize; 4] = [0, 2, 6, 8];
const CENTER: [usize; 1] = [4];
const SIDES: [usize; 4] = [1, 3, 5, 7];
const POSITIONAL_PREFERENCE: [&[usize]; 3] = [&CORNERS, &CENTER, &SIDES];

/// Picks the move for the current player of `game`.
pub fn select_move(game: &GameData) -> Result<Move, IllegalState> {
    let me = game
        .current_player
        .as_ref()
        .ok_or(IllegalState::MissingCurrentPlayer)?;
    let opponent = game.opponent().ok_or(IllegalState::UnknownOpponent)?;

    let board = select_board(game, &me.marker, &opponent.marker)?;
    let sub_board = game
        .boards
        .get(board)
        .ok_or(IllegalState::BoardOutOfRange { board })?;
    let cell = select_cell(sub_board, &me.marker, &opponent.marker)
        .ok_or(IllegalState::SubBoardFull { board })?;

    Ok(Move::new(board, cell))
}

/// Picks the sub-board to play in.
///
/// A forced board is returned as is. Otherwise the first playable sub-board
/// (lowest index) of the first matching tier is taken:
/// 1. winning it wins the game
/// 2. the opponent winning it would win the game
/// 3. it has a cell that wins it
/// 4. it has a cell that wins it for the opponent
/// 5. corner, then center, then side
pub fn select_board(
    game: &GameData,
    me: &Marker,
    opponent: &Marker,
) -> Result<usize, IllegalState> {
    if let Some(board) = game.next_board {
        if board >= game.boards.data.len() {
            return Err(IllegalState::BoardOutOfRange { board });
        }
        debug!("sub-board {} is forced", board);
        return Ok(board);
    }

    let playable = playable_subboards(&game.boards);
    let mine = subboard_ownership(&game.boards, me);
    let theirs = subboard_ownership(&game.boards, opponent);

    if let Some(board) = first_candidate(&playable, |board| would_complete_line(&mine, board)) {
        debug!("sub-board {} wins the game", board);
        return Ok(board);
    }
    if let Some(board) = first_candidate(&playable, |board| would_complete_line(&theirs, board)) {
        debug!("sub-board {} blocks the opponent's game win", board);
        return Ok(board);
    }
    if let Some(board) = first_candidate(&playable, |board| {
        has_winning_cell(&game.boards[board], me)
    }) {
        debug!("sub-board {} can be won this turn", board);
        return Ok(board);
    }
    if let Some(board) = first_candidate(&playable, |board| {
        has_winning_cell(&game.boards[board], opponent)
    }) {
        debug!("sub-board {} can be won by the opponent", board);
        return Ok(board);
    }

    let board = positional(&playable).ok_or(IllegalState::NoPlayableSubBoard)?;
    debug!("sub-board {} chosen by position", board);
    Ok(board)
}

/// Picks an empty cell of `sub_board`: a cell that wins it, else one that
/// blocks the opponent, else corner, center, side. `None` if it is full.
pub fn select_cell(sub_board: &SubBoard, me: &Marker, opponent: &Marker) -> Option<usize> {
    let empty = empty_cells(sub_board);
    let mine = cell_ownership(sub_board, me);
    let theirs = cell_ownership(sub_board, opponent);

    if let Some(cell) = first_candidate(&empty, |cell| would_complete_line(&mine, cell)) {
        debug!("cell {} wins the sub-board", cell);
        return Some(cell);
    }
    if let Some(cell) = first_candidate(&empty, |cell| would_complete_line(&theirs, cell)) {
        debug!("cell {} blocks the opponent", cell);
        return Some(cell);
    }

    let cell = positional(&empty)?;
    debug!("cell {} chosen by position", cell);
    Some(cell)
}

fn has_winning_cell(sub_board: &SubBoard, player: &Marker) -> bool {
    let ownership = cell_ownership(sub_board, player);
    first_candidate(&empty_cells(sub_board), |cell| {
        would_complete_line(&ownership, cell)
    })
    .is_some()
}

/// Lowest index that is a candidate and satisfies `predicate`.
fn first_candidate(candidates: &Ownership, predicate: impl Fn(usize) -> bool) -> Option<usize> {
    candidates
        .iter()
        .enumerate()
        .filter(|(_, candidate)| **candidate)
        .map(|(index, _)| index)
        .find(|index| predicate(*index))
}

fn positional(candidates: &Ownership) -> Option<usize> {
    POSITIONAL_PREFERENCE
        .iter()
        .flat_map(|tier| tier.iter().copied())
        .find(|index| {
            candidates
                .get(to_coordinates(*index))
                .copied()
                .unwrap_or(false)
        })
}
