use serde::{Deserialize, Serialize};

pub type Coordinates = (usize, usize);

/// A move as submitted to the server: the sub-board and the cell inside it,
/// both as row-major indices 0..9.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub board: usize,
    pub cell: usize,
}

impl Move {
    pub fn new(board: usize, cell: usize) -> Self {
        Self { board, cell }
    }
}

/// Converts a row-major index of a 3x3 grid into `(row, column)`.
pub fn to_coordinates(index: usize) -> Coordinates {
    (index / 3, index % 3)
}
