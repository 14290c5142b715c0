use std::{fmt::Display, ops::Index};

use itertools::Itertools;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::{to_coordinates, Coordinates, SubBoard};

/// The meta-board: 3x3 sub-boards, indexed row-major like the cells within them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "Vec<SubBoard>", into = "Vec<SubBoard>")]
pub struct Board {
    pub data: Array2<SubBoard>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<SubBoard>> for Board {
    type Error = String;

    fn try_from(sub_boards: Vec<SubBoard>) -> Result<Self, Self::Error> {
        let count = sub_boards.len();
        Array2::from_shape_vec(Self::SIZE, sub_boards)
            .map(|data| Self { data })
            .map_err(|_| format!("expected 9 sub-boards, got {}", count))
    }
}

impl From<Board> for Vec<SubBoard> {
    fn from(board: Board) -> Self {
        board.data.iter().cloned().collect()
    }
}

impl Index<usize> for Board {
    type Output = SubBoard;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[to_coordinates(index)]
    }
}

impl Board {
    pub const SIZE: Coordinates = (3, 3);

    pub fn new() -> Self {
        Self {
            data: Array2::from_elem((Self::SIZE.0, Self::SIZE.1), SubBoard::new()),
        }
    }

    pub fn get(&self, index: usize) -> Option<&SubBoard> {
        self.data.get(to_coordinates(index))
    }

    /// Sub-boards in row-major order, indexed like the `board` of a move.
    pub fn sub_boards(&self) -> impl Iterator<Item = &SubBoard> {
        self.data.iter()
    }
}

/// Renders the nine sub-boards side by side, three per text block:
///
/// ```text
/// X - -  - - -  - - -
/// - O -  - - -  - - -
/// - - -  - - -  - - -
/// ```
impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for meta_row in self.data.rows() {
            for cell_row in 0..SubBoard::SIZE.0 {
                let line = meta_row
                    .iter()
                    .map(|sub_board| sub_board.cells.row(cell_row).iter().join(" "))
                    .join("  ");
                writeln!(f, "{}", line)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Field, Marker};
    use serde_json::{from_value, json};

    #[test]
    fn index_is_row_major() {
        let mut board = Board::new();
        board.data[(1, 2)].playable = false;
        assert!(!board[5].playable);
        assert!(board[4].playable);
        assert!(board.get(9).is_none());
    }

    #[test]
    fn requires_nine_sub_boards() {
        let sub_board = json!({
            "rows": [[null, null, null], [null, null, null], [null, null, null]],
            "playable": true
        });
        let eight = json!(vec![sub_board.clone(); 8]);
        assert!(from_value::<Board>(eight).is_err());

        let nine = json!(vec![sub_board; 9]);
        assert_eq!(from_value::<Board>(nine).unwrap(), Board::new());
    }

    #[test]
    fn render_board() {
        let mut board = Board::new();
        board.data[(0, 0)].cells[(0, 0)] = Field::Occupied {
            marker: Marker::new("X"),
        };
        board.data[(1, 2)].cells[(2, 1)] = Field::Occupied {
            marker: Marker::new("O"),
        };

        let expected = "\
X - -  - - -  - - -
- - -  - - -  - - -
- - -  - - -  - - -

- - -  - - -  - - -
- - -  - - -  - - -
- - -  - - -  - O -

- - -  - - -  - - -
- - -  - - -  - - -
- - -  - - -  - - -

";
        assert_eq!(board.to_string(), expected);
    }
}
