//! Boolean views of the game state, as seen by one player.

use crate::{Board, Marker, Ownership, SubBoard};

/// `true` at every cell of `sub_board` claimed with `player`'s marker.
pub fn cell_ownership(sub_board: &SubBoard, player: &Marker) -> Ownership {
    sub_board.cells.map(|field| field.is_owned_by(player))
}

/// `true` at every sub-board won by `player`.
pub fn subboard_ownership(board: &Board, player: &Marker) -> Ownership {
    board.data.map(|sub_board| {
        sub_board
            .winner
            .as_ref()
            .is_some_and(|winner| winner.is(player))
    })
}

/// `true` at every sub-board that may be picked when no board is forced:
/// flagged playable, not won and with an empty cell left.
pub fn playable_subboards(board: &Board) -> Ownership {
    board.data.map(|sub_board| {
        sub_board.playable && sub_board.winner.is_none() && !sub_board.is_full()
    })
}

/// `true` at every unoccupied cell of `sub_board`.
pub fn empty_cells(sub_board: &SubBoard) -> Ownership {
    sub_board.cells.map(|field| field.is_vacant())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Field, Winner};
    use ndarray::array;

    fn occupied(marker: &str) -> Field {
        Field::Occupied {
            marker: Marker::new(marker),
        }
    }

    #[test]
    fn cells_are_projected_per_player() {
        let mut sub_board = SubBoard::new();
        sub_board.cells[(0, 0)] = occupied("X");
        sub_board.cells[(1, 1)] = occupied("O");
        sub_board.cells[(2, 0)] = occupied("X");

        assert_eq!(
            cell_ownership(&sub_board, &Marker::new("X")),
            array![
                [true, false, false],
                [false, false, false],
                [true, false, false],
            ]
        );
        assert_eq!(
            cell_ownership(&sub_board, &Marker::new("O")),
            array![
                [false, false, false],
                [false, true, false],
                [false, false, false],
            ]
        );
        assert_eq!(
            empty_cells(&sub_board),
            array![
                [false, true, true],
                [true, false, true],
                [false, true, true],
            ]
        );
    }

    #[test]
    fn sub_boards_are_projected_per_player() {
        let mut board = Board::new();
        board.data[(0, 1)].winner = Some(Winner::Marker(Marker::new("X")));
        board.data[(0, 1)].playable = false;
        board.data[(2, 2)].winner = Some(Winner::Marker(Marker::new("draw")));
        board.data[(1, 0)].playable = false;

        assert_eq!(
            subboard_ownership(&board, &Marker::new("X")),
            array![
                [false, true, false],
                [false, false, false],
                [false, false, false],
            ]
        );
        assert_eq!(
            subboard_ownership(&board, &Marker::new("O")),
            Ownership::from_elem((3, 3), false)
        );
        assert_eq!(
            playable_subboards(&board),
            array![
                [true, false, true],
                [false, true, true],
                [true, true, false],
            ]
        );
    }

    #[test]
    fn full_sub_board_is_not_playable() {
        let mut board = Board::new();
        // X O X
        // X O O
        // O X X
        let drawn = &mut board.data[(0, 0)];
        for (index, marker) in ["X", "O", "X", "X", "O", "O", "O", "X", "X"]
            .iter()
            .enumerate()
        {
            drawn.cells[(index / 3, index % 3)] = occupied(marker);
        }

        assert_eq!(
            playable_subboards(&board),
            array![[false, true, true], [true, true, true], [true, true, true]]
        );
    }

    #[test]
    fn inputs_are_untouched() {
        let mut sub_board = SubBoard::new();
        sub_board.cells[(0, 2)] = occupied("O");
        let before = sub_board.clone();
        cell_ownership(&sub_board, &Marker::new("O"));
        empty_cells(&sub_board);
        assert_eq!(sub_board, before);
    }
}
