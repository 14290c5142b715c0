use ndarray::{s, Array2, ArrayView1};

use crate::to_coordinates;

/// Single-perspective occupancy of a 3x3 grid: `true` where the player of
/// interest owns the slot. Opponent-owned and empty slots are both `false`.
pub type Ownership = Array2<bool>;

/// Checks if claiming `candidate` would complete a line for the owner of `ownership`
///
/// The grid is copied, the candidate slot is marked as owned and every line
/// through it (its row, its column and the diagonals it lies on) is checked.
/// Works the same for cells within a sub-board and for sub-boards within the
/// meta-board. Out of range candidates never complete a line.
///
/// Usage:
/// ```
/// use ndarray::array;
/// use uttt_bot::would_complete_line;
///
/// // X X .
/// // . . .
/// // . . .
/// let ownership = array![
///     [true, true, false],
///     [false, false, false],
///     [false, false, false],
/// ];
///
/// assert!(would_complete_line(&ownership, 2));
/// assert!(!would_complete_line(&ownership, 4));
/// ```
pub fn would_complete_line(ownership: &Ownership, candidate: usize) -> bool {
    let (row, column) = to_coordinates(candidate);
    let mut hypothetical = ownership.clone();
    match hypothetical.get_mut((row, column)) {
        Some(slot) => *slot = true,
        None => return false,
    }

    let last = hypothetical.nrows() - 1;

    is_complete(hypothetical.row(row))
        || is_complete(hypothetical.column(column))
        || (row == column && is_complete(hypothetical.diag()))
        || (row + column == last && is_complete(hypothetical.slice(s![..;-1, ..]).diag()))
}

fn is_complete(line: ArrayView1<bool>) -> bool {
    line.iter().all(|owned| *owned)
}
