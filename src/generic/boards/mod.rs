mod board;
mod matrix_checker;
mod sub_board;

pub use board::Board;
pub use matrix_checker::{would_complete_line, Ownership};
pub use sub_board::SubBoard;
