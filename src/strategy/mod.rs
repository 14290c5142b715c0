pub mod projection;
mod selector;

pub use selector::{select_board, select_cell, select_move, IllegalState};
