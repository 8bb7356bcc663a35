pub mod use_board;
pub mod use_cursor;

pub use use_board::{use_board, BoardState};
pub use use_cursor::use_cursor_tracking;
