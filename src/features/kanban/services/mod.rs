pub mod board_operations;
pub mod drag_operations;

pub use drag_operations::{drop_on_column, end_drag, start_drag};
