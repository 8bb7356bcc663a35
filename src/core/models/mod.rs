pub mod board;
pub mod drag;

pub use board::{BoardColumns, MoveOutcome};
pub use drag::{
    Coordinate, DragPayload, DragSnapshot, PreviewStyle, CAPTURED_STYLE_PROPERTIES,
    FROM_COLUMN_FIELD, ITEM_FIELD,
};
