use thiserror::Error;

/// Reasons a board operation or config load is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoardError {
    #[error("drag payload is missing the `{0}` field")]
    MissingField(&'static str),

    #[error("drag payload column `{0}` is not a valid index")]
    InvalidColumnIndex(String),

    #[error("column {index} is out of range for a board with {len} columns")]
    ColumnOutOfRange { index: usize, len: usize },

    #[error("item `{item}` is not in column {column}")]
    ItemNotInColumn { item: String, column: usize },

    #[error("column {column} contains a blank item identifier")]
    EmptyItem { column: usize },

    #[error("item `{0}` appears more than once on the board")]
    DuplicateItem(String),

    #[error("dimmed opacity {0} is outside 0..=1")]
    InvalidOpacity(f64),

    #[error("failed to read board config: {0}")]
    Config(String),
}
