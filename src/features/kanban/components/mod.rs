pub mod board;
pub mod column;
pub mod drag_preview;
pub mod item;

pub use board::KanbanBoard;
pub use column::KanbanColumn;
pub use drag_preview::DragPreview;
pub use item::KanbanItem;
