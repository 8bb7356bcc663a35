use leptos::prelude::*;
use crate::core::{BoardConfig, PreviewMode};
use crate::core::models::{BoardColumns, Coordinate, DragSnapshot};

/// Everything the board owns. All fields are `Copy` so the bundle can be
/// moved into as many event handlers as needed.
#[derive(Clone, Copy)]
pub struct BoardState {
    pub columns: RwSignal<BoardColumns>,
    /// `Some` while a custom-preview drag is active.
    pub dragged: RwSignal<Option<DragSnapshot>>,
    pub cursor: RwSignal<Coordinate>,
    pub preview: PreviewMode,
    pub dimmed_opacity: f64,
}

impl BoardState {
    pub fn is_dragging(&self) -> bool {
        self.dragged.with_untracked(Option::is_some)
    }
}

pub fn use_board(config: &BoardConfig) -> BoardState {
    BoardState {
        columns: RwSignal::new(config.columns.clone()),
        dragged: RwSignal::new(None),
        cursor: RwSignal::new(Coordinate::default()),
        preview: config.preview,
        dimmed_opacity: config.dimmed_opacity,
    }
}
