use leptos::prelude::*;
use crate::core::{BoardError, PreviewMode};
use crate::core::models::{BoardColumns, Coordinate, DragPayload, DragSnapshot, MoveOutcome};
use crate::features::kanban::hooks::BoardState;

// Move the payload's item into `to_column`. The signal is only written when
// the board actually changes.
pub fn move_item(
    payload: &DragPayload,
    to_column: usize,
    columns_signal: RwSignal<BoardColumns>,
) -> Result<MoveOutcome, BoardError> {
    let mut columns = columns_signal.get_untracked();
    let outcome = columns.move_item(&payload.item, payload.from_column, to_column)?;

    if outcome == MoveOutcome::Moved {
        match serde_json::to_string(&columns) {
            Ok(json) => log::debug!(
                "moved {} from column {} to {}: {}",
                payload.item,
                payload.from_column,
                to_column,
                json
            ),
            Err(e) => log::debug!("moved {} (board not serializable: {})", payload.item, e),
        }
        columns_signal.set(columns);
    }

    Ok(outcome)
}

// Finish a drop: apply the move if the payload was readable, and end the drag
// either way.
pub fn apply_drop(
    payload: Result<DragPayload, BoardError>,
    to_column: usize,
    board: BoardState,
) -> Result<MoveOutcome, BoardError> {
    let result = payload.and_then(|payload| move_item(&payload, to_column, board.columns));
    clear_snapshot(board);
    result
}

// Native boards leave the drag image to the browser: no snapshot, no dimming.
pub fn uses_custom_preview(board: BoardState) -> bool {
    board.preview == PreviewMode::Custom
}

// Returns whether the snapshot was recorded.
pub fn begin_snapshot(board: BoardState, snapshot: DragSnapshot, cursor: Coordinate) -> bool {
    if !uses_custom_preview(board) {
        return false;
    }
    board.cursor.set(cursor);
    board.dragged.set(Some(snapshot));
    true
}

pub fn clear_snapshot(board: BoardState) {
    if board.is_dragging() {
        board.dragged.set(None);
    }
}
