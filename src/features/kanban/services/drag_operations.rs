use leptos::ev::DragEvent;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DataTransfer, HtmlElement};
use crate::core::BoardError;
use crate::core::models::{
    Coordinate, DragPayload, DragSnapshot, MoveOutcome, PreviewStyle, CAPTURED_STYLE_PROPERTIES,
    FROM_COLUMN_FIELD, ITEM_FIELD,
};
use crate::features::kanban::hooks::BoardState;
use super::board_operations::{apply_drop, begin_snapshot, clear_snapshot, uses_custom_preview};

// dragstart on an item card
pub fn start_drag(ev: &DragEvent, item: &str, from_column: usize, board: BoardState) {
    let payload = DragPayload::new(item, from_column);

    let Some(transfer) = ev.data_transfer() else {
        log::warn!("dragstart for {} carried no DataTransfer", item);
        return;
    };
    if let Err(e) = write_payload(&transfer, &payload) {
        log::warn!("failed to write drag payload for {}: {:?}", item, e);
        return;
    }
    transfer.set_effect_allowed("move");

    if !uses_custom_preview(board) {
        log::debug!("native drag started for {} from column {}", item, from_column);
        return;
    }

    let Some(element) = source_element(ev) else {
        log::warn!("dragstart for {} has no element target", item);
        return;
    };

    let rect = element.get_bounding_client_rect();
    let offset = Coordinate::new(
        f64::from(ev.client_x()) - rect.left(),
        f64::from(ev.client_y()) - rect.top(),
    );
    let style = capture_style(&element);

    // The browser snapshots its own drag image right after this handler, so
    // dimming here keeps the native ghost nearly invisible.
    if let Err(e) = element.style().set_property("opacity", &board.dimmed_opacity.to_string()) {
        log::warn!("failed to dim {}: {:?}", item, e);
    }

    let cursor = Coordinate::new(f64::from(ev.page_x()), f64::from(ev.page_y()));
    begin_snapshot(board, DragSnapshot::new(item, style, offset), cursor);
    log::debug!("drag started for {} from column {}", item, from_column);
}

// drop on a column
pub fn drop_on_column(ev: &DragEvent, to_column: usize, board: BoardState) {
    ev.prevent_default();

    let payload = ev
        .data_transfer()
        .ok_or(BoardError::MissingField(ITEM_FIELD))
        .and_then(|transfer| read_payload(&transfer));

    match apply_drop(payload, to_column, board) {
        Ok(MoveOutcome::Moved) => {}
        Ok(MoveOutcome::Unchanged) => {
            log::debug!("dropped onto source column {}, nothing to do", to_column)
        }
        Err(e) => log::warn!("ignoring drop on column {}: {}", to_column, e),
    }
}

// dragend on the source card, fired after drop or when the drag is cancelled
pub fn end_drag(ev: &DragEvent, board: BoardState) {
    if uses_custom_preview(board) {
        if let Some(element) = source_element(ev) {
            if let Err(e) = element.style().remove_property("opacity") {
                log::warn!("failed to restore opacity: {:?}", e);
            }
        }
    }
    clear_snapshot(board);
}

fn write_payload(transfer: &DataTransfer, payload: &DragPayload) -> Result<(), JsValue> {
    transfer.set_data(ITEM_FIELD, &payload.item)?;
    transfer.set_data(FROM_COLUMN_FIELD, &payload.from_column_field())?;
    Ok(())
}

fn read_payload(transfer: &DataTransfer) -> Result<DragPayload, BoardError> {
    let item = transfer.get_data(ITEM_FIELD).unwrap_or_default();
    let from_column = transfer.get_data(FROM_COLUMN_FIELD).unwrap_or_default();
    DragPayload::from_fields(&item, &from_column)
}

fn source_element(ev: &DragEvent) -> Option<HtmlElement> {
    ev.current_target()
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
}

fn capture_style(element: &HtmlElement) -> PreviewStyle {
    let mut style = PreviewStyle::new();

    let computed = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))
        .and_then(|window| window.get_computed_style(element));

    match computed {
        Ok(Some(declaration)) => {
            for property in CAPTURED_STYLE_PROPERTIES {
                if let Ok(value) = declaration.get_property_value(property) {
                    style.push(property, value);
                }
            }
        }
        Ok(None) => log::warn!("no computed style for drag source"),
        Err(e) => log::warn!("failed to read computed style: {:?}", e),
    }

    style
}
