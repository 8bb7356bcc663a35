use leptos::ev::{self, DragEvent, MouseEvent};
use leptos::prelude::*;
use crate::core::models::Coordinate;

// Track the pointer in page coordinates for as long as the calling component
// is mounted. Plain mousemove stops firing once a native drag starts, so
// dragover keeps the position fresh during the gesture.
pub fn use_cursor_tracking(cursor: RwSignal<Coordinate>) {
    let mouse_handle = window_event_listener(ev::mousemove, move |e: MouseEvent| {
        cursor.set(Coordinate::new(f64::from(e.page_x()), f64::from(e.page_y())));
    });

    let drag_handle = window_event_listener(ev::dragover, move |e: DragEvent| {
        cursor.set(Coordinate::new(f64::from(e.page_x()), f64::from(e.page_y())));
    });

    on_cleanup(move || {
        log::debug!("detaching cursor listeners");
        mouse_handle.remove();
        drag_handle.remove();
    });
}
