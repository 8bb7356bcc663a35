use leptos::prelude::*;
use crate::core::models::{Coordinate, DragSnapshot};

/// Floating copy of the dragged card, pinned under the pointer.
#[component]
pub fn DragPreview(
    snapshot: RwSignal<Option<DragSnapshot>>,
    cursor: RwSignal<Coordinate>,
) -> impl IntoView {
    // The node is built once per snapshot; only its style follows the cursor.
    move || {
        snapshot.with(|snapshot| {
            snapshot.clone().map(|snapshot| {
                let label = snapshot.item.clone();
                let style = move || snapshot.preview_css(cursor.get());
                view! { <div class="drag-preview" style=style>{label}</div> }
            })
        })
    }
}
