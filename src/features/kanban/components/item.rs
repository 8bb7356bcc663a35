use leptos::ev::DragEvent;
use leptos::prelude::*;

#[component]
pub fn KanbanItem(
    #[prop(into)] item: String,
    on_drag_start: Callback<DragEvent>,
    on_drag_end: Callback<DragEvent>,
) -> impl IntoView {
    view! {
        <div
            class="kanban-item"
            draggable="true"
            on:dragstart=move |ev: DragEvent| on_drag_start.run(ev)
            on:dragend=move |ev: DragEvent| on_drag_end.run(ev)
        >
            {item}
        </div>
    }
}
