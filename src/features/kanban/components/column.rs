use leptos::ev::DragEvent;
use leptos::prelude::*;

/// Drop zone for one column. Accepting dragover is what makes the column a
/// valid drop target.
#[component]
pub fn KanbanColumn(
    index: usize,
    count: usize,
    on_drop: Callback<DragEvent>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="kanban-column"
            data-column=index.to_string()
            on:dragover=move |ev: DragEvent| ev.prevent_default()
            on:drop=move |ev: DragEvent| on_drop.run(ev)
        >
            <div class="column-header">
                <h3>{format!("Column {}", index + 1)}</h3>
                <span class="task-count">{count}</span>
            </div>
            <div class="column-content">{children()}</div>
        </div>
    }
}
