use leptos::prelude::*;
use crate::core::{BoardConfig, PreviewMode};
use crate::features::kanban::KanbanBoard;

#[component]
pub fn Kanban(config: BoardConfig) -> impl IntoView {
    let hint = match config.preview {
        PreviewMode::Custom => "Drag a card onto another column",
        PreviewMode::Native => "Drag a card onto another column (native preview)",
    };

    view! {
        <main class="kanban-page">
            <header class="kanban-header">
                <h1>"Board"</h1>
                <span class="kanban-hint">{hint}</span>
            </header>
            <KanbanBoard config=config />
        </main>
    }
}
