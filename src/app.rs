use leptos::prelude::*;
use crate::core::BoardConfig;
use crate::pages::Kanban;

#[component]
pub fn App() -> impl IntoView {
    let config = BoardConfig::load();

    view! {
        <div class="app">
            <Kanban config=config />
        </div>
    }
}
