use leptos::ev::DragEvent;
use leptos::prelude::*;
use crate::core::BoardConfig;
use crate::features::kanban::components::{DragPreview, KanbanColumn, KanbanItem};
use crate::features::kanban::hooks::{use_board, use_cursor_tracking};
use crate::features::kanban::services::{drop_on_column, end_drag, start_drag};

#[component]
pub fn KanbanBoard(config: BoardConfig) -> impl IntoView {
    let board = use_board(&config);
    use_cursor_tracking(board.cursor);

    let columns_view = move || {
        board.columns.with(|columns| {
            columns
                .columns()
                .iter()
                .enumerate()
                .map(|(column_index, items)| {
                    let on_drop = Callback::new(move |ev: DragEvent| {
                        drop_on_column(&ev, column_index, board)
                    });
                    let items = items.clone();
                    let count = items.len();

                    view! {
                        <KanbanColumn index=column_index count=count on_drop=on_drop>
                            {items
                                .into_iter()
                                .map(|item| {
                                    let item_for_start = item.clone();
                                    let on_drag_start = Callback::new(move |ev: DragEvent| {
                                        start_drag(&ev, &item_for_start, column_index, board)
                                    });
                                    let on_drag_end =
                                        Callback::new(move |ev: DragEvent| end_drag(&ev, board));
                                    view! {
                                        <KanbanItem
                                            item=item
                                            on_drag_start=on_drag_start
                                            on_drag_end=on_drag_end
                                        />
                                    }
                                })
                                .collect_view()}
                        </KanbanColumn>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="kanban-board">
            {columns_view}
            <DragPreview snapshot=board.dragged cursor=board.cursor />
        </div>
    }
}
