//! Toolbar Component
//!
//! Filter swatches plus the add and delete-mode buttons.

use leptos::prelude::*;

use crate::context::{alert, BoardContext};
use crate::models::PALETTE;
use crate::store::BoardViewStoreFields;

/// Top toolbar
#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");
    let store = ctx.store;

    let toggle_delete_mode = move |_: web_sys::MouseEvent| {
        if ctx.dispatch(|board| board.toggle_delete_mode()) == Some(true) {
            alert("Delete mode activated!");
        }
    };

    view! {
        <div class="toolbox-cont">
            // Filter swatches: click filters, double-click shows all
            <div class="toolbox-priority-cont">
                {PALETTE.iter().map(|&color| view! {
                    <div
                        class=format!("{} color", color)
                        title=format!("Show {} tickets", color)
                        on:click=move |_| { ctx.dispatch(|board| board.filter_by(color)); }
                        on:dblclick=move |_| { ctx.dispatch(|board| board.show_all()); }
                    ></div>
                }).collect_view()}
            </div>

            <div class="action-btn-cont">
                <div class="add-btn" on:click=move |_| { ctx.dispatch(|board| board.toggle_modal()); }>
                    <i class="fa-solid fa-plus"></i>
                </div>
                <div
                    class="remove-btn"
                    style=move || if store.delete_mode().get() { "color: red;" } else { "color: white;" }
                    on:click=toggle_delete_mode
                >
                    <i class="fa-solid fa-xmark"></i>
                </div>
            </div>
        </div>
    }
}
