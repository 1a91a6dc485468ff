//! Ticket Card Component
//!
//! A single ticket: color band, id label, task area and lock icon.

use leptos::html::Div;
use leptos::prelude::*;

use crate::context::BoardContext;
use crate::models::Ticket;
use crate::store::{store_ticket_color, BoardViewStoreFields};

/// Lock icon classes
const LOCK_CLOSE: &str = "fa-solid fa-lock";
const LOCK_OPEN: &str = "fa-solid fa-lock-open";

#[component]
pub fn TicketCard(ticket: Ticket) -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");
    let store = ctx.store;

    let id = ticket.id.clone();
    let fallback_color = ticket.color;
    let task_ref = NodeRef::<Div>::new();

    // Display state is derived from the stored record only
    let color = Memo::new({
        let id = id.clone();
        move |_| store_ticket_color(&store, &id).unwrap_or(fallback_color)
    });
    let locked = Memo::new({
        let id = id.clone();
        move |_| !store.unlocked().read().contains(&id)
    });
    let visible = Memo::new({
        let id = id.clone();
        move |_| !store.hidden().read().contains(&id)
    });

    let on_lock = {
        let id = id.clone();
        move |_: web_sys::MouseEvent| {
            let text = task_ref
                .get_untracked()
                .map(|el| el.inner_text())
                .unwrap_or_default();
            if let Some(Err(e)) = ctx.dispatch(|board| board.toggle_lock(&id, &text)) {
                log::error!("[Ticket] Failed to save text for {}: {}", id, e);
            }
        }
    };

    let on_color = {
        let id = id.clone();
        move |_: web_sys::MouseEvent| {
            if let Some(Err(e)) = ctx.dispatch(|board| board.cycle_color(&id)) {
                log::error!("[Ticket] Failed to save color for {}: {}", id, e);
            }
        }
    };

    let on_remove = {
        let id = id.clone();
        move |_: web_sys::MouseEvent| {
            if let Some(Err(e)) = ctx.dispatch(|board| board.click_ticket(&id)) {
                log::error!("[Ticket] Failed to remove {}: {}", id, e);
            }
        }
    };

    view! {
        <div
            class="ticket-cont"
            style=move || if visible.get() { "display: block;" } else { "display: none;" }
            on:click=on_remove
        >
            <div
                class="ticket-color"
                style=move || format!("background-color: {};", color.get())
                on:click=on_color
            ></div>
            <div class="ticket-id">{id.to_string()}</div>
            <div
                class="task-area"
                node_ref=task_ref
                contenteditable=move || if locked.get() { "false" } else { "true" }
            >
                {ticket.task}
            </div>
            <div class="ticket-lock">
                <i
                    class=move || if locked.get() { LOCK_CLOSE } else { LOCK_OPEN }
                    on:click=on_lock
                ></i>
            </div>
        </div>
    }
}
