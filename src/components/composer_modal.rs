//! Composer Modal Component
//!
//! Textarea plus priority palette for creating tickets.
//! The configured submit key creates the ticket while the textarea has focus.

use leptos::prelude::*;

use crate::context::{alert, BoardContext};
use crate::error::BoardError;
use crate::models::PALETTE;
use crate::store::BoardViewStoreFields;

#[component]
pub fn ComposerModal() -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");
    let store = ctx.store;

    let (task_text, set_task_text) = signal(String::new());

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != ctx.config.submit_key {
            return;
        }
        let text = task_text.get_untracked();
        match ctx.dispatch(|board| board.submit(&text)) {
            Some(Ok(_)) => set_task_text.set(String::new()),
            Some(Err(e @ BoardError::EmptyTask)) => alert(&e.to_string()),
            Some(Err(e)) => log::error!("[Composer] Failed to create ticket: {}", e),
            None => {}
        }
    };

    view! {
        <div
            class="modal-cont"
            style=move || if store.modal_open().get() { "display: flex;" } else { "display: none;" }
        >
            <textarea
                class="textArea-cont"
                placeholder="Enter your task"
                prop:value=move || task_text.get()
                on:input=move |ev| set_task_text.set(event_target_value(&ev))
                on:keydown=on_keydown
            ></textarea>

            <div class="priority-color-cont">
                {PALETTE.iter().map(|&color| {
                    let is_active = move || store.priority().get() == color;
                    view! {
                        <div
                            class=move || if is_active() {
                                format!("{} priority-color active", color)
                            } else {
                                format!("{} priority-color", color)
                            }
                            on:click=move |_| { ctx.dispatch(|board| board.select_priority(color)); }
                        ></div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
