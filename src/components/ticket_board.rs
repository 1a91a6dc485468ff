//! Ticket Board Component
//!
//! Renders every ticket in creation order.

use leptos::prelude::*;

use crate::components::TicketCard;
use crate::context::BoardContext;
use crate::store::BoardViewStoreFields;

#[component]
pub fn TicketBoard() -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");
    let store = ctx.store;

    let count_label = move || {
        let tickets = store.tickets().read();
        let hidden = store.hidden().read();
        let visible = tickets.iter().filter(|t| !hidden.contains(&t.id)).count();
        format!("{} of {} tickets shown", visible, tickets.len())
    };

    view! {
        <div class="main-cont">
            <For
                each=move || store.tickets().get()
                key=|ticket| ticket.id.clone()
                children=move |ticket| view! { <TicketCard ticket=ticket /> }
            />
        </div>
        <p class="ticket-count">{count_label}</p>
    }
}
