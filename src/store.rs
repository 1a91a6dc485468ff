//! Board View Store
//!
//! Reactive mirror of the board that components render from.
//! Uses Leptos reactive_stores for fine-grained reactivity; after every
//! board operation the changed fields are reconciled from the board.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::Board;
use crate::models::{Ticket, TicketColor, TicketId};

/// Render state with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct BoardView {
    /// Tickets in creation order
    pub tickets: Vec<Ticket>,
    pub modal_open: bool,
    pub delete_mode: bool,
    /// Active composer color
    pub priority: TicketColor,
    pub unlocked: HashSet<TicketId>,
    pub hidden: HashSet<TicketId>,
}

impl BoardView {
    pub fn from_board(board: &Board) -> Self {
        let ui = board.ui();
        Self {
            tickets: board.tickets().to_vec(),
            modal_open: ui.modal_open,
            delete_mode: ui.delete_mode,
            priority: ui.priority,
            unlocked: ui.unlocked.clone(),
            hidden: ui.hidden.clone(),
        }
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardView>;

// ========================
// Store Helper Functions
// ========================

/// Write a field only when its value changed, so unrelated views stay put
fn set_if_changed<T: PartialEq>(current: &mut T, next: T) -> bool {
    if *current == next {
        false
    } else {
        *current = next;
        true
    }
}

/// Reconcile the store with the board
pub fn store_sync(store: &BoardStore, board: &Board) {
    let next = BoardView::from_board(board);

    store.tickets().maybe_update(|t| set_if_changed(t, next.tickets));
    store.modal_open().maybe_update(|v| set_if_changed(v, next.modal_open));
    store.delete_mode().maybe_update(|v| set_if_changed(v, next.delete_mode));
    store.priority().maybe_update(|p| set_if_changed(p, next.priority));
    store.unlocked().maybe_update(|u| set_if_changed(u, next.unlocked));
    store.hidden().maybe_update(|h| set_if_changed(h, next.hidden));
}

/// Look up a ticket's stored color in the view
pub fn store_ticket_color(store: &BoardStore, id: &TicketId) -> Option<TicketColor> {
    store
        .tickets()
        .read()
        .iter()
        .find(|t| &t.id == id)
        .map(|t| t.color)
}
