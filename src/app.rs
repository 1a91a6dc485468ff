//! Kanban Board App
//!
//! Opens the saved board and lays out toolbar, composer and tickets.

use leptos::prelude::*;

use crate::board::Board;
use crate::components::{ComposerModal, TicketBoard, Toolbar};
use crate::config::BoardConfig;
use crate::context::BoardContext;
use crate::id_gen::ShortIdGenerator;
use crate::storage::{BrowserStorage, MemoryStorage, SnapshotStorage};
use crate::ticket_store::TicketStore;

/// Load the board from localStorage.
///
/// Falls back to an in-memory board when localStorage is unavailable or the
/// saved snapshot cannot be read; a bad snapshot is left untouched.
fn open_board(config: &BoardConfig) -> Board {
    let storage: Box<dyn SnapshotStorage> = match BrowserStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("[APP] {}; tickets will not survive a reload", e);
            Box::new(MemoryStorage::new())
        }
    };

    let ids = || Box::new(ShortIdGenerator::new(config.id_length));
    let store = match TicketStore::load(storage, ids(), config.storage_key) {
        Ok(store) => store,
        Err(e) => {
            log::error!("[APP] Failed to load saved tickets: {}", e);
            TicketStore::empty(Box::new(MemoryStorage::new()), ids(), config.storage_key)
        }
    };
    Board::new(store)
}

#[component]
pub fn App() -> impl IntoView {
    let config = BoardConfig::default();
    let ctx = BoardContext::new(open_board(&config), config);

    // Provide context to all children
    provide_context(ctx);

    view! {
        <div class="board-layout">
            <Toolbar />
            <ComposerModal />
            <TicketBoard />
        </div>
    }
}
