//! Board Context
//!
//! Shared board handle provided via Leptos Context API.

use leptos::prelude::*;

use crate::board::Board;
use crate::config::BoardConfig;
use crate::store::{store_sync, BoardStore, BoardView};

/// Board handle shared by all components
#[derive(Clone, Copy)]
pub struct BoardContext {
    /// Authoritative board state (not reactive)
    board: StoredValue<Board, LocalStorage>,
    /// Reactive mirror the components render from
    pub store: BoardStore,
    pub config: BoardConfig,
}

impl BoardContext {
    pub fn new(board: Board, config: BoardConfig) -> Self {
        let store = BoardStore::new(BoardView::from_board(&board));
        Self {
            board: StoredValue::new_local(board),
            store,
            config,
        }
    }

    /// Run one board operation, then reconcile the view store.
    ///
    /// Returns `None` if the board has been disposed.
    pub fn dispatch<R>(&self, op: impl FnOnce(&mut Board) -> R) -> Option<R> {
        let store = self.store;
        self.board.try_update_value(|board| {
            let result = op(board);
            store_sync(&store, board);
            result
        })
    }
}

/// Show a blocking browser alert
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("[Alert] Failed to show alert: {:?}", e);
        }
    }
}
