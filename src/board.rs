//! Board State Machine
//!
//! Wraps the ticket store with the UI flags every handler works on:
//! composer visibility, delete mode, selected priority, lock state and
//! filter visibility. Each user interaction maps to one method here.

use std::collections::HashSet;

use crate::error::{BoardError, Result};
use crate::models::{Ticket, TicketColor, TicketId};
use crate::ticket_store::TicketStore;

/// UI flags owned by the board
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// Composer modal shown
    pub modal_open: bool,
    /// Clicking a ticket deletes it
    pub delete_mode: bool,
    /// Color for the next created ticket
    pub priority: TicketColor,
    /// Tickets whose task area is currently editable
    pub unlocked: HashSet<TicketId>,
    /// Tickets hidden by the last filter click
    pub hidden: HashSet<TicketId>,
}

pub struct Board {
    store: TicketStore,
    ui: UiState,
}

impl Board {
    pub fn new(store: TicketStore) -> Self {
        Self {
            store,
            ui: UiState::default(),
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &TicketStore {
        &self.store
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn tickets(&self) -> &[Ticket] {
        self.store.tickets()
    }

    // ========================
    // Composer
    // ========================

    pub fn toggle_modal(&mut self) -> bool {
        self.ui.modal_open = !self.ui.modal_open;
        self.ui.modal_open
    }

    pub fn select_priority(&mut self, color: TicketColor) {
        self.ui.priority = color;
    }

    /// Create a ticket from composer text with the selected priority.
    ///
    /// Empty (after trimming) text is rejected and nothing changes.
    /// On success the composer closes.
    pub fn submit(&mut self, text: &str) -> Result<Ticket> {
        let task = text.trim();
        if task.is_empty() {
            return Err(BoardError::EmptyTask);
        }
        let ticket = self.store.add_ticket(self.ui.priority, task)?;
        self.ui.modal_open = false;
        Ok(ticket)
    }

    // ========================
    // Delete mode
    // ========================

    pub fn toggle_delete_mode(&mut self) -> bool {
        self.ui.delete_mode = !self.ui.delete_mode;
        log::info!("[Board] Delete mode {}", if self.ui.delete_mode { "on" } else { "off" });
        self.ui.delete_mode
    }

    /// Card click: removes the ticket only while delete mode is active
    pub fn click_ticket(&mut self, id: &TicketId) -> Result<Option<Ticket>> {
        if !self.ui.delete_mode {
            return Ok(None);
        }
        let removed = self.store.remove(id)?;
        if removed.is_some() {
            self.ui.unlocked.remove(id);
            self.ui.hidden.remove(id);
        }
        Ok(removed)
    }

    // ========================
    // Per-ticket handlers
    // ========================

    pub fn is_locked(&self, id: &TicketId) -> bool {
        !self.ui.unlocked.contains(id)
    }

    /// Flip the lock and commit `current_text` to the store.
    /// Returns true when the ticket ends up locked.
    pub fn toggle_lock(&mut self, id: &TicketId, current_text: &str) -> Result<bool> {
        if self.store.get(id).is_none() {
            return Ok(true);
        }
        self.store.update_text(id, current_text)?;
        let locked = !self.is_locked(id);
        if locked {
            self.ui.unlocked.remove(id);
        } else {
            self.ui.unlocked.insert(id.clone());
        }
        Ok(locked)
    }

    /// Cycle the ticket to the next palette color
    pub fn cycle_color(&mut self, id: &TicketId) -> Result<Option<TicketColor>> {
        self.store.update_color(id)
    }

    // ========================
    // Filter
    // ========================

    /// Show only tickets whose current color is `color`
    pub fn filter_by(&mut self, color: TicketColor) {
        self.ui.hidden = self
            .store
            .tickets()
            .iter()
            .filter(|t| t.color != color)
            .map(|t| t.id.clone())
            .collect();
        log::debug!("[Board] Filter {}: {} visible", color, self.visible_count());
    }

    pub fn show_all(&mut self) {
        self.ui.hidden.clear();
    }

    pub fn is_visible(&self, id: &TicketId) -> bool {
        !self.ui.hidden.contains(id)
    }

    pub fn visible_count(&self) -> usize {
        self.store
            .tickets()
            .iter()
            .filter(|t| self.is_visible(&t.id))
            .count()
    }
}
