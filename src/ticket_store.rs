//! Ticket Store
//!
//! Owns the ordered ticket list and mirrors it to durable storage.
//! Every mutation overwrites the full snapshot; there are no partial writes.

use crate::error::Result;
use crate::id_gen::IdGenerator;
use crate::models::{Ticket, TicketColor, TicketId};
use crate::storage::SnapshotStorage;

pub struct TicketStore {
    tickets: Vec<Ticket>,
    storage: Box<dyn SnapshotStorage>,
    ids: Box<dyn IdGenerator>,
    key: String,
}

impl TicketStore {
    /// Store with no tickets; nothing is read from `storage`
    pub fn empty(
        storage: Box<dyn SnapshotStorage>,
        ids: Box<dyn IdGenerator>,
        key: &str,
    ) -> Self {
        Self {
            tickets: Vec::new(),
            storage,
            ids,
            key: key.to_string(),
        }
    }

    /// Load the saved snapshot (if any) from `storage`.
    ///
    /// The stored records are replayed as-is, in their saved order.
    pub fn load(
        storage: Box<dyn SnapshotStorage>,
        ids: Box<dyn IdGenerator>,
        key: &str,
    ) -> Result<Self> {
        let tickets = match storage.read(key)? {
            Some(raw) => serde_json::from_str::<Vec<Ticket>>(&raw)?,
            None => Vec::new(),
        };
        log::info!("[Store] Loaded {} tickets from '{}'", tickets.len(), key);
        let mut store = Self::empty(storage, ids, key);
        store.tickets = tickets;
        Ok(store)
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn get(&self, id: &TicketId) -> Option<&Ticket> {
        self.find_index(id).map(|i| &self.tickets[i])
    }

    /// Linear scan for the position of `id`
    pub fn find_index(&self, id: &TicketId) -> Option<usize> {
        self.tickets.iter().position(|t| &t.id == id)
    }

    /// Append a new ticket and persist
    pub fn add_ticket(&mut self, color: TicketColor, task: &str) -> Result<Ticket> {
        let ticket = Ticket::new(self.ids.next_id(), color, task.to_string());
        let mut next = self.tickets.clone();
        next.push(ticket.clone());
        self.commit(next)?;
        log::info!("[Store] Added ticket {} ({})", ticket.id, ticket.color);
        Ok(ticket)
    }

    /// Move the stored color to the next palette entry.
    /// Returns the new color, or `None` if the ticket is gone.
    pub fn update_color(&mut self, id: &TicketId) -> Result<Option<TicketColor>> {
        let Some(index) = self.find_index(id) else {
            log::warn!("[Store] update_color: unknown ticket {}", id);
            return Ok(None);
        };
        let color = self.tickets[index].color.next();
        let mut next = self.tickets.clone();
        next[index].color = color;
        self.commit(next)?;
        Ok(Some(color))
    }

    /// Commit edited text. Returns false if the ticket is gone.
    pub fn update_text(&mut self, id: &TicketId, task: &str) -> Result<bool> {
        let Some(index) = self.find_index(id) else {
            log::warn!("[Store] update_text: unknown ticket {}", id);
            return Ok(false);
        };
        let mut next = self.tickets.clone();
        next[index].task = task.to_string();
        self.commit(next)?;
        Ok(true)
    }

    /// Splice the ticket out of the list and persist
    pub fn remove(&mut self, id: &TicketId) -> Result<Option<Ticket>> {
        let Some(index) = self.find_index(id) else {
            log::warn!("[Store] remove: unknown ticket {}", id);
            return Ok(None);
        };
        let mut next = self.tickets.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        log::info!("[Store] Removed ticket {}", removed.id);
        Ok(Some(removed))
    }

    /// Serialized form of the current list
    pub fn snapshot(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.tickets)?)
    }

    #[cfg(test)]
    pub fn storage(&self) -> &dyn SnapshotStorage {
        self.storage.as_ref()
    }

    /// Write `next` to storage, then make it the in-memory list.
    /// On a failed write the list is left unchanged.
    fn commit(&mut self, next: Vec<Ticket>) -> Result<()> {
        let snapshot = serde_json::to_string(&next)?;
        self.storage.write(&self.key, &snapshot)?;
        self.tickets = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;
    use crate::id_gen::SequentialIds;
    use crate::storage::{FailingStorage, MemoryStorage};

    const KEY: &str = "tickets";

    fn store_on(storage: Box<dyn SnapshotStorage>) -> TicketStore {
        TicketStore::load(storage, Box::new(SequentialIds::default()), KEY).unwrap()
    }

    fn empty_store() -> TicketStore {
        store_on(Box::new(MemoryStorage::new()))
    }

    fn saved(store: &TicketStore) -> Vec<Ticket> {
        let raw = store.storage().read(KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_load_without_snapshot() {
        let store = empty_store();
        assert!(store.tickets().is_empty());
        assert_eq!(store.storage().read(KEY).unwrap(), None);
    }

    #[test]
    fn test_add_persists_full_snapshot() {
        let mut store = empty_store();
        let first = store.add_ticket(TicketColor::Pink, "First").unwrap();
        let second = store.add_ticket(TicketColor::Blue, "Second").unwrap();

        assert_eq!(first.id, TicketId::from("t1"));
        assert_eq!(second.id, TicketId::from("t2"));
        assert_eq!(saved(&store), vec![first, second]);
    }

    #[test]
    fn test_find_index() {
        let mut store = empty_store();
        store.add_ticket(TicketColor::Pink, "a").unwrap();
        store.add_ticket(TicketColor::Pink, "b").unwrap();

        assert_eq!(store.find_index(&"t2".into()), Some(1));
        assert_eq!(store.find_index(&"missing".into()), None);
    }

    #[test]
    fn test_update_color_cycles_stored_value() {
        let mut store = empty_store();
        let ticket = store.add_ticket(TicketColor::Blue, "a").unwrap();

        assert_eq!(store.update_color(&ticket.id).unwrap(), Some(TicketColor::Black));
        assert_eq!(store.update_color(&ticket.id).unwrap(), Some(TicketColor::Pink));
        assert_eq!(saved(&store)[0].color, TicketColor::Pink);
    }

    #[test]
    fn test_update_text() {
        let mut store = empty_store();
        let ticket = store.add_ticket(TicketColor::Green, "draft").unwrap();

        assert!(store.update_text(&ticket.id, "final").unwrap());
        assert_eq!(store.get(&ticket.id).unwrap().task, "final");
        assert_eq!(saved(&store)[0].task, "final");
        assert!(!store.update_text(&"missing".into(), "x").unwrap());
    }

    #[test]
    fn test_remove_splices_in_place() {
        let mut store = empty_store();
        store.add_ticket(TicketColor::Pink, "a").unwrap();
        store.add_ticket(TicketColor::Green, "b").unwrap();
        store.add_ticket(TicketColor::Blue, "c").unwrap();

        let removed = store.remove(&"t2".into()).unwrap().unwrap();
        assert_eq!(removed.task, "b");

        let ids: Vec<_> = saved(&store).into_iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec!["t1", "t3"]);
        assert!(store.remove(&"t2".into()).unwrap().is_none());
    }

    #[test]
    fn test_reload_reproduces_tickets() {
        let mut store = empty_store();
        store.add_ticket(TicketColor::Pink, "a").unwrap();
        let b = store.add_ticket(TicketColor::Green, "b").unwrap();
        store.update_color(&b.id).unwrap();

        let snapshot = store.snapshot().unwrap();
        let reloaded = TicketStore::load(
            Box::new(MemoryStorage::with_value(KEY, &snapshot)),
            Box::new(SequentialIds::default()),
            KEY,
        )
        .unwrap();

        assert_eq!(reloaded.tickets(), store.tickets());
    }

    #[test]
    fn test_load_malformed_snapshot() {
        let result = TicketStore::load(
            Box::new(MemoryStorage::with_value(KEY, "{not json")),
            Box::new(SequentialIds::default()),
            KEY,
        );
        assert!(matches!(result, Err(BoardError::Snapshot(_))));
    }

    #[test]
    fn test_update_color_unknown_id() {
        let mut store = empty_store();
        store.add_ticket(TicketColor::Pink, "a").unwrap();

        assert_eq!(store.update_color(&"missing".into()).unwrap(), None);
        assert_eq!(saved(&store)[0].color, TicketColor::Pink);
    }

    #[test]
    fn test_failed_write_leaves_list_unchanged() {
        let mut seeded = empty_store();
        seeded.add_ticket(TicketColor::Green, "keep").unwrap();
        let snapshot = seeded.snapshot().unwrap();

        let mut store = store_on(Box::new(FailingStorage::with_value(KEY, &snapshot)));
        let before = store.tickets().to_vec();

        assert!(matches!(
            store.add_ticket(TicketColor::Pink, "new"),
            Err(BoardError::Storage(_))
        ));
        assert!(store.update_color(&"t1".into()).is_err());
        assert!(store.update_text(&"t1".into(), "changed").is_err());
        assert!(store.remove(&"t1".into()).is_err());

        assert_eq!(store.tickets(), before.as_slice());
        assert_eq!(store.snapshot().unwrap(), snapshot);
    }
}
