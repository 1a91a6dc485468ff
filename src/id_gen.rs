//! Ticket Id Generation

use uuid::Uuid;

use crate::models::TicketId;

/// Source of fresh ticket ids. Collisions are not checked.
pub trait IdGenerator {
    fn next_id(&mut self) -> TicketId;
}

/// Short random ids cut from a v4 UUID
pub struct ShortIdGenerator {
    length: usize,
}

impl ShortIdGenerator {
    pub fn new(length: usize) -> Self {
        // A simple-format UUID has 32 hex characters
        Self { length: length.clamp(1, 32) }
    }
}

impl IdGenerator for ShortIdGenerator {
    fn next_id(&mut self) -> TicketId {
        let hex = Uuid::new_v4().simple().to_string();
        TicketId(hex[..self.length].to_string())
    }
}

/// Deterministic ids `t1`, `t2`, ...
#[cfg(test)]
#[derive(Default)]
pub struct SequentialIds {
    counter: u32,
}

#[cfg(test)]
impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> TicketId {
        self.counter += 1;
        TicketId(format!("t{}", self.counter))
    }
}
