//! Ticket Models
//!
//! Data structures persisted in the ticket snapshot.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ticket priority color.
///
/// The palette order is fixed; cycling walks it front to back and wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TicketColor {
    #[serde(rename = "lightpink")]
    Pink,
    #[serde(rename = "lightgreen")]
    Green,
    #[serde(rename = "lightblue")]
    Blue,
    /// Default composer color (last palette entry)
    #[default]
    #[serde(rename = "black")]
    Black,
}

/// The fixed 4-color palette, in cycling order
pub const PALETTE: [TicketColor; 4] = [
    TicketColor::Pink,
    TicketColor::Green,
    TicketColor::Blue,
    TicketColor::Black,
];

impl TicketColor {
    /// CSS color name, also used as the wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketColor::Pink => "lightpink",
            TicketColor::Green => "lightgreen",
            TicketColor::Blue => "lightblue",
            TicketColor::Black => "black",
        }
    }

    /// Position in the palette
    pub fn index(&self) -> usize {
        PALETTE
            .iter()
            .position(|c| c == self)
            .unwrap_or(PALETTE.len() - 1)
    }

    /// Next palette entry, wrapping after the last one
    pub fn next(&self) -> Self {
        PALETTE[(self.index() + 1) % PALETTE.len()]
    }
}

impl fmt::Display for TicketColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Short unique ticket identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(pub String);

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TicketId {
    fn from(s: &str) -> Self {
        TicketId(s.to_string())
    }
}

/// A single ticket card (matches the stored snapshot record)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(rename = "ticketColor")]
    pub color: TicketColor,
    #[serde(rename = "ticketTask")]
    pub task: String,
    #[serde(rename = "ticketID")]
    pub id: TicketId,
}

impl Ticket {
    pub fn new(id: TicketId, color: TicketColor, task: String) -> Self {
        Self { color, task, id }
    }
}
