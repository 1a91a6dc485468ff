//! UI Components
//!
//! Leptos components rendering the board.

mod toolbar;
mod composer_modal;
mod ticket_card;
mod ticket_board;

pub use toolbar::Toolbar;
pub use composer_modal::ComposerModal;
pub use ticket_card::TicketCard;
pub use ticket_board::TicketBoard;
