//! Board Configuration
//!
//! Compile-time defaults shared by the store and the components.

use log::LevelFilter;

/// Board-wide settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardConfig {
    /// Storage key holding the ticket snapshot
    pub storage_key: &'static str,
    /// Key that submits the composer while its textarea has focus
    pub submit_key: &'static str,
    /// Length of generated ticket ids
    pub id_length: usize,
    /// Maximum console log level
    pub log_level: LevelFilter,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: "tickets",
            submit_key: "Shift",
            id_length: 9,
            log_level: LevelFilter::Info,
        }
    }
}
