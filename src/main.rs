//! Kanban Board Frontend Entry Point

mod models;
mod error;
mod config;
mod logging;
mod storage;
mod id_gen;
mod ticket_store;
mod board;
mod store;
mod context;
mod components;
mod app;

use app::App;
use config::BoardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(BoardConfig::default().log_level);
    mount_to_body(App);
}
