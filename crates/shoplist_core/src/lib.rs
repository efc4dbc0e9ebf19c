//! Core domain and persistence logic for shoplist.
//! This crate is the single source of truth for list/item invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::list::{
    sort_by_recency, DecreaseOutcome, ItemId, ListId, ListValidationError, ShoppingItem,
    ShoppingList,
};
pub use repo::list_repo::{
    ListRepository, RepoError, RepoResult, SqliteListRepository, CURRENT_LIST_KEY, LISTS_KEY,
};
pub use service::edit_session::EditSession;
pub use service::list_service::ListService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
