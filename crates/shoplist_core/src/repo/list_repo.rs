//! List repository contract and SQLite slot-store implementation.
//!
//! # Responsibility
//! - Provide durable CRUD access to the saved-list collection and the
//!   single current-list slot.
//! - Keep JSON/SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must pass list validation before touching the store.
//! - Read paths degrade to empty/absent on missing or undecodable slot
//!   data; callers never see read errors.
//! - Saving refreshes `updated_at` and preserves the stored entry's
//!   `created_at`; the whole collection is replaced by one slot write.

use crate::model::list::{ListId, ListValidationError, ShoppingList};
use crate::store::{migrations, StoreError};
use chrono::Utc;
use log::warn;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Slot key holding the JSON array of saved lists.
pub const LISTS_KEY: &str = "shopping_lists";

/// Slot key holding the single in-progress list, when one is stashed.
pub const CURRENT_LIST_KEY: &str = "current_shopping_list";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for list persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ListValidationError),
    Store(StoreError),
    Encode(serde_json::Error),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode list state: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; \
                 open connections through the store module"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
        }
    }
}

impl From<ListValidationError> for RepoError {
    fn from(value: ListValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Store(StoreError::Sqlite(value))
    }
}

/// Repository interface for saved lists and the current-list slot.
pub trait ListRepository {
    /// Returns every saved list, in stored order.
    ///
    /// Missing or undecodable slot data degrades to an empty vector; this
    /// call never fails.
    fn saved_lists(&self) -> Vec<ShoppingList>;

    /// Upserts one list into the saved collection and returns the record
    /// as persisted (refreshed `updated_at`, original `created_at`).
    fn save_list(&self, list: &ShoppingList) -> RepoResult<ShoppingList>;

    /// Removes the list with the given id. Succeeds silently when absent.
    fn delete_list(&self, id: ListId) -> RepoResult<()>;

    /// Returns the stashed in-progress list, if any.
    ///
    /// Missing or undecodable slot data degrades to `None`.
    fn current_list(&self) -> Option<ShoppingList>;

    /// Overwrites the current-list slot. Empty items are allowed here;
    /// this slot holds editing state, not a durable list.
    fn save_current_list(&self, list: &ShoppingList) -> RepoResult<()>;

    /// Deletes the current-list slot. Idempotent.
    fn clear_current_list(&self) -> RepoResult<()>;
}

/// SQLite slot-store implementation of [`ListRepository`].
#[derive(Debug)]
pub struct SqliteListRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteListRepository<'conn> {
    /// Wraps a connection after verifying its schema version.
    ///
    /// Rejects connections that were not opened through the store module,
    /// so repository code never runs against an unmigrated database.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = migrations::latest_version();
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;

        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        Ok(Self { conn })
    }

    fn read_slot(&self, key: &str) -> RepoResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM slots WHERE key = ?1;")?;
        let mut rows = stmt.query([key])?;

        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }

        Ok(None)
    }

    fn write_slot(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value, written_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                written_at = excluded.written_at;",
            [key, value],
        )?;
        Ok(())
    }

    fn delete_slot(&self, key: &str) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM slots WHERE key = ?1;", [key])?;
        Ok(())
    }

    fn write_collection(&self, lists: &[ShoppingList]) -> RepoResult<()> {
        let encoded = serde_json::to_string(lists).map_err(RepoError::Encode)?;
        self.write_slot(LISTS_KEY, &encoded)
    }
}

impl ListRepository for SqliteListRepository<'_> {
    fn saved_lists(&self) -> Vec<ShoppingList> {
        let raw = match self.read_slot(LISTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("event=lists_read module=repo status=degraded error={err}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(lists) => lists,
            Err(err) => {
                warn!("event=lists_decode module=repo status=degraded error={err}");
                Vec::new()
            }
        }
    }

    fn save_list(&self, list: &ShoppingList) -> RepoResult<ShoppingList> {
        list.validate_for_save()?;

        let mut lists = self.saved_lists();
        let mut stored = list.clone();
        stored.updated_at = Utc::now();

        match lists.iter_mut().find(|entry| entry.id == list.id) {
            Some(existing) => {
                // created_at is fixed at first save; re-saves keep it.
                stored.created_at = existing.created_at;
                *existing = stored.clone();
            }
            None => lists.push(stored.clone()),
        }

        self.write_collection(&lists)?;
        Ok(stored)
    }

    fn delete_list(&self, id: ListId) -> RepoResult<()> {
        let mut lists = self.saved_lists();
        lists.retain(|entry| entry.id != id);
        self.write_collection(&lists)
    }

    fn current_list(&self) -> Option<ShoppingList> {
        let raw = match self.read_slot(CURRENT_LIST_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!("event=current_read module=repo status=degraded error={err}");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(list) => Some(list),
            Err(err) => {
                warn!("event=current_decode module=repo status=degraded error={err}");
                None
            }
        }
    }

    fn save_current_list(&self, list: &ShoppingList) -> RepoResult<()> {
        list.validate()?;
        let encoded = serde_json::to_string(list).map_err(RepoError::Encode)?;
        self.write_slot(CURRENT_LIST_KEY, &encoded)
    }

    fn clear_current_list(&self) -> RepoResult<()> {
        self.delete_slot(CURRENT_LIST_KEY)
    }
}
