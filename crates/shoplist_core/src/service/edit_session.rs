//! In-memory editing session over one shopping list.
//!
//! # Responsibility
//! - Own a single screen's working copy of a list.
//! - Expose the pure item operations without touching storage.
//!
//! # Invariants
//! - A session never persists anything itself; committing and stashing go
//!   through [`ListService`](crate::service::list_service::ListService).
//! - Dropping a session discards its working copy; storage is unaffected.

use crate::model::list::{
    DecreaseOutcome, ItemId, ListValidationError, ShoppingItem, ShoppingList,
};

/// Working copy of a list being edited.
///
/// Replaces the ambient "current list" singleton of a global slot: session
/// state is explicit and owned by the caller, and only reaches the
/// current-list slot when deliberately stashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    list: ShoppingList,
}

impl EditSession {
    /// Starts a session over a brand-new empty list with a fresh id.
    pub fn start(name: impl Into<String>) -> Result<Self, ListValidationError> {
        Ok(Self {
            list: ShoppingList::new(name)?,
        })
    }

    /// Resumes a session over an already-existing list (saved or stashed).
    pub fn resume(list: ShoppingList) -> Self {
        Self { list }
    }

    /// Read access to the working copy.
    pub fn list(&self) -> &ShoppingList {
        &self.list
    }

    /// Consumes the session, yielding the working copy.
    pub fn into_list(self) -> ShoppingList {
        self.list
    }

    /// Appends a new quantity-1 item; returns its generated id.
    pub fn add_item(&mut self, name: impl Into<String>) -> Result<ItemId, ListValidationError> {
        self.list.add_item(name)
    }

    /// Increments an item's quantity; `None` when the id is absent.
    pub fn increase_quantity(&mut self, id: ItemId) -> Option<u32> {
        self.list.increase_quantity(id)
    }

    /// Decrements an item's quantity, removing it at quantity 1.
    pub fn decrease_quantity(&mut self, id: ItemId) -> DecreaseOutcome {
        self.list.decrease_quantity(id)
    }

    /// Sum of all quantities in the working copy.
    pub fn total_units(&self) -> u64 {
        self.list.total_units()
    }

    /// Returns an item from the working copy, if present.
    pub fn item(&self, id: ItemId) -> Option<&ShoppingItem> {
        self.list.item(id)
    }

    /// Whether the working copy has any items yet.
    pub fn has_items(&self) -> bool {
        !self.list.items.is_empty()
    }
}
