//! Shopping list domain model.
//!
//! # Responsibility
//! - Define the canonical list/item records persisted by the repository.
//! - Provide the pure item operations invoked by editing sessions.
//!
//! # Invariants
//! - `id` values are stable and never reused.
//! - Every item quantity is >= 1 at rest; decrementing a quantity-1 item
//!   removes it instead of storing 0.
//! - Item ids are unique within one list; insertion order is append order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a shopping list.
pub type ListId = Uuid;

/// Stable identifier for an item within a list.
pub type ItemId = Uuid;

/// Validation failures for list/item state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListValidationError {
    /// List name is empty after trimming.
    EmptyListName,
    /// Item name is empty after trimming.
    EmptyItemName,
    /// An item carries quantity 0, which must never exist at rest.
    ZeroQuantity { item: ItemId },
    /// Two items in one list share the same id.
    DuplicateItemId { item: ItemId },
    /// A list with no items was offered for durable persistence.
    NoItems,
}

impl Display for ListValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyListName => write!(f, "list name must not be empty"),
            Self::EmptyItemName => write!(f, "item name must not be empty"),
            Self::ZeroQuantity { item } => {
                write!(f, "item {item} has quantity 0; items at rest must be >= 1")
            }
            Self::DuplicateItemId { item } => {
                write!(f, "item id {item} appears more than once in the list")
            }
            Self::NoItems => write!(f, "cannot save a list with no items"),
        }
    }
}

impl Error for ListValidationError {}

/// Outcome of decrementing an item's quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecreaseOutcome {
    /// Quantity was above 1 and is now one unit lower.
    Decremented(u32),
    /// Quantity was exactly 1, so the item was removed from the list.
    Removed,
    /// No item with the given id exists; the list is unchanged.
    NotFound,
}

/// A named product entry with a quantity, belonging to exactly one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
}

impl ShoppingItem {
    /// Creates an item with a fresh id and quantity 1.
    ///
    /// The name must be non-empty after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, ListValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ListValidationError::EmptyItemName);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            quantity: 1,
        })
    }
}

/// A named, ordered collection of items a user intends to shop for.
///
/// Field names are serialized in the persisted JSON layout of the storage
/// slots (`createdAt` / `updatedAt`, string ids).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub id: ListId,
    pub name: String,
    pub items: Vec<ShoppingItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShoppingList {
    /// Creates an empty list with a generated stable id.
    ///
    /// Both timestamps start at "now"; `updated_at` is refreshed by the
    /// repository on every durable save, `created_at` never changes again.
    pub fn new(name: impl Into<String>) -> Result<Self, ListValidationError> {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates an empty list with a caller-provided stable id.
    pub fn with_id(id: ListId, name: impl Into<String>) -> Result<Self, ListValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ListValidationError::EmptyListName);
        }
        let now = Utc::now();
        Ok(Self {
            id,
            name,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Appends a new item with the given name and quantity 1.
    ///
    /// Returns the generated item id. The name must be non-empty after
    /// trimming.
    pub fn add_item(&mut self, name: impl Into<String>) -> Result<ItemId, ListValidationError> {
        let item = ShoppingItem::new(name)?;
        let id = item.id;
        self.items.push(item);
        Ok(id)
    }

    /// Increments the quantity of the item with the given id.
    ///
    /// Returns the new quantity, or `None` when no such item exists (the
    /// list is unchanged).
    pub fn increase_quantity(&mut self, id: ItemId) -> Option<u32> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.quantity += 1;
        Some(item.quantity)
    }

    /// Decrements the quantity of the item with the given id.
    ///
    /// A quantity-1 item is removed entirely; quantity 0 must never exist
    /// at rest. Absent ids leave the list unchanged.
    pub fn decrease_quantity(&mut self, id: ItemId) -> DecreaseOutcome {
        let Some(position) = self.items.iter().position(|item| item.id == id) else {
            return DecreaseOutcome::NotFound;
        };

        if self.items[position].quantity > 1 {
            self.items[position].quantity -= 1;
            DecreaseOutcome::Decremented(self.items[position].quantity)
        } else {
            self.items.remove(position);
            DecreaseOutcome::Removed
        }
    }

    /// Returns the sum of all item quantities (0 for an empty list).
    ///
    /// Display-only aggregate; never persisted.
    pub fn total_units(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Returns the item with the given id, if present.
    pub fn item(&self, id: ItemId) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Checks the at-rest invariants of this list.
    ///
    /// An empty items vector is legal here; only durable saves reject it
    /// (see [`validate_for_save`](Self::validate_for_save)).
    pub fn validate(&self) -> Result<(), ListValidationError> {
        if self.name.trim().is_empty() {
            return Err(ListValidationError::EmptyListName);
        }

        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if item.name.trim().is_empty() {
                return Err(ListValidationError::EmptyItemName);
            }
            if item.quantity == 0 {
                return Err(ListValidationError::ZeroQuantity { item: item.id });
            }
            if !seen.insert(item.id) {
                return Err(ListValidationError::DuplicateItemId { item: item.id });
            }
        }

        Ok(())
    }

    /// Checks the invariants required to enter the durable collection.
    ///
    /// Everything `validate` checks, plus at least one item.
    pub fn validate_for_save(&self) -> Result<(), ListValidationError> {
        self.validate()?;
        if self.items.is_empty() {
            return Err(ListValidationError::NoItems);
        }
        Ok(())
    }
}

/// Stable sort, most recently updated list first.
pub fn sort_by_recency(lists: &mut [ShoppingList]) {
    lists.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
}
