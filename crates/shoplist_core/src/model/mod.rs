//! Domain model for shopping lists and their items.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep item-quantity invariants enforceable in one place.
//!
//! # Invariants
//! - Every list and item is identified by a stable UUID.
//! - Deletion is hard delete; there are no tombstones.

pub mod list;
