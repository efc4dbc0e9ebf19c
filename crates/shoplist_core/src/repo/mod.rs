//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate slot-store query and JSON codec details from service
//!   orchestration.
//!
//! # Invariants
//! - Repository writes must enforce list validation before persistence.
//! - Repository reads degrade to empty/absent instead of erroring.

pub mod list_repo;
