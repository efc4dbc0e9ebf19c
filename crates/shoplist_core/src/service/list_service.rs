//! List use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for UI callers: browse, edit, commit,
//!   stash, delete.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence
//!   contracts.
//! - Service layer remains storage-agnostic.

use crate::model::list::{sort_by_recency, ListId, ListValidationError, ShoppingList};
use crate::repo::list_repo::{ListRepository, RepoResult};
use crate::service::edit_session::EditSession;

/// Use-case service wrapper over a list repository.
pub struct ListService<R: ListRepository> {
    repo: R,
}

impl<R: ListRepository> ListService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns every saved list, most recently updated first.
    ///
    /// Backs the home screen; the sort is stable so ties keep stored
    /// order.
    pub fn saved_lists_by_recency(&self) -> Vec<ShoppingList> {
        let mut lists = self.repo.saved_lists();
        sort_by_recency(&mut lists);
        lists
    }

    /// Finds one saved list by id.
    pub fn find_list(&self, id: ListId) -> Option<ShoppingList> {
        self.repo
            .saved_lists()
            .into_iter()
            .find(|list| list.id == id)
    }

    /// Starts an editing session over a brand-new list.
    pub fn start_session(
        &self,
        name: impl Into<String>,
    ) -> Result<EditSession, ListValidationError> {
        EditSession::start(name)
    }

    /// Resumes an editing session over a saved list's copy.
    ///
    /// Returns `None` when no list with the given id exists; the stored
    /// record stays untouched until the session is committed.
    pub fn resume_session(&self, id: ListId) -> Option<EditSession> {
        self.find_list(id).map(EditSession::resume)
    }

    /// Persists a session's working copy into the saved collection.
    ///
    /// Empty sessions are rejected by save validation. On success the
    /// stashed current-list slot is cleared and the record as persisted
    /// (refreshed `updated_at`) is returned.
    pub fn commit_session(&self, session: EditSession) -> RepoResult<ShoppingList> {
        let stored = self.repo.save_list(session.list())?;
        self.repo.clear_current_list()?;
        Ok(stored)
    }

    /// Stashes a session's working copy into the current-list slot.
    ///
    /// In-progress state survives an app restart this way without entering
    /// the durable collection.
    pub fn stash_session(&self, session: &EditSession) -> RepoResult<()> {
        self.repo.save_current_list(session.list())
    }

    /// Resumes the stashed in-progress session, if one exists.
    pub fn restore_stashed(&self) -> Option<EditSession> {
        self.repo.current_list().map(EditSession::resume)
    }

    /// Drops any stashed in-progress state.
    pub fn discard_stashed(&self) -> RepoResult<()> {
        self.repo.clear_current_list()
    }

    /// Removes a saved list by id. Succeeds silently when absent.
    pub fn delete_list(&self, id: ListId) -> RepoResult<()> {
        self.repo.delete_list(id)
    }
}
