use encore_result::Result;

use crate::SavedEvent;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractSavedEvents: Sync + Send {
    /// Insert a new saved event.
    ///
    /// Fails with `AlreadySaved` when a record for the same
    /// (owner, event) pair exists; the uniqueness check is atomic
    /// with the insert.
    async fn insert_saved_event(&self, saved_event: &SavedEvent) -> Result<()>;

    /// Fetch a user's copy of an event, if they saved it
    async fn fetch_saved_event(&self, user_id: &str, event_id: &str)
        -> Result<Option<SavedEvent>>;

    /// Fetch all events a user has saved, in no particular order
    async fn fetch_saved_events(&self, user_id: &str) -> Result<Vec<SavedEvent>>;

    /// Delete a user's copy of an event if present
    async fn delete_saved_event(&self, user_id: &str, event_id: &str) -> Result<()>;
}
