use encore_result::Result;

use crate::ReferenceDb;
use crate::{SavedEvent, SavedEventCompositeKey};

use super::AbstractSavedEvents;

impl ReferenceDb {
    fn key(user_id: &str, event_id: &str) -> SavedEventCompositeKey {
        SavedEventCompositeKey {
            user: user_id.to_string(),
            event: event_id.to_string(),
        }
    }
}

#[async_trait]
impl AbstractSavedEvents for ReferenceDb {
    /// Insert a new saved event
    async fn insert_saved_event(&self, saved_event: &SavedEvent) -> Result<()> {
        let mut saved_events = self.saved_events.lock().await;
        if saved_events.contains_key(&saved_event.id) {
            return Err(create_error!(AlreadySaved));
        }

        saved_events.insert(saved_event.id.clone(), saved_event.clone());
        Ok(())
    }

    /// Fetch a user's copy of an event, if they saved it
    async fn fetch_saved_event(
        &self,
        user_id: &str,
        event_id: &str,
    ) -> Result<Option<SavedEvent>> {
        let saved_events = self.saved_events.lock().await;
        Ok(saved_events.get(&Self::key(user_id, event_id)).cloned())
    }

    /// Fetch all events a user has saved
    async fn fetch_saved_events(&self, user_id: &str) -> Result<Vec<SavedEvent>> {
        let saved_events = self.saved_events.lock().await;
        Ok(saved_events
            .values()
            .filter(|saved_event| saved_event.id.user == user_id)
            .cloned()
            .collect())
    }

    /// Delete a user's copy of an event if present
    async fn delete_saved_event(&self, user_id: &str, event_id: &str) -> Result<()> {
        let mut saved_events = self.saved_events.lock().await;
        if saved_events.remove(&Self::key(user_id, event_id)).is_none() {
            debug!("unsave for {user_id}/{event_id} matched no record");
        }

        Ok(())
    }
}
