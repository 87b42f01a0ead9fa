use encore_result::Result;

use crate::is_duplicate_key;
use crate::MongoDb;
use crate::SavedEvent;

use super::AbstractSavedEvents;

static COL: &str = "saved_events";

#[async_trait]
impl AbstractSavedEvents for MongoDb {
    /// Insert a new saved event
    async fn insert_saved_event(&self, saved_event: &SavedEvent) -> Result<()> {
        self.col::<SavedEvent>(COL)
            .insert_one(saved_event)
            .await
            .map(|_| ())
            .map_err(|err| {
                // Duplicate (owner, event) pairs collide on the composite
                // primary key rather than racing a check-then-write.
                if is_duplicate_key(&err) {
                    create_error!(AlreadySaved)
                } else {
                    create_database_error!("insert_one", COL)
                }
            })
    }

    /// Fetch a user's copy of an event, if they saved it
    async fn fetch_saved_event(
        &self,
        user_id: &str,
        event_id: &str,
    ) -> Result<Option<SavedEvent>> {
        query!(
            self,
            find_one,
            COL,
            doc! {
                "_id.user": user_id,
                "_id.event": event_id
            }
        )
    }

    /// Fetch all events a user has saved
    async fn fetch_saved_events(&self, user_id: &str) -> Result<Vec<SavedEvent>> {
        query!(
            self,
            find,
            COL,
            doc! {
                "_id.user": user_id
            }
        )
    }

    /// Delete a user's copy of an event if present
    async fn delete_saved_event(&self, user_id: &str, event_id: &str) -> Result<()> {
        let result = query!(
            self,
            delete_one,
            COL,
            doc! {
                "_id.user": user_id,
                "_id.event": event_id
            }
        )?;

        if result.deleted_count == 0 {
            debug!("unsave for {user_id}/{event_id} matched no record");
        }

        Ok(())
    }
}
