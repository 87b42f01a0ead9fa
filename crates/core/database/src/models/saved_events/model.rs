use chrono::{DateTime, Utc};
use encore_models::v0;
use encore_result::{Error, ErrorType, Result};
use serde_json::Value;

use crate::Database;

auto_derived!(
    /// One user's bookmark of one external event
    pub struct SavedEvent {
        /// Composite key pointing to a user's copy of an event
        #[serde(rename = "_id")]
        pub id: SavedEventCompositeKey,

        /// Provider-shaped event payload captured at save time
        ///
        /// Never re-validated or re-fetched after the save.
        pub snapshot: Value,

        /// When the bookmark was created
        pub saved_at: DateTime<Utc>,
    }

    /// Composite primary key consisting of owner and external event id
    #[derive(Hash)]
    pub struct SavedEventCompositeKey {
        /// User Id of the owner
        pub user: String,
        /// Opaque event id issued by the ticketing provider
        pub event: String,
    }
);

impl SavedEvent {
    /// Save an event for a user.
    ///
    /// Saving an event the user already saved succeeds and returns the
    /// existing record untouched; the duplicate never reaches the caller
    /// as an error. Uniqueness is enforced by the primary key, so two
    /// concurrent saves for the same pair produce exactly one record.
    pub async fn save(
        db: &Database,
        user_id: &str,
        event_id: &str,
        snapshot: Value,
    ) -> Result<SavedEvent> {
        let saved_event = SavedEvent {
            id: SavedEventCompositeKey {
                user: user_id.to_string(),
                event: event_id.to_string(),
            },
            snapshot,
            saved_at: Utc::now(),
        };

        match db.insert_saved_event(&saved_event).await {
            Ok(()) => Ok(saved_event),
            Err(Error {
                error_type: ErrorType::AlreadySaved,
                ..
            }) => {
                // A concurrent unsave may have removed the record between
                // the failed insert and this fetch; fall back to the copy
                // we just built so the caller still observes a success.
                Ok(db
                    .fetch_saved_event(user_id, event_id)
                    .await?
                    .unwrap_or(saved_event))
            }
            Err(error) => Err(error),
        }
    }

    /// Remove a user's bookmark of an event.
    ///
    /// Removing a bookmark that does not exist is a success, so retried
    /// unsave requests stay harmless.
    pub async fn unsave(db: &Database, user_id: &str, event_id: &str) -> Result<()> {
        db.delete_saved_event(user_id, event_id).await
    }
}

impl From<SavedEvent> for v0::SavedEvent {
    fn from(value: SavedEvent) -> Self {
        v0::SavedEvent {
            event_id: value.id.event,
            event_data: value.snapshot,
            saved_at: value.saved_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{Database, ReferenceDb, SavedEvent};

    fn db() -> Database {
        Database::Reference(ReferenceDb::default())
    }

    #[tokio::test]
    async fn save_twice_keeps_one_record() {
        let db = db();

        let first = SavedEvent::save(&db, "u1", "evt-42", json!({ "name": "Show A" }))
            .await
            .expect("first save");
        let second = SavedEvent::save(&db, "u1", "evt-42", json!({ "name": "Show B" }))
            .await
            .expect("second save");

        // The second save is a no-op, not a snapshot refresh.
        assert_eq!(second.snapshot, first.snapshot);

        let saved = db.fetch_saved_events("u1").await.expect("fetch");
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id.event, "evt-42");
    }

    #[tokio::test]
    async fn unsave_without_record_is_harmless() {
        let db = db();

        SavedEvent::unsave(&db, "u1", "evt-42")
            .await
            .expect("unsave");

        assert!(db.fetch_saved_events("u1").await.expect("fetch").is_empty());
    }

    #[tokio::test]
    async fn save_then_unsave_removes_record() {
        let db = db();

        SavedEvent::save(&db, "u1", "evt-42", json!({ "name": "Show A" }))
            .await
            .expect("save");
        SavedEvent::unsave(&db, "u1", "evt-42")
            .await
            .expect("unsave");

        let saved = db.fetch_saved_events("u1").await.expect("fetch");
        assert!(!saved.iter().any(|event| event.id.event == "evt-42"));
    }

    #[tokio::test]
    async fn concurrent_saves_keep_one_record() {
        let db = db();

        let (first, second) = futures::join!(
            SavedEvent::save(&db, "u1", "evt-42", json!({ "attempt": 1 })),
            SavedEvent::save(&db, "u1", "evt-42", json!({ "attempt": 2 })),
        );

        first.expect("first save");
        second.expect("second save");

        let saved = db.fetch_saved_events("u1").await.expect("fetch");
        assert_eq!(saved.len(), 1);
    }

    #[tokio::test]
    async fn owners_do_not_share_saved_events() {
        let db = db();

        SavedEvent::save(&db, "u1", "evt-42", json!({}))
            .await
            .expect("save");

        assert!(db.fetch_saved_events("u2").await.expect("fetch").is_empty());
    }
}
