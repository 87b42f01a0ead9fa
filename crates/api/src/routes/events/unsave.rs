use encore_database::{Database, SavedEvent, User};
use encore_models::v0;
use encore_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Unsave Event
///
/// Remove an event from the current user's saved events.
///
/// Removing an event that is not saved also succeeds, so a retried
/// request stays harmless.
#[openapi(tag = "Events")]
#[delete("/saved/<event_id>")]
pub async fn unsave(
    db: &State<Database>,
    user: User,
    event_id: String,
) -> Result<Json<v0::MessageResponse>> {
    SavedEvent::unsave(db, &user.id, &event_id).await?;

    Ok(Json(v0::MessageResponse {
        message: "Event removed successfully".to_string(),
    }))
}
