use encore_database::{Database, SavedEvent, User};
use encore_models::v0;
use encore_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;
use serde::Deserialize;
use validator::Validate;

/// # Save Data
#[derive(Validate, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DataSaveEvent {
    /// External id of the event being saved
    #[validate(length(min = 1))]
    event_id: String,
    /// Provider-shaped event payload, persisted verbatim
    event_data: serde_json::Value,
}

/// # Save Event
///
/// Bookmark an event for the current user.
///
/// Saving an event that is already saved succeeds without touching the
/// stored snapshot.
#[openapi(tag = "Events")]
#[post("/save", data = "<data>")]
pub async fn save(
    db: &State<Database>,
    user: User,
    data: Json<DataSaveEvent>,
) -> Result<Json<v0::SaveEventResponse>> {
    let data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    let saved_event = SavedEvent::save(db, &user.id, &data.event_id, data.event_data).await?;

    Ok(Json(v0::SaveEventResponse {
        message: "Event saved successfully".to_string(),
        saved_event: saved_event.into(),
    }))
}
