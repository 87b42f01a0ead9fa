use encore_database::{Database, User};
use encore_models::v0;
use encore_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Fetch Saved Events
///
/// Fetch all events the current user has saved, in no particular order.
#[openapi(tag = "Events")]
#[get("/saved")]
pub async fn fetch_saved(
    db: &State<Database>,
    user: User,
) -> Result<Json<v0::SavedEventsResponse>> {
    let saved_events = db.fetch_saved_events(&user.id).await?;

    Ok(Json(v0::SavedEventsResponse {
        saved_events: saved_events.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use encore_models::v0;
    use rocket::http::{ContentType, Header, Status};
    use serde_json::json;

    #[rocket::async_test]
    async fn success_fetch_nothing_saved() {
        let harness = TestHarness::new().await;
        let (_, session) = harness.new_user().await;

        let response = harness
            .client
            .get("/events/saved")
            .header(Header::new(
                "Authorization",
                format!("Bearer {}", session.token),
            ))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);

        let body: v0::SavedEventsResponse =
            response.into_json().await.expect("`SavedEventsResponse`");
        assert!(body.saved_events.is_empty());
    }

    #[rocket::async_test]
    async fn success_save_list_unsave_list() {
        let harness = TestHarness::new().await;
        let (_, session) = harness.new_user().await;
        let authorization = Header::new("Authorization", format!("Bearer {}", session.token));

        let response = harness
            .client
            .post("/events/save")
            .header(ContentType::JSON)
            .header(authorization.clone())
            .body(
                json!({
                    "eventId": "evt-42",
                    "eventData": { "name": "Show A", "date": "2025-06-01" }
                })
                .to_string(),
            )
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);

        let response = harness
            .client
            .get("/events/saved")
            .header(authorization.clone())
            .dispatch()
            .await;
        let body: v0::SavedEventsResponse =
            response.into_json().await.expect("`SavedEventsResponse`");
        assert_eq!(body.saved_events.len(), 1);
        assert_eq!(body.saved_events[0].event_id, "evt-42");

        let response = harness
            .client
            .delete("/events/saved/evt-42")
            .header(authorization.clone())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);

        let response = harness
            .client
            .get("/events/saved")
            .header(authorization)
            .dispatch()
            .await;
        let body: v0::SavedEventsResponse =
            response.into_json().await.expect("`SavedEventsResponse`");
        assert!(body.saved_events.is_empty());
    }

    #[rocket::async_test]
    async fn fail_fetch_without_credential() {
        let harness = TestHarness::new().await;

        let response = harness.client.get("/events/saved").dispatch().await;
        assert_eq!(response.status(), Status::Unauthorized);
    }
}
