use encore_models::v0;
use encore_providers::ticketmaster::Ticketmaster;
use encore_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;

/// # Search Events
///
/// Search live music events in a city, soonest first.
#[openapi(tag = "Events")]
#[get("/?<city>")]
pub async fn search(
    ticketmaster: &State<Ticketmaster>,
    city: Option<String>,
) -> Result<Json<v0::EventSearchResponse>> {
    // Reject before anything goes upstream.
    let city = city.filter(|city| !city.trim().is_empty()).ok_or_else(|| {
        create_error!(InvalidRequest {
            message: "City parameter is required".to_string()
        })
    })?;

    let events = ticketmaster.search_events(&city).await?;
    Ok(Json(v0::EventSearchResponse { events }))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use encore_result::{Error, ErrorType};
    use rocket::http::Status;

    #[rocket::async_test]
    async fn fail_search_without_city() {
        let harness = TestHarness::new().await;

        let response = harness.client.get("/events").dispatch().await;
        assert_eq!(response.status(), Status::BadRequest);

        let error: Error = response.into_json().await.expect("`Error`");
        assert!(matches!(error.error_type, ErrorType::InvalidRequest { .. }));
    }

    #[rocket::async_test]
    async fn fail_search_with_blank_city() {
        let harness = TestHarness::new().await;

        let response = harness.client.get("/events?city=%20%20").dispatch().await;
        assert_eq!(response.status(), Status::BadRequest);
    }
}
