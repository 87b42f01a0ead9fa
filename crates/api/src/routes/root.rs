use rocket::serde::json::Json;
use schemars::JsonSchema;
use serde::Serialize;

/// Capture crate version from Cargo
static CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Successful root response
#[derive(Serialize, JsonSchema, Debug)]
pub struct RootResponse {
    encore: &'static str,
    version: &'static str,
}

/// # Service Information
///
/// Fetch the service name and version.
#[openapi(tag = "Core")]
#[get("/")]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        encore: "Hello, I am a concert discovery server!",
        version: CRATE_VERSION,
    })
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use rocket::http::Status;

    #[rocket::async_test]
    async fn success_query_root() {
        let harness = TestHarness::new().await;

        let response = harness.client.get("/").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
    }
}
