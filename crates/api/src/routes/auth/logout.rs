use encore_database::{Database, Session};
use encore_models::v0;
use encore_result::Result;
use rocket::serde::json::Json;
use rocket::State;

/// # Logout
///
/// Close the current session.
#[openapi(tag = "Account")]
#[delete("/logout")]
pub async fn logout(db: &State<Database>, session: Session) -> Result<Json<v0::MessageResponse>> {
    session.delete(db).await?;

    Ok(Json(v0::MessageResponse {
        message: "Logged out".to_string(),
    }))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use rocket::http::{Header, Status};

    #[rocket::async_test]
    async fn success_logout_retires_token() {
        let harness = TestHarness::new().await;
        let (_, session) = harness.new_user().await;
        let authorization = Header::new("Authorization", format!("Bearer {}", session.token));

        let response = harness
            .client
            .delete("/auth/logout")
            .header(authorization.clone())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);

        let response = harness
            .client
            .get("/auth/me")
            .header(authorization)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Unauthorized);
    }
}
