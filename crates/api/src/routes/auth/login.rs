use encore_database::{Database, Session};
use encore_models::v0;
use encore_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;
use serde::Deserialize;

/// # Login Data
#[derive(Deserialize, JsonSchema)]
pub struct DataLogin {
    /// Email address
    email: String,
    /// Password
    password: String,
}

/// # Login
///
/// Open a new session with email and password.
#[openapi(tag = "Account")]
#[post("/login", data = "<data>")]
pub async fn login(db: &State<Database>, data: Json<DataLogin>) -> Result<Json<v0::LoginResponse>> {
    let data = data.into_inner();

    // Unknown email and wrong password are indistinguishable to callers.
    let user = db
        .fetch_user_by_email(&data.email)
        .await?
        .ok_or_else(|| create_error!(InvalidCredentials))?;
    user.verify_password(&data.password)?;

    let session = Session::create(db, &user).await?;

    Ok(Json(v0::LoginResponse {
        token: session.token,
        user_id: session.user_id,
    }))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use encore_models::v0;
    use rocket::http::{ContentType, Header, Status};
    use serde_json::json;

    #[rocket::async_test]
    async fn success_login_and_fetch_self() {
        let harness = TestHarness::new().await;
        let (user, _) = harness.new_user().await;

        let response = harness
            .client
            .post("/auth/login")
            .header(ContentType::JSON)
            .body(
                json!({
                    "email": user.email,
                    "password": "correct horse"
                })
                .to_string(),
            )
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);
        let login: v0::LoginResponse = response.into_json().await.expect("`LoginResponse`");
        assert_eq!(login.user_id, user.id);

        let response = harness
            .client
            .get("/auth/me")
            .header(Header::new(
                "Authorization",
                format!("Bearer {}", login.token),
            ))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);
        let fetched: v0::User = response.into_json().await.expect("`User`");
        assert_eq!(fetched.id, user.id);
    }

    #[rocket::async_test]
    async fn fail_login_with_wrong_password() {
        let harness = TestHarness::new().await;
        let (user, _) = harness.new_user().await;

        let response = harness
            .client
            .post("/auth/login")
            .header(ContentType::JSON)
            .body(
                json!({
                    "email": user.email,
                    "password": "wrong horse"
                })
                .to_string(),
            )
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Unauthorized);
    }

    #[rocket::async_test]
    async fn fail_login_with_unknown_email() {
        let harness = TestHarness::new().await;

        let response = harness
            .client
            .post("/auth/login")
            .header(ContentType::JSON)
            .body(
                json!({
                    "email": "nobody@example.com",
                    "password": "correct horse"
                })
                .to_string(),
            )
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Unauthorized);
    }
}
