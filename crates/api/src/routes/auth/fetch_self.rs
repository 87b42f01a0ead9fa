use encore_database::User;
use encore_models::v0;
use encore_result::Result;
use rocket::serde::json::Json;

/// # Fetch Self
///
/// Fetch the account behind the presented credential.
#[openapi(tag = "Account")]
#[get("/me")]
pub async fn fetch_self(user: User) -> Result<Json<v0::User>> {
    Ok(Json(user.into()))
}
