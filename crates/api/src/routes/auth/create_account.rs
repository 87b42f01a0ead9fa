use encore_database::{Database, User};
use encore_models::v0;
use encore_result::{create_error, Result};
use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;
use serde::Deserialize;
use validator::Validate;

/// # Account Data
#[derive(Validate, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DataCreateAccount {
    /// Email address
    #[validate(email)]
    email: String,
    /// Password
    #[validate(length(min = 8, max = 72))]
    password: String,
    /// Name shown alongside saved events
    #[validate(length(min = 1, max = 32))]
    display_name: String,
}

/// # Create Account
///
/// Register a new account.
#[openapi(tag = "Account")]
#[post("/create", data = "<data>")]
pub async fn create_account(
    db: &State<Database>,
    data: Json<DataCreateAccount>,
) -> Result<Json<v0::User>> {
    let data = data.into_inner();
    data.validate().map_err(|error| {
        create_error!(FailedValidation {
            error: error.to_string()
        })
    })?;

    let user = User::create(db, data.email, data.password, data.display_name).await?;
    Ok(Json(user.into()))
}
