use chrono::{DateTime, Utc};
use encore_models::v0;
use encore_result::Result;
use ulid::Ulid;

use crate::Database;

auto_derived!(
    /// User account
    pub struct User {
        /// User Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Email address, lowercased
        pub email: String,
        /// bcrypt hash of the account password
        pub password: String,
        /// Name shown alongside saved events
        pub display_name: String,
        /// When the account was created
        pub created_at: DateTime<Utc>,
    }
);

impl User {
    /// Create a new user account
    pub async fn create(
        db: &Database,
        email: String,
        password: String,
        display_name: String,
    ) -> Result<User> {
        let user = User {
            id: Ulid::new().to_string(),
            email: email.to_lowercase(),
            password: bcrypt::hash(password, 10).map_err(|_| create_error!(InternalError))?,
            display_name,
            created_at: Utc::now(),
        };

        db.insert_user(&user).await?;
        Ok(user)
    }

    /// Check a password attempt against the stored hash
    pub fn verify_password(&self, password: &str) -> Result<()> {
        match bcrypt::verify(password, &self.password) {
            Ok(true) => Ok(()),
            _ => Err(create_error!(InvalidCredentials)),
        }
    }
}

impl From<User> for v0::User {
    fn from(value: User) -> Self {
        v0::User {
            id: value.id,
            email: value.email,
            display_name: value.display_name,
            created_at: value.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use encore_result::ErrorType;

    use crate::{Database, ReferenceDb, User};

    fn db() -> Database {
        Database::Reference(ReferenceDb::default())
    }

    #[tokio::test]
    async fn reject_duplicate_email() {
        let db = db();

        User::create(
            &db,
            "gig.goer@example.com".to_string(),
            "correct horse".to_string(),
            "Gig Goer".to_string(),
        )
        .await
        .expect("first account");

        let error = User::create(
            &db,
            // Emails are lowercased before the uniqueness check.
            "Gig.Goer@example.com".to_string(),
            "battery staple".to_string(),
            "Other Goer".to_string(),
        )
        .await
        .expect_err("duplicate email");

        assert!(matches!(error.error_type, ErrorType::EmailTaken));
    }

    #[tokio::test]
    async fn verify_password_attempts() {
        let db = db();

        let user = User::create(
            &db,
            "gig.goer@example.com".to_string(),
            "correct horse".to_string(),
            "Gig Goer".to_string(),
        )
        .await
        .expect("account");

        assert!(user.verify_password("correct horse").is_ok());

        let error = user.verify_password("wrong horse").expect_err("bad attempt");
        assert!(matches!(error.error_type, ErrorType::InvalidCredentials));
    }
}
