use encore_result::Result;

use crate::User;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractUsers: Sync + Send {
    /// Insert a new user into the database
    ///
    /// Fails with `EmailTaken` if an account already uses the email.
    async fn insert_user(&self, user: &User) -> Result<()>;

    /// Fetch a user by their id
    async fn fetch_user(&self, id: &str) -> Result<User>;

    /// Fetch a user by their email address
    async fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>>;
}
