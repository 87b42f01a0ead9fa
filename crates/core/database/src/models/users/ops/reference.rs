use encore_result::Result;

use crate::ReferenceDb;
use crate::User;

use super::AbstractUsers;

#[async_trait]
impl AbstractUsers for ReferenceDb {
    /// Insert a new user into the database
    async fn insert_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.lock().await;
        if users.values().any(|existing| existing.email == user.email) {
            return Err(create_error!(EmailTaken));
        }

        if users.insert(user.id.to_string(), user.clone()).is_some() {
            Err(create_database_error!("insert_one", "users"))
        } else {
            Ok(())
        }
    }

    /// Fetch a user by their id
    async fn fetch_user(&self, id: &str) -> Result<User> {
        let users = self.users.lock().await;
        users
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch a user by their email address
    async fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.lock().await;
        Ok(users
            .values()
            .find(|user| user.email == email.to_lowercase())
            .cloned())
    }
}
