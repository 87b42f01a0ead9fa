use encore_result::Result;

use crate::is_duplicate_key;
use crate::MongoDb;
use crate::User;

use super::AbstractUsers;

static COL: &str = "users";

#[async_trait]
impl AbstractUsers for MongoDb {
    /// Insert a new user into the database
    async fn insert_user(&self, user: &User) -> Result<()> {
        self.col::<User>(COL)
            .insert_one(user)
            .await
            .map(|_| ())
            .map_err(|err| {
                if is_duplicate_key(&err) {
                    create_error!(EmailTaken)
                } else {
                    create_database_error!("insert_one", COL)
                }
            })
    }

    /// Fetch a user by their id
    async fn fetch_user(&self, id: &str) -> Result<User> {
        self.find_one_by_id(COL, id)
            .await
            .map_err(|_| create_database_error!("find_one", COL))?
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Fetch a user by their email address
    async fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>> {
        query!(
            self,
            find_one,
            COL,
            doc! {
                "email": email.to_lowercase()
            }
        )
    }
}
