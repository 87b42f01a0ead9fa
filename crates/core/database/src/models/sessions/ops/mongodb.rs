use encore_result::Result;

use crate::MongoDb;
use crate::Session;

use super::AbstractSessions;

static COL: &str = "sessions";

#[async_trait]
impl AbstractSessions for MongoDb {
    /// Insert a new session into the database
    async fn insert_session(&self, session: &Session) -> Result<()> {
        self.insert_one(COL, session)
            .await
            .map(|_| ())
            .map_err(|_| create_database_error!("insert_one", COL))
    }

    /// Fetch a session by its token
    async fn fetch_session_by_token(&self, token: &str) -> Result<Session> {
        self.find_one(
            COL,
            doc! {
                "token": token
            },
        )
        .await
        .map_err(|_| create_database_error!("find_one", COL))?
        .ok_or_else(|| create_error!(NotFound))
    }

    /// Delete a session by its id
    async fn delete_session(&self, id: &str) -> Result<()> {
        query!(self, delete_one_by_id, COL, id).map(|_| ())
    }
}
