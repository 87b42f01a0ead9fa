use encore_result::Result;

use crate::ReferenceDb;
use crate::Session;

use super::AbstractSessions;

#[async_trait]
impl AbstractSessions for ReferenceDb {
    /// Insert a new session into the database
    async fn insert_session(&self, session: &Session) -> Result<()> {
        let mut sessions = self.sessions.lock().await;
        if sessions
            .insert(session.id.to_string(), session.clone())
            .is_some()
        {
            Err(create_database_error!("insert_one", "sessions"))
        } else {
            Ok(())
        }
    }

    /// Fetch a session by its token
    async fn fetch_session_by_token(&self, token: &str) -> Result<Session> {
        let sessions = self.sessions.lock().await;
        sessions
            .values()
            .find(|session| session.token == token)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Delete a session by its id
    async fn delete_session(&self, id: &str) -> Result<()> {
        let mut sessions = self.sessions.lock().await;
        sessions.remove(id);
        Ok(())
    }
}
