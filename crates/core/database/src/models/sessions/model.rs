use encore_result::Result;
use ulid::Ulid;

use crate::{Database, User};

auto_derived!(
    /// Session granting access to an account
    pub struct Session {
        /// Session Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Id of the user this session belongs to
        pub user_id: String,
        /// Token presented as a bearer credential
        pub token: String,
    }
);

impl Session {
    /// Open a new session for a user
    pub async fn create(db: &Database, user: &User) -> Result<Session> {
        let session = Session {
            id: Ulid::new().to_string(),
            user_id: user.id.to_string(),
            token: nanoid::nanoid!(64),
        };

        db.insert_session(&session).await?;
        Ok(session)
    }

    /// Close this session; a token that is already gone is not an error
    pub async fn delete(self, db: &Database) -> Result<()> {
        db.delete_session(&self.id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{Database, ReferenceDb, Session, User};

    #[tokio::test]
    async fn resolve_and_close_session() {
        let db = Database::Reference(ReferenceDb::default());

        let user = User::create(
            &db,
            "gig.goer@example.com".to_string(),
            "correct horse".to_string(),
            "Gig Goer".to_string(),
        )
        .await
        .expect("account");

        let session = Session::create(&db, &user).await.expect("session");
        let resolved = db
            .fetch_session_by_token(&session.token)
            .await
            .expect("resolve token");
        assert_eq!(resolved.user_id, user.id);

        let token = session.token.to_string();
        session.delete(&db).await.expect("logout");
        assert!(db.fetch_session_by_token(&token).await.is_err());
    }
}
