use encore_result::Error;
use rocket::http::Status;
use rocket::request::{self, FromRequest, Outcome, Request};

use crate::{Database, Session};

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Session {
    type Error = Error;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let session: &Option<Session> = request
            .local_cache_async(async {
                let db = request.rocket().state::<Database>().expect("`Database`");

                let token = request
                    .headers()
                    .get("Authorization")
                    .next()
                    .and_then(|header| header.strip_prefix("Bearer "))
                    .map(|token| token.to_string())?;

                db.fetch_session_by_token(&token).await.ok()
            })
            .await;

        if let Some(session) = session {
            Outcome::Success(session.clone())
        } else {
            Outcome::Error((Status::Unauthorized, create_error!(Unauthenticated)))
        }
    }
}
