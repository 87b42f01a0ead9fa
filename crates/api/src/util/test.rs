use encore_database::{Database, Session, User};
use rocket::local::asynchronous::Client;
use ulid::Ulid;

pub struct TestHarness {
    pub client: Client,
    pub db: Database,
}

impl TestHarness {
    pub async fn new() -> TestHarness {
        std::env::set_var("TEST_DB", "REFERENCE");

        let client = Client::tracked(crate::web().await)
            .await
            .expect("valid rocket instance");

        let db = client
            .rocket()
            .state::<Database>()
            .expect("`Database`")
            .clone();

        TestHarness { client, db }
    }

    /// Create an account with an open session.
    pub async fn new_user(&self) -> (User, Session) {
        let user = User::create(
            &self.db,
            format!("{}@example.com", Ulid::new().to_string().to_lowercase()),
            "correct horse".to_string(),
            "Gig Goer".to_string(),
        )
        .await
        .expect("`User`");

        let session = Session::create(&self.db, &user).await.expect("`Session`");

        (user, session)
    }
}
