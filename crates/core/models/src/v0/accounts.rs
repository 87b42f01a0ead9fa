use chrono::{DateTime, Utc};

auto_derived!(
    /// User account, as presented to its owner
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    pub struct User {
        /// User id
        pub id: String,
        /// Email address
        pub email: String,
        /// Name shown alongside saved events
        pub display_name: String,
        /// When the account was created
        pub created_at: DateTime<Utc>,
    }

    /// Response to a successful login
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    pub struct LoginResponse {
        /// Bearer token to present on protected routes
        pub token: String,
        /// Id of the authenticated user
        pub user_id: String,
    }
);
