auto_derived!(
    /// Generic confirmation payload
    pub struct MessageResponse {
        /// Human-readable confirmation
        pub message: String,
    }
);
