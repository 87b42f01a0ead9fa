auto_derived!(
    /// Database migration information
    pub struct MigrationInfo {
        /// Id of the migration document
        #[serde(rename = "_id")]
        pub id: i32,
        /// Current database revision
        pub revision: i32,
    }
);
