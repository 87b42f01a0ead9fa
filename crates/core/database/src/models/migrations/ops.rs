use encore_result::Result;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractMigrations: Sync + Send {
    /// Migrate the database to the latest version
    async fn migrate_database(&self) -> Result<()>;
}
