use encore_result::Result;

use crate::ReferenceDb;

use super::AbstractMigrations;

#[async_trait]
impl AbstractMigrations for ReferenceDb {
    /// Migrate the database to the latest version
    async fn migrate_database(&self) -> Result<()> {
        // Nothing to migrate in the mock database
        Ok(())
    }
}
