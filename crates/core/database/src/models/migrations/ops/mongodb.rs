use encore_result::Result;

use crate::MigrationInfo;
use crate::MongoDb;

use super::AbstractMigrations;

mod init;

#[async_trait]
impl AbstractMigrations for MongoDb {
    /// Migrate the database to the latest version
    async fn migrate_database(&self) -> Result<()> {
        info!("Migrating the database.");

        let list = self
            .db()
            .list_collection_names()
            .await
            .map_err(|_| create_database_error!("list_collection_names", "db"))?;

        if list.contains(&"migrations".to_string()) {
            let migration: Option<MigrationInfo> = query!(
                self,
                find_one,
                "migrations",
                doc! {
                    "_id": 0_i32
                }
            )?;

            if let Some(migration) = migration {
                info!("Database is at revision {}.", migration.revision);
            }
        } else {
            init::create_database(self).await;
        }

        Ok(())
    }
}
