use async_trait::async_trait;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, EntityTrait, QueryOrder};
use serde::Serialize;

use super::{Collection, Items, RecordStore};
use crate::error::StoreError;
use crate::models::{profile, projects, skills};

/// Record store reading the content tables created by the `migration` crate.
#[derive(Clone)]
pub struct PostgresStore {
    db: DatabaseConnection,
}

impl PostgresStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Connect to `database_url` and bring the content tables up to date.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let db = Database::connect(database_url).await?;
        Migrator::up(&db, None).await?;
        tracing::info!("Content tables migrated");
        Ok(Self::new(db))
    }
}

#[async_trait]
impl RecordStore for PostgresStore {
    async fn get_all(&self, collection: Collection) -> Result<Items, StoreError> {
        let items = match collection {
            Collection::ProfileInformation => to_values(
                collection,
                profile::Entity::find()
                    .order_by_asc(profile::Column::CreatedDate)
                    .all(&self.db)
                    .await?,
            )?,
            Collection::Projects => to_values(
                collection,
                projects::Entity::find()
                    .order_by_asc(projects::Column::CreatedDate)
                    .all(&self.db)
                    .await?,
            )?,
            Collection::Skills => to_values(
                collection,
                skills::Entity::find()
                    .order_by_asc(skills::Column::CreatedDate)
                    .all(&self.db)
                    .await?,
            )?,
        };
        Ok(Items { items })
    }

    async fn get_by_id(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<serde_json::Value>, StoreError> {
        let id = id.to_string();
        let found = match collection {
            Collection::ProfileInformation => profile::Entity::find_by_id(id)
                .one(&self.db)
                .await?
                .map(serde_json::to_value),
            Collection::Projects => projects::Entity::find_by_id(id)
                .one(&self.db)
                .await?
                .map(serde_json::to_value),
            Collection::Skills => skills::Entity::find_by_id(id)
                .one(&self.db)
                .await?
                .map(serde_json::to_value),
        };
        found
            .transpose()
            .map_err(|source| StoreError::Decode { collection, source })
    }
}

fn to_values<M: Serialize>(
    collection: Collection,
    models: Vec<M>,
) -> Result<Vec<serde_json::Value>, StoreError> {
    models
        .into_iter()
        .map(|m| serde_json::to_value(m).map_err(|source| StoreError::Decode { collection, source }))
        .collect()
}
