pub mod cms;
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::error::StoreError;
use crate::models::Record;

pub use cms::CmsStore;
pub use memory::MemoryStore;
pub use postgres::PostgresStore;

/// Content collections the site reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    ProfileInformation,
    Projects,
    Skills,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::ProfileInformation,
        Collection::Projects,
        Collection::Skills,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::ProfileInformation => "profileinformation",
            Collection::Projects => "projects",
            Collection::Skills => "skills",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a get-all response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Items {
    pub items: Vec<serde_json::Value>,
}

/// Read-only access to the content backend.
///
/// Implementations do no retrying, paging, filtering or caching; every call
/// goes to the backend.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn get_all(&self, collection: Collection) -> Result<Items, StoreError>;

    /// `Ok(None)` when no record has the given identifier.
    async fn get_by_id(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<serde_json::Value>, StoreError>;
}

/// Wrapper type for Actix-web app data
pub type StoreData = Arc<dyn RecordStore>;

/// Fetch and decode every record of `T`'s collection.
pub async fn fetch_all<T: Record>(store: &dyn RecordStore) -> Result<Vec<T>, StoreError> {
    let Items { items } = store.get_all(T::COLLECTION).await?;
    items.into_iter().map(decode::<T>).collect()
}

/// Fetch and decode a single record of `T`'s collection.
pub async fn fetch_by_id<T: Record>(
    store: &dyn RecordStore,
    id: &str,
) -> Result<Option<T>, StoreError> {
    store
        .get_by_id(T::COLLECTION, id)
        .await?
        .map(decode::<T>)
        .transpose()
}

fn decode<T: Record>(value: serde_json::Value) -> Result<T, StoreError> {
    serde_json::from_value(value).map_err(|source| StoreError::Decode {
        collection: T::COLLECTION,
        source,
    })
}
