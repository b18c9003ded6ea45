use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use super::{Collection, Items, RecordStore};
use crate::error::StoreError;

/// In-process record store, seeded up front.
///
/// Backs `RECORD_STORE=fixture` for local development, and the test suite.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: HashMap<Collection, Vec<serde_json::Value>>,
    failing: HashSet<Collection>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a fixture shaped `{ "profileinformation": [...], "projects": [...], "skills": [...] }`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, StoreError> {
        let mut parsed: HashMap<String, Vec<serde_json::Value>> = serde_json::from_str(raw)
            .map_err(|e| StoreError::Fixture(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;

        let mut store = Self::new();
        for collection in Collection::ALL {
            if let Some(items) = parsed.remove(collection.as_str()) {
                store.collections.insert(collection, items);
            }
        }
        Ok(store)
    }

    /// Add records to a collection, keeping insertion order.
    pub fn with_records<I, T>(mut self, collection: Collection, records: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: serde::Serialize,
    {
        let entry = self.collections.entry(collection).or_default();
        for record in records {
            match serde_json::to_value(record) {
                Ok(value) => entry.push(value),
                Err(e) => tracing::warn!("Skipping unserializable {collection} record: {e}"),
            }
        }
        self
    }

    /// Make every call against `collection` fail, as an unreachable backend would.
    pub fn failing(mut self, collection: Collection) -> Self {
        self.failing.insert(collection);
        self
    }

    fn check(&self, collection: Collection) -> Result<(), StoreError> {
        if self.failing.contains(&collection) {
            return Err(StoreError::Unavailable(collection));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn get_all(&self, collection: Collection) -> Result<Items, StoreError> {
        self.check(collection)?;
        Ok(Items {
            items: self.collections.get(&collection).cloned().unwrap_or_default(),
        })
    }

    async fn get_by_id(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<serde_json::Value>, StoreError> {
        self.check(collection)?;
        Ok(self.collections.get(&collection).and_then(|items| {
            items
                .iter()
                .find(|item| item.get("_id").and_then(|v| v.as_str()) == Some(id))
                .cloned()
        }))
    }
}
