//! In-memory stored-function registry.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use hookqueue_core::result::AppResult;
use hookqueue_core::traits::{FunctionLookup, FunctionRecord};

/// A [`FunctionLookup`] backed by a name-keyed map.
#[derive(Debug, Default)]
pub struct MemoryFunctionStore {
    /// Function records by name.
    records: RwLock<HashMap<String, FunctionRecord>>,
}

impl MemoryFunctionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a function record under a name, returning its handle.
    pub async fn insert(&self, name: impl Into<String>) -> FunctionRecord {
        let name = name.into();
        let record = FunctionRecord {
            id: Uuid::new_v4(),
            name: name.clone(),
        };

        let mut records = self.records.write().await;
        records.insert(name, record.clone());
        record
    }

    /// Removes a function record by name.
    pub async fn remove(&self, name: &str) -> Option<FunctionRecord> {
        let mut records = self.records.write().await;
        records.remove(name)
    }
}

#[async_trait]
impl FunctionLookup for MemoryFunctionStore {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<FunctionRecord>> {
        let records = self.records.read().await;
        Ok(records.get(name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_by_name() {
        let store = MemoryFunctionStore::new();
        let inserted = store.insert("sendConfirmation").await;

        let found = store.find_by_name("sendConfirmation").await.unwrap();
        assert_eq!(found.map(|r| r.id), Some(inserted.id));

        assert!(store.find_by_name("other").await.unwrap().is_none());
    }
}
