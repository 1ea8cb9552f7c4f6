use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::ItemId;
use domain::Item;
use tokio::sync::RwLock;

use crate::{ItemStore, Result, StoreError};

#[derive(Debug, Default)]
struct InMemoryState {
    items: HashMap<ItemId, String>,
    fail_on_commit: bool,
}

/// In-memory item store for tests and local runs.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryItemStore {
    state: Arc<RwLock<InMemoryState>>,
}

impl InMemoryItemStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent commit fail until switched off again.
    pub async fn set_fail_on_commit(&self, fail: bool) {
        self.state.write().await.fail_on_commit = fail;
    }

    /// Removes all items.
    pub async fn clear(&self) {
        self.state.write().await.items.clear();
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn commit(&self, items: &[Item]) -> Result<u64> {
        let mut state = self.state.write().await;

        if state.fail_on_commit {
            return Err(StoreError::CommitRejected(
                "in-memory store configured to fail".to_string(),
            ));
        }

        for item in items {
            state.items.insert(item.id(), item.name().to_string());
        }

        Ok(items.len() as u64)
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>> {
        let state = self.state.read().await;
        Ok(state
            .items
            .get(&id)
            .map(|name| Item::restore(id, name.as_str())))
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.state.read().await.items.len() as u64)
    }
}
