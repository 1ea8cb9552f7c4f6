use async_trait::async_trait;
use common::ItemId;
use domain::Item;

use crate::Result;

/// Storage backend for items.
///
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Writes every item in one transaction, inserting new rows and updating
    /// existing ones.
    ///
    /// Either all items are written or none are. Returns the number of rows
    /// changed. An empty slice is a no-op.
    async fn commit(&self, items: &[Item]) -> Result<u64>;

    /// Looks up an item by exact identifier.
    ///
    /// The returned item has no pending events.
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>>;

    /// Returns the number of stored items.
    async fn count(&self) -> Result<u64>;
}
