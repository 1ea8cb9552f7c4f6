//! PostgreSQL integration tests
//!
//! These tests use a shared PostgreSQL container for efficiency.
//! Run with:
//!
//! ```bash
//! cargo test -p store --test postgres_integration -- --test-threads=1
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use common::ItemId;
use domain::{Entity, EventHandler, EventPublisher, HandlerError, Item, ItemCreated};
use serial_test::serial;
use sqlx::PgPool;
use store::{ItemStore, PostgresItemStore, StoreContext, UnitOfWork};
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::{Mutex, OnceCell};

/// Shared container info - container stays alive for all tests
struct ContainerInfo {
    #[allow(dead_code)] // Container must stay alive for tests
    container: ContainerAsync<Postgres>,
    connection_string: String,
}

/// Global shared container
static CONTAINER: OnceCell<Arc<ContainerInfo>> = OnceCell::const_new();

async fn get_container_info() -> Arc<ContainerInfo> {
    CONTAINER
        .get_or_init(|| async {
            let container = Postgres::default().start().await.unwrap();

            let host = container.get_host().await.unwrap();
            let port = container.get_host_port_ipv4(5432).await.unwrap();

            let connection_string =
                format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

            let temp_pool = PgPool::connect(&connection_string).await.unwrap();
            sqlx::raw_sql(include_str!("../../../migrations/001_create_items_table.sql"))
                .execute(&temp_pool)
                .await
                .unwrap();
            temp_pool.close().await;

            Arc::new(ContainerInfo {
                container,
                connection_string,
            })
        })
        .await
        .clone()
}

/// Get a fresh store with its own pool and an empty items table
async fn get_test_store() -> PostgresItemStore {
    let info = get_container_info().await;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&info.connection_string)
        .await
        .unwrap();

    sqlx::query("TRUNCATE TABLE items")
        .execute(&pool)
        .await
        .unwrap();

    PostgresItemStore::new(pool)
}

#[derive(Clone, Default)]
struct Recorder {
    seen: Arc<Mutex<Vec<ItemId>>>,
}

#[async_trait]
impl EventHandler<ItemCreated> for Recorder {
    fn name(&self) -> &'static str {
        "Recorder"
    }

    async fn handle(&self, event: &ItemCreated) -> Result<(), HandlerError> {
        self.seen.lock().await.push(event.item_id);
        Ok(())
    }
}

#[tokio::test]
#[serial]
async fn commit_and_find_item() {
    let store = get_test_store().await;
    let item = Item::create("Widget");

    let changed = store.commit(std::slice::from_ref(&item)).await.unwrap();
    assert_eq!(changed, 1);

    let found = store.find_by_id(item.id()).await.unwrap().unwrap();
    assert_eq!(found.id(), item.id());
    assert_eq!(found.name(), "Widget");
    assert!(found.pending_events().is_empty());
}

#[tokio::test]
#[serial]
async fn find_missing_item_returns_none() {
    let store = get_test_store().await;
    let nil = ItemId::from_uuid(uuid::Uuid::nil());
    assert!(store.find_by_id(nil).await.unwrap().is_none());
}

#[tokio::test]
#[serial]
async fn commit_upserts_renamed_item() {
    let store = get_test_store().await;
    let mut item = Item::create("old");
    store.commit(std::slice::from_ref(&item)).await.unwrap();

    item.rename("new");
    let changed = store.commit(std::slice::from_ref(&item)).await.unwrap();

    assert_eq!(changed, 1);
    assert_eq!(store.count().await.unwrap(), 1);
    let found = store.find_by_id(item.id()).await.unwrap().unwrap();
    assert_eq!(found.name(), "new");
}

#[tokio::test]
#[serial]
async fn save_commits_batch_and_publishes_in_order() {
    let store = get_test_store().await;
    let recorder = Recorder::default();
    let publisher = EventPublisher::builder()
        .on_item_created(recorder.clone())
        .build();
    let context = StoreContext::new(store.clone(), Arc::new(publisher));

    let items: Vec<Item> = (0..3).map(|i| Item::create(format!("item-{i}"))).collect();
    let expected: Vec<ItemId> = items.iter().map(Item::id).collect();
    let mut uow = UnitOfWork::new();
    for item in items {
        uow.add(item);
    }

    let changed = context.save(&mut uow).await.unwrap();

    assert_eq!(changed, 3);
    assert_eq!(*recorder.seen.lock().await, expected);
    assert_eq!(store.count().await.unwrap(), 3);
    assert!(uow.pending_events().is_empty());
}
