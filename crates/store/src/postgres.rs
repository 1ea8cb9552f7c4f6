use async_trait::async_trait;
use common::ItemId;
use domain::Item;
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use crate::{ItemStore, Result};

/// PostgreSQL-backed item store.
#[derive(Clone)]
pub struct PostgresItemStore {
    pool: PgPool,
}

impl PostgresItemStore {
    /// Creates a new PostgreSQL item store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    fn row_to_item(row: PgRow) -> Result<Item> {
        let id: Uuid = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        Ok(Item::restore(ItemId::from_uuid(id), name))
    }
}

#[async_trait]
impl ItemStore for PostgresItemStore {
    #[tracing::instrument(skip(self, items), fields(items = items.len()))]
    async fn commit(&self, items: &[Item]) -> Result<u64> {
        if items.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await?;

        let mut changed = 0;
        for item in items {
            let result = sqlx::query(
                r#"
                INSERT INTO items (id, name)
                VALUES ($1, $2)
                ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name
                "#,
            )
            .bind(item.id().as_uuid())
            .bind(item.name())
            .execute(&mut *tx)
            .await?;

            changed += result.rows_affected();
        }

        tx.commit().await?;
        Ok(changed)
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>> {
        let row = sqlx::query("SELECT id, name FROM items WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Self::row_to_item).transpose()
    }

    async fn count(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }
}
