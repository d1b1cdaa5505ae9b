//! Complaint CRUD against SQLite. One parameterized statement per call.

use crate::error::StoreError;
use crate::model::{Complaint, ComplaintInput};
use crate::sql;
use async_trait::async_trait;
use sqlx::SqlitePool;

/// Persistence operations the HTTP handlers depend on.
/// `id` arguments are passed to the store exactly as they arrived in the request path.
#[async_trait]
pub trait ComplaintStore: Send + Sync {
    /// Insert one row. Returns the id the store assigned.
    async fn create(&self, input: &ComplaintInput) -> Result<i64, StoreError>;

    /// All rows, in store order.
    async fn list(&self) -> Result<Vec<Complaint>, StoreError>;

    /// First row matching `id`, if any.
    async fn get(&self, id: &str) -> Result<Option<Complaint>, StoreError>;

    /// Overwrite `email` and `complaint` of the row matching `id`. Returns rows affected.
    async fn update(&self, id: &str, input: &ComplaintInput) -> Result<u64, StoreError>;

    /// Delete the row matching `id`. Returns rows affected.
    async fn delete(&self, id: &str) -> Result<u64, StoreError>;

    /// Round-trip to the store, for readiness checks.
    async fn ping(&self) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct SqliteComplaintStore {
    pool: SqlitePool,
}

impl SqliteComplaintStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ComplaintStore for SqliteComplaintStore {
    async fn create(&self, input: &ComplaintInput) -> Result<i64, StoreError> {
        tracing::debug!(sql = %sql::INSERT, "query");
        let done = sqlx::query(sql::INSERT)
            .bind(input.email.as_deref())
            .bind(input.complaint.as_deref())
            .execute(&self.pool)
            .await?;
        Ok(done.last_insert_rowid())
    }

    async fn list(&self) -> Result<Vec<Complaint>, StoreError> {
        tracing::debug!(sql = %sql::SELECT_ALL, "query");
        let rows = sqlx::query_as::<_, Complaint>(sql::SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get(&self, id: &str) -> Result<Option<Complaint>, StoreError> {
        tracing::debug!(sql = %sql::SELECT_BY_ID, id, "query");
        let row = sqlx::query_as::<_, Complaint>(sql::SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: &str, input: &ComplaintInput) -> Result<u64, StoreError> {
        tracing::debug!(sql = %sql::UPDATE, id, "query");
        let done = sqlx::query(sql::UPDATE)
            .bind(input.email.as_deref())
            .bind(input.complaint.as_deref())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected())
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        tracing::debug!(sql = %sql::DELETE, id, "query");
        let done = sqlx::query(sql::DELETE)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query(sql::PING).execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ensure_complaints_table;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn memory_store() -> SqliteComplaintStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        ensure_complaints_table(&pool).await.unwrap();
        SqliteComplaintStore::new(pool)
    }

    #[tokio::test]
    async fn ids_are_assigned_in_order() {
        let store = memory_store().await;
        let a = store.create(&ComplaintInput::new(None, "first")).await.unwrap();
        let b = store.create(&ComplaintInput::new(Some("b@c.d"), "second")).await.unwrap();
        assert_eq!(a, 1);
        assert_eq!(b, 2);
    }

    #[tokio::test]
    async fn null_complaint_is_a_constraint_violation() {
        let store = memory_store().await;
        let err = store.create(&ComplaintInput::default()).await.unwrap_err();
        assert!(matches!(err, StoreError::Constraint(_)), "got {err:?}");
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn text_id_matches_integer_key() {
        let store = memory_store().await;
        let id = store.create(&ComplaintInput::new(Some("a@b.com"), "too slow")).await.unwrap();
        let row = store.get(&id.to_string()).await.unwrap().unwrap();
        assert_eq!(row.complaint, "too slow");
        assert_eq!(store.get("no-such-id").await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_and_delete_report_rows_affected() {
        let store = memory_store().await;
        store.create(&ComplaintInput::new(None, "x")).await.unwrap();
        assert_eq!(store.update("1", &ComplaintInput::new(None, "y")).await.unwrap(), 1);
        assert_eq!(store.update("9", &ComplaintInput::new(None, "y")).await.unwrap(), 0);
        assert_eq!(store.delete("1").await.unwrap(), 1);
        assert_eq!(store.delete("1").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn ping_succeeds_until_pool_closed() {
        let store = memory_store().await;
        store.ping().await.unwrap();
        store.pool().close().await;
        let err = store.ping().await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }
}
