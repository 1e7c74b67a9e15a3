//! Storage for the `bookmarks` table, generic over the variant schema.
//!
//! Each operation is a single statement; nothing here opens a transaction,
//! so two reads issued back to back may observe a write landing in between.

use std::marker::PhantomData;

use shelf_core::types::DbId;

use crate::kind::RecordKind;
use crate::DbPool;

/// Owned handle to one variant's bookmark table.
pub struct RecordStore<K: RecordKind> {
    pool: DbPool,
    _kind: PhantomData<fn() -> K>,
}

impl<K: RecordKind> Clone for RecordStore<K> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _kind: PhantomData,
        }
    }
}

impl<K: RecordKind> RecordStore<K> {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            _kind: PhantomData,
        }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Create the table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(K::CREATE_TABLE).execute(&self.pool).await?;
        tracing::debug!(table = K::TABLE, variant = %K::VARIANT, "Schema ensured");
        Ok(())
    }

    /// List records in insertion order.
    ///
    /// `facet` restricts the result to exact matches on the facet column. An
    /// empty filter, or a kind without a facet column, lists everything.
    pub async fn list_all(&self, facet: Option<&str>) -> Result<Vec<K::Record>, sqlx::Error> {
        let filter = facet.filter(|value| !value.is_empty());

        match (K::FACET_COLUMN, filter) {
            (Some(column), Some(value)) => {
                let query = format!(
                    "SELECT {} FROM {} WHERE {column} = ? ORDER BY id",
                    K::COLUMNS,
                    K::TABLE
                );
                sqlx::query_as::<_, K::Record>(&query)
                    .bind(value)
                    .fetch_all(&self.pool)
                    .await
            }
            _ => {
                let query = format!("SELECT {} FROM {} ORDER BY id", K::COLUMNS, K::TABLE);
                sqlx::query_as::<_, K::Record>(&query)
                    .fetch_all(&self.pool)
                    .await
            }
        }
    }

    /// Distinct non-null facet values, in order of first appearance.
    ///
    /// Always empty for kinds without a facet column.
    pub async fn list_distinct_facets(&self) -> Result<Vec<String>, sqlx::Error> {
        let Some(column) = K::FACET_COLUMN else {
            return Ok(Vec::new());
        };

        let query = format!(
            "SELECT {column} FROM {} \
             WHERE {column} IS NOT NULL \
             GROUP BY {column} \
             ORDER BY MIN(id)",
            K::TABLE
        );
        sqlx::query_scalar::<_, String>(&query)
            .fetch_all(&self.pool)
            .await
    }

    /// Insert one record and return its assigned identifier.
    pub async fn insert(&self, record: K::NewRecord) -> Result<DbId, sqlx::Error> {
        let placeholders = vec!["?"; K::INSERT_COLUMNS.len()].join(", ");
        let query = format!(
            "INSERT INTO {} ({}) VALUES ({placeholders})",
            K::TABLE,
            K::INSERT_COLUMNS.join(", ")
        );

        let mut statement = sqlx::query(&query);
        for value in K::insert_values(record) {
            statement = statement.bind(value);
        }

        let id = statement.execute(&self.pool).await?.last_insert_rowid();
        tracing::debug!(id, table = K::TABLE, "Record inserted");
        Ok(id)
    }

    /// Drop the table with every record in it.
    ///
    /// Reads fail until [`Self::ensure_schema`] runs again.
    pub async fn drop_all(&self) -> Result<(), sqlx::Error> {
        let query = format!("DROP TABLE IF EXISTS {}", K::TABLE);
        sqlx::query(&query).execute(&self.pool).await?;
        tracing::warn!(table = K::TABLE, "Table dropped");
        Ok(())
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM {}", K::TABLE);
        sqlx::query_scalar::<_, i64>(&query)
            .fetch_one(&self.pool)
            .await
    }
}
