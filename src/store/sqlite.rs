use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::LinkRecord;
use crate::store::LinkStore;

/// Production store backed by a SQLite connection pool.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkStore for SqliteStore {
    async fn save(&self, record: LinkRecord) -> Result<LinkRecord> {
        match record.id {
            Some(id) => {
                sqlx::query(
                    "UPDATE links SET short_token = ?1, original_url = ?2, expiry_date = ?3
                     WHERE id = ?4",
                )
                .bind(&record.short_token)
                .bind(&record.original_url)
                .bind(record.expiry_date)
                .bind(id)
                .execute(&self.pool)
                .await?;

                Ok(record)
            }
            None => {
                let id = sqlx::query(
                    "INSERT INTO links (short_token, original_url, expiry_date)
                     VALUES (?1, ?2, ?3)",
                )
                .bind(&record.short_token)
                .bind(&record.original_url)
                .bind(record.expiry_date)
                .execute(&self.pool)
                .await?
                .last_insert_rowid();

                let stored: LinkRecord = sqlx::query_as(
                    "SELECT id, short_token, original_url, expiry_date
                     FROM links WHERE id = ?1",
                )
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

                Ok(stored)
            }
        }
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<LinkRecord>> {
        let record: Option<LinkRecord> = sqlx::query_as(
            "SELECT id, short_token, original_url, expiry_date
             FROM links WHERE short_token = ?1",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_store() -> SqliteStore {
        // A single connection keeps every query on the same in-memory database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        SqliteStore::new(pool)
    }

    fn expiry() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 5, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn save_assigns_an_id_on_insert() {
        let store = test_store().await;

        let stored = store
            .save(LinkRecord::new("tok-insert", "https://example.com", expiry()))
            .await
            .unwrap();

        assert!(stored.id.is_some());
        assert_eq!(stored.short_token, "tok-insert");
        assert_eq!(stored.original_url, "https://example.com");
        assert_eq!(stored.expiry_date, expiry());
    }

    #[tokio::test]
    async fn save_updates_an_existing_record_in_place() {
        let store = test_store().await;

        let mut stored = store
            .save(LinkRecord::new("tok-update", "https://old.com", expiry()))
            .await
            .unwrap();
        let id = stored.id;

        stored.original_url = "https://new.com".into();
        let updated = store.save(stored).await.unwrap();
        assert_eq!(updated.id, id);

        let found = store.find_by_token("tok-update").await.unwrap().unwrap();
        assert_eq!(found.original_url, "https://new.com");
        assert_eq!(found.id, id);
    }

    #[tokio::test]
    async fn find_by_token_returns_none_for_unknown_token() {
        let store = test_store().await;
        assert!(store.find_by_token("missing").await.unwrap().is_none());
    }
}
