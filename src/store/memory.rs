use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::error::Result;
use crate::models::LinkRecord;
use crate::store::LinkStore;

/// In-memory store keyed by short token.
///
/// Backed by a DashMap so it can be cloned and shared the same way the
/// SQLite pool is. Used by the service unit tests and handy for local runs
/// without a database file.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<DashMap<String, LinkRecord>>,
    next_id: Arc<AtomicI64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkStore for MemoryStore {
    async fn save(&self, mut record: LinkRecord) -> Result<LinkRecord> {
        if record.id.is_none() {
            record.id = Some(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        }
        self.records
            .insert(record.short_token.clone(), record.clone());
        Ok(record)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<LinkRecord>> {
        Ok(self.records.get(token).map(|r| r.clone()))
    }
}
