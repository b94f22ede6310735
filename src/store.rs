pub mod memory;
pub mod sqlite;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::LinkRecord;

/// Minimal record-store interface the service persists through.
///
/// Two operations only: save (insert-or-update) and find-by-token. The store
/// is responsible for its own consistency; concurrent saves of the same
/// record are last-writer-wins.
#[async_trait]
pub trait LinkStore: Send + Sync + 'static {
    /// Persist a record. A record with `id: None` is inserted and returned
    /// with its assigned id; a record with an id is updated in place.
    async fn save(&self, record: LinkRecord) -> Result<LinkRecord>;

    /// Look up a record by its short token.
    async fn find_by_token(&self, token: &str) -> Result<Option<LinkRecord>>;
}
