use chrono::NaiveDateTime;

/// A short-link record from the `links` table.
///
/// `id` is `None` until the store assigns the surrogate key on first save,
/// and never changes afterwards.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct LinkRecord {
    pub id: Option<i64>,
    pub short_token: String,
    pub original_url: String,
    pub expiry_date: NaiveDateTime,
}

impl LinkRecord {
    /// A not-yet-persisted record (no id).
    pub fn new(
        short_token: impl Into<String>,
        original_url: impl Into<String>,
        expiry_date: NaiveDateTime,
    ) -> Self {
        Self {
            id: None,
            short_token: short_token.into(),
            original_url: original_url.into(),
            expiry_date,
        }
    }
}
