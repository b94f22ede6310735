use chrono::{Duration, Months, Utc};

use crate::error::{LinkError, Result};
use crate::models::LinkRecord;
use crate::store::LinkStore;
use crate::token::TokenGenerator;

/// How many months a new link remains valid.
pub const DEFAULT_EXPIRY_MONTHS: u32 = 10;

/// The short-link service: the four operations over a record store.
///
/// Generic over the store and the token generator so tests can substitute an
/// in-memory store and a deterministic generator. No collision check is made
/// against existing tokens; the store's uniqueness constraint is the only
/// guard.
#[derive(Debug, Clone)]
pub struct LinkService<S, G> {
    store: S,
    tokens: G,
}

impl<S: LinkStore, G: TokenGenerator> LinkService<S, G> {
    pub fn new(store: S, tokens: G) -> Self {
        Self { store, tokens }
    }

    /// Generate a token for `original_url`, persist the pair with the default
    /// expiry, and return the token.
    pub async fn shorten(&self, original_url: &str) -> Result<String> {
        if original_url.is_empty() {
            return Err(LinkError::BadRequest(
                "Original URL cannot be empty".into(),
            ));
        }

        let token = self.tokens.generate()?;
        let expiry = Utc::now().naive_utc() + Months::new(DEFAULT_EXPIRY_MONTHS);

        self.store
            .save(LinkRecord::new(token.clone(), original_url, expiry))
            .await?;

        tracing::debug!("Shortened URL to token '{}'", token);
        Ok(token)
    }

    /// Look up the original URL for a token. `None` means the token was never
    /// issued (or the store lost it); the boundary maps that to not-found.
    pub async fn resolve(&self, token: &str) -> Result<Option<String>> {
        Ok(self
            .store
            .find_by_token(token)
            .await?
            .map(|record| record.original_url))
    }

    /// Point an existing token at a new URL. Returns `false` when the token
    /// has no record, without treating that as an error.
    pub async fn update_target(&self, token: &str, new_original_url: &str) -> Result<bool> {
        if token.is_empty() || new_original_url.is_empty() {
            return Err(LinkError::BadRequest(
                "Short URL and new original URL cannot be empty".into(),
            ));
        }

        let Some(mut record) = self.store.find_by_token(token).await? else {
            return Ok(false);
        };

        record.original_url = new_original_url.to_owned();
        self.store.save(record).await?;
        Ok(true)
    }

    /// Push a token's expiry further into the future by `days_to_add` days.
    /// Returns `false` when the token has no record.
    pub async fn update_expiry(&self, token: &str, days_to_add: i64) -> Result<bool> {
        if token.is_empty() {
            return Err(LinkError::BadRequest("Short URL cannot be empty".into()));
        }
        if days_to_add < 0 {
            return Err(LinkError::BadRequest(
                "Number of days to add must be non-negative".into(),
            ));
        }

        let Some(mut record) = self.store.find_by_token(token).await? else {
            return Ok(false);
        };

        let delta = Duration::try_days(days_to_add)
            .ok_or_else(|| LinkError::BadRequest("Number of days to add is out of range".into()))?;
        record.expiry_date = record
            .expiry_date
            .checked_add_signed(delta)
            .ok_or_else(|| LinkError::BadRequest("Number of days to add is out of range".into()))?;

        self.store.save(record).await?;
        Ok(true)
    }
}
