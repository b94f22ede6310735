use crate::{
    error::{LinkError, Result},
    AppState,
};
use axum::{
    extract::{Form, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

// ── Form types ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenForm {
    original_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTargetForm {
    short_url: Option<String>,
    new_original_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExpiryForm {
    short_url: Option<String>,
    days_to_add: Option<i64>,
}

// ── Handlers ───────────────────────────────────────────────────────────────

/// POST /api/shorten
///
/// Returns the generated token as the response body.
pub async fn shorten(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ShortenForm>,
) -> Result<String> {
    let original_url = require(form.original_url.as_deref(), "Original URL is required")?;

    state.service.shorten(original_url).await
}

/// POST /api/update
///
/// Points an existing short token at a new URL. Responds `true` when a record
/// was updated, `false` when the token is unknown.
pub async fn update_target(
    State(state): State<Arc<AppState>>,
    Form(form): Form<UpdateTargetForm>,
) -> Result<Json<bool>> {
    let new_original_url = require(
        form.new_original_url.as_deref(),
        "New original URL is required",
    )?;
    let short_url = require(form.short_url.as_deref(), "Short URL is required")?;

    let updated = state.service.update_target(short_url, new_original_url).await?;
    Ok(Json(updated))
}

/// POST /api/update-expiry
///
/// Extends the expiry of an existing short token by `daysToAdd` days.
pub async fn update_expiry(
    State(state): State<Arc<AppState>>,
    Form(form): Form<UpdateExpiryForm>,
) -> Result<Json<bool>> {
    let short_url = require(form.short_url.as_deref(), "Short URL is required")?;
    let days_to_add = form
        .days_to_add
        .ok_or_else(|| LinkError::BadRequest("daysToAdd is required".into()))?;
    if days_to_add < 0 {
        return Err(LinkError::BadRequest(
            "daysToAdd must be non-negative".into(),
        ));
    }

    let updated = state.service.update_expiry(short_url, days_to_add).await?;
    Ok(Json(updated))
}

// ── Private helpers ────────────────────────────────────────────────────────

/// Reject missing or blank form fields with a bad-request reason.
fn require<'a>(value: Option<&'a str>, reason: &str) -> Result<&'a str> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| LinkError::BadRequest(reason.to_owned()))
}
