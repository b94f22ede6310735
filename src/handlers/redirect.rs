use crate::{
    error::{LinkError, Result},
    AppState,
};
use axum::{
    extract::{Path, State},
    response::Redirect,
};
use std::sync::Arc;

/// GET /api/:token
///
/// Resolve the token and answer with a redirect to the original URL. Unknown
/// tokens are a 404; expired records still resolve.
pub async fn redirect(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
) -> Result<Redirect> {
    match state.service.resolve(&token).await? {
        Some(original_url) => Ok(Redirect::to(&original_url)),
        None => Err(LinkError::NotFound),
    }
}
