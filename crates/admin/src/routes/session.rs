//! Session route handlers.

use axum::{extract::State, response::Redirect};
use tracing::instrument;

use crate::{error::Result, middleware::Workspace, state::AppState};

/// Discard this session's edits and return to the storefront.
#[instrument(skip(state, workspace))]
pub async fn logout(State(state): State<AppState>, workspace: Workspace) -> Result<Redirect> {
    workspace.reset().await?;
    tracing::info!("Admin session reset");
    Ok(Redirect::to(&state.config().storefront_url))
}
