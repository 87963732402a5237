//! Internal management routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;

use super::{AppJson, AppState};
use crate::error::Result;
use crate::identity::{CreateRequest, ParticipantDidInfo, UpdateRequest};
use crate::store::ParticipantStore;

pub async fn generate<S: ParticipantStore>(
    State(state): State<AppState<S>>, AppJson(request): AppJson<CreateRequest>,
) -> Result<AppJson<ParticipantDidInfo>> {
    tracing::info!("generating did:web for subject {:?}", request.subject);
    Ok(AppJson(state.registrar.generate(request).await?))
}

pub async fn update<S: ParticipantStore>(
    State(state): State<AppState<S>>, AppJson(request): AppJson<UpdateRequest>,
) -> Result<AppJson<ParticipantDidInfo>> {
    tracing::info!("updating did:web {:?}", request.did);
    Ok(AppJson(state.registrar.update(request).await?))
}

// The did arrives percent-decoded, so `%3A` must be sent as `%253A`.
pub async fn remove<S: ParticipantStore>(
    State(state): State<AppState<S>>, Path(did): Path<String>,
) -> Result<StatusCode> {
    tracing::info!("removing did:web {did}");
    state.registrar.remove(&did).await?;
    Ok(StatusCode::OK)
}
