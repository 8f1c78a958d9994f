use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use super::landing::parse_session;
use crate::errors::AppError;
use crate::models::LeadForm;
use crate::services::session::SessionSnapshot;
use crate::state::AppState;

// POST /api/leads
#[derive(Deserialize)]
pub struct CreateLeadRequest {
    #[serde(default)]
    pub session: Option<String>,
    #[serde(flatten)]
    pub form: LeadForm,
}

/// Relay failures are not HTTP errors here: the snapshot comes back with
/// `"status": "failed"` and the fields intact, same as the page would show.
pub async fn create_lead(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateLeadRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let session = state
        .sessions
        .get_or_open(parse_session(req.session.as_deref()));
    session.submit_form(req.form, state.relay.as_ref()).await?;
    Ok(Json(session.snapshot()))
}

// GET /api/sessions/:id
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let session = state
        .sessions
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("session {id}")))?;
    Ok(Json(session.snapshot()))
}

// DELETE /api/sessions/:id
pub async fn close_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.close(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("session {id}")))
    }
}
