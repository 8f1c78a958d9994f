use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use axum::Form;
use horrorshow::Template;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::{AppError, SubmitError};
use crate::models::{FaqAccordion, LeadForm};
use crate::services::session::SessionSnapshot;
use crate::state::AppState;
use crate::views::LandingPage;

/// Ids that do not parse are treated like no id at all.
pub(crate) fn parse_session(raw: Option<&str>) -> Option<Uuid> {
    raw.and_then(|s| s.trim().parse().ok())
}

fn render(state: &AppState, snapshot: &SessionSnapshot, accordion: FaqAccordion) -> Result<Html<String>, AppError> {
    let page = LandingPage {
        snapshot,
        accordion,
        confirmation_secs: state.config.confirmation.as_secs(),
    };
    Ok(Html(page.into_string()?))
}

// GET /?session=<id>&faq=<n>
#[derive(Deserialize)]
pub struct LandingQuery {
    pub session: Option<String>,
    pub faq: Option<usize>,
}

pub async fn landing_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LandingQuery>,
) -> Result<Html<String>, AppError> {
    // Viewing the page never stores anything; a session is opened on the
    // first submit.
    let id = parse_session(query.session.as_deref());
    let snapshot = match id.and_then(|id| state.sessions.get(id)) {
        Some(session) => session.snapshot(),
        None => SessionSnapshot::blank(id.unwrap_or_else(Uuid::new_v4)),
    };
    render(&state, &snapshot, FaqAccordion::with_open(query.faq))
}

// POST /lead
#[derive(Deserialize)]
pub struct LeadFormBody {
    #[serde(default)]
    pub session: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, rename = "dentalWorkType")]
    pub dental_work_type: String,
    #[serde(default)]
    pub timeframe: String,
}

pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    Form(body): Form<LeadFormBody>,
) -> Result<Html<String>, AppError> {
    let session = state
        .sessions
        .get_or_open(parse_session(body.session.as_deref()));
    let form = LeadForm {
        name: body.name,
        phone: body.phone,
        dental_work_type: body.dental_work_type,
        timeframe: body.timeframe,
    };

    // Validation errors and relay failures both end up in the snapshot and are
    // shown inline; only a double submit is worth a log line.
    if let Err(SubmitError::InFlight) = session.submit_form(form, state.relay.as_ref()).await {
        tracing::warn!(session = %session.id(), "ignored submit while relay in flight");
    }

    render(&state, &session.snapshot(), FaqAccordion::default())
}
