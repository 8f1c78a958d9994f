pub mod content;
pub mod dentists;
pub mod health;
pub mod landing;
pub mod leads;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(landing::landing_page))
        .route("/lead", post(landing::submit_form))
        .route("/dentists", get(dentists::dentists_page))
        .route("/api/content", get(content::get_content))
        .route("/api/leads", post(leads::create_lead))
        .route(
            "/api/sessions/:id",
            get(leads::get_session).delete(leads::close_session),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
