use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use horrorshow::Template;

use crate::errors::AppError;
use crate::state::AppState;
use crate::views::DentistsPage;

// GET /dentists
pub async fn dentists_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let page = DentistsPage {
        dentists: &state.dentists,
    };
    Ok(Html(page.into_string()?))
}
