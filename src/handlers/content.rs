use axum::Json;
use serde::Serialize;

use crate::models::content::PAGE;
use crate::models::{DentalWorkType, PageContent, Timeframe};

#[derive(Serialize)]
pub struct OptionEntry {
    code: &'static str,
    label: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentResponse {
    #[serde(flatten)]
    page: PageContent,
    dental_work_types: Vec<OptionEntry>,
    timeframes: Vec<OptionEntry>,
}

// GET /api/content
pub async fn get_content() -> Json<ContentResponse> {
    Json(ContentResponse {
        page: PAGE,
        dental_work_types: DentalWorkType::ALL
            .iter()
            .map(|t| OptionEntry {
                code: t.code(),
                label: t.label(),
            })
            .collect(),
        timeframes: Timeframe::ALL
            .iter()
            .map(|t| OptionEntry {
                code: t.code(),
                label: t.label(),
            })
            .collect(),
    })
}
