use serde::Serialize;

use crate::models::{DentalWorkType, LeadForm, Timeframe};

// Question ids assigned by the collector's form.
pub const NAME_ENTRY: &str = "entry.141213607";
pub const PHONE_ENTRY: &str = "entry.607915724";
pub const DENTAL_WORK_ENTRY: &str = "entry.348284541";
pub const TIMEFRAME_ENTRY: &str = "entry.199398544";

/// What the collector receives for one lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalPayload {
    #[serde(rename = "entry.141213607")]
    pub name: String,
    #[serde(rename = "entry.607915724")]
    pub phone: String,
    #[serde(rename = "entry.348284541")]
    pub dental_work: String,
    #[serde(rename = "entry.199398544")]
    pub timeframe: String,
}

impl ExternalPayload {
    pub fn pairs(&self) -> [(&'static str, &str); 4] {
        [
            (NAME_ENTRY, self.name.as_str()),
            (PHONE_ENTRY, self.phone.as_str()),
            (DENTAL_WORK_ENTRY, self.dental_work.as_str()),
            (TIMEFRAME_ENTRY, self.timeframe.as_str()),
        ]
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }
}

pub fn dental_work_label(code: &str) -> &str {
    DentalWorkType::from_code(code)
        .map(|t| t.label())
        .unwrap_or(code)
}

pub fn timeframe_label(code: &str) -> &str {
    Timeframe::from_code(code).map(|t| t.label()).unwrap_or(code)
}

/// Name and phone go through untouched; option codes become the collector's
/// option text, and anything unrecognized is sent as-is.
pub fn map_to_external_payload(form: &LeadForm) -> ExternalPayload {
    ExternalPayload {
        name: form.name.clone(),
        phone: form.phone.clone(),
        dental_work: dental_work_label(&form.dental_work_type).to_string(),
        timeframe: timeframe_label(&form.timeframe).to_string(),
    }
}
