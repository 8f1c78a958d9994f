use serde::{Deserialize, Serialize};

pub const SUBMIT_ERROR_MESSAGE: &str =
    "There was an error submitting your request. Please try again.";

pub const CONFIRMATION_MESSAGE: &str =
    "Thank you! We will contact you via WhatsApp within 24 hours to discuss your options.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed(String),
}

impl SubmissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Submitted => "submitted",
            SubmissionState::Failed(_) => "failed",
        }
    }

    pub fn failed() -> Self {
        SubmissionState::Failed(SUBMIT_ERROR_MESSAGE.to_string())
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
