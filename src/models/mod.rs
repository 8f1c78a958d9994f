pub mod content;
pub mod dentist;
pub mod lead;
pub mod submission;

pub use content::{Benefit, Faq, FaqAccordion, PageContent, Step};
pub use dentist::Dentist;
pub use lead::{DentalWorkType, Field, LeadForm, Timeframe, ValidationErrors};
pub use submission::{SubmissionState, CONFIRMATION_MESSAGE, SUBMIT_ERROR_MESSAGE};
