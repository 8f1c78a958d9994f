use horrorshow::{html, RenderOnce, TemplateBuffer};

use crate::models::{DentalWorkType, Field, SubmissionState, Timeframe};
use crate::services::session::SessionSnapshot;

const WHATSAPP_HINT: &str =
    "Dental offices in Mexico commonly use WhatsApp for scheduling and contacting clients.";

/// The introduction form for a session that is not showing its confirmation.
pub struct LeadFormView<'a> {
    pub snapshot: &'a SessionSnapshot,
}

impl RenderOnce for LeadFormView<'_> {
    fn render_once(self, tmpl: &mut TemplateBuffer) {
        let snapshot = self.snapshot;
        let form = &snapshot.form;
        let errors = &snapshot.errors;
        let banner = snapshot.state.error_message();
        let submitting = snapshot.state == SubmissionState::Submitting;

        tmpl << html! {
            form(action = "/lead", method = "POST", id = "lead-form", novalidate = "novalidate") {
                input(type = "hidden", name = "session", value = format_args!("{}", snapshot.id));
                @ if let Some(message) = banner {
                    div(class = "error-banner") {
                        p : message;
                    }
                }
                div(class = "field") {
                    label(for = "fullName") : "First Name *";
                    input(type = "text", id = "fullName", name = "name", value = &form.name);
                    @ if let Some(message) = errors.get(Field::Name) {
                        p(class = "field-error") : message;
                    }
                }
                div(class = "field") {
                    label(for = "phone") : "WhatsApp Phone Number *";
                    input(type = "tel", id = "phone", name = "phone", placeholder = "+1 (555) 123-4567", value = &form.phone);
                    p(class = "hint") : WHATSAPP_HINT;
                    @ if let Some(message) = errors.get(Field::Phone) {
                        p(class = "field-error") : message;
                    }
                }
                div(class = "field") {
                    label(for = "dentalWork") : "What type of dental work are you considering? *";
                    select(id = "dentalWork", name = "dentalWorkType") {
                        option(value = "") : "Select an option";
                        @ for work in DentalWorkType::ALL {
                            @ if work.code() == form.dental_work_type {
                                option(value = work.code(), selected = "selected") : work.label();
                            } else {
                                option(value = work.code()) : work.label();
                            }
                        }
                    }
                    @ if let Some(message) = errors.get(Field::DentalWorkType) {
                        p(class = "field-error") : message;
                    }
                }
                div(class = "field") {
                    label(for = "timeframe") : "When are you planning to visit Puerto Vallarta? *";
                    select(id = "timeframe", name = "timeframe") {
                        option(value = "") : "Select a timeframe";
                        @ for timeframe in Timeframe::ALL {
                            @ if timeframe.code() == form.timeframe {
                                option(value = timeframe.code(), selected = "selected") : timeframe.label();
                            } else {
                                option(value = timeframe.code()) : timeframe.label();
                            }
                        }
                    }
                    @ if let Some(message) = errors.get(Field::Timeframe) {
                        p(class = "field-error") : message;
                    }
                }
                @ if submitting {
                    button(type = "submit", disabled = "disabled") : "Submitting...";
                } else {
                    button(type = "submit") : "Get Connected";
                }
            }
        };
    }
}
