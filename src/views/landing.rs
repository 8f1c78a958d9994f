use horrorshow::helper::doctype;
use horrorshow::{html, Raw, RenderOnce, TemplateBuffer};
use uuid::Uuid;

use super::{LeadFormView, STYLE};
use crate::models::content::{BENEFITS, DISCLAIMER, FAQS, HEADLINE, STEPS, TAGLINE};
use crate::models::{FaqAccordion, SubmissionState, CONFIRMATION_MESSAGE};
use crate::services::session::SessionSnapshot;

pub struct LandingPage<'a> {
    pub snapshot: &'a SessionSnapshot,
    pub accordion: FaqAccordion,
    pub confirmation_secs: u64,
}

/// Link that renders the page with `accordion` as the FAQ state.
pub fn faq_href(session: Uuid, accordion: FaqAccordion) -> String {
    match accordion.open() {
        Some(index) => format!("/?session={session}&faq={index}#faq"),
        None => format!("/?session={session}#faq"),
    }
}

fn chevron(open: bool) -> &'static str {
    if open {
        "▴"
    } else {
        "▾"
    }
}

impl RenderOnce for LandingPage<'_> {
    fn render_once(self, tmpl: &mut TemplateBuffer) {
        let snapshot = self.snapshot;
        let accordion = self.accordion;
        let submitted = snapshot.state == SubmissionState::Submitted;
        // Brings the visitor back to an empty form once the server-side
        // confirmation window has run out.
        let refresh = format!(
            r#"<meta http-equiv="refresh" content="{};url=/?session={}">"#,
            self.confirmation_secs, snapshot.id
        );
        let form_view = LeadFormView { snapshot };

        tmpl << html! {
            : doctype::HTML;
            html(lang = "en") {
                head {
                    meta(charset = "utf-8");
                    meta(name = "viewport", content = "width=device-width, initial-scale=1");
                    title : "Dental Introductions in Puerto Vallarta";
                    @ if submitted {
                        : Raw(&refresh);
                    }
                    style : Raw(STYLE);
                }
                body {
                    section(id = "hero") {
                        div(class = "hero-grid") {
                            div(class = "form-card", id = "request") {
                                h2 : "Request an Introduction";
                                p(class = "muted") : "Tell us what you're looking for and we'll connect you with the right dentists";
                                @ if submitted {
                                    div(class = "confirmation") {
                                        p : CONFIRMATION_MESSAGE;
                                    }
                                } else {
                                    : form_view;
                                }
                            }
                            div(class = "hero-text") {
                                h1 : HEADLINE;
                                p(class = "tagline") : TAGLINE;
                                div(class = "benefits") {
                                    @ for benefit in BENEFITS {
                                        div(class = "benefit") {
                                            h3 : benefit.title;
                                            p : benefit.description;
                                        }
                                    }
                                }
                            }
                        }
                    }
                    section(id = "how-it-works") {
                        h2 : "How It Works";
                        div(class = "steps") {
                            @ for step in STEPS {
                                div(class = "step") {
                                    div(class = "step-number") : format_args!("{}", step.number);
                                    h3 : step.title;
                                    p : step.description;
                                }
                            }
                        }
                    }
                    section(id = "faq") {
                        h2 : "Frequently Asked Questions";
                        @ for (index, faq) in FAQS.iter().enumerate() {
                            div(class = "faq") {
                                a(class = "faq-question", href = faq_href(snapshot.id, accordion.toggle(index))) {
                                    span : faq.question;
                                    span(class = "chevron") : chevron(accordion.is_open(index));
                                }
                                @ if accordion.is_open(index) {
                                    div(class = "faq-answer") {
                                        p : faq.answer;
                                    }
                                }
                            }
                        }
                    }
                    section(id = "disclaimer") {
                        p {
                            strong : "Important:";
                            : " ";
                            : DISCLAIMER;
                        }
                    }
                    p(style = "text-align: center;") {
                        a(href = "/dentists") : "Browse dentists in our network";
                    }
                }
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use horrorshow::Template;

    use super::*;
    use crate::models::LeadForm;

    fn page_html(state: SubmissionState, accordion: FaqAccordion) -> (Uuid, String) {
        let snapshot = SessionSnapshot {
            id: Uuid::new_v4(),
            state,
            form: LeadForm::default(),
            errors: Default::default(),
        };
        let html = LandingPage {
            snapshot: &snapshot,
            accordion,
            confirmation_secs: 5,
        }
        .into_string()
        .unwrap();
        (snapshot.id, html)
    }

    #[test]
    fn test_idle_page_shows_form_and_content() {
        let (_, html) = page_html(SubmissionState::Idle, FaqAccordion::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("id=\"lead-form\""));
        assert!(html.contains("Free Introduction Service"));
        assert!(html.contains("Connect Directly"));
        assert!(html.contains("Is there a cost to use this service?"));
        assert!(!html.contains("class=\"faq-answer\""));
        assert!(!html.contains("http-equiv"));
    }

    #[test]
    fn test_submitted_page_shows_confirmation() {
        let (id, html) = page_html(SubmissionState::Submitted, FaqAccordion::default());
        assert!(html.contains("We will contact you via WhatsApp within 24 hours"));
        assert!(!html.contains("id=\"lead-form\""));
        assert!(html.contains(&format!("content=\"5;url=/?session={id}\"")));
    }

    #[test]
    fn test_open_faq_shows_answer_and_close_link() {
        let (id, html) = page_html(SubmissionState::Idle, FaqAccordion::with_open(Some(1)));
        assert!(html.contains("Many people use our service while planning their trip."));
        assert_eq!(html.matches("class=\"faq-answer\"").count(), 1);
        // The open entry links back to "nothing open".
        assert!(html.contains(&format!("href=\"/?session={id}#faq\"")));
        assert!(html.contains(&format!("href=\"/?session={id}&amp;faq=0#faq\"")));
    }

    #[test]
    fn test_faq_href() {
        let id = Uuid::nil();
        assert_eq!(
            faq_href(id, FaqAccordion::with_open(Some(3))),
            format!("/?session={id}&faq=3#faq")
        );
        assert_eq!(faq_href(id, FaqAccordion::default()), format!("/?session={id}#faq"));
    }
}
