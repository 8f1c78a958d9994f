use horrorshow::{html, RenderOnce, TemplateBuffer};

use crate::models::Dentist;

/// Services shown as tags before the rest collapse into "+N more".
pub const PREVIEW_SERVICES: usize = 2;

/// A dentist profile as displayed in a list. Holds no state of its own; the
/// only behavior is forwarding a click to whoever supplied `on_select`.
pub struct DentistCard<'a> {
    dentist: &'a Dentist,
    on_select: Option<Box<dyn Fn() + 'a>>,
}

pub fn render<'a>(dentist: &'a Dentist, on_select: Option<Box<dyn Fn() + 'a>>) -> DentistCard<'a> {
    DentistCard { dentist, on_select }
}

impl<'a> DentistCard<'a> {
    pub fn dentist(&self) -> &'a Dentist {
        self.dentist
    }

    pub fn rating(&self) -> String {
        format!("{:.1}", self.dentist.rating)
    }

    pub fn displayed_services(&self) -> &'a [String] {
        let shown = self.dentist.services.len().min(PREVIEW_SERVICES);
        &self.dentist.services[..shown]
    }

    pub fn more_services(&self) -> Option<String> {
        let extra = self.dentist.services.len().saturating_sub(PREVIEW_SERVICES);
        (extra > 0).then(|| format!("+{extra} more"))
    }

    /// No-op without a callback.
    pub fn click(&self) {
        if let Some(on_select) = &self.on_select {
            on_select();
        }
    }
}

impl RenderOnce for DentistCard<'_> {
    fn render_once(self, tmpl: &mut TemplateBuffer) {
        let rating = self.rating();
        let services = self.displayed_services();
        let more = self.more_services();
        let dentist = self.dentist;

        tmpl << html! {
            div(class = "dentist-card", id = format_args!("dentist-{}", dentist.id)) {
                div(class = "dentist-image") {
                    img(src = &dentist.image, alt = &dentist.name);
                    span(class = "rating") : format_args!("★ {}", rating);
                }
                div(class = "dentist-body") {
                    h3 : &dentist.name;
                    p(class = "practice") : &dentist.practice;
                    p(class = "specialty") : &dentist.specialty;
                    div(class = "meta") {
                        span(class = "location") : &dentist.location;
                        span(class = "price") : &dentist.price;
                    }
                    div(class = "services") {
                        @ for service in services {
                            span(class = "service-tag") : service;
                        }
                        @ if let Some(ref more) = more {
                            span(class = "more") : more;
                        }
                    }
                }
            }
        };
    }
}
