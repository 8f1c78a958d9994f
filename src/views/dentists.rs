use horrorshow::helper::doctype;
use horrorshow::{html, Raw, RenderOnce, TemplateBuffer};

use super::{render, STYLE};
use crate::models::Dentist;

pub struct DentistsPage<'a> {
    pub dentists: &'a [Dentist],
}

impl RenderOnce for DentistsPage<'_> {
    fn render_once(self, tmpl: &mut TemplateBuffer) {
        let dentists = self.dentists;

        tmpl << html! {
            : doctype::HTML;
            html(lang = "en") {
                head {
                    meta(charset = "utf-8");
                    meta(name = "viewport", content = "width=device-width, initial-scale=1");
                    title : "Dentists in Our Network";
                    style : Raw(STYLE);
                }
                body {
                    section(id = "dentists") {
                        h2 : "Dentists in Our Network";
                        div(class = "dentist-list") {
                            @ if dentists.is_empty() {
                                p : "Our dentist directory is being updated. Request an introduction and we will share options with you directly.";
                            }
                            // Picking a dentist leads to the introduction form.
                            @ for dentist in dentists {
                                a(href = "/#request") : render(dentist, None);
                            }
                        }
                    }
                }
            }
        };
    }
}
