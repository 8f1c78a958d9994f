pub mod dentist_card;
pub mod dentists;
pub mod landing;
pub mod lead_form;

pub use dentist_card::{render, DentistCard};
pub use dentists::DentistsPage;
pub use landing::LandingPage;
pub use lead_form::LeadFormView;

pub const STYLE: &str = r"
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; color: #2E2E2C; }
#hero { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 48px 16px; }
.hero-grid { max-width: 1200px; margin: 0 auto; display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 48px; align-items: start; }
.form-card { background: white; color: #111827; border-radius: 8px; padding: 32px; box-shadow: 0 10px 25px rgba(0,0,0,.15); }
.muted { color: #4B5563; }
.field { margin-bottom: 16px; }
.field label { display: block; font-size: 14px; font-weight: 500; margin-bottom: 8px; }
.field input, .field select { width: 100%; padding: 8px 16px; border: 1px solid #D1D5DB; border-radius: 8px; font-size: 16px; }
.field-error { color: #EF4444; font-size: 14px; margin-top: 4px; }
.hint { font-size: 12px; color: #4B5563; margin-top: 8px; }
.error-banner { background: #FEF2F2; border: 1px solid #FECACA; color: #991B1B; border-radius: 8px; padding: 16px; margin-bottom: 16px; }
.confirmation { background: #F0FDF4; border: 1px solid #BBF7D0; color: #166534; border-radius: 8px; padding: 24px; text-align: center; }
button { width: 100%; background: #667eea; color: white; border: none; padding: 12px 16px; border-radius: 8px; font-weight: 600; font-size: 16px; cursor: pointer; }
button:disabled { opacity: .5; cursor: not-allowed; }
.benefit { margin-bottom: 16px; }
.benefit h3 { margin: 0 0 4px; }
section { padding: 64px 16px; }
section > h2 { text-align: center; font-size: 32px; }
.steps { max-width: 960px; margin: 0 auto; display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 32px; text-align: center; }
.step-number { width: 64px; height: 64px; border-radius: 50%; background: #667eea; color: white; font-size: 24px; font-weight: 700; display: flex; align-items: center; justify-content: center; margin: 0 auto 16px; }
#faq { background: #F3F4F6; }
.faq { max-width: 896px; margin: 0 auto 16px; background: white; border: 1px solid #E5E7EB; border-radius: 8px; overflow: hidden; }
.faq-question { display: flex; justify-content: space-between; padding: 16px 24px; font-weight: 600; font-size: 18px; color: #111827; text-decoration: none; }
.faq-answer { padding: 16px 24px; background: #F9FAFB; border-top: 1px solid #E5E7EB; }
#disclaimer { background: #EFF6FF; text-align: center; }
#disclaimer p { max-width: 896px; margin: 0 auto; }
.dentist-list { max-width: 960px; margin: 0 auto; display: grid; gap: 16px; }
.dentist-list a { text-decoration: none; color: inherit; }
.dentist-card { display: flex; background: white; border: 1px solid #D6D3CE; border-radius: 8px; overflow: hidden; cursor: pointer; }
.dentist-card:hover { border-color: #B06A4A; }
.dentist-image { position: relative; width: 192px; flex-shrink: 0; }
.dentist-image img { width: 100%; height: 100%; object-fit: cover; }
.rating { position: absolute; top: 8px; right: 8px; background: white; padding: 4px 8px; border-radius: 999px; font-size: 12px; font-weight: 600; }
.dentist-body { flex: 1; padding: 16px; }
.dentist-body h3 { margin: 0 0 4px; }
.practice { color: #B06A4A; font-size: 14px; font-weight: 500; }
.specialty, .meta, .more { color: #7C8475; font-size: 12px; }
.meta span { margin-right: 16px; }
.service-tag { background: #F6F5F2; padding: 2px 8px; border-radius: 999px; font-size: 12px; font-weight: 500; margin-right: 8px; }
";
