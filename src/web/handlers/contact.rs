use actix_web::{Responder, get, post, web};

use internhub::models::ContactDraft;
use internhub::pages::ContactPage;

use crate::web::forms::Submission;
use crate::web::helpers::{render, see_other};
use crate::web::state::AppState;
use crate::web::templates::ContactTemplate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(contact_page).service(send);
}

#[get("/contact")]
pub async fn contact_page(state: web::Data<AppState>) -> impl Responder {
    render(ContactTemplate::new(&ContactPage::new(), &state.submissions))
}

#[post("/contact")]
pub async fn send(
    state: web::Data<AppState>,
    form: web::Form<Submission<ContactDraft>>,
) -> impl Responder {
    let Submission { submit_token, draft } = form.into_inner();
    if !state.submissions.claim(&submit_token) {
        log::debug!("Contact form posted without a usable token");
        return see_other("/contact");
    }

    let mut page = ContactPage::new();
    page.form.set_draft(draft);

    if let Err(e) = page.submit(&state.gateway, state.timeout).await {
        log::debug!("Contact message not sent: {e}");
    }

    render(ContactTemplate::new(&page, &state.submissions))
}
