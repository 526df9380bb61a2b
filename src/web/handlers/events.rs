use actix_web::{Responder, get, post, web};
use chrono::Utc;
use uuid::Uuid;

use internhub::models::RegistrationDraft;
use internhub::pages::EventsPage;

use crate::web::forms::{EventsQuery, Submission};
use crate::web::helpers::{render, see_other};
use crate::web::state::AppState;
use crate::web::templates::EventsTemplate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(events_page).service(register);
}

async fn load_page(state: &AppState) -> EventsPage {
    let mut page = EventsPage::new(Utc::now());
    page.load(&state.gateway, state.timeout).await;
    page
}

#[get("/events")]
pub async fn events_page(
    state: web::Data<AppState>,
    query: web::Query<EventsQuery>,
) -> impl Responder {
    let mut page = load_page(&state).await;

    if let Some(id) = query.register() {
        page.open_registration(id);
    }

    render(EventsTemplate::new(&page, &state.submissions))
}

#[post("/events/{id}/register")]
pub async fn register(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<Submission<RegistrationDraft>>,
) -> impl Responder {
    let Submission { submit_token, draft } = form.into_inner();
    if !state.submissions.claim(&submit_token) {
        log::debug!("Registration posted without a usable token");
        return see_other("/events");
    }

    let mut page = load_page(&state).await;

    // Past or closed events never open, so nothing can be registered for them.
    let opened = Uuid::parse_str(&path).is_ok_and(|id| page.open_registration(id));
    if !opened {
        return see_other("/events");
    }

    page.registration.form_mut().set_draft(draft);
    if let Err(e) = page.submit_registration(&state.gateway, state.timeout).await {
        log::debug!("Registration not sent: {e}");
    }

    render(EventsTemplate::new(&page, &state.submissions))
}
