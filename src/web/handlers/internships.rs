use actix_web::{Responder, get, post, web};
use uuid::Uuid;

use internhub::models::ApplicationDraft;
use internhub::pages::InternshipsPage;

use crate::web::forms::{InternshipsQuery, Submission};
use crate::web::helpers::{render, see_other, with_query};
use crate::web::state::AppState;
use crate::web::templates::InternshipsTemplate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(internships_page).service(apply);
}

async fn load_page(state: &AppState, query: &InternshipsQuery) -> InternshipsPage {
    let mut page = InternshipsPage::new();
    page.load(&state.gateway, state.timeout).await;
    page.set_department(query.department());
    page.set_mode(query.mode());
    page
}

#[get("/internships")]
pub async fn internships_page(
    state: web::Data<AppState>,
    query: web::Query<InternshipsQuery>,
) -> impl Responder {
    let mut page = load_page(&state, &query).await;

    if let Some(id) = query.apply() {
        page.open_application(id);
    }

    render(InternshipsTemplate::new(
        &page,
        query.filters(),
        &state.submissions,
    ))
}

#[post("/internships/{id}/apply")]
pub async fn apply(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<InternshipsQuery>,
    form: web::Form<Submission<ApplicationDraft>>,
) -> impl Responder {
    let Submission { submit_token, draft } = form.into_inner();
    if !state.submissions.claim(&submit_token) {
        log::debug!("Application posted without a usable token");
        return see_other(&with_query("/internships", &query.filters()));
    }

    let mut page = load_page(&state, &query).await;

    let opened = Uuid::parse_str(&path).is_ok_and(|id| page.open_application(id));
    if !opened {
        return see_other(&with_query("/internships", &query.filters()));
    }

    page.application.form_mut().set_draft(draft);
    if let Err(e) = page.submit_application(&state.gateway, state.timeout).await {
        log::debug!("Application not sent: {e}");
    }

    render(InternshipsTemplate::new(
        &page,
        query.filters(),
        &state.submissions,
    ))
}
