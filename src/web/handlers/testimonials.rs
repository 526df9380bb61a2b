use actix_web::{Responder, get, post, web};

use internhub::models::TestimonialDraft;
use internhub::pages::TestimonialsPage;

use crate::web::forms::{Submission, TestimonialsQuery};
use crate::web::helpers::{render, see_other};
use crate::web::state::AppState;
use crate::web::templates::TestimonialsTemplate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(testimonials_page).service(share);
}

#[get("/testimonials")]
pub async fn testimonials_page(
    state: web::Data<AppState>,
    query: web::Query<TestimonialsQuery>,
) -> impl Responder {
    let mut page = TestimonialsPage::new();
    page.load(&state.gateway, state.timeout).await;

    if query.share() {
        page.open_form();
    }

    render(TestimonialsTemplate::new(&page, &state.submissions))
}

#[post("/testimonials")]
pub async fn share(
    state: web::Data<AppState>,
    form: web::Form<Submission<TestimonialDraft>>,
) -> impl Responder {
    let Submission { submit_token, draft } = form.into_inner();
    if !state.submissions.claim(&submit_token) {
        log::debug!("Testimonial posted without a usable token");
        return see_other("/testimonials");
    }

    let mut page = TestimonialsPage::new();
    page.load(&state.gateway, state.timeout).await;
    page.open_form();

    page.share.form_mut().set_draft(draft);
    if let Err(e) = page.submit(&state.gateway, state.timeout).await {
        log::debug!("Testimonial not sent: {e}");
    }

    render(TestimonialsTemplate::new(&page, &state.submissions))
}
