use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};

use internhub::common::FormError;
use internhub::pages::AdminPage;

use crate::web::forms::LoginForm;
use crate::web::helpers::{
    expired_session_cookie, render, see_other, session_cookie, session_token,
};
use crate::web::state::AppState;
use crate::web::templates::{AdminDashboardTemplate, AdminLoginTemplate};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(dashboard).service(login_submit).service(logout);
}

#[get("/admin")]
pub async fn dashboard(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let mut page = AdminPage::new();
    page.mount(&state.gateway, session_token(&req).as_deref(), state.timeout)
        .await;

    if page.session().is_some() {
        render(AdminDashboardTemplate::new(&page))
    } else {
        render(AdminLoginTemplate::new(&page, String::new()))
    }
}

#[post("/admin/login")]
pub async fn login_submit(
    state: web::Data<AppState>,
    form: web::Form<LoginForm>,
) -> impl Responder {
    let LoginForm { email, password } = form.into_inner();
    let email = email.trim().to_string();

    let mut page = AdminPage::new();
    match page
        .sign_in(&state.gateway, &email, &password, state.timeout)
        .await
    {
        Ok(session) => HttpResponse::SeeOther()
            .cookie(session_cookie(&session.token, state.cookie_secure))
            .insert_header(("Location", "/admin"))
            .finish(),
        Err(FormError::MissingFields(_)) => {
            let mut template = AdminLoginTemplate::new(&page, email);
            template.notice = Some("Email and password are required".to_string());
            render(template)
        }
        Err(_) => render(AdminLoginTemplate::new(&page, email)),
    }
}

#[post("/admin/logout")]
pub async fn logout(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let mut page = AdminPage::new();
    page.mount(&state.gateway, session_token(&req).as_deref(), state.timeout)
        .await;
    page.sign_out(&state.gateway, state.timeout).await;

    let mut response = see_other("/admin");
    if let Err(e) = response.add_cookie(&expired_session_cookie(state.cookie_secure)) {
        log::error!("Failed to clear session cookie: {e}");
    }
    response
}
