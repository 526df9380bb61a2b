use actix_web::{HttpResponse, Responder, get, web};

use internhub::pages::{BlogPage, FaqPage, GalleryPage, HomePage};

use crate::web::forms::{CategoryQuery, FaqQuery};
use crate::web::helpers::{render, see_other};
use crate::web::state::AppState;
use crate::web::templates::{
    AboutTemplate, BlogTemplate, FaqTemplate, GalleryTemplate, HomeTemplate, Shell,
};
use internhub::navigation::View;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(about)
        .service(gallery)
        .service(blog)
        .service(faq);
}

#[get("/")]
pub async fn home(state: web::Data<AppState>) -> impl Responder {
    let mut page = HomePage::new();
    page.load(&state.gateway, state.timeout).await;

    render(HomeTemplate::new(&page))
}

#[get("/about")]
pub async fn about() -> impl Responder {
    render(AboutTemplate {
        shell: Shell::new(View::About),
    })
}

#[get("/gallery")]
pub async fn gallery(
    state: web::Data<AppState>,
    query: web::Query<CategoryQuery>,
) -> impl Responder {
    let mut page = GalleryPage::new();
    page.load(&state.gateway, state.timeout).await;
    page.set_category(query.category());

    if let Some(id) = query.view() {
        page.open_image(id);
    }

    render(GalleryTemplate::new(&page, query.filters()))
}

#[get("/blog")]
pub async fn blog(state: web::Data<AppState>, query: web::Query<CategoryQuery>) -> impl Responder {
    let mut page = BlogPage::new();
    page.load(&state.gateway, state.timeout).await;
    page.set_category(query.category());

    render(BlogTemplate::new(&page))
}

#[get("/faq")]
pub async fn faq(state: web::Data<AppState>, query: web::Query<FaqQuery>) -> impl Responder {
    let mut page = FaqPage::new();
    page.load(&state.gateway, state.timeout).await;

    if let Some(index) = query.open {
        page.toggle(index);
    }

    render(FaqTemplate::new(&page))
}

/// Unknown paths land on the home view.
pub async fn fallback() -> HttpResponse {
    see_other(&View::Home.path())
}
