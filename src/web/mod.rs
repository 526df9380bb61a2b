pub mod forms;
pub mod handlers;
pub mod helpers;
pub mod security;
pub mod state;
pub mod templates;

use actix_files::Files;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::web::{self, Data};
use actix_web::{App, HttpServer};

pub use state::{AppState, Backend};

pub async fn serve(state: AppState, bind_addr: &str) -> std::io::Result<()> {
    let state = Data::new(state);
    log::info!("Listening on {bind_addr}");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Frame-Options", "DENY"))
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Referrer-Policy", "strict-origin-when-cross-origin")),
            )
            .configure(handlers::configure)
            .service(Files::new("/static", "./static").prefer_utf8(true))
            .default_service(web::to(handlers::public::fallback))
    })
    .bind(bind_addr)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use chrono::Utc;

    use internhub::gateway::MemoryGateway;
    use internhub::models::Collection;
    use internhub::pages::home;
    use internhub::services::seed_database;

    use super::handlers;
    use super::state::{AppState, Backend};

    async fn seeded_state() -> web::Data<AppState> {
        let gateway = MemoryGateway::new();
        seed_database(&gateway, Utc::now())
            .await
            .expect("seeding succeeds");

        web::Data::new(AppState::new(
            Backend::Memory(gateway),
            Duration::from_secs(2),
            false,
        ))
    }

    fn memory(state: &AppState) -> &MemoryGateway {
        match &state.gateway {
            Backend::Memory(gateway) => gateway,
            Backend::Postgres(_) => panic!("handler tests run on the memory store"),
        }
    }

    fn inserted(state: &AppState, collection: Collection) -> usize {
        memory(state).inserted(collection).len()
    }

    fn token_in(html: &str) -> String {
        let marker = "name=\"submit_token\" value=\"";
        html.split_once(marker)
            .and_then(|(_, rest)| rest.split_once('"'))
            .map(|(token, _)| token.to_string())
            .unwrap_or_default()
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state.clone())
                    .configure(handlers::configure)
                    .default_service(web::to(handlers::public::fallback)),
            )
            .await
        };
    }

    macro_rules! form_token {
        ($app:expr, $uri:expr) => {{
            let req = test::TestRequest::get().uri($uri).to_request();
            let body = test::call_and_read_body(&$app, req).await;
            token_in(&String::from_utf8_lossy(&body))
        }};
    }

    fn contact_form(token: &str, subject: &str) -> Vec<(&'static str, String)> {
        vec![
            ("submit_token", token.to_string()),
            ("name", "Vikram".to_string()),
            ("email", "vikram@example.com".to_string()),
            ("subject", subject.to_string()),
            ("message", "Hello".to_string()),
        ]
    }

    #[actix_web::test]
    async fn test_faq_renders_the_requested_answer_open() {
        let state = seeded_state().await;
        let app = app!(state);

        let req = test::TestRequest::get().uri("/faq?open=0").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = String::from_utf8_lossy(&body);

        assert!(html.contains("How do I apply for an internship?"));
        assert!(html.contains("class=\"answer\""));
        assert!(html.contains("aria-current=\"page\""));
    }

    #[actix_web::test]
    async fn test_unknown_path_redirects_home() {
        let state = seeded_state().await;
        let app = app!(state);

        let req = test::TestRequest::get().uri("/careers").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get("Location").and_then(|v| v.to_str().ok()),
            Some("/")
        );
    }

    #[actix_web::test]
    async fn test_contact_with_blank_subject_is_not_stored() {
        let state = seeded_state().await;
        let app = app!(state);

        let token = form_token!(app, "/contact");
        let req = test::TestRequest::post()
            .uri("/contact")
            .set_form(contact_form(&token, ""))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = String::from_utf8_lossy(&body);

        assert!(html.contains("Missing required fields: subject"));
        assert!(html.contains("value=\"Vikram\""));
        assert_eq!(inserted(&state, Collection::ContactSubmissions), 0);
    }

    #[actix_web::test]
    async fn test_contact_confirmation_refreshes_to_an_empty_form() {
        let state = seeded_state().await;
        let app = app!(state);

        let token = form_token!(app, "/contact");
        let req = test::TestRequest::post()
            .uri("/contact")
            .set_form(contact_form(&token, "Visit"))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = String::from_utf8_lossy(&body);

        assert!(html.contains("http-equiv=\"refresh\" content=\"3; url=/contact\""));
        assert_eq!(inserted(&state, Collection::ContactSubmissions), 1);
    }

    #[actix_web::test]
    async fn test_application_for_unknown_internship_is_dropped() {
        let state = seeded_state().await;
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/internships/00000000-0000-0000-0000-000000000000/apply")
            .set_form([("name", "Meera"), ("email", "meera@example.com")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(inserted(&state, Collection::InternshipApplications), 0);
    }

    #[actix_web::test]
    async fn test_admin_renders_without_the_site_shell() {
        let state = seeded_state().await;
        let app = app!(state);

        let req = test::TestRequest::get().uri("/admin").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = String::from_utf8_lossy(&body);

        assert!(html.contains("Admin Sign In"));
        assert!(!html.contains("class=\"navbar\""));
    }

    #[actix_web::test]
    async fn test_contact_form_disables_its_button_on_submit() {
        let state = seeded_state().await;
        let app = app!(state);

        let req = test::TestRequest::get().uri("/contact").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = String::from_utf8_lossy(&body);

        assert!(html.contains("<form data-once method=\"post\" action=\"/contact\">"));
        assert!(html.contains("button.disabled = true"));
        assert_eq!(token_in(&html).len(), 32);
    }

    #[actix_web::test]
    async fn test_double_submit_stores_one_contact_message() {
        let state = seeded_state().await;
        let app = app!(state);
        let token = form_token!(app, "/contact");

        let first = test::TestRequest::post()
            .uri("/contact")
            .set_form(contact_form(&token, "Visit"))
            .to_request();
        let second = test::TestRequest::post()
            .uri("/contact")
            .set_form(contact_form(&token, "Visit"))
            .to_request();
        let (a, b) = tokio::join!(
            test::call_service(&app, first),
            test::call_service(&app, second)
        );

        let mut statuses = [a.status(), b.status()];
        statuses.sort_by_key(|s| s.as_u16());
        assert_eq!(statuses, [StatusCode::OK, StatusCode::SEE_OTHER]);
        assert_eq!(inserted(&state, Collection::ContactSubmissions), 1);
    }

    #[actix_web::test]
    async fn test_submission_without_an_issued_token_is_not_stored() {
        let state = seeded_state().await;
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/contact")
            .set_form(contact_form("made-up", "Visit"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(inserted(&state, Collection::ContactSubmissions), 0);
    }

    #[actix_web::test]
    async fn test_application_form_token_is_single_use() {
        let state = seeded_state().await;
        let app = app!(state);

        let req = test::TestRequest::get().uri("/internships").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = String::from_utf8_lossy(&body).into_owned();
        let id = html
            .split_once("/internships?apply=")
            .and_then(|(_, rest)| rest.get(..36))
            .expect("listing links to an application dialog")
            .to_string();

        let token = form_token!(app, &format!("/internships?apply={id}"));
        let form = [
            ("submit_token", token.as_str()),
            ("name", "Meera"),
            ("email", "meera@example.com"),
            ("phone", "9876543210"),
            ("department", "IT"),
            ("college", "City College"),
        ];
        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri(&format!("/internships/{id}/apply"))
                .set_form(form)
                .to_request();
            test::call_service(&app, req).await;
        }

        assert_eq!(inserted(&state, Collection::InternshipApplications), 1);
    }

    #[actix_web::test]
    async fn test_home_keeps_sections_when_reads_fail() {
        let state = seeded_state().await;
        memory(&state).fail_reads(true);
        let app = app!(state);

        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = String::from_utf8_lossy(&body);

        assert!(html.contains("What Our Students Say"));
        assert!(html.contains("From the Blog"));
        assert!(html.contains(home::NO_STATS_MESSAGE));
        assert!(html.contains(home::NO_TESTIMONIALS_MESSAGE));
        assert!(html.contains(home::NO_POSTS_MESSAGE));
    }
}
