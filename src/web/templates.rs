use std::time::Duration;

use askama::Template;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use internhub::models::{
    ApplicationDraft, Blog, ContactDraft, Event, Faq, GalleryImage, Internship, RegistrationDraft,
    SiteStats, Testimonial, TestimonialDraft,
};
use internhub::navigation::{NavItem, View, nav_items};
use internhub::pages::{
    AdminCounts, AdminPage, BlogPage, ContactPage, EventsPage, FaqPage, GalleryPage, HomePage,
    InternshipsPage, TestimonialsPage, blog, events, faq, gallery, home, internships, testimonials,
};
use internhub::pipeline::{Draft, FacetOption, FormFlow, mark_active};

use crate::web::helpers::with_query;
use crate::web::security::SubmitGuard;

/// Page meta refresh, used to reset a form after its acknowledgment.
pub struct Refresh {
    pub seconds: u64,
    pub url: String,
}

/// What the base layout needs: title, navbar and whether to draw the shell.
pub struct Shell {
    pub title: &'static str,
    pub nav: Vec<NavItem>,
    pub show_shell: bool,
    pub refresh: Option<Refresh>,
}

impl Shell {
    pub fn new(view: View) -> Self {
        Self {
            title: view.label(),
            nav: nav_items(view),
            show_shell: view.shows_shell(),
            refresh: None,
        }
    }

    pub fn refresh_after(mut self, dwell: Duration, url: String) -> Self {
        self.refresh = Some(Refresh {
            seconds: dwell.as_secs().max(1),
            url,
        });
        self
    }
}

/// Render-ready snapshot of a form's state.
pub struct FormStatus {
    pub error: Option<String>,
    pub missing: Vec<&'static str>,
    pub confirmed: bool,
    pub can_submit: bool,
    /// One-time token for the hidden field; empty when no form is shown.
    pub token: String,
}

impl FormStatus {
    pub fn of<D: Draft>(flow: &FormFlow<D>) -> Self {
        Self {
            error: flow.error().map(str::to_string),
            missing: flow.missing().to_vec(),
            confirmed: flow.is_confirmed(),
            can_submit: flow.can_submit(),
            token: String::new(),
        }
    }

    /// Issues a token when the form can be submitted.
    pub fn with_token(mut self, guard: &SubmitGuard) -> Self {
        if self.can_submit {
            self.token = guard.issue();
        }
        self
    }

    pub fn is_missing(&self, field: &str) -> bool {
        self.missing.iter().any(|m| *m == field)
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub shell: Shell,
    pub stats: Option<SiteStats>,
    pub testimonials: Vec<Testimonial>,
    pub blogs: Vec<Blog>,
    pub no_stats: &'static str,
    pub no_testimonials: &'static str,
    pub no_posts: &'static str,
}

impl HomeTemplate {
    /// Failed and empty sections both keep their heading and show a message.
    pub fn new(page: &HomePage) -> Self {
        Self {
            shell: Shell::new(View::Home),
            stats: page.site_stats().cloned(),
            testimonials: page.testimonials.items().to_vec(),
            blogs: page.blogs.items().to_vec(),
            no_stats: home::NO_STATS_MESSAGE,
            no_testimonials: home::NO_TESTIMONIALS_MESSAGE,
            no_posts: home::NO_POSTS_MESSAGE,
        }
    }
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub shell: Shell,
}

#[derive(Template)]
#[template(path = "internships.html")]
pub struct InternshipsTemplate {
    pub shell: Shell,
    pub internships: Vec<Internship>,
    pub departments: Vec<FacetOption>,
    pub modes: Vec<FacetOption>,
    /// Current filters, carried on every link and form action.
    pub filters: String,
    pub empty_message: &'static str,
    pub selected: Option<Internship>,
    pub draft: ApplicationDraft,
    pub form: FormStatus,
}

impl InternshipsTemplate {
    pub fn new(page: &InternshipsPage, filters: String, guard: &SubmitGuard) -> Self {
        let form = page.application.form();
        let mut shell = Shell::new(View::Internships);
        if form.is_confirmed() {
            shell = shell.refresh_after(form.dwell(), with_query("/internships", &filters));
        }

        Self {
            shell,
            internships: page.view().into_iter().cloned().collect(),
            departments: mark_active(page.departments(), page.department()),
            modes: mark_active(page.modes(), page.mode()),
            filters,
            empty_message: internships::EMPTY_MESSAGE,
            selected: page.application.selected().cloned(),
            draft: form.draft().clone(),
            form: FormStatus::of(form).with_token(guard),
        }
    }

    pub fn close_link(&self) -> String {
        with_query("/internships", &self.filters)
    }

    pub fn apply_link(&self, id: &Uuid) -> String {
        let apply = format!("apply={id}");
        if self.filters.is_empty() {
            with_query("/internships", &apply)
        } else {
            format!("/internships?{}&{apply}", self.filters)
        }
    }

    pub fn apply_action(&self, id: &Uuid) -> String {
        with_query(&format!("/internships/{id}/apply"), &self.filters)
    }
}

pub struct EventCard {
    pub event: Event,
    pub can_register: bool,
}

#[derive(Template)]
#[template(path = "events.html")]
pub struct EventsTemplate {
    pub shell: Shell,
    pub upcoming: Vec<EventCard>,
    pub past: Vec<Event>,
    pub no_upcoming: &'static str,
    pub no_past: &'static str,
    pub selected: Option<Event>,
    pub draft: RegistrationDraft,
    pub form: FormStatus,
}

impl EventsTemplate {
    pub fn new(page: &EventsPage, guard: &SubmitGuard) -> Self {
        let now: DateTime<Utc> = page.now();
        let form = page.registration.form();
        let mut shell = Shell::new(View::Events);
        if form.is_confirmed() {
            shell = shell.refresh_after(form.dwell(), "/events".to_string());
        }

        Self {
            shell,
            upcoming: page
                .upcoming_events()
                .iter()
                .map(|event| EventCard {
                    can_register: event.accepts_registrations(now),
                    event: event.clone(),
                })
                .collect(),
            past: page.past_events().to_vec(),
            no_upcoming: events::NO_UPCOMING_MESSAGE,
            no_past: events::NO_PAST_MESSAGE,
            selected: page.registration.selected().cloned(),
            draft: form.draft().clone(),
            form: FormStatus::of(form).with_token(guard),
        }
    }
}

#[derive(Template)]
#[template(path = "gallery.html")]
pub struct GalleryTemplate {
    pub shell: Shell,
    pub images: Vec<GalleryImage>,
    pub categories: Vec<FacetOption>,
    pub filters: String,
    pub empty_message: &'static str,
    pub selected: Option<GalleryImage>,
}

impl GalleryTemplate {
    pub fn new(page: &GalleryPage, filters: String) -> Self {
        Self {
            shell: Shell::new(View::Gallery),
            images: page.view().into_iter().cloned().collect(),
            categories: mark_active(page.categories(), page.category()),
            filters,
            empty_message: gallery::EMPTY_MESSAGE,
            selected: page.lightbox.selected().cloned(),
        }
    }

    pub fn close_link(&self) -> String {
        with_query("/gallery", &self.filters)
    }

    pub fn view_link(&self, id: &Uuid) -> String {
        if self.filters.is_empty() {
            format!("/gallery?view={id}")
        } else {
            format!("/gallery?{}&view={id}", self.filters)
        }
    }
}

#[derive(Template)]
#[template(path = "testimonials.html")]
pub struct TestimonialsTemplate {
    pub shell: Shell,
    pub testimonials: Vec<Testimonial>,
    pub empty_message: &'static str,
    pub form_open: bool,
    pub draft: TestimonialDraft,
    pub ratings: Vec<FacetOption>,
    pub form: FormStatus,
}

impl TestimonialsTemplate {
    pub fn new(page: &TestimonialsPage, guard: &SubmitGuard) -> Self {
        let form = page.share.form();
        let mut shell = Shell::new(View::Testimonials);
        if form.is_confirmed() {
            shell = shell.refresh_after(form.dwell(), "/testimonials".to_string());
        }

        let ratings = (1..=5)
            .rev()
            .map(|value| {
                let value = value.to_string();
                FacetOption {
                    active: form.draft().rating.trim() == value,
                    value,
                }
            })
            .collect();

        let form_open = page.share.is_open();
        let mut status = FormStatus::of(form);
        if form_open {
            status = status.with_token(guard);
        }

        Self {
            shell,
            testimonials: page.view().to_vec(),
            empty_message: testimonials::EMPTY_MESSAGE,
            form_open,
            draft: form.draft().clone(),
            ratings,
            form: status,
        }
    }
}

#[derive(Template)]
#[template(path = "blog.html")]
pub struct BlogTemplate {
    pub shell: Shell,
    pub posts: Vec<Blog>,
    pub categories: Vec<FacetOption>,
    pub empty_message: &'static str,
}

impl BlogTemplate {
    pub fn new(page: &BlogPage) -> Self {
        Self {
            shell: Shell::new(View::Blog),
            posts: page.view().into_iter().cloned().collect(),
            categories: mark_active(page.categories(), page.category()),
            empty_message: blog::EMPTY_MESSAGE,
        }
    }
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub shell: Shell,
    pub draft: ContactDraft,
    pub form: FormStatus,
}

impl ContactTemplate {
    pub fn new(page: &ContactPage, guard: &SubmitGuard) -> Self {
        let mut shell = Shell::new(View::Contact);
        if page.form.is_confirmed() {
            shell = shell.refresh_after(page.form.dwell(), "/contact".to_string());
        }

        Self {
            shell,
            draft: page.form.draft().clone(),
            form: FormStatus::of(&page.form).with_token(guard),
        }
    }
}

/// One accordion entry; `link` toggles it.
pub struct FaqItem {
    pub faq: Faq,
    pub open: bool,
    pub link: String,
}

#[derive(Template)]
#[template(path = "faq.html")]
pub struct FaqTemplate {
    pub shell: Shell,
    pub items: Vec<FaqItem>,
    pub empty_message: &'static str,
}

impl FaqTemplate {
    pub fn new(page: &FaqPage) -> Self {
        let items = page
            .faqs
            .items()
            .iter()
            .enumerate()
            .map(|(index, faq)| {
                let open = page.open_index() == Some(index);
                FaqItem {
                    faq: faq.clone(),
                    open,
                    link: if open {
                        "/faq".to_string()
                    } else {
                        format!("/faq?open={index}")
                    },
                }
            })
            .collect();

        Self {
            shell: Shell::new(View::Faq),
            items,
            empty_message: faq::EMPTY_MESSAGE,
        }
    }
}

#[derive(Template)]
#[template(path = "admin_login.html")]
pub struct AdminLoginTemplate {
    pub shell: Shell,
    pub notice: Option<String>,
    pub email: String,
}

impl AdminLoginTemplate {
    pub fn new(page: &AdminPage, email: String) -> Self {
        Self {
            shell: Shell::new(View::Admin),
            notice: page.notice().map(str::to_string),
            email,
        }
    }
}

#[derive(Template)]
#[template(path = "admin_dashboard.html")]
pub struct AdminDashboardTemplate {
    pub shell: Shell,
    pub email: String,
    pub counts: AdminCounts,
}

impl AdminDashboardTemplate {
    pub fn new(page: &AdminPage) -> Self {
        Self {
            shell: Shell::new(View::Admin),
            email: page
                .session()
                .map(|session| session.email.clone())
                .unwrap_or_default(),
            counts: page.counts.value().copied().unwrap_or_default(),
        }
    }
}
