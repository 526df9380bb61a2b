use serde::Deserialize;
use uuid::Uuid;

use internhub::pipeline::{ALL, FacetChoice};

fn parse_id(raw: Option<&str>) -> Option<Uuid> {
    raw.and_then(|s| Uuid::parse_str(s.trim()).ok())
}

/// The filter value to carry in links; "All" is the default and is dropped.
fn carried(choice: &FacetChoice) -> &str {
    match choice.as_str() {
        ALL => "",
        other => other,
    }
}

/// A submission form body: the draft plus the one-time token it was rendered with.
#[derive(Deserialize)]
pub struct Submission<D> {
    #[serde(default)]
    pub submit_token: String,
    #[serde(flatten)]
    pub draft: D,
}

#[derive(Deserialize, Default)]
pub struct InternshipsQuery {
    pub department: Option<String>,
    pub mode: Option<String>,
    pub apply: Option<String>,
}

impl InternshipsQuery {
    pub fn department(&self) -> FacetChoice {
        FacetChoice::parse(self.department.as_deref())
    }

    pub fn mode(&self) -> FacetChoice {
        FacetChoice::parse(self.mode.as_deref())
    }

    pub fn apply(&self) -> Option<Uuid> {
        parse_id(self.apply.as_deref())
    }

    /// The active filters as a query string.
    pub fn filters(&self) -> String {
        let (department, mode) = (self.department(), self.mode());
        crate::web::helpers::query_string(&[
            ("department", carried(&department)),
            ("mode", carried(&mode)),
        ])
    }
}

#[derive(Deserialize, Default)]
pub struct EventsQuery {
    pub register: Option<String>,
}

impl EventsQuery {
    pub fn register(&self) -> Option<Uuid> {
        parse_id(self.register.as_deref())
    }
}

/// Shared by the blog and the gallery.
#[derive(Deserialize, Default)]
pub struct CategoryQuery {
    pub category: Option<String>,
    pub view: Option<String>,
}

impl CategoryQuery {
    pub fn category(&self) -> FacetChoice {
        FacetChoice::parse(self.category.as_deref())
    }

    pub fn view(&self) -> Option<Uuid> {
        parse_id(self.view.as_deref())
    }

    pub fn filters(&self) -> String {
        let category = self.category();
        crate::web::helpers::query_string(&[("category", carried(&category))])
    }
}

#[derive(Deserialize, Default)]
pub struct FaqQuery {
    pub open: Option<usize>,
}

#[derive(Deserialize, Default)]
pub struct TestimonialsQuery {
    pub share: Option<String>,
}

impl TestimonialsQuery {
    pub fn share(&self) -> bool {
        self.share.as_deref().is_some_and(|s| !s.is_empty() && s != "0")
    }
}

#[derive(Deserialize, Default)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}
