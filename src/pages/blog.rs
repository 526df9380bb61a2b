use std::time::Duration;

use crate::gateway::{Gateway, Select, fetch};
use crate::models::{BLOG_CATEGORIES, Blog, Collection};
use crate::pipeline::{FacetChoice, Section, filtered_view, static_options};

pub const EMPTY_MESSAGE: &str = "No blog posts found in this category.";

pub struct BlogPage {
    pub posts: Section<Vec<Blog>>,
    category: FacetChoice,
}

impl Default for BlogPage {
    fn default() -> Self {
        Self::new()
    }
}

impl BlogPage {
    pub fn new() -> Self {
        Self {
            posts: Section::new("blogs"),
            category: FacetChoice::All,
        }
    }

    pub fn query() -> Select {
        Select::table(Collection::Blogs)
            .eq("published", true)
            .order("published_at", false)
    }

    pub async fn load<G: Gateway>(&mut self, gateway: &G, timeout: Duration) {
        self.posts.load(timeout, fetch(gateway, &Self::query())).await;
    }

    pub fn set_category(&mut self, choice: FacetChoice) {
        self.category = choice;
    }

    pub fn category(&self) -> &FacetChoice {
        &self.category
    }

    pub fn categories(&self) -> Vec<String> {
        static_options(&BLOG_CATEGORIES)
    }

    pub fn view(&self) -> Vec<&Blog> {
        filtered_view(self.posts.items(), &self.category, |b| b.category.as_str())
    }
}
