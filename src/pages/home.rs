use std::time::Duration;

use crate::gateway::{Gateway, Select, fetch, fetch_one};
use crate::models::{Blog, Collection, SiteStats, Testimonial, TestimonialStatus};
use crate::pipeline::Section;

pub const HIGHLIGHTS: i64 = 3;

pub const NO_STATS_MESSAGE: &str = "Program statistics are not available right now.";
pub const NO_TESTIMONIALS_MESSAGE: &str = "No testimonials yet.";
pub const NO_POSTS_MESSAGE: &str = "No posts yet.";

pub struct HomePage {
    pub stats: Section<Option<SiteStats>>,
    pub testimonials: Section<Vec<Testimonial>>,
    pub blogs: Section<Vec<Blog>>,
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}

impl HomePage {
    pub fn new() -> Self {
        Self {
            stats: Section::new("site stats"),
            testimonials: Section::new("home testimonials"),
            blogs: Section::new("home blogs"),
        }
    }

    pub fn stats_query() -> Select {
        Select::table(Collection::SiteStats)
    }

    pub fn testimonials_query() -> Select {
        Select::table(Collection::Testimonials)
            .eq("status", TestimonialStatus::Approved.as_str())
            .order("created_at", false)
            .limit(HIGHLIGHTS)
    }

    pub fn blogs_query() -> Select {
        Select::table(Collection::Blogs)
            .eq("published", true)
            .order("published_at", false)
            .limit(HIGHLIGHTS)
    }

    /// The three sections load concurrently; each settles on its own.
    pub async fn load<G: Gateway>(&mut self, gateway: &G, timeout: Duration) {
        let (stats_query, testimonials_query, blogs_query) = (
            Self::stats_query(),
            Self::testimonials_query(),
            Self::blogs_query(),
        );

        tokio::join!(
            self.stats.load(timeout, fetch_one(gateway, &stats_query)),
            self.testimonials
                .load(timeout, fetch(gateway, &testimonials_query)),
            self.blogs.load(timeout, fetch(gateway, &blogs_query)),
        );
    }

    pub fn site_stats(&self) -> Option<&SiteStats> {
        self.stats.value().and_then(Option::as_ref)
    }
}
