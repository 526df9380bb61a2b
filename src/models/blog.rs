use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::format_long_date;

/// Fixed category facet of the blog page, sentinel first.
pub const BLOG_CATEGORIES: [&str; 5] = ["All", "Career Advice", "Events", "Technology", "Learning"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub summary: String,
    pub category: String,
    pub author: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub published: bool,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Blog {
    pub fn display_date(&self) -> String {
        self.published_at
            .as_ref()
            .map(format_long_date)
            .unwrap_or_default()
    }
}
