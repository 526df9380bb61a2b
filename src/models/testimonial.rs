use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Rating, TestimonialStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub college: String,
    pub program: String,
    pub testimonial: String,
    pub rating: Rating,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub status: TestimonialStatus,
    pub created_at: DateTime<Utc>,
}

impl Testimonial {
    pub fn is_public(&self) -> bool {
        self.status == TestimonialStatus::Approved
    }

    /// First letter of the name, used as the avatar when there is no photo.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}
