use serde::{Deserialize, Serialize};

/// Every table the site reads from or writes into.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Internships,
    Events,
    Blogs,
    Testimonials,
    GalleryImages,
    Faqs,
    SiteStats,
    InternshipApplications,
    EventRegistrations,
    ContactSubmissions,
}

impl Collection {
    pub const ALL: [Collection; 10] = [
        Self::Internships,
        Self::Events,
        Self::Blogs,
        Self::Testimonials,
        Self::GalleryImages,
        Self::Faqs,
        Self::SiteStats,
        Self::InternshipApplications,
        Self::EventRegistrations,
        Self::ContactSubmissions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Internships => "internships",
            Self::Events => "events",
            Self::Blogs => "blogs",
            Self::Testimonials => "testimonials",
            Self::GalleryImages => "gallery_images",
            Self::Faqs => "faqs",
            Self::SiteStats => "site_stats",
            Self::InternshipApplications => "internship_applications",
            Self::EventRegistrations => "event_registrations",
            Self::ContactSubmissions => "contact_submissions",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown collection: {}", s))
    }
}
