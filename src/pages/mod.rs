//! One controller per page. Each owns its load states, filters and dialogs
//! for a single visit and is dropped with it.

use std::time::Duration;

pub mod admin;
pub mod blog;
pub mod contact;
pub mod events;
pub mod faq;
pub mod gallery;
pub mod home;
pub mod internships;
pub mod testimonials;

pub use admin::{AdminAccess, AdminCounts, AdminPage};
pub use blog::BlogPage;
pub use contact::ContactPage;
pub use events::{EventsPage, partition_events};
pub use faq::FaqPage;
pub use gallery::GalleryPage;
pub use home::HomePage;
pub use internships::InternshipsPage;
pub use testimonials::TestimonialsPage;

pub const APPLICATION_DWELL: Duration = Duration::from_secs(2);
pub const REGISTRATION_DWELL: Duration = Duration::from_secs(2);
pub const CONTACT_DWELL: Duration = Duration::from_secs(3);
pub const TESTIMONIAL_DWELL: Duration = Duration::from_secs(3);
