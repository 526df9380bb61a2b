pub use blog::*;
pub use collection::*;
pub use event::*;
pub use faq::*;
pub use gallery::*;
pub use internship::*;
pub use rating::*;
pub use site_stats::*;
pub use submission::*;
pub use testimonial::*;
pub use testimonial_status::*;

mod blog;
mod collection;
mod event;
mod faq;
mod gallery;
mod internship;
mod rating;
mod site_stats;
mod submission;
mod testimonial;
mod testimonial_status;
