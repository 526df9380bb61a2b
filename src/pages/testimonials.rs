use std::time::Duration;

use super::TESTIMONIAL_DWELL;
use crate::common::FormError;
use crate::gateway::{Gateway, Select, fetch};
use crate::models::{Collection, Testimonial, TestimonialDraft, TestimonialStatus};
use crate::pipeline::{ModalForm, Section};

pub const EMPTY_MESSAGE: &str = "No testimonials yet. Be the first to share your experience!";

pub struct TestimonialsPage {
    pub testimonials: Section<Vec<Testimonial>>,
    /// "Share your experience" dialog; it has no selected item.
    pub share: ModalForm<(), TestimonialDraft>,
}

impl Default for TestimonialsPage {
    fn default() -> Self {
        Self::new()
    }
}

impl TestimonialsPage {
    pub fn new() -> Self {
        Self {
            testimonials: Section::new("testimonials"),
            share: ModalForm::new(TESTIMONIAL_DWELL, |_| ()),
        }
    }

    /// Approved testimonials only, newest first.
    pub fn query() -> Select {
        Select::table(Collection::Testimonials)
            .eq("status", TestimonialStatus::Approved.as_str())
            .order("created_at", false)
    }

    pub async fn load<G: Gateway>(&mut self, gateway: &G, timeout: Duration) {
        self.testimonials
            .load(timeout, fetch(gateway, &Self::query()))
            .await;
    }

    pub fn view(&self) -> &[Testimonial] {
        self.testimonials.items()
    }

    pub fn open_form(&mut self) {
        self.share.open(());
    }

    pub fn close_form(&mut self) {
        self.share.close();
    }

    pub async fn submit<G: Gateway>(&mut self, gateway: &G, timeout: Duration) -> Result<(), FormError> {
        self.share.submit(gateway, timeout).await
    }
}
