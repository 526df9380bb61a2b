use std::time::Duration;

use crate::gateway::{Gateway, Select, fetch};
use crate::models::{Collection, Faq};
use crate::pipeline::Section;

pub const EMPTY_MESSAGE: &str = "No FAQs available at the moment";

/// Accordion of active questions; at most one answer is expanded.
pub struct FaqPage {
    pub faqs: Section<Vec<Faq>>,
    open: Option<usize>,
}

impl Default for FaqPage {
    fn default() -> Self {
        Self::new()
    }
}

impl FaqPage {
    pub fn new() -> Self {
        Self {
            faqs: Section::new("faqs"),
            open: None,
        }
    }

    pub fn query() -> Select {
        Select::table(Collection::Faqs)
            .eq("is_active", true)
            .order("order_index", true)
    }

    pub async fn load<G: Gateway>(&mut self, gateway: &G, timeout: Duration) {
        self.faqs.load(timeout, fetch(gateway, &Self::query())).await;
    }

    /// Expands `index`, or collapses it when it is the one already open.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.faqs.items().len() {
            return;
        }

        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }
}
