use std::time::Duration;

use uuid::Uuid;

use crate::gateway::{Gateway, Select, fetch};
use crate::models::{Collection, GalleryImage};
use crate::pipeline::{FacetChoice, Modal, Section, facet_options, filtered_view};

pub const EMPTY_MESSAGE: &str = "No images found in this category.";

pub struct GalleryPage {
    pub images: Section<Vec<GalleryImage>>,
    category: FacetChoice,
    pub lightbox: Modal<GalleryImage>,
}

impl Default for GalleryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl GalleryPage {
    pub fn new() -> Self {
        Self {
            images: Section::new("gallery images"),
            category: FacetChoice::All,
            lightbox: Modal::Closed,
        }
    }

    pub fn query() -> Select {
        Select::table(Collection::GalleryImages).order("created_at", false)
    }

    pub async fn load<G: Gateway>(&mut self, gateway: &G, timeout: Duration) {
        self.images.load(timeout, fetch(gateway, &Self::query())).await;
    }

    pub fn set_category(&mut self, choice: FacetChoice) {
        self.category = choice;
    }

    pub fn category(&self) -> &FacetChoice {
        &self.category
    }

    /// Categories present in the loaded images.
    pub fn categories(&self) -> Vec<String> {
        facet_options(self.images.items(), |img| img.category.as_str())
    }

    pub fn view(&self) -> Vec<&GalleryImage> {
        filtered_view(self.images.items(), &self.category, |img| img.category.as_str())
    }

    pub fn open_image(&mut self, id: Uuid) -> bool {
        match self.images.items().iter().find(|img| img.id == id).cloned() {
            Some(image) => {
                self.lightbox.open(image);
                true
            }
            None => false,
        }
    }

    pub fn close_image(&mut self) {
        self.lightbox.close();
    }
}
