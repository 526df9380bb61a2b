use std::time::Duration;

use uuid::Uuid;

use super::APPLICATION_DWELL;
use crate::common::FormError;
use crate::gateway::{Gateway, Select, fetch};
use crate::models::{ApplicationDraft, Collection, Internship};
use crate::pipeline::{FacetChoice, ModalForm, Section, facet_options};

pub const EMPTY_MESSAGE: &str = "No internships found matching your criteria.";

pub struct InternshipsPage {
    pub listings: Section<Vec<Internship>>,
    department: FacetChoice,
    mode: FacetChoice,
    pub application: ModalForm<Internship, ApplicationDraft>,
}

impl Default for InternshipsPage {
    fn default() -> Self {
        Self::new()
    }
}

impl InternshipsPage {
    pub fn new() -> Self {
        Self {
            listings: Section::new("internships"),
            department: FacetChoice::All,
            mode: FacetChoice::All,
            application: ModalForm::new(APPLICATION_DWELL, |internship| internship.id),
        }
    }

    pub fn query() -> Select {
        Select::table(Collection::Internships)
            .eq("is_active", true)
            .order("created_at", false)
    }

    pub async fn load<G: Gateway>(&mut self, gateway: &G, timeout: Duration) {
        self.listings
            .load(timeout, fetch(gateway, &Self::query()))
            .await;
    }

    pub fn set_department(&mut self, choice: FacetChoice) {
        self.department = choice;
    }

    pub fn set_mode(&mut self, choice: FacetChoice) {
        self.mode = choice;
    }

    pub fn department(&self) -> &FacetChoice {
        &self.department
    }

    pub fn mode(&self) -> &FacetChoice {
        &self.mode
    }

    /// Listings matching both facets.
    pub fn view(&self) -> Vec<&Internship> {
        self.listings
            .items()
            .iter()
            .filter(|i| self.department.matches(&i.department) && self.mode.matches(&i.mode))
            .collect()
    }

    pub fn departments(&self) -> Vec<String> {
        facet_options(self.listings.items(), |i| i.department.as_str())
    }

    pub fn modes(&self) -> Vec<String> {
        facet_options(self.listings.items(), |i| i.mode.as_str())
    }

    /// Opens the application dialog for a loaded listing. Unknown ids leave
    /// it closed.
    pub fn open_application(&mut self, id: Uuid) -> bool {
        let found = self.listings.items().iter().find(|i| i.id == id).cloned();

        match found {
            Some(internship) => {
                self.application.open(internship);
                true
            }
            None => false,
        }
    }

    pub fn close_application(&mut self) {
        self.application.close();
    }

    pub async fn submit_application<G: Gateway>(
        &mut self,
        gateway: &G,
        timeout: Duration,
    ) -> Result<(), FormError> {
        self.application.submit(gateway, timeout).await
    }
}
