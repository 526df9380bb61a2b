use std::time::Duration;

use serde::Serialize;

use crate::common::{FormError, GatewayError};
use crate::gateway::{Gateway, Select, Session};
use crate::log_failure;
use crate::models::Collection;
use crate::pipeline::{Section, with_timeout};

/// The only thing a failed sign-in ever says.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AdminCounts {
    pub applications: u64,
    pub registrations: u64,
    pub contacts: u64,
    pub testimonials: u64,
}

impl AdminCounts {
    pub fn total(&self) -> u64 {
        self.applications + self.registrations + self.contacts + self.testimonials
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdminAccess {
    SignedOut { notice: Option<String> },
    SignedIn(Session),
}

/// Dashboard of submission counts, behind an admin session.
pub struct AdminPage {
    access: AdminAccess,
    pub counts: Section<AdminCounts>,
}

impl Default for AdminPage {
    fn default() -> Self {
        Self::new()
    }
}

async fn count_or_zero<G: Gateway>(gateway: &G, collection: Collection) -> u64 {
    match gateway.count(&Select::table(collection)).await {
        Ok(n) => n,
        Err(err) => {
            log_failure!(&err, collection);
            0
        }
    }
}

impl AdminPage {
    pub fn new() -> Self {
        Self {
            access: AdminAccess::SignedOut { notice: None },
            counts: Section::new("admin counts"),
        }
    }

    pub fn access(&self) -> &AdminAccess {
        &self.access
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.access {
            AdminAccess::SignedIn(session) => Some(session),
            AdminAccess::SignedOut { .. } => None,
        }
    }

    pub fn notice(&self) -> Option<&str> {
        match &self.access {
            AdminAccess::SignedOut { notice } => notice.as_deref(),
            AdminAccess::SignedIn(_) => None,
        }
    }

    /// Checks the session once on entry and loads the counts when there is one.
    pub async fn mount<G: Gateway>(&mut self, gateway: &G, token: Option<&str>, timeout: Duration) {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return;
        };

        match with_timeout(timeout, gateway.get_session(token)).await {
            Ok(Some(session)) => {
                self.access = AdminAccess::SignedIn(session);
                self.load_counts(gateway, timeout).await;
            }
            Ok(None) => log::debug!("Admin session expired or unknown"),
            Err(err) => log_failure!(&err, "admin session check"),
        }
    }

    /// The four counts are independent; one failing shows as zero.
    pub async fn load_counts<G: Gateway>(&mut self, gateway: &G, timeout: Duration) {
        let read = async {
            let (applications, registrations, contacts, testimonials) = tokio::join!(
                count_or_zero(gateway, Collection::InternshipApplications),
                count_or_zero(gateway, Collection::EventRegistrations),
                count_or_zero(gateway, Collection::ContactSubmissions),
                count_or_zero(gateway, Collection::Testimonials),
            );

            Ok::<_, GatewayError>(AdminCounts {
                applications,
                registrations,
                contacts,
                testimonials,
            })
        };

        self.counts.load(timeout, read).await;
    }

    pub async fn sign_in<G: Gateway>(
        &mut self,
        gateway: &G,
        email: &str,
        password: &str,
        timeout: Duration,
    ) -> Result<Session, FormError> {
        let missing: Vec<&'static str> = [("email", email), ("password", password)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect();

        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }

        match with_timeout(timeout, gateway.sign_in_with_password(email, password)).await {
            Ok(session) => {
                log::info!("Admin {} signed in", session.email);
                self.access = AdminAccess::SignedIn(session.clone());
                self.load_counts(gateway, timeout).await;
                Ok(session)
            }
            Err(err) => {
                log::warn!("Admin sign-in failed: {}", err);
                self.access = AdminAccess::SignedOut {
                    notice: Some(INVALID_CREDENTIALS.to_string()),
                };
                Err(FormError::Gateway(GatewayError::InvalidCredentials))
            }
        }
    }

    pub async fn sign_out<G: Gateway>(&mut self, gateway: &G, timeout: Duration) {
        if let AdminAccess::SignedIn(session) = &self.access {
            if let Err(err) = with_timeout(timeout, gateway.sign_out(&session.token)).await {
                log_failure!(&err, "admin sign-out");
            }
        }

        self.access = AdminAccess::SignedOut { notice: None };
        self.counts = Section::new("admin counts");
    }
}
