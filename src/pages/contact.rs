use std::time::Duration;

use super::CONTACT_DWELL;
use crate::common::FormError;
use crate::gateway::Gateway;
use crate::models::ContactDraft;
use crate::pipeline::FormFlow;

/// Contact form; the page reads nothing.
pub struct ContactPage {
    pub form: FormFlow<ContactDraft>,
}

impl Default for ContactPage {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactPage {
    pub fn new() -> Self {
        Self {
            form: FormFlow::standalone(CONTACT_DWELL),
        }
    }

    pub async fn submit<G: Gateway>(&mut self, gateway: &G, timeout: Duration) -> Result<(), FormError> {
        self.form.submit(gateway, timeout).await
    }
}
