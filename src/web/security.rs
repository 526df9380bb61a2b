use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use uuid::Uuid;

/// One-time tokens for public form posts. Each rendered form gets a fresh
/// token and a POST is only processed if it claims an unused one, so a
/// double click or a replayed request stores at most one row.
pub struct SubmitGuard {
    issued: Mutex<HashMap<String, Instant>>,
    ttl: Duration,
}

impl SubmitGuard {
    pub const DEFAULT_TTL: Duration = Duration::from_secs(2 * 60 * 60);

    pub fn new(ttl: Duration) -> Self {
        Self {
            issued: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    pub fn issue(&self) -> String {
        let now = Instant::now();
        let token = Uuid::new_v4().simple().to_string();

        let mut issued = self
            .issued
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        // Expired tokens are dropped here so the map stays bounded.
        issued.retain(|_, at| now.duration_since(*at) < self.ttl);
        issued.insert(token.clone(), now);

        token
    }

    /// True exactly once per issued, unexpired token.
    pub fn claim(&self, token: &str) -> bool {
        let token = token.trim();
        if token.is_empty() {
            return false;
        }

        let mut issued = self
            .issued
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        issued
            .remove(token)
            .is_some_and(|at| at.elapsed() < self.ttl)
    }
}

impl Default for SubmitGuard {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TTL)
    }
}
