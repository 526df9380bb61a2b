use serde::{Deserialize, Serialize};

/// Single aggregate row shown on the home page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteStats {
    pub students_trained: i64,
    pub events_held: i64,
    pub institutions_partnered: i64,
}
