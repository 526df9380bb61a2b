use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Internship {
    pub id: Uuid,
    pub title: String,
    pub department: String,
    pub mode: String,
    pub duration: String,
    pub stipend: String,
    #[serde(default)]
    pub skills_required: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub requirements: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
