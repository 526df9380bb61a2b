use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub event_type: String,
    pub mode: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub max_participants: Option<i32>,
    #[serde(default)]
    pub registration_deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_past: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Which of the two event lists an event belongs to.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EventPhase {
    Upcoming,
    Past,
}

impl EventPhase {
    /// An event is past once it is flagged as such or its date has gone by.
    pub fn of(event: &Event, now: DateTime<Utc>) -> Self {
        if event.is_past || event.event_date < now {
            Self::Past
        } else {
            Self::Upcoming
        }
    }
}

impl Event {
    pub fn phase(&self, now: DateTime<Utc>) -> EventPhase {
        EventPhase::of(self, now)
    }

    /// Registration stays open until the deadline, or the event itself when no
    /// deadline was set.
    pub fn accepts_registrations(&self, now: DateTime<Utc>) -> bool {
        if self.phase(now) == EventPhase::Past || !self.is_active {
            return false;
        }
        self.registration_deadline.is_none_or(|deadline| now <= deadline)
    }

    pub fn display_date(&self) -> String {
        format_long_date(&self.event_date)
    }

    pub fn display_time(&self) -> String {
        self.event_date.format("%-I:%M %p").to_string()
    }
}

/// "October 19, 2026"
pub fn format_long_date(at: &DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}
