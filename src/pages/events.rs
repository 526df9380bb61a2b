use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::REGISTRATION_DWELL;
use crate::common::FormError;
use crate::gateway::{Condition, Gateway, Op, Select, fetch};
use crate::models::{Collection, Event, EventPhase, RegistrationDraft};
use crate::pipeline::{ModalForm, Section};

pub const PAST_LIMIT: i64 = 6;
pub const NO_UPCOMING_MESSAGE: &str = "No upcoming events at the moment. Check back soon!";
pub const NO_PAST_MESSAGE: &str = "No past events to show yet.";

/// Upcoming and past events as of one fixed `now`.
pub struct EventsPage {
    now: DateTime<Utc>,
    pub upcoming: Section<Vec<Event>>,
    pub past: Section<Vec<Event>>,
    pub registration: ModalForm<Event, RegistrationDraft>,
}

impl EventsPage {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            upcoming: Section::new("upcoming events"),
            past: Section::new("past events"),
            registration: ModalForm::new(REGISTRATION_DWELL, |event| event.id),
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn upcoming_query(now: DateTime<Utc>) -> Select {
        Select::table(Collection::Events)
            .eq("is_active", true)
            .eq("is_past", false)
            .gte("event_date", now)
            .order("event_date", true)
    }

    pub fn past_query(now: DateTime<Utc>) -> Select {
        Select::table(Collection::Events)
            .or(vec![
                Condition::new("is_past", Op::Eq, true),
                Condition::new("event_date", Op::Lt, now),
            ])
            .order("event_date", false)
            .limit(PAST_LIMIT)
    }

    /// Both reads run concurrently and fill their own lists.
    pub async fn load<G: Gateway>(&mut self, gateway: &G, timeout: Duration) {
        let upcoming_query = Self::upcoming_query(self.now);
        let past_query = Self::past_query(self.now);

        tokio::join!(
            self.upcoming.load(timeout, fetch(gateway, &upcoming_query)),
            self.past.load(timeout, fetch(gateway, &past_query)),
        );
    }

    pub fn upcoming_events(&self) -> &[Event] {
        self.upcoming.items()
    }

    pub fn past_events(&self) -> &[Event] {
        self.past.items()
    }

    /// Only upcoming events that still accept registrations can be opened.
    pub fn open_registration(&mut self, id: Uuid) -> bool {
        let found = self
            .upcoming
            .items()
            .iter()
            .find(|e| e.id == id && e.phase(self.now) == EventPhase::Upcoming)
            .filter(|e| e.accepts_registrations(self.now))
            .cloned();

        match found {
            Some(event) => {
                self.registration.open(event);
                true
            }
            None => false,
        }
    }

    pub fn close_registration(&mut self) {
        self.registration.close();
    }

    pub async fn submit_registration<G: Gateway>(
        &mut self,
        gateway: &G,
        timeout: Duration,
    ) -> Result<(), FormError> {
        self.registration.submit(gateway, timeout).await
    }
}

/// Splits events into (upcoming, past) for `now`. Every event lands in
/// exactly one of the two.
pub fn partition_events(events: &[Event], now: DateTime<Utc>) -> (Vec<&Event>, Vec<&Event>) {
    events
        .iter()
        .partition(|event| event.phase(now) == EventPhase::Upcoming)
}
