use field_names::FieldNames;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::common::FormError;
use crate::gateway::Record;
use crate::pipeline::{Draft, draft_record};

use super::{Collection, Rating, TestimonialStatus};

fn require_email(record: &Record) -> Result<(), FormError> {
    let valid = record
        .get("email")
        .and_then(Value::as_str)
        .is_some_and(|email| {
            email
                .split_once('@')
                .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'))
        });

    if valid {
        Ok(())
    } else {
        Err(FormError::Invalid("Please enter a valid email address".into()))
    }
}

/// Application for one internship, inserted into `internship_applications`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FieldNames)]
pub struct ApplicationDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub college: String,
    #[serde(default)]
    pub message: String,
}

impl Draft for ApplicationDraft {
    type Parent = Uuid;
    const COLLECTION: Collection = Collection::InternshipApplications;

    fn field_names() -> &'static [&'static str] {
        &Self::FIELDS
    }

    fn optional_fields() -> &'static [&'static str] {
        &["message"]
    }

    fn to_record(&self, internship_id: &Uuid) -> Result<Record, FormError> {
        let mut record = draft_record(self)?;
        require_email(&record)?;
        record.insert("internship_id".into(), Value::String(internship_id.to_string()));
        Ok(record)
    }
}

/// Registration for one event, inserted into `event_registrations`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FieldNames)]
pub struct RegistrationDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub college: String,
    #[serde(default)]
    pub message: String,
}

impl Draft for RegistrationDraft {
    type Parent = Uuid;
    const COLLECTION: Collection = Collection::EventRegistrations;

    fn field_names() -> &'static [&'static str] {
        &Self::FIELDS
    }

    fn optional_fields() -> &'static [&'static str] {
        &["message"]
    }

    fn to_record(&self, event_id: &Uuid) -> Result<Record, FormError> {
        let mut record = draft_record(self)?;
        require_email(&record)?;
        record.insert("event_id".into(), Value::String(event_id.to_string()));
        Ok(record)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FieldNames)]
pub struct ContactDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl Draft for ContactDraft {
    type Parent = ();
    const COLLECTION: Collection = Collection::ContactSubmissions;

    fn field_names() -> &'static [&'static str] {
        &Self::FIELDS
    }

    fn to_record(&self, _: &()) -> Result<Record, FormError> {
        let record = draft_record(self)?;
        require_email(&record)?;
        Ok(record)
    }
}

/// Public testimonial submission. Stored as pending until approved by staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FieldNames)]
#[serde(default)]
pub struct TestimonialDraft {
    pub name: String,
    pub college: String,
    pub program: String,
    pub testimonial: String,
    pub rating: String,
    pub photo_url: String,
}

impl Default for TestimonialDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            college: String::new(),
            program: String::new(),
            testimonial: String::new(),
            rating: Rating::default().to_string(),
            photo_url: String::new(),
        }
    }
}

impl Draft for TestimonialDraft {
    type Parent = ();
    const COLLECTION: Collection = Collection::Testimonials;

    fn field_names() -> &'static [&'static str] {
        &Self::FIELDS
    }

    fn optional_fields() -> &'static [&'static str] {
        &["photo_url"]
    }

    fn to_record(&self, _: &()) -> Result<Record, FormError> {
        let rating: Rating = self
            .rating
            .parse()
            .map_err(|e: crate::common::RatingError| FormError::Invalid(e.to_string()))?;

        let mut record = draft_record(self)?;
        record.insert("rating".into(), Value::from(i64::from(rating)));
        record.insert(
            "status".into(),
            Value::String(TestimonialStatus::Pending.as_str().into()),
        );
        Ok(record)
    }
}
