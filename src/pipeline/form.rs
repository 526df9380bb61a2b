use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use tokio::time::Instant;

use super::with_timeout;
use crate::common::{FormError, GatewayError};
use crate::gateway::{Gateway, Record};
use crate::log_failure;
use crate::models::Collection;

/// Shown when an insert fails; the cause only goes to the log.
pub const SUBMIT_FAILED_NOTICE: &str = "Something went wrong while sending your submission. Please try again.";

/// The values typed into one form, before they become a record.
pub trait Draft: Default + Serialize {
    /// What the submission is attached to; `()` for standalone forms.
    type Parent;

    const COLLECTION: Collection;

    fn field_names() -> &'static [&'static str];

    fn optional_fields() -> &'static [&'static str] {
        &[]
    }

    /// Required fields that are blank, in form order.
    fn missing_fields(&self) -> Vec<&'static str> {
        let values = match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => return Vec::new(),
        };

        Self::field_names()
            .iter()
            .copied()
            .filter(|field| !Self::optional_fields().contains(field))
            .filter(|field| match values.get(*field) {
                None | Some(Value::Null) => true,
                Some(Value::String(s)) => s.trim().is_empty(),
                Some(_) => false,
            })
            .collect()
    }

    fn to_record(&self, parent: &Self::Parent) -> Result<Record, FormError>;
}

/// Serializes a draft into a record: strings trimmed, blanks sent as null.
pub fn draft_record<D: Serialize>(draft: &D) -> Result<Record, FormError> {
    match serde_json::to_value(draft) {
        Ok(Value::Object(map)) => Ok(map
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::String(s) if s.trim().is_empty() => Value::Null,
                    Value::String(s) => Value::String(s.trim().to_string()),
                    other => other,
                };
                (key, value)
            })
            .collect()),
        Ok(_) => Err(FormError::Invalid("Form data is not a record".into())),
        Err(e) => Err(FormError::Invalid(e.to_string())),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    Editing {
        error: Option<String>,
        missing: Vec<&'static str>,
    },
    Submitting,
    /// Acknowledgment is on screen until `until`, then the form resets.
    Confirmed { until: Instant },
}

impl FormState {
    fn editing() -> Self {
        Self::Editing {
            error: None,
            missing: Vec::new(),
        }
    }
}

pub struct FormFlow<D: Draft> {
    draft: D,
    parent: Option<D::Parent>,
    state: FormState,
    dwell: Duration,
}

impl<D: Draft> FormFlow<D> {
    /// A form that cannot submit until a parent is bound.
    pub fn new(dwell: Duration) -> Self {
        Self {
            draft: D::default(),
            parent: None,
            state: FormState::editing(),
            dwell,
        }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Only editable while editing; typing is ignored mid-submit or while the
    /// acknowledgment shows.
    pub fn draft_mut(&mut self) -> Option<&mut D> {
        match self.state {
            FormState::Editing { .. } => Some(&mut self.draft),
            _ => None,
        }
    }

    pub fn set_draft(&mut self, draft: D) -> bool {
        match self.draft_mut() {
            Some(current) => {
                *current = draft;
                true
            }
            None => false,
        }
    }

    pub fn bind_parent(&mut self, parent: D::Parent) {
        self.parent = Some(parent);
    }

    pub fn clear_parent(&mut self) {
        self.parent = None;
    }

    pub fn parent(&self) -> Option<&D::Parent> {
        self.parent.as_ref()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn dwell(&self) -> Duration {
        self.dwell
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self.state, FormState::Confirmed { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FormState::Editing { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    pub fn missing(&self) -> &[&'static str] {
        match &self.state {
            FormState::Editing { missing, .. } => missing.as_slice(),
            _ => &[],
        }
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        matches!(self.state, FormState::Editing { .. }) && self.parent.is_some()
    }

    /// Validates the draft and moves to `Submitting`, handing back the record
    /// to insert. Nothing reaches the gateway when this fails.
    pub fn begin_submit(&mut self) -> Result<(Collection, Record), FormError> {
        if !matches!(self.state, FormState::Editing { .. }) {
            return Err(FormError::AlreadySubmitting);
        }

        let Some(parent) = self.parent.as_ref() else {
            return Err(FormError::NoParent);
        };

        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            let err = FormError::MissingFields(missing.clone());
            self.state = FormState::Editing {
                error: Some(err.to_string()),
                missing,
            };
            return Err(err);
        }

        let record = match self.draft.to_record(parent) {
            Ok(record) => record,
            Err(err) => {
                self.state = FormState::Editing {
                    error: Some(err.to_string()),
                    missing: Vec::new(),
                };
                return Err(err);
            }
        };

        self.state = FormState::Submitting;
        Ok((D::COLLECTION, record))
    }

    /// Applies the insert outcome. On failure the draft is kept as typed.
    pub fn finish_submit(
        &mut self,
        outcome: Result<(), GatewayError>,
        now: Instant,
    ) -> Result<(), FormError> {
        match outcome {
            Ok(()) => {
                self.state = FormState::Confirmed {
                    until: now + self.dwell,
                };
                Ok(())
            }
            Err(err) => {
                self.state = FormState::Editing {
                    error: Some(SUBMIT_FAILED_NOTICE.to_string()),
                    missing: Vec::new(),
                };
                Err(FormError::Gateway(err))
            }
        }
    }

    /// One insert, no retries.
    pub async fn submit<G: Gateway>(&mut self, gateway: &G, limit: Duration) -> Result<(), FormError> {
        let (collection, record) = self.begin_submit()?;

        let outcome = with_timeout(limit, gateway.insert(collection, record)).await;
        if let Err(err) = &outcome {
            log_failure!(err, collection);
        }

        self.finish_submit(outcome, Instant::now())
    }

    /// Resets to an empty draft once the acknowledgment has been shown for
    /// the dwell time. Returns whether the reset happened.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            FormState::Confirmed { until } if now >= until => {
                self.draft = D::default();
                self.state = FormState::editing();
                true
            }
            _ => false,
        }
    }

    /// Waits out the acknowledgment, then resets.
    pub async fn settle(&mut self) -> bool {
        if let FormState::Confirmed { until } = self.state {
            tokio::time::sleep_until(until).await;
        }
        self.poll(Instant::now())
    }
}

impl<D: Draft<Parent = ()>> FormFlow<D> {
    /// A form with nothing to attach to, ready to submit.
    pub fn standalone(dwell: Duration) -> Self {
        let mut flow = Self::new(dwell);
        flow.bind_parent(());
        flow
    }
}
