use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::common::GatewayError;
use crate::models::Collection;

/// A typed value a condition compares a column against.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Text(String),
    Time(DateTime<Utc>),
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<DateTime<Utc>> for Scalar {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Time(value)
    }
}

impl Scalar {
    /// Compares a stored JSON value against this scalar. `None` when the two
    /// cannot be compared (missing column, type mismatch).
    pub fn compare_to(&self, stored: &Value) -> Option<Ordering> {
        match (self, stored) {
            (Self::Bool(want), Value::Bool(have)) => Some(have.cmp(want)),
            (Self::Int(want), Value::Number(have)) => {
                have.as_f64().and_then(|have| have.partial_cmp(&(*want as f64)))
            }
            (Self::Text(want), Value::String(have)) => Some(have.as_str().cmp(want.as_str())),
            (Self::Time(want), Value::String(have)) => DateTime::parse_from_rfc3339(have)
                .ok()
                .map(|have| have.with_timezone(&Utc).cmp(want)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Op {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl Op {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Eq => " = ",
            Self::Neq => " <> ",
            Self::Gt => " > ",
            Self::Gte => " >= ",
            Self::Lt => " < ",
            Self::Lte => " <= ",
        }
    }

    /// Whether `stored <op> wanted` holds, given `stored.cmp(wanted)`.
    pub fn holds(&self, ordering: Ordering) -> bool {
        match self {
            Self::Eq => ordering == Ordering::Equal,
            Self::Neq => ordering != Ordering::Equal,
            Self::Gt => ordering == Ordering::Greater,
            Self::Gte => ordering != Ordering::Less,
            Self::Lt => ordering == Ordering::Less,
            Self::Lte => ordering != Ordering::Greater,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Condition {
    pub field: String,
    pub op: Op,
    pub value: Scalar,
}

impl Condition {
    pub fn new(field: &str, op: Op, value: impl Into<Scalar>) -> Self {
        Self {
            field: field.to_string(),
            op,
            value: value.into(),
        }
    }

    pub fn matches(&self, record: &super::Record) -> bool {
        record
            .get(&self.field)
            .and_then(|stored| self.value.compare_to(stored))
            .is_some_and(|ordering| self.op.holds(ordering))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderBy {
    pub field: String,
    pub ascending: bool,
}

/// A read against one collection: AND-ed conditions, an optional OR group,
/// optional ordering and limit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Select {
    pub collection: Collection,
    pub conditions: Vec<Condition>,
    pub any_of: Vec<Condition>,
    pub order_by: Option<OrderBy>,
    pub limit: Option<i64>,
}

impl Select {
    pub fn table(collection: Collection) -> Self {
        Self {
            collection,
            conditions: Vec::new(),
            any_of: Vec::new(),
            order_by: None,
            limit: None,
        }
    }

    pub fn filter(mut self, field: &str, op: Op, value: impl Into<Scalar>) -> Self {
        self.conditions.push(Condition::new(field, op, value));
        self
    }

    pub fn eq(self, field: &str, value: impl Into<Scalar>) -> Self {
        self.filter(field, Op::Eq, value)
    }

    pub fn gte(self, field: &str, value: impl Into<Scalar>) -> Self {
        self.filter(field, Op::Gte, value)
    }

    pub fn lt(self, field: &str, value: impl Into<Scalar>) -> Self {
        self.filter(field, Op::Lt, value)
    }

    /// Adds a disjunction; a row passes when any one of `conditions` holds.
    pub fn or(mut self, conditions: Vec<Condition>) -> Self {
        self.any_of = conditions;
        self
    }

    pub fn order(mut self, field: &str, ascending: bool) -> Self {
        self.order_by = Some(OrderBy {
            field: field.to_string(),
            ascending,
        });
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Rejects field names that are not plain lowercase identifiers, and
    /// negative limits.
    pub fn validate(&self) -> Result<(), GatewayError> {
        let fields = self
            .conditions
            .iter()
            .chain(&self.any_of)
            .map(|c| c.field.as_str())
            .chain(self.order_by.iter().map(|o| o.field.as_str()));

        for field in fields {
            check_identifier(field)?;
        }

        if self.limit.is_some_and(|limit| limit < 0) {
            return Err(GatewayError::InvalidRequest(
                "Pagination 'limit' is negative integer".into(),
            ));
        }

        Ok(())
    }

    pub fn matches(&self, record: &super::Record) -> bool {
        self.conditions.iter().all(|c| c.matches(record))
            && (self.any_of.is_empty() || self.any_of.iter().any(|c| c.matches(record)))
    }
}

pub fn check_identifier(field: &str) -> Result<(), GatewayError> {
    let valid = field
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_lowercase())
        && field
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(GatewayError::InvalidField(field.to_string()))
    }
}

/// Total order over stored JSON values used for in-memory sorting. Strings
/// that are both timestamps compare chronologically.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => a
            .as_f64()
            .zip(b.as_f64())
            .and_then(|(a, b)| a.partial_cmp(&b))
            .unwrap_or(Ordering::Equal),
        (Value::String(a), Value::String(b)) => {
            match (DateTime::parse_from_rfc3339(a), DateTime::parse_from_rfc3339(b)) {
                (Ok(a), Ok(b)) => a.cmp(&b),
                _ => a.cmp(b),
            }
        }
        _ => Ordering::Equal,
    }
}
