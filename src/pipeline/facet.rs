use std::collections::HashSet;

/// Sentinel facet value that selects every item.
pub const ALL: &str = "All";

/// The active value of one facet filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FacetChoice {
    #[default]
    All,
    Only(String),
}

impl FacetChoice {
    /// Missing, blank and "All" all mean no filtering.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::All,
            Some(value) if value == ALL => Self::All,
            Some(value) => Self::Only(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Only(value) => value,
        }
    }

    /// Compares against the trimmed value, the same form the option list shows.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value.trim(),
        }
    }
}

/// Items whose facet equals the active choice, in input order. The
/// base list is never modified.
pub fn filtered_view<'a, T, F>(items: &'a [T], choice: &FacetChoice, facet: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    items.iter().filter(|item| choice.matches(facet(item))).collect()
}

/// "All" followed by each distinct non-empty facet value, first-seen order.
pub fn facet_options<T, F>(items: &[T], facet: F) -> Vec<String>
where
    F: Fn(&T) -> &str,
{
    let mut seen = HashSet::new();
    let observed = items
        .iter()
        .map(|item| facet(item).trim())
        .filter(|value| !value.is_empty() && *value != ALL)
        .filter(|value| seen.insert(*value))
        .map(str::to_string);

    std::iter::once(ALL.to_string()).chain(observed).collect()
}

/// Option list for a facet with a fixed set of values.
pub fn static_options(values: &[&str]) -> Vec<String> {
    let mut seen = HashSet::new();
    let fixed = values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty() && *value != ALL)
        .filter(|value| seen.insert(*value))
        .map(str::to_string);

    std::iter::once(ALL.to_string()).chain(fixed).collect()
}

/// One option as shown in a filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOption {
    pub value: String,
    pub active: bool,
}

pub fn mark_active(options: Vec<String>, choice: &FacetChoice) -> Vec<FacetOption> {
    options
        .into_iter()
        .map(|value| FacetOption {
            active: value == choice.as_str(),
            value,
        })
        .collect()
}
