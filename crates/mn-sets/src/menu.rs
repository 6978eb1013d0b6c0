//! Search and sort of menu summaries.
//!
//! Both the sets menu and the candidates menu list entries with a count and
//! let the user narrow them by a search string and order them by name or
//! count.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortCriterion {
    Name,
    #[default]
    Count,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub criterion: SortCriterion,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(criterion: SortCriterion, order: SortOrder) -> Self {
        Self { criterion, order }
    }
}

/// One line of a menu summary.
///
/// `total` is the size of the collection the count was taken over, used as
/// the denominator when the count is drawn as a bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub value: String,
    pub name: String,
    pub count: usize,
    pub total: usize,
}

/// Whether an entry matches a search string (case-insensitive, by name or value).
pub fn matches_search(entry: &SummaryEntry, search: &str) -> bool {
    let search = search.trim().to_lowercase();
    search.is_empty()
        || entry.name.to_lowercase().contains(&search)
        || entry.value.to_lowercase().contains(&search)
}

/// Sort entries in place. Stable; ties fall back to the value identifier.
pub fn sort_entries(entries: &mut [SummaryEntry], spec: SortSpec) {
    entries.sort_by(|a, b| {
        let primary = match spec.criterion {
            SortCriterion::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortCriterion::Count => a.count.cmp(&b.count),
        };
        let primary = match spec.order {
            SortOrder::Ascending => primary,
            SortOrder::Descending => primary.reverse(),
        };
        match primary {
            Ordering::Equal => a.value.cmp(&b.value),
            other => other,
        }
    });
}

/// Apply a search and a sort to a list of entries.
pub fn prepare_entries(
    entries: Vec<SummaryEntry>,
    search: &str,
    spec: SortSpec,
) -> Vec<SummaryEntry> {
    let mut entries: Vec<SummaryEntry> = entries
        .into_iter()
        .filter(|entry| matches_search(entry, search))
        .collect();
    sort_entries(&mut entries, spec);
    entries
}
