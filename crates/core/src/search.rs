//! Catalog search
//!
//! Case-insensitive substring filtering over category sections. Pure
//! functions: hosts call them again on every keystroke.
//!
//! A place matches when its name, category or description contains the
//! trimmed query. Sections keep their catalog order, places keep their order
//! inside a section, and sections left without matches are dropped.

use alloc::string::String;
use alloc::vec::Vec;

use crate::catalog::{CategorySection, Place};

/// Message hosts render when a query matches nothing
pub const NO_MATCHES_MESSAGE: &str = "No places match your search. Try another keyword.";

/// Result of a search, distinguishing the empty state
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    /// At least one place matched
    Matches(Vec<CategorySection>),
    /// Nothing matched the query
    NoMatches,
}

impl SearchOutcome {
    /// Sections to render (empty for `NoMatches`)
    pub fn sections(&self) -> &[CategorySection] {
        match self {
            SearchOutcome::Matches(sections) => sections,
            SearchOutcome::NoMatches => &[],
        }
    }

    /// Empty-state message, if any
    pub fn empty_message(&self) -> Option<&'static str> {
        match self {
            SearchOutcome::Matches(_) => None,
            SearchOutcome::NoMatches => Some(NO_MATCHES_MESSAGE),
        }
    }
}

/// Filter sections by a free-text query
///
/// An empty or whitespace-only query returns every section unchanged.
pub fn filter(sections: &[CategorySection], query: &str) -> Vec<CategorySection> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return sections.to_vec();
    }

    sections
        .iter()
        .filter_map(|section| {
            let items: Vec<Place> = section
                .items
                .iter()
                .filter(|place| matches(place, &needle))
                .cloned()
                .collect();

            if items.is_empty() {
                None
            } else {
                Some(CategorySection {
                    label: section.label.clone(),
                    items,
                })
            }
        })
        .collect()
}

/// Filter and classify the result for rendering
pub fn search(sections: &[CategorySection], query: &str) -> SearchOutcome {
    let filtered = filter(sections, query);
    if filtered.is_empty() {
        SearchOutcome::NoMatches
    } else {
        SearchOutcome::Matches(filtered)
    }
}

/// `needle` must already be lowercase
fn matches(place: &Place, needle: &str) -> bool {
    contains_folded(&place.name, needle)
        || contains_folded(&place.category, needle)
        || place
            .description
            .as_deref()
            .is_some_and(|description| contains_folded(description, needle))
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    let folded: String = haystack.to_lowercase();
    folded.contains(needle)
}
