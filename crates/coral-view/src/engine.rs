//! Pure derivations over a base catalog list.
//!
//! Everything here is a function of its arguments only. Results are
//! recomputed from the full base list on every call.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use coral_model::{CatalogEntry, CategoryFilter, SortOrder};
use tracing::trace;

use crate::state::ViewState;

pub fn matches_category(entry: &CatalogEntry, filter: &CategoryFilter) -> bool {
    filter.matches(&entry.category)
}

/// OR semantics: with no selection everything passes, otherwise the entry
/// needs at least one selected tag.
pub fn matches_tags(entry: &CatalogEntry, selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || entry.has_any_tag(selected)
}

/// Case-insensitive ordinal comparison on the lowercase form of the name.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Comparator for `order`. `Featured` treats every pair as equal, which a
/// stable sort turns into "keep input order".
pub fn compare_entries(a: &CatalogEntry, b: &CatalogEntry, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Featured => Ordering::Equal,
        SortOrder::PriceAsc => a.price.value().total_cmp(&b.price.value()),
        SortOrder::PriceDesc => b.price.value().total_cmp(&a.price.value()),
        SortOrder::NameAsc => compare_names(&a.name, &b.name),
        SortOrder::NameDesc => compare_names(&b.name, &a.name),
    }
}

/// Stable in-place sort. Ties keep their relative order.
pub fn sort_entries(entries: &mut [&CatalogEntry], order: SortOrder) {
    if order.reorders() {
        entries.sort_by(|a, b| compare_entries(a, b, order));
    }
}

/// Union of filter tags across entries in `filter`, deduplicated and sorted
/// ascending. Tag selection plays no part here.
pub fn available_tags(base: &[CatalogEntry], filter: &CategoryFilter) -> Vec<String> {
    let tags: BTreeSet<&str> = base
        .iter()
        .filter(|entry| matches_category(entry, filter))
        .flat_map(|entry| entry.filter_tags.iter().map(String::as_str))
        .collect();
    trace!(category = %filter, count = tags.len(), "derived available tags");
    tags.into_iter().map(str::to_string).collect()
}

/// Category filter, then tag filter, then sort.
pub fn visible_entries<'a>(base: &'a [CatalogEntry], state: &ViewState) -> Vec<&'a CatalogEntry> {
    let mut visible: Vec<&CatalogEntry> = base
        .iter()
        .filter(|entry| matches_category(entry, state.active_category()))
        .filter(|entry| matches_tags(entry, state.selected_tags()))
        .collect();
    sort_entries(&mut visible, state.sort_by());
    trace!(
        category = %state.active_category(),
        tags = state.selected_tags().len(),
        sort = %state.sort_by(),
        base = base.len(),
        visible = visible.len(),
        "derived visible list"
    );
    visible
}
