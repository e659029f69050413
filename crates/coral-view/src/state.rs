//! View state for one visit to the collection page.

use std::collections::BTreeSet;

use coral_model::{CategoryFilter, SortOrder};
use tracing::debug;

/// User-selected category, tag selection and sort order.
///
/// Fields are private so that a category change can never leave stale tags
/// behind: every path that changes the category clears the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    active_category: CategoryFilter,
    selected_tags: BTreeSet<String>,
    sort_by: SortOrder,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_category(&self) -> &CategoryFilter {
        &self.active_category
    }

    pub fn selected_tags(&self) -> &BTreeSet<String> {
        &self.selected_tags
    }

    pub fn sort_by(&self) -> SortOrder {
        self.sort_by
    }

    /// Accepts any string; `"All"` clears the category restriction.
    pub fn set_category(&mut self, category: &str) {
        self.set_category_filter(CategoryFilter::parse(category));
    }

    /// Always clears the tag selection, even when the category is unchanged.
    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        debug!(
            from = %self.active_category,
            to = %filter,
            cleared_tags = self.selected_tags.len(),
            "category changed"
        );
        self.active_category = filter;
        self.selected_tags.clear();
    }

    /// Adds the tag if absent, removes it if present.
    pub fn toggle_tag(&mut self, tag: &str) {
        let selected = if self.selected_tags.remove(tag) {
            false
        } else {
            self.selected_tags.insert(tag.to_string());
            true
        };
        debug!(tag, selected, "tag toggled");
    }

    pub fn is_tag_selected(&self, tag: &str) -> bool {
        self.selected_tags.contains(tag)
    }

    /// Unrecognized identifiers fall back to `featured`.
    pub fn set_sort_by(&mut self, order: &str) {
        let parsed = SortOrder::from_id_lenient(order);
        if parsed.as_str() != order {
            debug!(requested = order, "unrecognized sort order, keeping upstream order");
        }
        self.set_sort_order(parsed);
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        debug!(sort = %order, "sort order changed");
        self.sort_by = order;
    }
}
