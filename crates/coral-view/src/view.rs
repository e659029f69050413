use coral_model::{CatalogEntry, CategoryFilter, SortOrder};

use crate::engine::{available_tags, visible_entries};
use crate::state::ViewState;

/// What the display layer renders for the product grid.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<'a> {
    /// At least one entry, in display order.
    Results(Vec<&'a CatalogEntry>),
    /// Filters matched nothing. Distinct from "still loading".
    NoResults,
}

impl<'a> Listing<'a> {
    pub const EMPTY_MESSAGE: &'static str = "No corals found matching your filters.";

    pub fn from_entries(entries: Vec<&'a CatalogEntry>) -> Self {
        if entries.is_empty() {
            Listing::NoResults
        } else {
            Listing::Results(entries)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::NoResults)
    }

    pub fn entries(&self) -> &[&'a CatalogEntry] {
        match self {
            Listing::Results(entries) => entries,
            Listing::NoResults => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }
}

/// A collection page session: the base list handed over by the content
/// store plus the visitor's view state.
#[derive(Debug, Clone)]
pub struct CatalogView<'a> {
    base: &'a [CatalogEntry],
    state: ViewState,
}

impl<'a> CatalogView<'a> {
    pub fn new(base: &'a [CatalogEntry]) -> Self {
        Self::with_state(base, ViewState::default())
    }

    pub fn with_state(base: &'a [CatalogEntry], state: ViewState) -> Self {
        Self { base, state }
    }

    pub fn base(&self) -> &'a [CatalogEntry] {
        self.base
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn set_category(&mut self, category: &str) {
        self.state.set_category(category);
    }

    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        self.state.set_category_filter(filter);
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        self.state.toggle_tag(tag);
    }

    pub fn set_sort_by(&mut self, order: &str) {
        self.state.set_sort_by(order);
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.state.set_sort_order(order);
    }

    /// Tags offered by the tag picker under the current category.
    pub fn available_tags(&self) -> Vec<String> {
        available_tags(self.base, self.state.active_category())
    }

    pub fn visible(&self) -> Vec<&'a CatalogEntry> {
        visible_entries(self.base, &self.state)
    }

    pub fn listing(&self) -> Listing<'a> {
        Listing::from_entries(self.visible())
    }
}
