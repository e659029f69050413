use anyhow::{Result, anyhow};
use tracing::{debug, info_span};

use coral_model::{CatalogEntry, Category, CategoryFilter, SortOrder};
use coral_store::Catalog;
use coral_view::{CatalogView, Listing};

/// Inputs for the collection listing.
#[derive(Debug, Clone)]
pub struct ListRequest {
    pub category: String,
    pub tags: Vec<String>,
    pub sort: String,
    pub include_sold_out: bool,
}

impl Default for ListRequest {
    fn default() -> Self {
        Self {
            category: coral_model::ALL_CATEGORIES.to_string(),
            tags: Vec::new(),
            sort: SortOrder::Featured.as_str().to_string(),
            include_sold_out: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListResult {
    pub category: CategoryFilter,
    pub sort: SortOrder,
    pub selected_tags: Vec<String>,
    pub available_tags: Vec<String>,
    pub entries: Vec<CatalogEntry>,
    /// Size of the base list the view was derived from.
    pub base_count: usize,
}

impl ListResult {
    /// The visible entries, or the explicit empty state.
    pub fn listing(&self) -> Listing<'_> {
        Listing::from_entries(self.entries.iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: CategoryFilter,
    pub label: String,
    pub entries: usize,
}

fn base_list(catalog: &Catalog, include_sold_out: bool) -> Vec<CatalogEntry> {
    if include_sold_out {
        catalog.entries().to_vec()
    } else {
        catalog.in_stock()
    }
}

/// Apply the request as a visitor would: pick the category, toggle each tag,
/// then choose the sort order.
pub fn run_list(catalog: &Catalog, request: &ListRequest) -> ListResult {
    let span = info_span!("list", category = %request.category, sort = %request.sort);
    let _guard = span.enter();

    let base = base_list(catalog, request.include_sold_out);
    let mut view = CatalogView::new(&base);
    view.set_category(&request.category);
    for tag in &request.tags {
        view.toggle_tag(tag);
    }
    view.set_sort_by(&request.sort);

    let entries: Vec<CatalogEntry> = view.visible().into_iter().cloned().collect();
    debug!(base = base.len(), visible = entries.len(), "listing ready");
    ListResult {
        category: view.state().active_category().clone(),
        sort: view.state().sort_by(),
        selected_tags: view.state().selected_tags().iter().cloned().collect(),
        available_tags: view.available_tags(),
        entries,
        base_count: base.len(),
    }
}

pub fn run_tags(catalog: &Catalog, category: &str, include_sold_out: bool) -> Vec<String> {
    let base = base_list(catalog, include_sold_out);
    coral_view::available_tags(&base, &CategoryFilter::parse(category))
}

pub fn run_show<'a>(catalog: &'a Catalog, slug: &str) -> Result<&'a CatalogEntry> {
    catalog
        .find_by_slug(slug)
        .ok_or_else(|| anyhow!("no coral with slug `{slug}`"))
}

/// "All" plus the shop tabs, with in-stock counts.
pub fn run_categories(catalog: &Catalog) -> Vec<CategoryCount> {
    let base = catalog.in_stock();
    let mut counts = vec![CategoryCount {
        category: CategoryFilter::All,
        label: "Shop All".to_string(),
        entries: base.len(),
    }];
    for category in Category::shop_tabs() {
        let filter = CategoryFilter::from(category.clone());
        let entries = base.iter().filter(|e| filter.matches(&e.category)).count();
        counts.push(CategoryCount {
            category: filter,
            label: category.label().to_string(),
            entries,
        });
    }
    counts
}
