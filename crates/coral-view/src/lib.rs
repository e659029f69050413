//! Catalog view engine for the collection page.
//!
//! A [`CatalogView`] owns the visitor's [`ViewState`] (active category,
//! selected filter tags, sort order) and derives from a fixed base list:
//!
//! - the tags offered for refinement under the current category
//!   ([`available_tags`]), and
//! - the ordered entries to display ([`visible_entries`]), wrapped in a
//!   [`Listing`] so that an empty result has its own state.
//!
//! The pipeline is base list, then category filter, then tag filter (OR
//! across selected tags), then a stable sort. Nothing is cached; every call
//! recomputes from the base list.
//!
//! # Example
//!
//! ```ignore
//! use coral_view::CatalogView;
//!
//! let mut view = CatalogView::new(&entries);
//! view.set_category("soft");
//! view.toggle_tag("zoa");
//! view.set_sort_by("price-asc");
//! for entry in view.listing().entries() {
//!     println!("{} {}", entry.name, entry.price);
//! }
//! ```

pub mod engine;
pub mod state;
pub mod view;

pub use engine::{
    available_tags, compare_entries, compare_names, matches_category, matches_tags, sort_entries,
    visible_entries,
};
pub use state::ViewState;
pub use view::{CatalogView, Listing};
