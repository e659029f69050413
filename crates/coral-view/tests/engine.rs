//! Integration tests for the catalog view engine.

mod common;

use coral_model::SortOrder;
use coral_view::{CatalogView, Listing, ViewState, available_tags, visible_entries};

use common::{entry, names, sample_catalog};

#[test]
fn walkthrough_category_then_all_then_price() {
    let base = sample_catalog();
    let mut view = CatalogView::new(&base);

    view.set_category("soft");
    assert_eq!(names(&view.visible()), vec!["Rainbow Zoa"]);
    assert_eq!(view.available_tags(), vec!["rare", "zoa"]);

    view.toggle_tag("zoa");
    view.set_category("All");
    assert!(view.state().selected_tags().is_empty());
    assert_eq!(
        names(&view.visible()),
        vec!["Rainbow Zoa", "Jawbreaker", "Acro Frag"]
    );
    assert_eq!(view.state().sort_by(), SortOrder::Featured);

    view.set_sort_by("price-asc");
    insta::assert_json_snapshot!(names(&view.visible()), @r#"
    [
      "Acro Frag",
      "Rainbow Zoa",
      "Jawbreaker"
    ]
    "#);
}

#[test]
fn tag_filter_is_or_across_selection() {
    let base = sample_catalog();
    let mut view = CatalogView::new(&base);
    view.toggle_tag("rare");
    view.toggle_tag("torch");
    assert_eq!(names(&view.visible()), vec!["Rainbow Zoa", "Jawbreaker"]);
}

#[test]
fn available_tags_ignore_tag_selection() {
    let base = sample_catalog();
    let mut view = CatalogView::new(&base);
    view.toggle_tag("torch");
    assert_eq!(view.available_tags(), vec!["rare", "torch", "zoa"]);
}

#[test]
fn stale_tag_contributes_nothing() {
    let base = sample_catalog();
    let mut state = ViewState::new();
    state.set_category("lps");
    state.toggle_tag("zoa");
    assert!(visible_entries(&base, &state).is_empty());
    state.toggle_tag("torch");
    assert_eq!(names(&visible_entries(&base, &state)), vec!["Jawbreaker"]);
}

#[test]
fn unknown_category_yields_no_results() {
    let base = sample_catalog();
    let mut view = CatalogView::new(&base);
    view.set_category("gorgonian");
    assert_eq!(view.listing(), Listing::NoResults);
    assert!(view.available_tags().is_empty());
}

#[test]
fn empty_base_list() {
    let base = Vec::new();
    let view = CatalogView::new(&base);
    assert!(view.available_tags().is_empty());
    assert!(view.listing().is_empty());
    assert_eq!(view.listing().len(), 0);
}

#[test]
fn name_sort_is_case_insensitive() {
    let base = vec![
        entry("1", "zoa garden", "soft", 10.0, &[]),
        entry("2", "Acan Lord", "lps", 10.0, &[]),
        entry("3", "blasto", "lps", 10.0, &[]),
    ];
    let mut view = CatalogView::new(&base);
    view.set_sort_order(SortOrder::NameAsc);
    assert_eq!(
        names(&view.visible()),
        vec!["Acan Lord", "blasto", "zoa garden"]
    );
    view.set_sort_order(SortOrder::NameDesc);
    assert_eq!(
        names(&view.visible()),
        vec!["zoa garden", "blasto", "Acan Lord"]
    );
}

#[test]
fn unrecognized_sort_keeps_filtered_order() {
    let base = sample_catalog();
    let mut view = CatalogView::new(&base);
    view.set_sort_by("price-desc");
    view.set_sort_by("most-popular");
    assert_eq!(
        names(&view.visible()),
        vec!["Rainbow Zoa", "Jawbreaker", "Acro Frag"]
    );
}

#[test]
fn category_match_is_exact() {
    let base = sample_catalog();
    assert!(available_tags(&base, &coral_model::CategoryFilter::parse("Soft")).is_empty());
    let mut state = ViewState::new();
    state.set_category("SOFT");
    assert!(visible_entries(&base, &state).is_empty());
}

#[test]
fn listing_results_preserve_display_order() {
    let base = sample_catalog();
    let mut view = CatalogView::new(&base);
    view.set_sort_order(SortOrder::PriceDesc);
    match view.listing() {
        Listing::Results(entries) => {
            assert_eq!(names(&entries), vec!["Jawbreaker", "Rainbow Zoa", "Acro Frag"]);
        }
        Listing::NoResults => panic!("expected results"),
    }
}
