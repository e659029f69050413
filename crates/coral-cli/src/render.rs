//! Terminal rendering for listings, tags and the detail view.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use coral_model::CatalogEntry;
use coral_view::Listing;

use crate::commands::{CategoryCount, ListResult};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn render_listing(result: &ListResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Category: {}  Sort: {}\n",
        category_title(result.category.as_str()),
        result.sort.label()
    ));
    if !result.available_tags.is_empty() {
        let tags: Vec<String> = result
            .available_tags
            .iter()
            .map(|tag| {
                if result.selected_tags.contains(tag) {
                    format!("[{tag}]")
                } else {
                    tag.clone()
                }
            })
            .collect();
        out.push_str(&format!("Filters: {}\n", tags.join(" ")));
    }

    let entries = match result.listing() {
        Listing::Results(entries) => entries,
        Listing::NoResults => {
            out.push_str(Listing::EMPTY_MESSAGE);
            out.push('\n');
            return out;
        }
    };

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Category"),
        header_cell("Price"),
        header_cell("Tags"),
        header_cell("Badge"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for entry in &entries {
        table.add_row(vec![
            Cell::new(&entry.name).add_attribute(Attribute::Bold),
            Cell::new(entry.category.label()),
            Cell::new(entry.price),
            Cell::new(entry.filter_tags.join(", ")),
            match entry.badge() {
                Some(badge) => Cell::new(badge).fg(Color::Magenta),
                None => dim_cell("-"),
            },
        ]);
    }
    out.push_str(&table.to_string());
    out.push('\n');
    out.push_str(&format!(
        "{} of {} corals\n",
        entries.len(),
        result.base_count
    ));
    out
}

pub fn render_listing_json(result: &ListResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&result.entries)
}

pub fn render_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No filter tags for this category.\n".to_string();
    }
    let mut out = tags.join("\n");
    out.push('\n');
    out
}

pub fn render_detail(entry: &CatalogEntry) -> String {
    let mut out = format!("{}\n", entry.name);
    out.push_str(&format!(
        "{} | {} | {}\n",
        entry.price,
        entry.category.label(),
        entry.status.label()
    ));
    if !entry.filter_tags.is_empty() {
        out.push_str(&format!("Tags: {}\n", entry.filter_tags.join(", ")));
    }
    if let Some(badge) = entry.badge() {
        out.push_str(&format!("Badge: {badge}\n"));
    }
    out.push_str(&format!("Image: {}\n", entry.image));
    if let Some(description) = &entry.description {
        out.push('\n');
        out.push_str(description);
        out.push('\n');
    }
    out
}

pub fn render_categories(counts: &[CategoryCount]) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tab"),
        header_cell("Code"),
        header_cell("In stock"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for count in counts {
        table.add_row(vec![
            Cell::new(&count.label),
            Cell::new(count.category.as_str()),
            Cell::new(count.entries),
        ]);
    }
    format!("{table}\n")
}

fn category_title(code: &str) -> String {
    if code == coral_model::ALL_CATEGORIES {
        "Shop All".to_string()
    } else {
        code.to_uppercase()
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
