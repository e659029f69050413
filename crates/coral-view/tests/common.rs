#![allow(dead_code)]

use coral_model::{CatalogEntry, Category, Price, StockStatus};

pub fn entry(id: &str, name: &str, category: &str, price: f64, tags: &[&str]) -> CatalogEntry {
    CatalogEntry {
        id: id.to_string(),
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        price: Price::new(price).expect("valid price"),
        category: Category::from(category),
        filter_tags: tags.iter().map(|t| (*t).to_string()).collect(),
        status: StockStatus::InStock,
        image: format!("https://cdn.example/{id}.jpg"),
        tag: None,
        description: None,
    }
}

/// Rainbow Zoa, Jawbreaker, Acro Frag in that order.
pub fn sample_catalog() -> Vec<CatalogEntry> {
    vec![
        entry("c1", "Rainbow Zoa", "soft", 80.0, &["zoa", "rare"]),
        entry("c2", "Jawbreaker", "lps", 150.0, &["torch"]),
        entry("c3", "Acro Frag", "sps", 40.0, &["zoa"]),
    ]
}

pub fn names(entries: &[&CatalogEntry]) -> Vec<String> {
    entries.iter().map(|e| e.name.clone()).collect()
}
