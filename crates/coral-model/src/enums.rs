//! Type-safe enumerations for catalog metadata.
//!
//! The content store represents all of these as plain strings. The enums
//! keep the exact wire codes available through `as_str()` so that filtering
//! can compare against the stored value without case folding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Sentinel accepted by [`CategoryFilter::parse`] for "every category".
pub const ALL_CATEGORIES: &str = "All";

/// Top-level coral classification.
///
/// The content schema offers four codes. Records written by other tools may
/// carry anything else; those are kept verbatim in [`Category::Other`] so they
/// still round-trip and never match a known tab.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Small-polyp stony corals.
    Sps,
    /// Large-polyp stony corals.
    Lps,
    /// Soft corals (zoanthids, mushrooms, leathers).
    Soft,
    /// Anything that doesn't fit the three main tabs.
    Misc,
    /// A code outside the schema's list.
    Other(String),
}

impl Category {
    /// The four codes defined by the content schema.
    pub const ALL_CODES: [&'static str; 4] = ["sps", "lps", "soft", "misc"];

    /// Returns the exact code as stored in the content store.
    pub fn as_str(&self) -> &str {
        match self {
            Category::Sps => "sps",
            Category::Lps => "lps",
            Category::Soft => "soft",
            Category::Misc => "misc",
            Category::Other(code) => code,
        }
    }

    /// Human-readable title used by the content schema.
    pub fn label(&self) -> &str {
        match self {
            Category::Sps => "SPS",
            Category::Lps => "LPS",
            Category::Soft => "Soft Coral",
            Category::Misc => "Misc",
            Category::Other(code) => code,
        }
    }

    /// Categories that get their own tab on the collection page.
    pub fn shop_tabs() -> [Category; 3] {
        [Category::Sps, Category::Lps, Category::Soft]
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl From<String> for Category {
    fn from(code: String) -> Self {
        match code.as_str() {
            "sps" => Category::Sps,
            "lps" => Category::Lps,
            "soft" => Category::Soft,
            "misc" => Category::Misc,
            _ => Category::Other(code),
        }
    }
}

impl From<&str> for Category {
    fn from(code: &str) -> Self {
        Category::from(code.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active category selection on the collection page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Only entries whose category code equals this string exactly.
    Only(String),
}

impl CategoryFilter {
    /// Accepts any string. `"All"` is the sentinel; everything else becomes a
    /// concrete code, including codes no entry carries.
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// Case-sensitive exact match against the category code.
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(code) => category.as_str() == code,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(code) => code,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(String::from(category))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inventory status of a catalog entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    #[default]
    InStock,
    SoldOut,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in-stock",
            StockStatus::SoldOut => "sold-out",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::SoldOut => "Sold Out",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in-stock" => Ok(StockStatus::InStock),
            "sold-out" => Ok(StockStatus::SoldOut),
            other => Err(ModelError::UnknownStatus(other.to_string())),
        }
    }
}

/// Display ordering for the collection grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Upstream order, no reordering.
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 5] = [
        SortOrder::Featured,
        SortOrder::PriceAsc,
        SortOrder::PriceDesc,
        SortOrder::NameAsc,
        SortOrder::NameDesc,
    ];

    /// Identifier used by the sort picker.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Featured => "featured",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
            SortOrder::NameAsc => "name-asc",
            SortOrder::NameDesc => "name-desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Featured => "Featured",
            SortOrder::PriceAsc => "Price: Low to High",
            SortOrder::PriceDesc => "Price: High to Low",
            SortOrder::NameAsc => "Alphabetical: A-Z",
            SortOrder::NameDesc => "Alphabetical: Z-A",
        }
    }

    /// Parse an identifier, treating anything unrecognized as `Featured`.
    pub fn from_id_lenient(id: &str) -> Self {
        id.parse().unwrap_or_default()
    }

    pub fn reorders(&self) -> bool {
        !matches!(self, SortOrder::Featured)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| ModelError::UnknownSortOrder(s.to_string()))
    }
}
