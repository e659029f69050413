use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::enums::{Category, StockStatus};
use crate::error::{ModelError, Result};

/// A non-negative, finite price. Currency is not tracked at this layer.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(ModelError::InvalidPrice(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = ModelError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    /// Shortest exact form, no rounding: `$80`, `$80.5`, `$0.005`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// One sellable item as delivered by the content store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub price: Price,
    pub category: Category,
    /// Free-text refinement labels. Kept in producer order for the detail view.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub filter_tags: Vec<String>,
    #[serde(default)]
    pub status: StockStatus,
    pub image: String,
    /// Visual badge. Empty means no badge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Missing and `null` both mean "no tags".
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl CatalogEntry {
    /// Check the fields the content schema marks as required.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("name", self.name.as_str()),
            ("slug", self.slug.as_str()),
            ("image", self.image.as_str()),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ModelError::MissingField {
                    id: self.id.clone(),
                    field,
                });
            }
        }
        Price::new(self.price.value())?;
        Ok(())
    }

    pub fn badge(&self) -> Option<&str> {
        self.tag.as_deref().filter(|tag| !tag.trim().is_empty())
    }

    pub fn is_in_stock(&self) -> bool {
        self.status == StockStatus::InStock
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.filter_tags.iter().any(|t| t == tag)
    }

    /// True when at least one of `tags` is among this entry's filter tags.
    pub fn has_any_tag(&self, tags: &BTreeSet<String>) -> bool {
        self.filter_tags.iter().any(|t| tags.contains(t))
    }
}
