//! Normalization of content-store record shapes into [`CatalogEntry`].
//!
//! Query projections and raw document exports differ in a few fields:
//! `_id` vs `id`, `slug` as a string or `{ "current": ... }`, and `image`
//! as a URL or a `{ "asset": { "url": ... } }` reference.

use coral_model::{CatalogEntry, Category, ModelError, Price, StockStatus};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecord {
    id: Option<String>,
    #[serde(rename = "_id")]
    document_id: Option<String>,
    name: Option<String>,
    slug: Option<RawSlug>,
    price: Option<f64>,
    category: Option<String>,
    filter_tags: Option<Vec<String>>,
    status: Option<String>,
    image: Option<RawImage>,
    tag: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSlug {
    Plain(String),
    Document { current: String },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawImage {
    Url(String),
    Asset { asset: RawAsset },
}

#[derive(Debug, Deserialize)]
struct RawAsset {
    url: String,
}

/// Why a record was left out of the catalog.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("malformed record: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] ModelError),
}

/// Convert one JSON record. `index` names the record when it has no id.
pub fn parse_record(value: Value, index: usize) -> Result<CatalogEntry, RecordError> {
    let raw: RawRecord = serde_json::from_value(value)?;
    // Projections rename `_id` to `id`; some exports carry both.
    let id = raw
        .id
        .filter(|id| !id.is_empty())
        .or(raw.document_id)
        .unwrap_or_default();
    let label = if id.is_empty() {
        format!("#{index}")
    } else {
        id.clone()
    };
    let missing = |field: &'static str| ModelError::MissingField {
        id: label.clone(),
        field,
    };

    if id.is_empty() {
        return Err(missing("id").into());
    }
    let price = Price::new(raw.price.ok_or_else(|| missing("price"))?)?;
    let category = raw
        .category
        .filter(|c| !c.is_empty())
        .map(Category::from)
        .ok_or_else(|| missing("category"))?;
    let status = match raw.status.as_deref() {
        None | Some("") => StockStatus::default(),
        Some(status) => status.parse()?,
    };
    let slug = match raw.slug {
        Some(RawSlug::Plain(slug) | RawSlug::Document { current: slug }) => slug,
        None => String::new(),
    };
    let image = match raw.image {
        Some(RawImage::Url(url) | RawImage::Asset { asset: RawAsset { url } }) => url,
        None => String::new(),
    };

    let entry = CatalogEntry {
        id,
        name: raw.name.unwrap_or_default(),
        slug,
        price,
        category,
        filter_tags: raw.filter_tags.unwrap_or_default(),
        status,
        image,
        tag: raw.tag,
        description: raw.description.filter(|d| !d.trim().is_empty()),
    };
    entry.validate()?;
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_projection_shape() {
        let entry = parse_record(
            json!({
                "id": "abc",
                "name": "Rainbow Zoa",
                "slug": "rainbow-zoa",
                "price": 80,
                "category": "soft",
                "filterTags": ["zoa", "rare"],
                "status": "in-stock",
                "image": "https://cdn.example/zoa.jpg",
                "tag": "RARE",
                "description": "Low light."
            }),
            0,
        )
        .unwrap();
        assert_eq!(entry.slug, "rainbow-zoa");
        assert_eq!(entry.filter_tags.len(), 2);
        assert_eq!(entry.badge(), Some("RARE"));
    }

    #[test]
    fn accepts_raw_document_shape() {
        let entry = parse_record(
            json!({
                "_id": "doc-1",
                "_type": "coral",
                "name": "Jawbreaker",
                "slug": { "_type": "slug", "current": "jawbreaker" },
                "price": 150,
                "category": "lps",
                "filterTags": null,
                "image": { "asset": { "url": "https://cdn.example/jaw.jpg" } }
            }),
            0,
        )
        .unwrap();
        assert_eq!(entry.id, "doc-1");
        assert_eq!(entry.slug, "jawbreaker");
        assert_eq!(entry.image, "https://cdn.example/jaw.jpg");
        assert!(entry.filter_tags.is_empty());
        assert_eq!(entry.status, StockStatus::InStock);
    }

    #[test]
    fn projected_id_wins_over_document_id() {
        let entry = parse_record(
            json!({
                "_id": "drafts.doc-1",
                "id": "doc-1",
                "name": "Jawbreaker",
                "slug": "jawbreaker",
                "price": 150,
                "category": "lps",
                "image": "https://cdn.example/jaw.jpg"
            }),
            0,
        )
        .unwrap();
        assert_eq!(entry.id, "doc-1");
    }

    #[test]
    fn missing_price_is_invalid() {
        let err = parse_record(
            json!({ "id": "p", "name": "n", "slug": "s", "category": "sps", "image": "i" }),
            3,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            RecordError::Invalid(ModelError::MissingField { field: "price", .. })
        ));
    }

    #[test]
    fn missing_id_uses_index_label() {
        let err = parse_record(json!({ "name": "n" }), 7).unwrap_err();
        assert_eq!(err.to_string(), "entry \"#7\" is missing required field `id`");
    }

    #[test]
    fn string_price_is_malformed() {
        let err = parse_record(
            json!({ "id": "p", "name": "n", "slug": "s", "price": "80", "category": "sps", "image": "i" }),
            0,
        )
        .unwrap_err();
        assert!(matches!(err, RecordError::Malformed(_)));
    }

    #[test]
    fn unknown_status_is_invalid() {
        let err = parse_record(
            json!({ "id": "p", "name": "n", "slug": "s", "price": 1, "category": "sps",
                    "image": "i", "status": "reserved" }),
            0,
        )
        .unwrap_err();
        assert!(matches!(err, RecordError::Invalid(ModelError::UnknownStatus(_))));
    }
}
