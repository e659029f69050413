//! In-memory catalog loaded from a content-store export.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use coral_model::CatalogEntry;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{Result, StoreError};
use crate::record::parse_record;

/// A record that was dropped while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Zero-based position in the source document.
    pub index: usize,
    pub reason: String,
}

/// Every valid record of a catalog export, in document order.
///
/// The order of [`Catalog::entries`] is the "featured" order of the
/// collection page.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    by_slug: HashMap<String, usize>,
    skipped: Vec<SkippedRecord>,
    source: Option<PathBuf>,
}

impl Catalog {
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        let mut catalog = Self::default();
        for entry in entries {
            catalog.push(entry);
        }
        catalog
    }

    /// Parse an export held in memory.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::parse(json, None)
    }

    /// Read and parse an export file. Nothing is cached; each call re-reads.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            operation: "read",
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse(&json, Some(path))?;
        info!(
            path = %path.display(),
            entries = catalog.entries.len(),
            skipped = catalog.skipped.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    fn parse(json: &str, path: Option<&Path>) -> Result<Self> {
        let document: Value = serde_json::from_str(json).map_err(|source| StoreError::Parse {
            path: path.map(Path::to_path_buf),
            source,
        })?;
        let records = match document {
            Value::Array(records) => records,
            Value::Object(mut response) => match response.remove("result") {
                Some(Value::Array(records)) => records,
                Some(Value::Null) => Vec::new(),
                Some(other) => {
                    return Err(StoreError::InvalidShape {
                        reason: format!("`result` is {}, expected an array", kind(&other)),
                    });
                }
                None => {
                    return Err(StoreError::InvalidShape {
                        reason: "object without a `result` field".to_string(),
                    });
                }
            },
            other => {
                return Err(StoreError::InvalidShape {
                    reason: format!("top-level {}, expected an array or object", kind(&other)),
                });
            }
        };

        let mut catalog = Self {
            source: path.map(Path::to_path_buf),
            ..Self::default()
        };
        for (index, record) in records.into_iter().enumerate() {
            match parse_record(record, index) {
                Ok(entry) => catalog.push(entry),
                Err(error) => {
                    warn!(index, %error, "skipping catalog record");
                    catalog.skipped.push(SkippedRecord {
                        index,
                        reason: error.to_string(),
                    });
                }
            }
        }
        Ok(catalog)
    }

    fn push(&mut self, entry: CatalogEntry) {
        if self.by_slug.contains_key(&entry.slug) {
            warn!(slug = %entry.slug, id = %entry.id, "duplicate slug, keeping first for lookup");
        } else {
            self.by_slug.insert(entry.slug.clone(), self.entries.len());
        }
        self.entries.push(entry);
    }

    /// All valid records regardless of status.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// The collection listing: in-stock records only, document order kept.
    pub fn in_stock(&self) -> Vec<CatalogEntry> {
        let listing: Vec<CatalogEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.is_in_stock())
            .cloned()
            .collect();
        debug!(
            total = self.entries.len(),
            in_stock = listing.len(),
            "built collection listing"
        );
        listing
    }

    /// Detail-page lookup. Sold-out records are still found.
    pub fn find_by_slug(&self, slug: &str) -> Option<&CatalogEntry> {
        self.by_slug.get(slug).map(|&index| &self.entries[index])
    }

    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
