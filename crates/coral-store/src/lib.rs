//! Read-only adapter over content-store catalog exports.
//!
//! The collection page consumes [`Catalog::in_stock`]; the detail page uses
//! [`Catalog::find_by_slug`]. Records failing the schema's required-field
//! rules are skipped and reported through [`Catalog::skipped`].

pub mod catalog;
pub mod error;
pub mod paths;
pub mod record;

pub use catalog::{Catalog, SkippedRecord};
pub use error::{Result, StoreError};
pub use paths::{CATALOG_ENV_VAR, DEFAULT_CATALOG_FILE, catalog_path};
pub use record::{RecordError, parse_record};
