pub mod entry;
pub mod enums;
pub mod error;

pub use entry::{CatalogEntry, Price};
pub use enums::{ALL_CATEGORIES, Category, CategoryFilter, SortOrder, StockStatus};
pub use error::{ModelError, Result};
