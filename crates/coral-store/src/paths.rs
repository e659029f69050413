//! Catalog file path resolution.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the catalog export location.
pub const CATALOG_ENV_VAR: &str = "CORAL_CATALOG";

/// File name used when neither a flag nor the environment names a catalog.
pub const DEFAULT_CATALOG_FILE: &str = "catalog.json";

/// Resolve the catalog export path.
///
/// Resolution order:
/// 1. explicit path (e.g. a `--catalog` flag)
/// 2. `CORAL_CATALOG` environment variable
/// 3. `catalog.json` in the working directory
pub fn catalog_path(explicit: Option<&Path>) -> PathBuf {
    resolve_catalog_path(explicit, std::env::var_os(CATALOG_ENV_VAR).map(PathBuf::from))
}

fn resolve_catalog_path(explicit: Option<&Path>, from_env: Option<PathBuf>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .or(from_env.filter(|path| !path.as_os_str().is_empty()))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILE))
}
