use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("price must be a finite, non-negative number (got {0})")]
    InvalidPrice(f64),
    #[error("entry {id:?} is missing required field `{field}`")]
    MissingField { id: String, field: &'static str },
    #[error("unknown sort order: {0}")]
    UnknownSortOrder(String),
    #[error("unknown stock status: {0}")]
    UnknownStatus(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
