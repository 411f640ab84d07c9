use thiserror::Error;

use crate::model::{Price, ProductId};

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid input: {field} must be non-negative, got {value}")]
    InvalidInput { field: &'static str, value: Price },

    #[error("invalid product url '{0}'")]
    InvalidUrl(String),

    #[error("platform is required")]
    MissingPlatform,

    #[error("unknown platform '{0}'")]
    UnknownPlatform(String),

    #[error("duplicate product id {0}")]
    DuplicateProduct(ProductId),

    #[error("tracking failed: {0}")]
    Tracking(String),

    #[error("date parse error: {0}")]
    Date(#[from] chrono::ParseError),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
