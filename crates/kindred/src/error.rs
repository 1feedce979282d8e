#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid layout option `{name}`: {value} (expected a finite, non-negative number)")]
    InvalidOption { name: &'static str, value: f64 },

    #[error("invalid person records: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
