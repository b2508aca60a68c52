use thiserror::Error;

#[derive(Debug, Error)]
pub enum PickerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid mode: {0}. Expected: basic, advanced")]
    InvalidMode(String),

    #[error("Invalid date format pattern: {0}")]
    InvalidDateFormat(String),

    #[error("Invalid month: {0}. Expected YYYY-MM")]
    InvalidMonth(String),
}
