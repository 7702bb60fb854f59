use thiserror::Error;

/// Problems with what the user typed at a prompt. Only numeric coercion is
/// checked; free-text fields are stored as entered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{field} must be an integer, got {value:?}")]
    InvalidNumber { field: String, value: String },
    #[error("input closed while waiting for {0}")]
    Closed(String),
}
