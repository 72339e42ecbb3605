use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("At least one number is required")]
    EmptyNumbers,
    #[error("Numbers must be positive integers: {0}")]
    NonPositiveNumber(u64),
}
