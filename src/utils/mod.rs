//! Input validation and practice puzzle generation

mod errors;
pub mod puzzle;
mod validation;

pub use errors::UtilsError;
pub use puzzle::Puzzle;
pub use validation::validate_numbers;
