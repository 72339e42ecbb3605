use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if no numbers are given or any of them is zero.
pub fn validate_numbers(numbers: &[u64]) -> Result<(), UtilsError> {
    debug!("Validating numbers: {:?}", numbers);

    if numbers.is_empty() {
        warn!("No numbers supplied");
        return Err(UtilsError::EmptyNumbers);
    }

    if let Some(&zero) = numbers.iter().find(|&&n| n == 0) {
        warn!("Numbers contain a non-positive value: {:?}", numbers);
        return Err(UtilsError::NonPositiveNumber(zero));
    }

    debug!("Numbers validation successful");
    Ok(())
}
