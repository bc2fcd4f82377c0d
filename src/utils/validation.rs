use crate::utils::error::{HelperError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(argument: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(HelperError::InvalidArgument {
            argument: argument.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Converts a signed size into a `usize`, rejecting zero and negatives.
pub fn validate_signed_size(argument: &str, value: i64) -> Result<usize> {
    if value <= 0 {
        return Err(HelperError::InvalidArgument {
            argument: argument.to_string(),
            value: value.to_string(),
            reason: "Value must be greater than zero".to_string(),
        });
    }

    usize::try_from(value).map_err(|_| HelperError::InvalidArgument {
        argument: argument.to_string(),
        value: value.to_string(),
        reason: "Value does not fit in usize".to_string(),
    })
}
