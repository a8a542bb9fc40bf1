use crate::utils::error::{MenuError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MenuError::ValidationError {
            field: field_name.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Parses user-entered price text. Rejects rather than coercing to zero
/// when the text is not a number; negative prices are rejected as well.
pub fn parse_price(field_name: &str, value: &str) -> Result<f64> {
    validate_non_empty_string(field_name, value)?;

    let price: f64 = value.trim().parse().map_err(|_| MenuError::ValidationError {
        field: field_name.to_string(),
        reason: format!("Not a number: {}", value),
    })?;

    if !price.is_finite() || price < 0.0 {
        return Err(MenuError::ValidationError {
            field: field_name.to_string(),
            reason: "Price must be a non-negative number".to_string(),
        });
    }

    Ok(price)
}
