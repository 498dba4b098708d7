use crate::utils::error::{PricingError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_currency_code(field_name: &str, code: &str) -> Result<()> {
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(PricingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: code.to_string(),
            reason: "Currency code must be three upper-case ASCII letters".to_string(),
        });
    }
    Ok(())
}

pub fn validate_supported_currency(field_name: &str, code: &str, supported: &[String]) -> Result<()> {
    validate_currency_code(field_name, code)?;
    if !supported.iter().any(|c| c == code) {
        return Err(PricingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: code.to_string(),
            reason: format!(
                "Currency is not in the supported set: {}",
                supported.join(", ")
            ),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PricingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_min_value(field_name: &str, value: f64, min_value: f64) -> Result<()> {
    if !value.is_finite() || value < min_value {
        return Err(PricingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be a finite number of at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_ordered<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    lower: T,
    upper: T,
) -> Result<()> {
    if lower > upper {
        return Err(PricingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{} > {}", lower, upper),
            reason: "Lower bound must not exceed upper bound".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique<'a, I>(field_name: &str, values: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(PricingError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Duplicate entry".to_string(),
            });
        }
    }
    Ok(())
}
