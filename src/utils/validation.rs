use crate::utils::error::{MenuError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_dish_name(field_name: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(MenuError::ValidationError {
            field: field_name.to_string(),
            reason: "Dish name cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

// Policy: zero is a valid price (placeholder dishes use it); negative and
// non-finite values are rejected.
pub fn validate_price(field_name: &str, price: f64) -> Result<()> {
    if !price.is_finite() {
        return Err(MenuError::ValidationError {
            field: field_name.to_string(),
            reason: "Price must be a finite number".to_string(),
        });
    }
    if price < 0.0 {
        return Err(MenuError::ValidationError {
            field: field_name.to_string(),
            reason: "Price cannot be negative".to_string(),
        });
    }
    Ok(())
}

/// Parses a price exactly as typed into a form field, then applies the price policy.
pub fn parse_price(field_name: &str, raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MenuError::ValidationError {
            field: field_name.to_string(),
            reason: "Price is required".to_string(),
        });
    }

    let price: f64 = trimmed.parse().map_err(|_| MenuError::ValidationError {
        field: field_name.to_string(),
        reason: format!("'{}' is not a valid number", trimmed),
    })?;

    validate_price(field_name, price)?;
    Ok(price)
}

pub fn validate_seed_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(MenuError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(MenuError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    match std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some("toml") => Ok(()),
        Some(extension) => Err(MenuError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: format!("Unsupported file extension: {}. Seed files must be .toml", extension),
        }),
        None => Err(MenuError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}
