use crate::utils::error::{Result, ShopError};
use std::collections::HashSet;
use std::hash::Hash;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ShopError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ShopError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Storage keys become file names, so separators are rejected.
pub fn validate_storage_key(field_name: &str, key: &str) -> Result<()> {
    validate_non_empty_string(field_name, key)?;

    if key.contains(['/', '\\', '\0']) || key == "." || key == ".." {
        return Err(ShopError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: key.to_string(),
            reason: "Key must not contain path separators".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ShopError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Image references are opaque, but anything that claims to be a URL has to
/// parse as an http(s) one.
pub fn validate_image_reference(field_name: &str, reference: &str) -> Result<()> {
    validate_non_empty_string(field_name, reference)?;

    if !reference.contains("://") {
        return Ok(());
    }

    match Url::parse(reference) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ShopError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: reference.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ShopError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: reference.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_unique<T, I>(field_name: &str, values: I) -> Result<()>
where
    T: Eq + Hash + std::fmt::Display,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    for value in values {
        let rendered = value.to_string();
        if !seen.insert(value) {
            return Err(ShopError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: rendered,
                reason: "Duplicate value".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_image_reference() {
        assert!(validate_image_reference("image", "https://example.com/car.jpg").is_ok());
        assert!(validate_image_reference("image", "cars/tesla.png").is_ok());
        assert!(validate_image_reference("image", "ftp://example.com/car.jpg").is_err());
        assert!(validate_image_reference("image", "   ").is_err());
    }

    #[test]
    fn test_validate_storage_key() {
        assert!(validate_storage_key("storage.cart_key", "cart").is_ok());
        assert!(validate_storage_key("storage.cart_key", "../cart").is_err());
        assert!(validate_storage_key("storage.cart_key", "").is_err());
    }

    #[test]
    fn test_validate_unique() {
        assert!(validate_unique("items.id", [1, 2, 3]).is_ok());
        let err = validate_unique("items.id", [1, 2, 1]).unwrap_err();
        assert!(err.to_string().contains("'1'"));
    }
}
