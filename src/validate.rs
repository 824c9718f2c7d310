//! Field validation for raw form input.
//!
//! Pure functions, one per field. Each returns the parsed value or a
//! human-readable reason; callers must check the result before touching the
//! stock file.

use crate::models::{Operation, Size};

/// Validates the item name: non-empty after trimming.
pub fn item_name(raw: &str) -> Result<String, String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("Item name cannot be empty.".to_string());
    }
    Ok(name.to_string())
}

/// Validates the size on the add form: must be one of the catalog sizes.
pub fn catalog_size(raw: &str) -> Result<Size, String> {
    if raw.trim().is_empty() {
        return Err("Size must be selected.".to_string());
    }
    Size::parse(raw).ok_or_else(|| {
        let labels: Vec<&str> = Size::all().iter().map(|s| s.as_str()).collect();
        format!("Size must be one of {}.", labels.join(", "))
    })
}

/// Validates the size on the update forms: only needs to be present, since
/// older stock files may carry sizes outside the current catalog.
pub fn selected_size(raw: &str) -> Result<String, String> {
    let size = raw.trim();
    if size.is_empty() {
        return Err("No size selected.".to_string());
    }
    Ok(size.to_string())
}

/// Returns true if the string is only ASCII digits with at most one dot.
fn is_plain_decimal(s: &str) -> bool {
    !s.is_empty()
        && s.chars().filter(|c| *c == '.').count() <= 1
        && s.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Validates a price field: a plain positive decimal (no sign, no exponent).
pub fn positive_price(raw: &str) -> Result<f64, String> {
    let price = raw.trim();
    if !is_plain_decimal(price) {
        log::warn!("Rejected price input '{}'", raw);
        return Err("Price must be a positive number.".to_string());
    }
    match price.parse::<f64>() {
        Ok(value) if value > 0.0 => Ok(value),
        _ => Err("Price must be a positive number.".to_string()),
    }
}

/// Validates a quantity field: a plain positive integer.
pub fn positive_quantity(raw: &str) -> Result<u32, String> {
    let quantity = raw.trim();
    if quantity.is_empty() || !quantity.chars().all(|c| c.is_ascii_digit()) {
        log::warn!("Rejected quantity input '{}'", raw);
        return Err("Quantity must be a positive integer.".to_string());
    }
    match quantity.parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err("Quantity must be a positive integer.".to_string()),
    }
}

/// Validates the operation dropdown: one of "Add Copies" / "Sell Copies".
pub fn operation(raw: &str) -> Result<Operation, String> {
    Operation::parse(raw).ok_or_else(|| "Invalid operation selected.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_name_trims() {
        assert_eq!(item_name("  Red Shirt "), Ok("Red Shirt".to_string()));
        assert!(item_name("   ").is_err());
        assert!(item_name("").is_err());
    }

    #[test]
    fn test_catalog_size_accepts_catalog_only() {
        assert_eq!(catalog_size("M"), Ok(Size::Medium));
        assert_eq!(catalog_size("xl"), Ok(Size::ExtraLarge));
        assert!(catalog_size("").is_err());
        assert!(catalog_size("38").is_err());
    }

    #[test]
    fn test_selected_size_only_requires_presence() {
        assert_eq!(selected_size("38"), Ok("38".to_string()));
        assert!(selected_size(" ").is_err());
    }

    #[test]
    fn test_positive_price_plain_decimals_only() {
        assert_eq!(positive_price("20.5"), Ok(20.5));
        assert_eq!(positive_price(" 3 "), Ok(3.0));
        assert!(positive_price("0").is_err());
        assert!(positive_price("-5").is_err());
        assert!(positive_price("1.2.3").is_err());
        assert!(positive_price("1e3").is_err());
        assert!(positive_price("abc").is_err());
        assert!(positive_price("").is_err());
    }

    #[test]
    fn test_positive_quantity_integers_only() {
        assert_eq!(positive_quantity("7"), Ok(7));
        assert!(positive_quantity("0").is_err());
        assert!(positive_quantity("3.5").is_err());
        assert!(positive_quantity("-1").is_err());
        assert!(positive_quantity("").is_err());
    }

    #[test]
    fn test_operation_literals() {
        assert_eq!(operation("Add Copies"), Ok(Operation::AddCopies));
        assert_eq!(operation("Sell Copies"), Ok(Operation::SellCopies));
        assert!(operation("Restock").is_err());
    }
}
