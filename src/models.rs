use serde::{Deserialize, Serialize};

/// Represents the supported clothing sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    ExtraSmall,
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl Size {
    /// Returns the size label as written in the stock file (e.g., "XS", "M")
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::ExtraSmall => "XS",
            Size::Small => "S",
            Size::Medium => "M",
            Size::Large => "L",
            Size::ExtraLarge => "XL",
        }
    }

    /// Parse a size label (e.g., "XS", "m") into a Size
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "XS" => Some(Size::ExtraSmall),
            "S" => Some(Size::Small),
            "M" => Some(Size::Medium),
            "L" => Some(Size::Large),
            "XL" => Some(Size::ExtraLarge),
            _ => None,
        }
    }

    /// Returns all supported sizes
    pub fn all() -> &'static [Size] {
        &[
            Size::ExtraSmall,
            Size::Small,
            Size::Medium,
            Size::Large,
            Size::ExtraLarge,
        ]
    }
}

/// The two quantity-update operations offered by the update form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    AddCopies,
    SellCopies,
}

impl Operation {
    /// Returns the operation label shown in the operation dropdown
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::AddCopies => "Add Copies",
            Operation::SellCopies => "Sell Copies",
        }
    }

    /// Parse an operation label into an Operation
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "add copies" | "add" => Some(Operation::AddCopies),
            "sell copies" | "sell" => Some(Operation::SellCopies),
            _ => None,
        }
    }
}

/// One inventory line of the stock file.
///
/// Fields are kept as the raw strings from the CSV; the field order here is
/// the column order of the file, so serializing writes the exact header
/// `name,quantity,price,size,availability`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub quantity: String,
    pub price: String,
    pub size: String,
    pub availability: String,
}

impl Item {
    /// Builds a new item; availability is derived from the quantity.
    pub fn new(name: &str, size: &str, price: f64, quantity: u32) -> Self {
        Item {
            name: name.to_string(),
            quantity: quantity.to_string(),
            price: price.to_string(),
            size: size.to_string(),
            availability: if quantity > 0 { "1" } else { "0" }.to_string(),
        }
    }

    /// Parse the quantity as u32, returning 0 if parsing fails
    pub fn quantity_u32(&self) -> u32 {
        self.quantity.trim().parse::<u32>().unwrap_or(0)
    }

    /// Parse the price as f64, returning 0.0 if parsing fails
    pub fn price_f64(&self) -> f64 {
        self.price.trim().parse::<f64>().unwrap_or(0.0)
    }

    /// Returns true if this item is marked available
    pub fn is_available(&self) -> bool {
        self.availability == "1" || self.availability.eq_ignore_ascii_case("true")
    }

    /// Sets the quantity and keeps availability in sync (available iff > 0).
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.to_string();
        self.availability = if quantity > 0 { "1" } else { "0" }.to_string();
    }

    /// Sets the price.
    pub fn set_price(&mut self, price: f64) {
        self.price = price.to_string();
    }

    /// Returns true if this item matches the given (name, size) key.
    /// Comparison trims whitespace and ignores ASCII case on both parts.
    pub fn matches_key(&self, name: &str, size: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name.trim())
            && self.size.trim().eq_ignore_ascii_case(size.trim())
    }
}
