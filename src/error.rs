//! Error types for stock_control

use std::fmt;

/// Unified error type for stock operations
#[derive(Debug)]
pub enum StockError {
    /// User input failed a field check (bad shape or range)
    Validation(String),
    /// No item with the given name and size exists in the stock file
    NotFound { name: String, size: String },
    /// A sell asked for more copies than are in stock
    InsufficientStock {
        name: String,
        size: String,
        available: u32,
        requested: u32,
    },
    /// The entered name matches an existing item; the caller confirmed it is
    /// the same item, so the update form should be used instead of adding
    UseUpdateInstead { name: String, size: String },
    /// Stock file missing or unreadable/unwritable
    FileAccess(std::io::Error),
    /// A row of the stock file could not be decoded
    Parse(csv::Error),
}

impl fmt::Display for StockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockError::Validation(msg) => write!(f, "Validation error: {}", msg),
            StockError::NotFound { name, size } => {
                write!(f, "Item not found: {} ({})", name, size)
            }
            StockError::InsufficientStock {
                name,
                size,
                available,
                requested,
            } => write!(
                f,
                "Not enough copies of {} ({}): {} requested, {} in stock",
                name, size, requested, available
            ),
            StockError::UseUpdateInstead { name, size } => write!(
                f,
                "{} ({}) already exists; use the update operations to modify it",
                name, size
            ),
            StockError::FileAccess(e) => write!(f, "Stock file error: {}", e),
            StockError::Parse(e) => write!(f, "Stock file parse error: {}", e),
        }
    }
}

impl std::error::Error for StockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StockError::FileAccess(e) => Some(e),
            StockError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StockError {
    fn from(err: std::io::Error) -> Self {
        StockError::FileAccess(err)
    }
}

impl From<csv::Error> for StockError {
    fn from(err: csv::Error) -> Self {
        StockError::Parse(err)
    }
}

/// Result alias for stock operations
pub type StockResult<T> = Result<T, StockError>;
