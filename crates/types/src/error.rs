use thiserror::Error;

/// Violations of the quote data model invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteError {
    #[error("Item quantity must be at least 1, got {0}.")]
    InvalidQuantity(u32),
    #[error("Unit price must be a finite, non-negative number, got {0}.")]
    InvalidUnitPrice(f64),
    #[error("Item numbers start at 1, got {0}.")]
    InvalidItemNumber(u32),
    #[error("No item at position {0}.")]
    NoSuchItem(usize),
}
