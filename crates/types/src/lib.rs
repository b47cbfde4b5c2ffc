pub mod color;
pub mod currency;
pub mod error;
pub mod geometry;
pub mod quote;

pub use color::Color;
pub use currency::format_brl;
pub use error::QuoteError;
pub use geometry::{Rect, Size};
pub use quote::{ClientInfo, LineItem, QuoteDocument};
