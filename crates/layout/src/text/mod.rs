mod wrapper;

pub use wrapper::{LineWrapper, SAFETY_MARGIN, WrappedLines};
