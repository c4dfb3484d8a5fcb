//! Core conversion logic and application plumbing

pub mod config;
pub mod convert;
pub mod log;
pub mod rates;
pub mod session;

// Re-export main types for cleaner imports
pub use convert::{Conversion, ConversionError, ErrorKind, convert, swap};
pub use rates::{BASE_CURRENCY, RateTable};
pub use session::{Outcome, Session};
