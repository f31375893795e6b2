pub mod error;
pub mod types;

#[cfg(feature = "amortization")]
pub mod amortization;

#[cfg(feature = "formatting")]
pub mod formatting;

pub use error::EmiError;
pub use types::*;

/// Standard result type for all emi operations
pub type EmiResult<T> = Result<T, EmiError>;
