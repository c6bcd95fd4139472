//! Provider Registry Shared Library
//!
//! Wire types, validation rules and the pricing rule shared by the backend
//! and its integration tests.

pub mod errors;
pub mod pricing;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use pricing::{derived_price, PriceTier};
pub use types::*;
