//! Authentication module
//!
//! Provides the operator login check and the signed, short-lived token
//! that gates mutating endpoints.

mod credentials;
mod jwt;
mod middleware;

pub use credentials::OperatorCredentials;
pub use jwt::{Claims, TokenService};
pub use middleware::{require_token, Operator, TokenQuery};
