//! Business logic services
//!
//! Services encapsulate business rules and own the transaction scope:
//! every mutation runs in a single transaction that commits on success and
//! rolls back when the transaction is dropped on an error path.

pub mod auth;
pub mod catalog;
pub mod category;
pub mod provider;

pub use auth::AuthService;
pub use catalog::ServiceCatalog;
pub use category::CategoryService;
pub use provider::ProviderService;
