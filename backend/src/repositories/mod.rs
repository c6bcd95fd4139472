//! Database repositories
//!
//! Provides data access layer for database operations. Every function takes
//! a connection so callers decide the transaction scope.

pub mod category;
pub mod provider;
pub mod service;

pub use category::{CategoryRecord, CategoryRepository};
pub use provider::{CreateProvider, ProviderRecord, ProviderRepository, UpdateProvider};
pub use service::{CreateService, ServiceRecord, ServiceRepository};
