//! Persistence for items.
//!
//! `StoreContext::save` commits a `UnitOfWork` through an `ItemStore` and then
//! publishes the domain events its entities raised.

pub mod context;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod repository;

pub use context::{StoreContext, UnitOfWork};
pub use error::{Result, StoreError};
pub use memory::InMemoryItemStore;
pub use postgres::PostgresItemStore;
pub use repository::ItemStore;
