//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no Axum, no CSV readers).
//! Only the shelf list model and domain error types.

pub mod errors;
pub mod shelf_list;

pub use errors::DomainError;
pub use shelf_list::ShelfList;
