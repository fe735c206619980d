//! Services Layer
//!
//! Shelving logic shared by the CLI and the HTTP handlers.

pub mod shelf_service;

// Re-export for convenience
pub use shelf_service::{shelve, sort_csv_file, sort_shelf_list, ShelfEntry, SortSummary};
