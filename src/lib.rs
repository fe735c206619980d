pub mod api;
pub mod api_docs;
pub mod domain;
pub mod infrastructure;
pub mod modules;
pub mod services;

pub use infrastructure::config;
pub use infrastructure::server;
pub use modules::cataloguing_pro::{
    derive_key, normalize, shelf_key, CallNumberKey, KeyField, SortKey,
};
pub use modules::{export, import};
