// Professional Cataloguing Module
// Handles call number normalization and LCC shelf ordering

pub mod call_number;
pub mod classification;

pub use call_number::normalize;
pub use classification::{
    derive_key, shelf_key, CallNumberKey, KeyField, SortKey, NO_SUBDIVISION,
};

pub fn init() {
    tracing::info!("Initializing Professional Cataloguing Module...");
}
