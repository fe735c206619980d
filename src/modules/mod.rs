pub mod cataloguing_pro;
pub mod export;
pub mod import;
