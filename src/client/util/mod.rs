pub mod analytics;
pub mod browser;
pub mod notify;
pub mod time;
