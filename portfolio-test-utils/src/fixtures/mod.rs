//! Fixtures for mock store rows and endpoints.
//!
//! - `factory` - JSON rows shaped like the store's collections
//! - `endpoint` - mockito endpoints for selects and inserts

pub mod endpoint;
pub mod factory;
