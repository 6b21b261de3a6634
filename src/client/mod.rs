pub mod app;
pub mod components;
pub mod util;

pub use app::App;

use crate::store::RestStore;

/// Store handle provided to the component tree. `None` when no store is configured, in which
/// case every read and write takes its normal failure path.
pub type SharedStore = Option<RestStore>;
