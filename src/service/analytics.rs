use dioxus_logger::tracing;

use crate::{
    model::AnalyticsEvent,
    store::{insert_one, DataStore},
};

pub static ANALYTICS: &str = "analytics";

/// Record `event`, logging and discarding any failure.
pub async fn record_event<S: DataStore>(store: &S, event: &AnalyticsEvent) {
    if let Err(err) = insert_one(store, ANALYTICS, event).await {
        tracing::warn!("Analytics skipped: {}", err);
    }
}
