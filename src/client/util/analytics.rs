use dioxus::core::spawn_forever;

use crate::{
    client::SharedStore,
    model::{AnalyticsEvent, LinkKind},
    service::analytics::record_event,
};

/// Record `event` on a detached task that outlives the component that fired it.
/// Failures are logged by [`record_event`] and never reach the UI.
pub fn track(store: SharedStore, event: AnalyticsEvent) {
    spawn_forever(async move {
        record_event(&store, &event).await;
    });
}

pub fn track_project_click(store: SharedStore, title: String, link: LinkKind) {
    track(store, AnalyticsEvent::project_view(title, link));
}
