use dioxus::prelude::*;

use crate::state::{NotificationKind, Notifications};

/// Bottom-right stack of transient notifications. Clicking a toast dismisses it early.
#[component]
pub fn Toaster() -> Element {
    let mut notifications = use_context::<Signal<Notifications>>();
    let active = notifications.read().active().to_vec();

    rsx!(
        div { class: "toaster",
            {active.into_iter().map(|notification| {
                let (icon, class) = match notification.kind {
                    NotificationKind::Success => ("✓", "toast toast-success"),
                    NotificationKind::Failure => ("✕", "toast toast-failure"),
                };
                let id = notification.id;

                rsx!(
                    div {
                        key: "{id}",
                        class,
                        role: "status",
                        onclick: move |_| notifications.write().dismiss(id),
                        span { class: "toast-icon", "{icon}" }
                        span { class: "toast-text", "{notification.text}" }
                    }
                )
            })}
        }
    )
}
