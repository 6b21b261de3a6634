use dioxus::prelude::*;

use crate::{
    client::util::time::sleep,
    state::{NotificationKind, Notifications},
};

/// Show a toast and remove it once its lifetime has elapsed.
///
/// Must be awaited from a task owned by the component tree, e.g. one started with `spawn`.
pub async fn show_toast(
    mut notifications: Signal<Notifications>,
    kind: NotificationKind,
    text: &str,
) {
    let id = notifications.write().push(kind, text);

    sleep(kind.lifetime()).await;

    notifications.write().dismiss(id);
}
