use dioxus::document::{Link, Meta, Stylesheet, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{components::Portfolio, SharedStore},
    state::{Notifications, ViewState},
    store::RestStore,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const FONTS_URL: &str =
    "https://fonts.googleapis.com/css2?family=Poppins:wght@300;400;500;600;700&display=swap";

#[component]
pub fn App() -> Element {
    use_context_provider::<SharedStore>(|| match RestStore::from_env() {
        Ok(store) => Some(store),
        Err(err) => {
            tracing::error!("Data store is unavailable, content will not load: {}", err);
            None
        }
    });
    use_context_provider(|| Signal::new(ViewState::default()));
    use_context_provider(|| Signal::new(Notifications::default()));

    rsx!(
        Title { "Geo Cherian Mathew | AI & IoT Developer" }
        Meta {
            name: "description",
            content: "Bespoke digital experiences crafted with precision and passion."
        }
        Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        Link { rel: "preconnect", href: "https://fonts.gstatic.com", crossorigin: "anonymous" }
        Link { rel: "stylesheet", href: FONTS_URL }
        Stylesheet { href: MAIN_CSS }
        Portfolio {}
    )
}
