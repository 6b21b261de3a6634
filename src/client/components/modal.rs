use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

use crate::state::ViewState;

/// Full-size preview of a certificate or gallery image.
#[component]
pub fn Lightbox() -> Element {
    let mut view = use_context::<Signal<ViewState>>();
    let image = view.read().lightbox().map(str::to_string);

    rsx!(
        if let Some(image) = image {
            div {
                class: "certificate-modal-container active",
                onclick: move |_| view.write().close_image(),
                div {
                    class: "certificate-modal",
                    onclick: |evt| evt.stop_propagation(),
                    button {
                        class: "modal-close-btn",
                        onclick: move |_| view.write().close_image(),
                        Icon { width: 30, height: 30, icon: FaXmark }
                    }
                    img { src: "{image}", alt: "Certificate preview" }
                }
            }
        }
    )
}

/// Detail dialog of an About-tab highlight.
#[component]
pub fn HighlightModal() -> Element {
    let mut view = use_context::<Signal<ViewState>>();
    let highlight = view.read().highlight();

    rsx!(
        if let Some(highlight) = highlight {
            div { class: "modal-container active",
                div {
                    class: "overlay",
                    onclick: move |_| view.write().close_highlight(),
                }
                section { class: "testimonials-modal",
                    button {
                        class: "modal-close-btn",
                        onclick: move |_| view.write().close_highlight(),
                        Icon { width: 20, height: 20, icon: FaXmark }
                    }
                    div { class: "modal-img-wrapper",
                        figure { class: "modal-avatar-box",
                            img { src: highlight.image, alt: highlight.title, width: "80" }
                        }
                        img { src: "/assets/images/icon-quote.svg", alt: "quote" }
                    }
                    div { class: "modal-content",
                        h4 { class: "h3 modal-title", "{highlight.modal_title}" }
                        time { "{highlight.modal_date}" }
                        div { class: "modal-text",
                            p { "{highlight.modal_text}" }
                        }
                    }
                }
            }
        }
    )
}
