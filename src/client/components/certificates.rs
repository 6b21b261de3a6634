use dioxus::prelude::*;

use crate::{
    client::components::{article_class, empty_state::EmptyIcon, CategoryFilterControls, EmptyState},
    model::Certificate,
    state::{FilterKind, Section, Tab, ViewState},
};

#[component]
pub fn Certificates(certificates: Vec<Certificate>) -> Element {
    let mut view = use_context::<Signal<ViewState>>();
    let (class, visible) = {
        let state = view.read();
        let visible: Vec<Certificate> = state
            .certificates
            .apply(&certificates)
            .into_iter()
            .cloned()
            .collect();
        (article_class(&state, Tab::Certificates, "certificates"), visible)
    };

    rsx!(
        article { class, "data-page": "certificates",
            header {
                h2 { class: "h2 article-title", "Certificates" }
            }
            CategoryFilterControls { kind: FilterKind::Certificates }
            ul { class: "project-list",
                if let Some(message) = Section::Certificates.placeholder(visible.len()) {
                    EmptyState { icon: EmptyIcon::Shield, message }
                }
                {visible.into_iter().map(|certificate| {
                    let image = certificate.image_url.clone().unwrap_or_default();
                    let preview = image.clone();
                    let subtitle = certificate.subtitle().map(str::to_string);
                    rsx!(
                        li {
                            key: "{certificate.id}",
                            class: "project-item active",
                            onclick: move |_| view.write().open_image(&preview),
                            figure { class: "project-img clickable",
                                img { src: "{image}", alt: "{certificate.title}", loading: "lazy" }
                            }
                            h3 { class: "project-title", "{certificate.title}" }
                            if let Some(subtitle) = subtitle {
                                p { class: "project-category", "{subtitle}" }
                            }
                        }
                    )
                })}
            }
        }
    )
}
