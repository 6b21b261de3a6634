use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPaperPlane;
use dioxus_free_icons::Icon;

use crate::{
    client::{components::article_class, util::notify::show_toast, SharedStore},
    service::contact::{submit_message, ContactForm, SubmitOutcome},
    state::{NotificationKind, Notifications, Tab, ViewState},
};

fn map_embed_url(location: &str) -> String {
    format!(
        "https://www.google.com/maps?q={}&output=embed",
        location.trim().replace(' ', "+")
    )
}

#[component]
pub fn Contact(location: Option<String>) -> Element {
    let view = use_context::<Signal<ViewState>>();
    let store = use_context::<SharedStore>();
    let notifications = use_context::<Signal<Notifications>>();
    let mut form = use_signal(ContactForm::default);

    let class = article_class(&view.read(), Tab::Contact, "contact");

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let store = store.clone();
        spawn(async move {
            let mut draft = form.read().clone();
            let outcome = submit_message(&store, &mut draft).await;

            let kind = match outcome {
                SubmitOutcome::Sent => {
                    form.set(draft);
                    NotificationKind::Success
                }
                SubmitOutcome::Failed => NotificationKind::Failure,
            };

            show_toast(notifications, kind, outcome.notice()).await;
        });
    };

    rsx!(
        article { class, "data-page": "contact",
            header {
                h2 { class: "h2 article-title", "Contact" }
            }
            if let Some(location) = location {
                section { class: "mapbox",
                    iframe { src: map_embed_url(&location), "loading": "lazy" }
                }
            }
            section { class: "contact-form",
                h3 { class: "h3 form-title", "Get In Touch" }
                form { class: "form", onsubmit: onsubmit,
                    div { class: "input-wrapper",
                        input {
                            r#type: "text",
                            name: "name",
                            class: "form-input",
                            placeholder: "Full name",
                            required: true,
                            value: "{form.read().name}",
                            oninput: move |evt| form.write().name = evt.value(),
                        }
                        input {
                            r#type: "email",
                            name: "email",
                            class: "form-input",
                            placeholder: "Email address",
                            required: true,
                            value: "{form.read().email}",
                            oninput: move |evt| form.write().email = evt.value(),
                        }
                    }
                    textarea {
                        name: "message",
                        class: "form-input",
                        placeholder: "Your Message",
                        required: true,
                        value: "{form.read().message}",
                        oninput: move |evt| form.write().message = evt.value(),
                    }
                    button { class: "form-btn", r#type: "submit",
                        Icon { width: 16, height: 16, icon: FaPaperPlane }
                        span { "Send Message" }
                    }
                }
            }
        }
    )
}
