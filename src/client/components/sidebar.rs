use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::{FaGithub, FaInstagram, FaLinkedin};
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCalendar, FaChevronDown, FaCode, FaEnvelope, FaLocationDot, FaMobileScreen,
};
use dioxus_free_icons::Icon;

use crate::{
    model::profile::{Profile, SocialNetwork, SOCIAL_LINKS},
    state::ViewState,
};

#[component]
pub fn Sidebar(profile: Profile) -> Element {
    let mut view = use_context::<Signal<ViewState>>();
    let (expanded, flipped) = {
        let state = view.read();
        (state.sidebar_expanded, state.avatar_flipped)
    };

    let sidebar_class = if expanded { "sidebar active" } else { "sidebar" };
    let toggle_label = if expanded { "Hide Contacts" } else { "Show Contacts" };
    let avatar = profile.avatar(flipped).to_string();

    rsx!(
        aside { class: sidebar_class,
            div { class: "sidebar-info",
                figure {
                    class: "avatar-box",
                    onclick: move |_| view.write().flip_avatar(),
                    img { src: "{avatar}", alt: "Profile", loading: "lazy" }
                }
                div { class: "info-content",
                    h1 { class: "name", title: "{profile.name}", "{profile.name}" }
                    p { class: "title", "{profile.role}" }
                }
                button {
                    class: "info_more-btn",
                    onclick: move |_| view.write().toggle_sidebar(),
                    span { "{toggle_label}" }
                    Icon { width: 16, height: 16, icon: FaChevronDown }
                }
            }
            div { class: "sidebar-info_more",
                div { class: "separator" }
                ul { class: "contacts-list",
                    li { class: "contact-item",
                        div { class: "icon-box",
                            Icon { width: 16, height: 16, icon: FaEnvelope }
                        }
                        div { class: "contact-info",
                            p { class: "contact-title", "Email" }
                            if let Some(email) = &profile.email {
                                a { href: "mailto:{email}", class: "contact-link", "{email}" }
                            }
                        }
                    }
                    li { class: "contact-item",
                        div { class: "icon-box",
                            Icon { width: 16, height: 16, icon: FaMobileScreen }
                        }
                        div { class: "contact-info",
                            p { class: "contact-title", "Phone" }
                            span { class: "contact-link", "Unavailable" }
                        }
                    }
                    li { class: "contact-item",
                        div { class: "icon-box",
                            Icon { width: 16, height: 16, icon: FaCalendar }
                        }
                        div { class: "contact-info",
                            p { class: "contact-title", "Birthday" }
                            time { "June 16, 2005" }
                        }
                    }
                    li { class: "contact-item",
                        div { class: "icon-box",
                            Icon { width: 16, height: 16, icon: FaLocationDot }
                        }
                        div { class: "contact-info",
                            p { class: "contact-title", "Location" }
                            if let Some(location) = &profile.location {
                                address { "{location}" }
                            }
                        }
                    }
                }
                div { class: "separator" }
                ul { class: "social-list",
                    {SOCIAL_LINKS.iter().map(|(network, url)| rsx!(
                        li { key: "{url}", class: "social-item",
                            a { href: *url, target: "_blank", class: "social-link",
                                SocialIcon { network: *network }
                            }
                        }
                    ))}
                }
            }
        }
    )
}

#[component]
fn SocialIcon(network: SocialNetwork) -> Element {
    match network {
        SocialNetwork::Github => rsx!(Icon { width: 18, height: 18, icon: FaGithub }),
        SocialNetwork::Linkedin => rsx!(Icon { width: 18, height: 18, icon: FaLinkedin }),
        SocialNetwork::Instagram => rsx!(Icon { width: 18, height: 18, icon: FaInstagram }),
        SocialNetwork::Leetcode => rsx!(Icon { width: 18, height: 18, icon: FaCode }),
    }
}
