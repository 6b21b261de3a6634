use dioxus::prelude::*;

use crate::{
    client::components::article_class,
    model::{Profile, HIGHLIGHTS},
    state::{Tab, ViewState},
};

struct Service {
    icon: &'static str,
    alt: &'static str,
    title: &'static str,
    text: &'static str,
}

static SERVICES: [Service; 4] = [
    Service {
        icon: "/assets/images/icon-design.svg",
        alt: "AI Integration icon",
        title: "AI Integration",
        text: "Building intelligent systems using custom AI solutions for real-world impact.",
    },
    Service {
        icon: "/assets/images/icon-dev.svg",
        alt: "Hardware Development icon",
        title: "Hardware Prototyping",
        text: "Designing IoT devices with sensor integration and firmware dev.",
    },
    Service {
        icon: "/assets/images/icon-app.svg",
        alt: "Full-stack Dev icon",
        title: "Full-Stack Dev",
        text: "Creating web applications with modern UI/UX and scalable backends.",
    },
    Service {
        icon: "/assets/images/icon-photo.svg",
        alt: "System Design icon",
        title: "System Architecture",
        text: "Designing robust architectures merging hardware and software.",
    },
];

#[component]
pub fn About(profile: Profile) -> Element {
    let mut view = use_context::<Signal<ViewState>>();
    let class = article_class(&view.read(), Tab::About, "about");

    rsx!(
        article { class, "data-page": "about",
            header {
                h2 { class: "h2 article-title", "About Me" }
            }
            section { class: "about-text",
                {profile.bio_paragraphs().into_iter().enumerate().map(|(i, paragraph)| rsx!(
                    p { key: "{i}", "{paragraph}" }
                ))}
            }
            section { class: "service",
                h3 { class: "h3 service-title", "What I'm Doing" }
                ul { class: "service-list",
                    {SERVICES.iter().map(|service| rsx!(
                        li { key: "{service.title}", class: "service-item",
                            div { class: "service-icon-box",
                                img { src: service.icon, alt: service.alt, width: "40" }
                            }
                            div { class: "service-content-box",
                                h4 { class: "h4 service-item-title", "{service.title}" }
                                p { class: "service-item-text", "{service.text}" }
                            }
                        }
                    ))}
                }
            }
            section { class: "testimonials",
                h3 { class: "h3 testimonials-title", "Key Highlights" }
                ul { class: "testimonials-list has-scrollbar",
                    {HIGHLIGHTS.iter().enumerate().map(|(index, highlight)| rsx!(
                        li {
                            key: "{highlight.title}",
                            class: "testimonials-item",
                            onclick: move |_| view.write().open_highlight(index),
                            div { class: "content-card",
                                figure { class: "testimonials-avatar-box",
                                    img { src: highlight.image, alt: highlight.title, width: "60" }
                                }
                                h4 { class: "h4 testimonials-item-title", "{highlight.title}" }
                                div { class: "testimonials-text",
                                    p { "{highlight.text}" }
                                }
                            }
                        }
                    ))}
                }
            }
        }
    )
}
