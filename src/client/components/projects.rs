use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::FaGithub;
use dioxus_free_icons::icons::fa_solid_icons::FaArrowUpRightFromSquare;
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::{article_class, empty_state::EmptyIcon, CategoryFilterControls, EmptyState},
        util::analytics::track_project_click,
        SharedStore,
    },
    model::{LinkKind, Project},
    state::{FilterKind, Section, Tab, ViewState},
};

#[component]
pub fn Projects(projects: Vec<Project>) -> Element {
    let view = use_context::<Signal<ViewState>>();
    let (class, visible) = {
        let state = view.read();
        let visible: Vec<Project> = state.projects.apply(&projects).into_iter().cloned().collect();
        (article_class(&state, Tab::Projects, "portfolio"), visible)
    };

    rsx!(
        article { class, "data-page": "portfolio",
            header {
                h2 { class: "h2 article-title", "Projects" }
            }
            CategoryFilterControls { kind: FilterKind::Projects }
            ul { class: "project-list",
                if let Some(message) = Section::Projects.placeholder(visible.len()) {
                    EmptyState { icon: EmptyIcon::Layout, message }
                }
                {visible.into_iter().map(|project| rsx!(
                    ProjectCard { key: "{project.id}", project }
                ))}
            }
        }
    )
}

#[component]
fn ProjectCard(project: Project) -> Element {
    let store = use_context::<SharedStore>();

    let github_link = project.github_link().map(str::to_string);
    let live_link = project.live_link().map(str::to_string);
    let subtitle = project.subtitle().map(str::to_string);
    let image = project.image_url.clone().unwrap_or_default();

    let github_store = store.clone();
    let github_title = project.title.clone();
    let live_title = project.title.clone();

    rsx!(
        li { class: "project-item active",
            div { class: "project-card",
                figure { class: "project-img",
                    div { class: "project-icons",
                        if let Some(link) = github_link {
                            a {
                                href: "{link}",
                                target: "_blank",
                                class: "project-icon-link",
                                onclick: move |_| track_project_click(github_store.clone(), github_title.clone(), LinkKind::Github),
                                Icon { width: 20, height: 20, icon: FaGithub }
                            }
                        }
                        if let Some(link) = live_link {
                            a {
                                href: "{link}",
                                target: "_blank",
                                class: "project-icon-link",
                                onclick: move |_| track_project_click(store.clone(), live_title.clone(), LinkKind::Live),
                                Icon { width: 20, height: 20, icon: FaArrowUpRightFromSquare }
                            }
                        }
                    }
                    img { src: "{image}", alt: "{project.title}", loading: "lazy" }
                }
                h3 { class: "project-title", "{project.title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "project-category", "{subtitle}" }
                }
            }
        }
    )
}
