use dioxus::prelude::*;

use crate::{
    client::{
        components::{
            About, Certificates, Contact, Gallery, HighlightModal, Lightbox, Navbar, Projects,
            Resume, Sidebar, Toaster,
        },
        util::{analytics::track, browser},
        SharedStore,
    },
    model::AnalyticsEvent,
    service::loader::load_or_default,
};

#[component]
pub fn Portfolio() -> Element {
    let store = use_context::<SharedStore>();

    // Load every collection once per mount
    let loader_store = store.clone();
    let data = use_resource(move || {
        let store = loader_store.clone();
        async move { load_or_default(&store).await }
    });

    use_hook(move || {
        track(
            store,
            AnalyticsEvent::page_view(browser::referrer(), browser::user_agent()),
        )
    });

    let data = match &*data.read() {
        Some(data) => data.clone(),
        None => return rsx!(),
    };

    rsx!(
        main {
            Toaster {}
            Sidebar { profile: data.profile.clone() }
            div { class: "main-content",
                Navbar {}
                About { profile: data.profile.clone() }
                Resume {
                    education: data.education,
                    experience: data.experience,
                    skills: data.skills,
                }
                Projects { projects: data.projects }
                Certificates { certificates: data.certificates }
                Gallery { items: data.gallery }
                Contact { location: data.profile.location }
            }
            Lightbox {}
            HighlightModal {}
        }
    )
}
