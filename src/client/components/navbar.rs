use dioxus::prelude::*;

use crate::state::{Tab, ViewState};

#[component]
pub fn Navbar() -> Element {
    let mut view = use_context::<Signal<ViewState>>();
    let active_tab = view.read().active_tab;

    rsx! {
        nav { class: "navbar",
            ul { class: "navbar-list",
                {Tab::ALL.iter().map(|&tab| {
                    let label = tab.label();
                    let class = if tab == active_tab { "navbar-link active" } else { "navbar-link" };

                    rsx! {
                        li { key: "{label}", class: "navbar-item",
                            button {
                                class,
                                onclick: move |_| view.write().select_tab(tab),
                                "{label}"
                            }
                        }
                    }
                })}
            }
        }
    }
}
