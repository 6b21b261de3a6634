use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaChevronDown;
use dioxus_free_icons::Icon;

use crate::state::{FilterKind, ViewState};

/// Inline button list and dropdown for one category filter.
///
/// Both controls read and write the same [`CategoryFilter`](crate::state::CategoryFilter)
/// inside [`ViewState`], so they can never disagree about the selection.
#[component]
pub fn CategoryFilterControls(kind: FilterKind) -> Element {
    let mut view = use_context::<Signal<ViewState>>();
    let (labels, caption, dropdown_open) = {
        let state = view.read();
        let filter = state.filter(kind);
        (
            filter.labels(),
            filter.caption().to_string(),
            filter.dropdown_open(),
        )
    };

    let select_class = if dropdown_open {
        "filter-select active"
    } else {
        "filter-select"
    };

    rsx!(
        ul { class: "filter-list",
            {labels.iter().map(|&label| {
                let class = if view.read().filter(kind).is_selected(label) { "active" } else { "" };
                rsx!(
                    li { key: "{label}", class: "filter-item",
                        button {
                            class,
                            onclick: move |_| view.write().filter_mut(kind).select(label),
                            "{label}"
                        }
                    }
                )
            })}
        }
        div { class: "filter-select-box",
            button {
                class: select_class,
                onclick: move |_| view.write().filter_mut(kind).toggle_dropdown(),
                div { class: "select-value", "{caption}" }
                div { class: "select-icon",
                    Icon { width: 14, height: 14, icon: FaChevronDown }
                }
            }
            ul { class: "select-list",
                {labels.iter().map(|&label| rsx!(
                    li { key: "{label}", class: "select-item",
                        button {
                            onclick: move |_| view.write().filter_mut(kind).select(label),
                            "{label}"
                        }
                    }
                ))}
            }
        }
    )
}
