use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaShieldHalved, FaTableColumns};
use dioxus_free_icons::Icon;

#[derive(Clone, Copy, PartialEq)]
pub enum EmptyIcon {
    Layout,
    Shield,
}

#[component]
pub fn EmptyState(icon: EmptyIcon, message: &'static str) -> Element {
    rsx!(
        li { class: "project-item active empty-state",
            div { class: "icon-box",
                {match icon {
                    EmptyIcon::Layout => rsx!(Icon { width: 24, height: 24, icon: FaTableColumns }),
                    EmptyIcon::Shield => rsx!(Icon { width: 24, height: 24, icon: FaShieldHalved }),
                }}
            }
            p { "{message}" }
        }
    )
}
