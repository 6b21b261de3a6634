use dioxus::prelude::*;

use crate::{
    client::components::article_class,
    model::GalleryItem,
    state::{Tab, ViewState},
};

#[component]
pub fn Gallery(items: Vec<GalleryItem>) -> Element {
    let mut view = use_context::<Signal<ViewState>>();
    let class = article_class(&view.read(), Tab::Gallery, "gallery");

    rsx!(
        article { class, "data-page": "gallery",
            header {
                h2 { class: "h2 article-title", "Gallery" }
            }
            ul { class: "project-list",
                {items.iter().filter_map(|item| item.image_url.clone().map(|image| (item.id.clone(), image))).map(|(id, image)| {
                    let preview = image.clone();
                    rsx!(
                        li {
                            key: "{id}",
                            class: "project-item active",
                            onclick: move |_| view.write().open_image(&preview),
                            figure { class: "project-img clickable",
                                img { src: "{image}", alt: "Gallery item", loading: "lazy" }
                            }
                        }
                    )
                })}
            }
        }
    )
}
