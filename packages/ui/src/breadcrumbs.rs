use dioxus::prelude::*;

use crate::Destination;

/// `Home / ancestors... / current`. Ancestors are whatever the page knows about;
/// missing ones are simply not shown.
#[component]
pub fn Breadcrumbs(
    links: Vec<(String, Destination)>,
    current: String,
    on_navigate: EventHandler<Destination>,
) -> Element {
    rsx! {
        nav {
            class: "breadcrumbs",
            a {
                href: "#",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    on_navigate.call(Destination::Home);
                },
                "Home"
            }
            for (label, to) in links {
                span { class: "breadcrumb-sep", "/" }
                a {
                    href: "#",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        on_navigate.call(to.clone());
                    },
                    if label.is_empty() { "…" } else { "{label}" }
                }
            }
            span { class: "breadcrumb-sep", "/" }
            span { class: "breadcrumb-current", "{current}" }
        }
    }
}
