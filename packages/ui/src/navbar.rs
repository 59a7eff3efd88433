use dioxus::prelude::*;

use crate::{Destination, SignOutButton, UI_CSS};

#[component]
pub fn Navbar(on_navigate: EventHandler<Destination>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: UI_CSS }
        header {
            class: "navbar",
            a {
                class: "navbar-brand",
                href: "#",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    on_navigate.call(Destination::Home);
                },
                "Studymap"
            }
            div {
                class: "navbar-links",
                {children}
                a {
                    href: "#",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        on_navigate.call(Destination::Account);
                    },
                    "Account"
                }
                SignOutButton {
                    on_signed_out: move |_| on_navigate.call(Destination::SignIn),
                }
            }
        }
    }
}
