use dioxus::prelude::*;

/// A titled section whose body can be shown or hidden.
#[component]
pub fn Panel(title: String, #[props(default)] open: bool, children: Element) -> Element {
    let mut visible = use_signal(move || open);

    rsx! {
        section {
            class: "panel",
            button {
                class: "panel-toggle",
                r#type: "button",
                onclick: move |_| visible.set(!visible()),
                span { if visible() { "−" } else { "+" } }
                " {title}"
            }
            if visible() {
                div { class: "panel-body", {children} }
            }
        }
    }
}
