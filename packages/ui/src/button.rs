use dioxus::prelude::*;

/// Submit button that disables itself and swaps its label while `loading`.
#[component]
pub fn LoadingButton(
    loading: bool,
    label: String,
    #[props(default = "Working...".to_string())] loading_label: String,
    #[props(default = "btn btn-primary".to_string())] class: String,
) -> Element {
    rsx! {
        button {
            class: "{class}",
            r#type: "submit",
            disabled: loading,
            if loading {
                "{loading_label}"
            } else {
                "{label}"
            }
        }
    }
}
