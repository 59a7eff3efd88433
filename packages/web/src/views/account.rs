//! Account page: this device's session and sign-out.

use dioxus::prelude::*;
use ui::{use_client, SignOutButton};

use crate::Route;

#[component]
pub fn Account() -> Element {
    let client = use_client();
    let nav = use_navigator();
    let session = client.session();
    let device = session.device();
    let endpoint = client.transport().endpoint().to_string();
    let status = if client.is_authenticated() {
        "Signed in"
    } else {
        "Signed out"
    };

    rsx! {
        h1 { "Account" }

        dl {
            class: "details",
            dt { "Status" }
            dd { "{status}" }
            dt { "Device" }
            dd { code { "{device}" } }
            dt { "Service" }
            dd { code { "{endpoint}" } }
        }

        SignOutButton {
            on_signed_out: move |_| {
                nav.replace(Route::SignIn {});
            },
        }
    }
}
