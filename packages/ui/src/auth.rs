//! Sign-out control shared by the navbar and the account page.

use dioxus::prelude::*;

use crate::use_client;

/// Signs out and then calls `on_signed_out`. The local token is gone either
/// way; a failed remote call is only logged.
#[component]
pub fn SignOutButton(
    on_signed_out: EventHandler<()>,
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "btn btn-outline".to_string())] class: String,
) -> Element {
    let client = use_client();
    let mut loading = use_signal(|| false);

    let onclick = move |_| {
        let client = client.clone();
        async move {
            loading.set(true);
            if let Err(e) = client.sign_out().await {
                tracing::warn!("Remote sign-out failed: {e}");
            }
            loading.set(false);
            on_signed_out.call(());
        }
    };

    rsx! {
        button {
            class: "{class}",
            disabled: loading(),
            onclick: onclick,
            if loading() { "Signing out..." } else { "{label}" }
        }
    }
}
