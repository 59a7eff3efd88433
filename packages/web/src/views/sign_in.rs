//! Sign-in page with email/password form.

use dioxus::prelude::*;
use ui::{use_client, validate, Alert, LoadingButton, Notice};

use crate::Route;

#[component]
pub fn SignIn() -> Element {
    let client = use_client();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut loading = use_signal(|| false);

    // Already signed in
    let authenticated = client.is_authenticated();
    use_effect(move || {
        if authenticated {
            nav.replace(Route::Home {});
        }
    });

    let handle_sign_in = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            notice.set(None);

            let e = email().trim().to_string();
            let p = password();
            if let Err(message) = validate::sign_in(&e, &p) {
                notice.set(Some(Notice::error(message)));
                return;
            }

            loading.set(true);
            match client.sign_in(&e, &p).await {
                Ok(signed_in) => {
                    tracing::info!("Signed in as {}", signed_in.user.display_name());
                    nav.push(Route::Home {});
                }
                Err(err) => {
                    loading.set(false);
                    password.set(String::new());
                    notice.set(Some(Notice::error(err.to_string())));
                }
            }
        });
    };

    rsx! {
        div {
            class: "page page-narrow",

            h1 { "Studymap" }
            p { class: "muted", "Sign in to continue studying" }

            form {
                class: "form",
                onsubmit: handle_sign_in,

                Alert { notice: notice() }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                LoadingButton {
                    loading: loading(),
                    label: "Sign in",
                    loading_label: "Signing in...",
                }
            }

            p {
                class: "muted",
                "No account yet? "
                Link { to: Route::SignUp {}, "Create one" }
            }
        }
    }
}
