//! Registration page.

use dioxus::prelude::*;
use ui::{use_client, validate, Alert, LoadingButton, Notice};

use crate::Route;

#[component]
pub fn SignUp() -> Element {
    let client = use_client();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut loading = use_signal(|| false);

    let handle_sign_up = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            notice.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            if let Err(message) = validate::sign_up(&n, &e, &p, &confirm_password()) {
                notice.set(Some(Notice::error(message)));
                return;
            }

            loading.set(true);
            match client.sign_up(&n, &e, &p).await {
                Ok(user) => {
                    tracing::info!("Created account for {}", user.email);
                    name.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    confirm_password.set(String::new());
                    notice.set(Some(Notice::success(format!(
                        "Account created for {}. You can sign in now.",
                        user.display_name()
                    ))));
                }
                Err(err) => {
                    notice.set(Some(Notice::error(err.to_string())));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "page page-narrow",

            h1 { "Create Account" }
            p { class: "muted", "Sign up for Studymap" }

            form {
                class: "form",
                onsubmit: handle_sign_up,

                Alert { notice: notice() }

                input {
                    r#type: "text",
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password (min 8 characters)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                LoadingButton {
                    loading: loading(),
                    label: "Sign up",
                    loading_label: "Creating account...",
                }
            }

            p {
                class: "muted",
                "Already have an account? "
                Link { to: Route::SignIn {}, "Sign in" }
            }
        }
    }
}
