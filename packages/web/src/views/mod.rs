use dioxus::prelude::*;
use ui::{use_client, Destination, Navbar};

use crate::Route;

mod sign_in;
pub use sign_in::SignIn;

mod sign_up;
pub use sign_up::SignUp;

mod home;
pub use home::Home;

mod roadmap;
pub use roadmap::Roadmap;

mod subject;
pub use subject::Subject;

mod resource;
pub use resource::Resource;

mod section;
pub use section::Section;

mod topic;
pub use topic::Topic;

mod card;
pub use card::Card;

mod account;
pub use account::Account;

/// Shell for every signed-in page. Without a token the user is sent to `/`.
#[component]
pub fn AuthLayout() -> Element {
    let client = use_client();
    let nav = use_navigator();
    let authenticated = client.is_authenticated();

    use_effect(move || {
        if !authenticated {
            tracing::info!("Not signed in, redirecting to sign-in");
            nav.replace(Route::SignIn {});
        }
    });

    if !authenticated {
        return rsx! {};
    }

    rsx! {
        Navbar {
            on_navigate: move |to: Destination| {
                nav.push(Route::from(to));
            },
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}

/// Rendered in place of a page whose query lacks a usable id.
#[component]
pub fn RedirectHome(reason: String) -> Element {
    let nav = use_navigator();

    use_effect(move || {
        tracing::warn!("Bad page parameters ({reason}), redirecting home");
        nav.replace(Route::Home {});
    });

    rsx! {}
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        RedirectHome { reason: format!("unknown path /{path}") }
    }
}
