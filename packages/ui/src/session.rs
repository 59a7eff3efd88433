//! Client construction and the context pages read it from.
//!
//! The client is built once, when [`SessionProvider`] first renders, and
//! placed in context. Pages call [`use_client`] and get a ready client; a
//! client that could not be built is reported instead of rendering the app.

use api::{Client, ClientConfig, GrpcWebTransport};
use dioxus::prelude::*;
use store::Session;

use crate::{Alert, Notice};

/// Browser `localStorage` on the web, process memory elsewhere.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

pub type AppClient = Client<GrpcWebTransport, PlatformStore>;

fn platform_store() -> PlatformStore {
    PlatformStore::new()
}

/// Hostname the app is served from, used to pick the endpoint.
pub fn current_host() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().hostname().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "localhost".to_string()
    }
}

pub fn connect(config: &ClientConfig) -> api::Result<AppClient> {
    let host = current_host();
    let endpoint = config.endpoint_for_host(&host);
    tracing::info!("Using endpoint {endpoint} for host {host:?}");
    let transport = GrpcWebTransport::new(endpoint)?;
    Ok(Client::new(transport, Session::new(platform_store())))
}

pub fn use_client() -> AppClient {
    use_context::<AppClient>()
}

pub fn use_session() -> Session<PlatformStore> {
    use_client().session().clone()
}

#[component]
pub fn SessionProvider(config: ClientConfig, children: Element) -> Element {
    let connected = use_hook(move || match connect(&config) {
        Ok(client) => {
            provide_context(client);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Failed to set up the client: {e}");
            Err(e.to_string())
        }
    });

    match connected {
        Ok(()) => rsx! {
            {children}
        },
        Err(message) => rsx! {
            div {
                class: "page page-narrow",
                h1 { "Studymap is unavailable" }
                Alert { notice: Some(Notice::error(message)) }
            }
        },
    }
}
