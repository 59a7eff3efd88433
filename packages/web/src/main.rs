use api::ClientConfig;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use ui::{Destination, SessionProvider};
use views::{
    Account, AuthLayout, Card, Home, NotFound, Resource, Roadmap, Section, SignIn, SignUp, Subject,
    Topic,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    SignIn {},
    #[route("/signup")]
    SignUp {},
    #[layout(AuthLayout)]
        #[route("/home")]
        Home {},
        #[route("/roadmap?:..query")]
        Roadmap { query: String },
        #[route("/subject?:..query")]
        Subject { query: String },
        #[route("/topic?:..query")]
        Topic { query: String },
        #[route("/section?:..query")]
        Section { query: String },
        #[route("/card?:..query")]
        Card { query: String },
        #[route("/resource?:..query")]
        Resource { query: String },
        #[route("/account")]
        Account {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::SignIn => Route::SignIn {},
            Destination::SignUp => Route::SignUp {},
            Destination::Home => Route::Home {},
            Destination::Account => Route::Account {},
            Destination::Roadmap(params) => Route::Roadmap { query: params.to_query() },
            Destination::Subject(params) => Route::Subject { query: params.to_query() },
            Destination::Resource(params) => Route::Resource { query: params.to_query() },
            Destination::Section(params) => Route::Section { query: params.to_query() },
            Destination::Topic(params) => Route::Topic { query: params.to_query() },
            Destination::Card(params) => Route::Card { query: params.to_query() },
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../studymap.toml");

fn main() {
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialise logging: {e}");
    }
    dioxus::launch(App);
}

fn load_config() -> ClientConfig {
    ClientConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::warn!("Invalid {}, using defaults: {e}", ClientConfig::filename());
        ClientConfig::default()
    })
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::UI_CSS }

        SessionProvider {
            config,
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui::nav::{CardParams, SubjectParams};

    #[test]
    fn test_bundled_config_parses() {
        let config = ClientConfig::from_toml(CONFIG_TOML).unwrap();
        assert!(config.is_local_host("localhost"));
    }

    #[test]
    fn test_destination_to_route() {
        let route = Route::from(Destination::Subject(SubjectParams::new(5, "Rust")));
        assert_eq!(
            route,
            Route::Subject {
                query: "subjectId=5&subjectName=Rust".to_string()
            }
        );
        assert_eq!(Route::from(Destination::Home), Route::Home {});
    }

    #[test]
    fn test_card_destination_keeps_state() {
        let card = api::Card {
            id: 42,
            headline: "Foo".to_string(),
            state: api::CardState::Approved,
            ..Default::default()
        };
        let Route::Card { query } = Route::from(Destination::Card(CardParams::new(&card))) else {
            panic!("expected card route");
        };
        let params = CardParams::from_query(&query).unwrap();
        assert_eq!(params.card_id, 42);
        assert_eq!(params.state, api::CardState::Approved);
    }
}
