//! # API crate: RPC client for the Studymap study service
//!
//! This crate is the only place the front-end talks to the remote service. Pages
//! hold a [`Client`] and call one async method per operation; everything below
//! it (wire messages, gRPC-web framing, metadata, response mapping) stays here.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`Client`]: one method per remote operation, auth metadata, response mapping |
//! | [`codec`] | gRPC-web frame encoding/decoding and status trailers |
//! | [`config`] | [`ClientConfig`]: endpoint selection, `studymap.toml` parsing |
//! | [`error`] | [`ClientError`] and the crate `Result` alias |
//! | [`models`] | Plain records and closed enumerations handed to pages |
//! | [`proto`] | Prost wire messages and method names |
//! | [`transport`] | [`Transport`] seam and the [`GrpcWebTransport`] implementation |
//!
//! ## Operations
//!
//! - **Accounts**: `sign_in`, `sign_up`, `sign_out`
//! - **Roadmaps**: `get_roadmaps`, `get_roadmap`, `create_roadmap`, `get_milestones`, `create_milestone`
//! - **Subjects**: `get_subjects`, `create_subject`, `search_subjects`, `search`
//! - **Resources**: `get_resources`, `create_resource`, `add_resource`, `get_sections`, `mark_section_reviewed`
//! - **Cards**: `get_section_cards`, `get_topic_cards`, `get_card`, `create_card`, `move_card`, `add_card_to_topic`
//! - **Topics**: `get_topics`, `create_topic`, `edit_topic`, `remove_topic`, `move_topic`

pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod models;
pub mod proto;
pub mod transport;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use models::*;
pub use transport::{GrpcWebTransport, Metadata, Transport};
