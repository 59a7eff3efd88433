//! Shared UI for the Studymap front-end: components, page helpers and the
//! client context every page reads from.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`session`] | [`SessionProvider`], [`use_client`], platform storage selection |
//! | [`nav`] | Typed query parameters for every page and [`Destination`] |
//! | [`query`] | [`QueryMap`]: query-string lookups |
//! | [`html`] | HTML escaping and card block rendering |
//! | [`dates`] | Date display and `<input type="date">` parsing |
//! | [`validate`] | Form checks run before remote calls |

use dioxus::prelude::*;

pub mod dates;
pub mod html;
pub mod nav;
pub mod query;
pub mod session;
mod timer;
pub mod validate;

pub use nav::{Crumb, Destination, NavError};
pub use query::QueryMap;
pub use session::{connect, use_client, use_session, AppClient, PlatformStore, SessionProvider};
pub use timer::sleep_ms;

mod alert;
pub use alert::{Alert, Notice, NoticeLevel};

mod button;
pub use button::LoadingButton;

mod auth;
pub use auth::SignOutButton;

mod breadcrumbs;
pub use breadcrumbs::Breadcrumbs;

mod card_view;
pub use card_view::{CardBlocks, CardStateBadge};

mod level_tabs;
pub use level_tabs::LevelTabs;

mod navbar;
pub use navbar::Navbar;

mod panel;
pub use panel::Panel;

pub const UI_CSS: Asset = asset!("/assets/ui.css");
