use api::{Block, CardState};
use dioxus::prelude::*;

use crate::html::render_blocks;

#[component]
pub fn CardBlocks(blocks: Vec<Block>) -> Element {
    if blocks.is_empty() {
        return rsx! {
            p { class: "muted", "This card has no content yet." }
        };
    }
    let html = render_blocks(&blocks);
    rsx! {
        div {
            class: "card-body",
            dangerous_inner_html: "{html}",
        }
    }
}

#[component]
pub fn CardStateBadge(state: CardState) -> Element {
    let label = state.label();
    rsx! {
        span { class: "badge badge-{label}", "{label}" }
    }
}
