//! Card page: the card's content and filing it under a topic.

use api::TopicLevel;
use dioxus::prelude::*;
use ui::nav::{CardParams, SubjectParams};
use ui::{
    use_client, Alert, Breadcrumbs, CardBlocks, CardStateBadge, Destination, LevelTabs,
    LoadingButton, Notice,
};

use super::RedirectHome;
use crate::Route;

#[component]
pub fn Card(query: String) -> Element {
    match CardParams::from_query(&query) {
        Ok(params) => rsx! {
            CardPage { params }
        },
        Err(e) => rsx! {
            RedirectHome { reason: e.to_string() }
        },
    }
}

#[component]
fn CardPage(params: ReadOnlySignal<CardParams>) -> Element {
    let client = use_client();
    let nav = use_navigator();

    let card = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let id = params().card_id;
            async move { client.get_card(id).await.map_err(|e| e.to_string()) }
        }
    });

    let current = params();
    let links: Vec<(String, Destination)> = current
        .subject
        .iter()
        .map(|subject| {
            (
                subject.name.clone(),
                Destination::Subject(SubjectParams::new(subject.id, subject.name.clone())),
            )
        })
        .collect();

    // Until the card loads, show what the previous page knew about it
    let (headline, state) = match &*card.read_unchecked() {
        Some(Ok(card)) => (card.headline.clone(), card.state),
        _ => (current.headline.clone(), current.state),
    };

    let body = match &*card.read_unchecked() {
        Some(Ok(card)) => rsx! {
            CardBlocks { blocks: card.blocks.clone() }
        },
        Some(Err(e)) => rsx! {
            Alert { notice: Some(Notice::error(e.clone())) }
        },
        None => rsx! {
            p { class: "muted", "Loading card..." }
        },
    };

    rsx! {
        Breadcrumbs {
            links,
            current: headline.clone(),
            on_navigate: move |to: Destination| {
                nav.push(Route::from(to));
            },
        }
        h1 {
            "{headline} "
            CardStateBadge { state }
        }
        article { class: "card", {body} }

        if let Some(subject) = current.subject {
            FileUnderTopic { card_id: current.card_id, subject_id: subject.id }
        }
    }
}

/// Picks a topic of the card's subject and files the card under it.
#[component]
fn FileUnderTopic(card_id: i64, subject_id: i64) -> Element {
    let client = use_client();
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut level = use_signal(|| TopicLevel::Surface);
    let mut position = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let topics = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let level = level();
            async move { client.get_topics(subject_id, level).await.map_err(|e| e.to_string()) }
        }
    });

    let handle_file = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            spawn(async move {
                notice.set(None);
                let Ok(position) = position().parse::<i32>() else {
                    notice.set(Some(Notice::error("Choose a topic")));
                    return;
                };
                let topic = api::TopicRef {
                    subject_id,
                    level: level(),
                    position,
                };
                saving.set(true);
                match client.add_card_to_topic(card_id, topic).await {
                    Ok(()) => notice.set(Some(Notice::success("Card filed under the topic"))),
                    Err(e) => notice.set(Some(Notice::error(e.to_string()))),
                }
                saving.set(false);
            });
        }
    };

    let choices = match &*topics.read_unchecked() {
        Some(Ok(list)) => list
            .iter()
            .map(|t| (t.position, t.name.clone()))
            .collect::<Vec<_>>(),
        _ => Vec::new(),
    };

    rsx! {
        section {
            class: "panel-body",
            h2 { "File under a topic" }
            LevelTabs {
                selected: level(),
                on_select: move |selected: TopicLevel| {
                    position.set(String::new());
                    level.set(selected);
                },
            }
            Alert { notice: notice() }
            form {
                class: "form form-inline",
                onsubmit: handle_file,
                select {
                    value: position(),
                    onchange: move |evt: FormEvent| position.set(evt.value()),
                    option { value: "", "Choose a topic..." }
                    for (topic_position, name) in choices {
                        option {
                            key: "{topic_position}",
                            value: "{topic_position}",
                            "{name}"
                        }
                    }
                }
                LoadingButton {
                    loading: saving(),
                    label: "File card",
                    loading_label: "Filing...",
                }
            }
        }
    }
}
