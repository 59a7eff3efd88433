//! Topic page: cards filed under one topic.

use dioxus::prelude::*;
use ui::nav::{CardParams, SubjectParams, TopicParams};
use ui::{use_client, Alert, Breadcrumbs, CardStateBadge, Destination, Notice};

use super::RedirectHome;
use crate::Route;

#[component]
pub fn Topic(query: String) -> Element {
    match TopicParams::from_query(&query) {
        Ok(params) => rsx! {
            TopicPage { params }
        },
        Err(e) => rsx! {
            RedirectHome { reason: e.to_string() }
        },
    }
}

#[component]
fn TopicPage(params: ReadOnlySignal<TopicParams>) -> Element {
    let client = use_client();
    let nav = use_navigator();

    let cards = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let topic = params().topic;
            async move { client.get_topic_cards(topic).await.map_err(|e| e.to_string()) }
        }
    });

    let topic = params();
    let subject = topic.subject();
    let subject_label = if subject.name.is_empty() {
        "Subject".to_string()
    } else {
        subject.name.clone()
    };
    let links = vec![(
        subject_label,
        Destination::Subject(SubjectParams::new(subject.id, subject.name.clone())),
    )];
    let title = if topic.name.is_empty() {
        format!("Topic {}", topic.topic.position)
    } else {
        topic.name.clone()
    };

    let card_list = match &*cards.read_unchecked() {
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "muted", "No cards filed under this topic yet." }
        },
        Some(Ok(list)) => rsx! {
            ul {
                class: "list",
                for card in list {
                    li {
                        key: "{card.id}",
                        Link {
                            to: Route::from(Destination::Card(
                                CardParams::new(card).with_subject(Some(subject.clone())),
                            )),
                            "{card.headline}"
                        }
                        CardStateBadge { state: card.state }
                    }
                }
            }
        },
        Some(Err(e)) => rsx! {
            Alert { notice: Some(Notice::error(e.clone())) }
        },
        None => rsx! {
            p { class: "muted", "Loading cards..." }
        },
    };

    rsx! {
        Breadcrumbs {
            links,
            current: title.clone(),
            on_navigate: move |to: Destination| {
                nav.push(Route::from(to));
            },
        }
        h1 { "{title}" }
        p { class: "muted", "{topic.topic.level} level" }
        {card_list}
    }
}
