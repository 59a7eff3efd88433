//! Section page: the cards written for one section of a resource.

use api::Block;
use dioxus::prelude::*;
use ui::nav::{CardParams, ResourceParams, SectionParams, SubjectParams};
use ui::{
    use_client, validate, Alert, Breadcrumbs, CardStateBadge, Destination, LoadingButton, Notice,
    Panel,
};

use super::RedirectHome;
use crate::Route;

#[component]
pub fn Section(query: String) -> Element {
    match SectionParams::from_query(&query) {
        Ok(params) => rsx! {
            SectionPage { params }
        },
        Err(e) => rsx! {
            RedirectHome { reason: e.to_string() }
        },
    }
}

fn trail(params: &SectionParams) -> Vec<(String, Destination)> {
    let mut links = Vec::new();
    if let Some(subject) = &params.subject {
        links.push((
            subject.name.clone(),
            Destination::Subject(SubjectParams::new(subject.id, subject.name.clone())),
        ));
    }
    if let Some(resource) = &params.resource {
        let mut to = ResourceParams::new(resource.id, resource.name.clone());
        to.subject = params.subject.clone();
        links.push((resource.name.clone(), Destination::Resource(to)));
    }
    links
}

#[component]
fn SectionPage(params: ReadOnlySignal<SectionParams>) -> Element {
    let client = use_client();
    let nav = use_navigator();
    let mut notice = use_signal(|| Option::<Notice>::None);

    let mut cards = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let id = params().section_id;
            async move { client.get_section_cards(id).await.map_err(|e| e.to_string()) }
        }
    });

    let mut headline = use_signal(String::new);
    let mut text = use_signal(String::new);
    let mut code = use_signal(String::new);
    let mut language = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let handle_create = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            spawn(async move {
                notice.set(None);
                let h = headline().trim().to_string();
                if let Err(message) = validate::required("Headline", &h) {
                    notice.set(Some(Notice::error(message)));
                    return;
                }
                let mut blocks = Vec::new();
                if !text().trim().is_empty() {
                    blocks.push(Block::text(text()));
                }
                if !code().trim().is_empty() {
                    blocks.push(Block::code(code(), language().trim()));
                }

                saving.set(true);
                match client.create_card(params().section_id, &h, blocks).await {
                    Ok(card) => {
                        headline.set(String::new());
                        text.set(String::new());
                        code.set(String::new());
                        language.set(String::new());
                        notice.set(Some(Notice::success(format!("Created card {}", card.headline))));
                        cards.restart();
                    }
                    Err(e) => notice.set(Some(Notice::error(e.to_string()))),
                }
                saving.set(false);
            });
        }
    };

    let shift = {
        let client = client.clone();
        move |(card_id, position): (i64, i32)| {
            let client = client.clone();
            spawn(async move {
                notice.set(None);
                match client.move_card(card_id, params().section_id, position).await {
                    Ok(()) => cards.restart(),
                    Err(e) => notice.set(Some(Notice::error(e.to_string()))),
                }
            });
        }
    };

    let section = params();
    let title = format!("Section {}", section.position);

    let card_list = match &*cards.read_unchecked() {
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "muted", "No cards in this section yet." }
        },
        Some(Ok(list)) => {
            let last = list.len().saturating_sub(1);
            rsx! {
                ol {
                    class: "list",
                    for (index, card) in list.iter().enumerate() {
                        li {
                            key: "{card.id}",
                            Link {
                                to: Route::from(Destination::Card(
                                    CardParams::new(card).with_subject(section.subject.clone()),
                                )),
                                "{card.headline}"
                            }
                            CardStateBadge { state: card.state }
                            span {
                                class: "row-actions",
                                button {
                                    class: "btn btn-small btn-outline",
                                    r#type: "button",
                                    disabled: index == 0,
                                    onclick: {
                                        let mut shift = shift.clone();
                                        let (id, position) = (card.id, card.position);
                                        move |_| shift((id, position - 1))
                                    },
                                    "↑"
                                }
                                button {
                                    class: "btn btn-small btn-outline",
                                    r#type: "button",
                                    disabled: index == last,
                                    onclick: {
                                        let mut shift = shift.clone();
                                        let (id, position) = (card.id, card.position);
                                        move |_| shift((id, position + 1))
                                    },
                                    "↓"
                                }
                            }
                        }
                    }
                }
            }
        }
        Some(Err(e)) => rsx! {
            Alert { notice: Some(Notice::error(e.clone())) }
        },
        None => rsx! {
            p { class: "muted", "Loading cards..." }
        },
    };

    rsx! {
        Breadcrumbs {
            links: trail(&section),
            current: title.clone(),
            on_navigate: move |to: Destination| {
                nav.push(Route::from(to));
            },
        }
        h1 { "{title}" }
        Alert { notice: notice() }
        {card_list}

        Panel {
            title: "New card",
            form {
                class: "form",
                onsubmit: handle_create,
                input {
                    r#type: "text",
                    placeholder: "Headline",
                    value: headline(),
                    oninput: move |evt: FormEvent| headline.set(evt.value()),
                }
                textarea {
                    placeholder: "Text (markdown)",
                    rows: "6",
                    value: text(),
                    oninput: move |evt: FormEvent| text.set(evt.value()),
                }
                textarea {
                    class: "code-input",
                    placeholder: "Code (optional)",
                    rows: "4",
                    value: code(),
                    oninput: move |evt: FormEvent| code.set(evt.value()),
                }
                input {
                    r#type: "text",
                    placeholder: "Code language, e.g. rust",
                    value: language(),
                    oninput: move |evt: FormEvent| language.set(evt.value()),
                }
                LoadingButton {
                    loading: saving(),
                    label: "Create card",
                    loading_label: "Creating...",
                }
            }
        }
    }
}
