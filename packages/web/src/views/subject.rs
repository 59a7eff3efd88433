//! Subject page: its resources and its topic tree, one level at a time.

use api::{NewResource, ResourcePattern, ResourceType, SearchKind, TopicLevel};
use dioxus::prelude::*;
use ui::dates::{format_date, parse_date_input};
use ui::nav::{ResourceParams, SubjectParams, TopicParams};
use ui::{
    use_client, validate, Alert, Breadcrumbs, Destination, LevelTabs, LoadingButton, Notice, Panel,
};

use super::RedirectHome;
use crate::Route;

#[component]
pub fn Subject(query: String) -> Element {
    match SubjectParams::from_query(&query) {
        Ok(params) => rsx! {
            SubjectPage { params }
        },
        Err(e) => rsx! {
            RedirectHome { reason: e.to_string() }
        },
    }
}

#[component]
fn SubjectPage(params: ReadOnlySignal<SubjectParams>) -> Element {
    let nav = use_navigator();
    let subject = params();

    let mut links = Vec::new();
    if let Some(roadmap) = &subject.roadmap {
        links.push((
            roadmap.name.clone(),
            Destination::Roadmap(ui::nav::RoadmapParams::new(roadmap.id, roadmap.name.clone())),
        ));
    }
    let title = if subject.name.is_empty() {
        "Subject".to_string()
    } else {
        subject.name.clone()
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

        div {
            class: "columns",
            section {
                h2 { "Resources" }
                SubjectResources { params }
            }
            section {
                h2 { "Topics" }
                SubjectTopics { params }
            }
        }
    }
}

#[component]
fn SubjectResources(params: ReadOnlySignal<SubjectParams>) -> Element {
    let client = use_client();
    let mut notice = use_signal(|| Option::<Notice>::None);

    let mut resources = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let id = params().subject_id;
            async move { client.get_resources(id).await.map_err(|e| e.to_string()) }
        }
    });

    // New resource form
    let mut name = use_signal(String::new);
    let mut link = use_signal(String::new);
    let mut kind = use_signal(ResourceType::default);
    let mut pattern = use_signal(ResourcePattern::default);
    let mut production = use_signal(String::new);
    let mut expiration = use_signal(String::new);
    let mut sections = use_signal(|| "1".to_string());
    let mut saving = use_signal(|| false);

    let handle_create = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            spawn(async move {
                notice.set(None);
                let n = name().trim().to_string();
                let checked = validate::required("Resource name", &n)
                    .and_then(|_| validate::positive_count("Sections", &sections()))
                    .and_then(|count| {
                        Ok((
                            count,
                            parse_date_input(&production())?,
                            parse_date_input(&expiration())?,
                        ))
                    });
                let (count, production_date, expiration_date) = match checked {
                    Ok(values) => values,
                    Err(message) => {
                        notice.set(Some(Notice::error(message)));
                        return;
                    }
                };

                saving.set(true);
                let resource = NewResource {
                    subject_id: params().subject_id,
                    name: n,
                    kind: kind(),
                    link: link().trim().to_string(),
                    pattern: pattern(),
                    production: production_date,
                    expiration: expiration_date,
                    sections: count,
                };
                match client.create_resource(resource).await {
                    Ok(created) => {
                        name.set(String::new());
                        link.set(String::new());
                        production.set(String::new());
                        expiration.set(String::new());
                        sections.set("1".to_string());
                        notice.set(Some(Notice::success(format!("Created resource {}", created.name))));
                        resources.restart();
                    }
                    Err(e) => notice.set(Some(Notice::error(e.to_string()))),
                }
                saving.set(false);
            });
        }
    };

    // Attach an existing resource found by search
    let mut search_text = use_signal(String::new);
    let mut found = use_signal(Vec::<api::SearchResult>::new);
    let mut searching = use_signal(|| false);

    let handle_search = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            spawn(async move {
                notice.set(None);
                let text = search_text().trim().to_string();
                if let Err(message) = validate::required("Search text", &text) {
                    notice.set(Some(Notice::error(message)));
                    return;
                }
                searching.set(true);
                match client.search(&text).await {
                    Ok(results) => {
                        let hits: Vec<_> = results
                            .into_iter()
                            .filter(|r| r.kind == SearchKind::Resource)
                            .collect();
                        if hits.is_empty() {
                            notice.set(Some(Notice::info("No resources match.")));
                        }
                        found.set(hits);
                    }
                    Err(e) => notice.set(Some(Notice::error(e.to_string()))),
                }
                searching.set(false);
            });
        }
    };

    let attach = {
        let client = client.clone();
        move |resource: api::SearchResult| {
            let client = client.clone();
            spawn(async move {
                notice.set(None);
                match client.add_resource(params().subject_id, resource.id).await {
                    Ok(()) => {
                        found.set(Vec::new());
                        search_text.set(String::new());
                        notice.set(Some(Notice::success(format!("Added {}", resource.name))));
                        resources.restart();
                    }
                    Err(e) => notice.set(Some(Notice::error(e.to_string()))),
                }
            });
        }
    };

    let resource_list = match &*resources.read_unchecked() {
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "muted", "No resources yet." }
        },
        Some(Ok(list)) => rsx! {
            ul {
                class: "list",
                for resource in list {
                    li {
                        key: "{resource.id}",
                        Link {
                            to: Route::from(Destination::Resource(
                                ResourceParams::new(resource.id, resource.name.clone()).within(&params()),
                            )),
                            "{resource.name}"
                        }
                        span { class: "badge", "{resource.kind}" }
                        if ui::html::is_web_link(&resource.link) {
                            " "
                            a { href: "{resource.link}", target: "_blank", rel: "noopener", "link" }
                        }
                        if resource.production.is_some() || resource.expiration.is_some() {
                            p {
                                class: "muted",
                                "{format_date(resource.production)} → {format_date(resource.expiration)}"
                            }
                        }
                    }
                }
            }
        },
        Some(Err(e)) => rsx! {
            Alert { notice: Some(Notice::error(e.clone())) }
        },
        None => rsx! {
            p { class: "muted", "Loading resources..." }
        },
    };

    rsx! {
        Alert { notice: notice() }
        {resource_list}

        Panel {
            title: "New resource",
            form {
                class: "form",
                onsubmit: handle_create,
                input {
                    r#type: "text",
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                input {
                    r#type: "url",
                    placeholder: "Link",
                    value: link(),
                    oninput: move |evt: FormEvent| link.set(evt.value()),
                }
                label {
                    "Type "
                    select {
                        value: "{kind().to_wire()}",
                        onchange: move |evt: FormEvent| {
                            kind.set(ResourceType::from_wire(evt.value().parse().unwrap_or(0)));
                        },
                        for option_kind in ResourceType::ALL {
                            option {
                                key: "{option_kind.to_wire()}",
                                value: "{option_kind.to_wire()}",
                                "{option_kind}"
                            }
                        }
                    }
                }
                label {
                    "Split into "
                    select {
                        value: "{pattern().to_wire()}",
                        onchange: move |evt: FormEvent| {
                            pattern.set(ResourcePattern::from_wire(evt.value().parse().unwrap_or(0)));
                        },
                        for option_pattern in ResourcePattern::ALL {
                            option {
                                key: "{option_pattern.to_wire()}",
                                value: "{option_pattern.to_wire()}",
                                "{option_pattern}"
                            }
                        }
                    }
                }
                input {
                    r#type: "number",
                    min: "1",
                    placeholder: "Sections",
                    value: sections(),
                    oninput: move |evt: FormEvent| sections.set(evt.value()),
                }
                label {
                    "Produced "
                    input {
                        r#type: "date",
                        value: production(),
                        oninput: move |evt: FormEvent| production.set(evt.value()),
                    }
                }
                label {
                    "Expires "
                    input {
                        r#type: "date",
                        value: expiration(),
                        oninput: move |evt: FormEvent| expiration.set(evt.value()),
                    }
                }
                LoadingButton {
                    loading: saving(),
                    label: "Create resource",
                    loading_label: "Creating...",
                }
            }
        }

        Panel {
            title: "Add existing resource",
            form {
                class: "form form-inline",
                onsubmit: handle_search,
                input {
                    r#type: "search",
                    placeholder: "Search resources...",
                    value: search_text(),
                    oninput: move |evt: FormEvent| search_text.set(evt.value()),
                }
                LoadingButton {
                    loading: searching(),
                    label: "Search",
                    loading_label: "Searching...",
                }
            }
            ul {
                class: "list",
                for hit in found() {
                    li {
                        key: "{hit.id}",
                        "{hit.name} "
                        button {
                            class: "btn btn-small btn-outline",
                            r#type: "button",
                            onclick: {
                                let mut attach = attach.clone();
                                let hit = hit.clone();
                                move |_| attach(hit.clone())
                            },
                            "Add"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SubjectTopics(params: ReadOnlySignal<SubjectParams>) -> Element {
    let client = use_client();
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut level = use_signal(|| TopicLevel::Surface);

    let mut topics = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let id = params().subject_id;
            let level = level();
            async move { client.get_topics(id, level).await.map_err(|e| e.to_string()) }
        }
    });

    let mut new_name = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let handle_create = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            spawn(async move {
                notice.set(None);
                let n = new_name().trim().to_string();
                if let Err(message) = validate::required("Topic name", &n) {
                    notice.set(Some(Notice::error(message)));
                    return;
                }
                saving.set(true);
                match client.create_topic(params().subject_id, level(), &n).await {
                    Ok(_) => {
                        new_name.set(String::new());
                        topics.restart();
                    }
                    Err(e) => notice.set(Some(Notice::error(e.to_string()))),
                }
                saving.set(false);
            });
        }
    };

    // Inline rename: the topic being edited and its draft name
    let mut editing = use_signal(|| Option::<api::TopicRef>::None);
    let mut draft = use_signal(String::new);

    let handle_rename = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let Some(topic) = editing() else {
                return;
            };
            let client = client.clone();
            spawn(async move {
                notice.set(None);
                let n = draft().trim().to_string();
                if let Err(message) = validate::required("Topic name", &n) {
                    notice.set(Some(Notice::error(message)));
                    return;
                }
                match client.edit_topic(topic, &n).await {
                    Ok(_) => {
                        editing.set(None);
                        topics.restart();
                    }
                    Err(e) => notice.set(Some(Notice::error(e.to_string()))),
                }
            });
        }
    };

    let remove = {
        let client = client.clone();
        move |topic: api::TopicRef| {
            let client = client.clone();
            spawn(async move {
                notice.set(None);
                match client.remove_topic(topic).await {
                    Ok(()) => topics.restart(),
                    Err(e) => notice.set(Some(Notice::error(e.to_string()))),
                }
            });
        }
    };

    let shift = {
        let client = client.clone();
        move |(topic, target): (api::TopicRef, i32)| {
            let client = client.clone();
            spawn(async move {
                notice.set(None);
                match client.move_topic(topic, target).await {
                    Ok(()) => topics.restart(),
                    Err(e) => notice.set(Some(Notice::error(e.to_string()))),
                }
            });
        }
    };

    let topic_list = match &*topics.read_unchecked() {
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "muted", "No {level()} topics yet." }
        },
        Some(Ok(list)) => {
            let last = list.len().saturating_sub(1);
            rsx! {
                ol {
                    class: "list",
                    for (index, topic) in list.iter().enumerate() {
                        li {
                            key: "{topic.position}",
                            if editing() == Some(topic.reference()) {
                                form {
                                    class: "form form-inline",
                                    onsubmit: handle_rename.clone(),
                                    input {
                                        r#type: "text",
                                        value: draft(),
                                        oninput: move |evt: FormEvent| draft.set(evt.value()),
                                    }
                                    button { class: "btn btn-small btn-primary", r#type: "submit", "Save" }
                                    button {
                                        class: "btn btn-small btn-outline",
                                        r#type: "button",
                                        onclick: move |_| editing.set(None),
                                        "Cancel"
                                    }
                                }
                            } else {
                                Link {
                                    to: Route::from(Destination::Topic(
                                        TopicParams::new(topic.reference(), topic.name.clone())
                                            .with_subject_name(params().name),
                                    )),
                                    "{topic.name}"
                                }
                                span {
                                    class: "row-actions",
                                    button {
                                        class: "btn btn-small btn-outline",
                                        r#type: "button",
                                        disabled: index == 0,
                                        onclick: {
                                            let mut shift = shift.clone();
                                            let topic = topic.reference();
                                            move |_| shift((topic, topic.position - 1))
                                        },
                                        "↑"
                                    }
                                    button {
                                        class: "btn btn-small btn-outline",
                                        r#type: "button",
                                        disabled: index == last,
                                        onclick: {
                                            let mut shift = shift.clone();
                                            let topic = topic.reference();
                                            move |_| shift((topic, topic.position + 1))
                                        },
                                        "↓"
                                    }
                                    button {
                                        class: "btn btn-small btn-outline",
                                        r#type: "button",
                                        onclick: {
                                            let topic_ref = topic.reference();
                                            let name = topic.name.clone();
                                            move |_| {
                                                draft.set(name.clone());
                                                editing.set(Some(topic_ref));
                                            }
                                        },
                                        "Rename"
                                    }
                                    button {
                                        class: "btn btn-small btn-outline",
                                        r#type: "button",
                                        onclick: {
                                            let mut remove = remove.clone();
                                            let topic = topic.reference();
                                            move |_| remove(topic)
                                        },
                                        "Remove"
                                    }
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
            p { class: "muted", "Loading topics..." }
        },
    };

    rsx! {
        LevelTabs {
            selected: level(),
            on_select: move |selected: TopicLevel| {
                editing.set(None);
                level.set(selected);
            },
        }
        Alert { notice: notice() }
        {topic_list}

        form {
            class: "form form-inline",
            onsubmit: handle_create,
            input {
                r#type: "text",
                placeholder: "New {level()} topic",
                value: new_name(),
                oninput: move |evt: FormEvent| new_name.set(evt.value()),
            }
            LoadingButton {
                loading: saving(),
                label: "Add topic",
                loading_label: "Adding...",
            }
        }
    }
}
