//! Roadmap page: milestones and the form to add one.

use api::TopicLevel;
use dioxus::prelude::*;
use ui::dates::{format_date, parse_date_input};
use ui::nav::{RoadmapParams, SubjectParams};
use ui::{use_client, validate, Alert, Breadcrumbs, Destination, LoadingButton, Notice, Panel};

use super::RedirectHome;
use crate::Route;

#[component]
pub fn Roadmap(query: String) -> Element {
    match RoadmapParams::from_query(&query) {
        Ok(params) => rsx! {
            RoadmapPage { params }
        },
        Err(e) => rsx! {
            RedirectHome { reason: e.to_string() }
        },
    }
}

#[component]
fn RoadmapPage(params: ReadOnlySignal<RoadmapParams>) -> Element {
    let client = use_client();
    let nav = use_navigator();
    let mut notice = use_signal(|| Option::<Notice>::None);

    let roadmap = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let id = params().roadmap_id;
            async move { client.get_roadmap(id).await.map_err(|e| e.to_string()) }
        }
    });

    let mut milestones = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let id = params().roadmap_id;
            async move { client.get_milestones(id).await.map_err(|e| e.to_string()) }
        }
    });

    // Subjects offered in the milestone form
    let subjects = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.get_subjects().await.unwrap_or_default() }
        }
    });

    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut target_date = use_signal(String::new);
    let mut subject_id = use_signal(String::new);
    let mut level = use_signal(|| TopicLevel::Surface);
    let mut saving = use_signal(|| false);

    let handle_create = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            spawn(async move {
                notice.set(None);
                let n = name().trim().to_string();
                if let Err(message) = validate::required("Milestone name", &n) {
                    notice.set(Some(Notice::error(message)));
                    return;
                }
                let date = match parse_date_input(&target_date()) {
                    Ok(date) => date,
                    Err(message) => {
                        notice.set(Some(Notice::error(message)));
                        return;
                    }
                };
                let subject = subject_id().parse::<i64>().ok();

                saving.set(true);
                let result = client
                    .create_milestone(
                        params().roadmap_id,
                        subject,
                        level(),
                        &n,
                        description().trim(),
                        date,
                    )
                    .await;
                match result {
                    Ok(milestone) => {
                        name.set(String::new());
                        description.set(String::new());
                        target_date.set(String::new());
                        notice.set(Some(Notice::success(format!("Added milestone {}", milestone.name))));
                        milestones.restart();
                    }
                    Err(e) => notice.set(Some(Notice::error(e.to_string()))),
                }
                saving.set(false);
            });
        }
    };

    let (title, about) = match &*roadmap.read_unchecked() {
        Some(Ok(roadmap)) => (roadmap.name.clone(), roadmap.description.clone()),
        _ => (params().name, String::new()),
    };

    let subject_names: Vec<(i64, String)> = match &*subjects.read_unchecked() {
        Some(list) => list.iter().map(|s| (s.id, s.name.clone())).collect(),
        None => Vec::new(),
    };

    let milestone_list = match &*milestones.read_unchecked() {
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "muted", "No milestones yet." }
        },
        Some(Ok(list)) => rsx! {
            ul {
                class: "list",
                for milestone in list {
                    li {
                        key: "{milestone.id}",
                        class: if milestone.completed { "milestone done" } else { "milestone" },
                        strong { "{milestone.name}" }
                        span { class: "muted", " due {format_date(milestone.target_date)}" }
                        if let Some(id) = milestone.subject_id {
                            {
                                let subject_name = subject_names
                                    .iter()
                                    .find(|(sid, _)| *sid == id)
                                    .map(|(_, n)| n.clone())
                                    .unwrap_or_default();
                                let to = Destination::Subject(
                                    SubjectParams::new(id, subject_name.clone()).with_roadmap(params().crumb()),
                                );
                                rsx! {
                                    " · "
                                    Link {
                                        to: Route::from(to),
                                        if subject_name.is_empty() { "subject" } else { "{subject_name}" }
                                    }
                                    span { class: "badge", "{milestone.level}" }
                                }
                            }
                        }
                        if !milestone.description.is_empty() {
                            p { class: "muted", "{milestone.description}" }
                        }
                    }
                }
            }
        },
        Some(Err(e)) => rsx! {
            Alert { notice: Some(Notice::error(e.clone())) }
        },
        None => rsx! {
            p { class: "muted", "Loading milestones..." }
        },
    };

    rsx! {
        Breadcrumbs {
            links: Vec::new(),
            current: title.clone(),
            on_navigate: move |to: Destination| {
                nav.push(Route::from(to));
            },
        }

        h1 { "{title}" }
        if !about.is_empty() {
            p { class: "muted", "{about}" }
        }

        Alert { notice: notice() }

        h2 { "Milestones" }
        {milestone_list}

        Panel {
            title: "New milestone",
            form {
                class: "form",
                onsubmit: handle_create,
                input {
                    r#type: "text",
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                textarea {
                    placeholder: "Description",
                    value: description(),
                    oninput: move |evt: FormEvent| description.set(evt.value()),
                }
                label {
                    "Target date "
                    input {
                        r#type: "date",
                        value: target_date(),
                        oninput: move |evt: FormEvent| target_date.set(evt.value()),
                    }
                }
                label {
                    "Subject "
                    select {
                        value: subject_id(),
                        onchange: move |evt: FormEvent| subject_id.set(evt.value()),
                        option { value: "", "None" }
                        for (id, subject_name) in subject_names.clone() {
                            option { key: "{id}", value: "{id}", "{subject_name}" }
                        }
                    }
                }
                label {
                    "Level "
                    select {
                        value: "{level().to_wire()}",
                        onchange: move |evt: FormEvent| {
                            let wire = evt.value().parse().unwrap_or(0);
                            level.set(TopicLevel::from_wire(wire));
                        },
                        for option_level in TopicLevel::ALL {
                            option {
                                key: "{option_level.to_wire()}",
                                value: "{option_level.to_wire()}",
                                "{option_level}"
                            }
                        }
                    }
                }
                LoadingButton {
                    loading: saving(),
                    label: "Add milestone",
                    loading_label: "Saving...",
                }
            }
        }
    }
}
