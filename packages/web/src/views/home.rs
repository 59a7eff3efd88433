//! Home page: roadmaps, subjects and subject search.

use dioxus::prelude::*;
use ui::nav::{RoadmapParams, SubjectParams};
use ui::{use_client, validate, Alert, Destination, LoadingButton, Notice, Panel};

use crate::Route;

/// Quiet time after the last keystroke before a search is sent.
const SEARCH_DELAY_MS: u64 = 300;

#[component]
pub fn Home() -> Element {
    let client = use_client();
    let mut notice = use_signal(|| Option::<Notice>::None);

    let mut roadmaps = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.get_roadmaps().await.map_err(|e| e.to_string()) }
        }
    });

    let mut subjects = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.get_subjects().await.map_err(|e| e.to_string()) }
        }
    });

    // New roadmap form
    let mut roadmap_name = use_signal(String::new);
    let mut roadmap_description = use_signal(String::new);
    let mut creating_roadmap = use_signal(|| false);

    let handle_create_roadmap = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            spawn(async move {
                notice.set(None);
                let name = roadmap_name().trim().to_string();
                if let Err(message) = validate::required("Roadmap name", &name) {
                    notice.set(Some(Notice::error(message)));
                    return;
                }
                creating_roadmap.set(true);
                match client.create_roadmap(&name, roadmap_description().trim()).await {
                    Ok(roadmap) => {
                        roadmap_name.set(String::new());
                        roadmap_description.set(String::new());
                        notice.set(Some(Notice::success(format!("Created roadmap {}", roadmap.name))));
                        roadmaps.restart();
                    }
                    Err(e) => notice.set(Some(Notice::error(e.to_string()))),
                }
                creating_roadmap.set(false);
            });
        }
    };

    // New subject form
    let mut subject_name = use_signal(String::new);
    let mut subject_description = use_signal(String::new);
    let mut creating_subject = use_signal(|| false);

    let handle_create_subject = {
        let client = client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            spawn(async move {
                notice.set(None);
                let name = subject_name().trim().to_string();
                if let Err(message) = validate::required("Subject name", &name) {
                    notice.set(Some(Notice::error(message)));
                    return;
                }
                creating_subject.set(true);
                match client.create_subject(&name, subject_description().trim()).await {
                    Ok(subject) => {
                        subject_name.set(String::new());
                        subject_description.set(String::new());
                        notice.set(Some(Notice::success(format!("Created subject {}", subject.name))));
                        subjects.restart();
                    }
                    Err(e) => notice.set(Some(Notice::error(e.to_string()))),
                }
                creating_subject.set(false);
            });
        }
    };

    // Search as you type: only the last keystroke within the delay is sent,
    // and only the newest answer is shown.
    let mut search_text = use_signal(String::new);
    let mut search_generation = use_signal(|| 0u64);
    let mut search_results = use_signal(|| Option::<Result<Vec<api::Subject>, String>>::None);

    let on_search_input = {
        let client = client.clone();
        move |evt: FormEvent| {
            let text = evt.value();
            search_text.set(text.clone());
            let generation = *search_generation.peek() + 1;
            search_generation.set(generation);
            let client = client.clone();
            spawn(async move {
                ui::sleep_ms(SEARCH_DELAY_MS).await;
                if *search_generation.peek() != generation {
                    return;
                }
                let query = text.trim().to_string();
                if query.is_empty() {
                    search_results.set(None);
                    return;
                }
                let result = client.search_subjects(&query).await.map_err(|e| e.to_string());
                if *search_generation.peek() == generation {
                    search_results.set(Some(result));
                }
            });
        }
    };

    let search_view = match search_results() {
        Some(Ok(found)) if found.is_empty() => rsx! {
            p { class: "muted", "No subjects match." }
        },
        Some(Ok(found)) => rsx! {
            ul {
                class: "list",
                for subject in found {
                    li {
                        key: "{subject.id}",
                        Link {
                            to: Route::from(Destination::Subject(SubjectParams::new(subject.id, subject.name.clone()))),
                            "{subject.name}"
                        }
                    }
                }
            }
        },
        Some(Err(e)) => rsx! {
            Alert { notice: Some(Notice::error(e)) }
        },
        None => rsx! {},
    };

    let roadmap_list = match &*roadmaps.read_unchecked() {
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "muted", "No roadmaps yet." }
        },
        Some(Ok(list)) => rsx! {
            ul {
                class: "list",
                for roadmap in list {
                    li {
                        key: "{roadmap.id}",
                        Link {
                            to: Route::from(Destination::Roadmap(RoadmapParams::new(roadmap.id, roadmap.name.clone()))),
                            "{roadmap.name}"
                        }
                        if !roadmap.description.is_empty() {
                            p { class: "muted", "{roadmap.description}" }
                        }
                    }
                }
            }
        },
        Some(Err(e)) => rsx! {
            Alert { notice: Some(Notice::error(e.clone())) }
        },
        None => rsx! {
            p { class: "muted", "Loading roadmaps..." }
        },
    };

    let subject_list = match &*subjects.read_unchecked() {
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "muted", "No subjects yet." }
        },
        Some(Ok(list)) => rsx! {
            ul {
                class: "list",
                for subject in list {
                    li {
                        key: "{subject.id}",
                        Link {
                            to: Route::from(Destination::Subject(SubjectParams::new(subject.id, subject.name.clone()))),
                            "{subject.name}"
                        }
                        if !subject.description.is_empty() {
                            p { class: "muted", "{subject.description}" }
                        }
                    }
                }
            }
        },
        Some(Err(e)) => rsx! {
            Alert { notice: Some(Notice::error(e.clone())) }
        },
        None => rsx! {
            p { class: "muted", "Loading subjects..." }
        },
    };

    rsx! {
        h1 { "Home" }

        Alert { notice: notice() }

        section {
            class: "search",
            input {
                r#type: "search",
                placeholder: "Search subjects...",
                value: search_text(),
                oninput: on_search_input,
            }
            {search_view}
        }

        div {
            class: "columns",

            section {
                h2 { "Roadmaps" }
                {roadmap_list}

                Panel {
                    title: "New roadmap",
                    form {
                        class: "form",
                        onsubmit: handle_create_roadmap,
                        input {
                            r#type: "text",
                            placeholder: "Name",
                            value: roadmap_name(),
                            oninput: move |evt: FormEvent| roadmap_name.set(evt.value()),
                        }
                        textarea {
                            placeholder: "Description",
                            value: roadmap_description(),
                            oninput: move |evt: FormEvent| roadmap_description.set(evt.value()),
                        }
                        LoadingButton {
                            loading: creating_roadmap(),
                            label: "Create roadmap",
                            loading_label: "Creating...",
                        }
                    }
                }
            }

            section {
                h2 { "Subjects" }
                {subject_list}

                Panel {
                    title: "New subject",
                    form {
                        class: "form",
                        onsubmit: handle_create_subject,
                        input {
                            r#type: "text",
                            placeholder: "Name",
                            value: subject_name(),
                            oninput: move |evt: FormEvent| subject_name.set(evt.value()),
                        }
                        textarea {
                            placeholder: "Description",
                            value: subject_description(),
                            oninput: move |evt: FormEvent| subject_description.set(evt.value()),
                        }
                        LoadingButton {
                            loading: creating_subject(),
                            label: "Create subject",
                            loading_label: "Creating...",
                        }
                    }
                }
            }
        }
    }
}
