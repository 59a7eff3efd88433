//! Resource page: its sections and their review status.

use dioxus::prelude::*;
use ui::nav::{ResourceParams, RoadmapParams, SectionParams, SubjectParams};
use ui::{use_client, Alert, Breadcrumbs, Destination, Notice};

use super::RedirectHome;
use crate::Route;

#[component]
pub fn Resource(query: String) -> Element {
    match ResourceParams::from_query(&query) {
        Ok(params) => rsx! {
            ResourcePage { params }
        },
        Err(e) => rsx! {
            RedirectHome { reason: e.to_string() }
        },
    }
}

fn trail(params: &ResourceParams) -> Vec<(String, Destination)> {
    let mut links = Vec::new();
    if let Some(roadmap) = &params.roadmap {
        links.push((
            roadmap.name.clone(),
            Destination::Roadmap(RoadmapParams::new(roadmap.id, roadmap.name.clone())),
        ));
    }
    if let Some(subject) = &params.subject {
        let mut to = SubjectParams::new(subject.id, subject.name.clone());
        to.roadmap = params.roadmap.clone();
        links.push((subject.name.clone(), Destination::Subject(to)));
    }
    links
}

#[component]
fn ResourcePage(params: ReadOnlySignal<ResourceParams>) -> Element {
    let client = use_client();
    let nav = use_navigator();
    let mut notice = use_signal(|| Option::<Notice>::None);

    let mut sections = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            let id = params().resource_id;
            async move { client.get_sections(id).await.map_err(|e| e.to_string()) }
        }
    });

    let mark_reviewed = {
        let client = client.clone();
        move |section_id: i64| {
            let client = client.clone();
            spawn(async move {
                notice.set(None);
                match client.mark_section_reviewed(section_id).await {
                    Ok(()) => sections.restart(),
                    Err(e) => notice.set(Some(Notice::error(e.to_string()))),
                }
            });
        }
    };

    let resource = params();
    let title = if resource.name.is_empty() {
        "Resource".to_string()
    } else {
        resource.name.clone()
    };

    let section_list = match &*sections.read_unchecked() {
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "muted", "This resource has no sections." }
        },
        Some(Ok(list)) => {
            let reviewed = list.iter().filter(|s| s.reviewed).count();
            rsx! {
                p { class: "muted", "{reviewed} of {list.len()} sections reviewed" }
                ul {
                    class: "list",
                    for section in list {
                        li {
                            key: "{section.id}",
                            Link {
                                to: Route::from(Destination::Section(
                                    SectionParams::new(section.id, section.position).within(&resource),
                                )),
                                "Section {section.position}"
                            }
                            span { class: "muted", " · {section.card_count} cards" }
                            if section.reviewed {
                                span { class: "badge badge-reviewed", "reviewed" }
                            } else {
                                button {
                                    class: "btn btn-small btn-outline",
                                    r#type: "button",
                                    onclick: {
                                        let mut mark_reviewed = mark_reviewed.clone();
                                        let id = section.id;
                                        move |_| mark_reviewed(id)
                                    },
                                    "Mark reviewed"
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
            p { class: "muted", "Loading sections..." }
        },
    };

    rsx! {
        Breadcrumbs {
            links: trail(&resource),
            current: title.clone(),
            on_navigate: move |to: Destination| {
                nav.push(Route::from(to));
            },
        }
        h1 { "{title}" }
        Alert { notice: notice() }
        {section_list}
    }
}
