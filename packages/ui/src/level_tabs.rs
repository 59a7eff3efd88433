use api::TopicLevel;
use dioxus::prelude::*;

#[component]
pub fn LevelTabs(selected: TopicLevel, on_select: EventHandler<TopicLevel>) -> Element {
    rsx! {
        div {
            class: "tabs",
            role: "tablist",
            for level in TopicLevel::ALL {
                button {
                    key: "{level.to_wire()}",
                    r#type: "button",
                    role: "tab",
                    class: if level == selected { "tab tab-active" } else { "tab" },
                    onclick: move |_| on_select.call(level),
                    "{level}"
                }
            }
        }
    }
}
