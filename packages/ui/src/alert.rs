use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    fn class(self) -> &'static str {
        match self {
            NoticeLevel::Info => "alert alert-info",
            NoticeLevel::Success => "alert alert-success",
            NoticeLevel::Error => "alert alert-error",
        }
    }
}

/// A message shown in a page's alert region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// A page's alert region. Renders nothing without a notice.
#[component]
pub fn Alert(#[props(!optional)] notice: Option<Notice>) -> Element {
    let Some(notice) = notice else {
        return rsx! {};
    };

    rsx! {
        div {
            class: notice.level.class(),
            role: "alert",
            "{notice.text}"
        }
    }
}
