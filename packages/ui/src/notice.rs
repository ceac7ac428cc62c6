use api::{ApiError, ErrorKind};
use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleExclamation, FaCircleInfo, FaTriangleExclamation};
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    fn class(self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice notice--info",
            NoticeLevel::Success => "notice notice--success",
            NoticeLevel::Warning => "notice notice--warning",
            NoticeLevel::Error => "notice notice--error",
        }
    }
}

/// One-line page-level message.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub at: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            at: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    /// Generic text for the failure kind. Connectivity problems are warnings.
    pub fn from_error(err: &ApiError) -> Self {
        let level = match err.kind() {
            ErrorKind::Network => NoticeLevel::Warning,
            ErrorKind::Server | ErrorKind::Auth => NoticeLevel::Error,
        };
        Self::new(level, err.user_message())
    }
}

#[component]
pub fn NoticeBanner(notice: Option<Notice>) -> Element {
    let Some(notice) = notice else {
        return rsx! {};
    };

    rsx! {
        div {
            class: notice.level.class(),
            role: "status",
            match notice.level {
                NoticeLevel::Info => rsx! { Icon { icon: FaCircleInfo, width: 14, height: 14 } },
                NoticeLevel::Success => rsx! { Icon { icon: FaCircleCheck, width: 14, height: 14 } },
                NoticeLevel::Warning => rsx! { Icon { icon: FaTriangleExclamation, width: 14, height: 14 } },
                NoticeLevel::Error => rsx! { Icon { icon: FaCircleExclamation, width: 14, height: 14 } },
            }
            span { class: "notice__message", "{notice.message}" }
            span { class: "notice__time", "{notice.at}" }
        }
    }
}
