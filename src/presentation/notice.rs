//! Toast and modal variants with their visual configuration.

use std::{fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported {family} kind `{value}`")]
pub struct NoticeParseError {
    family: &'static str,
    value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NoticeStyle {
    pub icon: &'static str,
    pub css_class: &'static str,
    pub role: &'static str,
    /// Auto-dismiss delay; `None` keeps the toast until closed.
    pub ttl_ms: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NoticeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
            NoticeKind::Warning => "warning",
            NoticeKind::Info => "info",
        }
    }

    pub fn style(self) -> NoticeStyle {
        match self {
            NoticeKind::Success => NoticeStyle {
                icon: "✓",
                css_class: "toast toast-success",
                role: "status",
                ttl_ms: Some(4_000),
            },
            NoticeKind::Error => NoticeStyle {
                icon: "✕",
                css_class: "toast toast-error",
                role: "alert",
                ttl_ms: None,
            },
            NoticeKind::Warning => NoticeStyle {
                icon: "!",
                css_class: "toast toast-warning",
                role: "alert",
                ttl_ms: Some(8_000),
            },
            NoticeKind::Info => NoticeStyle {
                icon: "i",
                css_class: "toast toast-info",
                role: "status",
                ttl_ms: Some(4_000),
            },
        }
    }
}

impl FromStr for NoticeKind {
    type Err = NoticeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "success" => Ok(NoticeKind::Success),
            "error" => Ok(NoticeKind::Error),
            "warning" => Ok(NoticeKind::Warning),
            "info" => Ok(NoticeKind::Info),
            other => Err(NoticeParseError {
                family: "toast",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn style(&self) -> NoticeStyle {
        self.kind.style()
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.style().icon, self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModalStyle {
    pub title: &'static str,
    pub confirm_label: &'static str,
    pub cancel_label: Option<&'static str>,
    pub destructive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalKind {
    Confirm,
    Delete,
    Info,
}

impl ModalKind {
    pub fn style(self) -> ModalStyle {
        match self {
            ModalKind::Confirm => ModalStyle {
                title: "Are you sure?",
                confirm_label: "Confirm",
                cancel_label: Some("Cancel"),
                destructive: false,
            },
            ModalKind::Delete => ModalStyle {
                title: "Delete this item?",
                confirm_label: "Delete",
                cancel_label: Some("Cancel"),
                destructive: true,
            },
            ModalKind::Info => ModalStyle {
                title: "Notice",
                confirm_label: "OK",
                cancel_label: None,
                destructive: false,
            },
        }
    }
}

impl FromStr for ModalKind {
    type Err = NoticeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "confirm" => Ok(ModalKind::Confirm),
            "delete" => Ok(ModalKind::Delete),
            "info" => Ok(ModalKind::Info),
            other => Err(NoticeParseError {
                family: "modal",
                value: other.to_string(),
            }),
        }
    }
}
