// lib.rs - Triage workspace core

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_lines)]

pub mod app;
pub mod capabilities;
pub mod case_store;
pub mod event;
pub mod filter;
pub mod model;
pub mod presentation;
pub mod selection;
pub mod sla;
pub mod view;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use case_store::CaseStore;
pub use crux_core::{render::Render, App as CruxApp};
pub use event::{CaseId, Event};
pub use filter::{AssigneeFilter, FilterCriteria, FilterOptions, MatchFilter, QueueFilter};
pub use model::{Case, Model, ProcessingStage, SlaStatus, User};
pub use presentation::{present, DetailView};
pub use selection::{DetailTab, EditBuffer, NavSection, SelectionCoordinator, WorkspaceView};
pub use view::ViewModel;

pub const DOCUMENT_LABEL_MAX_CHARS: usize = 18;
pub const ELLIPSIS: &str = "...";
pub const PLACEHOLDER: &str = "\u{2014}";
pub const FALLBACK_PROGRESS: f64 = 0.1;
pub const DATE_TIME_FORMAT: &str = "%d %b %Y, %H:%M";
pub const EMPTY_QUEUE_MESSAGE: &str = "No cases match the current filters.";
pub const LOGIN_REQUIRED_MESSAGE: &str = "Please enter both User ID and Password.";
pub const UNASSIGNED_LABEL: &str = "Unassigned";

pub const STUB_USER_NAME: &str = "John Smith";
pub const STUB_USER_EMAIL: &str = "john.smith@dxc.com";
pub const STUB_USER_DOMAIN: &str = "Insurance Services";
pub const STUB_USER_ROLE: &str = "Broker Assistant";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Deserialization,
    InvalidState,
}

impl ErrorKind {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::Deserialization => "DESERIALIZATION_ERROR",
            Self::InvalidState => "INVALID_STATE",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
    pub context: HashMap<String, String>,
}

impl AppError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.kind.code()
    }

    #[must_use]
    pub fn user_facing_message(&self) -> String {
        match self.kind {
            ErrorKind::Validation => self.message.clone(),
            ErrorKind::NotFound => "The requested case could not be found.".into(),
            ErrorKind::Conflict | ErrorKind::Deserialization => {
                "The case data could not be loaded. Please contact support if this persists."
                    .into()
            }
            ErrorKind::InvalidState => {
                "That action is not available right now. Please try again.".into()
            }
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message)
    }
}

impl std::error::Error for AppError {}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Duplicate case identifier: {0}")]
    DuplicateCaseId(String),
    #[error("Case data could not be parsed: {0}")]
    Malformed(String),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        let kind = match &e {
            StoreError::DuplicateCaseId(_) => ErrorKind::Conflict,
            StoreError::Malformed(_) => ErrorKind::Deserialization,
        };
        AppError::new(kind, e.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TabError {
    #[error("Tab index {0} is out of range [0, 5]")]
    OutOfRange(usize),
    #[error("No case is open")]
    NoCaseOpen,
}

impl From<TabError> for AppError {
    fn from(e: TabError) -> Self {
        let kind = match e {
            TabError::OutOfRange(_) => ErrorKind::Validation,
            TabError::NoCaseOpen => ErrorKind::InvalidState,
        };
        AppError::new(kind, e.to_string())
    }
}

/// Optional text as shown to the user: absent or blank becomes the dash.
#[must_use]
pub fn or_placeholder<S: AsRef<str>>(value: Option<S>) -> String {
    match value {
        Some(v) if !v.as_ref().trim().is_empty() => v.as_ref().to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

#[must_use]
pub fn format_date_time(ts: &DateTime<Utc>) -> String {
    ts.format(DATE_TIME_FORMAT).to_string()
}

#[must_use]
pub fn format_optional_date_time(ts: Option<&DateTime<Utc>>) -> String {
    ts.map_or_else(|| PLACEHOLDER.to_string(), format_date_time)
}

/// Shortens `label` to `max_chars` characters plus [`ELLIPSIS`]. Counts chars, not bytes.
#[must_use]
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    match label.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &label[..cut]),
        None => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    mod format_tests {
        use super::*;

        #[test]
        fn test_truncate_long_label() {
            let name = "Motor_Fleet_Schedule_2025";
            assert_eq!(name.chars().count(), 25);
            assert_eq!(
                truncate_label(name, DOCUMENT_LABEL_MAX_CHARS),
                "Motor_Fleet_Schedu..."
            );
        }

        #[test]
        fn test_truncate_short_label_unchanged() {
            assert_eq!(truncate_label("policy.pdf", DOCUMENT_LABEL_MAX_CHARS), "policy.pdf");
        }

        #[test]
        fn test_truncate_exact_length_unchanged() {
            let name = "a".repeat(DOCUMENT_LABEL_MAX_CHARS);
            assert_eq!(truncate_label(&name, DOCUMENT_LABEL_MAX_CHARS), name);
        }

        #[test]
        fn test_truncate_multibyte() {
            let name = "é".repeat(20);
            let out = truncate_label(&name, DOCUMENT_LABEL_MAX_CHARS);
            assert_eq!(out, format!("{}{ELLIPSIS}", "é".repeat(18)));
        }

        #[test]
        fn test_placeholder() {
            assert_eq!(or_placeholder(None::<&str>), PLACEHOLDER);
            assert_eq!(or_placeholder(Some("")), PLACEHOLDER);
            assert_eq!(or_placeholder(Some("   ")), PLACEHOLDER);
            assert_eq!(or_placeholder(Some("MTA")), "MTA");
        }

        #[test]
        fn test_format_date_time() {
            let ts = Utc.with_ymd_and_hms(2025, 3, 12, 9, 14, 0).unwrap();
            assert_eq!(format_date_time(&ts), "12 Mar 2025, 09:14");
            assert_eq!(format_optional_date_time(None), PLACEHOLDER);
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_store_error_kinds() {
            let e: AppError = StoreError::DuplicateCaseId("SUB-1".into()).into();
            assert_eq!(e.kind, ErrorKind::Conflict);
            assert_eq!(e.code(), "CONFLICT");

            let e: AppError = StoreError::Malformed("eof".into()).into();
            assert_eq!(e.kind, ErrorKind::Deserialization);
        }

        #[test]
        fn test_tab_error_kinds() {
            let e: AppError = TabError::OutOfRange(9).into();
            assert_eq!(e.kind, ErrorKind::Validation);
            assert!(e.message.contains('9'));

            let e: AppError = TabError::NoCaseOpen.into();
            assert_eq!(e.kind, ErrorKind::InvalidState);
        }

        #[test]
        fn test_validation_message_is_user_facing() {
            let e = AppError::new(ErrorKind::Validation, LOGIN_REQUIRED_MESSAGE);
            assert_eq!(e.user_facing_message(), LOGIN_REQUIRED_MESSAGE);
            assert_eq!(e.to_string(), format!("[VALIDATION_ERROR] {LOGIN_REQUIRED_MESSAGE}"));
        }
    }
}
