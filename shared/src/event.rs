use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::Case;
use crate::selection::{DetailTab, NavSection};

// --- Typed IDs ---

macro_rules! typed_id {
    ($name:ident) => {
        #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

typed_id!(CaseId);
typed_id!(UserId);

// --- Events sent by the shell ---

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub enum Event {
    #[default]
    Noop,

    CasesLoaded {
        cases: Vec<Case>,
    },

    LoginUserIdChanged {
        value: String,
    },
    LoginPasswordChanged {
        value: String,
    },
    RememberMeToggled {
        value: bool,
    },
    LoginSubmitted,
    LogoutRequested,

    NavigationSelected {
        section: NavSection,
    },
    SidenavToggled,

    QueueFilterChanged {
        value: String,
    },
    AssigneeFilterChanged {
        value: String,
    },
    BrokerFilterChanged {
        value: String,
    },
    TransactionTypeFilterChanged {
        value: String,
    },
    FiltersReset,

    CaseSelected {
        case_id: String,
    },
    CaseClosed,
    TabSelected {
        tab: DetailTab,
    },

    WorkNotesEdited {
        case_id: String,
        text: String,
    },
    DraftNoteEdited {
        case_id: String,
        text: String,
    },

    DismissError,
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Noop => "noop",
            Self::CasesLoaded { .. } => "cases_loaded",
            Self::LoginUserIdChanged { .. } => "login_user_id_changed",
            Self::LoginPasswordChanged { .. } => "login_password_changed",
            Self::RememberMeToggled { .. } => "remember_me_toggled",
            Self::LoginSubmitted => "login_submitted",
            Self::LogoutRequested => "logout_requested",
            Self::NavigationSelected { .. } => "navigation_selected",
            Self::SidenavToggled => "sidenav_toggled",
            Self::QueueFilterChanged { .. } => "queue_filter_changed",
            Self::AssigneeFilterChanged { .. } => "assignee_filter_changed",
            Self::BrokerFilterChanged { .. } => "broker_filter_changed",
            Self::TransactionTypeFilterChanged { .. } => "transaction_type_filter_changed",
            Self::FiltersReset => "filters_reset",
            Self::CaseSelected { .. } => "case_selected",
            Self::CaseClosed => "case_closed",
            Self::TabSelected { .. } => "tab_selected",
            Self::WorkNotesEdited { .. } => "work_notes_edited",
            Self::DraftNoteEdited { .. } => "draft_note_edited",
            Self::DismissError => "dismiss_error",
        }
    }

    #[must_use]
    pub const fn is_user_initiated(&self) -> bool {
        !matches!(self, Self::Noop | Self::CasesLoaded { .. })
    }

    /// Workspace events mean nothing until somebody has signed in.
    #[must_use]
    pub const fn requires_session(&self) -> bool {
        !matches!(
            self,
            Self::Noop
                | Self::CasesLoaded { .. }
                | Self::LoginUserIdChanged { .. }
                | Self::LoginPasswordChanged { .. }
                | Self::RememberMeToggled { .. }
                | Self::LoginSubmitted
                | Self::DismissError
        )
    }
}
