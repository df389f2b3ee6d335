//! Session UI state: who is signed in, what the queue is filtered by, which
//! case is open on which tab, and the unsaved text typed into each case.
//!
//! Edit buffers are keyed by case id, created on first edit and kept until
//! logout. They are never written back to the [`CaseStore`](crate::CaseStore).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

use crate::event::CaseId;
use crate::filter::{AssigneeFilter, FilterCriteria, MatchFilter, QueueFilter};
use crate::model::{Case, User};
use crate::TabError;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DetailTab {
    #[default]
    Overview,
    Documents,
    Timeline,
    Classification,
    Integrations,
    Admin,
}

impl DetailTab {
    pub const ALL: [Self; 6] = [
        Self::Overview,
        Self::Documents,
        Self::Timeline,
        Self::Classification,
        Self::Integrations,
        Self::Admin,
    ];

    pub fn from_index(index: usize) -> Result<Self, TabError> {
        Self::ALL.get(index).copied().ok_or(TabError::OutOfRange(index))
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Documents => "Documents",
            Self::Timeline => "Timeline",
            Self::Classification => "Classification",
            Self::Integrations => "Integrations",
            Self::Admin => "Admin",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum NavSection {
    #[default]
    SubmissionIntake,
    Triage,
    Fulfilment,
    GeneralEnquiries,
}

impl NavSection {
    pub const ALL: [Self; 4] = [
        Self::SubmissionIntake,
        Self::Triage,
        Self::Fulfilment,
        Self::GeneralEnquiries,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SubmissionIntake => "Submission Intake",
            Self::Triage => "Triage",
            Self::Fulfilment => "Fulfilment",
            Self::GeneralEnquiries => "General Enquiries",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum WorkspaceView {
    #[default]
    Queue,
    CaseDetail { case_id: CaseId, tab: DetailTab },
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct EditBuffer {
    /// `None` until the user touches the work-notes editor.
    pub work_notes: Option<String>,
    pub draft_note: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionCoordinator {
    user: Option<User>,
    criteria: FilterCriteria,
    view: WorkspaceView,
    section: NavSection,
    sidenav_expanded: bool,
    buffers: HashMap<CaseId, EditBuffer>,
}

impl Default for SelectionCoordinator {
    fn default() -> Self {
        Self {
            user: None,
            criteria: FilterCriteria::default(),
            view: WorkspaceView::Queue,
            section: NavSection::SubmissionIntake,
            sidenav_expanded: true,
            buffers: HashMap::new(),
        }
    }
}

impl SelectionCoordinator {
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[must_use]
    pub fn view(&self) -> &WorkspaceView {
        &self.view
    }

    #[must_use]
    pub fn section(&self) -> NavSection {
        self.section
    }

    #[must_use]
    pub fn sidenav_expanded(&self) -> bool {
        self.sidenav_expanded
    }

    #[must_use]
    pub fn selected_case_id(&self) -> Option<&CaseId> {
        match &self.view {
            WorkspaceView::Queue => None,
            WorkspaceView::CaseDetail { case_id, .. } => Some(case_id),
        }
    }

    #[must_use]
    pub fn active_tab(&self) -> Option<DetailTab> {
        match self.view {
            WorkspaceView::Queue => None,
            WorkspaceView::CaseDetail { tab, .. } => Some(tab),
        }
    }

    #[must_use]
    pub fn buffer(&self, case_id: &CaseId) -> Option<&EditBuffer> {
        self.buffers.get(case_id)
    }

    pub fn login(&mut self, user: User) {
        info!(user_id = %user.user_id, "session started");
        self.user = Some(user);
        self.view = WorkspaceView::Queue;
    }

    /// Back to the initial state: no user, no selection, no buffers, no filters.
    pub fn logout(&mut self) {
        info!(buffers = self.buffers.len(), "session ended");
        *self = Self::default();
    }

    /// Opens `case` on the Overview tab, whatever tab was showing before.
    pub fn select_case(&mut self, case: &Case) {
        debug!(case_id = %case.id, "case selected");
        self.view = WorkspaceView::CaseDetail {
            case_id: case.id.clone(),
            tab: DetailTab::Overview,
        };
    }

    pub fn close_case(&mut self) {
        if let WorkspaceView::CaseDetail { case_id, .. } = &self.view {
            debug!(case_id = %case_id, "case closed");
        }
        self.view = WorkspaceView::Queue;
    }

    pub fn set_active_tab(&mut self, tab: DetailTab) -> Result<(), TabError> {
        match &mut self.view {
            WorkspaceView::CaseDetail { tab: current, case_id } => {
                debug!(case_id = %case_id, tab = tab.label(), "tab changed");
                *current = tab;
                Ok(())
            }
            WorkspaceView::Queue => Err(TabError::NoCaseOpen),
        }
    }

    /// Every side-navigation entry lands on the same queue view.
    pub fn navigate_to(&mut self, section: NavSection) {
        debug!(section = section.label(), "navigation");
        self.view = WorkspaceView::Queue;
        self.section = NavSection::SubmissionIntake;
    }

    pub fn toggle_sidenav(&mut self) {
        self.sidenav_expanded = !self.sidenav_expanded;
    }

    pub fn edit_work_notes(&mut self, case_id: &CaseId, text: String) {
        self.buffers.entry(case_id.clone()).or_default().work_notes = Some(text);
    }

    pub fn edit_draft_note(&mut self, case_id: &CaseId, text: String) {
        self.buffers.entry(case_id.clone()).or_default().draft_note = text;
    }

    pub fn set_queue_filter(&mut self, filter: QueueFilter) {
        debug!(queue = filter.option_value(), "queue filter");
        self.criteria.queue = filter;
    }

    pub fn set_assignee_filter(&mut self, filter: AssigneeFilter) {
        debug!(assignee = filter.option_value(), "assignee filter");
        self.criteria.assignee = filter;
    }

    pub fn set_broker_filter(&mut self, filter: MatchFilter) {
        debug!(broker = filter.option_value(), "broker filter");
        self.criteria.broker = filter;
    }

    pub fn set_transaction_type_filter(&mut self, filter: MatchFilter) {
        debug!(transaction_type = filter.option_value(), "transaction type filter");
        self.criteria.transaction_type = filter;
    }

    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
    }
}
