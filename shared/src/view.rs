use serde::Serialize;

use crate::filter::FilterOptions;
use crate::presentation::DetailView;
use crate::selection::{DetailTab, NavSection};
use crate::sla::SlaBadge;
use crate::AppError;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct UserFacingError {
    pub message: String,
    pub error_code: String,
}

impl From<&AppError> for UserFacingError {
    fn from(e: &AppError) -> Self {
        Self {
            message: e.user_facing_message(),
            error_code: e.code().to_string(),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct LoginView {
    pub user_id: String,
    pub remember_me: bool,
    pub can_submit: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct UserBadge {
    pub name: String,
    pub domain: String,
    pub initials: String,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct NavItemView {
    pub section: NavSection,
    pub label: String,
    pub selected: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SelectedFilters {
    pub queue: String,
    pub assignee: String,
    pub broker: String,
    pub transaction_type: String,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FilterPanel {
    pub options: FilterOptions,
    pub selected: SelectedFilters,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct QueueItemView {
    pub id: String,
    pub sla: SlaBadge,
    pub sla_remaining: String,
    pub broker: String,
    pub queue: String,
    pub classification_status: String,
    pub transaction_type: String,
    pub assignee: String,
    pub channel: String,
    pub received: String,
    pub is_selected: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct QueueView {
    pub filters: FilterPanel,
    pub items: Vec<QueueItemView>,
    pub total_count: usize,
    /// False when every selector is at its match-all default.
    pub filters_active: bool,
    pub empty_message: Option<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TabView {
    pub tab: DetailTab,
    pub label: String,
    pub is_active: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CaseDetailScreen {
    pub active_tab: DetailTab,
    pub tabs: Vec<TabView>,
    pub detail: DetailView,
    pub work_notes: String,
    pub draft_note: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WorkspaceScreen {
    pub user: UserBadge,
    pub nav: Vec<NavItemView>,
    pub sidenav_expanded: bool,
    pub queue: QueueView,
    pub detail: Option<CaseDetailScreen>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScreenView {
    Login(LoginView),
    Workspace(Box<WorkspaceScreen>),
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ViewModel {
    pub screen: ScreenView,
    pub error: Option<UserFacingError>,
    pub is_authenticated: bool,
}
