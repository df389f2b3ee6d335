use tracing::{debug, info, warn};

use crate::capabilities::Capabilities;
use crate::case_store::CaseStore;
use crate::event::{CaseId, Event};
use crate::filter::{self, AssigneeFilter, FilterOptions, MatchFilter, QueueFilter};
use crate::model::{Case, LoginForm, Model, User};
use crate::presentation::present;
use crate::selection::{DetailTab, NavSection, WorkspaceView};
use crate::sla::SlaBadge;
use crate::view::{
    CaseDetailScreen, FilterPanel, LoginView, NavItemView, QueueItemView, QueueView, ScreenView,
    SelectedFilters, TabView, UserBadge, UserFacingError, ViewModel, WorkspaceScreen,
};
use crate::{
    format_date_time, or_placeholder, AppError, ErrorKind, EMPTY_QUEUE_MESSAGE,
    LOGIN_REQUIRED_MESSAGE, UNASSIGNED_LABEL,
};

#[derive(Default)]
pub struct App;

impl App {
    fn load_cases(cases: Vec<Case>, model: &mut Model) {
        if model.store.is_loaded() {
            warn!(
                existing = model.store.len(),
                offered = cases.len(),
                "case store already populated; ignoring reload"
            );
            return;
        }

        match CaseStore::new(cases) {
            Ok(store) => {
                info!(cases = store.len(), "case store loaded");
                model.store = store;
            }
            Err(e) => {
                warn!(error = %e, "case store rejected");
                model.set_error(e.into());
            }
        }
    }

    fn submit_login(model: &mut Model) {
        if !model.login.is_complete() {
            debug!("login rejected: missing credentials");
            model.set_error(AppError::new(ErrorKind::Validation, LOGIN_REQUIRED_MESSAGE));
            return;
        }

        let user = User::stub(model.login.user_id.trim());
        model.clear_error();
        model.login = LoginForm::default();
        model.coordinator.login(user);
    }

    /// Looks a shell-supplied id up in the store. Unknown ids are caller bugs:
    /// they are reported and leave the selection state alone.
    fn known_case_id(model: &mut Model, raw: String, action: &str) -> Option<CaseId> {
        let id = CaseId::new(raw);
        if model.store.get(&id).is_some() {
            return Some(id);
        }
        warn!(case_id = %id, action, "unknown case id");
        model.set_error(
            AppError::new(ErrorKind::NotFound, format!("No case with id {id}"))
                .with_context("case_id", id.as_str())
                .with_context("action", action),
        );
        None
    }

    fn build_login(model: &Model) -> LoginView {
        LoginView {
            user_id: model.login.user_id.clone(),
            remember_me: model.login.remember_me,
            can_submit: model.login.is_complete(),
        }
    }

    fn build_queue_item(case: &Case, selected: Option<&CaseId>) -> QueueItemView {
        QueueItemView {
            id: case.id.to_string(),
            sla: SlaBadge::from(case.sla_status),
            sla_remaining: or_placeholder(Some(&case.sla_remaining)),
            broker: case.broker.clone(),
            queue: case.queue.clone(),
            classification_status: or_placeholder(Some(&case.classification_status)),
            transaction_type: or_placeholder(case.transaction_type.as_deref()),
            assignee: case
                .assignee
                .clone()
                .unwrap_or_else(|| UNASSIGNED_LABEL.to_string()),
            channel: or_placeholder(Some(&case.channel)),
            received: format_date_time(&case.received_date),
            is_selected: selected == Some(&case.id),
        }
    }

    fn build_queue(model: &Model, user: &User) -> QueueView {
        let criteria = model.coordinator.criteria();
        let selected = model.coordinator.selected_case_id();
        let visible = filter::apply(model.store.cases(), criteria, user);

        let items: Vec<QueueItemView> = visible
            .iter()
            .map(|case| Self::build_queue_item(case, selected))
            .collect();

        QueueView {
            filters: FilterPanel {
                options: FilterOptions::from_store(&model.store),
                selected: SelectedFilters {
                    queue: criteria.queue.option_value().to_string(),
                    assignee: criteria.assignee.option_value().to_string(),
                    broker: criteria.broker.option_value().to_string(),
                    transaction_type: criteria.transaction_type.option_value().to_string(),
                },
            },
            empty_message: items.is_empty().then(|| EMPTY_QUEUE_MESSAGE.to_string()),
            items,
            total_count: model.store.len(),
            filters_active: !criteria.is_default(),
        }
    }

    fn build_case_detail(model: &Model) -> Option<CaseDetailScreen> {
        let WorkspaceView::CaseDetail { case_id, tab } = model.coordinator.view() else {
            return None;
        };
        let case = model.store.get(case_id)?;
        let buffer = model.coordinator.buffer(case_id);

        let work_notes = buffer
            .and_then(|b| b.work_notes.clone())
            .or_else(|| case.interaction.work_notes.clone())
            .unwrap_or_default();
        let draft_note = buffer.map(|b| b.draft_note.clone()).unwrap_or_default();

        Some(CaseDetailScreen {
            active_tab: *tab,
            tabs: DetailTab::ALL
                .iter()
                .map(|t| TabView {
                    tab: *t,
                    label: t.label().to_string(),
                    is_active: t == tab,
                })
                .collect(),
            detail: present(case),
            work_notes,
            draft_note,
        })
    }

    fn build_workspace(model: &Model, user: &User) -> WorkspaceScreen {
        let section = model.coordinator.section();
        WorkspaceScreen {
            user: UserBadge {
                name: user.name.clone(),
                domain: user.domain.clone(),
                initials: user.initials(),
            },
            nav: NavSection::ALL
                .iter()
                .map(|s| NavItemView {
                    section: *s,
                    label: s.label().to_string(),
                    selected: *s == section,
                })
                .collect(),
            sidenav_expanded: model.coordinator.sidenav_expanded(),
            queue: Self::build_queue(model, user),
            detail: Self::build_case_detail(model),
        }
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        let event_name = event.name();

        if event.requires_session() && !model.is_authenticated() {
            warn!(event = event_name, "ignored: no active session");
            return;
        }
        if event.is_user_initiated() {
            debug!(event = event_name, "user action");
        }

        match event {
            Event::Noop => return,

            Event::CasesLoaded { cases } => Self::load_cases(cases, model),

            Event::LoginUserIdChanged { value } => model.login.user_id = value,
            Event::LoginPasswordChanged { value } => model.login.password = value,
            Event::RememberMeToggled { value } => model.login.remember_me = value,
            Event::LoginSubmitted => Self::submit_login(model),

            Event::LogoutRequested => {
                model.coordinator.logout();
                model.login = LoginForm::default();
                model.clear_error();
            }

            Event::NavigationSelected { section } => model.coordinator.navigate_to(section),
            Event::SidenavToggled => model.coordinator.toggle_sidenav(),

            Event::QueueFilterChanged { value } => model
                .coordinator
                .set_queue_filter(QueueFilter::from_option_value(&value)),
            Event::AssigneeFilterChanged { value } => model
                .coordinator
                .set_assignee_filter(AssigneeFilter::from_option_value(&value)),
            Event::BrokerFilterChanged { value } => model
                .coordinator
                .set_broker_filter(MatchFilter::from_option_value(&value)),
            Event::TransactionTypeFilterChanged { value } => model
                .coordinator
                .set_transaction_type_filter(MatchFilter::from_option_value(&value)),
            Event::FiltersReset => model.coordinator.reset_filters(),

            Event::CaseSelected { case_id } => {
                if let Some(id) = Self::known_case_id(model, case_id, "select") {
                    if let Some(case) = model.store.get(&id) {
                        model.coordinator.select_case(case);
                    }
                }
            }
            Event::CaseClosed => model.coordinator.close_case(),
            Event::TabSelected { tab } => {
                if let Err(e) = model.coordinator.set_active_tab(tab) {
                    warn!(error = %e, tab = tab.label(), "tab change rejected");
                    model.set_error(e.into());
                }
            }

            Event::WorkNotesEdited { case_id, text } => {
                if let Some(id) = Self::known_case_id(model, case_id, "edit_work_notes") {
                    model.coordinator.edit_work_notes(&id, text);
                }
            }
            Event::DraftNoteEdited { case_id, text } => {
                if let Some(id) = Self::known_case_id(model, case_id, "edit_draft_note") {
                    model.coordinator.edit_draft_note(&id, text);
                }
            }

            Event::DismissError => model.clear_error(),
        }

        caps.render.render();
    }

    fn view(&self, model: &Model) -> ViewModel {
        let screen = match model.coordinator.user() {
            None => ScreenView::Login(Self::build_login(model)),
            Some(user) => ScreenView::Workspace(Box::new(Self::build_workspace(model, user))),
        };

        ViewModel {
            screen,
            error: model.active_error.as_ref().map(UserFacingError::from),
            is_authenticated: model.is_authenticated(),
        }
    }
}
