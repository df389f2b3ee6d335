use crux_core::testing::AppTester;
use triage_shared::view::ScreenView;
use triage_shared::{
    CaseId, CaseStore, DetailTab, Effect, Event, Model, NavSection, WorkspaceView, LOGIN_REQUIRED_MESSAGE,
    STUB_USER_NAME,
};

fn demo_model() -> Model {
    Model::with_store(CaseStore::demo().unwrap())
}

#[test]
fn test_login_flow() {
    let app = AppTester::<triage_shared::App, Effect>::default();
    let mut model = demo_model();

    assert!(!model.is_authenticated());
    assert!(matches!(app.view(&model).screen, ScreenView::Login(_)));

    // Missing password
    app.update(Event::LoginUserIdChanged { value: "jsmith".into() }, &mut model);
    let update = app.update(Event::LoginSubmitted, &mut model);
    assert!(update.effects.iter().any(|e| matches!(e, Effect::Render(_))));
    assert!(!model.is_authenticated());
    let vm = app.view(&model);
    assert_eq!(vm.error.unwrap().message, LOGIN_REQUIRED_MESSAGE);

    app.update(Event::LoginPasswordChanged { value: "hunter2".into() }, &mut model);
    app.update(Event::RememberMeToggled { value: true }, &mut model);
    let update = app.update(Event::LoginSubmitted, &mut model);
    assert!(update.effects.iter().any(|e| matches!(e, Effect::Render(_))));
    assert!(model.is_authenticated());
    assert!(model.login.password.is_empty());
    assert!(model.active_error.is_none());

    let vm = app.view(&model);
    assert!(vm.is_authenticated);
    match vm.screen {
        ScreenView::Workspace(ws) => {
            assert_eq!(ws.user.name, STUB_USER_NAME);
            assert_eq!(ws.user.initials, "JS");
            assert!(ws.sidenav_expanded);
            assert!(ws.detail.is_none());
            assert_eq!(ws.nav.len(), NavSection::ALL.len());
            assert!(ws.nav[0].selected);
        }
        ScreenView::Login(_) => panic!("expected workspace after login"),
    }
}

#[test]
fn test_logout_clears_session() {
    let app = AppTester::<triage_shared::App, Effect>::default();
    let mut model = demo_model();

    app.update(Event::LoginUserIdChanged { value: "jsmith".into() }, &mut model);
    app.update(Event::LoginPasswordChanged { value: "pw".into() }, &mut model);
    app.update(Event::LoginSubmitted, &mut model);
    app.update(Event::AssigneeFilterChanged { value: "Me".into() }, &mut model);
    app.update(Event::CaseSelected { case_id: "SUB-1042".into() }, &mut model);
    app.update(
        Event::DraftNoteEdited { case_id: "SUB-1042".into(), text: "call broker".into() },
        &mut model,
    );

    let update = app.update(Event::LogoutRequested, &mut model);
    assert!(update.effects.iter().any(|e| matches!(e, Effect::Render(_))));
    assert!(!model.is_authenticated());
    assert_eq!(model.coordinator.view(), &WorkspaceView::Queue);
    assert!(model.coordinator.criteria().is_default());
    assert!(model.coordinator.buffer(&CaseId::new("SUB-1042")).is_none());
    assert!(matches!(app.view(&model).screen, ScreenView::Login(_)));

    // Cases survive a logout.
    assert_eq!(model.store.len(), 6);
}

#[test]
fn test_case_navigation_flow() {
    let app = AppTester::<triage_shared::App, Effect>::default();
    let mut model = demo_model();
    app.update(Event::LoginUserIdChanged { value: "jsmith".into() }, &mut model);
    app.update(Event::LoginPasswordChanged { value: "pw".into() }, &mut model);
    app.update(Event::LoginSubmitted, &mut model);

    app.update(Event::CaseSelected { case_id: "SUB-1044".into() }, &mut model);
    assert_eq!(model.coordinator.active_tab(), Some(DetailTab::Overview));

    app.update(Event::TabSelected { tab: DetailTab::Integrations }, &mut model);
    let vm = app.view(&model);
    let ScreenView::Workspace(ws) = vm.screen else {
        panic!("expected workspace");
    };
    let detail = ws.detail.unwrap();
    assert_eq!(detail.active_tab, DetailTab::Integrations);
    assert_eq!(detail.tabs.iter().filter(|t| t.is_active).count(), 1);
    assert_eq!(
        detail.detail.integrations.last_error.as_deref(),
        Some("AO-422: Vehicle registration already on cover")
    );
    assert_eq!(detail.detail.integrations.ao.status_color.hex(), "#D0021B");

    // Selecting another case always starts on Overview.
    app.update(Event::CaseSelected { case_id: "SUB-1046".into() }, &mut model);
    assert_eq!(model.coordinator.active_tab(), Some(DetailTab::Overview));

    app.update(Event::NavigationSelected { section: NavSection::Triage }, &mut model);
    assert_eq!(model.coordinator.view(), &WorkspaceView::Queue);

    app.update(Event::SidenavToggled, &mut model);
    assert!(!model.coordinator.sidenav_expanded());
}

#[test]
fn test_work_notes_buffer_is_per_case() {
    let app = AppTester::<triage_shared::App, Effect>::default();
    let mut model = demo_model();
    app.update(Event::LoginUserIdChanged { value: "jsmith".into() }, &mut model);
    app.update(Event::LoginPasswordChanged { value: "pw".into() }, &mut model);
    app.update(Event::LoginSubmitted, &mut model);

    app.update(Event::CaseSelected { case_id: "SUB-1042".into() }, &mut model);
    app.update(
        Event::WorkNotesEdited { case_id: "SUB-1042".into(), text: "edited notes".into() },
        &mut model,
    );
    app.update(Event::CaseSelected { case_id: "SUB-1043".into() }, &mut model);

    let ScreenView::Workspace(ws) = app.view(&model).screen else {
        panic!("expected workspace");
    };
    assert_eq!(ws.detail.unwrap().work_notes, "");

    app.update(Event::CaseSelected { case_id: "SUB-1042".into() }, &mut model);
    let ScreenView::Workspace(ws) = app.view(&model).screen else {
        panic!("expected workspace");
    };
    assert_eq!(ws.detail.unwrap().work_notes, "edited notes");
}
