use crux_core::testing::AppTester;
use triage_shared::view::{QueueView, ScreenView};
use triage_shared::{CaseStore, Effect, Event, Model, User, EMPTY_QUEUE_MESSAGE, PLACEHOLDER};

fn signed_in() -> (AppTester<triage_shared::App, Effect>, Model) {
    let app = AppTester::<triage_shared::App, Effect>::default();
    let mut model = Model::default();
    app.update(
        Event::CasesLoaded { cases: CaseStore::demo().unwrap().cases().to_vec() },
        &mut model,
    );
    model.coordinator.login(User::stub("jsmith"));
    (app, model)
}

fn queue(app: &AppTester<triage_shared::App, Effect>, model: &Model) -> QueueView {
    match app.view(model).screen {
        ScreenView::Workspace(ws) => ws.queue,
        ScreenView::Login(_) => panic!("expected workspace"),
    }
}

fn ids(view: &QueueView) -> Vec<&str> {
    view.items.iter().map(|i| i.id.as_str()).collect()
}

#[test]
fn test_default_filters_show_everything_in_store_order() {
    let (app, model) = signed_in();
    let view = queue(&app, &model);
    assert_eq!(
        ids(&view),
        vec!["SUB-1042", "SUB-1043", "SUB-1044", "SUB-1045", "SUB-1046", "SUB-1047"]
    );
    assert!(!view.filters_active);
    assert!(view.empty_message.is_none());
    assert_eq!(view.filters.selected.queue, "All");
}

#[test]
fn test_filters_combine() {
    let (app, mut model) = signed_in();

    app.update(Event::AssigneeFilterChanged { value: "Me".into() }, &mut model);
    assert_eq!(ids(&queue(&app, &model)), vec!["SUB-1042", "SUB-1045"]);

    let update = app.update(Event::QueueFilterChanged { value: "Triage".into() }, &mut model);
    assert!(update.effects.iter().any(|e| matches!(e, Effect::Render(_))));
    assert_eq!(ids(&queue(&app, &model)), vec!["SUB-1045"]);

    app.update(Event::FiltersReset, &mut model);
    assert_eq!(queue(&app, &model).items.len(), 6);
}

#[test]
fn test_unassigned_and_broker_filters() {
    let (app, mut model) = signed_in();

    app.update(Event::AssigneeFilterChanged { value: "Unassigned".into() }, &mut model);
    assert_eq!(
        ids(&queue(&app, &model)),
        vec!["SUB-1043", "SUB-1046", "SUB-1047"]
    );

    app.update(Event::BrokerFilterChanged { value: "Aon".into() }, &mut model);
    assert_eq!(ids(&queue(&app, &model)), vec!["SUB-1043", "SUB-1047"]);

    app.update(Event::TransactionTypeFilterChanged { value: "Renewal".into() }, &mut model);
    assert_eq!(ids(&queue(&app, &model)), vec!["SUB-1043"]);
}

#[test]
fn test_no_matches_shows_empty_message() {
    let (app, mut model) = signed_in();
    app.update(Event::QueueFilterChanged { value: "Claims".into() }, &mut model);
    let view = queue(&app, &model);
    assert!(view.items.is_empty());
    assert!(view.filters_active);
    assert_eq!(view.empty_message.as_deref(), Some(EMPTY_QUEUE_MESSAGE));
}

#[test]
fn test_queue_rows_render_badges_and_placeholders() {
    let (app, model) = signed_in();
    let view = queue(&app, &model);

    let breached = &view.items[2];
    assert_eq!(breached.sla.label, "Breached");
    assert_eq!(breached.sla.color.hex(), "#D0021B");

    // Unrecognised SLA text degrades to the neutral badge.
    let enquiry = &view.items[5];
    assert_eq!(enquiry.sla.color.hex(), "#999999");
    assert_eq!(enquiry.transaction_type, PLACEHOLDER);
    assert_eq!(enquiry.sla_remaining, PLACEHOLDER);
    assert_eq!(enquiry.assignee, "Unassigned");

    assert_eq!(view.items[0].received, "12 Mar 2025, 09:14");
}

#[test]
fn test_filter_options_come_from_loaded_cases() {
    let (app, model) = signed_in();
    let options = queue(&app, &model).filters.options;

    let queues: Vec<&str> = options.queues.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(
        queues,
        vec!["All", "Submission Intake", "Triage", "Fulfilment", "General Enquiries"]
    );
    let brokers: Vec<&str> = options.brokers.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(brokers[1..], ["Marsh", "Aon", "Willis Towers Watson", "Gallagher"]);
}
