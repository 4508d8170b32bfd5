use super::*;
use pretty_assertions::assert_eq;

fn fill_report(state: &mut AppState, description: &str) {
    run(state, UserAction::OpenReportForm);
    // category, location, priority, description
    run(state, UserAction::FormNextField);
    run(state, UserAction::FormNextField);
    run(state, UserAction::FormCycle { forward: true });
    run(state, UserAction::FormNextField);
    type_text(state, description);
}

#[test]
fn new_report_is_prepended_as_open() {
    let mut state = logged_in(Role::Student);
    let previous_first = student(&state).issues.as_slice()[0].clone();

    fill_report(&mut state, "Projector is dead in LH-2");
    let effects = run(&mut state, UserAction::FormSubmit);

    assert_eq!(
        toasts(&effects),
        vec![("Issue reported successfully!", ToastLevel::Success)]
    );
    let issues = student(&state).issues.as_slice();
    assert_eq!(issues.len(), 4);
    assert_eq!(issues[0].id, "4");
    assert_eq!(issues[0].status, IssueStatus::Open);
    assert_eq!(issues[0].priority, Priority::Low);
    assert_eq!(issues[0].category, "Electrical");
    assert_eq!(issues[0].location, "Main Campus");
    assert_eq!(issues[0].date, today());
    assert_eq!(issues[0].reporter, "Alex Johnson");
    assert_eq!(issues[1], previous_first);
    assert!(student(&state).report_form.is_none());
}

#[test]
fn empty_description_creates_nothing() {
    let mut state = logged_in(Role::Student);
    fill_report(&mut state, "   ");

    let effects = run(&mut state, UserAction::FormSubmit);

    assert!(toasts(&effects).is_empty());
    let dashboard = student(&state);
    assert_eq!(dashboard.issues.len(), 3);
    let form = dashboard.report_form.as_ref().expect("form stays open");
    assert!(form.errors.has(FieldId::Description));
    assert_eq!(form.priority, Some(Priority::Low));
}

#[test]
fn typed_location_is_kept() {
    let mut state = logged_in(Role::Student);
    run(&mut state, UserAction::OpenReportForm);
    run(&mut state, UserAction::FormNextField);
    type_text(&mut state, "Hostel C");
    run(&mut state, UserAction::FormNextField);
    run(&mut state, UserAction::FormCycle { forward: false });
    run(&mut state, UserAction::FormNextField);
    type_text(&mut state, "Fan rattles");
    run(&mut state, UserAction::FormSubmit);

    let first = &student(&state).issues.as_slice()[0];
    assert_eq!(first.location, "Hostel C");
    assert_eq!(first.priority, Priority::High);
}

#[test]
fn ids_are_not_deduplicated() {
    let mut state = logged_in(Role::Student);
    for description in ["first", "second"] {
        fill_report(&mut state, description);
        run(&mut state, UserAction::FormSubmit);
    }
    let ids: Vec<&str> = student(&state)
        .issues
        .iter()
        .map(|issue| issue.id.as_str())
        .collect();
    assert_eq!(ids, vec!["5", "4", "1", "2", "3"]);
}

#[test]
fn cancel_discards_the_form() {
    let mut state = logged_in(Role::Student);
    fill_report(&mut state, "draft");
    run(&mut state, UserAction::FormCancel);

    assert!(student(&state).report_form.is_none());
    assert_eq!(student(&state).issues.len(), 3);
}

#[test]
fn opening_an_issue_from_home_switches_to_reports() {
    let mut state = logged_in(Role::Student);
    run(&mut state, UserAction::CursorDown);
    run(&mut state, UserAction::Activate);

    assert_eq!(screen(&state), Screen::Reports);
    assert_eq!(
        student(&state).selected().map(|issue| issue.id.as_str()),
        Some("2")
    );

    run(&mut state, UserAction::CloseIssue);
    assert!(student(&state).selected().is_none());
}

#[test]
fn opening_unknown_issue_is_a_no_op() {
    let mut state = logged_in(Role::Student);
    let effects = run(&mut state, UserAction::OpenIssue { id: "99".to_string() });
    assert!(effects.is_empty());
    assert_eq!(screen(&state), Screen::Home);
}

#[test]
fn report_search_matches_description_and_location() {
    let mut state = logged_in(Role::Student);
    run(&mut state, UserAction::Navigate(Screen::Reports));
    run(&mut state, UserAction::FocusSearch);
    for ch in "HOSTEL".chars() {
        run(&mut state, UserAction::SearchInput(ch));
    }

    let dashboard = state.dashboard.as_ref().expect("dashboard");
    let visible: Vec<&str> = student(&state)
        .filtered(&dashboard.shell.search)
        .iter()
        .map(|issue| issue.id.as_str())
        .collect();
    assert_eq!(visible, vec!["2"]);
}

#[test]
fn stats_follow_new_reports() {
    let mut state = logged_in(Role::Student);
    fill_report(&mut state, "Door hinge loose");
    run(&mut state, UserAction::FormSubmit);

    let stats = student(&state).stats();
    assert_eq!((stats.total, stats.active, stats.completed), (4, 3, 1));
}
