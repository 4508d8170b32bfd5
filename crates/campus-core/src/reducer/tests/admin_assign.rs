use super::*;
use pretty_assertions::assert_eq;

fn assign_to_mike_tech(state: &mut AppState) -> Vec<CampusEffect> {
    run(state, UserAction::QuickAssign { id: "R-109".to_string() });
    // Mike Tech is the last option.
    run(state, UserAction::FormCycle { forward: false });
    run(state, UserAction::FormSubmit)
}

#[test]
fn quick_assign_selects_and_switches_screen() {
    let mut state = logged_in(Role::Admin);
    run(&mut state, UserAction::Navigate(Screen::AllReports));

    run(&mut state, UserAction::QuickAssign { id: "R-221".to_string() });

    assert_eq!(screen(&state), Screen::Assign);
    assert_eq!(
        admin(&state).selected().map(|issue| issue.id.as_str()),
        Some("R-221")
    );
}

#[test]
fn assigning_r109_updates_only_that_issue() {
    let mut state = logged_in(Role::Admin);
    let before = admin(&state).issues.clone();

    let effects = assign_to_mike_tech(&mut state);

    assert_eq!(
        toasts(&effects),
        vec![("Issue assigned successfully!", ToastLevel::Success)]
    );
    let after = &admin(&state).issues;
    let matches: Vec<_> = after.iter().filter(|issue| issue.id == "R-109").collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].assigned_to.as_deref(), Some("Mike Tech"));
    assert_eq!(matches[0].status, IssueStatus::InProgress);
    assert_eq!(matches[0].priority, Priority::Medium);
    for (old, new) in before.iter().zip(after.iter()) {
        if old.id != "R-109" {
            assert_eq!(old, new);
        }
    }
    assert!(admin(&state).assign.is_none());
    assert_eq!(admin(&state).unassigned_count(), 1);
}

#[test]
fn repeating_the_same_assignment_is_idempotent() {
    let mut state = logged_in(Role::Admin);
    assign_to_mike_tech(&mut state);
    let once = admin(&state).issues.clone();

    assign_to_mike_tech(&mut state);

    assert_eq!(admin(&state).issues, once);
}

#[test]
fn submit_without_technician_changes_nothing() {
    let mut state = logged_in(Role::Admin);
    let before = admin(&state).issues.clone();
    run(&mut state, UserAction::QuickAssign { id: "R-109".to_string() });

    let effects = run(&mut state, UserAction::FormSubmit);

    assert!(toasts(&effects).is_empty());
    assert_eq!(admin(&state).issues, before);
    let form = admin(&state).assign.as_ref().expect("form stays open");
    assert!(form.errors.has(FieldId::Technician));
}

#[test]
fn urgency_override_replaces_priority() {
    let mut state = logged_in(Role::Admin);
    run(&mut state, UserAction::QuickAssign { id: "R-556".to_string() });
    run(&mut state, UserAction::FormCycle { forward: true });
    run(&mut state, UserAction::FormNextField);
    // none -> standard -> medium -> high -> critical
    for _ in 0..4 {
        run(&mut state, UserAction::FormCycle { forward: true });
    }
    assert_eq!(
        admin(&state).assign.as_ref().and_then(|form| form.urgency),
        Some(Urgency::Critical)
    );

    run(&mut state, UserAction::FormSubmit);

    let issue = admin(&state).issues.get("R-556").expect("seeded issue");
    assert_eq!(issue.assigned_to.as_deref(), Some("John Mechanic"));
    assert_eq!(issue.priority, Priority::High);
}

#[test]
fn cancel_returns_to_repository_and_keeps_selection() {
    let mut state = logged_in(Role::Admin);
    run(&mut state, UserAction::QuickAssign { id: "R-109".to_string() });
    run(&mut state, UserAction::FormCancel);

    assert_eq!(screen(&state), Screen::AllReports);
    assert!(admin(&state).assign.is_some());

    run(&mut state, UserAction::ClearAssignSelection);
    assert!(admin(&state).assign.is_none());
}

#[test]
fn repository_filter_matches_reporter_id_and_category() {
    let state = logged_in(Role::Admin);
    let ids = |query: &str| -> Vec<String> {
        admin(&state)
            .filtered(query)
            .iter()
            .map(|issue| issue.id.clone())
            .collect()
    };

    assert_eq!(ids("emma"), vec!["R-221"]);
    assert_eq!(ids("r-5"), vec!["R-556"]);
    assert_eq!(ids("CLEAN"), vec!["R-556"]);
    assert_eq!(ids("").len(), 5);
    assert!(ids("Mike").is_empty());
}

#[test]
fn activating_a_repository_row_opens_dispatch() {
    let mut state = logged_in(Role::Admin);
    run(&mut state, UserAction::Navigate(Screen::AllReports));
    run(&mut state, UserAction::FocusSearch);
    for ch in "wilson".chars() {
        run(&mut state, UserAction::SearchInput(ch));
    }

    run(&mut state, UserAction::Activate);

    assert_eq!(screen(&state), Screen::Assign);
    assert_eq!(
        admin(&state).assign.as_ref().map(|form| form.issue_id.as_str()),
        Some("R-221")
    );
}

#[test]
fn activating_an_assigned_repository_row_does_nothing() {
    let mut state = logged_in(Role::Admin);
    run(&mut state, UserAction::Navigate(Screen::AllReports));

    let effects = run(&mut state, UserAction::Activate);

    assert_eq!(effects, Vec::new());
    assert_eq!(screen(&state), Screen::AllReports);
    assert!(admin(&state).assign.is_none());
    let r402 = admin(&state).issues.get("R-402").expect("seeded");
    assert_eq!(r402.assigned_to.as_deref(), Some("John Mechanic"));
}

#[test]
fn critical_escalations_on_home_still_open_dispatch() {
    let mut state = logged_in(Role::Admin);

    run(&mut state, UserAction::Activate);

    assert_eq!(screen(&state), Screen::Assign);
    assert_eq!(
        admin(&state).assign.as_ref().map(|form| form.issue_id.as_str()),
        Some("R-221")
    );
}
