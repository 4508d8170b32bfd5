use super::*;
use pretty_assertions::assert_eq;

#[test]
fn escalate_flags_only_the_target() {
    let mut state = logged_in(Role::Management);
    let effects = run(&mut state, UserAction::Escalate { id: "E-2".to_string() });

    assert_eq!(
        toasts(&effects),
        vec![(
            "Server Management escalated to campus authority",
            ToastLevel::Success
        )]
    );
    let flags: Vec<bool> = management(&state)
        .escalations
        .iter()
        .map(|entry| entry.escalated)
        .collect();
    assert_eq!(flags, vec![false, true, false]);
}

#[test]
fn escalating_twice_is_quiet() {
    let mut state = logged_in(Role::Management);
    run(&mut state, UserAction::Escalate { id: "E-1".to_string() });
    let effects = run(&mut state, UserAction::Escalate { id: "E-1".to_string() });
    assert!(effects.is_empty());
}

#[test]
fn escalation_filter_matches_department_and_reason() {
    let mut state = logged_in(Role::Management);
    run(&mut state, UserAction::Navigate(Screen::Escalations));
    run(&mut state, UserAction::FocusSearch);
    for ch in "camera".chars() {
        run(&mut state, UserAction::SearchInput(ch));
    }

    run(&mut state, UserAction::Activate);

    let entry = management(&state).escalations.get("E-3").expect("seeded");
    assert!(entry.escalated);
    assert_eq!(management(&state).filtered("SECURITY").len(), 1);
}

#[test]
fn notifications_link_home() {
    let mut state = logged_in(Role::Management);
    run(&mut state, UserAction::Navigate(Screen::Notifications));
    run(&mut state, UserAction::Activate);
    assert_eq!(screen(&state), Screen::Home);
}

#[test]
fn role_specific_actions_do_not_leak() {
    let mut state = logged_in(Role::Management);
    let effects = run(
        &mut state,
        UserAction::SetTaskStatus {
            id: "T-882".to_string(),
            status: TaskStatus::Completed,
        },
    );
    assert!(effects.is_empty());
}
