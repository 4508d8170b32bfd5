use super::*;
use pretty_assertions::assert_eq;

#[test]
fn status_update_is_visible_through_selection() {
    let mut state = logged_in(Role::Official);
    run(&mut state, UserAction::SelectTask { id: "T-901".to_string() });

    let effects = run(
        &mut state,
        UserAction::SetTaskStatus {
            id: "T-901".to_string(),
            status: TaskStatus::InProgress,
        },
    );

    assert_eq!(
        toasts(&effects),
        vec![("Task status updated to in progress", ToastLevel::Success)]
    );
    let selected = official(&state).selected().expect("still selected");
    assert_eq!(selected.id, "T-901");
    assert_eq!(selected.status, TaskStatus::InProgress);
}

#[test]
fn status_transitions_are_unconstrained() {
    let mut state = logged_in(Role::Official);
    for status in [TaskStatus::Completed, TaskStatus::Assigned] {
        run(
            &mut state,
            UserAction::SetTaskStatus {
                id: "T-882".to_string(),
                status,
            },
        );
    }
    let task = official(&state).tasks.get("T-882").expect("seeded task");
    assert_eq!(task.status, TaskStatus::Assigned);
}

#[test]
fn unknown_task_update_is_ignored() {
    let mut state = logged_in(Role::Official);
    let before = official(&state).tasks.clone();
    let effects = run(
        &mut state,
        UserAction::SetTaskStatus {
            id: "T-000".to_string(),
            status: TaskStatus::Completed,
        },
    );
    assert!(effects.is_empty());
    assert_eq!(official(&state).tasks, before);
}

#[test]
fn process_from_home_selects_and_opens_tasks() {
    let mut state = logged_in(Role::Official);
    run(&mut state, UserAction::CursorDown);
    run(&mut state, UserAction::Activate);

    assert_eq!(screen(&state), Screen::Tasks);
    assert_eq!(official(&state).selected_task.as_deref(), Some("T-901"));
}

#[test]
fn notifications_are_derived_from_live_tasks() {
    let mut state = logged_in(Role::Official);
    run(&mut state, UserAction::Navigate(Screen::Notifications));
    run(&mut state, UserAction::CursorDown);
    run(&mut state, UserAction::CursorDown);

    run(&mut state, UserAction::Activate);

    assert_eq!(screen(&state), Screen::Tasks);
    assert_eq!(official(&state).selected_task.as_deref(), Some("T-743"));
    assert_eq!(official(&state).notifications().len(), 3);
}

#[test]
fn completing_a_task_lowers_pending_count() {
    let mut state = logged_in(Role::Official);
    run(
        &mut state,
        UserAction::SetTaskStatus {
            id: "T-743".to_string(),
            status: TaskStatus::Completed,
        },
    );
    let workload = official(&state).workload();
    assert_eq!(workload.pending(), 2);
    assert_eq!(workload.completed, 1);
}

#[test]
fn task_filter_matches_title_and_location() {
    let state = logged_in(Role::Official);
    let ids = |query: &str| -> Vec<String> {
        official(&state)
            .filtered(query)
            .iter()
            .map(|task| task.id.clone())
            .collect()
    };
    assert_eq!(ids("seminar"), vec!["T-743"]);
    assert_eq!(ids("block"), vec!["T-882"]);
    assert_eq!(ids("t-9"), vec!["T-901"]);
}
