use super::*;
use pretty_assertions::assert_eq;

fn in_role_set(state: &AppState) -> bool {
    let dashboard = state.dashboard.as_ref().expect("dashboard");
    dashboard.shell.profile.allows(dashboard.shell.screen)
}

#[test]
fn foreign_screen_is_ignored() {
    let mut state = logged_in(Role::Student);
    let effects = run(&mut state, UserAction::Navigate(Screen::Assign));

    assert!(effects.is_empty());
    assert_eq!(screen(&state), Screen::Home);
}

#[test]
fn every_navigation_keeps_screen_in_role_set() {
    let all = [
        Screen::Home,
        Screen::Reports,
        Screen::AllReports,
        Screen::Assign,
        Screen::Tasks,
        Screen::Analytics,
        Screen::Escalations,
        Screen::Notifications,
        Screen::Profile,
        Screen::Settings,
        Screen::Privacy,
    ];
    for role in Role::ALL {
        let mut state = logged_in(role);
        for target in all {
            run(&mut state, UserAction::Navigate(target));
            assert!(in_role_set(&state), "{role:?} left its set via {target:?}");
            run(&mut state, UserAction::NavNext);
            assert!(in_role_set(&state));
            run(&mut state, UserAction::NavPrev);
            assert!(in_role_set(&state));
        }
    }
}

#[test]
fn nav_next_cycles_role_items() {
    let mut state = logged_in(Role::Management);
    let mut visited = Vec::new();
    for _ in 0..5 {
        run(&mut state, UserAction::NavNext);
        visited.push(screen(&state));
    }
    assert_eq!(
        visited,
        vec![
            Screen::Analytics,
            Screen::Escalations,
            Screen::Notifications,
            Screen::Profile,
            Screen::Home,
        ]
    );
}

#[test]
fn navigation_closes_the_menu_overlay() {
    let mut state = logged_in(Role::Official);
    reduce(
        &mut state,
        AppAction::Runtime(RuntimeAction::Resize { width: 60 }),
    );
    run(&mut state, UserAction::ToggleMenu);
    assert!(state.dashboard.as_ref().map(|d| d.shell.menu_open).unwrap_or(false));

    run(&mut state, UserAction::Navigate(Screen::Tasks));

    let shell = &state.dashboard.as_ref().expect("dashboard").shell;
    assert!(!shell.menu_open);
    assert_eq!(shell.screen, Screen::Tasks);
}

#[test]
fn widening_the_terminal_closes_the_menu() {
    let mut state = logged_in(Role::Student);
    reduce(
        &mut state,
        AppAction::Runtime(RuntimeAction::Resize { width: 60 }),
    );
    run(&mut state, UserAction::ToggleMenu);
    assert!(state.is_compact());

    reduce(
        &mut state,
        AppAction::Runtime(RuntimeAction::Resize { width: 160 }),
    );

    assert!(!state.is_compact());
    assert!(!state.dashboard.as_ref().expect("dashboard").shell.menu_open);
}

#[test]
fn system_screens_are_reachable() {
    let mut state = logged_in(Role::Admin);
    run(&mut state, UserAction::Navigate(Screen::Privacy));
    assert_eq!(screen(&state), Screen::Privacy);

    let dashboard = state.dashboard.as_ref().expect("dashboard");
    assert_eq!(dashboard.shell.title(), "Profile Control");
}

#[test]
fn activating_a_notification_follows_its_link() {
    let mut state = logged_in(Role::Admin);
    run(&mut state, UserAction::Navigate(Screen::Notifications));
    run(&mut state, UserAction::CursorDown);

    run(&mut state, UserAction::Activate);

    assert_eq!(screen(&state), Screen::Assign);
}

#[test]
fn cursor_is_clamped_to_visible_rows() {
    let mut state = logged_in(Role::Student);
    run(&mut state, UserAction::Navigate(Screen::Reports));
    for _ in 0..10 {
        run(&mut state, UserAction::CursorDown);
    }
    assert_eq!(state.dashboard.as_ref().expect("dashboard").shell.cursor, 2);

    run(&mut state, UserAction::FocusSearch);
    for ch in "library".chars() {
        run(&mut state, UserAction::SearchInput(ch));
    }
    let dashboard = state.dashboard.as_ref().expect("dashboard");
    assert_eq!(dashboard.shell.cursor, 0);
    assert_eq!(dashboard.rows().len(), 1);
}

#[test]
fn search_focus_only_on_filterable_screens() {
    let mut state = logged_in(Role::Official);
    assert!(run(&mut state, UserAction::FocusSearch).is_empty());

    run(&mut state, UserAction::Navigate(Screen::Tasks));
    run(&mut state, UserAction::FocusSearch);
    assert!(state.dashboard.as_ref().expect("dashboard").shell.search_focused);

    run(&mut state, UserAction::ClearSearch);
    let shell = &state.dashboard.as_ref().expect("dashboard").shell;
    assert!(!shell.search_focused);
    assert_eq!(shell.search, "");
}

#[test]
fn blurring_search_keeps_the_query() {
    let mut state = logged_in(Role::Admin);
    run(&mut state, UserAction::Navigate(Screen::AllReports));
    run(&mut state, UserAction::FocusSearch);
    for ch in "wifi".chars() {
        run(&mut state, UserAction::SearchInput(ch));
    }
    run(&mut state, UserAction::BlurSearch);

    let shell = &state.dashboard.as_ref().expect("dashboard").shell;
    assert!(!shell.search_focused);
    assert_eq!(shell.search, "wifi");
}

#[test]
fn typing_without_focused_search_is_ignored() {
    let mut state = logged_in(Role::Admin);

    let effects = run(&mut state, UserAction::SearchInput('x'));
    assert_eq!(effects, Vec::new());

    run(&mut state, UserAction::Navigate(Screen::AllReports));
    run(&mut state, UserAction::SearchInput('x'));
    run(&mut state, UserAction::SearchBackspace);

    let shell = &state.dashboard.as_ref().expect("dashboard").shell;
    assert!(!shell.search_focused);
    assert_eq!(shell.search, "");
}
