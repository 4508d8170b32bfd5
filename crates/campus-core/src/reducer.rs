use tracing::debug;
use tracing::info;
use tracing::warn;

use super::actions::AppAction;
use super::actions::RuntimeAction;
use super::actions::UserAction;
use super::forms::Form;
use super::model::NotificationLink;
use super::navigation::Role;
use super::navigation::Screen;
use super::state::AppState;
use super::state::AppView;
use super::state::Dashboard;
use super::state::RoleDashboard;
use super::state::RowTarget;
use super::state::ShellState;

mod admin;
mod management;
mod official;
mod student;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CampusEffect {
    RequestFrame,
    Toast { message: String, level: ToastLevel },
    Quit,
}

pub(crate) fn toast(message: impl Into<String>, level: ToastLevel) -> Vec<CampusEffect> {
    vec![
        CampusEffect::Toast {
            message: message.into(),
            level,
        },
        CampusEffect::RequestFrame,
    ]
}

pub fn reduce(state: &mut AppState, action: AppAction) -> Vec<CampusEffect> {
    match action {
        AppAction::User(user) => reduce_user(state, user),
        AppAction::Runtime(runtime) => reduce_runtime(state, runtime),
    }
}

fn reduce_runtime(state: &mut AppState, action: RuntimeAction) -> Vec<CampusEffect> {
    match action {
        RuntimeAction::SetToday(today) => {
            state.today = today;
            Vec::new()
        }
        RuntimeAction::Resize { width } => {
            state.terminal_width = width;
            if !state.is_compact() {
                if let Some(dashboard) = state.dashboard.as_mut() {
                    dashboard.shell.menu_open = false;
                }
            }
            vec![CampusEffect::RequestFrame]
        }
    }
}

fn reduce_user(state: &mut AppState, action: UserAction) -> Vec<CampusEffect> {
    if action == UserAction::Quit {
        state.should_quit = true;
        return vec![CampusEffect::Quit];
    }

    match state.current_view() {
        AppView::Landing => reduce_landing(state, action),
        AppView::Login => reduce_login(state, action),
        AppView::Dashboard => reduce_dashboard(state, action),
    }
}

fn reduce_landing(state: &mut AppState, action: UserAction) -> Vec<CampusEffect> {
    let count = Role::ALL.len();
    match action {
        UserAction::LandingUp => {
            state.landing_cursor = (state.landing_cursor + count - 1) % count;
            vec![CampusEffect::RequestFrame]
        }
        UserAction::LandingDown => {
            state.landing_cursor = (state.landing_cursor + 1) % count;
            vec![CampusEffect::RequestFrame]
        }
        UserAction::LandingSubmit => select_role(state, state.landing_role()),
        UserAction::SelectRole(role) => select_role(state, role),
        other => ignored(AppView::Landing, &other),
    }
}

fn select_role(state: &mut AppState, role: Role) -> Vec<CampusEffect> {
    debug!(role = role.label(), "role selected");
    state.role = Some(role);
    state.view = AppView::Login;
    state.login = Default::default();
    state.dashboard = None;
    vec![CampusEffect::RequestFrame]
}

fn reduce_login(state: &mut AppState, action: UserAction) -> Vec<CampusEffect> {
    match action {
        UserAction::Authenticate => authenticate(state),
        UserAction::LoginSubmit | UserAction::FormSubmit => match state.login.validate() {
            Ok(()) => {
                let welcome = state
                    .role
                    .map(|role| format!("Welcome back, {}!", role.title()));
                let mut effects = authenticate(state);
                if let Some(message) = welcome {
                    effects.insert(
                        0,
                        CampusEffect::Toast {
                            message,
                            level: ToastLevel::Success,
                        },
                    );
                }
                effects
            }
            Err(errors) => {
                debug!(fields = errors.errors.len(), "login form incomplete");
                vec![CampusEffect::RequestFrame]
            }
        },
        UserAction::Back | UserAction::FormCancel => {
            state.role = None;
            state.view = AppView::Landing;
            state.login = Default::default();
            vec![CampusEffect::RequestFrame]
        }
        UserAction::FormInput(ch) => edit_form(&mut state.login, |form| form.input(ch)),
        UserAction::FormBackspace => edit_form(&mut state.login, |form| form.backspace()),
        UserAction::FormNextField => edit_form(&mut state.login, |form| form.focus_next()),
        UserAction::FormPrevField => edit_form(&mut state.login, |form| form.focus_prev()),
        other => ignored(AppView::Login, &other),
    }
}

/// Credentials are never checked. The form only gates on required fields.
fn authenticate(state: &mut AppState) -> Vec<CampusEffect> {
    let Some(role) = state.role else {
        return Vec::new();
    };
    info!(role = role.label(), "entering dashboard");
    state.dashboard = Some(Dashboard::new(role, &state.settings));
    state.view = AppView::Dashboard;
    state.login = Default::default();
    vec![CampusEffect::RequestFrame]
}

fn edit_form(form: &mut dyn Form, edit: impl FnOnce(&mut dyn Form)) -> Vec<CampusEffect> {
    edit(form);
    vec![CampusEffect::RequestFrame]
}

fn ignored(view: AppView, action: &UserAction) -> Vec<CampusEffect> {
    debug!(?view, ?action, "action ignored in this view");
    Vec::new()
}

fn active_form(dashboard: &mut Dashboard) -> Option<&mut dyn Form> {
    let screen = dashboard.shell.screen;
    match &mut dashboard.data {
        RoleDashboard::Student(student) => student
            .report_form
            .as_mut()
            .map(|form| form as &mut dyn Form),
        RoleDashboard::Admin(admin) if screen == Screen::Assign => {
            admin.assign.as_mut().map(|form| form as &mut dyn Form)
        }
        _ => None,
    }
}

fn reduce_dashboard(state: &mut AppState, action: UserAction) -> Vec<CampusEffect> {
    let today = state.today;
    let reporter = state.settings.reporter_name.clone();
    let Some(dashboard) = state.dashboard.as_mut() else {
        return Vec::new();
    };

    match action {
        UserAction::Logout => {
            info!(role = dashboard.shell.role.label(), "logged out");
            state.dashboard = None;
            state.role = None;
            state.view = AppView::Landing;
            vec![CampusEffect::RequestFrame]
        }
        UserAction::Navigate(screen) => navigate(dashboard, screen),
        UserAction::NavNext => {
            let next = dashboard.shell.profile.next_screen(dashboard.shell.screen);
            navigate(dashboard, next)
        }
        UserAction::NavPrev => {
            let prev = dashboard.shell.profile.prev_screen(dashboard.shell.screen);
            navigate(dashboard, prev)
        }
        UserAction::ToggleMenu => {
            dashboard.shell.menu_open = !dashboard.shell.menu_open;
            vec![CampusEffect::RequestFrame]
        }
        UserAction::CursorUp => {
            dashboard.shell.cursor = dashboard.shell.cursor.saturating_sub(1);
            vec![CampusEffect::RequestFrame]
        }
        UserAction::CursorDown => {
            dashboard.shell.cursor += 1;
            dashboard.clamp_cursor();
            vec![CampusEffect::RequestFrame]
        }
        UserAction::Activate => match dashboard.current_row() {
            Some(row) => match activation_for(dashboard, row) {
                Some(next) => reduce_dashboard(state, next),
                None => Vec::new(),
            },
            None => Vec::new(),
        },

        UserAction::FocusSearch => {
            if !has_search(dashboard.shell.role, dashboard.shell.screen) {
                return Vec::new();
            }
            dashboard.shell.search_focused = true;
            vec![CampusEffect::RequestFrame]
        }
        UserAction::SearchInput(_) | UserAction::SearchBackspace
            if !search_accepts_input(&dashboard.shell) =>
        {
            Vec::new()
        }
        UserAction::SearchInput(ch) => {
            dashboard.shell.search.push(ch);
            dashboard.shell.cursor = 0;
            vec![CampusEffect::RequestFrame]
        }
        UserAction::SearchBackspace => {
            dashboard.shell.search.pop();
            dashboard.clamp_cursor();
            vec![CampusEffect::RequestFrame]
        }
        UserAction::BlurSearch => {
            dashboard.shell.search_focused = false;
            vec![CampusEffect::RequestFrame]
        }
        UserAction::ClearSearch => {
            dashboard.shell.search.clear();
            dashboard.shell.search_focused = false;
            dashboard.clamp_cursor();
            vec![CampusEffect::RequestFrame]
        }

        UserAction::FormInput(ch) => with_form(dashboard, |form| form.input(ch)),
        UserAction::FormBackspace => with_form(dashboard, |form| form.backspace()),
        UserAction::FormNextField => with_form(dashboard, |form| form.focus_next()),
        UserAction::FormPrevField => with_form(dashboard, |form| form.focus_prev()),
        UserAction::FormCycle { forward } => with_form(dashboard, |form| form.cycle(forward)),

        action => {
            let Dashboard { shell, data } = dashboard;
            match data {
                RoleDashboard::Student(student) => {
                    student::reduce(shell, student, action, today, &reporter)
                }
                RoleDashboard::Admin(admin) => admin::reduce(shell, admin, action),
                RoleDashboard::Official(official) => official::reduce(shell, official, action),
                RoleDashboard::Management(management) => {
                    management::reduce(shell, management, action)
                }
            }
        }
    }
}

fn with_form(dashboard: &mut Dashboard, edit: impl FnOnce(&mut dyn Form)) -> Vec<CampusEffect> {
    match active_form(dashboard) {
        Some(form) => {
            edit(form);
            vec![CampusEffect::RequestFrame]
        }
        None => Vec::new(),
    }
}

/// Membership in the role's navigation is the only gate; anything else is
/// logged and dropped.
pub(crate) fn navigate(dashboard: &mut Dashboard, screen: Screen) -> Vec<CampusEffect> {
    let from = dashboard.shell.screen;
    if !dashboard.shell.navigate(screen) {
        warn!(
            role = dashboard.shell.role.label(),
            screen = screen.id(),
            "navigation outside role ignored"
        );
        return Vec::new();
    }
    if let RoleDashboard::Student(student) = &mut dashboard.data {
        if from != screen {
            student.report_form = None;
            student.selected_issue = None;
        }
    }
    debug!(from = from.id(), to = screen.id(), "navigated");
    vec![CampusEffect::RequestFrame]
}

fn has_search(role: Role, screen: Screen) -> bool {
    matches!(
        (role, screen),
        (Role::Student, Screen::Reports)
            | (Role::Admin, Screen::AllReports)
            | (Role::Official, Screen::Tasks)
            | (Role::Management, Screen::Escalations)
    )
}

fn search_accepts_input(shell: &ShellState) -> bool {
    shell.search_focused && has_search(shell.role, shell.screen)
}

fn activation_for(dashboard: &Dashboard, row: RowTarget) -> Option<UserAction> {
    let screen = dashboard.shell.screen;
    match (dashboard.shell.role, row) {
        (_, RowTarget::Link(NotificationLink::Screen(target))) => Some(UserAction::Navigate(target)),
        (Role::Official, RowTarget::Link(NotificationLink::Task(id))) => {
            Some(UserAction::ProcessTask { id })
        }
        (Role::Student, RowTarget::Issue(id)) => Some(UserAction::OpenIssue { id }),
        // Assigned rows on the report list are read-only.
        (Role::Admin, RowTarget::Issue(id))
            if screen == Screen::AllReports && !issue_is_unassigned(dashboard, &id) =>
        {
            debug!(issue = %id, "quick assign skipped for assigned issue");
            None
        }
        (Role::Admin, RowTarget::Issue(id)) => Some(UserAction::QuickAssign { id }),
        (Role::Official, RowTarget::Task(id)) if screen == Screen::Home => {
            Some(UserAction::ProcessTask { id })
        }
        (Role::Official, RowTarget::Task(id)) => Some(UserAction::SelectTask { id }),
        (Role::Management, RowTarget::Escalation(id)) => Some(UserAction::Escalate { id }),
        _ => None,
    }
}

fn issue_is_unassigned(dashboard: &Dashboard, id: &str) -> bool {
    match &dashboard.data {
        RoleDashboard::Admin(admin) => admin
            .issues
            .get(id)
            .is_some_and(|issue| issue.is_unassigned()),
        _ => false,
    }
}

pub(crate) fn unhandled(shell: &ShellState, action: &UserAction) -> Vec<CampusEffect> {
    debug!(role = shell.role.label(), ?action, "action not handled by role");
    Vec::new()
}

#[cfg(test)]
mod tests;
