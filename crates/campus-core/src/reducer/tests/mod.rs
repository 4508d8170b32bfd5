use chrono::NaiveDate;
use pretty_assertions::assert_eq;

pub(super) use super::reduce;
pub(super) use crate::actions::AppAction;
pub(super) use crate::actions::RuntimeAction;
pub(super) use crate::actions::UserAction;
pub(super) use crate::forms::FieldId;
pub(super) use crate::forms::Urgency;
pub(super) use crate::model::IssueStatus;
pub(super) use crate::model::Priority;
pub(super) use crate::model::TaskStatus;
pub(super) use crate::navigation::role_profile;
pub(super) use crate::navigation::Role;
pub(super) use crate::navigation::Screen;
pub(super) use crate::reducer::CampusEffect;
pub(super) use crate::reducer::ToastLevel;
pub(super) use crate::state::AdminDashboard;
pub(super) use crate::state::AppState;
pub(super) use crate::state::AppView;
pub(super) use crate::state::ManagementDashboard;
pub(super) use crate::state::OfficialDashboard;
pub(super) use crate::state::RoleDashboard;
pub(super) use crate::state::SessionSettings;
pub(super) use crate::state::StudentDashboard;

mod admin_assign;
mod management_escalations;
mod navigation;
mod official_tasks;
mod student_reports;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 3).expect("valid date")
}

fn state() -> AppState {
    AppState::new(SessionSettings::default(), today())
}

fn run(state: &mut AppState, action: UserAction) -> Vec<CampusEffect> {
    reduce(state, AppAction::User(action))
}

fn logged_in(role: Role) -> AppState {
    let mut state = state();
    run(&mut state, UserAction::SelectRole(role));
    run(&mut state, UserAction::Authenticate);
    assert_eq!(state.current_view(), AppView::Dashboard);
    state
}

fn type_text(state: &mut AppState, text: &str) {
    for ch in text.chars() {
        run(state, UserAction::FormInput(ch));
    }
}

fn toasts(effects: &[CampusEffect]) -> Vec<(&str, ToastLevel)> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            CampusEffect::Toast { message, level } => Some((message.as_str(), *level)),
            _ => None,
        })
        .collect()
}

fn screen(state: &AppState) -> Screen {
    state
        .dashboard
        .as_ref()
        .map(|dashboard| dashboard.shell.screen)
        .expect("dashboard open")
}

fn student(state: &AppState) -> &StudentDashboard {
    match state.dashboard.as_ref().map(|dashboard| &dashboard.data) {
        Some(RoleDashboard::Student(student)) => student,
        other => panic!("expected student dashboard, got {other:?}"),
    }
}

fn admin(state: &AppState) -> &AdminDashboard {
    match state.dashboard.as_ref().map(|dashboard| &dashboard.data) {
        Some(RoleDashboard::Admin(admin)) => admin,
        other => panic!("expected admin dashboard, got {other:?}"),
    }
}

fn official(state: &AppState) -> &OfficialDashboard {
    match state.dashboard.as_ref().map(|dashboard| &dashboard.data) {
        Some(RoleDashboard::Official(official)) => official,
        other => panic!("expected official dashboard, got {other:?}"),
    }
}

fn management(state: &AppState) -> &ManagementDashboard {
    match state.dashboard.as_ref().map(|dashboard| &dashboard.data) {
        Some(RoleDashboard::Management(management)) => management,
        other => panic!("expected management dashboard, got {other:?}"),
    }
}
