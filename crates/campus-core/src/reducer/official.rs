use tracing::info;
use tracing::warn;

use super::toast;
use super::unhandled;
use super::CampusEffect;
use super::ToastLevel;
use crate::actions::UserAction;
use crate::model::Task;
use crate::navigation::Screen;
use crate::state::OfficialDashboard;
use crate::state::ShellState;

pub(super) fn reduce(
    shell: &mut ShellState,
    official: &mut OfficialDashboard,
    action: UserAction,
) -> Vec<CampusEffect> {
    match action {
        UserAction::SelectTask { id } => select(official, id),
        UserAction::ProcessTask { id } => {
            let effects = select(official, id);
            if !effects.is_empty() {
                shell.navigate(Screen::Tasks);
            }
            effects
        }
        UserAction::CloseTask => {
            official.selected_task = None;
            vec![CampusEffect::RequestFrame]
        }
        UserAction::SetTaskStatus { id, status } => {
            let Some(tasks) = official
                .tasks
                .with_updated(&id, |task| Task {
                    status,
                    ..task.clone()
                })
            else {
                warn!(task = %id, "status update for unknown task");
                return Vec::new();
            };
            info!(task = %id, status = status.key(), "task status updated");
            official.tasks = tasks;
            toast(
                format!("Task status updated to {}", status.label()),
                ToastLevel::Success,
            )
        }
        other => unhandled(shell, &other),
    }
}

fn select(official: &mut OfficialDashboard, id: String) -> Vec<CampusEffect> {
    if !official.tasks.contains(&id) {
        warn!(task = %id, "selection of unknown task");
        return Vec::new();
    }
    official.selected_task = Some(id);
    vec![CampusEffect::RequestFrame]
}
