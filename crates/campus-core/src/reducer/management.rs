use tracing::debug;
use tracing::info;
use tracing::warn;

use super::toast;
use super::unhandled;
use super::CampusEffect;
use super::ToastLevel;
use crate::actions::UserAction;
use crate::model::Escalation;
use crate::state::ManagementDashboard;
use crate::state::ShellState;

pub(super) fn reduce(
    shell: &mut ShellState,
    management: &mut ManagementDashboard,
    action: UserAction,
) -> Vec<CampusEffect> {
    match action {
        UserAction::Escalate { id } => escalate(management, &id),
        other => unhandled(shell, &other),
    }
}

fn escalate(management: &mut ManagementDashboard, id: &str) -> Vec<CampusEffect> {
    let Some(current) = management.escalations.get(id) else {
        warn!(escalation = id, "escalate for unknown entry");
        return Vec::new();
    };
    if current.escalated {
        debug!(escalation = id, "already escalated");
        return Vec::new();
    }
    let department = current.department.clone();

    let Some(escalations) = management.escalations.with_updated(id, |entry| Escalation {
        escalated: true,
        ..entry.clone()
    }) else {
        return Vec::new();
    };
    info!(escalation = id, department = %department, "escalated to authority");
    management.escalations = escalations;
    toast(
        format!("{department} escalated to campus authority"),
        ToastLevel::Success,
    )
}
