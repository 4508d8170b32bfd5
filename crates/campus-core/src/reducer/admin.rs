use tracing::debug;
use tracing::info;
use tracing::warn;

use super::toast;
use super::unhandled;
use super::CampusEffect;
use super::ToastLevel;
use crate::actions::UserAction;
use crate::forms::AssignForm;
use crate::model::Issue;
use crate::model::IssueStatus;
use crate::navigation::Screen;
use crate::state::AdminDashboard;
use crate::state::ShellState;

pub(super) fn reduce(
    shell: &mut ShellState,
    admin: &mut AdminDashboard,
    action: UserAction,
) -> Vec<CampusEffect> {
    match action {
        UserAction::QuickAssign { id } => {
            if !admin.issues.contains(&id) {
                warn!(issue = %id, "quick assign for unknown issue");
                return Vec::new();
            }
            debug!(issue = %id, "issue selected for dispatch");
            admin.assign = Some(AssignForm::for_issue(&id));
            shell.navigate(Screen::Assign);
            vec![CampusEffect::RequestFrame]
        }
        UserAction::ClearAssignSelection => {
            admin.assign = None;
            vec![CampusEffect::RequestFrame]
        }
        UserAction::FormSubmit if shell.screen == Screen::Assign => submit_assignment(admin),
        UserAction::FormCancel if shell.screen == Screen::Assign => {
            shell.navigate(Screen::AllReports);
            vec![CampusEffect::RequestFrame]
        }
        other => unhandled(shell, &other),
    }
}

fn submit_assignment(admin: &mut AdminDashboard) -> Vec<CampusEffect> {
    let Some(form) = admin.assign.as_mut() else {
        return Vec::new();
    };
    let assignment = match form.validate() {
        Ok(assignment) => assignment,
        Err(errors) => {
            debug!(fields = errors.errors.len(), "assignment form incomplete");
            return vec![CampusEffect::RequestFrame];
        }
    };

    let updated = admin.issues.with_updated(&assignment.issue_id, |issue| Issue {
        assigned_to: Some(assignment.technician.clone()),
        status: IssueStatus::InProgress,
        priority: assignment.priority.unwrap_or(issue.priority),
        ..issue.clone()
    });
    let Some(issues) = updated else {
        warn!(issue = %assignment.issue_id, "assigned issue no longer exists");
        admin.assign = None;
        return toast("That issue is no longer available", ToastLevel::Error);
    };

    info!(
        issue = %assignment.issue_id,
        technician = %assignment.technician,
        "issue assigned"
    );
    admin.issues = issues;
    admin.assign = None;
    toast("Issue assigned successfully!", ToastLevel::Success)
}
