use chrono::NaiveDate;
use tracing::debug;
use tracing::info;
use tracing::warn;

use super::toast;
use super::unhandled;
use super::CampusEffect;
use super::ToastLevel;
use crate::actions::UserAction;
use crate::forms::ReportForm;
use crate::model::Issue;
use crate::model::IssueStatus;
use crate::navigation::Screen;
use crate::state::ShellState;
use crate::state::StudentDashboard;

pub(super) fn reduce(
    shell: &mut ShellState,
    student: &mut StudentDashboard,
    action: UserAction,
    today: NaiveDate,
    reporter: &str,
) -> Vec<CampusEffect> {
    match action {
        UserAction::OpenReportForm => {
            student.report_form = Some(ReportForm::default());
            vec![CampusEffect::RequestFrame]
        }
        UserAction::OpenIssue { id } => {
            if !student.issues.contains(&id) {
                warn!(issue = %id, "open requested for unknown issue");
                return Vec::new();
            }
            if shell.screen != Screen::Reports {
                shell.navigate(Screen::Reports);
            }
            student.selected_issue = Some(id);
            vec![CampusEffect::RequestFrame]
        }
        UserAction::CloseIssue => {
            student.selected_issue = None;
            vec![CampusEffect::RequestFrame]
        }
        UserAction::FormSubmit => submit_report(student, today, reporter),
        UserAction::FormCancel => {
            if student.report_form.take().is_some() {
                return vec![CampusEffect::RequestFrame];
            }
            Vec::new()
        }
        other => unhandled(shell, &other),
    }
}

fn submit_report(
    student: &mut StudentDashboard,
    today: NaiveDate,
    reporter: &str,
) -> Vec<CampusEffect> {
    let Some(form) = student.report_form.as_mut() else {
        return Vec::new();
    };
    let new_issue = match form.validate() {
        Ok(new_issue) => new_issue,
        Err(errors) => {
            debug!(fields = errors.errors.len(), "report form incomplete");
            return vec![CampusEffect::RequestFrame];
        }
    };

    // No dedup: the id is just the next position.
    let issue = Issue {
        id: (student.issues.len() + 1).to_string(),
        category: new_issue.category,
        priority: new_issue.priority,
        description: new_issue.description,
        status: IssueStatus::Open,
        date: today,
        location: new_issue.location,
        reporter: reporter.to_string(),
        assigned_to: None,
    };
    info!(issue = %issue.id, category = %issue.category, "issue reported");
    student.issues = student.issues.with_prepended(issue);
    student.report_form = None;
    toast("Issue reported successfully!", ToastLevel::Success)
}
