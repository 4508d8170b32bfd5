use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use super::collection::Keyed;
use super::collection::Searchable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl IssueStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub category: String,
    pub priority: Priority,
    pub description: String,
    pub status: IssueStatus,
    pub date: NaiveDate,
    pub location: String,
    pub reporter: String,
    pub assigned_to: Option<String>,
}

impl Issue {
    pub fn assignee_label(&self) -> &str {
        self.assigned_to.as_deref().unwrap_or(UNASSIGNED)
    }

    pub fn is_unassigned(&self) -> bool {
        self.assigned_to.is_none()
    }
}

pub const UNASSIGNED: &str = "Unassigned";

impl Keyed for Issue {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Admin-facing search: reporter, id and category.
#[derive(Debug, Clone, Copy)]
pub struct ByReporterIdCategory;

/// Student-facing search over their own reports.
#[derive(Debug, Clone, Copy)]
pub struct ByReportText;

impl Searchable<ByReporterIdCategory> for Issue {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.reporter.as_str(), self.id.as_str(), self.category.as_str()]
    }
}

impl Searchable<ByReportText> for Issue {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.id.as_str(),
            self.category.as_str(),
            self.description.as_str(),
            self.location.as_str(),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Assigned,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn key(self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub location: String,
    pub deadline: String,
    pub status: TaskStatus,
    pub description: String,
    pub reporter: String,
}

impl Keyed for Task {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Searchable for Task {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.title.as_str(), self.location.as_str()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Info,
    Message,
    Alert,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum NotificationLink {
    Screen(super::navigation::Screen),
    Task(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub title: String,
    pub message: String,
    pub time: String,
    pub kind: NotificationKind,
    pub link: Option<NotificationLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Escalation {
    pub id: String,
    pub department: String,
    pub reason: String,
    pub overdue: String,
    pub severity: Severity,
    pub escalated: bool,
}

impl Keyed for Escalation {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Searchable for Escalation {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.department.as_str(), self.reason.as_str()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileField {
    pub label: &'static str,
    pub value: &'static str,
}
