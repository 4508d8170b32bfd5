//! Hard-coded mock data each dashboard is constructed from.

use chrono::NaiveDate;
use serde::Serialize;

use super::charts::ChartSeries;
use super::charts::DepartmentLoad;
use super::charts::Kpi;
use super::collection::Collection;
use super::model::Escalation;
use super::model::Issue;
use super::model::IssueStatus;
use super::model::Notification;
use super::model::NotificationKind;
use super::model::NotificationLink;
use super::model::Priority;
use super::model::Severity;
use super::model::Task;
use super::model::TaskStatus;
use super::navigation::Role;
use super::navigation::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueCategory {
    pub value: &'static str,
    pub label: &'static str,
}

pub const ISSUE_CATEGORIES: &[IssueCategory] = &[
    IssueCategory {
        value: "Electrical",
        label: "Electrical Infrastructure",
    },
    IssueCategory {
        value: "Plumbing",
        label: "Water & Plumbing",
    },
    IssueCategory {
        value: "Facilities",
        label: "General Facilities",
    },
    IssueCategory {
        value: "Internet/IT",
        label: "Campus IT Network",
    },
    IssueCategory {
        value: "Cleaning",
        label: "Sanitation & Cleaning",
    },
];

pub const DEFAULT_LOCATION: &str = "Main Campus";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technician {
    pub name: &'static str,
    pub department: &'static str,
}

pub const TECHNICIANS: &[Technician] = &[
    Technician {
        name: "John Mechanic",
        department: "Electrical Dept",
    },
    Technician {
        name: "Dave Wood",
        department: "Carpentry Dept",
    },
    Technician {
        name: "Sarah Clean",
        department: "Facilities Dept",
    },
    Technician {
        name: "Mike Tech",
        department: "IT Infrastructure",
    },
];

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn issue(
    id: &str,
    category: &str,
    priority: Priority,
    description: &str,
    status: IssueStatus,
    date: NaiveDate,
    location: &str,
    reporter: &str,
    assigned_to: Option<&str>,
) -> Issue {
    Issue {
        id: id.to_string(),
        category: category.to_string(),
        priority,
        description: description.to_string(),
        status,
        date,
        location: location.to_string(),
        reporter: reporter.to_string(),
        assigned_to: assigned_to.map(str::to_string),
    }
}

fn notification(
    id: u32,
    title: &str,
    message: &str,
    time: &str,
    kind: NotificationKind,
    link: Option<NotificationLink>,
) -> Notification {
    Notification {
        id,
        title: title.to_string(),
        message: message.to_string(),
        time: time.to_string(),
        kind,
        link,
    }
}

pub fn student_issues(reporter: &str) -> Collection<Issue> {
    Collection::from_seed(vec![
        issue(
            "1",
            "Electrical",
            Priority::High,
            "Power outage in Room 402, Block B.",
            IssueStatus::Open,
            day(2026, 2, 1),
            "Block B, 4th Floor",
            reporter,
            None,
        ),
        issue(
            "2",
            "Plumbing",
            Priority::Medium,
            "Water leakage in the girls hostel 3rd floor.",
            IssueStatus::InProgress,
            day(2026, 1, 30),
            "Girls Hostel, Wing A",
            reporter,
            None,
        ),
        issue(
            "3",
            "Facilities",
            Priority::Low,
            "Broken chair in Library study zone.",
            IssueStatus::Resolved,
            day(2026, 1, 28),
            "Central Library",
            reporter,
            None,
        ),
    ])
}

pub fn student_notifications() -> Vec<Notification> {
    vec![
        notification(
            1,
            "Issue Resolved",
            "Your report #3 (Broken chair) has been marked as resolved.",
            "2h ago",
            NotificationKind::Success,
            None,
        ),
        notification(
            2,
            "In Progress",
            "Work has started on your report #2 (Water leakage).",
            "5h ago",
            NotificationKind::Info,
            None,
        ),
        notification(
            3,
            "New Comment",
            "Admin commented on your report: \"Technician assigned\".",
            "1d ago",
            NotificationKind::Message,
            None,
        ),
    ]
}

pub fn admin_issues() -> Collection<Issue> {
    Collection::from_seed(vec![
        issue(
            "R-402",
            "Electrical",
            Priority::High,
            "",
            IssueStatus::InProgress,
            day(2026, 2, 1),
            "",
            "Alex Johnson",
            Some("John Mechanic"),
        ),
        issue(
            "R-109",
            "Plumbing",
            Priority::Medium,
            "",
            IssueStatus::Open,
            day(2026, 2, 2),
            "",
            "Sarah Smith",
            None,
        ),
        issue(
            "R-882",
            "Facilities",
            Priority::Low,
            "",
            IssueStatus::Resolved,
            day(2026, 1, 30),
            "",
            "Michael Chen",
            Some("Dave Wood"),
        ),
        issue(
            "R-221",
            "IT Support",
            Priority::High,
            "",
            IssueStatus::Open,
            day(2026, 2, 2),
            "",
            "Emma Wilson",
            None,
        ),
        issue(
            "R-556",
            "Cleaning",
            Priority::Low,
            "",
            IssueStatus::InProgress,
            day(2026, 2, 3),
            "",
            "David Lee",
            Some("Clean Team"),
        ),
    ])
}

/// Alternates new-report and escalation alerts, newest first.
pub fn admin_notifications() -> Vec<Notification> {
    (1..=5u32)
        .map(|i| {
            if i % 2 == 0 {
                notification(
                    i,
                    "High Priority Escalation",
                    "Case #R-402 has remained unaddressed for over 24 hours. Immediate re-assignment is required to maintain SLA targets.",
                    &format!("{}m ago", i * 5),
                    NotificationKind::Alert,
                    Some(NotificationLink::Screen(Screen::Assign)),
                )
            } else {
                notification(
                    i,
                    "New Incoming Report",
                    "A new IT Support request has been filed regarding campus-wide WiFi stability in Block C.",
                    &format!("{}m ago", i * 5),
                    NotificationKind::Info,
                    Some(NotificationLink::Screen(Screen::AllReports)),
                )
            }
        })
        .collect()
}

pub fn weekly_activity() -> ChartSeries {
    ChartSeries::new(
        "Weekly Activity Surge",
        &[
            ("Mon", 12),
            ("Tue", 19),
            ("Wed", 15),
            ("Thu", 22),
            ("Fri", 30),
            ("Sat", 8),
            ("Sun", 5),
        ],
    )
}

pub fn official_tasks() -> Collection<Task> {
    let task = |id: &str,
                title: &str,
                location: &str,
                deadline: &str,
                status: TaskStatus,
                description: &str,
                reporter: &str| Task {
        id: id.to_string(),
        title: title.to_string(),
        location: location.to_string(),
        deadline: deadline.to_string(),
        status,
        description: description.to_string(),
        reporter: reporter.to_string(),
    };

    Collection::from_seed(vec![
        task(
            "T-882",
            "Power Outage - Block B",
            "Engineering Block, Room 402",
            "Today, 5:00 PM",
            TaskStatus::InProgress,
            "Complete circuit failure reported by student. Needs immediate inspection of MCB.",
            "Alex Johnson",
        ),
        task(
            "T-901",
            "Water Leakage",
            "Girls Hostel, 3rd Floor",
            "Tomorrow",
            TaskStatus::Assigned,
            "Ceiling leakage in bathroom area. Check main pipe supply.",
            "Sarah Smith",
        ),
        task(
            "T-743",
            "AC Servicing",
            "Main Seminar Hall",
            "Feb 5, 2026",
            TaskStatus::Assigned,
            "Routine maintenance and filter cleaning.",
            "Campus Admin",
        ),
    ])
}

/// One assignment alert per task, in task order.
pub fn task_notifications(tasks: &Collection<Task>) -> Vec<Notification> {
    tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            notification(
                i as u32 + 1,
                &format!("New Task Assigned: {}", task.title),
                &format!(
                    "You have been dispatched to {}. Resolution is expected by {}.",
                    task.location, task.deadline
                ),
                &format!("{}h ago", i + 1),
                NotificationKind::Alert,
                Some(NotificationLink::Task(task.id.clone())),
            )
        })
        .collect()
}

pub fn management_kpis() -> Vec<Kpi> {
    let kpi = |title: &str, value: &str, trend: &str, positive: bool| Kpi {
        title: title.to_string(),
        value: value.to_string(),
        trend: trend.to_string(),
        positive,
    };

    vec![
        kpi("Overall Health", "92%", "+2.4%", true),
        kpi("Escalated Issues", "04", "-15%", true),
        kpi("Resolution Time", "4.2h", "+10%", false),
        kpi("User Satisfaction", "4.8/5", "+0.3", true),
    ]
}

pub fn department_loads() -> Vec<DepartmentLoad> {
    [
        ("Electrical", 40, 32),
        ("Plumbing", 30, 25),
        ("IT/WiFi", 65, 60),
        ("Facilities", 20, 18),
        ("Cleanliness", 45, 30),
    ]
    .into_iter()
    .map(|(department, issues, resolved)| DepartmentLoad {
        department: department.to_string(),
        issues,
        resolved,
    })
    .collect()
}

pub fn monthly_performance() -> ChartSeries {
    ChartSeries::new(
        "Monthly Performance",
        &[
            ("Jan", 75),
            ("Feb", 82),
            ("Mar", 78),
            ("Apr", 85),
            ("May", 90),
            ("Jun", 88),
        ],
    )
}

pub fn resolution_mix() -> ChartSeries {
    ChartSeries::new(
        "Resolution Mix",
        &[("Resolved", 82), ("In Progress", 48), ("Pending", 12)],
    )
}

pub fn management_escalations() -> Collection<Escalation> {
    let escalation = |id: &str, department: &str, reason: &str, overdue: &str, severity| Escalation {
        id: id.to_string(),
        department: department.to_string(),
        reason: reason.to_string(),
        overdue: overdue.to_string(),
        severity,
        escalated: false,
    };

    Collection::from_seed(vec![
        escalation(
            "E-1",
            "Electrical Infrastructure",
            "Critical spare parts stock-out",
            "72h",
            Severity::High,
        ),
        escalation(
            "E-2",
            "Server Management",
            "Cooling system redundancy failure",
            "12h",
            Severity::Critical,
        ),
        escalation(
            "E-3",
            "Campus Security",
            "Camera system maintenance backlog",
            "14d",
            Severity::Medium,
        ),
    ])
}

pub fn management_notifications() -> Vec<Notification> {
    (1..=3u32)
        .map(|i| {
            notification(
                i,
                "Weekly Performance Surge",
                "Resolution efficiency increased by 14% compared to last week.",
                "This week",
                NotificationKind::Success,
                Some(NotificationLink::Screen(Screen::Home)),
            )
        })
        .collect()
}

/// Everything a role's dashboard starts from, flattened for export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleSeed {
    pub role: Role,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<Issue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<Task>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub escalations: Vec<Escalation>,
    pub notifications: Vec<Notification>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub charts: Vec<ChartSeries>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub departments: Vec<DepartmentLoad>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub kpis: Vec<Kpi>,
}

impl RoleSeed {
    fn empty(role: Role) -> Self {
        Self {
            role,
            issues: Vec::new(),
            tasks: Vec::new(),
            escalations: Vec::new(),
            notifications: Vec::new(),
            charts: Vec::new(),
            departments: Vec::new(),
            kpis: Vec::new(),
        }
    }
}

pub fn role_seed(role: Role, reporter: &str) -> RoleSeed {
    let mut seed = RoleSeed::empty(role);
    match role {
        Role::Student => {
            seed.issues = student_issues(reporter).as_slice().to_vec();
            seed.notifications = student_notifications();
        }
        Role::Admin => {
            seed.issues = admin_issues().as_slice().to_vec();
            seed.notifications = admin_notifications();
            seed.charts = vec![weekly_activity()];
        }
        Role::Official => {
            let tasks = official_tasks();
            seed.notifications = task_notifications(&tasks);
            seed.tasks = tasks.as_slice().to_vec();
        }
        Role::Management => {
            seed.escalations = management_escalations().as_slice().to_vec();
            seed.notifications = management_notifications();
            seed.charts = vec![monthly_performance(), resolution_mix()];
            seed.departments = department_loads();
            seed.kpis = management_kpis();
        }
    }
    seed
}
