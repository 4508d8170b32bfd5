use chrono::NaiveDate;

use super::charts::ChartSeries;
use super::charts::DepartmentLoad;
use super::charts::Kpi;
use super::collection::Collection;
use super::config::Config;
use super::forms::AssignForm;
use super::forms::LoginForm;
use super::forms::ReportForm;
use super::model::ByReportText;
use super::model::ByReporterIdCategory;
use super::model::Escalation;
use super::model::Issue;
use super::model::IssueStatus;
use super::model::Notification;
use super::model::NotificationLink;
use super::model::Priority;
use super::model::Task;
use super::model::TaskStatus;
use super::navigation::role_profile;
use super::navigation::Role;
use super::navigation::RoleProfile;
use super::navigation::Screen;
use super::seed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Landing,
    Login,
    Dashboard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub reporter_name: String,
    pub compact_width: u16,
}

impl SessionSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            reporter_name: config.session.reporter_name.clone(),
            compact_width: config.ui.compact_width,
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub view: AppView,
    pub role: Option<Role>,
    pub landing_cursor: usize,
    pub login: LoginForm,
    pub dashboard: Option<Dashboard>,
    pub settings: SessionSettings,
    pub today: NaiveDate,
    pub terminal_width: u16,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(settings: SessionSettings, today: NaiveDate) -> Self {
        Self {
            view: AppView::Landing,
            role: None,
            landing_cursor: 0,
            login: LoginForm::default(),
            dashboard: None,
            settings,
            today,
            terminal_width: u16::MAX,
            should_quit: false,
        }
    }

    /// Login and dashboard both need a role; without one the landing page
    /// is what renders.
    pub fn current_view(&self) -> AppView {
        match (self.view, self.role, self.dashboard.is_some()) {
            (AppView::Landing, _, _) | (_, None, _) => AppView::Landing,
            (AppView::Login, Some(_), _) => AppView::Login,
            (AppView::Dashboard, Some(_), true) => AppView::Dashboard,
            (AppView::Dashboard, Some(_), false) => AppView::Login,
        }
    }

    pub fn landing_role(&self) -> Role {
        Role::ALL[self.landing_cursor.min(Role::ALL.len() - 1)]
    }

    pub fn is_compact(&self) -> bool {
        self.terminal_width < self.settings.compact_width
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    pub role: Role,
    pub profile: &'static RoleProfile,
    pub screen: Screen,
    pub cursor: usize,
    pub search: String,
    pub search_focused: bool,
    pub menu_open: bool,
}

impl ShellState {
    pub fn new(role: Role) -> Self {
        let profile = role_profile(role);
        Self {
            role,
            profile,
            screen: profile.default_screen,
            cursor: 0,
            search: String::new(),
            search_focused: false,
            menu_open: false,
        }
    }

    pub fn title(&self) -> &'static str {
        self.profile.title_for(self.screen)
    }

    /// Returns false and leaves the screen alone when `screen` is not part of
    /// the role's navigation.
    pub fn navigate(&mut self, screen: Screen) -> bool {
        if !self.profile.allows(screen) {
            return false;
        }
        if self.screen != screen {
            self.cursor = 0;
            self.search.clear();
            self.search_focused = false;
        }
        self.screen = screen;
        self.menu_open = false;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineStep {
    pub title: &'static str,
    pub detail: &'static str,
    pub time: String,
    pub active: bool,
}

pub fn resolution_timeline(issue: &Issue) -> [TimelineStep; 4] {
    let status = issue.status;
    [
        TimelineStep {
            title: "Report Filed",
            detail: "System successfully captured your issue report.",
            time: issue.date.format("%Y-%m-%d").to_string(),
            active: true,
        },
        TimelineStep {
            title: "Admin Verification",
            detail: "Campus team is reviewing the severity and location.",
            time: "Processed".to_string(),
            active: status != IssueStatus::Open,
        },
        TimelineStep {
            title: "Officer Assigned",
            detail: "A specialized officer has been dispatched to the site.",
            time: "In Transit".to_string(),
            active: matches!(status, IssueStatus::InProgress | IssueStatus::Resolved),
        },
        TimelineStep {
            title: "Issue Resolved",
            detail: "The reported problem has been successfully addressed.",
            time: "Complete".to_string(),
            active: status == IssueStatus::Resolved,
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentDashboard {
    pub issues: Collection<Issue>,
    pub notifications: Vec<Notification>,
    pub report_form: Option<ReportForm>,
    pub selected_issue: Option<String>,
}

impl StudentDashboard {
    pub fn seeded(reporter: &str) -> Self {
        Self {
            issues: seed::student_issues(reporter),
            notifications: seed::student_notifications(),
            report_form: None,
            selected_issue: None,
        }
    }

    pub fn stats(&self) -> StudentStats {
        let total = self.issues.len();
        let completed = self
            .issues
            .iter()
            .filter(|issue| issue.status == IssueStatus::Resolved)
            .count();
        StudentStats {
            total,
            active: total - completed,
            completed,
        }
    }

    pub fn recent(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().take(3)
    }

    pub fn filtered(&self, query: &str) -> Vec<&Issue> {
        self.issues.filtered::<ByReportText>(query)
    }

    pub fn selected(&self) -> Option<&Issue> {
        self.selected_issue
            .as_deref()
            .and_then(|id| self.issues.get(id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminDashboard {
    pub issues: Collection<Issue>,
    pub notifications: Vec<Notification>,
    pub weekly_activity: ChartSeries,
    /// Open while an issue is selected for dispatch.
    pub assign: Option<AssignForm>,
}

impl AdminDashboard {
    pub fn seeded() -> Self {
        Self {
            issues: seed::admin_issues(),
            notifications: seed::admin_notifications(),
            weekly_activity: seed::weekly_activity(),
            assign: None,
        }
    }

    pub fn filtered(&self, query: &str) -> Vec<&Issue> {
        self.issues.filtered::<ByReporterIdCategory>(query)
    }

    pub fn unassigned_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.is_unassigned())
            .count()
    }

    pub fn selected(&self) -> Option<&Issue> {
        self.assign
            .as_ref()
            .and_then(|form| self.issues.get(&form.issue_id))
    }

    /// Open high-priority issues, the ones surfaced as late responses.
    pub fn critical_escalations(&self) -> Vec<&Issue> {
        self.issues
            .iter()
            .filter(|issue| issue.priority == Priority::High && issue.status == IssueStatus::Open)
            .collect()
    }

    pub fn stat_cards(&self) -> Vec<Kpi> {
        let card = |title: &str, value: String, trend: &str, positive: bool| Kpi {
            title: title.to_string(),
            value,
            trend: trend.to_string(),
            positive,
        };
        vec![
            card("Total Reports", "142".to_string(), "+12%", true),
            card("Unassigned", self.unassigned_count().to_string(), "-5%", true),
            card("In Progress", "48".to_string(), "+8%", true),
            card("Resolved", "82".to_string(), "+24%", true),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workload {
    pub total: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl Workload {
    pub fn pending(&self) -> usize {
        self.total - self.completed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficialDashboard {
    pub tasks: Collection<Task>,
    pub selected_task: Option<String>,
}

impl OfficialDashboard {
    pub fn seeded() -> Self {
        Self {
            tasks: seed::official_tasks(),
            selected_task: None,
        }
    }

    pub fn filtered(&self, query: &str) -> Vec<&Task> {
        self.tasks.filtered::<()>(query)
    }

    /// Always read through the live collection so status edits show up here.
    pub fn selected(&self) -> Option<&Task> {
        self.selected_task
            .as_deref()
            .and_then(|id| self.tasks.get(id))
    }

    pub fn notifications(&self) -> Vec<Notification> {
        seed::task_notifications(&self.tasks)
    }

    pub fn workload(&self) -> Workload {
        let count = |status: TaskStatus| self.tasks.iter().filter(|t| t.status == status).count();
        Workload {
            total: self.tasks.len(),
            in_progress: count(TaskStatus::InProgress),
            completed: count(TaskStatus::Completed),
        }
    }

    pub fn top_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().take(2)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagementDashboard {
    pub kpis: Vec<Kpi>,
    pub departments: Vec<DepartmentLoad>,
    pub performance: ChartSeries,
    pub resolution_mix: ChartSeries,
    pub escalations: Collection<Escalation>,
    pub notifications: Vec<Notification>,
}

impl ManagementDashboard {
    pub fn seeded() -> Self {
        Self {
            kpis: seed::management_kpis(),
            departments: seed::department_loads(),
            performance: seed::monthly_performance(),
            resolution_mix: seed::resolution_mix(),
            escalations: seed::management_escalations(),
            notifications: seed::management_notifications(),
        }
    }

    pub fn filtered(&self, query: &str) -> Vec<&Escalation> {
        self.escalations.filtered::<()>(query)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleDashboard {
    Student(StudentDashboard),
    Admin(AdminDashboard),
    Official(OfficialDashboard),
    Management(ManagementDashboard),
}

impl RoleDashboard {
    pub fn seeded(role: Role, settings: &SessionSettings) -> Self {
        match role {
            Role::Student => Self::Student(StudentDashboard::seeded(&settings.reporter_name)),
            Role::Admin => Self::Admin(AdminDashboard::seeded()),
            Role::Official => Self::Official(OfficialDashboard::seeded()),
            Role::Management => Self::Management(ManagementDashboard::seeded()),
        }
    }
}

/// What a row on the current screen points at when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowTarget {
    Issue(String),
    Task(String),
    Escalation(String),
    Link(NotificationLink),
    Inert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub shell: ShellState,
    pub data: RoleDashboard,
}

impl Dashboard {
    pub fn new(role: Role, settings: &SessionSettings) -> Self {
        Self {
            shell: ShellState::new(role),
            data: RoleDashboard::seeded(role, settings),
        }
    }

    pub fn notifications(&self) -> Vec<Notification> {
        match &self.data {
            RoleDashboard::Student(student) => student.notifications.clone(),
            RoleDashboard::Admin(admin) => admin.notifications.clone(),
            RoleDashboard::Official(official) => official.notifications(),
            RoleDashboard::Management(management) => management.notifications.clone(),
        }
    }

    pub fn has_open_form(&self) -> bool {
        match &self.data {
            RoleDashboard::Student(student) => student.report_form.is_some(),
            RoleDashboard::Admin(admin) => {
                admin.assign.is_some() && self.shell.screen == Screen::Assign
            }
            _ => false,
        }
    }

    /// Rows of the list on the current screen, after filtering, in display
    /// order. The shell cursor indexes into this.
    pub fn rows(&self) -> Vec<RowTarget> {
        let query = self.shell.search.as_str();
        match (&self.data, self.shell.screen) {
            (_, Screen::Notifications) => self
                .notifications()
                .into_iter()
                .map(|note| note.link.map(RowTarget::Link).unwrap_or(RowTarget::Inert))
                .collect(),
            (RoleDashboard::Student(student), Screen::Home) => student
                .recent()
                .map(|issue| RowTarget::Issue(issue.id.clone()))
                .collect(),
            (RoleDashboard::Student(student), Screen::Reports) => student
                .filtered(query)
                .into_iter()
                .map(|issue| RowTarget::Issue(issue.id.clone()))
                .collect(),
            (RoleDashboard::Admin(admin), Screen::Home) => admin
                .critical_escalations()
                .into_iter()
                .map(|issue| RowTarget::Issue(issue.id.clone()))
                .collect(),
            (RoleDashboard::Admin(admin), Screen::AllReports) => admin
                .filtered(query)
                .into_iter()
                .map(|issue| RowTarget::Issue(issue.id.clone()))
                .collect(),
            (RoleDashboard::Official(official), Screen::Home) => official
                .top_tasks()
                .map(|task| RowTarget::Task(task.id.clone()))
                .collect(),
            (RoleDashboard::Official(official), Screen::Tasks) => official
                .filtered(query)
                .into_iter()
                .map(|task| RowTarget::Task(task.id.clone()))
                .collect(),
            (RoleDashboard::Management(management), Screen::Escalations) => management
                .filtered(query)
                .into_iter()
                .map(|escalation| RowTarget::Escalation(escalation.id.clone()))
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn current_row(&self) -> Option<RowTarget> {
        self.rows().into_iter().nth(self.shell.cursor)
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.rows().len();
        self.shell.cursor = if len == 0 {
            0
        } else {
            self.shell.cursor.min(len - 1)
        };
    }
}
