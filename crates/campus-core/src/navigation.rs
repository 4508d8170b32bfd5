use serde::Deserialize;
use serde::Serialize;

use super::model::ProfileField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Admin,
    Official,
    Management,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Self::Student,
        Self::Admin,
        Self::Official,
        Self::Management,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Admin => "admin",
            Self::Official => "official",
            Self::Management => "management",
        }
    }

    /// Heading used on the landing cards and the login form.
    pub fn title(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Admin => "Administrator",
            Self::Official => "Related Official",
            Self::Management => "Authority / Management",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Self::Student => {
                "Report issues across campus and track their resolution status in real-time."
            }
            Self::Admin => {
                "Manage all reported issues, assign tasks to officials, and oversee campus maintenance."
            }
            Self::Official => {
                "Access your assigned tasks, update work status, and submit completion reports."
            }
            Self::Management => {
                "Monitor high-level campus analytics, performance metrics, and system escalations."
            }
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "student" => Some(Self::Student),
            "admin" => Some(Self::Admin),
            "official" => Some(Self::Official),
            "management" => Some(Self::Management),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Home,
    Reports,
    AllReports,
    Assign,
    Tasks,
    Analytics,
    Escalations,
    Notifications,
    Profile,
    Settings,
    Privacy,
}

impl Screen {
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Reports => "reports",
            Self::AllReports => "all-reports",
            Self::Assign => "assign",
            Self::Tasks => "tasks",
            Self::Analytics => "analytics",
            Self::Escalations => "escalations",
            Self::Notifications => "notifications",
            Self::Profile => "profile",
            Self::Settings => "settings",
            Self::Privacy => "privacy",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        ALL_SCREENS.iter().copied().find(|screen| screen.id() == id)
    }
}

const ALL_SCREENS: [Screen; 11] = [
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub screen: Screen,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Indigo,
    Emerald,
    Purple,
}

impl Accent {
    pub fn label(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Emerald => "emerald",
            Self::Purple => "purple",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenTitle {
    pub screen: Screen,
    pub title: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleProfile {
    pub role: Role,
    pub brand: &'static str,
    pub accent: Accent,
    pub default_screen: Screen,
    pub nav: &'static [NavItem],
    pub titles: &'static [ScreenTitle],
    pub fallback_title: &'static str,
    pub display_name: &'static str,
    pub headline: &'static str,
    pub profile_fields: &'static [ProfileField],
}

impl RoleProfile {
    /// Role items first, then the shared system section.
    pub fn screens(&self) -> impl Iterator<Item = &'static NavItem> {
        self.nav.iter().chain(SYSTEM_NAV.iter())
    }

    pub fn allows(&self, screen: Screen) -> bool {
        self.screens().any(|item| item.screen == screen)
    }

    pub fn title_for(&self, screen: Screen) -> &'static str {
        self.titles
            .iter()
            .find(|entry| entry.screen == screen)
            .map(|entry| entry.title)
            .unwrap_or(self.fallback_title)
    }

    pub fn label_for(&self, screen: Screen) -> Option<&'static str> {
        self.screens()
            .find(|item| item.screen == screen)
            .map(|item| item.label)
    }

    pub fn next_screen(&self, current: Screen) -> Screen {
        next_screen_from(current, self.nav)
    }

    pub fn prev_screen(&self, current: Screen) -> Screen {
        prev_screen_from(current, self.nav)
    }
}

pub const SYSTEM_NAV: &[NavItem] = &[
    NavItem {
        screen: Screen::Settings,
        label: "Settings",
    },
    NavItem {
        screen: Screen::Privacy,
        label: "Privacy Policy",
    },
];

const STUDENT_NAV: &[NavItem] = &[
    NavItem {
        screen: Screen::Home,
        label: "Dashboard",
    },
    NavItem {
        screen: Screen::Reports,
        label: "My Reports",
    },
    NavItem {
        screen: Screen::Notifications,
        label: "Notifications",
    },
    NavItem {
        screen: Screen::Profile,
        label: "Profile",
    },
];

const ADMIN_NAV: &[NavItem] = &[
    NavItem {
        screen: Screen::Home,
        label: "Dashboard",
    },
    NavItem {
        screen: Screen::AllReports,
        label: "All Reports",
    },
    NavItem {
        screen: Screen::Assign,
        label: "Assign Tasks",
    },
    NavItem {
        screen: Screen::Notifications,
        label: "Notifications",
    },
    NavItem {
        screen: Screen::Profile,
        label: "Profile",
    },
];

const OFFICIAL_NAV: &[NavItem] = &[
    NavItem {
        screen: Screen::Home,
        label: "Dashboard",
    },
    NavItem {
        screen: Screen::Tasks,
        label: "Assigned Tasks",
    },
    NavItem {
        screen: Screen::Notifications,
        label: "Notifications",
    },
    NavItem {
        screen: Screen::Profile,
        label: "Profile",
    },
];

const MANAGEMENT_NAV: &[NavItem] = &[
    NavItem {
        screen: Screen::Home,
        label: "Dashboard",
    },
    NavItem {
        screen: Screen::Analytics,
        label: "Analytics",
    },
    NavItem {
        screen: Screen::Escalations,
        label: "Escalations",
    },
    NavItem {
        screen: Screen::Notifications,
        label: "Notifications",
    },
    NavItem {
        screen: Screen::Profile,
        label: "Profile",
    },
];

const STUDENT_TITLES: &[ScreenTitle] = &[
    ScreenTitle {
        screen: Screen::Home,
        title: "Campus Overview",
    },
    ScreenTitle {
        screen: Screen::Reports,
        title: "My Issue Reports",
    },
    ScreenTitle {
        screen: Screen::Notifications,
        title: "Alert Center",
    },
    ScreenTitle {
        screen: Screen::Profile,
        title: "My Profile",
    },
];

const ADMIN_TITLES: &[ScreenTitle] = &[
    ScreenTitle {
        screen: Screen::Home,
        title: "Admin Hub",
    },
    ScreenTitle {
        screen: Screen::AllReports,
        title: "Campus Repository",
    },
    ScreenTitle {
        screen: Screen::Assign,
        title: "Workforce Dispatch",
    },
    ScreenTitle {
        screen: Screen::Notifications,
        title: "System Alerts",
    },
];

const OFFICIAL_TITLES: &[ScreenTitle] = &[
    ScreenTitle {
        screen: Screen::Home,
        title: "Service Hub",
    },
    ScreenTitle {
        screen: Screen::Tasks,
        title: "Work Assignments",
    },
    ScreenTitle {
        screen: Screen::Notifications,
        title: "Duty Alerts",
    },
];

const MANAGEMENT_TITLES: &[ScreenTitle] = &[
    ScreenTitle {
        screen: Screen::Home,
        title: "Executive Portal",
    },
    ScreenTitle {
        screen: Screen::Analytics,
        title: "Analytics",
    },
    ScreenTitle {
        screen: Screen::Escalations,
        title: "Escalations",
    },
    ScreenTitle {
        screen: Screen::Notifications,
        title: "Notifications",
    },
    ScreenTitle {
        screen: Screen::Profile,
        title: "Profile",
    },
    ScreenTitle {
        screen: Screen::Settings,
        title: "Settings",
    },
    ScreenTitle {
        screen: Screen::Privacy,
        title: "Privacy",
    },
];

const STUDENT_FIELDS: &[ProfileField] = &[
    ProfileField {
        label: "Identity Number",
        value: "ST-2026-X8",
    },
    ProfileField {
        label: "Campus Email",
        value: "alex.j@smartcampus.edu",
    },
    ProfileField {
        label: "Registered Phone",
        value: "+1 (555) 000-1234",
    },
    ProfileField {
        label: "Academic Block",
        value: "Engineering Faculty",
    },
];

const ADMIN_FIELDS: &[ProfileField] = &[
    ProfileField {
        label: "Employee Identification",
        value: "ADMIN-MOD-001",
    },
    ProfileField {
        label: "Primary Contact Email",
        value: "admin@smartcampus.edu",
    },
    ProfileField {
        label: "Stationed Office",
        value: "Admin Block, Room 102",
    },
    ProfileField {
        label: "Emergency Hotline",
        value: "+1 (555) 999-0000",
    },
];

const OFFICIAL_FIELDS: &[ProfileField] = &[
    ProfileField {
        label: "Service ID",
        value: "FAC-OFF-2026",
    },
    ProfileField {
        label: "Core Specialty",
        value: "Infrastructure & Grid",
    },
    ProfileField {
        label: "Official Email",
        value: "john.m@smartcampus.edu",
    },
    ProfileField {
        label: "Duty Radio",
        value: "EXT-2244",
    },
];

const MANAGEMENT_FIELDS: &[ProfileField] = &[
    ProfileField {
        label: "Authority Tier",
        value: "Tier 1 - Executive",
    },
    ProfileField {
        label: "Primary Email",
        value: "coo@smartcampus.edu",
    },
    ProfileField {
        label: "Access Level",
        value: "Full System Administration",
    },
    ProfileField {
        label: "Office Extension",
        value: "Ext. 9901",
    },
];

const ROLE_PROFILES: [RoleProfile; 4] = [
    RoleProfile {
        role: Role::Student,
        brand: "Student Portal",
        accent: Accent::Blue,
        default_screen: Screen::Home,
        nav: STUDENT_NAV,
        titles: STUDENT_TITLES,
        fallback_title: "Student Hub",
        display_name: "Alex Johnson",
        headline: "B.Tech Computer Science • Final Year Candidate",
        profile_fields: STUDENT_FIELDS,
    },
    RoleProfile {
        role: Role::Admin,
        brand: "Admin Console",
        accent: Accent::Indigo,
        default_screen: Screen::Home,
        nav: ADMIN_NAV,
        titles: ADMIN_TITLES,
        fallback_title: "Profile Control",
        display_name: "Campus Administrator",
        headline: "Lead Operations Officer • Maintenance Division",
        profile_fields: ADMIN_FIELDS,
    },
    RoleProfile {
        role: Role::Official,
        brand: "Service Hub",
        accent: Accent::Emerald,
        default_screen: Screen::Home,
        nav: OFFICIAL_NAV,
        titles: OFFICIAL_TITLES,
        fallback_title: "Officer Account",
        display_name: "Officer John",
        headline: "Senior Electrical Technician • Campus Facilities",
        profile_fields: OFFICIAL_FIELDS,
    },
    RoleProfile {
        role: Role::Management,
        brand: "Management Suite",
        accent: Accent::Purple,
        default_screen: Screen::Home,
        nav: MANAGEMENT_NAV,
        titles: MANAGEMENT_TITLES,
        fallback_title: "Executive Portal",
        display_name: "Dr. Sarah Thompson",
        headline: "Chief Operational Officer • Campus Authority",
        profile_fields: MANAGEMENT_FIELDS,
    },
];

pub fn role_profile(role: Role) -> &'static RoleProfile {
    match role {
        Role::Student => &ROLE_PROFILES[0],
        Role::Admin => &ROLE_PROFILES[1],
        Role::Official => &ROLE_PROFILES[2],
        Role::Management => &ROLE_PROFILES[3],
    }
}

fn next_screen_from(current: Screen, order: &[NavItem]) -> Screen {
    if order.is_empty() {
        return current;
    }

    if let Some(idx) = order.iter().position(|item| item.screen == current) {
        return order[(idx + 1) % order.len()].screen;
    }

    order[0].screen
}

fn prev_screen_from(current: Screen, order: &[NavItem]) -> Screen {
    if order.is_empty() {
        return current;
    }

    if let Some(idx) = order.iter().position(|item| item.screen == current) {
        if idx == 0 {
            return order[order.len() - 1].screen;
        }
        return order[idx - 1].screen;
    }

    order[0].screen
}
