use chrono::NaiveDate;

use super::model::TaskStatus;
use super::navigation::Role;
use super::navigation::Screen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    User(UserAction),
    Runtime(RuntimeAction),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    LandingUp,
    LandingDown,
    /// Picks the role under the landing cursor.
    LandingSubmit,
    SelectRole(Role),
    /// Validates the login form, then authenticates.
    LoginSubmit,
    /// Enters the dashboard without looking at the form.
    Authenticate,
    Back,
    Logout,

    Navigate(Screen),
    NavNext,
    NavPrev,
    ToggleMenu,
    CursorUp,
    CursorDown,
    /// Opens whatever the row under the cursor points at.
    Activate,

    FocusSearch,
    SearchInput(char),
    SearchBackspace,
    /// Leaves the search box, keeping the query.
    BlurSearch,
    ClearSearch,

    OpenReportForm,
    OpenIssue {
        id: String,
    },
    CloseIssue,

    QuickAssign {
        id: String,
    },
    ClearAssignSelection,

    SelectTask {
        id: String,
    },
    ProcessTask {
        id: String,
    },
    CloseTask,
    SetTaskStatus {
        id: String,
        status: TaskStatus,
    },

    Escalate {
        id: String,
    },

    FormInput(char),
    FormBackspace,
    FormNextField,
    FormPrevField,
    FormCycle {
        forward: bool,
    },
    FormSubmit,
    FormCancel,

    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeAction {
    SetToday(NaiveDate),
    Resize { width: u16 },
}

impl From<UserAction> for AppAction {
    fn from(action: UserAction) -> Self {
        Self::User(action)
    }
}

impl From<RuntimeAction> for AppAction {
    fn from(action: RuntimeAction) -> Self {
        Self::Runtime(action)
    }
}
