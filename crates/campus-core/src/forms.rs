//! Managed form state for the login, report and assignment flows.
//!
//! Every input lives in the form struct, so a failed validation flags the
//! offending fields inline and leaves the other entered values untouched.

use thiserror::Error;

use super::model::Priority;
use super::seed::IssueCategory;
use super::seed::Technician;
use super::seed::DEFAULT_LOCATION;
use super::seed::ISSUE_CATEGORIES;
use super::seed::TECHNICIANS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Identifier,
    Password,
    Category,
    Priority,
    Location,
    Description,
    Technician,
    Urgency,
}

impl FieldId {
    pub fn label(self) -> &'static str {
        match self {
            Self::Identifier => "ID / Email",
            Self::Password => "Password",
            Self::Category => "Category",
            Self::Priority => "Priority",
            Self::Location => "Location",
            Self::Description => "Description",
            Self::Technician => "Official",
            Self::Urgency => "Urgency Override",
        }
    }

    pub fn is_select(self) -> bool {
        matches!(
            self,
            Self::Category | Self::Priority | Self::Technician | Self::Urgency
        )
    }

    pub fn required_message(self) -> String {
        match self {
            Self::Identifier => "Please enter your ID or Email".to_string(),
            Self::Password => "Please enter your password".to_string(),
            Self::Technician => "Select a technician".to_string(),
            other => format!("{} is required", other.label()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    Required,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .field.required_message())]
pub struct FieldError {
    pub field: FieldId,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn required(field: FieldId) -> Self {
        Self {
            field,
            kind: FieldErrorKind::Required,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has(&self, field: FieldId) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }

    pub fn message_for(&self, field: FieldId) -> Option<String> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(ToString::to_string)
    }

    pub fn clear(&mut self, field: FieldId) {
        self.errors.retain(|error| error.field != field);
    }

    fn require(&mut self, field: FieldId, present: bool) {
        if !present {
            self.errors.push(FieldError::required(field));
        }
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Shared editing surface for the focusable forms.
pub trait Form {
    fn fields(&self) -> &'static [FieldId];
    fn focus_index(&self) -> usize;
    fn set_focus_index(&mut self, index: usize);
    fn text_mut(&mut self, field: FieldId) -> Option<&mut String>;
    fn cycle_field(&mut self, field: FieldId, forward: bool);
    fn errors_mut(&mut self) -> &mut ValidationErrors;

    fn focused(&self) -> FieldId {
        let fields = self.fields();
        fields[self.focus_index().min(fields.len() - 1)]
    }

    fn focus_next(&mut self) {
        let len = self.fields().len();
        self.set_focus_index((self.focus_index() + 1) % len);
    }

    fn focus_prev(&mut self) {
        let len = self.fields().len();
        let idx = self.focus_index();
        self.set_focus_index(if idx == 0 { len - 1 } else { idx - 1 });
    }

    fn input(&mut self, ch: char) {
        let field = self.focused();
        if let Some(text) = self.text_mut(field) {
            text.push(ch);
            self.errors_mut().clear(field);
        }
    }

    fn backspace(&mut self) {
        let field = self.focused();
        if let Some(text) = self.text_mut(field) {
            text.pop();
        }
    }

    fn cycle(&mut self, forward: bool) {
        let field = self.focused();
        if field.is_select() {
            self.cycle_field(field, forward);
            self.errors_mut().clear(field);
        }
    }
}

fn cycle_option<T: Copy + PartialEq>(current: Option<T>, options: &[T], forward: bool) -> Option<T> {
    if options.is_empty() {
        return None;
    }
    let position = current.and_then(|value| options.iter().position(|option| *option == value));
    match (position, forward) {
        (None, true) => Some(options[0]),
        (None, false) => Some(options[options.len() - 1]),
        (Some(idx), true) if idx + 1 == options.len() => None,
        (Some(idx), true) => Some(options[idx + 1]),
        (Some(0), false) => None,
        (Some(idx), false) => Some(options[idx - 1]),
    }
}

const LOGIN_FIELDS: &[FieldId] = &[FieldId::Identifier, FieldId::Password];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub identifier: String,
    pub password: String,
    pub focus: usize,
    pub errors: ValidationErrors,
}

impl LoginForm {
    pub fn validate(&mut self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require(FieldId::Identifier, present(&self.identifier));
        errors.require(FieldId::Password, !self.password.is_empty());
        self.errors = errors.clone();
        errors.into_result()
    }
}

impl Form for LoginForm {
    fn fields(&self) -> &'static [FieldId] {
        LOGIN_FIELDS
    }

    fn focus_index(&self) -> usize {
        self.focus
    }

    fn set_focus_index(&mut self, index: usize) {
        self.focus = index;
    }

    fn text_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::Identifier => Some(&mut self.identifier),
            FieldId::Password => Some(&mut self.password),
            _ => None,
        }
    }

    fn cycle_field(&mut self, _field: FieldId, _forward: bool) {}

    fn errors_mut(&mut self) -> &mut ValidationErrors {
        &mut self.errors
    }
}

const REPORT_FIELDS: &[FieldId] = &[
    FieldId::Category,
    FieldId::Location,
    FieldId::Priority,
    FieldId::Description,
];

/// Values accepted by a report submission, location already defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    pub category: String,
    pub priority: Priority,
    pub description: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportForm {
    pub category: Option<IssueCategory>,
    pub priority: Option<Priority>,
    pub location: String,
    pub description: String,
    pub focus: usize,
    pub errors: ValidationErrors,
}

impl Default for ReportForm {
    fn default() -> Self {
        Self {
            category: ISSUE_CATEGORIES.first().copied(),
            priority: None,
            location: String::new(),
            description: String::new(),
            focus: 0,
            errors: ValidationErrors::default(),
        }
    }
}

impl ReportForm {
    pub fn validate(&mut self) -> Result<NewIssue, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require(FieldId::Category, self.category.is_some());
        errors.require(FieldId::Priority, self.priority.is_some());
        errors.require(FieldId::Description, present(&self.description));
        self.errors = errors.clone();
        errors.into_result()?;

        let (Some(category), Some(priority)) = (self.category, self.priority) else {
            return Err(self.errors.clone());
        };
        let location = if present(&self.location) {
            self.location.trim().to_string()
        } else {
            DEFAULT_LOCATION.to_string()
        };
        Ok(NewIssue {
            category: category.value.to_string(),
            priority,
            description: self.description.trim().to_string(),
            location,
        })
    }
}

impl Form for ReportForm {
    fn fields(&self) -> &'static [FieldId] {
        REPORT_FIELDS
    }

    fn focus_index(&self) -> usize {
        self.focus
    }

    fn set_focus_index(&mut self, index: usize) {
        self.focus = index;
    }

    fn text_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::Location => Some(&mut self.location),
            FieldId::Description => Some(&mut self.description),
            _ => None,
        }
    }

    fn cycle_field(&mut self, field: FieldId, forward: bool) {
        match field {
            FieldId::Category => {
                // Category never goes back to empty once picked.
                self.category = cycle_option(self.category, ISSUE_CATEGORIES, forward)
                    .or_else(|| {
                        if forward {
                            ISSUE_CATEGORIES.first().copied()
                        } else {
                            ISSUE_CATEGORIES.last().copied()
                        }
                    });
            }
            FieldId::Priority => {
                self.priority = cycle_option(self.priority, &Priority::ALL, forward);
            }
            _ => {}
        }
    }

    fn errors_mut(&mut self) -> &mut ValidationErrors {
        &mut self.errors
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Standard,
    Medium,
    High,
    Critical,
}

impl Urgency {
    pub const ALL: [Urgency; 4] = [Self::Standard, Self::Medium, Self::High, Self::Critical];

    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard Priority",
            Self::Medium => "Medium Priority",
            Self::High => "High Priority",
            Self::Critical => "Critical / Emergency",
        }
    }

    /// Critical has no issue priority of its own and lands on high.
    pub fn priority(self) -> Priority {
        match self {
            Self::Standard => Priority::Low,
            Self::Medium => Priority::Medium,
            Self::High | Self::Critical => Priority::High,
        }
    }
}

const ASSIGN_FIELDS: &[FieldId] = &[FieldId::Technician, FieldId::Urgency];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub issue_id: String,
    pub technician: String,
    pub priority: Option<Priority>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignForm {
    pub issue_id: String,
    pub technician: Option<Technician>,
    pub urgency: Option<Urgency>,
    pub focus: usize,
    pub errors: ValidationErrors,
}

impl AssignForm {
    pub fn for_issue(issue_id: &str) -> Self {
        Self {
            issue_id: issue_id.to_string(),
            technician: None,
            urgency: None,
            focus: 0,
            errors: ValidationErrors::default(),
        }
    }

    pub fn validate(&mut self) -> Result<Assignment, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.require(FieldId::Technician, self.technician.is_some());
        self.errors = errors.clone();
        errors.into_result()?;

        let Some(technician) = self.technician else {
            return Err(self.errors.clone());
        };
        Ok(Assignment {
            issue_id: self.issue_id.clone(),
            technician: technician.name.to_string(),
            priority: self.urgency.map(Urgency::priority),
        })
    }
}

impl Form for AssignForm {
    fn fields(&self) -> &'static [FieldId] {
        ASSIGN_FIELDS
    }

    fn focus_index(&self) -> usize {
        self.focus
    }

    fn set_focus_index(&mut self, index: usize) {
        self.focus = index;
    }

    fn text_mut(&mut self, _field: FieldId) -> Option<&mut String> {
        None
    }

    fn cycle_field(&mut self, field: FieldId, forward: bool) {
        match field {
            FieldId::Technician => {
                self.technician = cycle_option(self.technician, TECHNICIANS, forward);
            }
            FieldId::Urgency => {
                self.urgency = cycle_option(self.urgency, &Urgency::ALL, forward);
            }
            _ => {}
        }
    }

    fn errors_mut(&mut self) -> &mut ValidationErrors {
        &mut self.errors
    }
}
