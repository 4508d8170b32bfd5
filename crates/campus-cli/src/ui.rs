use std::io;
use std::time::Duration;
use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    BarChart, Block, Borders, Cell, Clear, Gauge, List, ListItem, ListState, Paragraph, Row,
    Sparkline, Table, Wrap,
};
use ratatui::Frame;
use ratatui::Terminal;

use campus_core::actions::{AppAction, RuntimeAction, UserAction};
use campus_core::charts::Kpi;
use campus_core::config::Config;
use campus_core::forms::{AssignForm, FieldId, Form, LoginForm, ReportForm, ValidationErrors};
use campus_core::model::{
    Issue, IssueStatus, Notification, NotificationKind, Priority, Severity, Task, TaskStatus,
};
use campus_core::navigation::{role_profile, Accent, Role, RoleProfile, Screen};
use campus_core::reducer::{reduce, CampusEffect, ToastLevel};
use campus_core::state::{
    resolution_timeline, AdminDashboard, AppState, AppView, Dashboard, ManagementDashboard,
    OfficialDashboard, RoleDashboard, ShellState, StudentDashboard,
};
use campus_exec::{
    avatar_or_placeholder, FanoutPresenter, HostedAvatarProvider, InitialsAvatarProvider,
    ToastMessage, ToastPresenter, ToastQueue, ToastSeverity, TracingToastPresenter,
    DICEBEAR_BASE_URL,
};

struct TuiGuard;

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
    }
}

pub fn run(mut state: AppState, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, crossterm::cursor::Hide)?;
    let _guard = TuiGuard; // Restores the terminal on exit or panic

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let mut toasts = ToastQueue::new(config.ui.toast_ttl_ticks);
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);

    run_app(&mut terminal, &mut state, &mut toasts, tick_rate).map_err(|e| e.into())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    toasts: &mut ToastQueue,
    tick_rate: Duration,
) -> io::Result<()> {
    let size = terminal.size()?;
    dispatch(state, toasts, RuntimeAction::Resize { width: size.width }.into());
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui(f, state, toasts))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let action = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    action_for_key(state, key).map(AppAction::User)
                }
                Event::Resize(width, _) => Some(RuntimeAction::Resize { width }.into()),
                _ => None,
            };
            if let Some(action) = action {
                if dispatch(state, toasts, action) == LoopControl::Exit {
                    return Ok(());
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            toasts.tick();
            let today = chrono::Local::now().date_naive();
            if today != state.today {
                dispatch(state, toasts, RuntimeAction::SetToday(today).into());
            }
            last_tick = Instant::now();
        }
    }
}

fn dispatch(state: &mut AppState, toasts: &mut ToastQueue, action: AppAction) -> LoopControl {
    let mut logger = TracingToastPresenter;
    for effect in reduce(state, action) {
        match effect {
            CampusEffect::RequestFrame => {}
            CampusEffect::Toast { message, level } => {
                let presenters: Vec<&mut dyn ToastPresenter> = vec![&mut *toasts, &mut logger];
                FanoutPresenter::new(presenters).present(toast_message(message, level));
            }
            CampusEffect::Quit => return LoopControl::Exit,
        }
    }
    LoopControl::Continue
}

fn toast_message(message: String, level: ToastLevel) -> ToastMessage {
    match level {
        ToastLevel::Success => ToastMessage::success(message),
        ToastLevel::Error => ToastMessage::error(message),
    }
}

fn action_for_key(state: &AppState, key: KeyEvent) -> Option<UserAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UserAction::Quit);
    }

    match state.current_view() {
        AppView::Landing => landing_key(key),
        AppView::Login => login_key(key),
        AppView::Dashboard => state
            .dashboard
            .as_ref()
            .and_then(|dashboard| dashboard_key(dashboard, key)),
    }
}

fn digit_index(ch: char) -> Option<usize> {
    ch.to_digit(10)
        .and_then(|digit| (digit as usize).checked_sub(1))
}

fn landing_key(key: KeyEvent) -> Option<UserAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(UserAction::LandingUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UserAction::LandingDown),
        KeyCode::Enter => Some(UserAction::LandingSubmit),
        KeyCode::Char('q') | KeyCode::Esc => Some(UserAction::Quit),
        KeyCode::Char(ch) => digit_index(ch)
            .and_then(|index| Role::ALL.get(index).copied())
            .map(UserAction::SelectRole),
        _ => None,
    }
}

fn login_key(key: KeyEvent) -> Option<UserAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('o') {
        return Some(UserAction::Authenticate);
    }
    match key.code {
        KeyCode::Esc => Some(UserAction::Back),
        KeyCode::Enter => Some(UserAction::LoginSubmit),
        KeyCode::Tab | KeyCode::Down => Some(UserAction::FormNextField),
        KeyCode::BackTab | KeyCode::Up => Some(UserAction::FormPrevField),
        KeyCode::Backspace => Some(UserAction::FormBackspace),
        KeyCode::Char(ch) => Some(UserAction::FormInput(ch)),
        _ => None,
    }
}

fn form_key(key: KeyEvent) -> Option<UserAction> {
    match key.code {
        KeyCode::Esc => Some(UserAction::FormCancel),
        KeyCode::Enter => Some(UserAction::FormSubmit),
        KeyCode::Tab | KeyCode::Down => Some(UserAction::FormNextField),
        KeyCode::BackTab | KeyCode::Up => Some(UserAction::FormPrevField),
        KeyCode::Left => Some(UserAction::FormCycle { forward: false }),
        KeyCode::Right => Some(UserAction::FormCycle { forward: true }),
        KeyCode::Backspace => Some(UserAction::FormBackspace),
        KeyCode::Char(ch) => Some(UserAction::FormInput(ch)),
        _ => None,
    }
}

fn search_key(key: KeyEvent) -> Option<UserAction> {
    match key.code {
        KeyCode::Esc => Some(UserAction::ClearSearch),
        KeyCode::Enter => Some(UserAction::BlurSearch),
        KeyCode::Up => Some(UserAction::CursorUp),
        KeyCode::Down => Some(UserAction::CursorDown),
        KeyCode::Backspace => Some(UserAction::SearchBackspace),
        KeyCode::Char(ch) => Some(UserAction::SearchInput(ch)),
        _ => None,
    }
}

fn dashboard_key(dashboard: &Dashboard, key: KeyEvent) -> Option<UserAction> {
    if dashboard.has_open_form() {
        return form_key(key);
    }
    if dashboard.shell.search_focused {
        return search_key(key);
    }

    let shell = &dashboard.shell;
    if let KeyCode::Char(ch) = key.code {
        if let Some(index) = digit_index(ch) {
            return shell
                .profile
                .screens()
                .nth(index)
                .map(|item| UserAction::Navigate(item.screen));
        }
    }

    if shell.menu_open {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('m') => Some(UserAction::ToggleMenu),
            KeyCode::Char('q') => Some(UserAction::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(UserAction::Quit),
        KeyCode::Char('m') => Some(UserAction::ToggleMenu),
        KeyCode::Char('x') => Some(UserAction::Logout),
        KeyCode::Char('/') => Some(UserAction::FocusSearch),
        KeyCode::Tab => Some(UserAction::NavNext),
        KeyCode::BackTab => Some(UserAction::NavPrev),
        KeyCode::Up | KeyCode::Char('k') => Some(UserAction::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UserAction::CursorDown),
        KeyCode::Enter => Some(UserAction::Activate),
        KeyCode::Esc => close_detail(dashboard),
        KeyCode::Char(ch) => role_key(dashboard, ch),
        _ => None,
    }
}

fn close_detail(dashboard: &Dashboard) -> Option<UserAction> {
    match &dashboard.data {
        RoleDashboard::Student(student) if student.selected_issue.is_some() => {
            Some(UserAction::CloseIssue)
        }
        RoleDashboard::Admin(admin) if admin.assign.is_some() => {
            Some(UserAction::ClearAssignSelection)
        }
        RoleDashboard::Official(official) if official.selected_task.is_some() => {
            Some(UserAction::CloseTask)
        }
        _ => None,
    }
}

fn role_key(dashboard: &Dashboard, ch: char) -> Option<UserAction> {
    match (&dashboard.data, ch) {
        (RoleDashboard::Student(_), 'n') => Some(UserAction::OpenReportForm),
        (RoleDashboard::Official(official), 's' | 'c') => {
            // Completed tasks offer no further transitions.
            let task = official.selected()?;
            if task.status == TaskStatus::Completed {
                return None;
            }
            let status = if ch == 's' {
                TaskStatus::InProgress
            } else {
                TaskStatus::Completed
            };
            Some(UserAction::SetTaskStatus {
                id: task.id.clone(),
                status,
            })
        }
        _ => None,
    }
}

#[derive(Clone, Copy)]
struct UiPalette {
    accent: Color,
    accent_alt: Color,
    success: Color,
    warning: Color,
    danger: Color,
    muted: Color,
    border: Color,
    selected_bg: Color,
}

fn palette_for(accent: Accent) -> UiPalette {
    let (accent, accent_alt, selected_bg) = match accent {
        Accent::Blue => (Color::LightBlue, Color::Cyan, Color::Rgb(18, 28, 42)),
        Accent::Indigo => (
            Color::Rgb(129, 140, 248),
            Color::LightMagenta,
            Color::Rgb(30, 27, 75),
        ),
        Accent::Emerald => (Color::LightGreen, Color::Green, Color::Rgb(6, 40, 30)),
        Accent::Purple => (Color::Magenta, Color::LightMagenta, Color::Rgb(46, 16, 62)),
    };
    UiPalette {
        accent,
        accent_alt,
        success: Color::Green,
        warning: Color::Yellow,
        danger: Color::Red,
        muted: Color::DarkGray,
        border: Color::Gray,
        selected_bg,
    }
}

fn priority_color(priority: Priority, palette: UiPalette) -> Color {
    match priority {
        Priority::High => palette.danger,
        Priority::Medium => palette.warning,
        Priority::Low => palette.success,
    }
}

fn issue_status_color(status: IssueStatus, palette: UiPalette) -> Color {
    match status {
        IssueStatus::Open => palette.warning,
        IssueStatus::InProgress => palette.accent,
        IssueStatus::Resolved => palette.success,
    }
}

fn task_status_color(status: TaskStatus, palette: UiPalette) -> Color {
    match status {
        TaskStatus::Assigned => palette.warning,
        TaskStatus::InProgress => palette.accent,
        TaskStatus::Completed => palette.success,
    }
}

fn severity_color(severity: Severity, palette: UiPalette) -> Color {
    match severity {
        Severity::Critical => palette.danger,
        Severity::High => palette.warning,
        Severity::Medium => palette.accent_alt,
    }
}

fn panel(title: impl Into<String>, palette: UiPalette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title(title.into())
}

fn ui(f: &mut Frame, state: &AppState, toasts: &ToastQueue) {
    match state.current_view() {
        AppView::Landing => render_landing(f, state),
        AppView::Login => render_login(f, state),
        AppView::Dashboard => {
            if let Some(dashboard) = state.dashboard.as_ref() {
                render_dashboard(f, state, dashboard, toasts);
                return;
            }
        }
    }
    render_toast_overlay(f, toasts);
}

fn render_landing(f: &mut Frame, state: &AppState) {
    let palette = palette_for(Accent::Blue);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "Campus Desk",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Choose how you want to sign in",
            Style::default().fg(palette.muted),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(heading, chunks[0]);

    let direction = if state.is_compact() {
        Direction::Vertical
    } else {
        Direction::Horizontal
    };
    let cards = Layout::default()
        .direction(direction)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(chunks[1]);

    for (index, role) in Role::ALL.iter().copied().enumerate() {
        let role_palette = palette_for(role_profile(role).accent);
        let selected = index == state.landing_cursor;
        let border = if selected {
            Style::default()
                .fg(role_palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.border)
        };
        let body = vec![
            Line::from(Span::styled(
                format!("[{}] {}", index + 1, role.title()),
                Style::default()
                    .fg(role_palette.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(role.blurb()),
        ];
        let card = Paragraph::new(body)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).border_style(border));
        f.render_widget(card, cards[index]);
    }

    render_hints(
        f,
        chunks[2],
        &[("↑↓", "choose"), ("enter", "continue"), ("1-4", "pick"), ("q", "quit")],
        palette,
    );
}

fn render_login(f: &mut Frame, state: &AppState) {
    let Some(role) = state.role else {
        return;
    };
    let palette = palette_for(role_profile(role).accent);
    let area = centered_rect(50, 60, f.area());
    f.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} Login", role.title()),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(form_lines(&state.login, &state.login.errors, palette, |field| {
        login_field_value(&state.login, field)
    }));
    lines.push(Line::from(""));
    lines.push(hint_line(
        &[("enter", "sign in"), ("ctrl-o", "single sign-on"), ("esc", "back")],
        palette,
    ));

    let block = panel("Sign in", palette).border_style(Style::default().fg(palette.accent));
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

fn login_field_value(form: &LoginForm, field: FieldId) -> String {
    match field {
        FieldId::Identifier => form.identifier.clone(),
        FieldId::Password => "•".repeat(form.password.chars().count()),
        _ => String::new(),
    }
}

fn report_field_value(form: &ReportForm, field: FieldId) -> String {
    match field {
        FieldId::Category => form
            .category
            .map(|category| category.label.to_string())
            .unwrap_or_default(),
        FieldId::Priority => form
            .priority
            .map(|priority| priority.label().to_string())
            .unwrap_or_default(),
        FieldId::Location => form.location.clone(),
        FieldId::Description => form.description.clone(),
        _ => String::new(),
    }
}

fn assign_field_value(form: &AssignForm, field: FieldId) -> String {
    match field {
        FieldId::Technician => form
            .technician
            .map(|tech| format!("{} ({})", tech.name, tech.department))
            .unwrap_or_default(),
        FieldId::Urgency => form
            .urgency
            .map(|urgency| urgency.label().to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

fn field_placeholder(field: FieldId) -> &'static str {
    match field {
        FieldId::Location => "Main Campus",
        FieldId::Urgency => "Keep current priority",
        _ if field.is_select() => "Select…",
        _ => "",
    }
}

fn form_lines<F: Form>(
    form: &F,
    errors: &ValidationErrors,
    palette: UiPalette,
    value_of: impl Fn(FieldId) -> String,
) -> Vec<Line<'static>> {
    let focused = form.focused();
    let mut lines = Vec::new();
    for field in form.fields().iter().copied() {
        let is_focused = field == focused;
        let marker = if is_focused { "› " } else { "  " };
        let value = value_of(field);
        let shown = match (value.is_empty(), field.is_select()) {
            (true, _) => Span::styled(
                field_placeholder(field).to_string(),
                Style::default().fg(palette.muted),
            ),
            (false, true) => Span::raw(format!("‹ {value} ›")),
            (false, false) => Span::raw(value),
        };
        let label_style = if is_focused {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{}: ", field.label()), label_style),
            shown,
            if is_focused && !field.is_select() {
                Span::styled("▏", Style::default().fg(palette.accent))
            } else {
                Span::raw("")
            },
        ]));
        if let Some(message) = errors.message_for(field) {
            lines.push(Line::from(Span::styled(
                format!("    {message}"),
                Style::default().fg(palette.danger),
            )));
        }
    }
    lines
}

fn render_dashboard(f: &mut Frame, state: &AppState, dashboard: &Dashboard, toasts: &ToastQueue) {
    let shell = &dashboard.shell;
    let palette = palette_for(shell.profile.accent);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_header(f, chunks[0], shell, palette);

    let content = if state.is_compact() {
        chunks[1]
    } else {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(26), Constraint::Min(0)])
            .split(chunks[1]);
        render_nav(f, body[0], shell, palette, "Navigation");
        body[1]
    };

    render_screen(f, content, dashboard, palette);
    render_toast_line(f, chunks[2], toasts);
    render_hints(f, chunks[3], &dashboard_hints(dashboard), palette);

    if shell.menu_open {
        let area = centered_rect(50, 60, f.area());
        f.render_widget(Clear, area);
        render_nav(f, area, shell, palette, "Menu");
    }
}

fn render_header(f: &mut Frame, area: Rect, shell: &ShellState, palette: UiPalette) {
    let profile = shell.profile;
    let avatar = avatar_or_placeholder(
        &InitialsAvatarProvider,
        shell.role.label(),
        profile.display_name,
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    let title = Line::from(vec![
        Span::styled(
            profile.brand,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", Style::default().fg(palette.muted)),
        Span::raw(shell.title()),
    ]);
    f.render_widget(Paragraph::new(title), halves[0]);

    let who = Line::from(vec![
        Span::raw(profile.display_name),
        Span::styled(format!("  {}  ", profile.headline), Style::default().fg(palette.muted)),
        Span::styled(
            format!("({})", avatar.initials),
            Style::default()
                .fg(palette.accent_alt)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(who).alignment(Alignment::Right), halves[1]);
}

fn render_nav(f: &mut Frame, area: Rect, shell: &ShellState, palette: UiPalette, title: &str) {
    let items: Vec<ListItem> = shell
        .profile
        .screens()
        .enumerate()
        .map(|(index, item)| {
            let style = if item.screen == shell.screen {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", index + 1), Style::default().fg(palette.muted)),
                Span::styled(item.label, style),
            ]))
        })
        .collect();
    let selected = shell
        .profile
        .screens()
        .position(|item| item.screen == shell.screen);
    let list = List::new(items)
        .block(panel(title, palette))
        .highlight_style(Style::default().bg(palette.selected_bg));
    let mut list_state = ListState::default();
    list_state.select(selected);
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_screen(f: &mut Frame, area: Rect, dashboard: &Dashboard, palette: UiPalette) {
    let shell = &dashboard.shell;
    match (&dashboard.data, shell.screen) {
        (_, Screen::Notifications) => {
            render_notifications(f, area, shell, &dashboard.notifications(), palette)
        }
        (_, Screen::Profile) => render_profile(f, area, shell, palette),
        (RoleDashboard::Student(student), Screen::Home) => {
            render_student_home(f, area, shell, student, palette)
        }
        (RoleDashboard::Student(student), Screen::Reports) => {
            render_student_reports(f, area, shell, student, palette)
        }
        (RoleDashboard::Admin(admin), Screen::Home) => {
            render_admin_home(f, area, shell, admin, palette)
        }
        (RoleDashboard::Admin(admin), Screen::AllReports) => {
            render_admin_reports(f, area, shell, admin, palette)
        }
        (RoleDashboard::Admin(admin), Screen::Assign) => {
            render_admin_assign(f, area, shell, admin, palette)
        }
        (RoleDashboard::Official(official), Screen::Home) => {
            render_official_home(f, area, shell, official, palette)
        }
        (RoleDashboard::Official(official), Screen::Tasks) => {
            render_official_tasks(f, area, shell, official, palette)
        }
        (RoleDashboard::Management(management), Screen::Home) => {
            render_management_home(f, area, shell, management, palette)
        }
        (RoleDashboard::Management(management), Screen::Analytics) => {
            render_management_analytics(f, area, shell, management, palette)
        }
        (RoleDashboard::Management(management), Screen::Escalations) => {
            render_escalations(f, area, shell, management, palette)
        }
        _ => render_placeholder(f, area, shell, palette),
    }

    if let RoleDashboard::Student(student) = &dashboard.data {
        if let Some(form) = student.report_form.as_ref() {
            let modal = centered_rect(70, 80, area);
            f.render_widget(Clear, modal);
            let mut lines = form_lines(form, &form.errors, palette, |field| {
                report_field_value(form, field)
            });
            lines.push(Line::from(""));
            lines.push(hint_line(
                &[("tab", "next field"), ("←→", "choose"), ("enter", "submit"), ("esc", "cancel")],
                palette,
            ));
            let block = panel("Report New Issue", palette)
                .border_style(Style::default().fg(palette.accent));
            f.render_widget(
                Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
                modal,
            );
        }
    }
}

fn render_stat_cards(f: &mut Frame, area: Rect, cards: &[Kpi], palette: UiPalette) {
    if cards.is_empty() {
        return;
    }
    let count = cards.len() as u32;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count); cards.len()])
        .split(area);
    for (card, column) in cards.iter().zip(columns.iter()) {
        let trend_color = if card.positive {
            palette.success
        } else {
            palette.danger
        };
        let lines = vec![
            Line::from(Span::styled(
                card.value.clone(),
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(card.trend.clone(), Style::default().fg(trend_color))),
        ];
        f.render_widget(
            Paragraph::new(lines).block(panel(card.title.clone(), palette)),
            *column,
        );
    }
}

fn count_card(title: &str, value: usize, note: &str) -> Kpi {
    Kpi {
        title: title.to_string(),
        value: value.to_string(),
        trend: note.to_string(),
        positive: true,
    }
}

fn render_search(f: &mut Frame, area: Rect, shell: &ShellState, palette: UiPalette) {
    let (text, style) = if shell.search.is_empty() && !shell.search_focused {
        (
            "press / to search".to_string(),
            Style::default().fg(palette.muted),
        )
    } else {
        (shell.search.clone(), Style::default())
    };
    let border = if shell.search_focused {
        palette.accent
    } else {
        palette.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title("Search");
    f.render_widget(Paragraph::new(Span::styled(text, style)).block(block), area);
}

fn render_rows(
    f: &mut Frame,
    area: Rect,
    title: &str,
    items: Vec<ListItem<'static>>,
    cursor: usize,
    palette: UiPalette,
    empty: &str,
) {
    if items.is_empty() {
        let p = Paragraph::new(Span::styled(empty.to_string(), Style::default().fg(palette.muted)))
            .block(panel(title.to_string(), palette));
        f.render_widget(p, area);
        return;
    }
    let list = List::new(items)
        .block(panel(title.to_string(), palette))
        .highlight_style(Style::default().bg(palette.selected_bg))
        .highlight_symbol("› ");
    let mut list_state = ListState::default();
    list_state.select(Some(cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn issue_item(issue: &Issue, with_reporter: bool, palette: UiPalette) -> ListItem<'static> {
    let mut spans = vec![
        Span::styled(
            format!("{:<6}", issue.id),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {:<12}", issue.category)),
        Span::styled(
            format!(" {:<7}", issue.priority.label()),
            Style::default().fg(priority_color(issue.priority, palette)),
        ),
        Span::styled(
            format!(" {:<12}", issue.status.label()),
            Style::default().fg(issue_status_color(issue.status, palette)),
        ),
        Span::styled(
            format!(" {}", issue.date.format("%Y-%m-%d")),
            Style::default().fg(palette.muted),
        ),
    ];
    if with_reporter {
        spans.push(Span::raw(format!("  {}", issue.reporter)));
        spans.push(Span::styled(
            format!("  → {}", issue.assignee_label()),
            Style::default().fg(if issue.is_unassigned() {
                palette.warning
            } else {
                palette.muted
            }),
        ));
    } else if !issue.description.is_empty() {
        spans.push(Span::styled(
            format!("  {}", issue.description),
            Style::default().fg(palette.muted),
        ));
    }
    ListItem::new(Line::from(spans))
}

fn task_item(task: &Task, palette: UiPalette) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{:<6}", task.id),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {}", task.title)),
        Span::styled(format!("  {}", task.location), Style::default().fg(palette.muted)),
        Span::styled(
            format!("  {}", task.status.label()),
            Style::default().fg(task_status_color(task.status, palette)),
        ),
        Span::styled(format!("  due {}", task.deadline), Style::default().fg(palette.muted)),
    ]))
}

fn render_student_home(
    f: &mut Frame,
    area: Rect,
    shell: &ShellState,
    student: &StudentDashboard,
    palette: UiPalette,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);
    let stats = student.stats();
    render_stat_cards(
        f,
        chunks[0],
        &[
            count_card("Total Reports", stats.total, "all time"),
            count_card("Active", stats.active, "open or in progress"),
            count_card("Completed", stats.completed, "resolved"),
        ],
        palette,
    );
    let items = student
        .recent()
        .map(|issue| issue_item(issue, false, palette))
        .collect();
    render_rows(
        f,
        chunks[1],
        "Recent Activity",
        items,
        shell.cursor,
        palette,
        "No reports yet. Press n to report an issue.",
    );
}

fn render_student_reports(
    f: &mut Frame,
    area: Rect,
    shell: &ShellState,
    student: &StudentDashboard,
    palette: UiPalette,
) {
    let (list_area, detail_area) = split_detail(area, student.selected().is_some());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(list_area);
    render_search(f, chunks[0], shell, palette);
    let items = student
        .filtered(&shell.search)
        .into_iter()
        .map(|issue| issue_item(issue, false, palette))
        .collect();
    render_rows(
        f,
        chunks[1],
        shell.title(),
        items,
        shell.cursor,
        palette,
        "No reports match your search.",
    );

    if let (Some(issue), Some(detail)) = (student.selected(), detail_area) {
        render_issue_detail(f, detail, issue, palette);
    }
}

fn split_detail(area: Rect, has_detail: bool) -> (Rect, Option<Rect>) {
    if !has_detail {
        return (area, None);
    }
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);
    (halves[0], Some(halves[1]))
}

fn render_issue_detail(f: &mut Frame, area: Rect, issue: &Issue, palette: UiPalette) {
    let label = Style::default().fg(palette.accent);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(issue.id.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("  {}", issue.category)),
        ]),
        Line::from(vec![
            Span::styled("Status: ", label),
            Span::styled(
                issue.status.label(),
                Style::default().fg(issue_status_color(issue.status, palette)),
            ),
        ]),
        Line::from(vec![
            Span::styled("Priority: ", label),
            Span::styled(
                issue.priority.label(),
                Style::default().fg(priority_color(issue.priority, palette)),
            ),
        ]),
        Line::from(vec![Span::styled("Location: ", label), Span::raw(issue.location.clone())]),
        Line::from(vec![
            Span::styled("Assigned: ", label),
            Span::raw(issue.assignee_label().to_string()),
        ]),
        Line::from(""),
        Line::from(issue.description.clone()),
        Line::from(""),
        Line::from(Span::styled(
            "Resolution Timeline",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    for step in resolution_timeline(issue) {
        let (glyph, color) = if step.active {
            ("●", palette.success)
        } else {
            ("○", palette.muted)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{glyph} {}", step.title), Style::default().fg(color)),
            Span::styled(format!("  {}", step.time), Style::default().fg(palette.muted)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", step.detail),
            Style::default().fg(palette.muted),
        )));
    }
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel("Issue Details", palette)),
        area,
    );
}

fn render_admin_home(
    f: &mut Frame,
    area: Rect,
    shell: &ShellState,
    admin: &AdminDashboard,
    palette: UiPalette,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);
    render_stat_cards(f, chunks[0], &admin.stat_cards(), palette);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let data = admin.weekly_activity.bar_data();
    let chart = BarChart::default()
        .block(panel(admin.weekly_activity.name.clone(), palette))
        .data(data.as_slice())
        .bar_width(5)
        .bar_gap(1)
        .bar_style(Style::default().fg(palette.accent))
        .value_style(Style::default().fg(Color::Black).bg(palette.accent));
    f.render_widget(chart, lower[0]);

    let items = admin
        .critical_escalations()
        .into_iter()
        .map(|issue| issue_item(issue, true, palette))
        .collect();
    render_rows(
        f,
        lower[1],
        "Critical Escalations",
        items,
        shell.cursor,
        palette,
        "No open high-priority reports.",
    );
}

fn render_admin_reports(
    f: &mut Frame,
    area: Rect,
    shell: &ShellState,
    admin: &AdminDashboard,
    palette: UiPalette,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);
    render_search(f, chunks[0], shell, palette);
    let items = admin
        .filtered(&shell.search)
        .into_iter()
        .map(|issue| issue_item(issue, true, palette))
        .collect();
    render_rows(
        f,
        chunks[1],
        shell.title(),
        items,
        shell.cursor,
        palette,
        "No reports match your search.",
    );
}

fn render_admin_assign(
    f: &mut Frame,
    area: Rect,
    shell: &ShellState,
    admin: &AdminDashboard,
    palette: UiPalette,
) {
    let (Some(form), Some(issue)) = (admin.assign.as_ref(), admin.selected()) else {
        let p = Paragraph::new(vec![
            Line::from("No report selected."),
            Line::from(Span::styled(
                "Open All Reports and press enter on a report to dispatch it.",
                Style::default().fg(palette.muted),
            )),
        ])
        .block(panel(shell.title(), palette));
        f.render_widget(p, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(0)])
        .split(area);
    let summary = vec![
        Line::from(vec![
            Span::styled(issue.id.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("  {}  reported by {}", issue.category, issue.reporter)),
        ]),
        Line::from(vec![
            Span::styled("Priority: ", Style::default().fg(palette.accent)),
            Span::styled(
                issue.priority.label(),
                Style::default().fg(priority_color(issue.priority, palette)),
            ),
            Span::styled("  Status: ", Style::default().fg(palette.accent)),
            Span::raw(issue.status.label()),
        ]),
        Line::from(vec![
            Span::styled("Assigned: ", Style::default().fg(palette.accent)),
            Span::raw(issue.assignee_label().to_string()),
        ]),
    ];
    f.render_widget(
        Paragraph::new(summary).block(panel("Selected Report", palette)),
        chunks[0],
    );

    let mut lines = form_lines(form, &form.errors, palette, |field| {
        assign_field_value(form, field)
    });
    lines.push(Line::from(""));
    lines.push(hint_line(
        &[("←→", "choose"), ("tab", "next field"), ("enter", "assign"), ("esc", "back")],
        palette,
    ));
    f.render_widget(
        Paragraph::new(lines).block(
            panel("Assign Technician", palette).border_style(Style::default().fg(palette.accent)),
        ),
        chunks[1],
    );
}

fn render_official_home(
    f: &mut Frame,
    area: Rect,
    shell: &ShellState,
    official: &OfficialDashboard,
    palette: UiPalette,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);
    let workload = official.workload();
    render_stat_cards(
        f,
        chunks[0],
        &[
            count_card("Pending", workload.pending(), "not yet completed"),
            count_card("In Progress", workload.in_progress, "on site"),
            count_card("Completed", workload.completed, "closed out"),
        ],
        palette,
    );

    let percent = if workload.total == 0 {
        0
    } else {
        (workload.completed * 100 / workload.total) as u16
    };
    let gauge = Gauge::default()
        .block(panel("Workload", palette))
        .gauge_style(Style::default().fg(palette.accent))
        .percent(percent)
        .label(format!("{}/{} completed", workload.completed, workload.total));
    f.render_widget(gauge, chunks[1]);

    let items = official
        .top_tasks()
        .map(|task| task_item(task, palette))
        .collect();
    render_rows(
        f,
        chunks[2],
        "Priority Tasks",
        items,
        shell.cursor,
        palette,
        "No tasks assigned.",
    );
}

fn render_official_tasks(
    f: &mut Frame,
    area: Rect,
    shell: &ShellState,
    official: &OfficialDashboard,
    palette: UiPalette,
) {
    let (list_area, detail_area) = split_detail(area, official.selected().is_some());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(list_area);
    render_search(f, chunks[0], shell, palette);
    let items = official
        .filtered(&shell.search)
        .into_iter()
        .map(|task| task_item(task, palette))
        .collect();
    render_rows(
        f,
        chunks[1],
        shell.title(),
        items,
        shell.cursor,
        palette,
        "No tasks match your search.",
    );

    let (Some(task), Some(detail)) = (official.selected(), detail_area) else {
        return;
    };
    let label = Style::default().fg(palette.accent);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(task.id.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("  {}", task.title)),
        ]),
        Line::from(vec![
            Span::styled("Status: ", label),
            Span::styled(
                task.status.label(),
                Style::default().fg(task_status_color(task.status, palette)),
            ),
        ]),
        Line::from(vec![Span::styled("Location: ", label), Span::raw(task.location.clone())]),
        Line::from(vec![Span::styled("Deadline: ", label), Span::raw(task.deadline.clone())]),
        Line::from(vec![Span::styled("Reporter: ", label), Span::raw(task.reporter.clone())]),
        Line::from(""),
        Line::from(task.description.clone()),
        Line::from(""),
    ];
    if task.status == TaskStatus::Completed {
        lines.push(Line::from(Span::styled(
            "This task is closed.",
            Style::default().fg(palette.success),
        )));
    } else {
        lines.push(hint_line(&[("s", "start work"), ("c", "mark complete"), ("esc", "close")], palette));
    }
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel("Task Details", palette)),
        detail,
    );
}

fn render_management_home(
    f: &mut Frame,
    area: Rect,
    _shell: &ShellState,
    management: &ManagementDashboard,
    palette: UiPalette,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);
    render_stat_cards(f, chunks[0], &management.kpis, palette);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let block = panel("Departmental Efficiency", palette);
    let inner = block.inner(lower[0]);
    f.render_widget(block, lower[0]);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(2); management.departments.len()])
        .split(inner);
    for (load, row) in management.departments.iter().zip(rows.iter()) {
        let efficiency = load.efficiency_percent().min(100);
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(palette.accent).bg(palette.selected_bg))
            .percent(efficiency as u16)
            .label(format!(
                "{}  {}/{}  {}%",
                load.department, load.resolved, load.issues, efficiency
            ));
        f.render_widget(gauge, Rect { height: 1, ..*row });
    }

    let mix = &management.resolution_mix;
    let lines: Vec<Line> = mix
        .points
        .iter()
        .map(|point| {
            Line::from(vec![
                Span::raw(format!("{:<14}", point.label)),
                Span::styled(
                    format!("{:>4}", point.value),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}%", mix.share_percent(&point.label)),
                    Style::default().fg(palette.muted),
                ),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(lines).block(panel(mix.name.clone(), palette)),
        lower[1],
    );
}

fn render_management_analytics(
    f: &mut Frame,
    area: Rect,
    _shell: &ShellState,
    management: &ManagementDashboard,
    palette: UiPalette,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    let series = &management.performance;
    let data = series.bar_data();
    let chart = BarChart::default()
        .block(panel(series.name.clone(), palette))
        .data(data.as_slice())
        .bar_width(5)
        .bar_gap(1)
        .max(series.max_value().max(1))
        .bar_style(Style::default().fg(palette.accent))
        .value_style(Style::default().fg(Color::Black).bg(palette.accent));
    f.render_widget(chart, chunks[0]);

    let values = series.values();
    let spark = Sparkline::default()
        .block(panel("Trend", palette))
        .data(&values)
        .style(Style::default().fg(palette.accent_alt));
    f.render_widget(spark, chunks[1]);

    let header = Row::new(vec!["Department", "Issues", "Resolved", "Efficiency"])
        .style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = management
        .departments
        .iter()
        .map(|load| {
            Row::new(vec![
                Cell::from(load.department.clone()),
                Cell::from(load.issues.to_string()),
                Cell::from(load.resolved.to_string()),
                Cell::from(format!("{}%", load.efficiency_percent())),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
        ],
    )
    .header(header)
    .block(panel("Department Breakdown", palette));
    f.render_widget(table, chunks[2]);
}

fn render_escalations(
    f: &mut Frame,
    area: Rect,
    shell: &ShellState,
    management: &ManagementDashboard,
    palette: UiPalette,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);
    render_search(f, chunks[0], shell, palette);

    let header = Row::new(vec!["ID", "Department", "Reason", "Overdue", "Severity", "Status"])
        .style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = management
        .filtered(&shell.search)
        .into_iter()
        .enumerate()
        .map(|(index, escalation)| {
            let status = if escalation.escalated {
                Cell::from("Escalated").style(Style::default().fg(palette.success))
            } else {
                Cell::from("Pending").style(Style::default().fg(palette.muted))
            };
            let row = Row::new(vec![
                Cell::from(escalation.id.clone()),
                Cell::from(escalation.department.clone()),
                Cell::from(escalation.reason.clone()),
                Cell::from(escalation.overdue.clone()),
                Cell::from(escalation.severity.label())
                    .style(Style::default().fg(severity_color(escalation.severity, palette))),
                status,
            ]);
            if index == shell.cursor {
                row.style(Style::default().bg(palette.selected_bg))
            } else {
                row
            }
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Percentage(18),
            Constraint::Percentage(36),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(panel(shell.title(), palette));
    f.render_widget(table, chunks[1]);
}

fn render_notifications(
    f: &mut Frame,
    area: Rect,
    shell: &ShellState,
    notifications: &[Notification],
    palette: UiPalette,
) {
    let items = notifications
        .iter()
        .map(|note| {
            let (glyph, color) = match note.kind {
                NotificationKind::Success => ("✔", palette.success),
                NotificationKind::Info => ("ℹ", palette.accent),
                NotificationKind::Message => ("✉", palette.accent_alt),
                NotificationKind::Alert => ("!", palette.danger),
            };
            let mut header = vec![
                Span::styled(format!("{glyph} "), Style::default().fg(color)),
                Span::styled(note.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {}", note.time), Style::default().fg(palette.muted)),
            ];
            if note.link.is_some() {
                header.push(Span::styled("  ↵ take action", Style::default().fg(palette.accent)));
            }
            ListItem::new(vec![
                Line::from(header),
                Line::from(Span::styled(
                    format!("  {}", note.message),
                    Style::default().fg(palette.muted),
                )),
            ])
        })
        .collect();
    render_rows(
        f,
        area,
        shell.title(),
        items,
        shell.cursor,
        palette,
        "You're all caught up.",
    );
}

fn render_profile(f: &mut Frame, area: Rect, shell: &ShellState, palette: UiPalette) {
    let profile: &RoleProfile = shell.profile;
    let hosted = HostedAvatarProvider::new(DICEBEAR_BASE_URL, InitialsAvatarProvider);
    let avatar = avatar_or_placeholder(&hosted, shell.role.label(), profile.display_name);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("({}) ", avatar.initials),
                Style::default()
                    .fg(palette.accent_alt)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                profile.display_name,
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(profile.headline, Style::default().fg(palette.muted))),
    ];
    if let Some(url) = avatar.image_url.as_deref() {
        lines.push(Line::from(Span::styled(
            format!("avatar: {url}"),
            Style::default().fg(palette.muted),
        )));
    }
    lines.push(Line::from(""));
    for field in profile.profile_fields {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", field.label), Style::default().fg(palette.accent)),
            Span::raw(field.value),
        ]));
    }
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel(shell.title(), palette)),
        area,
    );
}

fn render_placeholder(f: &mut Frame, area: Rect, shell: &ShellState, palette: UiPalette) {
    let lines = vec![
        Line::from(Span::styled(
            shell.title(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "This section is under construction.",
            Style::default().fg(palette.muted),
        )),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(panel(shell.title(), palette)),
        area,
    );
}

fn dashboard_hints(dashboard: &Dashboard) -> Vec<(&'static str, &'static str)> {
    if dashboard.has_open_form() {
        return vec![("tab", "field"), ("←→", "choose"), ("enter", "submit"), ("esc", "cancel")];
    }
    if dashboard.shell.search_focused {
        return vec![("enter", "done"), ("esc", "clear"), ("↑↓", "move")];
    }
    let mut hints = vec![("tab", "next"), ("1-9", "go to"), ("↑↓", "move"), ("enter", "open")];
    match (&dashboard.data, dashboard.shell.screen) {
        (RoleDashboard::Student(_), _) => hints.push(("n", "report issue")),
        (RoleDashboard::Official(official), Screen::Tasks) if official.selected().is_some() => {
            hints.push(("s/c", "start/complete"))
        }
        (RoleDashboard::Management(_), Screen::Escalations) => hints.push(("enter", "escalate")),
        _ => {}
    }
    hints.extend([("/", "search"), ("m", "menu"), ("x", "logout"), ("q", "quit")]);
    hints
}

fn hint_line(hints: &[(&str, &str)], palette: UiPalette) -> Line<'static> {
    let mut spans = Vec::new();
    for (index, (key, label)) in hints.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(palette.muted)));
        }
        spans.push(Span::styled(key.to_string(), Style::default().fg(palette.accent)));
        spans.push(Span::styled(format!(" {label}"), Style::default().fg(palette.muted)));
    }
    Line::from(spans)
}

fn render_hints(f: &mut Frame, area: Rect, hints: &[(&str, &str)], palette: UiPalette) {
    f.render_widget(
        Paragraph::new(hint_line(hints, palette)).alignment(Alignment::Center),
        area,
    );
}

fn toast_line(toast: &ToastMessage) -> Line<'static> {
    let (glyph, color) = match toast.severity {
        ToastSeverity::Success => ("✔", Color::Green),
        ToastSeverity::Error => ("✖", Color::Red),
    };
    Line::from(vec![
        Span::styled(format!("{glyph} "), Style::default().fg(color)),
        Span::styled(toast.message.clone(), Style::default().add_modifier(Modifier::BOLD)),
    ])
}

fn render_toast_line(f: &mut Frame, area: Rect, toasts: &ToastQueue) {
    if let Some(toast) = toasts.latest() {
        f.render_widget(Paragraph::new(toast_line(toast)).alignment(Alignment::Center), area);
    }
}

/// Landing and login have no toast row, so the latest toast floats on top.
fn render_toast_overlay(f: &mut Frame, toasts: &ToastQueue) {
    let area = f.area();
    if toasts.is_empty() || area.height < 2 {
        return;
    }
    let row = Rect {
        y: area.y + area.height - 1,
        height: 1,
        ..area
    };
    f.render_widget(Clear, row);
    render_toast_line(f, row, toasts);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use campus_core::state::SessionSettings;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state() -> AppState {
        let today = NaiveDate::from_ymd_opt(2026, 2, 3).expect("valid date");
        AppState::new(SessionSettings::default(), today)
    }

    fn press(state: &mut AppState, toasts: &mut ToastQueue, code: KeyCode) -> LoopControl {
        match action_for_key(state, key(code)) {
            Some(action) => dispatch(state, toasts, action.into()),
            None => LoopControl::Continue,
        }
    }

    fn logged_in(role: Role) -> AppState {
        let mut state = state();
        let mut toasts = ToastQueue::new(3);
        dispatch(&mut state, &mut toasts, UserAction::SelectRole(role).into());
        dispatch(&mut state, &mut toasts, UserAction::Authenticate.into());
        state
    }

    fn screen_text(state: &AppState, toasts: &ToastQueue) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).expect("terminal");
        terminal.draw(|f| ui(f, state, toasts)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn landing_digits_pick_roles() {
        let state = state();
        assert_eq!(
            action_for_key(&state, key(KeyCode::Char('3'))),
            Some(UserAction::SelectRole(Role::Official))
        );
        assert_eq!(action_for_key(&state, key(KeyCode::Char('9'))), None);
    }

    #[test]
    fn ctrl_c_quits_from_any_view() {
        let mut state = logged_in(Role::Student);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for_key(&state, ctrl_c), Some(UserAction::Quit));

        let mut toasts = ToastQueue::new(3);
        assert_eq!(
            dispatch(&mut state, &mut toasts, UserAction::Quit.into()),
            LoopControl::Exit
        );
    }

    #[test]
    fn login_flow_through_keys_shows_welcome_toast() {
        let mut state = state();
        let mut toasts = ToastQueue::new(3);
        press(&mut state, &mut toasts, KeyCode::Char('2'));
        assert_eq!(state.current_view(), AppView::Login);

        press(&mut state, &mut toasts, KeyCode::Enter);
        assert_eq!(state.current_view(), AppView::Login);
        assert!(state.login.errors.has(FieldId::Identifier));

        for ch in "admin@campus.edu".chars() {
            press(&mut state, &mut toasts, KeyCode::Char(ch));
        }
        press(&mut state, &mut toasts, KeyCode::Tab);
        for ch in "secret".chars() {
            press(&mut state, &mut toasts, KeyCode::Char(ch));
        }
        press(&mut state, &mut toasts, KeyCode::Enter);

        assert_eq!(state.current_view(), AppView::Dashboard);
        assert_eq!(
            toasts.latest().map(|toast| toast.message.as_str()),
            Some("Welcome back, Administrator!")
        );
    }

    #[test]
    fn open_form_captures_typing() {
        let mut state = logged_in(Role::Student);
        let mut toasts = ToastQueue::new(3);
        press(&mut state, &mut toasts, KeyCode::Char('n'));
        assert_eq!(
            action_for_key(&state, key(KeyCode::Char('q'))),
            Some(UserAction::FormInput('q'))
        );
        assert_eq!(
            action_for_key(&state, key(KeyCode::Esc)),
            Some(UserAction::FormCancel)
        );
    }

    #[test]
    fn focused_search_captures_typing() {
        let mut state = logged_in(Role::Admin);
        let mut toasts = ToastQueue::new(3);
        press(&mut state, &mut toasts, KeyCode::Char('2'));
        press(&mut state, &mut toasts, KeyCode::Char('/'));
        assert_eq!(
            action_for_key(&state, key(KeyCode::Char('x'))),
            Some(UserAction::SearchInput('x'))
        );
        assert_eq!(
            action_for_key(&state, key(KeyCode::Enter)),
            Some(UserAction::BlurSearch)
        );
    }

    #[test]
    fn completed_tasks_offer_no_status_keys() {
        let mut state = logged_in(Role::Official);
        let mut toasts = ToastQueue::new(3);
        let first = match state.dashboard.as_ref().map(|d| &d.data) {
            Some(RoleDashboard::Official(official)) => official
                .tasks
                .iter()
                .next()
                .map(|task| task.id.clone())
                .expect("seeded task"),
            _ => panic!("official dashboard"),
        };
        dispatch(
            &mut state,
            &mut toasts,
            UserAction::ProcessTask { id: first.clone() }.into(),
        );

        assert_eq!(
            action_for_key(&state, key(KeyCode::Char('c'))),
            Some(UserAction::SetTaskStatus {
                id: first.clone(),
                status: TaskStatus::Completed,
            })
        );
        press(&mut state, &mut toasts, KeyCode::Char('c'));
        assert_eq!(
            toasts.latest().map(|toast| toast.message.as_str()),
            Some("Task status updated to completed")
        );
        assert_eq!(action_for_key(&state, key(KeyCode::Char('s'))), None);
    }

    #[test]
    fn menu_digits_navigate_and_close() {
        let mut state = logged_in(Role::Management);
        let mut toasts = ToastQueue::new(3);
        dispatch(
            &mut state,
            &mut toasts,
            RuntimeAction::Resize { width: 60 }.into(),
        );
        press(&mut state, &mut toasts, KeyCode::Char('m'));
        assert!(state.dashboard.as_ref().expect("dashboard").shell.menu_open);

        press(&mut state, &mut toasts, KeyCode::Char('2'));
        let shell = &state.dashboard.as_ref().expect("dashboard").shell;
        assert!(!shell.menu_open);
        assert_eq!(Some(shell.screen), shell.profile.screens().nth(1).map(|i| i.screen));
    }

    #[test]
    fn landing_renders_every_role() {
        let text = screen_text(&state(), &ToastQueue::new(3));
        assert!(text.contains("Campus Desk"));
        for role in Role::ALL {
            assert!(text.contains(role.title()), "missing {}", role.title());
        }
    }

    #[test]
    fn profile_shows_fields_and_avatar_url() {
        let mut state = logged_in(Role::Student);
        let mut toasts = ToastQueue::new(3);
        dispatch(&mut state, &mut toasts, UserAction::Navigate(Screen::Profile).into());

        let text = screen_text(&state, &toasts);
        let profile = role_profile(Role::Student);
        assert!(text.contains("seed=student"));
        for field in profile.profile_fields {
            assert!(text.contains(field.label), "missing {}", field.label);
        }
    }

    #[test]
    fn dashboard_renders_header_and_toast() {
        let mut state = logged_in(Role::Admin);
        let mut toasts = ToastQueue::new(3);
        dispatch(
            &mut state,
            &mut toasts,
            RuntimeAction::Resize { width: 140 }.into(),
        );
        toasts.present(ToastMessage::success("Issue assigned successfully!"));

        let text = screen_text(&state, &toasts);
        let profile = role_profile(Role::Admin);
        assert!(text.contains(profile.brand));
        assert!(text.contains(profile.display_name));
        assert!(text.contains("Issue assigned successfully!"));
    }
}
