//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::timer::{
    format_clock, format_duration, ConfigField, Preference, SettingsStore, Status,
};
use crate::tui::app::App;

const HELP: &str = "space:pause | w/W:work | b/B:break | c/C:cycles | s:sound | n:notify | r:restart | q:quit";

/// Render the application UI.
pub fn render<S: SettingsStore>(frame: &mut Frame<'_>, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Countdown
            Constraint::Length(3), // Rounds
            Constraint::Min(7),    // Preferences
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_countdown(frame, app, chunks[1]);
    render_rounds(frame, app, chunks[2]);
    render_preferences(frame, app, chunks[3]);
    render_status_bar(frame, app, chunks[4]);

    if app.show_help {
        render_help(frame, frame.area());
    }
}

fn phase_color(status: Status) -> Color {
    match status {
        Status::Working => Color::Cyan,
        Status::Breaking => Color::Green,
        Status::Paused => Color::Yellow,
        Status::Complete => Color::Magenta,
    }
}

/// Render the header.
fn render_header<S: SettingsStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let color = phase_color(app.state().status());
    let header = Paragraph::new(format!(" 🍅 pomosh  ·  {} ", app.headline()))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(header, area);
}

/// Render the countdown gauge.
fn render_countdown<S: SettingsStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let state = app.state();
    let color = phase_color(state.status());
    let label = format!(
        "{} / {}",
        format_clock(state.remaining_seconds),
        format_clock(state.phase_duration_seconds)
    );

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Time left "))
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(state.progress().clamp(0.0, 1.0))
        .label(Span::styled(label, Style::default().add_modifier(Modifier::BOLD)));

    frame.render_widget(gauge, area);
}

/// Render the remaining rounds.
fn render_rounds<S: SettingsStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let state = app.state();
    let total = app.timer.config().total_cycles.max(state.rounds_left);
    let done = total - state.rounds_left;

    let mut spans = vec![Span::raw(" ")];
    spans.extend((0..state.rounds_left).map(|_| Span::raw("🔥")));
    spans.extend((0..done).map(|_| Span::styled("·", Style::default().fg(Color::DarkGray))));

    let rounds = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Rounds left: {} ", state.rounds_left)),
    );

    frame.render_widget(rounds, area);
}

/// Render the preferences panel.
fn render_preferences<S: SettingsStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let config = app.timer.config();

    let mut lines: Vec<Line<'_>> = ConfigField::ALL
        .into_iter()
        .map(|field| {
            let value = config.get(field);
            let shown = if field.is_duration() {
                format_duration(chrono::Duration::seconds(i64::from(value)))
            } else {
                value.to_string()
            };
            Line::from(vec![
                Span::raw(format!(" {:<15}", field.label())),
                Span::styled(shown, Style::default().fg(Color::Cyan)),
            ])
        })
        .collect();

    lines.extend(Preference::ALL.into_iter().map(|pref| {
        let (text, color) = if config.preference(pref) {
            ("on", Color::Green)
        } else {
            ("off", Color::DarkGray)
        };
        Line::from(vec![
            Span::raw(format!(" {:<15}", pref.label())),
            Span::styled(text, Style::default().fg(color)),
        ])
    }));

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Preferences ")
            .border_style(Style::default().fg(Color::White)),
    );

    frame.render_widget(panel, area);
}

/// Render the status bar.
fn render_status_bar<S: SettingsStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let text = app.status.as_deref().unwrap_or(HELP);
    let status = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

/// Render the key help overlay.
fn render_help(frame: &mut Frame<'_>, area: Rect) {
    let width = area.width.min(50);
    let height = area.height.min(13);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let lines = vec![
        Line::from(" space   pause / resume"),
        Line::from(" w / W   working time -/+ 5 min"),
        Line::from(" b / B   break time -/+ 1 min"),
        Line::from(" c / C   cycles -/+ 1"),
        Line::from(" s       toggle sound"),
        Line::from(" n       toggle notifications"),
        Line::from(" r       restart session"),
        Line::from(" ?       close help"),
        Line::from(" q       quit"),
    ];

    let help = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL).title(" Keys "));

    frame.render_widget(Clear, popup);
    frame.render_widget(help, popup);
}
