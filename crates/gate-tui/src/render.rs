//! Top-level view.
//!
//! Pure function of `AppState`; the runtime calls it once per dirty frame.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::form;
use crate::state::AppState;

/// Renders the whole screen.
pub fn render(app: &AppState, frame: &mut Frame) {
    let [body, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    form::render_form(frame, &app.form, body);
    frame.render_widget(Paragraph::new(hint_line(app)).centered(), footer);
}

fn hint_line(app: &AppState) -> Line<'static> {
    let key = Style::default().fg(Color::Cyan);
    let text = Style::default().fg(Color::DarkGray);

    let hints: &[(&str, &str)] = if app.form.loading {
        &[("Esc", "cancel"), ("Ctrl+C", "quit")]
    } else {
        &[("Tab", "next"), ("Enter", "submit"), ("Esc", "quit")]
    };

    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (idx, (k, label)) in hints.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled("  ·  ", text));
        }
        spans.push(Span::styled((*k).to_string(), key));
        spans.push(Span::styled(format!(" {label}"), text));
    }
    Line::from(spans)
}
