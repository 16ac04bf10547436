//! Login form view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::state::{Focus, FormState};
use super::text_field::TextField;

const FORM_WIDTH: u16 = 44;
const FORM_HEIGHT: u16 = 11;
/// Columns taken by the focus marker in front of each control.
const MARKER_WIDTH: u16 = 2;

const USERNAME_ROW: u16 = 1;
const PASSWORD_ROW: u16 = 3;

/// Centers a `width` x `height` box inside `area`, shrinking it to fit.
pub fn calculate_form_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Renders the login form centered in `area`.
pub fn render_form(frame: &mut Frame, form: &FormState, area: Rect) {
    let popup = calculate_form_area(area, FORM_WIDTH, FORM_HEIGHT);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Sign in ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, popup);

    let inner = Rect::new(
        popup.x + 2,
        popup.y + 1,
        popup.width.saturating_sub(4),
        popup.height.saturating_sub(2),
    );

    let field_width = usize::from(inner.width.saturating_sub(MARKER_WIDTH));
    frame.render_widget(Paragraph::new(form_lines(form, field_width)), inner);

    let cursor_field = match form.focus {
        Focus::Username => Some((USERNAME_ROW, &form.username, false)),
        Focus::Password => Some((PASSWORD_ROW, &form.password, true)),
        Focus::Submit => None,
    };
    if let Some((row, field, masked)) = cursor_field
        && row < inner.height
    {
        let (_, cursor_col) = field.viewport(masked, field_width);
        let offset = MARKER_WIDTH.saturating_add(cursor_col as u16);
        let x = inner.x + offset.min(inner.width.saturating_sub(1));
        frame.set_cursor_position((x, inner.y + row));
    }
}

fn form_lines(form: &FormState, field_width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        field_line(
            &form.username,
            FormState::PLACEHOLDER_USERNAME,
            false,
            field_width,
            form.focus == Focus::Username,
        ),
        Line::from(""),
        field_line(
            &form.password,
            FormState::PLACEHOLDER_PASSWORD,
            true,
            field_width,
            form.focus == Focus::Password,
        ),
        Line::from(""),
        button_line(form),
        Line::from(""),
    ];

    if form.error {
        lines.push(Line::from(Span::styled(
            FormState::ERROR_MESSAGE,
            Style::default().fg(Color::Red),
        )));
    }

    if let Some(user) = &form.user {
        lines.push(Line::from(vec![
            Span::styled("Signed in as ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                user.name.clone(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    lines
}

fn marker(focused: bool) -> Span<'static> {
    if focused {
        Span::styled("▸ ", Style::default().fg(Color::Cyan))
    } else {
        Span::raw("  ")
    }
}

fn field_line(
    field: &TextField,
    placeholder: &str,
    masked: bool,
    width: usize,
    focused: bool,
) -> Line<'static> {
    let content = if field.is_empty() {
        Span::styled(
            placeholder.to_string(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        let (visible, _) = field.viewport(masked, width);
        Span::styled(visible, Style::default().fg(Color::White))
    };
    Line::from(vec![marker(focused), content])
}

fn button_line(form: &FormState) -> Line<'static> {
    let focused = form.focus == Focus::Submit;
    let style = if form.loading {
        Style::default().fg(Color::Yellow)
    } else if !form.can_submit() {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    };
    Line::from(vec![
        marker(focused),
        Span::styled(format!("[ {} ]", form.button_label()), style),
    ])
}

#[cfg(test)]
mod tests {
    use gate_core::users::User;

    use super::*;

    #[test]
    fn test_form_area_is_centered() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = calculate_form_area(area, 44, 11);
        assert_eq!(popup, Rect::new(18, 6, 44, 11));
    }

    #[test]
    fn test_form_area_shrinks_to_fit() {
        let area = Rect::new(0, 0, 30, 5);
        let popup = calculate_form_area(area, 44, 11);
        assert_eq!(popup, Rect::new(0, 0, 30, 5));
    }

    #[test]
    fn test_disabled_button_is_dim() {
        let form = FormState::new();
        let line = button_line(&form);
        assert_eq!(line.spans[1].style.fg, Some(Color::DarkGray));
        assert_eq!(line.spans[1].content, "[ Login ]");
    }

    #[test]
    fn test_enabled_button_is_highlighted() {
        let mut form = FormState::new();
        form.username.insert_str("a");
        form.password.insert_str("b");
        let line = button_line(&form);
        assert_eq!(line.spans[1].style.fg, Some(Color::Cyan));
    }

    #[test]
    fn test_lines_hide_error_and_user_by_default() {
        let form = FormState::new();
        let text: String = form_lines(&form, 40)
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(!text.contains(FormState::ERROR_MESSAGE));
        assert!(!text.contains("Signed in as"));
    }

    #[test]
    fn test_lines_show_user_name() {
        let mut form = FormState::new();
        form.user = Some(User {
            id: 1,
            name: "John".to_string(),
        });
        let last = form_lines(&form, 40).pop().unwrap();
        assert_eq!(last.spans[1].content, "John");
    }

    #[test]
    fn test_long_username_keeps_typed_tail_visible() {
        let mut form = FormState::new();
        form.username.insert_str(&format!("{}TAIL", "a".repeat(50)));
        let line = field_line(&form.username, "username", false, 38, true);
        let shown = line.spans[1].content.to_string();
        assert!(shown.ends_with("TAIL"));
        assert!(shown.len() < 38);
    }
}
