//! Field rendering utilities for forms

use crate::state::FieldRecord;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Input border and text color: red once a typed value is invalid
fn border_color(field: &FieldRecord, show_error: bool) -> Color {
    if show_error {
        Color::Red
    } else if field.is_valid() {
        Color::Green
    } else {
        Color::Cyan
    }
}

/// Content line: the value with a cursor, or the placeholder when empty
fn input_line(field: &FieldRecord) -> Line<'_> {
    let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));
    if field.value().is_empty() {
        Line::from(vec![
            cursor,
            Span::styled(
                field.placeholder(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ])
    } else {
        Line::from(vec![Span::raw(field.value()), cursor])
    }
}

/// Draw the active field as a bordered single-line input
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldRecord, show_error: bool) {
    let color = border_color(field, show_error);
    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .title_bottom(Line::from(format!(" {} ", field.kind().label())).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(Paragraph::new(input_line(field)).block(block), area);
}

/// Draw the inline validation message under a field
pub fn draw_field_error(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let line = Line::from(Span::styled(message, Style::default().fg(Color::Red)));
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldKind;

    fn field(value: &str) -> FieldRecord {
        FieldRecord::with_value(
            "email",
            "Email Address",
            "Enter your email",
            FieldKind::Email,
            value.to_string(),
        )
    }

    #[test]
    fn test_empty_field_shows_placeholder() {
        let field = field("");
        let line = input_line(&field);
        assert_eq!(line.spans[1].content, "Enter your email");
    }

    #[test]
    fn test_value_is_shown_before_cursor() {
        let field = field("a@b.com");
        let line = input_line(&field);
        assert_eq!(line.spans[0].content, "a@b.com");
        assert_eq!(line.spans[1].content, "▌");
    }

    #[test]
    fn test_border_colors() {
        assert_eq!(border_color(&field(""), false), Color::Cyan);
        assert_eq!(border_color(&field("a@b"), true), Color::Red);
        assert_eq!(border_color(&field("a@b.com"), false), Color::Green);
    }
}
