//! Submission notice dialog

use super::base::Dialog;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the "Form submitted!" notice over the current view
pub fn render_submitted_dialog(frame: &mut Frame, summary: &str) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to close"),
    ];

    Dialog::new("Form submitted!", summary)
        .accent(Color::Green)
        .hint(hint)
        .render(frame);
}
