//! Steps form rendering

use super::field_renderer::{draw_field, draw_field_error};
use crate::app::App;
use crate::ui::components::{render_button, render_step_progress, BUTTON_HEIGHT};
use crate::ui::layout::centered_column;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the form column
const FORM_WIDTH: u16 = 60;

/// Draw the wizard: heading, step indicator, progress, current field, buttons
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.steps_view();

    let block = Block::default()
        .title(" Steps Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = centered_column(block.inner(area), FORM_WIDTH);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Step indicator
            Constraint::Length(1),             // Progress bar
            Constraint::Length(1),             // Spacing
            Constraint::Length(3),             // Field
            Constraint::Length(1),             // Error text
            Constraint::Length(1),             // Spacing
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    let indicator = Paragraph::new(Line::from(Span::styled(
        view.step_indicator(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(indicator, chunks[0]);

    render_step_progress(frame, chunks[1], &view.progress());

    draw_field(frame, chunks[3], view.field(), view.show_error());
    draw_field_error(frame, chunks[4], view.error_message().as_deref());

    draw_buttons(frame, chunks[6], app);
}

/// Back on the left, Next or Submit on the right
fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.steps_view();
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Min(0),
            Constraint::Length(12),
        ])
        .split(area);

    render_button(frame, buttons[0], "Back", false, view.can_retreat());

    if view.is_last() {
        render_button(frame, buttons[2], "Submit", true, view.can_submit());
    } else {
        render_button(frame, buttons[2], "Next", true, view.can_advance());
    }
}
