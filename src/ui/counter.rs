//! Counter view

use crate::app::App;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::centered_column;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Counter ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = centered_column(block.inner(area), 50);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Value
            Constraint::Length(1),             // Spacing
            Constraint::Length(BUTTON_HEIGHT), // +, -, Reset
            Constraint::Length(1),             // Spacing
            Constraint::Length(3),             // Amount input
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    let value = Paragraph::new(Line::from(vec![
        Span::raw("Counter: "),
        Span::styled(
            app.state().counter.value().to_string(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(value, chunks[0]);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(11),
            Constraint::Min(0),
        ])
        .split(chunks[2]);
    render_button(frame, buttons[0], "+", true, true);
    render_button(frame, buttons[1], "-", true, true);
    render_button(frame, buttons[2], "Reset", false, true);

    let amount = if app.counter_amount.is_empty() {
        Span::styled("0", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(app.counter_amount.as_str())
    };
    let input = Paragraph::new(Line::from(vec![
        amount,
        Span::styled("▌", Style::default().fg(Color::Cyan)),
    ]))
    .block(
        Block::default()
            .title(" Add Amount (Enter) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(input, chunks[4]);
}
