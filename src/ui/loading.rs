//! Loading screen rendering

use crate::state::LoadingState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

/// Width of the spinner and gauge column
const LOADING_WIDTH: u16 = 30;

/// Draw the loading screen
pub fn draw(frame: &mut Frame, area: Rect, loading: &LoadingState) {
    let width = LOADING_WIDTH.min(area.width);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + area.height.saturating_sub(3) / 2;

    let label = Line::from(vec![
        Span::styled(loading.spinner(), Style::default().fg(Color::Cyan)),
        Span::raw(" Loading..."),
    ]);
    frame.render_widget(
        Paragraph::new(label).centered(),
        Rect {
            x,
            y,
            width,
            height: 1,
        },
    );

    if area.height < 3 {
        return;
    }
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(f64::from(loading.progress.clamp(0.0, 1.0)))
        .label("");
    frame.render_widget(
        gauge,
        Rect {
            x,
            y: y + 2,
            width,
            height: 1,
        },
    );

    // Hint at the bottom
    let hint = "Press any key to skip";
    frame.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))).centered(),
        Rect {
            x: area.x,
            y: area.y + area.height - 1,
            width: area.width,
            height: 1,
        },
    );
}
