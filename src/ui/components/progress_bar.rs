//! Segmented step progress bar

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Columns between two segments
const GAP: u16 = 1;

/// Render one segment per step, filled up to and including the current step
pub fn render_step_progress(frame: &mut Frame, area: Rect, progress: &[bool]) {
    frame.render_widget(Paragraph::new(segment_line(progress, area.width)), area);
}

fn segment_line(progress: &[bool], width: u16) -> Line<'static> {
    let count = progress.len() as u16;
    if count == 0 || width == 0 {
        return Line::default();
    }
    let gaps = GAP * (count - 1);
    let segment_width = (width.saturating_sub(gaps) / count).max(1) as usize;

    let mut spans = Vec::with_capacity(progress.len() * 2);
    for (i, filled) in progress.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" ".repeat(GAP as usize)));
        }
        let (glyph, color) = if *filled {
            ("█", Color::Cyan)
        } else {
            ("░", Color::DarkGray)
        };
        spans.push(Span::styled(
            glyph.repeat(segment_width),
            Style::default().fg(color),
        ));
    }
    Line::from(spans)
}
