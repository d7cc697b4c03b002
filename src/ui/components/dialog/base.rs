//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Horizontal padding inside the border, both sides together
const PADDING: u16 = 4;

/// A centered overlay with a title, a wrapped message and an optional hint
pub struct Dialog<'a> {
    title: &'a str,
    accent: Color,
    message: &'a str,
    hint: Option<Vec<Span<'a>>>,
    max_width: u16,
}

impl<'a> Dialog<'a> {
    pub fn new(title: &'a str, message: &'a str) -> Self {
        Self {
            title,
            accent: Color::White,
            message,
            hint: None,
            max_width: 60,
        }
    }

    /// Color used for the title and border
    pub fn accent(mut self, color: Color) -> Self {
        self.accent = color;
        self
    }

    pub fn hint(mut self, hint: Vec<Span<'a>>) -> Self {
        self.hint = Some(hint);
        self
    }

    /// Dialog rectangle for the given screen, with the wrapped message lines
    fn layout(&self, screen: Rect) -> (Rect, Vec<String>) {
        let max_width = self.max_width.min(screen.width);
        let wrapped = wrap_text(self.message, max_width.saturating_sub(PADDING + 2) as usize);

        let content_width = wrapped
            .iter()
            .map(|l| l.chars().count())
            .chain(std::iter::once(self.title.chars().count()))
            .max()
            .unwrap_or(0) as u16;
        let width = (content_width + PADDING + 2).min(max_width);

        // title + blank + message + (blank + hint) + borders
        let hint_rows = if self.hint.is_some() { 2 } else { 0 };
        let height = (2 + wrapped.len() as u16 + hint_rows + 2)
            .max(5)
            .min(screen.height);

        let area = Rect {
            x: screen.x + screen.width.saturating_sub(width) / 2,
            y: screen.y + screen.height.saturating_sub(height) / 2,
            width,
            height,
        };
        (area, wrapped)
    }

    pub fn render(self, frame: &mut Frame) {
        let (area, wrapped) = self.layout(frame.area());
        frame.render_widget(Clear, area);

        let mut content = vec![
            Line::from(Span::styled(
                self.title,
                Style::default()
                    .fg(self.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        content.extend(wrapped.into_iter().map(Line::from));

        if let Some(hint) = self.hint {
            content.push(Line::from(""));
            content.push(Line::from(hint));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.accent))
            .style(Style::default().bg(Color::Black));
        let paragraph = Paragraph::new(content)
            .block(block)
            .style(Style::default().bg(Color::Black));
        frame.render_widget(paragraph, area);
    }
}

/// Word-wrap text to `max_width` columns, keeping explicit line breaks
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current.chars().count() + word.chars().count() + 1;
            if needed > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_keeps_short_line() {
        assert_eq!(wrap_text("Form submitted", 40), vec!["Form submitted"]);
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        assert_eq!(
            wrap_text("one two three four", 9),
            vec!["one two", "three", "four"]
        );
    }

    #[test]
    fn test_wrap_keeps_blank_lines() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_layout_is_centered_and_clamped() {
        let dialog = Dialog::new("Submitted", "Form submitted!");
        let (area, lines) = dialog.layout(Rect::new(0, 0, 80, 24));
        assert_eq!(lines, vec!["Form submitted!"]);
        assert_eq!(area.height, 5);
        assert_eq!(area.x, (80 - area.width) / 2);

        let (small, _) = Dialog::new("Submitted", "x").layout(Rect::new(0, 0, 10, 3));
        assert!(small.width <= 10);
        assert!(small.height <= 3);
    }

    #[test]
    fn test_hint_adds_two_rows() {
        let plain = Dialog::new("T", "line");
        let hinted = Dialog::new("T", "line").hint(vec![Span::raw("Press Enter")]);
        let screen = Rect::new(0, 0, 80, 24);
        assert_eq!(
            hinted.layout(screen).0.height,
            plain.layout(screen).0.height + 2
        );
    }
}
