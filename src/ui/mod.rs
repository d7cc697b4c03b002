//! UI module for rendering the TUI

mod components;
mod counter;
mod forms;
mod layout;
mod loading;

use crate::app::{App, View};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    // Draw main content based on current view
    match app.current_view {
        View::Loading => {
            if let Some(ref loading) = app.loading_state {
                loading::draw(frame, main_area, loading);
            }
        }
        View::Steps => forms::draw_steps_form(frame, main_area, app),
        View::Counter => counter::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Overlays go last
    if let Some(ref submission) = app.submission {
        components::render_submitted_dialog(frame, &submission.summary());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WizardConfig;
    use crate::state::StepsAction;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn render(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app() -> App {
        App::new(WizardConfig {
            show_loading_screen: Some(false),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_steps_view_renders_first_field() {
        let text = buffer_text(&render(&app()));
        assert!(text.contains("Steps Form"));
        assert!(text.contains("Step 1 of 3"));
        assert!(text.contains("Full Name"));
        assert!(text.contains("Enter your full name"));
        assert!(text.contains("Next"));
        assert!(!text.contains("Submit"));
    }

    #[test]
    fn test_invalid_value_shows_error_text() {
        let mut app = app();
        app.store.dispatch(StepsAction::Advance);
        app.store.dispatch(StepsAction::SetFieldValue {
            index: 1,
            value: "a@b".to_string(),
        });
        let text = buffer_text(&render(&app));
        assert!(text.contains("Step 2 of 3"));
        assert!(text.contains("Please enter a valid email address"));
    }

    #[test]
    fn test_last_step_shows_submit() {
        let mut app = app();
        app.store.dispatch(StepsAction::Advance);
        app.store.dispatch(StepsAction::Advance);
        let text = buffer_text(&render(&app));
        assert!(text.contains("Submit"));
        assert!(text.contains("Phone Number"));
    }

    #[test]
    fn test_counter_view_renders_value() {
        let mut app = app();
        app.current_view = View::Counter;
        let text = buffer_text(&render(&app));
        assert!(text.contains("Counter: 0"));
        assert!(text.contains("Add Amount"));
    }

    #[test]
    fn test_loading_view_renders() {
        let app = App::new(WizardConfig::default()).unwrap();
        let text = buffer_text(&render(&app));
        assert!(text.contains("Loading..."));
        assert!(text.contains("Press any key to skip"));
    }
}
