//! Reusable UI components

mod button;
mod dialog;
mod progress_bar;

pub use button::{render_button, BUTTON_HEIGHT};
pub use dialog::render_submitted_dialog;
pub use progress_bar::render_step_progress;
