//! Form rendering module
//!
//! - `field_renderer`: single field input and inline error
//! - `steps_form`: the multi-step wizard

mod field_renderer;
mod steps_form;

pub use steps_form::draw as draw_steps_form;
