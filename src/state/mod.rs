//! Application state module

mod counter;
mod loading_state;
mod steps;
mod store;
mod validation;

pub use counter::*;
pub use loading_state::*;
pub use steps::*;
pub use store::*;
pub use validation::*;
