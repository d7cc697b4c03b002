//! Loading screen animation state

use std::time::{Duration, Instant};

/// Spinner glyphs, one per frame
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Animation phase for the loading screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    /// Spinner and progress bar visible
    Loading,
    /// Animation finished, show the form
    Complete,
}

/// Loading screen animation state
#[derive(Debug)]
pub struct LoadingState {
    /// When the loading screen was first shown
    pub start_time: Instant,
    /// Current animation phase
    pub phase: LoadingPhase,
    /// Eased progress in 0.0..=1.0
    pub progress: f32,
    /// Index into the spinner frames
    pub spinner_frame: usize,
}

impl LoadingState {
    /// How long the loading screen stays up
    const LOADING_DURATION: Duration = Duration::from_millis(900);
    /// Time per spinner frame
    const FRAME_DURATION: Duration = Duration::from_millis(80);

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            phase: LoadingPhase::Loading,
            progress: 0.0,
            spinner_frame: 0,
        }
    }

    /// Update animation state based on elapsed time
    pub fn update(&mut self) {
        self.advance_to(self.start_time.elapsed());
    }

    fn advance_to(&mut self, elapsed: Duration) {
        if self.phase == LoadingPhase::Complete {
            return;
        }

        self.spinner_frame = (elapsed.as_millis() / Self::FRAME_DURATION.as_millis()) as usize
            % SPINNER_FRAMES.len();

        if elapsed < Self::LOADING_DURATION {
            let linear = elapsed.as_secs_f32() / Self::LOADING_DURATION.as_secs_f32();
            self.progress = simple_easing::cubic_out(linear);
        } else {
            self.progress = 1.0;
            self.phase = LoadingPhase::Complete;
        }
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    /// Skip to completion (user pressed a key)
    pub fn skip(&mut self) {
        self.progress = 1.0;
        self.phase = LoadingPhase::Complete;
    }

    /// Check if animation is complete
    pub fn is_complete(&self) -> bool {
        self.phase == LoadingPhase::Complete
    }
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}
