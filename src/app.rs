//! Application state and core logic

use crate::config::{StartView, WizardConfig};
use crate::state::{
    contact_fields, CounterAction, FieldRecord, LoadingState, RootState, StepsAction, StepsView,
    Store, TracingListener, WizardState,
};
use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Longest amount the counter input accepts
const MAX_AMOUNT_DIGITS: usize = 18;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Loading screen with spinner
    Loading,
    #[default]
    Steps,
    Counter,
}

impl From<StartView> for View {
    fn from(view: StartView) -> Self {
        match view {
            StartView::Steps => View::Steps,
            StartView::Counter => View::Counter,
        }
    }
}

/// A completed form, shown in the submission notice
#[derive(Debug, Clone)]
pub struct Submission {
    pub submitted_at: DateTime<Local>,
    pub fields: Vec<FieldRecord>,
}

impl Submission {
    pub fn summary(&self) -> String {
        let mut lines = vec![format!(
            "Form submitted at {}.",
            self.submitted_at.format("%H:%M:%S")
        )];
        lines.push(String::new());
        for field in &self.fields {
            lines.push(format!("{}: {}", field.label(), field.value()));
        }
        lines.join("\n")
    }
}

/// Main application struct
pub struct App {
    /// Store holding the wizard and counter slices
    pub store: Store,
    /// Loaded user configuration
    pub config: WizardConfig,
    /// View currently drawn
    pub current_view: View,
    /// Loading screen animation state
    pub loading_state: Option<LoadingState>,
    /// Amount typed in the counter view, not part of the store
    pub counter_amount: String,
    /// Set while the submission notice is open
    pub submission: Option<Submission>,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: WizardConfig) -> Result<Self> {
        let wizard = WizardState::new(contact_fields(), config.reset_policy())?;
        let mut store = Store::new(RootState {
            steps: wizard,
            ..Default::default()
        });
        store.subscribe(Box::new(TracingListener));

        let (current_view, loading_state) = if config.show_loading_screen() {
            (View::Loading, Some(LoadingState::new()))
        } else {
            (config.start_view().into(), None)
        };

        Ok(Self {
            store,
            config,
            current_view,
            loading_state,
            counter_amount: String::new(),
            submission: None,
            status_message: None,
            quit: false,
        })
    }

    /// Read access to the store state
    pub fn state(&self) -> &RootState {
        self.store.state()
    }

    /// Derived wizard data for the current frame
    pub fn steps_view(&self) -> StepsView<'_> {
        StepsView::new(&self.state().steps)
    }

    /// Update loading animation state.
    /// Returns true if loading finished and the start view is now active.
    pub fn update_loading(&mut self) -> bool {
        if let Some(ref mut loading) = self.loading_state {
            loading.update();
            if loading.is_complete() {
                self.finish_loading();
                return true;
            }
        }
        false
    }

    fn finish_loading(&mut self) {
        self.loading_state = None;
        self.current_view = self.config.start_view().into();
        tracing::debug!(view = ?self.current_view, "Loading finished");
    }

    /// Check if the loading screen is showing
    pub fn in_loading(&self) -> bool {
        matches!(self.current_view, View::Loading)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Handle a key press in the current view
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.submission.is_some() {
            self.handle_submission_key(key);
            return Ok(());
        }

        match self.current_view {
            View::Loading => self.handle_loading_key(key),
            View::Steps => self.handle_steps_key(key)?,
            View::Counter => self.handle_counter_key(key),
        }
        Ok(())
    }

    fn handle_loading_key(&mut self, _key: KeyEvent) {
        if let Some(ref mut loading) = self.loading_state {
            loading.skip();
        }
        self.finish_loading();
    }

    fn toggle_view(&mut self) {
        self.status_message = None;
        self.current_view = match self.current_view {
            View::Counter => View::Steps,
            _ => View::Counter,
        };
    }

    /// Handle keys in the steps view
    fn handle_steps_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::F(2) => self.toggle_view(),
            KeyCode::Char('r') if ctrl => {
                self.store.dispatch(StepsAction::Reset);
                self.status_message = Some("Form reset".to_string());
            }
            KeyCode::Char('u') if ctrl => self.set_current_value(String::new()),
            KeyCode::Enter | KeyCode::Tab => self.go_forward()?,
            KeyCode::BackTab | KeyCode::Esc => self.go_backward(),
            KeyCode::Char(c) if !ctrl => {
                let mut value = self.steps_view().field().value().to_string();
                value.push(c);
                self.set_current_value(value);
            }
            KeyCode::Backspace => {
                let mut value = self.steps_view().field().value().to_string();
                if value.pop().is_some() {
                    self.set_current_value(value);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn set_current_value(&mut self, value: String) {
        let index = self.state().steps.current_step();
        self.status_message = None;
        self.store
            .dispatch(StepsAction::SetFieldValue { index, value });
    }

    /// Next or Submit, whichever the current step offers
    fn go_forward(&mut self) -> Result<()> {
        let view = self.steps_view();
        if view.can_submit() {
            self.submit()?;
        } else if view.can_advance() {
            self.store.dispatch(StepsAction::Advance);
            self.status_message = None;
        } else {
            let label = view.field().label().to_lowercase();
            self.status_message = Some(format!("Enter a valid {label} to continue"));
        }
        Ok(())
    }

    fn go_backward(&mut self) {
        if self.steps_view().can_retreat() {
            self.store.dispatch(StepsAction::Retreat);
            self.status_message = None;
        }
    }

    fn submit(&mut self) -> Result<()> {
        let fields = self.state().steps.fields().to_vec();
        let payload = serde_json::to_string(&fields)?;
        tracing::info!(field_count = fields.len(), "Form submitted");
        tracing::debug!(submission = %payload, "Submitted values");

        self.submission = Some(Submission {
            submitted_at: Local::now(),
            fields,
        });
        Ok(())
    }

    /// Any of Enter, Esc or Space closes the submission notice
    fn handle_submission_key(&mut self, key: KeyEvent) {
        if !matches!(
            key.code,
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')
        ) {
            return;
        }
        self.submission = None;
        if self.config.reset_after_submit() {
            self.store.dispatch(StepsAction::Reset);
            self.status_message = Some("Form reset".to_string());
        }
    }

    /// Handle keys in the counter view
    fn handle_counter_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return;
        }

        match key.code {
            KeyCode::F(2) | KeyCode::Esc => self.toggle_view(),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.store.dispatch(CounterAction::Increment);
            }
            KeyCode::Char('-') => {
                self.store.dispatch(CounterAction::Decrement);
            }
            KeyCode::Char('r') => {
                self.store.dispatch(CounterAction::Reset);
                self.counter_amount.clear();
            }
            KeyCode::Char('n') => self.toggle_amount_sign(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if self.counter_amount.trim_start_matches('-').len() < MAX_AMOUNT_DIGITS {
                    self.counter_amount.push(c);
                }
            }
            KeyCode::Backspace => {
                self.counter_amount.pop();
            }
            KeyCode::Enter => {
                let amount = self.counter_amount.parse::<i64>().unwrap_or(0);
                self.store.dispatch(CounterAction::IncrementByAmount(amount));
            }
            _ => {}
        }
    }

    /// `-` is taken by decrement, so the amount sign has its own key
    fn toggle_amount_sign(&mut self) {
        match self.counter_amount.strip_prefix('-') {
            Some(digits) => self.counter_amount = digits.to_string(),
            None => self.counter_amount.insert(0, '-'),
        }
    }
}
