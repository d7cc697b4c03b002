//! Application store
//!
//! The store owns every state slice. Views read through [`Store::state`] and
//! change things only by dispatching an [`Action`]; each dispatch runs the
//! matching slice reducer to completion before returning.

use super::counter::{CounterAction, CounterState};
use super::steps::{StepsAction, WizardState};
use uuid::Uuid;

/// Every action the store accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Steps(StepsAction),
    Counter(CounterAction),
}

impl From<StepsAction> for Action {
    fn from(action: StepsAction) -> Self {
        Action::Steps(action)
    }
}

impl From<CounterAction> for Action {
    fn from(action: CounterAction) -> Self {
        Action::Counter(action)
    }
}

/// All slices together
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RootState {
    pub steps: WizardState,
    pub counter: CounterState,
}

impl RootState {
    /// Run the slice reducer for `action`. Returns true if state changed.
    fn reduce(&mut self, action: &Action) -> bool {
        match action {
            Action::Steps(a) => self.steps.reduce(a),
            Action::Counter(a) => self.counter.reduce(a),
        }
    }
}

/// Receives a notification after every dispatch that changed state
#[cfg_attr(test, mockall::automock)]
pub trait StoreListener {
    fn on_change(&mut self, action: &Action, state: &RootState);
}

/// Handle returned by [`Store::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

/// Logs every effective action
#[derive(Debug, Default)]
pub struct TracingListener;

impl StoreListener for TracingListener {
    fn on_change(&mut self, action: &Action, state: &RootState) {
        tracing::debug!(
            ?action,
            current_step = state.steps.current_step(),
            counter = state.counter.value(),
            "State changed"
        );
    }
}

/// Owner of the root state
pub struct Store {
    state: RootState,
    version: u64,
    listeners: Vec<(SubscriptionId, Box<dyn StoreListener>)>,
}

impl Store {
    pub fn new(state: RootState) -> Self {
        Self {
            state,
            version: 0,
            listeners: Vec::new(),
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> &RootState {
        &self.state
    }

    /// Incremented once per dispatch that changed state
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply an action and notify listeners if anything changed
    pub fn dispatch(&mut self, action: impl Into<Action>) -> bool {
        let action = action.into();
        if !self.state.reduce(&action) {
            tracing::trace!(?action, "Action left state unchanged");
            return false;
        }

        self.version += 1;
        for (_, listener) in &mut self.listeners {
            listener.on_change(&action, &self.state);
        }
        true
    }

    /// Register a listener. Listeners run in subscription order.
    pub fn subscribe(&mut self, listener: Box<dyn StoreListener>) -> SubscriptionId {
        let id = SubscriptionId(Uuid::new_v4());
        self.listeners.push((id, listener));
        id
    }

    /// Remove a listener. Returns false if the id was unknown.
    #[allow(dead_code)]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub_id, _)| *sub_id != id);
        self.listeners.len() != before
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(RootState::default())
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("version", &self.version)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
